// Generates the slot-convention entry points for every 64-bit operation.
// One row per operation keeps the buffer wrappers from drifting out of sync
// with `src/int64.rs`.

use std::path::Path;

#[derive(Clone, Copy)]
enum Shape {
    Unary,
    Binary,
    Fallible,
}

const OPS_64: &[(&str, Shape)] = &[
    ("equal", Shape::Binary),
    ("greater_than", Shape::Binary),
    ("greater_than_unsigned", Shape::Binary),
    ("greater_than_or_equal", Shape::Binary),
    ("greater_than_or_equal_unsigned", Shape::Binary),
    ("add", Shape::Binary),
    ("subtract", Shape::Binary),
    ("multiply_low", Shape::Binary),
    ("multiply_high", Shape::Binary),
    ("multiply_high_unsigned", Shape::Binary),
    ("divide", Shape::Fallible),
    ("divide_unsigned", Shape::Fallible),
    ("remainder_signed", Shape::Fallible),
    ("remainder_unsigned", Shape::Fallible),
    ("and", Shape::Binary),
    ("or", Shape::Binary),
    ("xor", Shape::Binary),
    ("not", Shape::Unary),
    ("left_shift", Shape::Binary),
    ("right_shift", Shape::Binary),
    ("logic_right_shift", Shape::Binary),
];

pub fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let source = write_buffer_ops();
    std::fs::write(Path::new(&out_dir).join("_buffer_ops.rs"), source)
        .expect("failed to write generated buffer ops");
}

fn write_unary(op: &str, source: &mut String) {
    source.push_str(&format!(
        "
/// Slot form of [`int64::{op}`]: reads slot 0, writes slot 2.
pub fn {op}64(buffer: &mut OperandBuffer) {{
    let a = buffer.src1();
    let res = int64::{op}(a);
    buffer.set_dest(res);
}}
"
    ));
}

fn write_binary(op: &str, source: &mut String) {
    source.push_str(&format!(
        "
/// Slot form of [`int64::{op}`]: reads slots 0 and 1, writes slot 2.
pub fn {op}64(buffer: &mut OperandBuffer) {{
    let a = buffer.src1();
    let b = buffer.src2();
    let res = int64::{op}(a, b);
    buffer.set_dest(res);
}}
"
    ));
}

fn write_fallible(op: &str, source: &mut String) {
    source.push_str(&format!(
        "
/// Slot form of [`int64::{op}`]. Slot 2 is left untouched on error.
pub fn {op}64(buffer: &mut OperandBuffer) -> ArithResult<()> {{
    let a = buffer.src1();
    let b = buffer.src2();
    let res = int64::{op}(a, b)?;
    buffer.set_dest(res);
    Ok(())
}}
"
    ));
}

fn write_table(source: &mut String) {
    source.push_str("\n/// Every slot-convention entry point, by exported name.\n");
    source.push_str("pub static BUFFER_OPS: &[(&str, BufferOp)] = &[\n");
    for (op, shape) in OPS_64 {
        let variant = match shape {
            Shape::Fallible => "Fallible",
            Shape::Unary | Shape::Binary => "Total",
        };
        source.push_str(&format!("    (\"{op}64\", BufferOp::{variant}({op}64)),\n"));
    }
    source.push_str("];\n");
}

fn write_buffer_ops() -> String {
    let mut source = String::new();
    source.push_str("// generated by build.rs\n");

    for (op, shape) in OPS_64 {
        match shape {
            Shape::Unary => write_unary(op, &mut source),
            Shape::Binary => write_binary(op, &mut source),
            Shape::Fallible => write_fallible(op, &mut source),
        }
    }

    write_table(&mut source);
    source
}

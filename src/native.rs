//! Lowers the 32-bit catalogue to x86-64 so the library can be checked
//! against the processor's own instructions.
//!
//! Every operation becomes a small `sysv64` function `(edi, esi) -> eax`
//! inside one executable buffer. Shifts use `cl` directly, so the hardware
//! masks the count to five bits; `idiv` truncates toward zero.

use std::collections::HashMap;

use dynasmrt::{dynasm, x64::Assembler, AssemblyOffset, DynasmApi, ExecutableBuffer};
use thiserror::Error;

use crate::error::{ArithError, ArithResult};
use crate::ops::{Catalogue, OpRecord, INT32_OPS};
use crate::profiler::profile;

#[derive(Error, Debug)]
pub enum NativeError {
    #[error("failed to allocate executable memory")]
    Map(#[from] std::io::Error),
    #[error("failed to finalize executable buffer")]
    Finalize,
}

type NativeFn = extern "sysv64" fn(u32, u32) -> u32;

pub struct NativeOps {
    buffer: ExecutableBuffer,
    entries: HashMap<&'static str, (AssemblyOffset, usize)>,
}

// Emits the body for one operation, or returns false if it has no lowering.
fn lower(ops: &mut Assembler, name: &str) -> bool {
    match name {
        "equal" => {
            dynasm!(ops
                ; xor eax, eax
                ; cmp edi, esi
                ; sete al
            );
        }
        "greater_than" => {
            dynasm!(ops
                ; xor eax, eax
                ; cmp edi, esi
                ; setg al
            );
        }
        "greater_than_unsigned" => {
            dynasm!(ops
                ; xor eax, eax
                ; cmp edi, esi
                ; seta al
            );
        }
        "greater_than_or_equal" => {
            dynasm!(ops
                ; xor eax, eax
                ; cmp edi, esi
                ; setge al
            );
        }
        "greater_than_or_equal_unsigned" => {
            dynasm!(ops
                ; xor eax, eax
                ; cmp edi, esi
                ; setae al
            );
        }
        "add" => {
            dynasm!(ops
                ; mov eax, edi
                ; add eax, esi
            );
        }
        "subtract" => {
            dynasm!(ops
                ; mov eax, edi
                ; sub eax, esi
            );
        }
        "multiply_low" => {
            dynasm!(ops
                ; mov eax, edi
                ; imul eax, esi
            );
        }
        "multiply_high" => {
            dynasm!(ops
                ; mov eax, edi
                ; imul esi
                ; mov eax, edx
            );
        }
        "multiply_high_unsigned" => {
            dynasm!(ops
                ; mov eax, edi
                ; mul esi
                ; mov eax, edx
            );
        }
        "divide" => {
            dynasm!(ops
                ; mov eax, edi
                ; cdq
                ; idiv esi
            );
        }
        "divide_unsigned" => {
            dynasm!(ops
                ; mov eax, edi
                ; xor edx, edx
                ; div esi
            );
        }
        "remainder_signed" => {
            dynasm!(ops
                ; mov eax, edi
                ; cdq
                ; idiv esi
                ; mov eax, edx
            );
        }
        "remainder_unsigned" => {
            dynasm!(ops
                ; mov eax, edi
                ; xor edx, edx
                ; div esi
                ; mov eax, edx
            );
        }
        "and" => {
            dynasm!(ops
                ; mov eax, edi
                ; and eax, esi
            );
        }
        "or" => {
            dynasm!(ops
                ; mov eax, edi
                ; or eax, esi
            );
        }
        "xor" => {
            dynasm!(ops
                ; mov eax, edi
                ; xor eax, esi
            );
        }
        "not" => {
            dynasm!(ops
                ; mov eax, edi
                ; not eax
            );
        }
        "left_shift" => {
            dynasm!(ops
                ; mov eax, edi
                ; mov ecx, esi
                ; shl eax, cl
            );
        }
        "right_shift" => {
            dynasm!(ops
                ; mov eax, edi
                ; mov ecx, esi
                ; sar eax, cl
            );
        }
        "logic_right_shift" => {
            dynasm!(ops
                ; mov eax, edi
                ; mov ecx, esi
                ; shr eax, cl
            );
        }
        _ => return false,
    }
    dynasm!(ops
        ; ret
    );
    true
}

impl NativeOps {
    pub fn compile() -> Result<Self, NativeError> {
        profile("lower ops -> x86-64", || -> Result<Self, NativeError> {
            let mut ops = Assembler::new()?;
            let mut entries = HashMap::new();

            for record in INT32_OPS {
                let start = ops.offset();
                if !lower(&mut ops, record.name) {
                    log::warn!("no native lowering for {}", record.name);
                    continue;
                }
                let size = ops.offset().0 - start.0;
                log::debug!("lowered {} ({} bytes)", record.name, size);
                entries.insert(record.name, (start, size));
            }

            let buffer = ops.finalize().map_err(|_| NativeError::Finalize)?;
            Ok(NativeOps { buffer, entries })
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Machine code of one entry.
    pub fn code(&self, name: &str) -> Option<&[u8]> {
        let (start, size) = self.entries.get(name)?;
        Some(&self.buffer[start.0..start.0 + size])
    }

    /// Runs one entry. Inputs that would raise a divide error in hardware
    /// (zero divisor, `i32::MIN / -1`) are answered without executing it.
    pub fn call(&self, name: &str, a: u32, b: u32) -> Option<ArithResult<u32>> {
        let (start, _) = self.entries.get(name)?;
        let divides = matches!(
            name,
            "divide" | "divide_unsigned" | "remainder_signed" | "remainder_unsigned"
        );
        if divides && b == 0 {
            return Some(Err(ArithError::DivisionByZero));
        }
        if a == i32::MIN as u32 && b == u32::MAX {
            match name {
                "divide" => return Some(Ok(a)),
                "remainder_signed" => return Some(Ok(0)),
                _ => (),
            }
        }
        let f: NativeFn = unsafe { std::mem::transmute(self.buffer.ptr(*start)) };
        Some(Ok(f(a, b)))
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub name: &'static str,
    pub a: u32,
    pub b: u32,
    pub library: ArithResult<u32>,
    pub native: ArithResult<u32>,
}

/// Compares every record of `catalogue` that has a native entry over all
/// operand pairs. Records are matched to entries by their full-catalogue name.
pub fn cross_check(
    native: &NativeOps,
    catalogue: Catalogue,
    records: &[OpRecord<u32>],
    samples: &[(u32, u32)],
) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();
    for record in records {
        let entry = catalogue.canonical_name(record.name);
        for &(a, b) in samples {
            let native_res = match native.call(entry, a, b) {
                Some(res) => res,
                None => continue,
            };
            let library = record.apply(a, b);
            log::trace!("{} {:#x} {:#x}: {:?} / {:?}", record.name, a, b, library, native_res);
            if library != native_res {
                mismatches.push(Mismatch {
                    name: record.name,
                    a,
                    b,
                    library,
                    native: native_res,
                });
            }
        }
    }
    mismatches
}

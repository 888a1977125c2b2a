//! Prints the sample truth tables.
//!
//! Every operation is run against the same four operand pairs and rendered
//! as `a <symbol> b = result`, followed by the unary and shift blocks which
//! also show the bit patterns.

use std::io::{self, Write};

use colored::Colorize;

use crate::bits::pattern_string;
use crate::buffer;
use crate::error::ArithResult;
use crate::ops::{Catalogue, OpRecord, INT64_OPS};
use crate::types::IntWidth;

pub const SAMPLE_PAIRS: [(i32, i32); 4] = [(13, 5), (13, -5), (-13, 5), (-13, -5)];

const UNARY_SAMPLES: [i32; 2] = [13, -5];

const SHIFT_AMOUNT: i32 = 2;

// (header, operation name)
const SHIFT_BLOCKS: [(&str, &str); 3] = [
    ("left shift", "left_shift"),
    ("right shift", "right_shift"),
    ("logic right shift", "logic_right_shift"),
];

/// A fixed-width bit pattern the tables can print.
pub trait Lane: Copy {
    const WIDTH: IntWidth;
    fn from_sample(x: i32) -> Self;
    fn signed(self) -> i64;
    fn raw(self) -> u64;
}

impl Lane for u32 {
    const WIDTH: IntWidth = IntWidth::Int32;

    fn from_sample(x: i32) -> Self {
        x as u32
    }

    fn signed(self) -> i64 {
        self as i32 as i64
    }

    fn raw(self) -> u64 {
        self as u64
    }
}

impl Lane for u64 {
    const WIDTH: IntWidth = IntWidth::Int64;

    fn from_sample(x: i32) -> Self {
        x as i64 as u64
    }

    fn signed(self) -> i64 {
        self as i64
    }

    fn raw(self) -> u64 {
        self
    }
}

pub struct Options<'a> {
    /// Only render the block for this operation.
    pub only: Option<&'a str>,
    pub equality_block: bool,
}

impl Options<'_> {
    fn wants(&self, name: &str) -> bool {
        self.only.map_or(true, |only| only == name)
    }
}

fn bits<T: Lane>(x: T) -> String {
    pattern_string(x.raw(), T::WIDTH)
}

fn header(out: &mut impl Write, name: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "function:".cyan(), name.bold())
}

fn render_result<T: Lane>(res: ArithResult<T>) -> String {
    match res {
        Ok(x) => x.signed().to_string(),
        Err(e) => format!("{} {}", "error:".red(), e),
    }
}

fn render<T, F>(out: &mut impl Write, records: &[OpRecord<T>], eval: F, opts: &Options) -> io::Result<()>
where
    T: Lane + 'static,
    F: Fn(&OpRecord<T>, T, T) -> ArithResult<T>,
{
    for record in records.iter().filter(|r| !r.is_unary() && !r.is_shift()) {
        if !opts.wants(record.name) {
            continue;
        }
        header(out, record.name)?;
        for (a, b) in SAMPLE_PAIRS {
            let res = eval(record, T::from_sample(a), T::from_sample(b));
            writeln!(out, "  {} {} {} = {}", a, record.symbol, b, render_result(res))?;
        }
        writeln!(out)?;
    }

    if opts.equality_block && opts.only.is_none() {
        let find = |name: &str| records.iter().find(|r| r.name == name);
        let thirteen = T::from_sample(13);
        for (label, name) in [
            ("13 == 13", "equal"),
            ("13 >= 13", "greater_than_or_equal"),
            ("13 >= 13 (unsign)", "greater_than_or_equal_unsigned"),
        ] {
            if let Some(record) = find(name) {
                let res = eval(record, thirteen, thirteen);
                writeln!(out, "{}: {}", label, render_result(res))?;
            }
        }
        writeln!(out)?;
    }

    if let Some(record) = records.iter().find(|r| r.name == "not") {
        if opts.wants(record.name) {
            header(out, "not")?;
            for a in UNARY_SAMPLES {
                let x = T::from_sample(a);
                match eval(record, x, x) {
                    Ok(r) => writeln!(out, "not({}, {}) = {}, {}", a, bits(x), r.signed(), bits(r))?,
                    Err(e) => writeln!(out, "not({}, {}) = {}", a, bits(x), render_result::<T>(Err(e)))?,
                }
            }
            writeln!(out)?;
        }
    }

    for (title, name) in SHIFT_BLOCKS {
        let record = match records.iter().find(|r| r.name == name) {
            Some(record) if opts.wants(name) => record,
            _ => continue,
        };
        header(out, title)?;
        let n = T::from_sample(SHIFT_AMOUNT);
        for a in UNARY_SAMPLES {
            let x = T::from_sample(a);
            match eval(record, x, n) {
                Ok(r) => writeln!(
                    out,
                    "{} {} ({}, {}) = {}, {}",
                    title,
                    SHIFT_AMOUNT,
                    a,
                    bits(x),
                    r.signed(),
                    bits(r)
                )?,
                Err(e) => writeln!(out, "{} {} ({}) = {}", title, SHIFT_AMOUNT, a, render_result::<T>(Err(e)))?,
            }
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Renders a 32-bit catalogue by calling the operations directly.
pub fn render_table(out: &mut impl Write, catalogue: Catalogue, only: Option<&str>) -> io::Result<()> {
    let opts = Options {
        only,
        equality_block: catalogue == Catalogue::Full,
    };
    render(out, catalogue.ops(), |record, a, b| record.apply(a, b), &opts)
}

/// Renders the 64-bit catalogue through the slot-convention entry points.
pub fn render_table64(out: &mut impl Write, only: Option<&str>) -> io::Result<()> {
    let opts = Options {
        only,
        equality_block: true,
    };
    render(
        out,
        INT64_OPS,
        |record, a, b| match buffer::lookup(record.name) {
            Some(entry) => buffer::eval(entry, a, b),
            None => record.apply(a, b),
        },
        &opts,
    )
}

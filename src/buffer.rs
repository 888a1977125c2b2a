//! The four-slot operand/result buffer.
//!
//! Hosts that cannot pass 64-bit values across a call boundary hand over a
//! `[u64; 4]` instead:
//!
//! ```text
//! [dest-ext, dest, src2, src1]  <- content
//!  3         2     1     0      <- index
//! ```
//!
//! An entry point reads slot 0 (and slot 1 for binary operations) and
//! writes slot 2. Slot 3 is reserved for results wider than 64 bits and is
//! never touched.

use crate::error::ArithResult;
use crate::int64;

pub const SRC1: usize = 0;
pub const SRC2: usize = 1;
pub const DEST: usize = 2;
pub const DEST_EXT: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperandBuffer([u64; 4]);

impl OperandBuffer {
    pub fn new(src1: u64, src2: u64) -> Self {
        let mut slots = [0; 4];
        slots[SRC1] = src1;
        slots[SRC2] = src2;
        Self(slots)
    }

    pub fn from_slots(slots: [u64; 4]) -> Self {
        Self(slots)
    }

    pub fn slots(&self) -> [u64; 4] {
        self.0
    }

    pub fn src1(&self) -> u64 {
        self.0[SRC1]
    }

    pub fn src2(&self) -> u64 {
        self.0[SRC2]
    }

    pub fn dest(&self) -> u64 {
        self.0[DEST]
    }

    pub fn dest_ext(&self) -> u64 {
        self.0[DEST_EXT]
    }

    fn set_dest(&mut self, x: u64) {
        self.0[DEST] = x;
    }
}

impl From<[u64; 4]> for OperandBuffer {
    fn from(slots: [u64; 4]) -> Self {
        Self::from_slots(slots)
    }
}

#[derive(Clone, Copy)]
pub enum BufferOp {
    Total(fn(&mut OperandBuffer)),
    Fallible(fn(&mut OperandBuffer) -> ArithResult<()>),
}

impl BufferOp {
    pub fn call(&self, buffer: &mut OperandBuffer) -> ArithResult<()> {
        match self {
            BufferOp::Total(f) => {
                f(buffer);
                Ok(())
            }
            BufferOp::Fallible(f) => f(buffer),
        }
    }
}

/// Runs one entry point against a fresh buffer and hands back slot 2.
pub fn eval(op: BufferOp, src1: u64, src2: u64) -> ArithResult<u64> {
    let mut buffer = OperandBuffer::new(src1, src2);
    op.call(&mut buffer)?;
    Ok(buffer.dest())
}

/// Finds the entry point for a 64-bit operation name, e.g. `add` -> `add64`.
pub fn lookup(op: &str) -> Option<BufferOp> {
    BUFFER_OPS
        .iter()
        .find(|(name, _)| name.strip_suffix("64") == Some(op))
        .map(|(_, entry)| *entry)
}

include!(concat!(env!("OUT_DIR"), "/_buffer_ops.rs"));

//! Fixed-width integer operations over raw bit patterns.
//!
//! The same 32 or 64 bits can be read as a signed (two's-complement) or an
//! unsigned number. [`int32`] and [`int64`] expose one function per
//! operation, with separate entries wherever the two readings disagree.
//! [`buffer`] offers the 64-bit set through a four-slot operand buffer for
//! hosts that cannot pass 64-bit values directly.

pub mod bits;
pub mod buffer;
pub mod demo;
pub mod error;
pub mod int32;
pub mod int64;
pub mod ops;
pub mod profiler;
pub mod types;

#[cfg(target_arch = "x86_64")]
pub mod disassemble;
#[cfg(target_arch = "x86_64")]
pub mod native;

pub use buffer::OperandBuffer;
pub use error::{ArithError, ArithResult};
pub use ops::{Catalogue, OpRecord};

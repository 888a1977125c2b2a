//! The reduced operator set: one entry per operator with a single fixed
//! interpretation. `multiply` keeps the low word, `divide` and `remain`
//! treat both operands as unsigned.

pub use super::{
    add, and, divide_unsigned as divide, left_shift, logic_right_shift, multiply_low as multiply,
    not, or, remainder_unsigned as remain, right_shift, subtract, xor,
};

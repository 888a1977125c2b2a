//! 64-bit operations with direct signatures.
//!
//! Same conventions as [`crate::int32`] at double width. The slot-based
//! calling convention lives in [`crate::buffer`] and forwards here.

use crate::error::{ArithError, ArithResult};

fn flag(x: bool) -> u64 {
    x as u64
}

pub fn equal(a: u64, b: u64) -> u64 {
    flag(a == b)
}

pub fn greater_than(a: u64, b: u64) -> u64 {
    flag(a as i64 > b as i64)
}

pub fn greater_than_or_equal(a: u64, b: u64) -> u64 {
    flag(a as i64 >= b as i64)
}

pub fn greater_than_unsigned(a: u64, b: u64) -> u64 {
    flag(a > b)
}

pub fn greater_than_or_equal_unsigned(a: u64, b: u64) -> u64 {
    flag(a >= b)
}

pub fn add(a: u64, b: u64) -> u64 {
    a.wrapping_add(b)
}

pub fn subtract(a: u64, b: u64) -> u64 {
    a.wrapping_sub(b)
}

pub fn multiply_low(a: u64, b: u64) -> u64 {
    a.wrapping_mul(b)
}

pub fn multiply_high(a: u64, b: u64) -> u64 {
    let wide = (a as i64 as i128) * (b as i64 as i128);
    (wide >> 64) as u64
}

pub fn multiply_high_unsigned(a: u64, b: u64) -> u64 {
    let wide = (a as u128) * (b as u128);
    (wide >> 64) as u64
}

pub fn divide(a: u64, b: u64) -> ArithResult<u64> {
    if b == 0 {
        return Err(ArithError::DivisionByZero);
    }
    Ok((a as i64).wrapping_div(b as i64) as u64)
}

pub fn divide_unsigned(a: u64, b: u64) -> ArithResult<u64> {
    a.checked_div(b).ok_or(ArithError::DivisionByZero)
}

pub fn remainder_signed(a: u64, b: u64) -> ArithResult<u64> {
    if b == 0 {
        return Err(ArithError::DivisionByZero);
    }
    Ok((a as i64).wrapping_rem(b as i64) as u64)
}

pub fn remainder_unsigned(a: u64, b: u64) -> ArithResult<u64> {
    a.checked_rem(b).ok_or(ArithError::DivisionByZero)
}

pub fn and(a: u64, b: u64) -> u64 {
    a & b
}

pub fn or(a: u64, b: u64) -> u64 {
    a | b
}

pub fn xor(a: u64, b: u64) -> u64 {
    a ^ b
}

pub fn not(a: u64) -> u64 {
    !a
}

// Shift counts arrive as full 64-bit slots; only the low six bits matter.
fn count(b: u64) -> u32 {
    (b & 63) as u32
}

pub fn left_shift(a: u64, b: u64) -> u64 {
    a << count(b)
}

pub fn right_shift(a: u64, b: u64) -> u64 {
    ((a as i64) >> count(b)) as u64
}

pub fn logic_right_shift(a: u64, b: u64) -> u64 {
    a >> count(b)
}

//! 32-bit operations over raw bit patterns.
//!
//! Every operand and result is a `u32`. Operations that care about sign
//! reinterpret the bits as `i32` internally; comparisons return `1` or `0`.
//! Arithmetic wraps, shift counts are taken modulo 32.

use crate::error::{ArithError, ArithResult};

pub mod math;

fn flag(x: bool) -> u32 {
    x as u32
}

pub fn equal(a: u32, b: u32) -> u32 {
    flag(a == b)
}

pub fn greater_than(a: u32, b: u32) -> u32 {
    flag(a as i32 > b as i32)
}

pub fn greater_than_or_equal(a: u32, b: u32) -> u32 {
    flag(a as i32 >= b as i32)
}

pub fn greater_than_unsigned(a: u32, b: u32) -> u32 {
    flag(a > b)
}

pub fn greater_than_or_equal_unsigned(a: u32, b: u32) -> u32 {
    flag(a >= b)
}

pub fn add(a: u32, b: u32) -> u32 {
    a.wrapping_add(b)
}

pub fn subtract(a: u32, b: u32) -> u32 {
    a.wrapping_sub(b)
}

pub fn multiply_low(a: u32, b: u32) -> u32 {
    a.wrapping_mul(b)
}

/// High word of the signed 64-bit product.
pub fn multiply_high(a: u32, b: u32) -> u32 {
    let wide = (a as i32 as i64) * (b as i32 as i64);
    (wide >> 32) as u32
}

pub fn multiply_high_unsigned(a: u32, b: u32) -> u32 {
    let wide = (a as u64) * (b as u64);
    (wide >> 32) as u32
}

/// Signed division truncating toward zero. `i32::MIN / -1` wraps back to `i32::MIN`.
pub fn divide(a: u32, b: u32) -> ArithResult<u32> {
    if b == 0 {
        return Err(ArithError::DivisionByZero);
    }
    Ok((a as i32).wrapping_div(b as i32) as u32)
}

pub fn divide_unsigned(a: u32, b: u32) -> ArithResult<u32> {
    a.checked_div(b).ok_or(ArithError::DivisionByZero)
}

/// Remainder with the sign of the dividend. `i32::MIN % -1` is `0`.
pub fn remainder_signed(a: u32, b: u32) -> ArithResult<u32> {
    if b == 0 {
        return Err(ArithError::DivisionByZero);
    }
    Ok((a as i32).wrapping_rem(b as i32) as u32)
}

pub fn remainder_unsigned(a: u32, b: u32) -> ArithResult<u32> {
    a.checked_rem(b).ok_or(ArithError::DivisionByZero)
}

pub fn and(a: u32, b: u32) -> u32 {
    a & b
}

pub fn or(a: u32, b: u32) -> u32 {
    a | b
}

pub fn xor(a: u32, b: u32) -> u32 {
    a ^ b
}

pub fn not(a: u32) -> u32 {
    !a
}

pub fn left_shift(a: u32, b: u32) -> u32 {
    a.wrapping_shl(b)
}

/// Arithmetic shift, the sign bit is copied into the vacated bits.
pub fn right_shift(a: u32, b: u32) -> u32 {
    (a as i32).wrapping_shr(b) as u32
}

pub fn logic_right_shift(a: u32, b: u32) -> u32 {
    a.wrapping_shr(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{bits32, signed32};
    use proptest::prelude::*;

    #[test]
    fn comparisons() {
        assert_eq!(equal(1, 1), 1);
        assert_eq!(equal(11, 10), 0);
        assert_eq!(greater_than(11, 10), 1);
        assert_eq!(greater_than(bits32(-1), 10), 0);
        assert_eq!(greater_than_unsigned(bits32(-1), 10), 1);
        assert_eq!(greater_than_or_equal(13, 13), 1);
        assert_eq!(greater_than_or_equal_unsigned(13, 13), 1);
        assert_eq!(greater_than_or_equal(bits32(-13), 13), 0);
        assert_eq!(greater_than_or_equal_unsigned(bits32(-13), 13), 1);
    }

    #[test]
    fn sample_arithmetic() {
        assert_eq!(add(13, bits32(-5)), 8);
        assert_eq!(signed32(add(bits32(-13), 5)), -8);
        assert_eq!(signed32(subtract(bits32(-13), 5)), -18);
        assert_eq!(signed32(multiply_low(13, bits32(-5))), -65);
        assert_eq!(multiply_low(bits32(-13), bits32(-5)), 65);
    }

    #[test]
    fn multiply_high_words() {
        assert_eq!(multiply_high(13, 5), 0);
        assert_eq!(multiply_high(13, bits32(-5)), bits32(-1));
        assert_eq!(multiply_high(bits32(-13), 5), bits32(-1));
        assert_eq!(multiply_high(bits32(-13), bits32(-5)), 0);

        assert_eq!(multiply_high_unsigned(13, 5), 0);
        assert_eq!(multiply_high_unsigned(13, bits32(-5)), 12);
        assert_eq!(multiply_high_unsigned(u32::MAX, u32::MAX), 0xffff_fffe);
        assert_eq!(multiply_high(0x8000_0000, 0x8000_0000), 0x4000_0000);
    }

    #[test]
    fn division_samples() {
        assert_eq!(divide(13, 5), Ok(2));
        assert_eq!(divide(13, bits32(-5)), Ok(bits32(-2)));
        assert_eq!(divide(bits32(-13), 5), Ok(bits32(-2)));
        assert_eq!(divide(bits32(-13), bits32(-5)), Ok(2));

        assert_eq!(divide_unsigned(13, bits32(-5)), Ok(0));
        assert_eq!(divide_unsigned(bits32(-13), 5), Ok(858993456));

        assert_eq!(remainder_signed(13, bits32(-5)), Ok(3));
        assert_eq!(remainder_signed(bits32(-13), 5), Ok(bits32(-3)));
        assert_eq!(remainder_unsigned(13, bits32(-5)), Ok(13));
        assert_eq!(remainder_unsigned(bits32(-13), bits32(-5)), Ok(bits32(-13)));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(divide(1, 0), Err(ArithError::DivisionByZero));
        assert_eq!(divide_unsigned(1, 0), Err(ArithError::DivisionByZero));
        assert_eq!(remainder_signed(1, 0), Err(ArithError::DivisionByZero));
        assert_eq!(remainder_unsigned(1, 0), Err(ArithError::DivisionByZero));
        assert_eq!(divide(0, 0), Err(ArithError::DivisionByZero));
    }

    #[test]
    fn signed_division_overflow_wraps() {
        let min = bits32(i32::MIN);
        assert_eq!(divide(min, bits32(-1)), Ok(min));
        assert_eq!(remainder_signed(min, bits32(-1)), Ok(0));
    }

    #[test]
    fn bitwise_samples() {
        assert_eq!(and(13, bits32(-5)), 9);
        assert_eq!(signed32(or(bits32(-13), 5)), -9);
        assert_eq!(signed32(xor(13, bits32(-5))), -10);
        assert_eq!(signed32(not(13)), -14);
        assert_eq!(not(bits32(-5)), 4);
    }

    #[test]
    fn shift_samples() {
        assert_eq!(left_shift(13, 2), 52);
        assert_eq!(left_shift(bits32(-5), 2), bits32(-20));
        assert_eq!(right_shift(13, 2), 3);
        assert_eq!(right_shift(bits32(-5), 2), bits32(-2));
        assert_eq!(logic_right_shift(13, 2), 3);
        assert_eq!(logic_right_shift(bits32(-5), 2), 1073741822);
    }

    #[test]
    fn shift_counts_wrap_at_32() {
        assert_eq!(left_shift(1, 32), 1);
        assert_eq!(left_shift(1, 33), 2);
        assert_eq!(right_shift(bits32(-8), 33), bits32(-4));
        assert_eq!(logic_right_shift(0x8000_0000, 63), 1);
        assert_eq!(logic_right_shift(0x8000_0000, u32::MAX), 1);
    }

    proptest! {
        #[test]
        fn not_is_minus_one_minus_x(x in any::<u32>()) {
            prop_assert_eq!(signed32(not(x)), (-1i32).wrapping_sub(signed32(x)));
        }

        #[test]
        fn shift_round_trip_clears_top_bits(x in any::<u32>(), n in 0u32..32) {
            let mask = if n == 0 { u32::MAX } else { (1u32 << (32 - n)) - 1 };
            prop_assert_eq!(logic_right_shift(left_shift(x, n), n), x & mask);
        }

        #[test]
        fn signed_division_identity(a in any::<u32>(), b in 1u32..=u32::MAX) {
            let q = divide(a, b).unwrap();
            let r = remainder_signed(a, b).unwrap();
            prop_assert_eq!(add(multiply_low(q, b), r), a);
            prop_assert!(r == 0 || (signed32(r) < 0) == (signed32(a) < 0));
        }

        #[test]
        fn unsigned_division_identity(a in any::<u32>(), b in 1u32..=u32::MAX) {
            let q = divide_unsigned(a, b).unwrap();
            let r = remainder_unsigned(a, b).unwrap();
            prop_assert!(r < b);
            prop_assert_eq!(q as u64 * b as u64 + r as u64, a as u64);
        }

        #[test]
        fn product_halves_recombine(a in any::<u32>(), b in any::<u32>()) {
            let unsigned = ((multiply_high_unsigned(a, b) as u64) << 32) | multiply_low(a, b) as u64;
            prop_assert_eq!(unsigned, a as u64 * b as u64);
            let signed = (((multiply_high(a, b) as u64) << 32) | multiply_low(a, b) as u64) as i64;
            prop_assert_eq!(signed, signed32(a) as i64 * signed32(b) as i64);
        }
    }
}

//! Ordered operation tables: one record per operation carrying its
//! exported name, the operator symbol used when printing, and the function.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::ArithResult;
use crate::types::IntSign;
use crate::{int32, int64};

#[derive(Clone, Copy)]
pub enum OpFn<T> {
    Unary(fn(T) -> T),
    Binary(fn(T, T) -> T),
    Fallible(fn(T, T) -> ArithResult<T>),
}

#[derive(Clone, Copy)]
pub struct OpRecord<T: 'static> {
    pub name: &'static str,
    pub symbol: &'static str,
    pub sign: IntSign,
    pub op: OpFn<T>,
}

impl<T: Copy + 'static> OpRecord<T> {
    /// Evaluates the operation; unary operations ignore `b`.
    pub fn apply(&self, a: T, b: T) -> ArithResult<T> {
        match self.op {
            OpFn::Unary(f) => Ok(f(a)),
            OpFn::Binary(f) => Ok(f(a, b)),
            OpFn::Fallible(f) => f(a, b),
        }
    }

    pub fn is_unary(&self) -> bool {
        matches!(self.op, OpFn::Unary(_))
    }

    pub fn is_shift(&self) -> bool {
        self.name.ends_with("shift")
    }
}

const fn rec<T: 'static>(name: &'static str, symbol: &'static str, sign: IntSign, op: OpFn<T>) -> OpRecord<T> {
    OpRecord { name, symbol, sign, op }
}

use IntSign::{Agnostic, Signed, Unsigned};

pub static INT32_OPS: &[OpRecord<u32>] = &[
    rec("equal", "==", Agnostic, OpFn::Binary(int32::equal)),
    rec("greater_than", ">", Signed, OpFn::Binary(int32::greater_than)),
    rec("greater_than_unsigned", "> (unsig)", Unsigned, OpFn::Binary(int32::greater_than_unsigned)),
    rec("greater_than_or_equal", ">=", Signed, OpFn::Binary(int32::greater_than_or_equal)),
    rec("greater_than_or_equal_unsigned", ">= (unsig)", Unsigned, OpFn::Binary(int32::greater_than_or_equal_unsigned)),
    rec("add", "+", Agnostic, OpFn::Binary(int32::add)),
    rec("subtract", "-", Agnostic, OpFn::Binary(int32::subtract)),
    rec("multiply_low", "* (low)", Agnostic, OpFn::Binary(int32::multiply_low)),
    rec("multiply_high", "* (high)", Signed, OpFn::Binary(int32::multiply_high)),
    rec("multiply_high_unsigned", "* (high unsig)", Unsigned, OpFn::Binary(int32::multiply_high_unsigned)),
    rec("divide", "/", Signed, OpFn::Fallible(int32::divide)),
    rec("divide_unsigned", "/ (unsig)", Unsigned, OpFn::Fallible(int32::divide_unsigned)),
    rec("remainder_signed", "%", Signed, OpFn::Fallible(int32::remainder_signed)),
    rec("remainder_unsigned", "% (unsig)", Unsigned, OpFn::Fallible(int32::remainder_unsigned)),
    rec("and", "&", Agnostic, OpFn::Binary(int32::and)),
    rec("or", "|", Agnostic, OpFn::Binary(int32::or)),
    rec("xor", "^", Agnostic, OpFn::Binary(int32::xor)),
    rec("not", "~", Agnostic, OpFn::Unary(int32::not)),
    rec("left_shift", "<<", Agnostic, OpFn::Binary(int32::left_shift)),
    rec("right_shift", ">>", Signed, OpFn::Binary(int32::right_shift)),
    rec("logic_right_shift", ">>>", Unsigned, OpFn::Binary(int32::logic_right_shift)),
];

pub static MATH32_OPS: &[OpRecord<u32>] = &[
    rec("add", "+", Agnostic, OpFn::Binary(int32::math::add)),
    rec("subtract", "-", Agnostic, OpFn::Binary(int32::math::subtract)),
    rec("multiply", "*", Agnostic, OpFn::Binary(int32::math::multiply)),
    rec("divide", "/", Unsigned, OpFn::Fallible(int32::math::divide)),
    rec("remain", "%", Unsigned, OpFn::Fallible(int32::math::remain)),
    rec("and", "&", Agnostic, OpFn::Binary(int32::math::and)),
    rec("or", "|", Agnostic, OpFn::Binary(int32::math::or)),
    rec("xor", "^", Agnostic, OpFn::Binary(int32::math::xor)),
    rec("not", "~", Agnostic, OpFn::Unary(int32::math::not)),
    rec("left_shift", "<<", Agnostic, OpFn::Binary(int32::math::left_shift)),
    rec("right_shift", ">>", Signed, OpFn::Binary(int32::math::right_shift)),
    rec("logic_right_shift", ">>>", Unsigned, OpFn::Binary(int32::math::logic_right_shift)),
];

pub static INT64_OPS: &[OpRecord<u64>] = &[
    rec("equal", "==", Agnostic, OpFn::Binary(int64::equal)),
    rec("greater_than", ">", Signed, OpFn::Binary(int64::greater_than)),
    rec("greater_than_unsigned", "> (unsig)", Unsigned, OpFn::Binary(int64::greater_than_unsigned)),
    rec("greater_than_or_equal", ">=", Signed, OpFn::Binary(int64::greater_than_or_equal)),
    rec("greater_than_or_equal_unsigned", ">= (unsig)", Unsigned, OpFn::Binary(int64::greater_than_or_equal_unsigned)),
    rec("add", "+", Agnostic, OpFn::Binary(int64::add)),
    rec("subtract", "-", Agnostic, OpFn::Binary(int64::subtract)),
    rec("multiply_low", "* (low)", Agnostic, OpFn::Binary(int64::multiply_low)),
    rec("multiply_high", "* (high)", Signed, OpFn::Binary(int64::multiply_high)),
    rec("multiply_high_unsigned", "* (high unsig)", Unsigned, OpFn::Binary(int64::multiply_high_unsigned)),
    rec("divide", "/", Signed, OpFn::Fallible(int64::divide)),
    rec("divide_unsigned", "/ (unsig)", Unsigned, OpFn::Fallible(int64::divide_unsigned)),
    rec("remainder_signed", "%", Signed, OpFn::Fallible(int64::remainder_signed)),
    rec("remainder_unsigned", "% (unsig)", Unsigned, OpFn::Fallible(int64::remainder_unsigned)),
    rec("and", "&", Agnostic, OpFn::Binary(int64::and)),
    rec("or", "|", Agnostic, OpFn::Binary(int64::or)),
    rec("xor", "^", Agnostic, OpFn::Binary(int64::xor)),
    rec("not", "~", Agnostic, OpFn::Unary(int64::not)),
    rec("left_shift", "<<", Agnostic, OpFn::Binary(int64::left_shift)),
    rec("right_shift", ">>", Signed, OpFn::Binary(int64::right_shift)),
    rec("logic_right_shift", ">>>", Unsigned, OpFn::Binary(int64::logic_right_shift)),
];

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Catalogue {
    /// Every 32-bit operation, with explicit signed and unsigned entries.
    Full,
    /// The reduced 32-bit operator set.
    Math,
}

impl Catalogue {
    pub fn ops(self) -> &'static [OpRecord<u32>] {
        match self {
            Catalogue::Full => INT32_OPS,
            Catalogue::Math => MATH32_OPS,
        }
    }

    /// Name of the full-catalogue operation that `name` computes.
    pub fn canonical_name(self, name: &'static str) -> &'static str {
        match (self, name) {
            (Catalogue::Math, "multiply") => "multiply_low",
            (Catalogue::Math, "divide") => "divide_unsigned",
            (Catalogue::Math, "remain") => "remainder_unsigned",
            _ => name,
        }
    }
}

static INDEX32: Lazy<HashMap<Catalogue, HashMap<&'static str, &'static OpRecord<u32>>>> =
    Lazy::new(|| {
        let mut m = HashMap::new();
        for catalogue in [Catalogue::Full, Catalogue::Math] {
            let by_name = catalogue.ops().iter().map(|record| (record.name, record)).collect();
            m.insert(catalogue, by_name);
        }
        m
    });

static INDEX64: Lazy<HashMap<&'static str, &'static OpRecord<u64>>> =
    Lazy::new(|| INT64_OPS.iter().map(|record| (record.name, record)).collect());

pub fn lookup32(catalogue: Catalogue, name: &str) -> Option<&'static OpRecord<u32>> {
    INDEX32.get(&catalogue)?.get(name).copied()
}

pub fn lookup64(name: &str) -> Option<&'static OpRecord<u64>> {
    INDEX64.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArithError;
    use crate::types::bits32;

    #[test]
    fn table_sizes() {
        assert_eq!(INT32_OPS.len(), 21);
        assert_eq!(MATH32_OPS.len(), 12);
        assert_eq!(INT64_OPS.len(), 21);
    }

    #[test]
    fn names_are_unique() {
        for table in [INT32_OPS, MATH32_OPS] {
            let mut names: Vec<_> = table.iter().map(|r| r.name).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), table.len());
        }
    }

    #[test]
    fn lookups() {
        let add = lookup32(Catalogue::Full, "add").unwrap();
        assert_eq!(add.symbol, "+");
        assert_eq!(add.apply(13, bits32(-5)), Ok(8));

        let remain = lookup32(Catalogue::Math, "remain").unwrap();
        assert_eq!(remain.sign, IntSign::Unsigned);
        assert_eq!(remain.apply(13, bits32(-5)), Ok(13));
        assert_eq!(remain.apply(13, 0), Err(ArithError::DivisionByZero));

        assert!(lookup32(Catalogue::Math, "multiply_high").is_none());
        assert!(lookup32(Catalogue::Full, "remain").is_none());

        let not = lookup64("not").unwrap();
        assert!(not.is_unary());
        assert_eq!(not.apply(13, 999), Ok(!13u64));
        assert!(lookup64("nand").is_none());
    }

    #[test]
    fn math_aliases_resolve_to_full_entries() {
        for record in MATH32_OPS {
            let name = Catalogue::Math.canonical_name(record.name);
            let full = lookup32(Catalogue::Full, name).unwrap();
            for (a, b) in [(13, 5), (bits32(-13), 5), (13, bits32(-5))] {
                assert_eq!(record.apply(a, b), full.apply(a, b), "{} -> {}", record.name, name);
            }
        }
        assert_eq!(Catalogue::Math.canonical_name("divide"), "divide_unsigned");
        assert_eq!(Catalogue::Full.canonical_name("divide"), "divide");
    }

    #[test]
    fn widths_agree_on_samples() {
        // Every 32-bit operation sign-extended to 64 bits should agree with
        // the 64-bit operation on the low word, apart from the high-word products.
        let samples = [13i32, 5, -13, -5];
        for r32 in INT32_OPS {
            if r32.name.starts_with("multiply_high") || r32.name.ends_with("shift") {
                continue;
            }
            let r64 = lookup64(r32.name).unwrap();
            for a in samples {
                for b in samples {
                    let narrow = r32.apply(a as u32, b as u32).map(|x| x as i32 as i64);
                    let wide = r64.apply(a as i64 as u64, b as i64 as u64).map(|x| x as i64);
                    if r32.sign == IntSign::Unsigned && (a < 0 || b < 0) {
                        continue;
                    }
                    assert_eq!(narrow, wide, "{} {} {}", a, r32.symbol, b);
                }
            }
        }
    }
}

// SRT - srt-math
// Module: Scalar Operations
// SW-REQ-ID: REQ_MATH_001
//
// Copyright (c) 2025 The SRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Checked arithmetic and comparisons over `i64` and `u8`.
//!
//! Arithmetic never wraps silently: a result that cannot be represented is
//! reported as [`OverflowError`]. The comparison predicates are all built
//! from the two primitives [`i64_lt`] and [`i64_gt`]; equality is "neither
//! less-than nor greater-than".

use alloc::format;

use srt_error::{ByteOverflowError, OverflowError};

/// Smallest value accepted by [`u8_from_i64`]
pub const BYTE_MIN: i64 = 0;
/// Largest value accepted by [`u8_from_i64`]
pub const BYTE_MAX: i64 = 255;

/// Checked `a + b`.
///
/// # Errors
///
/// Returns [`OverflowError`] if the sum does not fit in `i64`.
pub fn i64_add(a: i64, b: i64) -> Result<i64, OverflowError> {
    a.checked_add(b)
        .ok_or_else(|| OverflowError::new(format!("i64 addition overflow: {a} + {b}")))
}

/// Checked `a - b`.
///
/// # Errors
///
/// Returns [`OverflowError`] if the difference does not fit in `i64`.
pub fn i64_sub(a: i64, b: i64) -> Result<i64, OverflowError> {
    a.checked_sub(b)
        .ok_or_else(|| OverflowError::new(format!("i64 subtraction overflow: {a} - {b}")))
}

/// Checked `a * b`.
///
/// # Errors
///
/// Returns [`OverflowError`] if the product does not fit in `i64`.
pub fn i64_mul(a: i64, b: i64) -> Result<i64, OverflowError> {
    a.checked_mul(b)
        .ok_or_else(|| OverflowError::new(format!("i64 multiplication overflow: {a} * {b}")))
}

/// Checked `-a`.
///
/// # Errors
///
/// Returns [`OverflowError`] for `i64::MIN`.
pub fn i64_neg(a: i64) -> Result<i64, OverflowError> {
    a.checked_neg()
        .ok_or_else(|| OverflowError::new(format!("i64 negation overflow: -({a})")))
}

/// Primitive `a < b`
#[must_use]
pub const fn i64_lt(a: i64, b: i64) -> bool {
    a < b
}

/// Primitive `a > b`
#[must_use]
pub const fn i64_gt(a: i64, b: i64) -> bool {
    a > b
}

/// `a == b`, defined as neither `a < b` nor `a > b`
#[must_use]
pub const fn i64_eq(a: i64, b: i64) -> bool {
    !i64_lt(a, b) && !i64_gt(a, b)
}

/// `a != b`
#[must_use]
pub const fn i64_ne(a: i64, b: i64) -> bool {
    i64_lt(a, b) || i64_gt(a, b)
}

/// `a >= b`
#[must_use]
pub const fn i64_gteq(a: i64, b: i64) -> bool {
    !i64_lt(a, b)
}

/// `a <= b`
#[must_use]
pub const fn i64_lteq(a: i64, b: i64) -> bool {
    !i64_gt(a, b)
}

/// Primitive `a < b` over bytes
#[must_use]
pub const fn u8_lt(a: u8, b: u8) -> bool {
    a < b
}

/// Primitive `a > b` over bytes
#[must_use]
pub const fn u8_gt(a: u8, b: u8) -> bool {
    a > b
}

/// `a == b` over bytes, defined as neither `a < b` nor `a > b`
#[must_use]
pub const fn u8_eq(a: u8, b: u8) -> bool {
    !u8_lt(a, b) && !u8_gt(a, b)
}

/// Narrow an `i64` to a byte.
///
/// # Errors
///
/// Returns [`ByteOverflowError`] when `value` is negative or exceeds 255.
pub fn u8_from_i64(value: i64) -> Result<u8, ByteOverflowError> {
    if i64_lt(value, BYTE_MIN) || i64_gt(value, BYTE_MAX) {
        return Err(ByteOverflowError::new(format!(
            "value {value} does not fit in u8 ({BYTE_MIN}..={BYTE_MAX})"
        )));
    }
    Ok(value as u8)
}

/// Widen a byte to `i64`
#[must_use]
pub const fn u8_to_i64(value: u8) -> i64 {
    value as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_reports_overflow_with_operands() {
        assert_eq!(i64_add(2, 3), Ok(5));
        let err = i64_add(i64::MAX, 1).unwrap_err();
        assert_eq!(err.message(), "i64 addition overflow: 9223372036854775807 + 1");
    }

    #[test]
    fn sub_and_mul_are_checked() {
        assert_eq!(i64_sub(-5, 5), Ok(-10));
        assert!(i64_sub(i64::MIN, 1).is_err());
        assert_eq!(i64_mul(-4, 8), Ok(-32));
        assert!(i64_mul(i64::MAX / 2 + 1, 2).is_err());
    }

    #[test]
    fn neg_rejects_min() {
        assert_eq!(i64_neg(7), Ok(-7));
        assert!(i64_neg(i64::MIN).is_err());
    }

    #[test]
    fn derived_predicates() {
        assert!(i64_eq(3, 3));
        assert!(!i64_eq(3, 4));
        assert!(i64_ne(3, 4));
        assert!(i64_gteq(4, 4) && i64_gteq(5, 4) && !i64_gteq(3, 4));
        assert!(i64_lteq(4, 4) && i64_lteq(3, 4) && !i64_lteq(5, 4));
        assert!(u8_eq(200, 200));
        assert!(!u8_eq(0, 255));
    }

    #[test]
    fn narrowing_bounds() {
        assert_eq!(u8_from_i64(0), Ok(0));
        assert_eq!(u8_from_i64(255), Ok(255));
        assert_eq!(
            u8_from_i64(256).unwrap_err().message(),
            "value 256 does not fit in u8 (0..=255)"
        );
        assert!(u8_from_i64(-1).is_err());
    }
}

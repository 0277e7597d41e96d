//! # Arithmetic Operations
//!
//! The four binary operations over `f64`.
//!
//! ## Properties
//!
//! - Pure: no state, no allocation, no logging
//! - IEEE-754 semantics throughout (overflow to infinity, NaN propagation)
//! - Single exception: a zero divisor yields the sentinel `0.0`

use crate::error::CalcError;

/// Value returned by [`divide`] when the divisor is zero.
pub const ZERO_DIVISOR_SENTINEL: f64 = 0.0;

/// `a + b`.
#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// `a - b`.
#[inline]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// `a * b`.
#[inline]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// `a / b`, or [`ZERO_DIVISOR_SENTINEL`] when `b` is zero.
///
/// The sentinel is indistinguishable from a genuine `0.0` quotient. Use
/// [`checked_divide`] when the caller needs to tell the two apart.
#[inline]
pub fn divide(a: f64, b: f64) -> f64 {
    if is_zero_divisor(b) {
        return ZERO_DIVISOR_SENTINEL;
    }
    a / b
}

/// `a / b`, failing with [`CalcError::DivisionByZero`] when `b` is zero.
#[inline]
pub fn checked_divide(a: f64, b: f64) -> Result<f64, CalcError> {
    if is_zero_divisor(b) {
        return Err(CalcError::DivisionByZero { dividend: a });
    }
    Ok(a / b)
}

/// True for `0.0` and `-0.0`. NaN is not a zero divisor.
#[inline]
pub fn is_zero_divisor(b: f64) -> bool {
    b == 0.0
}

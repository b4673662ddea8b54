//! Overflow-safe arithmetic helpers for amounts and time points.
//!
//! All functions use checked arithmetic and reject with
//! [`Rejection::Overflow`] instead of panicking, so validation stays total.

use crate::errors::Rejection;

/// Checked `i128` addition.
#[inline]
pub fn add_i128(a: i128, b: i128) -> Result<i128, Rejection> {
    a.checked_add(b).ok_or(Rejection::Overflow)
}

/// Checked `i128` subtraction.
#[inline]
pub fn sub_i128(a: i128, b: i128) -> Result<i128, Rejection> {
    a.checked_sub(b).ok_or(Rejection::Overflow)
}

/// Checked `i128` division, truncating toward zero.
#[inline]
pub fn div_i128(a: i128, b: i128) -> Result<i128, Rejection> {
    a.checked_div(b).ok_or(Rejection::Overflow)
}

/// Checked `i64` addition.
#[inline]
pub fn add_i64(a: i64, b: i64) -> Result<i64, Rejection> {
    a.checked_add(b).ok_or(Rejection::Overflow)
}

/// Checked `i64` subtraction.
#[inline]
pub fn sub_i64(a: i64, b: i64) -> Result<i64, Rejection> {
    a.checked_sub(b).ok_or(Rejection::Overflow)
}

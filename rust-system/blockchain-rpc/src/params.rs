//! Positional parameter narrowing
//!
//! Every command parser goes through these helpers to turn an untyped
//! parameter into the type it expects at that position. Failures name
//! the offending position so the caller can correct the request.
//!
//! Numbers arrive as generic JSON numbers. `number` reads them as `f64`;
//! `narrow_i32` and `narrow_i64` truncate toward zero and saturate at the
//! bounds of the target width. `int64` keeps integral values exact and only
//! narrows through `f64` when the number carries a fraction or exponent.

use crate::{CmdError, Position, Result};
use serde_json::{Map, Value};

/// Require exactly `expected` parameters
pub fn expect_len(params: &[Value], expected: usize) -> Result<()> {
    if params.len() != expected {
        return Err(CmdError::WrongNumberOfParams);
    }
    Ok(())
}

/// Require at least `min` parameters
pub fn expect_min_len(params: &[Value], min: usize) -> Result<()> {
    if params.len() < min {
        return Err(CmdError::WrongNumberOfParams);
    }
    Ok(())
}

fn get(params: &[Value], index: usize) -> Result<&Value> {
    params.get(index).ok_or(CmdError::WrongNumberOfParams)
}

fn mismatch(index: usize, expected: &'static str) -> CmdError {
    CmdError::TypeMismatch {
        position: Position(index),
        expected,
    }
}

fn invalid(index: usize, reason: impl Into<String>) -> CmdError {
    CmdError::InvalidValue {
        position: Position(index),
        reason: reason.into(),
    }
}

pub fn string(params: &[Value], index: usize) -> Result<&str> {
    get(params, index)?
        .as_str()
        .ok_or_else(|| mismatch(index, "a string"))
}

pub fn number(params: &[Value], index: usize) -> Result<f64> {
    get(params, index)?
        .as_f64()
        .ok_or_else(|| mismatch(index, "a number"))
}

pub fn object(params: &[Value], index: usize) -> Result<&Map<String, Value>> {
    get(params, index)?
        .as_object()
        .ok_or_else(|| mismatch(index, "a JSON object"))
}

/// An array whose every element is a string. A single non-string element
/// rejects the whole parameter.
pub fn string_array(params: &[Value], index: usize) -> Result<Vec<String>> {
    let items = get(params, index)?
        .as_array()
        .ok_or_else(|| mismatch(index, "a JSON array"))?;

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| mismatch(index, "an array of strings"))
        })
        .collect()
}

/// A non-negative integral number that fits in 32 bits
pub fn uint32(params: &[Value], index: usize) -> Result<u32> {
    let value = get(params, index)?;
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).map_err(|_| invalid(index, "is too large for a 32-bit integer"));
    }

    let n = value.as_f64().ok_or_else(|| mismatch(index, "a number"))?;
    if n < 0.0 {
        return Err(invalid(index, "cannot be negative"));
    }
    if n.fract() != 0.0 {
        return Err(invalid(index, "must be an integer"));
    }
    if n > f64::from(u32::MAX) {
        return Err(invalid(index, "is too large for a 32-bit integer"));
    }
    Ok(n as u32)
}

/// A number narrowed to `i64` without a lossy trip through `f64` for
/// integers
pub fn int64(params: &[Value], index: usize) -> Result<i64> {
    let value = get(params, index)?;
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    if value.is_u64() {
        return Ok(i64::MAX);
    }
    value
        .as_f64()
        .map(narrow_i64)
        .ok_or_else(|| mismatch(index, "a number"))
}

pub fn narrow_i32(n: f64) -> i32 {
    n as i32
}

pub fn narrow_i64(n: f64) -> i64 {
    n as i64
}

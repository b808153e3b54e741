//! The single parse step shared by every numeric rule.
//!
//! Configuration values arrive as raw text. A value is `REQUIRED` when blank,
//! `NOT_A_NUMBER` when it does not parse to a finite number, and otherwise
//! handed on to the range check.

use crate::bounds::Bounds;
use crate::error_tree::FieldError;

pub fn parse_number(raw: &str) -> Result<f64, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(FieldError::NotANumber)
}

/// Parse a non-negative whole number (list indices, product counts).
pub fn parse_count(raw: &str) -> Result<usize, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required);
    }
    trimmed.parse::<usize>().map_err(|_| FieldError::NotANumber)
}

pub fn number_between(raw: &str, bounds: Bounds) -> Result<f64, FieldError> {
    parse_number(raw).and_then(|v| within(v, bounds))
}

pub fn count_between(raw: &str, bounds: Bounds) -> Result<usize, FieldError> {
    parse_count(raw).and_then(|v| within(v as f64, bounds).map(|_| v))
}

/// Index into a list of `len` entries.
pub fn index_within(raw: &str, len: usize) -> Result<usize, FieldError> {
    parse_count(raw).and_then(|i| {
        if i < len {
            Ok(i)
        } else {
            Err(FieldError::IndexOutOfRange { len })
        }
    })
}

pub fn within(v: f64, bounds: Bounds) -> Result<f64, FieldError> {
    if bounds.contains(v) {
        Ok(v)
    } else {
        Err(FieldError::NumberBetween {
            min: bounds.min,
            max: bounds.max,
        })
    }
}

/// A value usable as the reference for a dependent bound.
pub fn positive(raw: &str) -> Option<f64> {
    parse_number(raw).ok().filter(|v| *v > 0.0)
}

use crate::WcError;

/// Floating point type used throughout the engine
pub type Real = f64;

/// Comparison tolerances for derived limits (millimetres, kilograms)
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-9,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, WcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(WcError::NonFinite { what, value: v })
    }
}

/// Round to the precision used when displaying limits (two decimals).
///
/// Carry-weight sums such as `100 - 1.5 - 0.57` accumulate binary noise;
/// limits are shown and compared at this precision.
pub fn round_display(v: Real) -> Real {
    (v * 100.0).round() / 100.0
}

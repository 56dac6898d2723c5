use crate::JcError;

/// Floating point type used throughout the cycle model.
pub type Real = f64;

/// Absolute/relative tolerance pair for float comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
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

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, JcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(JcError::NonFinite { what, value: v })
    }
}

/// Check `lo < v <= hi`, the usual domain of an efficiency.
pub fn ensure_lower_open(v: Real, lo: Real, hi: Real, what: &'static str) -> Result<Real, JcError> {
    let v = ensure_finite(v, what)?;
    if v > lo && v <= hi {
        Ok(v)
    } else {
        Err(JcError::OutOfRange {
            what,
            value: v,
            expected: "lower-open interval (lo, hi]",
        })
    }
}

/// Check `v > 0`.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, JcError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(JcError::OutOfRange {
            what,
            value: v,
            expected: "strictly positive",
        })
    }
}

/// `n` evenly spaced points from `start` to `end` inclusive.
///
/// Both endpoints are reproduced exactly, so a value placed at either end
/// can be recovered bit-for-bit.
pub fn linspace(start: Real, end: Real, n: usize) -> Vec<Real> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let delta = (end - start) / (n - 1) as Real;
            let mut points: Vec<Real> = (0..n).map(|i| start + i as Real * delta).collect();
            points[n - 1] = end;
            points
        }
    }
}

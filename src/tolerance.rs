//! Tolerance-based numeric comparison.
//!
//! [`within_tolerance`] is the sole numeric-correctness decision primitive
//! exposed to the grading layer. It works uniformly over real and complex
//! scalars and same-shaped vectors/matrices, and treats a pair whose types
//! refuse subtraction as simply not within tolerance.

use crate::error::ConfigError;
use crate::value::{UnsupportedOperation, Value};
use std::str::FromStr;

/// A grading tolerance: an absolute bound, or a fraction of the reference
/// value's norm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tolerance {
    /// `|reference - candidate| <= bound`.
    Absolute(f64),

    /// `|reference - candidate| <= fraction * |reference|`. Stored as a
    /// fraction: `"10%"` parses to `Percent(0.1)`.
    Percent(f64),
}

impl From<f64> for Tolerance {
    fn from(bound: f64) -> Self {
        Tolerance::Absolute(bound)
    }
}

impl FromStr for Tolerance {
    type Err = ConfigError;

    /// Parses either a plain number or a percentage string. Configuration
    /// validation upstream is expected to have screened the input already;
    /// anything unparseable here is reported as a configuration error.
    fn from_str(s: &str) -> Result<Self, ConfigError> {
        let trimmed = s.trim();
        let invalid = || ConfigError::InvalidTolerance(s.to_string());
        match trimmed.strip_suffix('%') {
            Some(percent) => {
                let percent: f64 = percent.trim().parse().map_err(|_| invalid())?;
                Ok(Tolerance::Percent(percent * 0.01))
            }
            None => {
                let bound: f64 = trimmed.parse().map_err(|_| invalid())?;
                Ok(Tolerance::Absolute(bound))
            }
        }
    }
}

/// Checks that `|reference - candidate| <= tolerance` under the appropriate
/// norm (absolute value for scalars, Frobenius norm for arrays).
///
/// A percentage tolerance is computed from the norm of `reference`, never
/// `candidate`: the comparison is intentionally asymmetric, and swapping the
/// arguments can change the outcome.
///
/// If the two values do not support subtraction (mismatched kinds or shapes),
/// they are not within tolerance; the condition is absorbed here rather than
/// propagated, and the pair simply grades as incorrect.
pub fn within_tolerance(reference: &Value, candidate: &Value, tolerance: &Tolerance) -> bool {
    let bound = match tolerance {
        Tolerance::Absolute(bound) => *bound,
        Tolerance::Percent(fraction) => reference.norm() * fraction,
    };

    match reference.checked_sub(candidate) {
        Ok(difference) => difference.norm() <= bound,
        Err(UnsupportedOperation) => false,
    }
}

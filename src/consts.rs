//! The base constant and suffix registries.
//!
//! Process-wide immutable maps, initialized once and shared read-only across
//! graders. The builders in [`registry`](crate::registry) always derive fresh
//! copies; nothing mutates these in place.

use crate::value::Value;
use num_complex::Complex64;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::f64::consts::{E, PI};

/// Constants available by default: the imaginary unit under both of its common
/// names, Euler's number, and pi.
pub static DEFAULT_CONSTANTS: Lazy<HashMap<&'static str, Value>> = Lazy::new(|| {
    [
        ("i", Value::Complex(Complex64::i())),
        ("j", Value::Complex(Complex64::i())),
        ("e", Value::Float(E)),
        ("pi", Value::Float(PI)),
    ]
    .into_iter()
    .collect()
});

/// Suffixes available by default: percent only.
pub static DEFAULT_SUFFIXES: Lazy<HashMap<char, f64>> =
    Lazy::new(|| [('%', 1e-2)].into_iter().collect());

/// SI prefix suffixes, merged in by the suffix builder on request.
pub static METRIC_SUFFIXES: Lazy<HashMap<char, f64>> = Lazy::new(|| {
    [
        ('k', 1e3),
        ('M', 1e6),
        ('G', 1e9),
        ('T', 1e12),
        ('m', 1e-3),
        ('u', 1e-6),
        ('n', 1e-9),
        ('p', 1e-12),
    ]
    .into_iter()
    .collect()
});

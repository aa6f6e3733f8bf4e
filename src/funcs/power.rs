//! Exponential, logarithmic and power functions.
//!
//! Every entry here is complex-safe: real input outside the real domain of the
//! function produces a complex result rather than NaN (`sqrt(-4)` is `2i`,
//! `ln(-1)` is `i*pi`).

use super::helper::{complex_builtin, unary_complex};
use crate::builtin::Builtin;
use crate::error::EvalError;
use crate::value::Value;
use num_complex::Complex64;
use std::f64::consts::{LN_10, LN_2};

complex_builtin! {
    "sqrt" Sqrt; Complex64::sqrt,
    "exp" Exp; Complex64::exp,
    "ln" Ln; Complex64::ln,
    "log2" Log2; |z: Complex64| z.ln() / LN_2,
    "log10" Log10; |z: Complex64| z.ln() / LN_10,
}

/// The absolute value (complex modulus).
#[derive(Debug)]
pub struct Abs;

impl Abs {
    pub fn eval_static(z: Complex64) -> f64 {
        z.norm()
    }
}

impl Builtin for Abs {
    fn name(&self) -> &str {
        "abs"
    }

    fn arity(&self) -> usize {
        1
    }

    fn eval(&self, args: &[Value]) -> Result<Value, EvalError> {
        let z = unary_complex(self.name(), args)?;
        Ok(Value::Float(Self::eval_static(z)))
    }
}

/// Raises `base` to `exponent`, falling back to complex exponentiation when the
/// real power is undefined (negative base with a fractional exponent).
pub fn robust_pow(base: f64, exponent: f64) -> Value {
    let real = base.powf(exponent);
    if real.is_nan() && !base.is_nan() && !exponent.is_nan() {
        let z = Complex64::new(base, 0.0).powc(Complex64::new(exponent, 0.0));
        Value::Complex(z).coerce_float()
    } else {
        Value::Float(real)
    }
}

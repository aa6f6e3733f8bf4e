//! Functions over the real and imaginary parts of values.
//!
//! These are the array-aware entries of the library: they map element-wise over
//! vectors and matrices and are deliberately left outside the scalar domain
//! guard. On scalar input, `re` and `im` hand back a genuine real scalar, never
//! a one-element container.

use super::helper::map_elementwise;
use crate::builtin::Builtin;
use crate::error::EvalError;
use crate::value::Value;
use num_complex::Complex64;

/// Returns the real part of the given value.
#[derive(Debug)]
pub struct Re;

impl Re {
    pub fn eval_static(z: Complex64) -> f64 {
        z.re
    }
}

impl Builtin for Re {
    fn name(&self) -> &str {
        "re"
    }

    fn arity(&self) -> usize {
        1
    }

    fn eval(&self, args: &[Value]) -> Result<Value, EvalError> {
        map_elementwise(self.name(), args, |z| Complex64::new(z.re, 0.0))
    }
}

/// Returns the imaginary part of the given value.
#[derive(Debug)]
pub struct Im;

impl Im {
    pub fn eval_static(z: Complex64) -> f64 {
        z.im
    }
}

impl Builtin for Im {
    fn name(&self) -> &str {
        "im"
    }

    fn arity(&self) -> usize {
        1
    }

    fn eval(&self, args: &[Value]) -> Result<Value, EvalError> {
        map_elementwise(self.name(), args, |z| Complex64::new(z.im, 0.0))
    }
}

/// Returns the complex conjugate of the given value.
#[derive(Debug)]
pub struct Conj;

impl Conj {
    pub fn eval_static(z: Complex64) -> Complex64 {
        z.conj()
    }
}

impl Builtin for Conj {
    fn name(&self) -> &str {
        "conj"
    }

    fn arity(&self) -> usize {
        1
    }

    fn eval(&self, args: &[Value]) -> Result<Value, EvalError> {
        map_elementwise(self.name(), args, |z| z.conj())
    }
}

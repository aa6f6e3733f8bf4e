//! Uncategorized functions: the factorial/gamma extension.

use super::helper::unary_complex;
use crate::builtin::Builtin;
use crate::error::EvalError;
use crate::value::Value;
use num_complex::Complex64;
use std::f64::consts::{PI, TAU};

/// Lanczos coefficients, g = 7.
const GAMMA_P: [f64; 9] = [
    0.99999999999980993,
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];

const GAMMA_G: f64 = 7.0;

/// The gamma function over the complex plane.
///
/// Lanczos approximation, with the reflection formula covering `Re(z) < 0.5`.
pub fn gamma(z: Complex64) -> Complex64 {
    if z.re < 0.5 {
        // gamma(z) * gamma(1 - z) = pi / sin(pi * z)
        let sin_piz = (z * PI).sin();
        return Complex64::new(PI, 0.0) / (sin_piz * gamma(Complex64::new(1.0, 0.0) - z));
    }

    let z = z - 1.0;
    let mut x = Complex64::new(GAMMA_P[0], 0.0);
    for (i, p) in GAMMA_P.iter().enumerate().skip(1) {
        x += Complex64::new(*p, 0.0) / (z + i as f64);
    }

    let t = z + GAMMA_G + 0.5;
    t.powc(z + 0.5) * (-t).exp() * x * TAU.sqrt()
}

/// Computes `n!` exactly as a float product.
fn int_factorial(n: u64) -> f64 {
    (2..=n).fold(1.0, |acc, k| acc * k as f64)
}

/// The factorial function, extended to the complex plane.
///
/// Non-negative integers produce exact integer values; every other real or
/// complex input goes through `gamma(z + 1)`. Negative integers are poles of
/// the gamma function and raise [`EvalError::FactorialPole`].
#[derive(Debug)]
pub struct Factorial;

impl Factorial {
    pub fn eval_static(z: Complex64) -> Result<Value, EvalError> {
        if z.im == 0.0 && z.re.fract() == 0.0 {
            if z.re < 0.0 {
                return Err(EvalError::FactorialPole);
            }
            return Ok(Value::Float(int_factorial(z.re as u64)));
        }
        Ok(Value::Complex(gamma(z + 1.0)).coerce_float())
    }
}

impl Builtin for Factorial {
    fn name(&self) -> &str {
        "factorial"
    }

    fn arity(&self) -> usize {
        1
    }

    fn eval(&self, args: &[Value]) -> Result<Value, EvalError> {
        let z = unary_complex(self.name(), args)?;
        Self::eval_static(z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn integer_factorials_are_exact() {
        assert_eq!(
            Factorial::eval_static(Complex64::new(4.0, 0.0)).unwrap(),
            Value::Float(24.0)
        );
        assert_eq!(
            Factorial::eval_static(Complex64::new(0.0, 0.0)).unwrap(),
            Value::Float(1.0)
        );
        assert_eq!(
            Factorial::eval_static(Complex64::new(10.0, 0.0)).unwrap(),
            Value::Float(3628800.0)
        );
    }

    #[test]
    fn half_factorial_is_half_root_pi() {
        let v = Factorial::eval_static(Complex64::new(0.5, 0.0)).unwrap();
        let Value::Float(x) = v else {
            panic!("expected a real result");
        };
        assert_float_absolute_eq!(x, PI.sqrt() / 2.0, 1e-10);
    }

    #[test]
    fn negative_integers_are_poles() {
        assert_eq!(
            Factorial::eval_static(Complex64::new(-2.0, 0.0)),
            Err(EvalError::FactorialPole)
        );
        // negative non-integers are fine: (-1/2)! = sqrt(pi)
        let v = Factorial::eval_static(Complex64::new(-0.5, 0.0)).unwrap();
        let Value::Float(x) = v else {
            panic!("expected a real result");
        };
        assert_float_absolute_eq!(x, PI.sqrt(), 1e-10);
    }

    #[test]
    fn gamma_recurrence_for_complex_arguments() {
        // z! = (z - 1)! * z
        let smaller = Factorial::eval_static(Complex64::new(2.2, 4.1)).unwrap();
        let larger = Factorial::eval_static(Complex64::new(3.2, 4.1)).unwrap();
        let (Value::Complex(a), Value::Complex(b)) = (smaller, larger) else {
            panic!("expected complex results");
        };
        let recurred = a * Complex64::new(3.2, 4.1);
        assert_float_absolute_eq!(recurred.re, b.re, 1e-9);
        assert_float_absolute_eq!(recurred.im, b.im, 1e-9);
    }

    #[test]
    fn gamma_reflection() {
        let g = gamma(Complex64::new(-0.5, 0.0));
        assert_float_absolute_eq!(g.re, -2.0 * PI.sqrt(), 1e-9);
        assert_float_absolute_eq!(g.im, 0.0, 1e-9);
    }
}

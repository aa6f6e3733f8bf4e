//! The scalar domain guard.
//!
//! Most of the function library silently vectorizes in its source environments;
//! graders must not let `sin(A)` of a matrix slip through as an element-wise
//! map. [`ScalarGuard`] wraps a unary [`Builtin`] so that array input raises a
//! student-facing domain error naming the function, while scalar input passes
//! through untouched.

use crate::builtin::{check_arity, Builtin};
use crate::error::{ConfigError, EvalError};
use crate::value::{Shape, Value};
use std::sync::Arc;

/// Wraps a unary function so it rejects non-scalar input.
///
/// Construction fails for functions of any other arity; that is a programming
/// error in registry assembly, not a per-call condition.
#[derive(Debug, Clone)]
pub struct ScalarGuard {
    display_name: String,
    inner: Arc<dyn Builtin>,
}

impl ScalarGuard {
    /// Guards `inner`, reporting domain errors under `display_name`.
    pub fn new(
        display_name: impl Into<String>,
        inner: Arc<dyn Builtin>,
    ) -> Result<Self, ConfigError> {
        let display_name = display_name.into();
        if inner.arity() != 1 {
            return Err(ConfigError::NonUnaryGuard {
                name: display_name,
                arity: inner.arity(),
            });
        }
        Ok(Self { display_name, inner })
    }
}

impl Builtin for ScalarGuard {
    fn name(&self) -> &str {
        &self.display_name
    }

    fn arity(&self) -> usize {
        1
    }

    fn eval(&self, args: &[Value]) -> Result<Value, EvalError> {
        check_arity(self, args)?;
        match args[0].shape() {
            Shape::Scalar => self.inner.eval(args),
            Shape::Array(_) => Err(EvalError::Domain {
                name: self.display_name.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::NativeFunction;
    use num_complex::Complex64;
    use pretty_assertions::assert_eq;

    fn plus3() -> Arc<dyn Builtin> {
        Arc::new(NativeFunction::unary("plus3", |v| match v {
            Value::Float(x) => Ok(Value::Float(x + 3.0)),
            _ => Ok(v.clone()),
        }))
    }

    #[test]
    fn scalar_input_passes_through() {
        let guard = ScalarGuard::new("plus3", plus3()).unwrap();
        assert_eq!(guard.eval(&[Value::Float(4.0)]).unwrap(), Value::Float(7.0));
        // complex scalars count as scalar too
        let z = Value::Complex(Complex64::new(1.0, 1.0));
        assert_eq!(guard.eval(&[z.clone()]).unwrap(), z);
    }

    #[test]
    fn array_input_raises_domain_error() {
        let guard = ScalarGuard::new("plus3", plus3()).unwrap();
        let err = guard.eval(&[Value::from(vec![5.0, 2.0])]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Function 'plus3(...)' only accepts scalar inputs, but was given a non-scalar input."
        );
    }

    #[test]
    fn guarding_a_binary_function_fails() {
        let add = Arc::new(NativeFunction::new("add", 2, |args| {
            let (a, b) = (&args[0], &args[1]);
            match (a, b) {
                (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a + b)),
                _ => Err(EvalError::Domain { name: "add".into() }),
            }
        }));
        let err = ScalarGuard::new("add", add).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NonUnaryGuard {
                name: "add".into(),
                arity: 2,
            }
        );
    }
}

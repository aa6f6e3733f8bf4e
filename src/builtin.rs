//! The trait implemented by every registered function.
//!
//! Each library function is a unit `struct` with an associated `eval_static`
//! method for use when the argument type is known at compile time, plus a
//! [`Builtin`] impl that evaluates it against runtime [`Value`]s. User-supplied
//! functions enter the same registry through the [`NativeFunction`] adapter.

use crate::error::EvalError;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// A function that can be registered in the evaluation environment.
///
/// Registry maps hold `Arc<dyn Builtin>`: the base registry is built once and
/// shared read-only across graders, so entries must be cheap to clone and safe
/// to call from multiple threads.
pub trait Builtin: fmt::Debug + Send + Sync {
    /// The name the function is registered under, used in error messages.
    fn name(&self) -> &str;

    /// The number of arguments the function accepts.
    fn arity(&self) -> usize;

    /// Evaluates the function.
    fn eval(&self, args: &[Value]) -> Result<Value, EvalError>;
}

/// Checks that `args` matches the declared arity of `func`.
pub(crate) fn check_arity(func: &dyn Builtin, args: &[Value]) -> Result<(), EvalError> {
    if args.len() != func.arity() {
        return Err(EvalError::Arity {
            name: func.name().into(),
            expected: func.arity(),
            given: args.len(),
        });
    }
    Ok(())
}

/// A user-supplied function backed by a Rust closure.
#[derive(Clone)]
pub struct NativeFunction {
    name: String,
    arity: usize,
    #[allow(clippy::type_complexity)]
    func: Arc<dyn Fn(&[Value]) -> Result<Value, EvalError> + Send + Sync>,
}

impl NativeFunction {
    /// Creates a function of the given arity.
    pub fn new(
        name: impl Into<String>,
        arity: usize,
        func: impl Fn(&[Value]) -> Result<Value, EvalError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            arity,
            func: Arc::new(func),
        }
    }

    /// Creates a unary function from a closure over a single value.
    pub fn unary(
        name: impl Into<String>,
        func: impl Fn(&Value) -> Result<Value, EvalError> + Send + Sync + 'static,
    ) -> Self {
        Self::new(name, 1, move |args| func(&args[0]))
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

impl Builtin for NativeFunction {
    fn name(&self) -> &str {
        &self.name
    }

    fn arity(&self) -> usize {
        self.arity
    }

    fn eval(&self, args: &[Value]) -> Result<Value, EvalError> {
        check_arity(self, args)?;
        (self.func)(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_function_checks_arity() {
        let plus = NativeFunction::new("plus", 2, |args| {
            args[0]
                .checked_sub(&args[1])
                .map_err(|_| EvalError::Domain { name: "plus".into() })
        });
        let err = plus.eval(&[Value::Float(1.0)]).unwrap_err();
        assert_eq!(
            err,
            EvalError::Arity {
                name: "plus".into(),
                expected: 2,
                given: 1,
            }
        );
    }

    #[test]
    fn unary_adapter() {
        let triple = NativeFunction::unary("triple", |v| match v {
            Value::Float(x) => Ok(Value::Float(3.0 * x)),
            _ => Err(EvalError::Domain { name: "triple".into() }),
        });
        assert_eq!(triple.arity(), 1);
        assert_eq!(triple.eval(&[Value::Float(2.0)]).unwrap(), Value::Float(6.0));
    }
}

//! Shared plumbing for the function library.

use crate::error::EvalError;
use crate::value::Value;
use num_complex::Complex64;

/// Extracts the single complex scalar argument of a unary function.
pub(crate) fn unary_complex(name: &str, args: &[Value]) -> Result<Complex64, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::Arity {
            name: name.into(),
            expected: 1,
            given: args.len(),
        });
    }
    args[0].complex_scalar_or_domain(name)
}

/// Applies `f` element-wise over the single argument of an array-aware unary
/// function. Scalar results on the real axis demote to genuine real scalars.
pub(crate) fn map_elementwise(
    name: &str,
    args: &[Value],
    f: impl Fn(Complex64) -> Complex64,
) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::Arity {
            name: name.into(),
            expected: 1,
            given: args.len(),
        });
    }
    Ok(match &args[0] {
        Value::Float(x) => Value::Complex(f(Complex64::new(*x, 0.0))).coerce_float(),
        Value::Complex(z) => Value::Complex(f(*z)).coerce_float(),
        Value::Vector(v) => Value::Vector(v.iter().copied().map(&f).collect()),
        Value::Matrix(rows) => Value::Matrix(
            rows.iter()
                .map(|row| row.iter().copied().map(&f).collect())
                .collect(),
        ),
    })
}

/// Builds a unary complex-to-complex library function: a unit `struct` with an
/// `eval_static` method plus a [`Builtin`](crate::builtin::Builtin) impl that
/// demotes real-axis results back to real scalars.
macro_rules! complex_builtin {
    ($($name:literal $upname:ident; $func:expr),* $(,)?) => {
        $(
            #[derive(Debug)]
            pub struct $upname;

            impl $upname {
                pub fn eval_static(z: ::num_complex::Complex64) -> ::num_complex::Complex64 {
                    // NOTE: the closure call is contained within the macro, so we allow
                    // the clippy::redundant_closure_call lint
                    #[allow(clippy::redundant_closure_call)]
                    ($func)(z)
                }
            }

            impl $crate::builtin::Builtin for $upname {
                fn name(&self) -> &str {
                    $name
                }

                fn arity(&self) -> usize {
                    1
                }

                fn eval(
                    &self,
                    args: &[$crate::value::Value],
                ) -> Result<$crate::value::Value, $crate::error::EvalError> {
                    let z = $crate::funcs::helper::unary_complex($name, args)?;
                    Ok($crate::value::Value::Complex(Self::eval_static(z)).coerce_float())
                }
            }
        )*
    };
}

pub(crate) use complex_builtin;

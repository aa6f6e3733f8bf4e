//! The numeric value type shared by the function registries, the tolerance
//! comparator and the sampling interface.
//!
//! Every quantity that flows through a grading trial is a [`Value`]: a real or
//! complex scalar, or a vector/matrix of complex entries. Classification of a
//! value as scalar or array happens in exactly one place, [`Value::shape`],
//! which returns a tagged [`Shape`]; call sites branch on the tag rather than
//! inspecting variants directly.

use crate::error::EvalError;
use num_complex::Complex64;
use std::fmt::{Display, Formatter};

/// Represents any numeric value produced by sampling or evaluation.
///
/// Matrices are stored row-major and are required to be rectangular; the
/// constructors in this module preserve that invariant.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A real scalar.
    Float(f64),

    /// A complex scalar.
    Complex(Complex64),

    /// A vector of complex entries.
    Vector(Vec<Complex64>),

    /// A rectangular matrix of complex entries, stored by rows.
    Matrix(Vec<Vec<Complex64>>),
}

/// The result of classifying a [`Value`] as scalar or array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// A single real or complex number.
    Scalar,

    /// An array with the given dimensions.
    Array(Vec<usize>),
}

/// Subtraction is intentionally not defined for the given pair of values.
///
/// Returned by [`Value::checked_sub`] for cross-kind or shape-mismatched pairs.
/// The tolerance comparator recovers from this locally; nothing else does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedOperation;

impl Value {
    /// Classifies this value as a scalar or an array with dimensions.
    pub fn shape(&self) -> Shape {
        match self {
            Value::Float(_) | Value::Complex(_) => Shape::Scalar,
            Value::Vector(v) => Shape::Array(vec![v.len()]),
            Value::Matrix(rows) => {
                let cols = rows.first().map_or(0, Vec::len);
                Shape::Array(vec![rows.len(), cols])
            }
        }
    }

    /// Returns true if this value is a real or complex scalar.
    pub fn is_scalar(&self) -> bool {
        self.shape() == Shape::Scalar
    }

    /// Returns this value as a complex scalar, or [`None`] for arrays.
    pub fn as_complex_scalar(&self) -> Option<Complex64> {
        match self {
            Value::Float(x) => Some(Complex64::new(*x, 0.0)),
            Value::Complex(z) => Some(*z),
            Value::Vector(_) | Value::Matrix(_) => None,
        }
    }

    /// Consumes and demotes a complex scalar with zero imaginary part to a real
    /// scalar.
    ///
    /// Library functions compute through [`Complex64`] internally; this is what
    /// makes them hand back a genuine real number whenever the result lies on
    /// the real axis.
    pub fn coerce_float(self) -> Self {
        match self {
            Value::Complex(z) if z.im == 0.0 => Value::Float(z.re),
            _ => self,
        }
    }

    /// The Euclidean norm of this value: absolute value for scalars, Frobenius
    /// norm for vectors and matrices.
    pub fn norm(&self) -> f64 {
        match self {
            Value::Float(x) => x.abs(),
            Value::Complex(z) => z.norm(),
            Value::Vector(v) => v.iter().map(Complex64::norm_sqr).sum::<f64>().sqrt(),
            Value::Matrix(rows) => rows
                .iter()
                .flatten()
                .map(Complex64::norm_sqr)
                .sum::<f64>()
                .sqrt(),
        }
    }

    /// Subtracts `rhs` from this value, element-wise for arrays.
    ///
    /// Scalars subtract freely, promoting through [`Complex64`] when either
    /// side is complex. Arrays subtract only when their shapes match exactly;
    /// every other pairing returns [`UnsupportedOperation`].
    pub fn checked_sub(&self, rhs: &Value) -> Result<Value, UnsupportedOperation> {
        match (self, rhs) {
            (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a - b)),
            (a, b) if a.is_scalar() && b.is_scalar() => {
                // as_complex_scalar cannot fail for scalars
                let (Some(a), Some(b)) = (a.as_complex_scalar(), b.as_complex_scalar()) else {
                    return Err(UnsupportedOperation);
                };
                Ok(Value::Complex(a - b).coerce_float())
            }
            (Value::Vector(a), Value::Vector(b)) if a.len() == b.len() => {
                Ok(Value::Vector(a.iter().zip(b).map(|(x, y)| x - y).collect()))
            }
            (Value::Matrix(a), Value::Matrix(b)) if self.shape() == rhs.shape() => {
                Ok(Value::Matrix(
                    a.iter()
                        .zip(b)
                        .map(|(ra, rb)| ra.iter().zip(rb).map(|(x, y)| x - y).collect())
                        .collect(),
                ))
            }
            _ => Err(UnsupportedOperation),
        }
    }

    /// Returns this value as a complex scalar, raising a domain error naming
    /// `name` for arrays.
    pub(crate) fn complex_scalar_or_domain(&self, name: &str) -> Result<Complex64, EvalError> {
        self.as_complex_scalar()
            .ok_or_else(|| EvalError::Domain { name: name.into() })
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Float(n as f64)
    }
}

impl From<Complex64> for Value {
    fn from(z: Complex64) -> Self {
        Value::Complex(z)
    }
}

impl From<Vec<Complex64>> for Value {
    fn from(v: Vec<Complex64>) -> Self {
        Value::Vector(v)
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Value::Vector(v.into_iter().map(|x| Complex64::new(x, 0.0)).collect())
    }
}

impl From<Vec<Vec<Complex64>>> for Value {
    fn from(rows: Vec<Vec<Complex64>>) -> Self {
        Value::Matrix(rows)
    }
}

impl From<Vec<Vec<f64>>> for Value {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Value::Matrix(
            rows.into_iter()
                .map(|row| row.into_iter().map(|x| Complex64::new(x, 0.0)).collect())
                .collect(),
        )
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Float(x) => write!(f, "{x}"),
            Value::Complex(z) => write!(f, "{z}"),
            Value::Vector(v) => {
                write!(f, "[")?;
                for (i, z) in v.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{z}")?;
                }
                write!(f, "]")
            }
            Value::Matrix(rows) => {
                write!(f, "[")?;
                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    for (j, z) in row.iter().enumerate() {
                        if j > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{z}")?;
                    }
                }
                write!(f, "]")
            }
        }
    }
}

//! Function registries and tolerance-based numeric comparison for grading
//! mathematical formulas.
//!
//! This crate is the numeric core of a formula-grading pipeline. It owns three
//! things:
//!
//! - a curated library of named mathematical functions (trigonometric,
//!   hyperbolic and their inverses, complex-safe powers and logarithms, a
//!   gamma-extended factorial) together with named constants and unit
//!   suffixes, exposed through builders that apply per-grader whitelists,
//!   blacklists and user-supplied functions;
//! - a scalar domain guard that keeps vector or matrix input out of functions
//!   that only make sense for scalars, raising a student-facing error instead
//!   of silently vectorizing;
//! - a tolerance comparator that decides whether a student's evaluated value
//!   is close enough to the reference value, uniformly over real and complex
//!   scalars and matrices.
//!
//! Parsing formula text, sampling variable values and validating grader
//! configuration all live elsewhere; this crate consumes and exposes the
//! interfaces they meet at.
//!
//! # Example
//!
//! ```
//! use formula_grader::builtin::Builtin;
//! use formula_grader::registry::build_functions;
//! use formula_grader::tolerance::{within_tolerance, Tolerance};
//! use formula_grader::value::Value;
//! use std::collections::HashMap;
//!
//! // assemble the evaluation environment for a grader with default settings
//! let (functions, _randomized) = build_functions(&[], &[], HashMap::new()).unwrap();
//!
//! // evaluate sin(0) the way the parser would
//! let value = functions["sin"].eval(&[Value::Float(0.0)]).unwrap();
//! assert_eq!(value, Value::Float(0.0));
//!
//! // grade a candidate against a reference to within 10% of the reference
//! let tolerance: Tolerance = "10%".parse().unwrap();
//! assert!(within_tolerance(&Value::Float(10.0), &Value::Float(9.01), &tolerance));
//! ```

pub mod builtin;
pub mod consts;
pub mod error;
pub mod funcs;
pub mod guard;
pub mod registry;
pub mod sample;
pub mod tolerance;
pub mod value;

pub use builtin::{Builtin, NativeFunction};
pub use error::{ConfigError, EvalError};
pub use guard::ScalarGuard;
pub use registry::{
    build_constants, build_functions, build_suffixes, FunctionMap, FunctionSamplingSet,
    RandomFunction, RandomFunctionMap, UserFunction, DEFAULT_FUNCTIONS,
};
pub use sample::{gen_symbols_samples, SamplingSet};
pub use tolerance::{within_tolerance, Tolerance};
pub use value::{Shape, UnsupportedOperation, Value};

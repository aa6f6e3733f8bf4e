//! Error types for registry construction and function evaluation.
//!
//! [`ConfigError`] covers build-time misuse of the registry builders and is always
//! fatal to the build. [`EvalError`] covers failures raised while evaluating a
//! registered function against concrete values. Neither is ever retried; the one
//! recoverable condition in the crate ([`UnsupportedOperation`][u]) lives with the
//! value type instead.
//!
//! [u]: crate::value::UnsupportedOperation

use thiserror::Error;

/// Build-time misuse of the registry builders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Both a whitelist and a blacklist were supplied to the function builder.
    #[error("cannot whitelist and blacklist functions at the same time")]
    WhitelistAndBlacklist,

    /// A whitelist entry does not name a function in the base library.
    #[error("unknown function in whitelist: `{}`{}", .name, did_you_mean(.suggestions))]
    UnknownWhitelistEntry {
        name: String,
        suggestions: Vec<String>,
    },

    /// A blacklist entry does not name a function in the base library.
    #[error("unknown function in blacklist: `{}`{}", .name, did_you_mean(.suggestions))]
    UnknownBlacklistEntry {
        name: String,
        suggestions: Vec<String>,
    },

    /// A user-supplied function or constant was registered under a name that is
    /// not a plausible identifier.
    #[error("invalid name for a user-defined entry: `{0}`")]
    InvalidName(String),

    /// A randomized function was registered with an empty list of choices.
    #[error("the list of functions for `{0}` must not be empty")]
    EmptyFunctionList(String),

    /// A scalar domain guard was constructed over a function that is not unary.
    #[error(
        "cannot guard `{name}`: scalar domain guards only support unary functions, \
         but `{name}` takes {arity} arguments"
    )]
    NonUnaryGuard { name: String, arity: usize },

    /// A tolerance string was neither a number nor a percentage.
    #[error("invalid tolerance `{0}`: expected a number or a percentage string")]
    InvalidTolerance(String),
}

/// A failure raised while evaluating a registered function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A scalar-only function received vector or matrix input.
    ///
    /// The message wording is student-facing and relied upon by the surrounding
    /// grading pipeline; do not reword it.
    #[error(
        "Function '{name}(...)' only accepts scalar inputs, \
         but was given a non-scalar input."
    )]
    Domain { name: String },

    /// The factorial function was evaluated at a negative integer, a pole of the
    /// gamma function.
    #[error("factorial() not defined for negative values")]
    FactorialPole,

    /// A function was called with the wrong number of arguments.
    #[error("the `{name}` function expects {expected} argument(s), but {given} were given")]
    Arity {
        name: String,
        expected: usize,
        given: usize,
    },
}

/// Renders a "did you mean" suffix for unknown-name errors.
fn did_you_mean(suggestions: &[String]) -> String {
    match suggestions {
        [] => String::new(),
        [single] => format!("; did you mean `{single}`?"),
        many => format!(
            "; did you mean one of {}?",
            many.iter()
                .map(|s| format!("`{s}`"))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

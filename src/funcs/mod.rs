//! All built-in functions provided by the formula library.
//!
//! Each function is implemented as a unit `struct` with an associated
//! `eval_static` method. This method can be used to evaluate the function in
//! Rust code if the types of the arguments are known at compile time. The
//! [`Builtin`] trait is also implemented for each function, enabling evaluation
//! against arbitrary runtime [`Value`](crate::value::Value)s.
//!
//! [`all`] assembles the base catalog: every scalar-only entry is wrapped in a
//! [`ScalarGuard`] before exposure, so vector or matrix input raises a domain
//! error instead of silently vectorizing. The array-aware entries (`re`, `im`,
//! `conj`) are registered unguarded and map element-wise.

pub mod complex;
pub(crate) mod helper;
pub mod miscellaneous;
pub mod power;
pub mod trigonometry;

use crate::builtin::Builtin;
use crate::guard::ScalarGuard;
use std::collections::HashMap;
use std::sync::Arc;

/// Returns the base catalog of named functions.
pub fn all() -> HashMap<&'static str, Arc<dyn Builtin>> {
    use complex::*;
    use miscellaneous::*;
    use power::*;
    use trigonometry::*;

    let mut map: HashMap<&'static str, Arc<dyn Builtin>> = HashMap::new();

    macro_rules! scalar {
        ($($name:literal $upname:ident),* $(,)?) => {
            $(
                let inner = Arc::new($upname) as Arc<dyn Builtin>;
                let guard = ScalarGuard::new($name, inner)
                    .expect("library scalar functions are unary");
                map.insert($name, Arc::new(guard) as Arc<dyn Builtin>);
            )*
        };
    }

    macro_rules! array_aware {
        ($($name:literal $upname:ident),* $(,)?) => {
            $(
                map.insert($name, Arc::new($upname) as Arc<dyn Builtin>);
            )*
        };
    }

    scalar! {
        "sin" Sin,
        "cos" Cos,
        "tan" Tan,
        "sec" Sec,
        "csc" Csc,
        "cot" Cot,
        "arcsin" Arcsin,
        "arccos" Arccos,
        "arctan" Arctan,
        "arcsec" Arcsec,
        "arccsc" Arccsc,
        "arccot" Arccot,
        "sinh" Sinh,
        "cosh" Cosh,
        "tanh" Tanh,
        "sech" Sech,
        "csch" Csch,
        "coth" Coth,
        "arcsinh" Arcsinh,
        "arccosh" Arccosh,
        "arctanh" Arctanh,
        "arcsech" Arcsech,
        "arccsch" Arccsch,
        "arccoth" Arccoth,
        "sqrt" Sqrt,
        "exp" Exp,
        "ln" Ln,
        "log2" Log2,
        "log10" Log10,
        "abs" Abs,
        "fact" Factorial, // intentional alias for factorial
        "factorial" Factorial,
    }

    array_aware! {
        "re" Re,
        "im" Im,
        "conj" Conj,
    }

    map
}

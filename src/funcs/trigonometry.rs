//! General trigonometric and hyperbolic trigonometric functions.
//!
//! The reciprocal functions are defined through the corresponding library
//! sine/cosine/tangent; the inverse secant/cosecant families go through
//! `arccos(1/x)` and `arcsin(1/x)`.

use super::helper::complex_builtin;
use num_complex::Complex64;
use std::f64::consts::FRAC_PI_2;

complex_builtin! {
    "sin" Sin; Complex64::sin,
    "cos" Cos; Complex64::cos,
    "tan" Tan; Complex64::tan,
    "sec" Sec; |z: Complex64| z.cos().inv(),
    "csc" Csc; |z: Complex64| z.sin().inv(),
    "cot" Cot; |z: Complex64| z.tan().inv(),
}

complex_builtin! {
    "arcsin" Arcsin; Complex64::asin,
    "arccos" Arccos; Complex64::acos,
    "arctan" Arctan; Complex64::atan,
    "arcsec" Arcsec; |z: Complex64| z.inv().acos(),
    "arccsc" Arccsc; |z: Complex64| z.inv().asin(),
    // defined piecewise on the sign of the real part so the value stays
    // continuous across the imaginary axis, where atan's branch cut sits
    "arccot" Arccot; |z: Complex64| {
        if z.re < 0.0 {
            -z.atan() - FRAC_PI_2
        } else {
            -z.atan() + FRAC_PI_2
        }
    },
}

complex_builtin! {
    "sinh" Sinh; Complex64::sinh,
    "cosh" Cosh; Complex64::cosh,
    "tanh" Tanh; Complex64::tanh,
    "sech" Sech; |z: Complex64| z.cosh().inv(),
    "csch" Csch; |z: Complex64| z.sinh().inv(),
    "coth" Coth; |z: Complex64| z.tanh().inv(),
    "arcsinh" Arcsinh; Complex64::asinh,
    "arccosh" Arccosh; Complex64::acosh,
    "arctanh" Arctanh; Complex64::atanh,
    "arcsech" Arcsech; |z: Complex64| z.inv().acosh(),
    "arccsch" Arccsch; |z: Complex64| z.inv().asinh(),
    "arccoth" Arccoth; |z: Complex64| z.inv().atanh(),
}

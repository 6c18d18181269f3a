//! Kernels related to powers, roots, and logarithms.

use super::impl_kernel;
use crate::value::Differentiable;

/// The power kernel, `abs(x) ^ y`.
///
/// Exponentiation is applied to the magnitude of the base so the result stays real-valued and
/// differentiable for non-integer exponents.
#[derive(Debug)]
pub struct Pow;

impl Pow {
    pub fn eval_static<T: Differentiable>(x: T, y: T) -> T {
        x.abs().pow(y)
    }

    /// Prints `abs(s1)^(s2)`, folding the `0`/`1` base and exponent identities.
    pub fn print_static(s1: &str, s2: &str) -> String {
        if s1 == "0" && s2 != "0" {
            "0".to_owned()
        } else if s1 == "1" {
            "1".to_owned()
        } else if s2 == "0" && s1 != "0" {
            "1".to_owned()
        } else if s2 == "1" {
            s1.to_owned()
        } else {
            format!("abs({})^({})", s1, s2)
        }
    }
}

/// The square root kernel, `sqrt(abs(x + y))`.
///
/// The two operands are summed before the root; the sign guard keeps the argument in the
/// function's real domain.
#[derive(Debug)]
pub struct Sqrt;

impl Sqrt {
    pub fn eval_static<T: Differentiable>(x: T, y: T) -> T {
        (x + y).abs().sqrt()
    }

    /// Prints `sqrt(s1 + s2)`, dropping whichever operand is `0`.
    pub fn print_static(s1: &str, s2: &str) -> String {
        if s2 == "0" && s1 != "0" {
            format!("sqrt({})", s1)
        } else if s1 == "0" && s2 != "0" {
            format!("sqrt({})", s2)
        } else if s1 == "0" && s2 == "0" {
            "0".to_owned()
        } else {
            format!("sqrt({} + {})", s1, s2)
        }
    }
}

/// The natural logarithm kernel, `log(x)`. The second operand is ignored.
#[derive(Debug)]
pub struct Log;

impl Log {
    pub fn eval_static<T: Differentiable>(x: T, _y: T) -> T {
        x.ln()
    }

    /// Prints `log(s1)`, folding `log(1)` to `0`. The second operand is discarded.
    pub fn print_static(s1: &str, _s2: &str) -> String {
        if s1 == "1" {
            "0".to_owned()
        } else {
            format!("log({})", s1)
        }
    }
}

impl_kernel! {
    "pow" Pow,
    "sqrt" Sqrt,
    "log" Log,
}

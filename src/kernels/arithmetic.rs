//! Kernels for the four arithmetic operations.

use super::impl_kernel;
use crate::value::Differentiable;

/// The addition kernel, `x + y`.
#[derive(Debug)]
pub struct Sum;

impl Sum {
    pub fn eval_static<T: Differentiable>(x: T, y: T) -> T {
        x + y
    }

    /// Prints `(s1+s2)`, folding `a + a` into `(2*a)` and dropping `0` operands.
    pub fn print_static(s1: &str, s2: &str) -> String {
        if s1 == s2 {
            format!("(2*{})", s1)
        } else if s1 == "0" {
            s2.to_owned()
        } else if s2 == "0" {
            s1.to_owned()
        } else {
            format!("({}+{})", s1, s2)
        }
    }
}

/// The subtraction kernel, `x - y`.
#[derive(Debug)]
pub struct Diff;

impl Diff {
    pub fn eval_static<T: Differentiable>(x: T, y: T) -> T {
        x - y
    }

    /// Prints `(s1-s2)`, cancelling `a - a` to `0` and dropping `0` operands.
    pub fn print_static(s1: &str, s2: &str) -> String {
        if s1 == s2 {
            "0".to_owned()
        } else if s1 == "0" {
            format!("(-{})", s2)
        } else if s2 == "0" {
            s1.to_owned()
        } else {
            format!("({}-{})", s1, s2)
        }
    }
}

/// The multiplication kernel, `x * y`.
#[derive(Debug)]
pub struct Mul;

impl Mul {
    pub fn eval_static<T: Differentiable>(x: T, y: T) -> T {
        x * y
    }

    /// Prints `(s1*s2)`, folding `a * a` into `a^2` and the `0`/`1` identities.
    pub fn print_static(s1: &str, s2: &str) -> String {
        if s1 == "0" || s2 == "0" {
            "0".to_owned()
        } else if s1 == s2 {
            format!("{}^2", s1)
        } else if s1 == "1" {
            s2.to_owned()
        } else if s2 == "1" {
            s1.to_owned()
        } else {
            format!("({}*{})", s1, s2)
        }
    }
}

/// The division kernel, `x / y`.
#[derive(Debug)]
pub struct Div;

impl Div {
    pub fn eval_static<T: Differentiable>(x: T, y: T) -> T {
        x / y
    }

    /// Prints `(s1/s2)`, cancelling `a / a` to `1` and folding the `0`/`1` identities.
    ///
    /// `0 / 0` intentionally falls through to the generic form; there is no indeterminate
    /// marker in the expression grammar.
    pub fn print_static(s1: &str, s2: &str) -> String {
        if s1 == "0" && s2 != "0" {
            "0".to_owned()
        } else if s1 == s2 {
            "1".to_owned()
        } else if s2 == "1" {
            s1.to_owned()
        } else {
            format!("({}/{})", s1, s2)
        }
    }
}

impl_kernel! {
    "sum" Sum,
    "diff" Diff,
    "mul" Mul,
    "div" Div,
}

//! Trigonometric kernels.

use super::impl_kernel;
use crate::value::Differentiable;

/// The sine kernel, `sin(x)`. The second operand is ignored.
#[derive(Debug)]
pub struct Sin;

impl Sin {
    pub fn eval_static<T: Differentiable>(x: T, _y: T) -> T {
        x.sin()
    }

    /// Prints `sin(s1)` unconditionally. The second operand is discarded.
    pub fn print_static(s1: &str, _s2: &str) -> String {
        format!("sin({})", s1)
    }
}

impl_kernel! {
    "sin" Sin,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;
    use pretty_assertions::assert_eq;

    #[test]
    fn sin_ignores_second_operand() {
        assert_float_absolute_eq!(
            Sin::eval_static(std::f64::consts::FRAC_PI_2, -100.0),
            1.0
        );
        assert_eq!(Sin::print_static("x", "anything"), "sin(x)");
        assert_eq!(Sin::print_static("x", "0"), "sin(x)");
        assert_eq!(Sin::print_static("0", "y"), "sin(0)");
    }
}

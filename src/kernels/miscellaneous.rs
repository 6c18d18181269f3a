//! Uncategorized kernels.

use super::impl_kernel;
use crate::value::Differentiable;

/// The sigmoid kernel, `1 / (1 + exp(-beta * t))`.
///
/// The first operand is the argument `t`, the second the steepness `beta`.
#[derive(Debug)]
pub struct Sig;

impl Sig {
    pub fn eval_static<T: Differentiable>(t: T, beta: T) -> T {
        T::one() / (T::one() + (-(beta * t)).exp())
    }

    /// Prints `sig(s1,s2)`. A `0` argument or a `0` steepness pins the sigmoid at its midpoint,
    /// so either folds to `0.5`.
    pub fn print_static(s1: &str, s2: &str) -> String {
        if s1 == "0" || s2 == "0" {
            "0.5".to_owned()
        } else {
            format!("sig({},{})", s1, s2)
        }
    }
}

impl_kernel! {
    "sig" Sig,
}

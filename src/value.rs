//! The capability trait that kernel evaluation is generic over.

use crate::consts::ONE;
use rug::Float;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A numeric type that kernels can evaluate over.
///
/// The trait captures the arithmetic and the named transcendental functions the kernel catalog
/// needs, nothing more. Implementations exist for plain [`f64`] and arbitrary-precision
/// [`rug::Float`]; an automatic-differentiation type (a dual or truncated-Taylor number) that
/// propagates derivatives through each operation satisfies the same bounds, and every kernel
/// then computes derivatives for free.
///
/// Implementations must be pure: no operation may mutate state observable outside the returned
/// value. Domain errors (division by zero, `ln` of a non-positive value) surface however the
/// implementing type signals them, typically as NaN or infinity; kernels neither detect nor
/// suppress them.
pub trait Differentiable:
    Sized
    + Clone
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// The multiplicative identity.
    fn one() -> Self;

    /// The exponential function, `e ^ self`.
    fn exp(self) -> Self;

    /// The natural logarithm.
    fn ln(self) -> Self;

    /// The sine, in radians.
    fn sin(self) -> Self;

    /// The square root.
    fn sqrt(self) -> Self;

    /// The absolute value.
    fn abs(self) -> Self;

    /// Raises `self` to the power `exponent`.
    fn pow(self, exponent: Self) -> Self;
}

impl Differentiable for f64 {
    fn one() -> Self {
        1.0
    }

    fn exp(self) -> Self {
        f64::exp(self)
    }

    fn ln(self) -> Self {
        f64::ln(self)
    }

    fn sin(self) -> Self {
        f64::sin(self)
    }

    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    fn abs(self) -> Self {
        f64::abs(self)
    }

    fn pow(self, exponent: Self) -> Self {
        f64::powf(self, exponent)
    }
}

impl Differentiable for Float {
    fn one() -> Self {
        ONE.clone()
    }

    fn exp(self) -> Self {
        Float::exp(self)
    }

    fn ln(self) -> Self {
        Float::ln(self)
    }

    fn sin(self) -> Self {
        Float::sin(self)
    }

    fn sqrt(self) -> Self {
        Float::sqrt(self)
    }

    fn abs(self) -> Self {
        Float::abs(self)
    }

    fn pow(self, exponent: Self) -> Self {
        rug::ops::Pow::pow(self, exponent)
    }
}

/// Evaluates `value` as an `f64`, for comparing implementations in tests.
#[cfg(test)]
fn to_f64(value: &Float) -> f64 {
    value.to_f64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::float;
    use assert_float_eq::assert_float_absolute_eq;

    /// `f64` and `Float` must agree on the full capability surface.
    #[test]
    fn f64_and_float_agree() {
        let cases = [0.25, 1.0, 2.5, 9.0];
        for x in cases {
            assert_float_absolute_eq!(Differentiable::exp(x), to_f64(&float(x).exp()));
            assert_float_absolute_eq!(Differentiable::ln(x), to_f64(&float(x).ln()));
            assert_float_absolute_eq!(Differentiable::sin(x), to_f64(&float(x).sin()));
            assert_float_absolute_eq!(Differentiable::sqrt(x), to_f64(&float(x).sqrt()));
        }
    }

    #[test]
    fn pow_matches() {
        let exact = to_f64(&Differentiable::pow(float(2), float(10)));
        assert_float_absolute_eq!(Differentiable::pow(2.0, 10.0), exact);
    }

    #[test]
    fn abs_of_negative() {
        assert_eq!(Differentiable::abs(-3.5), 3.5);
        assert_eq!(to_f64(&float(-3.5).abs()), 3.5);
    }
}

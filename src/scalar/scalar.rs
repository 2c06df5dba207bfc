use num_traits::{One, Zero};
use std::ops::{Add, Div, Mul, Sub};

/// Largest absolute difference at which two floating cells still compare equal.
pub const TOLERANCE: f64 = 1e-11;

/// A matrix cell, together with the equality rule of its numeric kind.
///
/// Exact kinds (machine integers, [`Fraction`](crate::scalar::fraction::Fraction))
/// compare with `==`. `f64` compares within [`TOLERANCE`]. There is no `f32`
/// impl: the tolerance is finer than `f32` resolution.
///
/// ```compile_fail
/// use gauss_invert::SquareMatrix;
///
/// let _ = SquareMatrix::<f32>::identity(2);
/// ```
pub trait Scalar:
    Clone
    + Zero
    + One
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + std::iter::Sum<Self>
    + std::fmt::Display
    + std::fmt::Debug
{
    fn approx_eq(&self, rhs: &Self) -> bool;

    /// Whether the value cannot serve as a pivot.
    fn is_negligible(&self) -> bool {
        self.approx_eq(&Self::zero())
    }

    /// `1 / self`. Truncates to zero for integers other than 1 and -1.
    fn reciprocal(&self) -> Self {
        Self::one() / self.clone()
    }

    fn negated(&self) -> Self {
        Self::zero() - self.clone()
    }
}

macro_rules! exact_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline(always)]
                fn approx_eq(&self, rhs: &$t) -> bool {
                    self == rhs
                }
            }
        )*
    };
}

macro_rules! floating_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline(always)]
                fn approx_eq(&self, rhs: &$t) -> bool {
                    (*self - *rhs).abs() <= TOLERANCE
                }
            }
        )*
    };
}

exact_scalar!(i8, i16, i32, i64, i128, isize);
floating_scalar!(f64);

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

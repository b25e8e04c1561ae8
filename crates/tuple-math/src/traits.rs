//! Traits describing the element types vectors can hold.

use std::{fmt, ops};

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Types that support the trigonometric functions needed for rotations and angles.
pub trait Trig: Sized {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes sine and cosine of `self` at once.
    fn sin_cos(self) -> (Self, Self);
    /// Computes the arccosine of `self`, in radians.
    fn acos(self) -> Self;
    /// Computes the four-quadrant arctangent of `self` (y) and `other` (x), in radians.
    fn atan2(self, other: Self) -> Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    /// Returns the square root of `self`. Negative values yield NaN for floats.
    fn sqrt(self) -> Self;
}

/// Types that support computing their absolute value.
pub trait Abs {
    /// Returns the absolute value of `self`.
    fn abs(self) -> Self;
}

/// Fused multiply-add.
///
/// Implementations for [`f32`] and [`f64`] forward to [`f32::mul_add`] and [`f64::mul_add`],
/// which compute `self * a + b` with a single rounding step.
pub trait MulAdd {
    /// Computes `self * a + b`.
    fn mul_add(self, a: Self, b: Self) -> Self;
}

/// Floating-point element types.
///
/// This bundles everything the length, normalization, geometry and interpolation operations need.
/// It is implemented for [`f32`] and [`f64`].
pub trait Float: Number + Sqrt + Abs + Trig + MulAdd + PartialOrd + fmt::Debug {
    /// `0.5`.
    const HALF: Self;
    /// `2.0`.
    const TWO: Self;
    /// Maximum deviation of a squared length from `1.0` that still counts as unit length.
    ///
    /// Only used by the debug-build precondition checks of [`Vector::project`] and
    /// [`Vector::reflect`].
    ///
    /// [`Vector::project`]: crate::Vector::project
    /// [`Vector::reflect`]: crate::Vector::reflect
    const UNIT_TOLERANCE: Self;
}

macro_rules! int_consts {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }
            impl One for $types {
                const ONE: Self = 1;
            }
        )+
    };
}
int_consts!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

macro_rules! float_impls {
    ($($ty:ident: $unit_tolerance:expr),+) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = 0.0;
            }

            impl One for $ty {
                const ONE: Self = 1.0;
            }

            impl Trig for $ty {
                fn sin(self) -> Self {
                    $ty::sin(self)
                }

                fn cos(self) -> Self {
                    $ty::cos(self)
                }

                fn sin_cos(self) -> (Self, Self) {
                    $ty::sin_cos(self)
                }

                fn acos(self) -> Self {
                    $ty::acos(self)
                }

                fn atan2(self, other: Self) -> Self {
                    $ty::atan2(self, other)
                }
            }

            impl Sqrt for $ty {
                fn sqrt(self) -> Self {
                    $ty::sqrt(self)
                }
            }

            impl Abs for $ty {
                fn abs(self) -> Self {
                    $ty::abs(self)
                }
            }

            impl MulAdd for $ty {
                #[inline]
                fn mul_add(self, a: Self, b: Self) -> Self {
                    $ty::mul_add(self, a, b)
                }
            }

            impl Float for $ty {
                const HALF: Self = 0.5;
                const TWO: Self = 2.0;
                const UNIT_TOLERANCE: Self = $unit_tolerance;
            }
        )+
    };
}
float_impls!(f32: 1e-4, f64: 1e-10);

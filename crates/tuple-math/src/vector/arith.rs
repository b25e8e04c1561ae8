//! Named component-wise arithmetic beyond the plain operators.

use crate::{Float, MulAdd, Number, Vector};

impl<T, const N: usize> Vector<T, N> {
    /// Reverse subtraction: computes `other - self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// assert_eq!(vec2(1.0, 2.0).rev_sub(vec2(10.0, 10.0)), vec2(9.0, 8.0));
    /// ```
    #[inline]
    pub fn rev_sub(self, other: Self) -> Self
    where
        T: Number,
    {
        other - self
    }

    /// Reverse division: computes `other / self` element-wise.
    ///
    /// Zero elements in `self` produce infinities or NaN, following IEEE 754.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// assert_eq!(vec2(2.0, 4.0).rev_div(vec2(1.0, 1.0)), vec2(0.5, 0.25));
    /// ```
    #[inline]
    pub fn rev_div(self, other: Self) -> Self
    where
        T: Number,
    {
        other / self
    }

    /// Fused multiply-add: computes `self * factor + addend` element-wise with a single rounding.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// let v = vec3(1.0, 2.0, 3.0).fma(vec3(2.0, 2.0, 2.0), vec3(0.5, 0.5, 0.5));
    /// assert_eq!(v, vec3(2.5, 4.5, 6.5));
    /// ```
    pub fn fma(self, factor: Self, addend: Self) -> Self
    where
        T: MulAdd + Copy,
    {
        Self::from_fn(|i| self[i].mul_add(factor[i], addend[i]))
    }

    /// Adds the element-wise product of `a` and `b` to `self`, computing `self + a * b` with a
    /// single rounding.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// let v = vec2(1.0, 1.0).mul_add(vec2(2.0, 3.0), vec2(4.0, 5.0));
    /// assert_eq!(v, vec2(9.0, 16.0));
    /// ```
    pub fn mul_add(self, a: Self, b: Self) -> Self
    where
        T: MulAdd + Copy,
    {
        Self::from_fn(|i| a[i].mul_add(b[i], self[i]))
    }

    /// Negates every element. Equivalent to `-self`.
    #[inline]
    pub fn invert(self) -> Self
    where
        T: Number,
    {
        -self
    }

    /// Computes `base - self`, the vector that takes `self` to `base`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// assert_eq!(vec2(0.25, 1.0).inverse(Vector::splat(1.0)), vec2(0.75, 0.0));
    /// ```
    #[inline]
    pub fn inverse(self, base: Self) -> Self
    where
        T: Number,
    {
        base - self
    }

    /// Multiplies every element by `0.5`.
    #[inline]
    pub fn half(self) -> Self
    where
        T: Float,
    {
        self * T::HALF
    }

    /// Multiplies every element by `factor`. Equivalent to `self * factor`.
    #[inline]
    pub fn scale(self, factor: T) -> Self
    where
        T: Number,
    {
        self * factor
    }
}

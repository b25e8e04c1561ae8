//! Length, reciprocal length and normalization, each with three ways of handling zero vectors.
//!
//! - The plain methods ([`Vector::length`], [`Vector::reciprocal_length`], [`Vector::normalize`])
//!   do not check for zero vectors. The caller must guarantee a non-zero input; otherwise the
//!   division by zero produces infinities or NaN.
//! - The `*_safe` methods return zero when every component is exactly zero.
//! - The `*_safe_within` methods return zero when every component lies within a tolerance margin.
//!
//! The `*_with` methods take an arbitrary [`ZeroCheck`] and back all of the above.

use crate::{Float, MulAdd, Number, Sqrt, Vector, ZeroCheck};

impl<T, const N: usize> Vector<T, N> {
    /// Returns the squared length of this vector.
    ///
    /// This is the same computation as `self.dot(self)`, so both always agree exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// assert_eq!(vec2(3.0, 4.0).squared_length(), 25.0);
    /// ```
    #[doc(alias = "length2")]
    #[inline]
    pub fn squared_length(&self) -> T
    where
        T: Number + MulAdd,
    {
        self.dot(*self)
    }

    /// Returns the length of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// assert_eq!(Vec3f::Z.length(), 1.0);
    /// ```
    #[doc(alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + MulAdd + Sqrt,
    {
        self.squared_length().sqrt()
    }

    /// Returns `1 / length`.
    ///
    /// A zero vector yields positive infinity. Use [`Vector::reciprocal_length_safe`] if the
    /// input may be zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// assert_eq!(vec2(3.0, 4.0).reciprocal_length(), 0.2);
    /// ```
    pub fn reciprocal_length(&self) -> T
    where
        T: Number + MulAdd + Sqrt,
    {
        T::ONE / self.length()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// A zero vector yields NaN in every component. Use [`Vector::normalize_safe`] if the input
    /// may be zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// assert_eq!(vec2(3.0, 4.0).normalize(), vec2(0.6, 0.8));
    /// ```
    #[doc(alias = "normal")]
    pub fn normalize(self) -> Self
    where
        T: Number + MulAdd + Sqrt,
    {
        self / self.length()
    }

    /// Returns the length of this vector, or zero if `check` classifies it as a zero vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// let v = vec2(1.0, -1.0);
    /// assert_eq!(v.length_with(ZeroCheck::ComponentSum), 0.0);
    /// assert_eq!(v.length_with(ZeroCheck::Exact), 2.0f64.sqrt());
    /// ```
    pub fn length_with(&self, check: ZeroCheck<T>) -> T
    where
        T: Float,
    {
        self.checked_length("length", check).unwrap_or(T::ZERO)
    }

    /// Returns `1 / length`, or zero if `check` classifies this vector as a zero vector.
    ///
    /// Zero is also returned when the length itself rounds to zero, so the result is never
    /// infinite.
    pub fn reciprocal_length_with(&self, check: ZeroCheck<T>) -> T
    where
        T: Float,
    {
        match self.checked_length("reciprocal_length", check) {
            Some(len) => T::ONE / len,
            None => T::ZERO,
        }
    }

    /// Normalizes this vector, or returns [`Vector::ZERO`] if `check` classifies it as a zero
    /// vector.
    ///
    /// [`Vector::ZERO`] is also returned when the length itself rounds to zero, which happens for
    /// non-zero vectors whose squared length underflows.
    pub fn normalize_with(self, check: ZeroCheck<T>) -> Self
    where
        T: Float,
    {
        match self.checked_length("normalize", check) {
            Some(len) => self / len,
            None => Self::ZERO,
        }
    }

    /// Returns the length of this vector, or zero for an exact zero vector.
    ///
    /// Uses [`ZeroCheck::Exact`].
    #[inline]
    pub fn length_safe(&self) -> T
    where
        T: Float,
    {
        self.length_with(ZeroCheck::Exact)
    }

    /// Returns `1 / length`, or zero for an exact zero vector.
    ///
    /// Uses [`ZeroCheck::Exact`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// assert_eq!(Vec3f::ZERO.reciprocal_length_safe(), 0.0);
    /// assert_eq!(vec2(0.0, 2.0).reciprocal_length_safe(), 0.5);
    /// ```
    #[inline]
    pub fn reciprocal_length_safe(&self) -> T
    where
        T: Float,
    {
        self.reciprocal_length_with(ZeroCheck::Exact)
    }

    /// Normalizes this vector, or returns [`Vector::ZERO`] for an exact zero vector.
    ///
    /// Uses [`ZeroCheck::Exact`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// assert_eq!(Vec2f::ZERO.normalize_safe(), Vec2f::ZERO);
    /// assert_eq!(vec2(0.0, -3.0).normalize_safe(), vec2(0.0, -1.0));
    /// ```
    #[inline]
    pub fn normalize_safe(self) -> Self
    where
        T: Float,
    {
        self.normalize_with(ZeroCheck::Exact)
    }

    /// Returns the length of this vector, or zero if every component lies within
    /// `[-tolerance, tolerance]`.
    ///
    /// Uses [`ZeroCheck::Margin`].
    #[inline]
    pub fn length_safe_within(&self, tolerance: T) -> T
    where
        T: Float,
    {
        self.length_with(ZeroCheck::Margin(tolerance))
    }

    /// Returns `1 / length`, or zero if every component lies within `[-tolerance, tolerance]`.
    ///
    /// Uses [`ZeroCheck::Margin`].
    #[inline]
    pub fn reciprocal_length_safe_within(&self, tolerance: T) -> T
    where
        T: Float,
    {
        self.reciprocal_length_with(ZeroCheck::Margin(tolerance))
    }

    /// Normalizes this vector, or returns [`Vector::ZERO`] if every component lies within
    /// `[-tolerance, tolerance]`.
    ///
    /// Uses [`ZeroCheck::Margin`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// assert_eq!(vec2(0.0001, 0.0001).normalize_safe_within(0.001), Vec2d::ZERO);
    /// assert_eq!(vec2(0.0, 0.5).normalize_safe_within(0.001), Vec2d::Y);
    /// ```
    #[inline]
    pub fn normalize_safe_within(self, tolerance: T) -> Self
    where
        T: Float,
    {
        self.normalize_with(ZeroCheck::Margin(tolerance))
    }

    /// Returns the distance between the points `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// assert_eq!(vec2(1.0, 1.0).distance(vec2(4.0, 5.0)), 5.0);
    /// ```
    pub fn distance(self, other: Self) -> T
    where
        T: Number + MulAdd + Sqrt,
    {
        (other - self).length()
    }

    /// Returns the squared distance between the points `self` and `other`.
    pub fn distance_squared(self, other: Self) -> T
    where
        T: Number + MulAdd,
    {
        (other - self).squared_length()
    }

    /// Returns the length of `self`, or `None` if `check` classifies it as zero or the length
    /// rounds to zero.
    fn checked_length(&self, op: &str, check: ZeroCheck<T>) -> Option<T>
    where
        T: Float,
    {
        if self.is_zero(check) {
            log::trace!("{}: {:?} is zero under {:?}, returning zero", op, self, check);
            return None;
        }

        let len = self.length();
        if len == T::ZERO {
            log::trace!("{}: length of {:?} underflows to zero, returning zero", op, self);
            return None;
        }
        Some(len)
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec2, vec3, Vec2d, Vec2f, Vec3d, Vec3f, ZeroCheck};

    #[test]
    fn lengths() {
        assert_eq!(vec3(2.0, 3.0, 6.0).squared_length(), 49.0);
        assert_eq!(vec3(2.0, 3.0, 6.0).length(), 7.0);
        assert_eq!(vec3(2.0, 3.0, 6.0).reciprocal_length(), 1.0 / 7.0);
        assert_eq!(Vec3d::ZERO.length(), 0.0);
    }

    #[test]
    fn unchecked_zero() {
        assert_eq!(Vec3f::ZERO.reciprocal_length(), f32::INFINITY);
        assert!(Vec3f::ZERO.normalize().x.is_nan());
    }

    #[test]
    fn safe_exact() {
        assert_eq!(Vec3d::ZERO.length_safe(), 0.0);
        assert_eq!(Vec3d::ZERO.reciprocal_length_safe(), 0.0);
        assert_eq!(Vec3d::ZERO.normalize_safe(), Vec3d::ZERO);

        assert_eq!(vec2(3.0, 4.0).length_safe(), 5.0);
        assert_eq!(vec2(3.0, 4.0).reciprocal_length_safe(), 0.2);
        assert_eq!(vec2(3.0, 4.0).normalize_safe(), vec2(0.6, 0.8));

        // Tiny but non-zero vectors are still normalized.
        let tiny = vec2(2.0f64.powi(-300), 0.0);
        assert_eq!(tiny.normalize_safe(), Vec2d::X);
    }

    #[test]
    fn safe_underflowing_length() {
        let _ = env_logger::builder().is_test(true).try_init();

        let tiny = vec2(1e-30f32, 0.0);
        assert_eq!(tiny.squared_length(), 0.0);
        assert!(!tiny.is_zero(ZeroCheck::Exact));

        assert_eq!(tiny.length_safe(), 0.0);
        assert_eq!(tiny.reciprocal_length_safe(), 0.0);
        assert_eq!(tiny.normalize_safe(), Vec2f::ZERO);
        assert_eq!(tiny.normalize_safe_within(1e-35), Vec2f::ZERO);
        assert_eq!(tiny.reciprocal_length_safe_within(1e-35), 0.0);

        let tiny = vec3(0.0, -1e-200f64, 1e-200);
        assert_eq!(tiny.normalize_safe(), Vec3d::ZERO);
        assert_eq!(tiny.reciprocal_length_safe(), 0.0);
    }

    #[test]
    fn safe_margin() {
        let v = vec2(0.0001, 0.0001);
        assert_eq!(v.length_safe_within(0.001), 0.0);
        assert_eq!(v.reciprocal_length_safe_within(0.001), 0.0);
        assert_eq!(v.normalize_safe_within(0.001), Vec2d::ZERO);

        assert_approx_eq!(v.length_safe_within(0.00001), v.length());
        assert_approx_eq!(v.normalize_safe_within(0.00001).length(), 1.0).abs(1e-15);
    }

    #[test]
    fn component_sum_policy() {
        let v = vec3(1.0, -2.0, 1.0);
        assert_eq!(v.length_with(ZeroCheck::ComponentSum), 0.0);
        assert_eq!(v.reciprocal_length_with(ZeroCheck::ComponentSum), 0.0);
        assert_eq!(v.normalize_with(ZeroCheck::ComponentSum), Vec3d::ZERO);

        assert_approx_eq!(v.length_with(ZeroCheck::Exact), 6.0f64.sqrt());
    }

    #[test]
    fn normalized_length_is_one() {
        for v in [vec3(1.0, 2.0, 3.0), vec3(-1e-3, 5e-4, 0.0), vec3(1e6, -3e6, 2e5)] {
            assert_approx_eq!(v.normalize().length(), 1.0).abs(1e-15);
        }
    }

    #[test]
    fn distance() {
        assert_eq!(vec3(1.0, 2.0, 3.0).distance(vec3(1.0, 2.0, 3.0)), 0.0);
        assert_eq!(vec2(0.0, 0.0).distance_squared(vec2(-3.0, 4.0)), 25.0);
    }
}

//! Linear interpolation and integration.

use crate::{Float, MulAdd, Number, Vector};

impl<T, const N: usize> Vector<T, N> {
    /// Linearly interpolates between `self` and `to`, computing `(1 - alpha) * self + alpha * to`.
    ///
    /// `alpha` is expected to lie in `[0, 1]`. An `alpha` of exactly 0 returns `self` and an
    /// `alpha` of exactly 1 returns `to`, both unmodified.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// let a = vec2(0.0, 0.0);
    /// let b = vec2(10.0, 10.0);
    /// assert_eq!(a.lerp(b, 0.5), vec2(5.0, 5.0));
    /// assert_eq!(a.lerp(b, 1.0), b);
    /// ```
    #[doc(alias = "mix")]
    pub fn lerp(self, to: Self, alpha: T) -> Self
    where
        T: Float,
    {
        if alpha == T::ZERO {
            return self;
        }
        if alpha == T::ONE {
            return to;
        }

        let beta = T::ONE - alpha;
        Self::from_fn(|i| self[i].mul_add(beta, alpha * to[i]))
    }

    /// Linearly interpolates between `self` and `to` as `self + (to - self) * alpha`.
    ///
    /// This form needs fewer operations than [`Vector::lerp`] but is less precise for `alpha`
    /// values in between the endpoints. Like [`Vector::lerp`], an `alpha` of exactly 0 or 1
    /// returns the respective endpoint unmodified.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// let a = vec2(0.1, 7.0);
    /// let b = vec2(0.7, -3.0);
    /// assert_eq!(a.fast_lerp(b, 1.0), b);
    /// assert_approx_eq!(a.fast_lerp(b, 0.5), a.lerp(b, 0.5));
    /// ```
    pub fn fast_lerp(self, to: Self, alpha: T) -> Self
    where
        T: Float,
    {
        if alpha == T::ZERO {
            return self;
        }
        if alpha == T::ONE {
            return to;
        }

        (to - self).fma(Self::splat(alpha), self)
    }

    /// Advances `self` along `rate` by `step`, computing `self + rate * step`.
    ///
    /// Unlike interpolation, `rate` is a delta rather than an endpoint and `step` is unbounded.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// let position = vec2(1.0, 1.0);
    /// let velocity = vec2(2.0, -0.5);
    /// assert_eq!(position.integrate_linear(velocity, 4.0), vec2(9.0, -1.0));
    /// ```
    pub fn integrate_linear(self, rate: Self, step: T) -> Self
    where
        T: Number + MulAdd,
    {
        Self::from_fn(|i| rate[i].mul_add(step, self[i]))
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec2, vec3, Vec3f};

    #[test]
    fn endpoints_are_exact() {
        let a = vec3(0.1, 0.2, 0.3);
        let b = vec3(1e-8, -7.3, 1e8);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.fast_lerp(b, 0.0), a);
        assert_eq!(a.fast_lerp(b, 1.0), b);
    }

    #[test]
    fn midpoint() {
        assert_eq!(vec2(0.0, 0.0).lerp(vec2(10.0, 10.0), 0.5), vec2(5.0, 5.0));
        assert_eq!(vec2(0.0, 0.0).fast_lerp(vec2(10.0, 10.0), 0.5), vec2(5.0, 5.0));
        assert_eq!(vec2(-2.0f32, 4.0).lerp(vec2(2.0, 8.0), 0.25), vec2(-1.0, 5.0));
    }

    #[test]
    fn lerp_and_fast_lerp_agree() {
        let a = vec3(1.5, -2.25, 1e3);
        let b = vec3(-0.5, 4.0, -1e3);
        for alpha in [0.1, 0.3, 0.7, 0.9] {
            assert_approx_eq!(a.lerp(b, alpha), a.fast_lerp(b, alpha)).abs(1e-12);
        }
    }

    #[test]
    fn extrapolation() {
        assert_approx_eq!(vec2(0.0, 1.0).lerp(vec2(1.0, 2.0), 2.0), vec2(2.0, 3.0));
        assert_approx_eq!(vec2(0.0, 1.0).lerp(vec2(1.0, 2.0), -1.0), vec2(-1.0, 0.0));
    }

    #[test]
    fn integrate() {
        let v = Vec3f::ZERO.integrate_linear(vec3(1.0, 2.0, 3.0), 0.5);
        assert_eq!(v, vec3(0.5, 1.0, 1.5));
        assert_eq!(v.integrate_linear(vec3(1.0, 2.0, 3.0), 0.0), v);
        assert_eq!(v.integrate_linear(vec3(1.0, 1.0, 1.0), -10.0), vec3(-9.5, -9.0, -8.5));
    }
}

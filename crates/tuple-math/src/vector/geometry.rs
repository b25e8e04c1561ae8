//! Dot and cross products, projection, reflection, rotation and angles.

use crate::{Float, MulAdd, Number, Trig, Vector};

impl<T, const N: usize> Vector<T, N> {
    /// Computes the dot product between `self` and `other`.
    ///
    /// The products are accumulated with fused multiply-adds from the last element inward, so
    /// for 3 dimensions this is `x1.mul_add(x2, y1.mul_add(y2, z1 * z2))`.
    ///
    /// Geometrically, the sign of the dot product tells the relative angle of the vectors: positive
    /// below 90°, zero at exactly 90°, negative above.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// assert_eq!(vec3(1.0, 3.0, -5.0).dot(vec3(4.0, -2.0, -1.0)), 3.0);
    /// assert_eq!(Vec3f::X.dot(Vec3f::Y), 0.0);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number + MulAdd,
    {
        let mut pairs = self.0.into_iter().zip(other.0).rev();
        match pairs.next() {
            Some((a, b)) => pairs.fold(a * b, |acc, (a, b)| a.mul_add(b, acc)),
            None => T::ZERO,
        }
    }

    /// Projects `self` onto the direction `target`.
    ///
    /// `target` must be of unit length. It is not normalized here, and a non-unit `target` yields
    /// a result scaled by its squared length. Debug builds log a warning when this precondition
    /// is violated.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// assert_eq!(vec2(3.0, 4.0).project(Vec2f::X), vec2(3.0, 0.0));
    /// ```
    pub fn project(self, target: Self) -> Self
    where
        T: Float,
    {
        warn_if_not_unit("project", &target);
        target * self.dot(target)
    }

    /// Reflects `self` off a surface with the given `normal`.
    ///
    /// Computes `self - 2 * dot(self, normal) * normal`. Like [`Vector::project`], `normal` must
    /// be of unit length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// assert_eq!(vec2(1.0, -1.0).reflect(Vec2f::Y), vec2(1.0, 1.0));
    /// ```
    pub fn reflect(self, normal: Self) -> Self
    where
        T: Float,
    {
        warn_if_not_unit("reflect", &normal);
        let factor = -(T::TWO * self.dot(normal));
        Self::from_fn(|i| normal[i].mul_add(factor, self[i]))
    }

    /// Computes the smallest positive angle between `self` and `other`, in radians.
    ///
    /// Both vectors must have non-zero length for the result to be meaningful.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// assert_approx_eq!(Vec3f::Y.abs_angle_to(Vec3f::X), FRAC_PI_2);
    /// ```
    pub fn abs_angle_to(self, other: Self) -> T
    where
        T: Float,
    {
        let cos = self.dot(other) / (self.length() * other.length());
        // Rounding can push the cosine of (anti)parallel vectors just past ±1.
        let one = T::ONE;
        let cos = if cos > one {
            one
        } else if cos < -one {
            -one
        } else {
            cos
        };
        cos.acos()
    }
}

impl<T> Vector<T, 2> {
    /// Rotates `self` counterclockwise by `radians`.
    ///
    /// This assumes that the X axis points right and the Y axis points up. The result is
    /// `(x cos - y sin, x sin + y cos)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// assert_approx_eq!(Vec2f::X.rotate(FRAC_PI_2), Vec2f::Y);
    /// ```
    pub fn rotate(self, radians: T) -> Self
    where
        T: Number + MulAdd + Trig,
    {
        let (sin, cos) = radians.sin_cos();
        let [x, y] = self.0;
        Self([x.mul_add(cos, -(y * sin)), x.mul_add(sin, y * cos)])
    }

    /// Rotates `self` clockwise by `radians`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// assert_approx_eq!(Vec2f::Y.rotate_clockwise(FRAC_PI_2), Vec2f::X);
    /// ```
    pub fn rotate_clockwise(self, radians: T) -> Self
    where
        T: Number + MulAdd + Trig,
    {
        self.rotate(-radians)
    }

    /// Computes the [perpendicular dot product] of `self` and `other`.
    ///
    /// This is the Z component of the cross product of both vectors extended with `z = 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// assert_eq!(Vec2f::X.perp_dot(Vec2f::Y), 1.0);
    /// assert_eq!(Vec2f::Y.perp_dot(Vec2f::X), -1.0);
    /// ```
    ///
    /// [perpendicular dot product]: https://mathworld.wolfram.com/PerpDotProduct.html
    pub fn perp_dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.extend(T::ZERO).cross(other.extend(T::ZERO)).z
    }

    /// Computes the signed clockwise rotation in radians that aligns `self` with `other`.
    ///
    /// This assumes the Y axis points up. If it points down, swap the arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// assert_approx_eq!(Vec2f::Y.signed_angle_to(Vec2f::X), FRAC_PI_2);
    /// assert_approx_eq!(Vec2f::X.signed_angle_to(Vec2f::Y), -FRAC_PI_2);
    /// ```
    pub fn signed_angle_to(self, other: Self) -> T
    where
        T: Number + MulAdd + Trig,
    {
        -self.perp_dot(other).atan2(self.dot(other))
    }
}

impl<T> Vector<T, 3> {
    /// Computes the right-handed cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs. Swapping the arguments negates it exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [x1, y1, z1] = self.0;
        let [x2, y2, z2] = other.0;

        #[rustfmt::skip]
        let cross = Self([
            y1 * z2 - z1 * y2,
            z1 * x2 - x1 * z2,
            x1 * y2 - y1 * x2,
        ]);
        cross
    }
}

fn warn_if_not_unit<T: Float, const N: usize>(op: &str, v: &Vector<T, N>) {
    if cfg!(debug_assertions) {
        let len2 = v.squared_length();
        if (len2 - T::ONE).abs() > T::UNIT_TOLERANCE {
            log::warn!(
                "`{}` expects a unit-length vector, got {:?} (squared length {:?})",
                op,
                v,
                len2
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use crate::{assert_approx_eq, vec2, vec3, Vec2d, Vec3d};

    #[test]
    fn dot() {
        assert_eq!(vec3(1.0, 0.0, 0.0).dot(vec3(0.0, 1.0, 0.0)), 0.0);
        assert_eq!(vec3(1.0, 3.0, -5.0).dot(vec3(1.0, 3.0, -5.0)), 35.0);
        assert_eq!(vec2(2.0f32, 3.0).dot(vec2(4.0, -1.0)), 5.0);
    }

    #[test]
    fn cross() {
        assert_eq!(Vec3d::X.cross(Vec3d::Y), Vec3d::Z);
        assert_eq!(Vec3d::Y.cross(Vec3d::Z), Vec3d::X);
        assert_eq!(Vec3d::Z.cross(Vec3d::X), Vec3d::Y);

        let a = vec3(0.3, -1.7, 2.9);
        let b = vec3(-4.1, 0.2, 1.3);
        assert_eq!(a.cross(b), -b.cross(a));
        assert_approx_eq!(a.cross(b).dot(a), 0.0).abs(1e-12);
        assert_approx_eq!(a.cross(b).dot(b), 0.0).abs(1e-12);
    }

    #[test]
    fn project() {
        let v = vec3(2.0, -3.0, 4.0);
        assert_eq!(v.project(Vec3d::Y), vec3(0.0, -3.0, 0.0));

        let diag = vec2(1.0, 1.0).normalize();
        assert_approx_eq!(vec2(2.0, 0.0).project(diag), vec2(1.0, 1.0)).abs(1e-12);
    }

    #[test]
    fn project_non_unit_target_is_scaled() {
        let _ = env_logger::builder().is_test(true).try_init();

        // Squared length 4 scales the projection by 4.
        assert_eq!(vec2(3.0, 4.0).project(vec2(2.0, 0.0)), vec2(12.0, 0.0));
    }

    #[test]
    fn reflect() {
        assert_eq!(vec2(1.0, -1.0).reflect(Vec2d::Y), vec2(1.0, 1.0));
        assert_eq!(vec3(1.0, 2.0, 3.0).reflect(Vec3d::Z), vec3(1.0, 2.0, -3.0));

        let n = vec2(-1.0, 1.0).normalize();
        assert_approx_eq!(vec2(1.0, 0.0).reflect(n), vec2(0.0, 1.0)).abs(1e-12);
    }

    #[test]
    fn rotate() {
        assert_approx_eq!(Vec2d::X.rotate(FRAC_PI_2), Vec2d::Y);
        assert_approx_eq!(Vec2d::Y.rotate(FRAC_PI_2), -Vec2d::X);
        assert_approx_eq!(Vec2d::X.rotate(PI), -Vec2d::X).abs(1e-15);
        assert_approx_eq!(Vec2d::Y.rotate_clockwise(FRAC_PI_2), Vec2d::X);
        assert_eq!(vec2(3.0, 4.0).rotate(0.0), vec2(3.0, 4.0));

        let v = vec2(1.5, -0.5);
        assert_approx_eq!(v.rotate(1.0).length(), v.length()).abs(1e-12);
    }

    #[test]
    fn angles() {
        assert_approx_eq!(Vec3d::Y.abs_angle_to(Vec3d::X), FRAC_PI_2);
        assert_approx_eq!(Vec3d::Y.abs_angle_to(Vec3d::Y), 0.0);
        assert_approx_eq!(Vec3d::Y.abs_angle_to(-Vec3d::Y), PI);
        assert_approx_eq!(vec2(1.0, 1.0).abs_angle_to(vec2(1.0, -1.0)), FRAC_PI_2);

        assert_approx_eq!(Vec2d::Y.signed_angle_to(Vec2d::X), FRAC_PI_2);
        assert_approx_eq!(Vec2d::X.signed_angle_to(Vec2d::Y), -FRAC_PI_2);
        assert_approx_eq!(
            Vec2d::Y.rotate(100f64.to_radians()).signed_angle_to(Vec2d::Y),
            100f64.to_radians()
        )
        .abs(1e-12);
    }
}

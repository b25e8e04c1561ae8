//! Free-function forms of the vector operations.
//!
//! Every function accepts anything convertible into a [`Vector`]: vectors themselves, arrays
//! (`[x, y]`) and tuples (`(x, y, z)`). This suits call sites that work with raw components and
//! would otherwise have to construct vectors first.
//!
//! ```
//! use tuple_math::{func, vec2, vec3};
//!
//! assert_eq!(func::add((1.0, 2.0), (3.0, 4.0)), vec2(4.0, 6.0));
//! assert_eq!(func::dot([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), 0.0);
//! assert_eq!(func::cross((1.0, 0.0, 0.0), (0.0, 1.0, 0.0)), vec3(0.0, 0.0, 1.0));
//! assert_eq!(func::normalize((3.0, 4.0)), vec2(0.6, 0.8));
//! assert_eq!(func::lerp((0.0, 0.0), (10.0, 10.0), 0.5), vec2(5.0, 5.0));
//! ```
//!
//! The functions return [`Vector`]s; combine them with [`Vector::extract_into`] or `relay` to
//! deliver results elsewhere.

use crate::{Extremum, Float, MulAdd, Number, Trig, Vector, ZeroCheck};

/// `a + b`, element-wise.
pub fn add<T: Number, const N: usize>(
    a: impl Into<Vector<T, N>>,
    b: impl Into<Vector<T, N>>,
) -> Vector<T, N> {
    a.into() + b.into()
}

/// `a - b`, element-wise.
pub fn sub<T: Number, const N: usize>(
    a: impl Into<Vector<T, N>>,
    b: impl Into<Vector<T, N>>,
) -> Vector<T, N> {
    a.into() - b.into()
}

/// `b - a`, element-wise. See [`Vector::rev_sub`].
pub fn rev_sub<T: Number, const N: usize>(
    a: impl Into<Vector<T, N>>,
    b: impl Into<Vector<T, N>>,
) -> Vector<T, N> {
    a.into().rev_sub(b.into())
}

/// `a * b`, element-wise.
pub fn mul<T: Number, const N: usize>(
    a: impl Into<Vector<T, N>>,
    b: impl Into<Vector<T, N>>,
) -> Vector<T, N> {
    a.into() * b.into()
}

/// `a / b`, element-wise.
pub fn div<T: Number, const N: usize>(
    a: impl Into<Vector<T, N>>,
    b: impl Into<Vector<T, N>>,
) -> Vector<T, N> {
    a.into() / b.into()
}

/// `b / a`, element-wise. See [`Vector::rev_div`].
pub fn rev_div<T: Number, const N: usize>(
    a: impl Into<Vector<T, N>>,
    b: impl Into<Vector<T, N>>,
) -> Vector<T, N> {
    a.into().rev_div(b.into())
}

/// `v * factor + addend` with a single rounding. See [`Vector::fma`].
pub fn fma<T: MulAdd + Copy, const N: usize>(
    v: impl Into<Vector<T, N>>,
    factor: impl Into<Vector<T, N>>,
    addend: impl Into<Vector<T, N>>,
) -> Vector<T, N> {
    v.into().fma(factor.into(), addend.into())
}

/// `v + a * b` with a single rounding. See [`Vector::mul_add`].
pub fn mul_add<T: MulAdd + Copy, const N: usize>(
    v: impl Into<Vector<T, N>>,
    a: impl Into<Vector<T, N>>,
    b: impl Into<Vector<T, N>>,
) -> Vector<T, N> {
    v.into().mul_add(a.into(), b.into())
}

/// `-v`.
pub fn invert<T: Number, const N: usize>(v: impl Into<Vector<T, N>>) -> Vector<T, N> {
    v.into().invert()
}

/// `base - v`. See [`Vector::inverse`].
pub fn inverse<T: Number, const N: usize>(
    v: impl Into<Vector<T, N>>,
    base: impl Into<Vector<T, N>>,
) -> Vector<T, N> {
    v.into().inverse(base.into())
}

/// `v * 0.5`.
pub fn half<T: Float, const N: usize>(v: impl Into<Vector<T, N>>) -> Vector<T, N> {
    v.into().half()
}

/// `v * factor`.
pub fn scale<T: Number, const N: usize>(v: impl Into<Vector<T, N>>, factor: T) -> Vector<T, N> {
    v.into().scale(factor)
}

/// See [`Vector::squared_length`].
pub fn squared_length<T: Number + MulAdd, const N: usize>(v: impl Into<Vector<T, N>>) -> T {
    v.into().squared_length()
}

/// See [`Vector::length`]. Not checked for zero vectors.
pub fn length<T: Float, const N: usize>(v: impl Into<Vector<T, N>>) -> T {
    v.into().length()
}

/// See [`Vector::length_with`].
pub fn length_with<T: Float, const N: usize>(v: impl Into<Vector<T, N>>, check: ZeroCheck<T>) -> T {
    v.into().length_with(check)
}

/// Length, or zero for an exact zero vector. See [`Vector::length_safe`].
pub fn length_safe<T: Float, const N: usize>(v: impl Into<Vector<T, N>>) -> T {
    v.into().length_safe()
}

/// Length, or zero within `tolerance`. See [`Vector::length_safe_within`].
pub fn length_safe_within<T: Float, const N: usize>(v: impl Into<Vector<T, N>>, tolerance: T) -> T {
    v.into().length_safe_within(tolerance)
}

/// See [`Vector::reciprocal_length`]. Not checked for zero vectors.
pub fn reciprocal_length<T: Float, const N: usize>(v: impl Into<Vector<T, N>>) -> T {
    v.into().reciprocal_length()
}

/// See [`Vector::reciprocal_length_with`].
pub fn reciprocal_length_with<T: Float, const N: usize>(
    v: impl Into<Vector<T, N>>,
    check: ZeroCheck<T>,
) -> T {
    v.into().reciprocal_length_with(check)
}

/// See [`Vector::reciprocal_length_safe`].
pub fn reciprocal_length_safe<T: Float, const N: usize>(v: impl Into<Vector<T, N>>) -> T {
    v.into().reciprocal_length_safe()
}

/// See [`Vector::reciprocal_length_safe_within`].
pub fn reciprocal_length_safe_within<T: Float, const N: usize>(
    v: impl Into<Vector<T, N>>,
    tolerance: T,
) -> T {
    v.into().reciprocal_length_safe_within(tolerance)
}

/// See [`Vector::normalize`]. Not checked for zero vectors.
pub fn normalize<T: Float, const N: usize>(v: impl Into<Vector<T, N>>) -> Vector<T, N> {
    v.into().normalize()
}

/// See [`Vector::normalize_with`].
pub fn normalize_with<T: Float, const N: usize>(
    v: impl Into<Vector<T, N>>,
    check: ZeroCheck<T>,
) -> Vector<T, N> {
    v.into().normalize_with(check)
}

/// See [`Vector::normalize_safe`].
pub fn normalize_safe<T: Float, const N: usize>(v: impl Into<Vector<T, N>>) -> Vector<T, N> {
    v.into().normalize_safe()
}

/// See [`Vector::normalize_safe_within`].
pub fn normalize_safe_within<T: Float, const N: usize>(
    v: impl Into<Vector<T, N>>,
    tolerance: T,
) -> Vector<T, N> {
    v.into().normalize_safe_within(tolerance)
}

/// Distance between the points `a` and `b`.
pub fn distance<T: Float, const N: usize>(
    a: impl Into<Vector<T, N>>,
    b: impl Into<Vector<T, N>>,
) -> T {
    a.into().distance(b.into())
}

/// Squared distance between the points `a` and `b`.
pub fn distance_squared<T: Number + MulAdd, const N: usize>(
    a: impl Into<Vector<T, N>>,
    b: impl Into<Vector<T, N>>,
) -> T {
    a.into().distance_squared(b.into())
}

/// See [`Vector::dot`].
pub fn dot<T: Number + MulAdd, const N: usize>(
    a: impl Into<Vector<T, N>>,
    b: impl Into<Vector<T, N>>,
) -> T {
    a.into().dot(b.into())
}

/// See [`Vector::cross`].
pub fn cross<T: Number>(a: impl Into<Vector<T, 3>>, b: impl Into<Vector<T, 3>>) -> Vector<T, 3> {
    a.into().cross(b.into())
}

/// See [`Vector::project`]. `target` must be of unit length.
pub fn project<T: Float, const N: usize>(
    v: impl Into<Vector<T, N>>,
    target: impl Into<Vector<T, N>>,
) -> Vector<T, N> {
    v.into().project(target.into())
}

/// See [`Vector::reflect`]. `normal` must be of unit length.
pub fn reflect<T: Float, const N: usize>(
    v: impl Into<Vector<T, N>>,
    normal: impl Into<Vector<T, N>>,
) -> Vector<T, N> {
    v.into().reflect(normal.into())
}

/// Counterclockwise 2D rotation. See [`Vector::rotate`].
pub fn rotate<T: Number + MulAdd + Trig>(v: impl Into<Vector<T, 2>>, radians: T) -> Vector<T, 2> {
    v.into().rotate(radians)
}

/// Clockwise 2D rotation. See [`Vector::rotate_clockwise`].
pub fn rotate_clockwise<T: Number + MulAdd + Trig>(
    v: impl Into<Vector<T, 2>>,
    radians: T,
) -> Vector<T, 2> {
    v.into().rotate_clockwise(radians)
}

/// See [`Vector::perp_dot`].
pub fn perp_dot<T: Number>(a: impl Into<Vector<T, 2>>, b: impl Into<Vector<T, 2>>) -> T {
    a.into().perp_dot(b.into())
}

/// See [`Vector::abs_angle_to`].
pub fn abs_angle<T: Float, const N: usize>(
    a: impl Into<Vector<T, N>>,
    b: impl Into<Vector<T, N>>,
) -> T {
    a.into().abs_angle_to(b.into())
}

/// See [`Vector::signed_angle_to`].
pub fn signed_angle<T: Number + MulAdd + Trig>(
    a: impl Into<Vector<T, 2>>,
    b: impl Into<Vector<T, 2>>,
) -> T {
    a.into().signed_angle_to(b.into())
}

/// See [`Vector::lerp`].
pub fn lerp<T: Float, const N: usize>(
    from: impl Into<Vector<T, N>>,
    to: impl Into<Vector<T, N>>,
    alpha: T,
) -> Vector<T, N> {
    from.into().lerp(to.into(), alpha)
}

/// See [`Vector::fast_lerp`].
pub fn fast_lerp<T: Float, const N: usize>(
    from: impl Into<Vector<T, N>>,
    to: impl Into<Vector<T, N>>,
    alpha: T,
) -> Vector<T, N> {
    from.into().fast_lerp(to.into(), alpha)
}

/// See [`Vector::integrate_linear`].
pub fn integrate_linear<T: Number + MulAdd, const N: usize>(
    v: impl Into<Vector<T, N>>,
    rate: impl Into<Vector<T, N>>,
    step: T,
) -> Vector<T, N> {
    v.into().integrate_linear(rate.into(), step)
}

/// See [`Vector::min_element`].
pub fn min<T: PartialOrd + Copy, const N: usize>(v: impl Into<Vector<T, N>>) -> Extremum<T> {
    v.into().min_element()
}

/// See [`Vector::max_element`].
pub fn max<T: PartialOrd + Copy, const N: usize>(v: impl Into<Vector<T, N>>) -> Extremum<T> {
    v.into().max_element()
}

/// Value of the smallest component.
pub fn min_value<T: PartialOrd + Copy, const N: usize>(v: impl Into<Vector<T, N>>) -> T {
    v.into().min_value()
}

/// Value of the largest component.
pub fn max_value<T: PartialOrd + Copy, const N: usize>(v: impl Into<Vector<T, N>>) -> T {
    v.into().max_value()
}

/// Index of the smallest component, the lowest one on ties.
pub fn min_component<T: PartialOrd + Copy, const N: usize>(v: impl Into<Vector<T, N>>) -> usize {
    v.into().min_component()
}

/// Index of the largest component, the lowest one on ties.
pub fn max_component<T: PartialOrd + Copy, const N: usize>(v: impl Into<Vector<T, N>>) -> usize {
    v.into().max_component()
}

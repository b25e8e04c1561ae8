use std::{array, fmt};

use crate::{One, Zero};

mod arith;
mod geometry;
mod interp;
mod length;
mod ops;
mod reduce;
mod view;

pub use reduce::Extremum;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;

/// An `N`-element vector storing elements of type `T`.
///
/// Vectors are plain values: they are [`Copy`] whenever `T` is, compare equal component by
/// component, and every operation returns a new vector instead of modifying its inputs.
///
/// # Construction
///
/// - [`vec2`] and [`vec3`] create vectors from their components.
/// - [`Vector::splat`] copies one value into every element.
/// - [`Vector::from_fn`] invokes a closure with the index of each element.
/// - [`From`] impls accept arrays (`[x, y]`) and tuples (`(x, y)`, `(x, y, z)`).
/// - [`Vector::ZERO`] is the all-zero vector, and `Vector::X`, `Vector::Y` and `Vector::Z` are the
///   unit vectors along each axis.
///
/// # Element Access
///
/// - 2- and 3-dimensional vectors expose their elements as fields `x`, `y` and `z`.
/// - [`Index`] and [`IndexMut`] work like on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`] and [`Vector::into_array`] give access to the
///   underlying storage, as do the [`AsRef`] and [`AsMut`] impls.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented when `T` implements them.
///
/// # Results
///
/// Operations return their result by value. To write a result into existing storage instead, use
/// [`Vector::extract_into`]; to hand the components to a closure, use `relay`.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element set to [`T::ZERO`][Zero::ZERO].
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// assert_eq!(Vector::splat(2.5), vec3(2.5, 2.5, 2.5));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// let v = Vector::from_fn(|i| i as f32 * 0.5);
    /// assert_eq!(v, vec3(0.0, 0.5, 1.0));
    /// ```
    #[inline]
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// assert_eq!(vec2(1.0f32, 4.0).map(f32::sqrt), vec2(1.0, 2.0));
    /// ```
    #[inline]
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two vectors into one holding pairs of the original elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// let v = vec2(1.0, 2.0).zip(vec2("a", "b"));
    /// assert_eq!(v, vec2((1.0, "a"), (2.0, "b")));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut other = other.0.into_iter();
        Vector(self.0.map(|elem| match other.next() {
            Some(o) => (elem, o),
            None => unreachable!("both vectors have `N` elements"),
        }))
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this vector into an `N`-element array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// assert_eq!(vec3(1.0, 2.0, 3.0).into_array(), [1.0, 2.0, 3.0]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }
}

impl<T> Vector<T, 2> {
    /// Appends a Z component, yielding a 3-dimensional vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// assert_eq!(vec2(-1.0, 2.0).extend(5.0), vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, z: T) -> Vector<T, 3> {
        let [x, y] = self.0;
        Vector([x, y, z])
    }
}

impl<T> Vector<T, 3> {
    /// Drops the Z component, yielding a 2-dimensional vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// assert_eq!(vec3(-1.0, 2.0, 3.5).truncate(), vec2(-1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.0;
        Vector([x, y])
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T> From<(T, T)> for Vector<T, 2> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self([x, y])
    }
}

impl<T> From<Vector<T, 2>> for (T, T) {
    #[inline]
    fn from(Vector([x, y]): Vector<T, 2>) -> Self {
        (x, y)
    }
}

impl<T> From<(T, T, T)> for Vector<T, 3> {
    #[inline]
    fn from((x, y, z): (T, T, T)) -> Self {
        Self([x, y, z])
    }
}

impl<T> From<Vector<T, 3>> for (T, T, T) {
    #[inline]
    fn from(Vector([x, y, z]): Vector<T, 3>) -> Self {
        (x, y, z)
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(elem, f)?;
        }
        f.write_str(")")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two components.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three components.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec3d::Z.z, 1.0);
        assert_eq!(Vec2d::Y.x, 0.0);

        let mut v = vec2(0.0, 1.0);
        v.x = 7.0;
        assert_eq!(v, [7.0, 1.0]);
        v[1] = 9.0;
        assert_eq!(v.y, 9.0);
        v.as_mut_array()[0] = -1.0;
        assert_eq!(v.as_slice(), &[-1.0, 9.0]);
    }

    #[test]
    fn conversions() {
        let v: Vec2f = (1.0, 2.0).into();
        assert_eq!(v, vec2(1.0, 2.0));
        assert_eq!(<(f32, f32)>::from(v), (1.0, 2.0));

        let v: Vec3d = [1.0, 2.0, 3.0].into();
        assert_eq!(<[f64; 3]>::from(v), [1.0, 2.0, 3.0]);
        assert_eq!(<(f64, f64, f64)>::from(v), (1.0, 2.0, 3.0));

        assert_eq!(vec2(1.0, 2.0).extend(3.0).truncate(), vec2(1.0, 2.0));
        assert_eq!(Vec2d::default(), Vec2d::ZERO);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec3f::Z), "(0, 0, 1)");
        assert_eq!(format!("{:?}", Vec3f::Z), "(0.0, 0.0, 1.0)");
        assert_eq!(format!("{:.2}", vec2(0.5, 1.0)), "(0.50, 1.00)");
    }

    #[test]
    fn pod() {
        let vs = [vec2(1.0f32, 2.0), vec2(3.0, 4.0)];
        let flat: &[f32] = bytemuck::cast_slice(&vs);
        assert_eq!(flat, &[1.0, 2.0, 3.0, 4.0]);

        let back: &[Vec2f] = bytemuck::cast_slice(flat);
        assert_eq!(back, &vs);
    }
}

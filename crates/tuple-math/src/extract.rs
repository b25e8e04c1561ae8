//! Delivering results into caller-provided storage or to a callback.
//!
//! Every operation in this crate returns its result by value. Code that keeps vectors in existing
//! arrays, slices or vector objects can write the result there with [`Vector::extract_into`],
//! which returns the target again so that calls can be chained. Code that wants the components
//! in some other shape can hand them to a closure with `relay`.
//!
//! ```
//! # use tuple_math::*;
//! let a = vec2(1.0, 2.0);
//! let b = vec2(3.0, 4.0);
//!
//! let mut array = [0.0; 2];
//! assert_eq!((a + b).extract_into(&mut array), &[4.0, 6.0]);
//!
//! let mut target = Vec2d::ZERO;
//! (a + b).extract_into(&mut target).y += 1.0;
//! assert_eq!(target, vec2(4.0, 7.0));
//!
//! let sum = (a + b).relay(|x, y| format!("{x}/{y}"));
//! assert_eq!(sum, "4/6");
//! ```

use crate::Vector;

/// Storage that can receive the `N` components of a vector.
pub trait Extract<T, const N: usize> {
    /// What [`Extract::extract`] hands back, typically the target itself.
    type Output;

    /// Stores `components` in `self` and returns the target.
    fn extract(self, components: [T; N]) -> Self::Output;
}

impl<'a, T, const N: usize> Extract<T, N> for &'a mut [T; N] {
    type Output = &'a mut [T; N];

    #[inline]
    fn extract(self, components: [T; N]) -> Self::Output {
        *self = components;
        self
    }
}

impl<'a, T, const N: usize> Extract<T, N> for &'a mut Vector<T, N> {
    type Output = &'a mut Vector<T, N>;

    #[inline]
    fn extract(self, components: [T; N]) -> Self::Output {
        *self = Vector::from(components);
        self
    }
}

/// # Panics
///
/// Panics if the slice does not have exactly `N` elements.
impl<'a, T, const N: usize> Extract<T, N> for &'a mut [T] {
    type Output = &'a mut [T];

    fn extract(self, components: [T; N]) -> Self::Output {
        assert_eq!(
            self.len(),
            N,
            "cannot extract a {}-dimensional vector into a slice of length {}",
            N,
            self.len()
        );
        for (slot, value) in self.iter_mut().zip(components) {
            *slot = value;
        }
        self
    }
}

impl<T, const N: usize> Vector<T, N> {
    /// Writes the components of `self` into `target` and returns the target.
    ///
    /// `target` can be a `&mut [T; N]`, a `&mut Vector<T, N>` or a `&mut [T]` of length `N`.
    ///
    /// # Panics
    ///
    /// Panics if `target` is a slice whose length differs from `N`.
    #[inline]
    pub fn extract_into<E>(self, target: E) -> E::Output
    where
        E: Extract<T, N>,
    {
        target.extract(self.into_array())
    }
}

impl<T> Vector<T, 2> {
    /// Passes the components of `self` to `f` and returns its result.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// assert_eq!(vec2(1.0, 2.0).relay(|x, y| x * y), 2.0);
    /// ```
    #[inline]
    pub fn relay<R>(self, f: impl FnOnce(T, T) -> R) -> R {
        let [x, y] = self.into_array();
        f(x, y)
    }
}

impl<T> Vector<T, 3> {
    /// Passes the components of `self` to `f` and returns its result.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// let packed = vec3(1.0, 2.0, 3.0).relay(|x, y, z| [z, y, x]);
    /// assert_eq!(packed, [3.0, 2.0, 1.0]);
    /// ```
    #[inline]
    pub fn relay<R>(self, f: impl FnOnce(T, T, T) -> R) -> R {
        let [x, y, z] = self.into_array();
        f(x, y, z)
    }
}

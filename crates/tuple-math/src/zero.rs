//! Policies for deciding whether a vector counts as "zero".

use crate::{Abs, Number, Vector};

/// How the safe length and normalization operations detect a zero vector.
///
/// The `*_safe` methods on [`Vector`] use [`ZeroCheck::Exact`], the `*_safe_within` methods use
/// [`ZeroCheck::Margin`], and the `*_with` methods accept any policy.
///
/// # Examples
///
/// ```
/// # use tuple_math::*;
/// let v = vec2(1.0, -1.0);
/// assert!(!v.is_zero(ZeroCheck::Exact));
/// assert!(v.is_zero(ZeroCheck::ComponentSum));
/// assert!(vec2(0.0001, -0.0001).is_zero(ZeroCheck::Margin(0.001)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZeroCheck<T> {
    /// Every component compares equal to zero.
    ///
    /// `-0.0` counts as zero; `NaN` does not.
    Exact,
    /// The sum of all components compares equal to zero.
    ///
    /// This misjudges vectors whose components cancel out, such as `(1, -1)`, as zero. It exists
    /// for compatibility with code that relies on this behavior; prefer [`ZeroCheck::Exact`].
    ComponentSum,
    /// Every component lies within `[-tolerance, tolerance]`.
    ///
    /// A negative tolerance matches nothing.
    Margin(T),
}

impl<T> Default for ZeroCheck<T> {
    #[inline]
    fn default() -> Self {
        Self::Exact
    }
}

impl<T: Number + Abs + PartialOrd> ZeroCheck<T> {
    /// Returns whether `vector` is zero under this policy.
    pub fn is_zero<const N: usize>(&self, vector: &Vector<T, N>) -> bool {
        let elems = vector.as_array();
        match *self {
            ZeroCheck::Exact => elems.iter().all(|&c| c == T::ZERO),
            ZeroCheck::ComponentSum => elems.iter().fold(T::ZERO, |acc, &c| acc + c) == T::ZERO,
            ZeroCheck::Margin(tolerance) => elems.iter().all(|&c| c.abs() <= tolerance),
        }
    }
}

impl<T, const N: usize> Vector<T, N> {
    /// Returns whether `self` is zero under the given [`ZeroCheck`] policy.
    #[inline]
    pub fn is_zero(&self, check: ZeroCheck<T>) -> bool
    where
        T: Number + Abs + PartialOrd,
    {
        check.is_zero(self)
    }
}

//! Reduction of a vector to its smallest or largest component.

use crate::Vector;

/// The value and position of the smallest or largest component of a [`Vector`].
///
/// Returned by [`Vector::min_element`] and [`Vector::max_element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extremum<T> {
    /// The component's value.
    pub value: T,
    /// The component's index (0 for `x`, 1 for `y`, 2 for `z`).
    pub index: usize,
}

impl<T, const N: usize> Vector<T, N> {
    /// Scans the components in index order, keeping the first one for which `replaces` returns
    /// `true` against the current best.
    fn extremum(&self, replaces: impl Fn(&T, &T) -> bool) -> Extremum<T>
    where
        T: Copy,
    {
        let mut elems = self.0.iter().copied().enumerate();
        let Some((index, value)) = elems.next() else {
            panic!("cannot reduce a zero-dimensional vector");
        };

        let mut best = Extremum { value, index };
        for (index, value) in elems {
            if replaces(&value, &best.value) {
                best = Extremum { value, index };
            }
        }
        best
    }

    /// Returns the smallest component and its index.
    ///
    /// Components are compared with a strict `<`, so on ties the lowest index wins. A `NaN`
    /// component never replaces an earlier one.
    ///
    /// # Panics
    ///
    /// Panics if `N` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// assert_eq!(vec3(4.0, -1.0, -1.0).min_element(), Extremum { value: -1.0, index: 1 });
    /// ```
    pub fn min_element(&self) -> Extremum<T>
    where
        T: PartialOrd + Copy,
    {
        self.extremum(|candidate, best| candidate < best)
    }

    /// Returns the largest component and its index.
    ///
    /// Components are compared with a strict `>`, so on ties the lowest index wins. A `NaN`
    /// component never replaces an earlier one.
    ///
    /// # Panics
    ///
    /// Panics if `N` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// assert_eq!(vec2(5.0, 5.0).max_element(), Extremum { value: 5.0, index: 0 });
    /// ```
    pub fn max_element(&self) -> Extremum<T>
    where
        T: PartialOrd + Copy,
    {
        self.extremum(|candidate, best| candidate > best)
    }

    /// Writes the smallest component and its index into `out`, returning `out`.
    pub fn min_element_into<'a>(&self, out: &'a mut Extremum<T>) -> &'a mut Extremum<T>
    where
        T: PartialOrd + Copy,
    {
        *out = self.min_element();
        out
    }

    /// Writes the largest component and its index into `out`, returning `out`.
    pub fn max_element_into<'a>(&self, out: &'a mut Extremum<T>) -> &'a mut Extremum<T>
    where
        T: PartialOrd + Copy,
    {
        *out = self.max_element();
        out
    }

    /// Passes the smallest component and its index to `f`, returning its result.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_math::*;
    /// let v = vec3(2.0, 0.5, 1.0);
    /// let label = v.min_element_relay(|value, index| format!("{index}:{value}"));
    /// assert_eq!(label, "1:0.5");
    /// ```
    pub fn min_element_relay<R>(&self, f: impl FnOnce(T, usize) -> R) -> R
    where
        T: PartialOrd + Copy,
    {
        let Extremum { value, index } = self.min_element();
        f(value, index)
    }

    /// Passes the largest component and its index to `f`, returning its result.
    pub fn max_element_relay<R>(&self, f: impl FnOnce(T, usize) -> R) -> R
    where
        T: PartialOrd + Copy,
    {
        let Extremum { value, index } = self.max_element();
        f(value, index)
    }

    /// Returns the value of the smallest component.
    #[inline]
    pub fn min_value(&self) -> T
    where
        T: PartialOrd + Copy,
    {
        self.min_element().value
    }

    /// Returns the value of the largest component.
    #[inline]
    pub fn max_value(&self) -> T
    where
        T: PartialOrd + Copy,
    {
        self.max_element().value
    }

    /// Returns the index of the smallest component.
    #[inline]
    pub fn min_component(&self) -> usize
    where
        T: PartialOrd + Copy,
    {
        self.min_element().index
    }

    /// Returns the index of the largest component.
    #[inline]
    pub fn max_component(&self) -> usize
    where
        T: PartialOrd + Copy,
    {
        self.max_element().index
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, Vector};

    use super::*;

    #[test]
    fn ties_keep_first() {
        assert_eq!(vec2(5.0, 5.0).min_element(), Extremum { value: 5.0, index: 0 });
        assert_eq!(vec2(5.0, 5.0).max_element(), Extremum { value: 5.0, index: 0 });
        assert_eq!(vec3(3.0, 1.0, 1.0).min_component(), 1);
        assert_eq!(vec3(1.0, 3.0, 3.0).max_component(), 1);
        assert_eq!(vec3(7.0f32, 7.0, 7.0).max_component(), 0);
    }

    #[test]
    fn min_max() {
        let v = vec3(2.0, -4.0, 9.0);
        assert_eq!(v.min_element(), Extremum { value: -4.0, index: 1 });
        assert_eq!(v.max_element(), Extremum { value: 9.0, index: 2 });
        assert_eq!(v.min_value(), -4.0);
        assert_eq!(v.max_value(), 9.0);
    }

    #[test]
    fn signed_zero_is_a_tie() {
        let v = vec2(0.0f64, -0.0);
        let min = v.min_element();
        assert_eq!(min.index, 0);
        assert!(min.value.is_sign_positive());
    }

    #[test]
    fn nan_never_wins() {
        let v = vec3(1.0, f32::NAN, 0.5);
        assert_eq!(v.min_element(), Extremum { value: 0.5, index: 2 });
        assert_eq!(v.max_element(), Extremum { value: 1.0, index: 0 });

        let leading = vec2(f32::NAN, 3.0);
        assert_eq!(leading.min_component(), 0);
        assert!(leading.min_value().is_nan());
    }

    #[test]
    fn delivery_forms_agree() {
        let v = vec3(0.25, -3.0, -3.0);

        let mut out = Extremum::default();
        assert_eq!(*v.min_element_into(&mut out), v.min_element());
        assert_eq!(out, Extremum { value: -3.0, index: 1 });
        assert_eq!(
            v.min_element_relay(|value, index| Extremum { value, index }),
            out
        );
        assert_eq!(v.min_value(), out.value);
        assert_eq!(v.min_component(), out.index);

        let max = *v.max_element_into(&mut out);
        assert_eq!(max, Extremum { value: 0.25, index: 0 });
        assert_eq!(v.max_element_relay(|value, index| (value, index)), (0.25, 0));
        assert_eq!(v.max_value(), max.value);
        assert_eq!(v.max_component(), max.index);
    }

    #[test]
    #[should_panic(expected = "zero-dimensional")]
    fn empty() {
        Vector::<f32, 0>::ZERO.min_element();
    }
}

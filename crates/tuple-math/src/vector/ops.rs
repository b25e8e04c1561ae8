//! Implementations of `std::ops` and comparison traits.
//!
//! Vector-vector operators work element-wise; vector-scalar operators scale every element.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::approx::ApproxEq;

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// More general than what `#[derive(PartialEq)]` would generate.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.0.eq(other)
    }
}

impl<T, const N: usize> ApproxEq for Vector<T, N>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.0.ulps_diff_eq(&other.0, ulps_tolerance)
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

macro_rules! elementwise {
    ($($op:ident::$method:ident, $assign_op:ident::$assign_method:ident => $doc:literal;)+) => {
        $(
            #[doc = $doc]
            impl<T, const N: usize> $op<Vector<T, N>> for Vector<T, N>
            where
                T: $op,
            {
                type Output = Vector<T::Output, N>;

                #[inline]
                fn $method(self, rhs: Vector<T, N>) -> Self::Output {
                    self.zip(rhs).map(|(l, r)| $op::$method(l, r))
                }
            }

            #[doc = $doc]
            impl<T, const N: usize> $assign_op<Vector<T, N>> for Vector<T, N>
            where
                T: $assign_op,
            {
                #[inline]
                fn $assign_method(&mut self, rhs: Vector<T, N>) {
                    self.0
                        .iter_mut()
                        .zip(rhs.0)
                        .for_each(|(l, r)| $assign_op::$assign_method(l, r));
                }
            }
        )+
    };
}

elementwise! {
    Add::add, AddAssign::add_assign => "Element-wise addition.";
    Sub::sub, SubAssign::sub_assign => "Element-wise subtraction.";
    Mul::mul, MulAssign::mul_assign => "Element-wise multiplication.";
    Div::div, DivAssign::div_assign => "Element-wise division.";
}

// NB: supporting both element-wise `Vector * Vector` and scaling `Vector * T` rules out a more
// generic `Mul<U> for Vector<T, N> where T: Mul<U>` impl.

/// Vector-scalar multiplication (scaling).
impl<T, const N: usize> Mul<T> for Vector<T, N>
where
    T: Mul + Copy,
{
    type Output = Vector<T::Output, N>;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Vector-scalar multiplication (scaling).
impl<T, const N: usize> MulAssign<T> for Vector<T, N>
where
    T: MulAssign + Copy,
{
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.0.iter_mut().for_each(|elem| *elem *= rhs);
    }
}

/// Vector-scalar division.
impl<T, const N: usize> Div<T> for Vector<T, N>
where
    T: Div + Copy,
{
    type Output = Vector<T::Output, N>;

    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

/// Vector-scalar division.
impl<T, const N: usize> DivAssign<T> for Vector<T, N>
where
    T: DivAssign + Copy,
{
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.0.iter_mut().for_each(|elem| *elem /= rhs);
    }
}

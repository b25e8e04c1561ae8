//! Approximate equality for floating-point results.
//!
//! Results of the fused formulas in this crate are frequently off by an ULP or two from the
//! "obvious" value, so tests (both this crate's and downstream ones) compare them with the
//! [`assert_approx_eq!`][crate::assert_approx_eq] family of macros instead of `assert_eq!`.

mod impls;

use std::{fmt, panic::Location};

/// Types that can be compared for *approximate equality*.
///
/// Compound types (arrays, slices, [`Vector`][crate::Vector]s) compare equal if every pair of
/// elements does.
///
/// Background on the different comparison methods:
/// <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Type of the tolerance used for absolute and relative comparisons (the underlying float).
    type Tolerance: DefaultTolerances + Copy;

    /// Returns `true` if the absolute difference between `self` and `other` is at most
    /// `abs_tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;

    /// Returns `true` if the absolute difference between `self` and `other` is at most the larger
    /// magnitude of the two, scaled by `rel_tolerance`.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: Self::Tolerance) -> bool;

    /// Returns `true` if at most `ulps_tolerance` representable values lie between `self` and
    /// `other`.
    ///
    /// `NaN` never compares equal. `-0.0` and `+0.0` compare equal, other values of opposite sign
    /// never do.
    fn ulps_diff_eq(&self, other: &Rhs, ulps_tolerance: u32) -> bool;
}

/// Default tolerances used when an [`Asserter`] is not configured explicitly.
pub trait DefaultTolerances {
    const DEFAULT_ABS_TOLERANCE: Self;
    const DEFAULT_REL_TOLERANCE: Self;
    const DEFAULT_ULPS_TOLERANCE: u32;
}

impl DefaultTolerances for f32 {
    const DEFAULT_ABS_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

impl DefaultTolerances for f64 {
    const DEFAULT_ABS_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

/// Guard returned by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The assertion is checked when the guard is dropped. Before that, [`Asserter::abs`],
/// [`Asserter::rel`] and [`Asserter::ulps`] select which comparisons run and with which
/// tolerance. If several are selected, the values are equal if *any* of them says so.
///
/// Without explicit configuration, an absolute comparison with
/// [`DEFAULT_ABS_TOLERANCE`] and a relative comparison with [`DEFAULT_REL_TOLERANCE`] are
/// performed.
///
/// [`DEFAULT_ABS_TOLERANCE`]: DefaultTolerances::DEFAULT_ABS_TOLERANCE
/// [`DEFAULT_REL_TOLERANCE`]: DefaultTolerances::DEFAULT_REL_TOLERANCE
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<T::Tolerance>,
    rel: Option<T::Tolerance>,
    ulps: Option<u32>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            abs: None,
            rel: None,
            ulps: None,
        }
    }

    /// Compares the absolute difference of the values against `abs`.
    ///
    /// Works well for values close to zero, including values of opposite sign.
    pub fn abs(&mut self, abs: T::Tolerance) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Compares the absolute difference of the values against `rel` times the larger magnitude.
    ///
    /// A good default away from zero. Any non-zero value needs a relative tolerance of at least
    /// 1.0 to compare equal to 0.0.
    pub fn rel(&mut self, rel: T::Tolerance) -> &mut Self {
        self.rel = Some(rel);
        self
    }

    /// Compares the values by the number of [*units in the last place*] between them.
    ///
    /// [*units in the last place*]: https://en.wikipedia.org/wiki/Unit_in_the_last_place
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.ulps = Some(ulps);
        self
    }

    fn equal(&self) -> bool {
        let abs = self
            .abs
            .map_or(false, |abs| self.left.abs_diff_eq(self.right, abs));
        let rel = self
            .rel
            .map_or(false, |rel| self.left.rel_diff_eq(self.right, rel));
        let ulps = self
            .ulps
            .map_or(false, |ulps| self.left.ulps_diff_eq(self.right, ulps));
        abs || rel || ulps
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // `#[track_caller]` has no effect on `drop`, hence the stored `location`.
    fn drop(&mut self) {
        if self.abs.is_none() && self.rel.is_none() && self.ulps.is_none() {
            self.abs = Some(T::Tolerance::DEFAULT_ABS_TOLERANCE);
            self.rel = Some(T::Tolerance::DEFAULT_REL_TOLERANCE);
        }

        let failed = match self.kind {
            AssertionKind::Eq => !self.equal(),
            AssertionKind::Ne => self.equal(),
        };
        if failed {
            assert_failed(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

#[cold]
fn assert_failed(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    msg: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    // The panic location points into `drop_in_place`; `location` is the assertion itself.
    match msg {
        Some(msg) => panic!(
            "assertion `left {op} right` failed at {location}: {msg}\n  left: {left:?}\n right: {right:?}"
        ),
        None => panic!(
            "assertion `left {op} right` failed at {location}\n  left: {left:?}\n right: {right:?}"
        ),
    }
}

#[doc(hidden)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal (using [`ApproxEq`]).
///
/// Returns an [`Asserter`] that can be used to pick the comparison method and tolerance.
///
/// # Examples
///
/// ```
/// # use tuple_math::*;
/// assert_approx_eq!(vec2(0.1 + 0.2, 1.0), vec2(0.3, 1.0));
/// assert_approx_eq!(100.0, 99.0).abs(1.0);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// assert_approx_eq!(1.0, 1.0 + f64::EPSILON).ulps(1);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two expressions are *not* approximately equal (using [`ApproxEq`]).
///
/// # Examples
///
/// ```
/// # use tuple_math::*;
/// assert_approx_ne!(vec2(1.0, 0.0), vec2(1.0, 0.1));
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

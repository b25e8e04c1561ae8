//! Named field access (`v.x`, `v.y`, `v.z`) for 2- and 3-dimensional vectors.

use std::ops::{Deref, DerefMut};

use crate::Vector;

/// Component view of a [`Vec2`][crate::Vec2], reached through `Deref`.
#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    // Views only ever exist behind a reference to a vector.
    _unconstructible: (),
}

/// Component view of a [`Vec3`][crate::Vec3], reached through `Deref`.
#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _unconstructible: (),
}

// SAFETY: a `Vector<T, N>` is laid out exactly like `[T; N]` (`repr(transparent)`). `XY<T>` and
// `XYZ<T>` are `repr(C)` structs of 2 or 3 consecutive `T` fields plus a trailing `()`, which
// adds neither size nor alignment, so every pointer cast below keeps size, alignment and field
// offsets intact.

impl<T> Deref for Vector<T, 2> {
    type Target = XY<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { &*(self as *const Self).cast::<XY<T>>() }
    }
}

impl<T> DerefMut for Vector<T, 2> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { &mut *(self as *mut Self).cast::<XY<T>>() }
    }
}

impl<T> Deref for Vector<T, 3> {
    type Target = XYZ<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { &*(self as *const Self).cast::<XYZ<T>>() }
    }
}

impl<T> DerefMut for Vector<T, 3> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { &mut *(self as *mut Self).cast::<XYZ<T>>() }
    }
}

#[cfg(test)]
mod tests {
    use std::mem;

    use crate::{vec2, vec3, Vec2d, Vec3f};

    use super::*;

    #[test]
    fn layout_matches() {
        assert_eq!(mem::size_of::<XY<f64>>(), mem::size_of::<Vec2d>());
        assert_eq!(mem::align_of::<XY<f64>>(), mem::align_of::<Vec2d>());
        assert_eq!(mem::size_of::<XYZ<f32>>(), mem::size_of::<Vec3f>());
        assert_eq!(mem::align_of::<XYZ<f32>>(), mem::align_of::<Vec3f>());
    }

    #[test]
    fn fields_alias_elements() {
        let mut v = vec3(1.0, 2.0, 3.0);
        v.z += 1.0;
        v.x = -v.y;
        assert_eq!(v, [-2.0, 2.0, 4.0]);

        let mut w = vec2(5u8, 6);
        w.y = w.x;
        assert_eq!((w.x, w.y), (5, 5));
    }
}

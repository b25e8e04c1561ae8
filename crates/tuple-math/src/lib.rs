//! A small vector math kernel for 2D and 3D geometry.
//!
//! # Motivation
//!
//! Simulation and rendering code tends to do the same handful of vector operations over and over:
//! element-wise arithmetic, lengths and normalization, dot and cross products, projection,
//! reflection, rotation and interpolation. This library provides exactly those, for 2- and
//! 3-component vectors of `f32` or `f64`, without pulling in a general linear algebra stack.
//!
//! # Goals & Non-Goals
//!
//! - Fixed dimensions only. [`Vector<T, N>`] uses const generics, and most operations are written
//!   once for any `N`. Operations that only make sense in one dimension (2D rotation, the 3D cross
//!   product) are only available there.
//! - Use fused multiply-add wherever an operation is a sum of products. Results are rounded once
//!   per component, and `v.dot(v)` always agrees exactly with `v.squared_length()`.
//! - Make the handling of zero vectors explicit. Length and normalization come in an unchecked
//!   form, an exact-zero-checked `*_safe` form and a tolerance-checked `*_safe_within` form (see
//!   [`ZeroCheck`]).
//! - Operations return their results by value. Results can be written into existing arrays,
//!   slices and vectors with [`Vector::extract_into`], or handed to a closure with `relay`.
//! - No matrices, quaternions or SIMD.
//!
//! # Examples
//!
//! ```
//! use tuple_math::*;
//!
//! let v = vec3(2.0, 3.0, 6.0);
//! assert_eq!(v.length(), 7.0);
//! assert_eq!(v.dot(Vec3d::Y), 3.0);
//! assert_eq!(Vec3d::X.cross(Vec3d::Y), Vec3d::Z);
//! assert_eq!(vec2(5.0, 5.0).min_element(), Extremum { value: 5.0, index: 0 });
//! assert_eq!(Vec2d::ZERO.normalize_safe(), Vec2d::ZERO);
//! ```

pub mod approx;
mod extract;
pub mod func;
mod traits;
mod vector;
mod zero;

pub use extract::*;
pub use traits::*;
pub use vector::*;
pub use zero::*;

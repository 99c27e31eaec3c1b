//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

/// A 3x3 matrix stored in the upper left corner of a 4x4 transform.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Restrict `value` to the inclusive range `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics, even when `min > max` or either
/// bound is NaN; the lower bound is checked first.
pub fn clamp<T: Float>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Linear interpolation from `a` to `b`. `t` is not restricted to `[0, 1]`.
/// Returns exactly `a` at `t == 0` and exactly `b` at `t == 1`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    if t == T::zero() {
        return a;
    }
    if t == T::one() {
        return b;
    }
    a + (b - a) * t
}

/// Build a [`Transform`] from a 3x3 matrix written in row-major order, so
/// that `transform(&m, v)` computes `M * v` for a column vector `v`.
#[rustfmt::skip]
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component, m12: Component, m13: Component,
    m21: Component, m22: Component, m23: Component,
    m31: Component, m32: Component, m33: Component,
) -> Transform {
    // euclid multiplies row vectors, so the matrix is stored transposed.
    Transform::new(
        m11, m21, m31, 0.0,
        m12, m22, m32, 0.0,
        m13, m23, m33, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Components(x, y, z) = components;
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    Components(x, y, z)
}

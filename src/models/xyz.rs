//! Model a color in the CIE-XYZ color space.

use crate::{
    color::{Component, Components},
    math::clamp,
    models::rgb::SrgbLinear,
};

/// A reference white, in the same percent scale as [`Xyz`].
pub trait WhitePoint {
    /// The tristimulus values of the reference white.
    const WHITE_POINT: Components;
}

/// The D65 illuminant with the 2° standard observer.
#[derive(Clone, Copy, Debug)]
pub struct D65;

impl WhitePoint for D65 {
    const WHITE_POINT: Components = Components(95.047, 100.0, 108.883);
}

colorlerp_macros::gen_model! {
    /// A color in the CIE-XYZ color space, scaled so that Y of the white
    /// point is 100.
    pub struct Xyz {
        /// The x component of the color.
        pub x: Component,
        /// The y component of the color.
        pub y: Component,
        /// The z component of the color.
        pub z: Component,
    }
}

impl Xyz {
    /// Return a copy with every component clamped to `[0, 100]`.
    pub fn clamped(&self) -> Self {
        self.to_components().map(|c| clamp(c, 0.0, 100.0)).into()
    }

    /// Convert to linear light sRGB. The result is not clamped.
    pub fn to_srgb_linear(&self) -> SrgbLinear {
        SrgbLinear::from(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_components_eq;

    #[test]
    fn clamped() {
        assert_eq!(Xyz::new(-10.0, 50.0, 200.0).clamped(), Xyz::new(0.0, 50.0, 100.0));
    }

    #[test]
    fn srgb_linear_round_trip() {
        let xyz = Xyz::new(41.24, 21.26, 1.93);
        let linear = xyz.to_srgb_linear();
        assert_components_eq!(linear.to_components(), Components(1.0, 0.0, 0.0), 1e-12);
        assert_components_eq!(linear.to_xyz().to_components(), xyz.to_components(), 1e-9);
    }

    #[test]
    fn out_of_gamut_is_not_clamped() {
        let linear = Xyz::new(95.047, 100.0, 108.883).to_srgb_linear();
        // D65 is not exactly the white of the matrix, so some channel ends
        // up past 1.
        assert!(linear.red > 1.0 || linear.green > 1.0 || linear.blue > 1.0);
    }
}

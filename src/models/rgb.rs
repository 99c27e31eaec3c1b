//! Model a color in the sRGB color space.

use crate::{
    color::{Component, Components},
    math::{clamp, transform, transform_3x3, Transform},
    models::xyz::Xyz,
};

pub mod encoding {
    //! Tags that specify whether RGB components are gamma encoded.

    /// This trait is used to identity tags that specify gamma encoding.
    pub trait Encoding {}

    /// Components are gamma encoded, the way they are stored and displayed.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct GammaEncoded;
    impl Encoding for GammaEncoded {}

    /// Components are proportional to light intensity.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct LinearLight;
    impl Encoding for LinearLight {}
}

colorlerp_macros::gen_model! {
    /// A color specified in the sRGB color space.
    pub struct Rgb<E: encoding::Encoding> {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

/// Model for a color in the sRGB color space with gamma encoding.
pub type Srgb = Rgb<encoding::GammaEncoded>;

/// Model for a color in the sRGB color space with no gamma encoding.
pub type SrgbLinear = Rgb<encoding::LinearLight>;

impl<E: encoding::Encoding> Rgb<E> {
    /// Return a copy with every channel clamped to `[0, 1]`.
    pub fn clamped(&self) -> Self {
        self.to_components().map(|c| clamp(c, 0.0, 1.0)).into()
    }
}

impl Srgb {
    /// Create a color from 8-bit channels, mapping `0..=255` onto `[0, 1]`.
    pub fn from_rgb8([red, green, blue]: [u8; 3]) -> Self {
        Self::new(
            red as Component / 255.0,
            green as Component / 255.0,
            blue as Component / 255.0,
        )
    }

    /// Quantize the color to 8-bit channels. Channels are clamped to `[0, 1]`
    /// first.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let Components(red, green, blue) = self.clamped().to_components();
        [red, green, blue].map(|c| (c * 255.0).round() as u8)
    }

    /// Convert this model from gamma encoded to linear light.
    pub fn to_linear_light(&self) -> SrgbLinear {
        self.to_components()
            .map(|value| {
                if value > 0.04045 {
                    ((value + 0.055) / 1.055).powf(2.4)
                } else {
                    value / 12.92
                }
            })
            .into()
    }
}

impl SrgbLinear {
    /// Convert this model from linear light to gamma encoded. The result is
    /// not clamped.
    pub fn to_gamma_encoded(&self) -> Srgb {
        self.to_components()
            .map(|value| {
                if value > 0.0031308 {
                    1.055 * value.powf(1.0 / 2.4) - 0.055
                } else {
                    value * 12.92
                }
            })
            .into()
    }

    /// Convert to CIE-XYZ, scaled so that Y of the white point is 100.
    pub fn to_xyz(&self) -> Xyz {
        transform(&TO_XYZ, self.to_components())
            .map(|c| c * 100.0)
            .into()
    }
}

impl From<Xyz> for SrgbLinear {
    fn from(value: Xyz) -> Self {
        transform(&FROM_XYZ, value.to_components().map(|c| c / 100.0)).into()
    }
}

#[rustfmt::skip]
const TO_XYZ: Transform = transform_3x3(
    0.4124, 0.3576, 0.1805,
    0.2126, 0.7152, 0.0722,
    0.0193, 0.1192, 0.9505,
);

// Exact inverse of TO_XYZ. The four digit inverse in common use only
// round-trips to about 3e-4.
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const FROM_XYZ: Transform = transform_3x3(
     3.2406254773200533,  -1.5372079722103185, -0.4986285986982477,
    -0.9689307147293194,   1.8757560608852413,  0.04151752384295396,
     0.05571012044551061, -0.2040210505984867,  1.0569959422543882,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_components_eq;

    #[test]
    fn basic_rgb_colors() {
        let srgb = Srgb::new(0.1, 0.2, 0.3);
        assert_eq!(srgb.red, 0.1);
        assert_eq!(srgb.green, 0.2);
        assert_eq!(srgb.blue, 0.3);
        assert_eq!(srgb.to_components(), Components(0.1, 0.2, 0.3));
    }

    #[test]
    fn from_xyz_matrix_inverts_to_xyz_matrix() {
        let identity = TO_XYZ.then(&FROM_XYZ);
        for (i, basis) in [
            Components(1.0, 0.0, 0.0),
            Components(0.0, 1.0, 0.0),
            Components(0.0, 0.0, 1.0),
        ]
        .into_iter()
        .enumerate()
        {
            let c = transform(&identity, basis);
            assert_components_eq!(c, basis, 1e-12, "basis {}", i);
        }
    }

    #[test]
    fn gamma_pivot_branches() {
        // Below the threshold the curve is linear.
        let linear = Srgb::new(0.04, 0.0, 0.04045).to_linear_light();
        assert_eq!(linear.red, 0.04 / 12.92);
        assert_eq!(linear.green, 0.0);
        assert_eq!(linear.blue, 0.04045 / 12.92);

        let linear = Srgb::new(1.0, 0.5, 0.2).to_linear_light();
        assert_components_eq!(
            linear.to_components(),
            Components(1.0, 0.21404114048223255, 0.033104766570885055)
        );
    }

    #[test]
    fn gamma_round_trip() {
        for v in [0.0, 0.001, 0.04, 0.05, 0.25, 0.5, 0.75, 1.0] {
            let srgb = Srgb::new(v, v, v);
            let back = srgb.to_linear_light().to_gamma_encoded();
            assert_components_eq!(back.to_components(), srgb.to_components());
        }
    }

    #[test]
    fn gamma_encoding_does_not_clamp() {
        let srgb = SrgbLinear::new(-0.1, 1.2, 0.5).to_gamma_encoded();
        assert!(srgb.red < 0.0);
        assert!(srgb.green > 1.0);
    }

    #[test]
    fn clamped() {
        let c = Srgb::new(-0.5, 1.5, 0.5).clamped();
        assert_eq!(c, Srgb::new(0.0, 1.0, 0.5));
    }

    #[test]
    fn white_maps_to_matrix_row_sums() {
        let xyz = SrgbLinear::new(1.0, 1.0, 1.0).to_xyz();
        assert_components_eq!(xyz.to_components(), Components(95.05, 100.0, 108.9), 1e-9);
    }

    #[test]
    fn rgb8_bridge() {
        assert_eq!(Srgb::from_rgb8([255, 0, 51]), Srgb::new(1.0, 0.0, 0.2));
        assert_eq!(Srgb::new(1.0, 0.0, 0.2).to_rgb8(), [255, 0, 51]);
        assert_eq!(Srgb::new(-1.0, 2.0, 0.5).to_rgb8(), [0, 255, 128]);

        for byte in [0u8, 1, 127, 128, 200, 255] {
            let c = Srgb::from_rgb8([byte; 3]);
            assert_eq!(c.to_rgb8(), [byte; 3]);
        }
    }
}

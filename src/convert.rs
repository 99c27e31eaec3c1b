//! Free functions over untyped [`Components`], one per direction of each
//! supported conversion, plus the [`Converter`] pairs that tie a forward
//! conversion out of RGB to its inverse.
//!
//! ```rust
//! use colorlerp::{convert, Components};
//! let lab = convert::rgb_to_lab(Components(1.0, 0.0, 0.0));
//! let rgb = convert::lab_to_rgb(lab);
//! assert!((rgb.0 - 1.0).abs() < 1e-6);
//! ```

use std::fmt;

use crate::{
    color::{Component, Components},
    error::Result,
    models::{Hsv, Lab, Srgb, Xyz},
};

/// Construct an RGB triple with every channel clamped to `[0, 1]`.
pub fn to_rgb(red: Component, green: Component, blue: Component) -> Components {
    Srgb::new(red, green, blue).clamped().into()
}

/// Construct an XYZ triple with every component clamped to `[0, 100]`.
pub fn to_xyz(x: Component, y: Component, z: Component) -> Components {
    Xyz::new(x, y, z).clamped().into()
}

/// Pass components through unchanged. Used to interpolate directly in RGB.
pub fn identity(from: Components) -> Components {
    from
}

/// Infallible form of [`identity`], used as the inverse of the RGB
/// [`Converter`].
fn identity_ok(from: Components) -> Result<Components> {
    Ok(from)
}

/// Convert RGB to HSV. Hue is a fraction of a turn.
pub fn rgb_to_hsv(from: Components) -> Components {
    Srgb::from(from).to_hsv().into()
}

/// Convert HSV to RGB. Fails when the hue falls outside of `[0, 1)` far
/// enough to leave the six sextants.
pub fn hsv_to_rgb(from: Components) -> Result<Components> {
    Hsv::from(from).to_srgb().map(Components::from)
}

/// Convert RGB to CIE-XYZ. The result is not clamped.
pub fn rgb_to_xyz(from: Components) -> Components {
    Srgb::from(from).to_linear_light().to_xyz().into()
}

/// Convert CIE-XYZ to RGB, clamping the result to `[0, 1]`.
pub fn xyz_to_rgb(from: Components) -> Components {
    Xyz::from(from)
        .to_srgb_linear()
        .to_gamma_encoded()
        .clamped()
        .into()
}

/// Convert CIE-XYZ to CIELAB relative to the D65 white point.
pub fn xyz_to_lab(from: Components) -> Components {
    Xyz::from(from).to_lab().into()
}

/// Convert CIELAB to CIE-XYZ relative to the D65 white point.
pub fn lab_to_xyz(from: Components) -> Components {
    Lab::from(from).to_xyz().into()
}

/// Convert RGB to CIELAB by way of CIE-XYZ.
pub fn rgb_to_lab(from: Components) -> Components {
    xyz_to_lab(rgb_to_xyz(from))
}

/// Convert CIELAB to RGB by way of CIE-XYZ, clamping the result to `[0, 1]`.
pub fn lab_to_rgb(from: Components) -> Components {
    xyz_to_rgb(lab_to_xyz(from))
}

fn xyz_to_rgb_ok(from: Components) -> Result<Components> {
    Ok(xyz_to_rgb(from))
}

fn lab_to_rgb_ok(from: Components) -> Result<Components> {
    Ok(lab_to_rgb(from))
}

/// A pair of conversions between RGB and some other space.
#[derive(Clone, Copy, Debug)]
pub struct Converter {
    /// Convert RGB components into the target space.
    pub forward: fn(Components) -> Components,
    /// Convert components in the target space back to RGB.
    pub inverse: fn(Components) -> Result<Components>,
}

impl Converter {
    /// Create a converter from a forward and inverse conversion.
    pub const fn new(
        forward: fn(Components) -> Components,
        inverse: fn(Components) -> Result<Components>,
    ) -> Self {
        Self { forward, inverse }
    }

    /// Convert RGB components into the target space.
    pub fn to_space(&self, rgb: Components) -> Components {
        (self.forward)(rgb)
    }

    /// Convert components in the target space back to RGB.
    pub fn to_rgb(&self, components: Components) -> Result<Components> {
        (self.inverse)(components)
    }
}

/// The color spaces that colors can be interpolated in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Space {
    /// Interpolate the RGB channels directly.
    Rgb,
    /// Hue, saturation and value.
    Hsv,
    /// CIE-XYZ.
    Xyz,
    /// CIELAB.
    Lab,
}

impl Space {
    /// Every space, in a stable order.
    pub const ALL: [Space; 4] = [Space::Rgb, Space::Hsv, Space::Xyz, Space::Lab];

    /// A short lowercase name for the space.
    pub fn name(&self) -> &'static str {
        match self {
            Space::Rgb => "rgb",
            Space::Hsv => "hsv",
            Space::Xyz => "xyz",
            Space::Lab => "lab",
        }
    }

    /// The conversions into and out of this space.
    pub fn converter(&self) -> Converter {
        match self {
            Space::Rgb => Converter::new(identity, identity_ok),
            Space::Hsv => Converter::new(rgb_to_hsv, hsv_to_rgb),
            Space::Xyz => Converter::new(rgb_to_xyz, xyz_to_rgb_ok),
            Space::Lab => Converter::new(rgb_to_lab, lab_to_rgb_ok),
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Model a color with the HSV notation in the sRGB color space.
//!
//! Hue is a fraction of a full turn in `[0, 1)`, not degrees. Converting from
//! RGB can produce a hue of exactly `1.0` when the wrap rounds up; converting
//! back treats it as `0.0`.

use crate::{
    color::{Component, Components},
    error::{Error, Result},
    models::rgb::Srgb,
};

colorlerp_macros::gen_model! {
    /// A color specified with the HSV notation in the sRGB color space.
    pub struct Hsv {
        /// The hue component of the color, as a fraction of a turn.
        pub hue: Component,
        /// The saturation component of the color.
        pub saturation: Component,
        /// The value component of the color.
        pub value: Component,
    }
}

impl Srgb {
    /// Convert a color specified in the sRGB color space to the HSV notation.
    ///
    /// Achromatic colors get a hue of 0. The hue is brought into range with a
    /// single turn correction, not a modulo. Adding the turn to a tiny
    /// negative hue rounds to exactly `1.0`.
    pub fn to_hsv(&self) -> Hsv {
        let Components(red, green, blue) = self.to_components();

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let value = max;
        let saturation = if max != 0.0 { delta / max } else { 0.0 };

        let hue = if saturation == 0.0 {
            0.0
        } else {
            let red_c = (max - red) / delta;
            let green_c = (max - green) / delta;
            let blue_c = (max - blue) / delta;

            let turns = if red == max {
                blue_c - green_c
            } else if green == max {
                2.0 + red_c - blue_c
            } else {
                4.0 + green_c - red_c
            };
            let hue = turns / 6.0;

            if hue < 0.0 {
                hue + 1.0
            } else if hue > 1.0 {
                hue - 1.0
            } else {
                hue
            }
        };

        Hsv::new(hue, saturation, value)
    }
}

impl Hsv {
    /// Convert this color from the HSV notation to the sRGB color space.
    ///
    /// Fails with [`Error::InvalidHueSextant`] when the hue does not fall in
    /// one of the six sextants of `[0, 1)`.
    pub fn to_srgb(&self) -> Result<Srgb> {
        let Components(hue, saturation, value) = self.to_components();

        if saturation == 0.0 {
            return Ok(Srgb::new(value, value, value));
        }

        let mut scaled = hue * 6.0;
        if scaled == 6.0 {
            scaled = 0.0;
        }

        // Truncates toward zero.
        let sextant = scaled as i64;
        let fraction = scaled - sextant as Component;

        let v1 = value * (1.0 - saturation);
        let v2 = value * (1.0 - saturation * fraction);
        let v3 = value * (1.0 - saturation * (1.0 - fraction));

        let (red, green, blue) = match sextant {
            0 => (value, v3, v1),
            1 => (v2, value, v1),
            2 => (v1, value, v3),
            3 => (v1, v2, value),
            4 => (v3, v1, value),
            5 => (value, v1, v2),
            _ => {
                tracing::debug!(hue, sextant, "rejecting hue outside of [0, 1)");
                return Err(Error::InvalidHueSextant { sextant, hue });
            }
        };

        Ok(Srgb::new(red, green, blue))
    }
}

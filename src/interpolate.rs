//! Linear interpolation between two colors.
//!
//! [`interpolate`] works on raw components and knows nothing about color
//! spaces. [`Interpolation`] pairs it with a [`Converter`]: both endpoints
//! are converted out of RGB once, blended in the target space, and every
//! sample is converted back to RGB.

use crate::{
    color::{Component, Components},
    convert::{Converter, Space},
    error::Result,
    math::lerp,
    models::Srgb,
};

/// Interpolate component-wise from `start` to `end`. `factor` is not
/// restricted to `[0, 1]`; values outside of it extrapolate.
pub fn interpolate(start: &Components, end: &Components, factor: Component) -> Components {
    start.zip_map(end, |a, b| lerp(a, b, factor))
}

/// An interpolation between two RGB colors, carried out in another space.
#[derive(Clone, Debug)]
pub struct Interpolation {
    start: Components,
    end: Components,
    converter: Converter,
}

impl Interpolation {
    /// Set up an interpolation between two RGB colors using the given pair of
    /// conversions.
    pub fn new(start: Components, end: Components, converter: Converter) -> Self {
        let start_in_space = converter.to_space(start);
        let end_in_space = converter.to_space(end);

        tracing::trace!(
            %start,
            %end,
            start_in_space = %start_in_space,
            end_in_space = %end_in_space,
            "interpolation endpoints"
        );

        Self {
            start: start_in_space,
            end: end_in_space,
            converter,
        }
    }

    /// Set up an interpolation between two RGB colors in `space`.
    pub fn in_space(start: Components, end: Components, space: Space) -> Self {
        Self::new(start, end, space.converter())
    }

    /// The start color, converted into the interpolation space.
    pub fn start(&self) -> Components {
        self.start
    }

    /// The end color, converted into the interpolation space.
    pub fn end(&self) -> Components {
        self.end
    }

    /// Return the RGB color at `t` between the start and end colors.
    pub fn at(&self, t: Component) -> Result<Components> {
        self.converter
            .to_rgb(interpolate(&self.start, &self.end, t))
    }

    /// Return `count` evenly spaced RGB colors at `i / count` for each `i` in
    /// `0..count`. The end color itself is not included.
    pub fn sample(&self, count: usize) -> impl Iterator<Item = Result<Components>> + '_ {
        (0..count).map(move |i| self.at(i as Component / count as Component))
    }
}

impl Srgb {
    /// Interpolate from this color to another in the given space.
    pub fn interpolate(&self, other: &Srgb, space: Space) -> Interpolation {
        Interpolation::in_space(self.to_components(), other.to_components(), space)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_components_eq, convert, Error};

    #[test]
    fn basic() {
        let left = Components(0.1, 0.2, 0.3);
        let right = Components(0.5, 0.6, 0.7);
        let mixed = interpolate(&left, &right, 0.5);
        assert_components_eq!(mixed, Components(0.3, 0.4, 0.5), 1e-15);
    }

    #[test]
    fn endpoints_are_exact() {
        let pairs = [
            (Components(0.2, 0.3, 0.9), Components(0.9, 0.9, 0.1)),
            (Components(53.2, 80.1, 67.2), Components(32.3, 79.2, -107.9)),
            (Components(0.0, 0.0, 0.0), Components(100.0, -1.0, 1e-9)),
            (
                Components(-Component::MAX, 0.0, Component::MAX),
                Components(Component::MAX, 1.0, -Component::MAX),
            ),
        ];
        for (a, b) in pairs {
            assert_eq!(interpolate(&a, &b, 0.0), a);
            assert_eq!(interpolate(&a, &b, 1.0), b);
        }
    }

    #[test]
    fn extrapolates_outside_unit_range() {
        let a = Components(0.0, 1.0, 2.0);
        let b = Components(1.0, 2.0, 3.0);
        assert_eq!(interpolate(&a, &b, 2.0), Components(2.0, 3.0, 4.0));
        assert_eq!(interpolate(&a, &b, -1.0), Components(-1.0, 0.0, 1.0));
    }

    #[test]
    fn rgb_interpolation_is_plain_lerp() {
        let red = Components(1.0, 0.0, 0.0);
        let blue = Components(0.0, 0.0, 1.0);
        let interp = Interpolation::in_space(red, blue, Space::Rgb);
        assert_eq!(interp.at(0.5), Ok(Components(0.5, 0.0, 0.5)));
    }

    #[test]
    fn endpoints_survive_every_space() {
        let red = Components(1.0, 0.0, 0.0);
        let blue = Components(0.0, 0.0, 1.0);
        for space in Space::ALL {
            let interp = Interpolation::in_space(red, blue, space);
            assert_components_eq!(interp.at(0.0).unwrap(), red, 1e-6, "{}", space);
            assert_components_eq!(interp.at(1.0).unwrap(), blue, 1e-6, "{}", space);
        }
    }

    #[test]
    fn hsv_goes_around_the_hue_circle() {
        // Red (hue 0) to blue (hue 2/3) passes through green (hue 1/3).
        let interp = Interpolation::in_space(
            Components(1.0, 0.0, 0.0),
            Components(0.0, 0.0, 1.0),
            Space::Hsv,
        );
        assert_components_eq!(interp.at(0.5).unwrap(), Components(0.0, 1.0, 0.0), 1e-12);
    }

    #[test]
    fn endpoints_are_held_in_the_target_space() {
        let red = Components(1.0, 0.0, 0.0);
        let white = Components(1.0, 1.0, 1.0);
        let interp = Interpolation::in_space(red, white, Space::Lab);
        assert_eq!(interp.start(), convert::rgb_to_lab(red));
        assert_eq!(interp.end(), convert::rgb_to_lab(white));
    }

    #[test]
    fn sample_never_reaches_the_end() {
        let interp = Interpolation::in_space(
            Components(0.0, 0.0, 0.0),
            Components(1.0, 1.0, 1.0),
            Space::Rgb,
        );
        let samples = interp.sample(4).collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(
            samples,
            vec![
                Components(0.0, 0.0, 0.0),
                Components(0.25, 0.25, 0.25),
                Components(0.5, 0.5, 0.5),
                Components(0.75, 0.75, 0.75),
            ]
        );
        assert_eq!(interp.sample(0).count(), 0);
    }

    #[test]
    fn extrapolating_hue_surfaces_the_sextant_error() {
        let interp = Interpolation::in_space(
            Components(1.0, 0.0, 0.0),
            Components(0.0, 0.0, 1.0),
            Space::Hsv,
        );
        assert!(matches!(
            interp.at(2.0),
            Err(Error::InvalidHueSextant { .. })
        ));
    }

    #[test]
    fn custom_converter_pair() {
        fn halve(c: Components) -> Components {
            c.map(|v| v / 2.0)
        }
        fn double(c: Components) -> Result<Components> {
            Ok(c.map(|v| v * 2.0))
        }

        let interp = Interpolation::new(
            Components(0.0, 0.0, 0.0),
            Components(1.0, 1.0, 1.0),
            Converter::new(halve, double),
        );
        assert_eq!(interp.end(), Components(0.5, 0.5, 0.5));
        assert_eq!(interp.at(0.5), Ok(Components(0.5, 0.5, 0.5)));
    }

    #[test]
    fn from_srgb_model() {
        let mixed = Srgb::new(1.0, 0.0, 0.0)
            .interpolate(&Srgb::new(0.0, 1.0, 0.0), Space::Rgb)
            .at(0.5)
            .unwrap();
        assert_eq!(mixed, Components(0.5, 0.5, 0.0));
    }
}

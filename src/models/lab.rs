//! Model a color in the CIELAB color space.

use crate::{
    color::{Component, Components},
    models::xyz::{WhitePoint, Xyz, D65},
};

colorlerp_macros::gen_model! {
    /// A color specified in the CIELAB color space. Lightness is
    /// conventionally in `[0, 100]`; a and b are unbounded and never clamped.
    pub struct Lab {
        /// The lightness component.
        pub lightness: Component,
        /// The a component.
        pub a: Component,
        /// The b component.
        pub b: Component,
    }
}

/// Below this (normalized) value the pivot switches to its linear segment.
const EPSILON: Component = 0.008856;
/// Slope of the linear segment of the pivot.
const SLOPE: Component = 7.787;
/// Offset of the linear segment of the pivot.
const OFFSET: Component = 16.0 / 116.0;

fn pivot(value: Component) -> Component {
    if value > EPSILON {
        value.cbrt()
    } else {
        SLOPE * value + OFFSET
    }
}

fn inverse_pivot(value: Component) -> Component {
    let cubed = value * value * value;
    if cubed > EPSILON {
        cubed
    } else {
        (value - OFFSET) / SLOPE
    }
}

impl Xyz {
    /// Convert to CIELAB relative to the D65 white point.
    pub fn to_lab(&self) -> Lab {
        self.to_lab_relative_to::<D65>()
    }

    /// Convert to CIELAB relative to the white point `W`.
    pub fn to_lab_relative_to<W: WhitePoint>(&self) -> Lab {
        let Components(x, y, z) = self
            .to_components()
            .zip_map(&W::WHITE_POINT, |c, white| pivot(c / white));

        Lab::new(116.0 * y - 16.0, 500.0 * (x - y), 200.0 * (y - z))
    }
}

impl Lab {
    /// Convert to CIE-XYZ relative to the D65 white point.
    pub fn to_xyz(&self) -> Xyz {
        self.to_xyz_relative_to::<D65>()
    }

    /// Convert to CIE-XYZ relative to the white point `W`.
    pub fn to_xyz_relative_to<W: WhitePoint>(&self) -> Xyz {
        let y = (self.lightness + 16.0) / 116.0;
        let x = self.a / 500.0 + y;
        let z = y - self.b / 200.0;

        Components(x, y, z)
            .zip_map(&W::WHITE_POINT, |c, white| inverse_pivot(c) * white)
            .into()
    }
}

//! colorlerp converts colors between RGB, HSV, CIE-XYZ and CIELAB and
//! interpolates between two colors in any of those spaces.
//!
//! Every conversion is a pure function over a [`Components`] triple. The
//! typed models in [`models`] wrap the same math for callers that want the
//! compiler to track which space a triple is in.
//!
//! ```rust
//! use colorlerp::{Components, Interpolation, Space};
//! let red = Components(1.0, 0.0, 0.0);
//! let blue = Components(0.0, 0.0, 1.0);
//! let middle = Interpolation::in_space(red, blue, Space::Lab).at(0.5).unwrap();
//! assert!(middle.0 > 0.0 && middle.2 > 0.0);
//! ```

#![deny(missing_docs)]

mod color;
pub mod convert;
mod error;
mod interpolate;
mod math;
pub mod models;


pub use color::{Component, Components};
pub use convert::{Converter, Space};
pub use error::{Error, Result};
pub use interpolate::{interpolate, Interpolation};
pub use math::{clamp, lerp};

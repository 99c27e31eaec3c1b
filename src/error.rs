//! Error types for color conversions.

use thiserror::Error;

use crate::color::Component;

/// Result type for fallible conversions.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting between color spaces.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The hue passed to an HSV to RGB conversion scaled to a sextant outside
    /// of `0..=5`. Happens when the hue is outside of `[0, 1)`.
    #[error("invalid hue sextant {sextant} derived from hue {hue}")]
    InvalidHueSextant {
        /// The sextant index derived from the hue.
        sextant: i64,
        /// The hue that was passed in.
        hue: Component,
    },
}

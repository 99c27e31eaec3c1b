//! Each color space is modeled with its own type. Conversions are only
//! implemented on relevant models, so a conversion path can only be written
//! in the order the math allows.
//!
//! ```rust
//! use colorlerp::models::Srgb;
//! let lab = Srgb::new(1.0, 0.0, 0.0)
//!     .to_linear_light()  // gamma expand.
//!     .to_xyz()           // convert to CIE-XYZ.
//!     .to_lab();          // convert to CIELAB.
//! assert!(lab.lightness > 53.0 && lab.lightness < 54.0);
//! ```

pub mod hsv;
pub mod lab;
pub mod rgb;
pub mod xyz;

pub use hsv::Hsv;
pub use lab::Lab;
pub use rgb::{encoding, Rgb, Srgb, SrgbLinear};
pub use xyz::{WhitePoint, Xyz, D65};

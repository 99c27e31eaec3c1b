//! The untyped triple that every conversion in this crate operates on.
//!
//! A [`Components`] value carries no color space tag. What the three numbers
//! mean (RGB, HSV, XYZ or Lab) is decided by the function that produced it
//! and the function that consumes it.

use std::fmt;
use std::ops::Index;

/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// Combine these components with `other`, pairwise, using the given
    /// function.
    pub fn zip_map(
        &self,
        other: &Self,
        f: impl Fn(Component, Component) -> Component,
    ) -> Self {
        Self(f(self.0, other.0), f(self.1, other.1), f(self.2, other.2))
    }

    /// Return the components as an array.
    pub fn to_array(&self) -> [Component; 3] {
        [self.0, self.1, self.2]
    }
}

impl From<[Component; 3]> for Components {
    fn from([c0, c1, c2]: [Component; 3]) -> Self {
        Self(c0, c1, c2)
    }
}

impl From<Components> for [Component; 3] {
    fn from(value: Components) -> Self {
        value.to_array()
    }
}

impl Index<usize> for Components {
    type Output = Component;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.0,
            1 => &self.1,
            2 => &self.2,
            _ => panic!("component index out of range: {index}"),
        }
    }
}

impl fmt::Display for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

//! # Printable Capability
//!
//! A type that can render a representation of itself implements [`Printable`]
//! and gains `to_display_string` for free.

use serde::{Deserialize, Serialize};

/// Capability contract: "can render its own representation".
pub trait Printable {
    /// The textual representation of `self`.
    fn repr(&self) -> String;

    /// Displayable form derived from [`Printable::repr`].
    fn to_display_string(&self) -> String {
        self.repr()
    }
}

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point2D {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Printable for Point2D {
    // Six fractional digits per coordinate.
    fn repr(&self) -> String {
        format!("Point({:.6},{:.6})", self.x, self.y)
    }
}

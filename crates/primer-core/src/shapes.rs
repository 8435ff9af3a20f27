//! # Drawable Shapes
//!
//! Shapes share one narrow capability, [`Draw`]: render yourself into a text
//! sink. The set of shape kinds is closed, so heterogeneous collections hold
//! the tagged [`Shape`] variant rather than boxed trait objects.
//!
//! ## Rendering
//!
//! | Shape | Output |
//! |-------|--------|
//! | Circle | `Circle(c=Point(0.000000,0.000000), r=10)` |
//! | Rectangle | `Rectangle(p=Point(-5.000000,2.000000), w=8, h=3)` |
//!
//! A [`Scene`] joins its drawn shapes with `", "`.

use crate::render::{Point2D, Printable};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// DRAW CAPABILITY
// =============================================================================

/// Capability contract: "can render itself to an output".
pub trait Draw {
    /// Write the rendering of `self` into `out`.
    fn draw(&self, out: &mut dyn fmt::Write) -> fmt::Result;
}

// =============================================================================
// SHAPE KINDS
// =============================================================================

/// A circle given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center.
    pub c: Point2D,
    /// Radius.
    pub r: f64,
}

impl Draw for Circle {
    fn draw(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "Circle(c={}, r={})", self.c.to_display_string(), self.r)
    }
}

/// An axis-aligned rectangle given by its anchor point and extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Anchor point.
    pub p: Point2D,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl Draw for Rectangle {
    fn draw(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(
            out,
            "Rectangle(p={}, w={}, h={})",
            self.p.to_display_string(),
            self.w,
            self.h
        )
    }
}

/// Any drawable shape.
///
/// Serialized with an internal `kind` tag:
/// `{"kind":"circle","c":{"x":0.0,"y":0.0},"r":10.0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// A circle.
    Circle(Circle),
    /// A rectangle.
    Rectangle(Rectangle),
}

impl Draw for Shape {
    fn draw(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        match self {
            Shape::Circle(circle) => circle.draw(out),
            Shape::Rectangle(rect) => rect.draw(out),
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

// =============================================================================
// SCENE
// =============================================================================

/// An ordered, homogeneous collection of shapes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in scene: a circle of radius 10 at the origin and an 8x3
    /// rectangle anchored at (-5, 2).
    #[must_use]
    pub fn default_scene() -> Self {
        let mut scene = Self::new();
        scene.push(Circle {
            c: Point2D::new(0.0, 0.0),
            r: 10.0,
        });
        scene.push(Rectangle {
            p: Point2D::new(-5.0, 2.0),
            w: 8.0,
            h: 3.0,
        });
        scene
    }

    /// Append a shape.
    pub fn push(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    /// The shapes in insertion order.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the scene holds no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Render every shape, separated by `", "`.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl From<Vec<Shape>> for Scene {
    fn from(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, shape) in self.shapes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            shape.draw(f)?;
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

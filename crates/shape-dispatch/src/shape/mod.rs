//! The closed set of shape variants
//!
//! Each kind is a plain value type holding only its own geometry. Behavior
//! lives in [`crate::operation`] and is attached from the outside, so adding
//! an operation never touches this module. Adding a kind, on the other hand,
//! is a compile error everywhere a `Shape` is matched until it is handled.

mod circle;
mod collection;
mod geometry;
mod rectangle;
mod square;

pub use circle::Circle;
pub use collection::ShapeCollection;
pub use geometry::{Angle, Point};
pub use rectangle::Rectangle;
pub use square::Square;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, ShapeError};

/// Discriminator for the active variant of a [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// A circle
    Circle,
    /// A square
    Square,
    /// A rectangle
    Rectangle,
}

impl ShapeKind {
    /// Every kind, in declaration order
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Rectangle];

    /// Stable lowercase name
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Rectangle => "rectangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A shape value: a tagged union over the closed set of kinds.
///
/// # Example
///
/// ```
/// use shape_dispatch::{Shape, ShapeKind};
///
/// let shape = Shape::circle(2.0).unwrap();
/// assert_eq!(shape.kind(), ShapeKind::Circle);
/// assert!(Shape::square(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    /// See [`Circle`]
    Circle(Circle),
    /// See [`Square`]
    Square(Square),
    /// See [`Rectangle`]
    Rectangle(Rectangle),
}

impl Shape {
    /// A circle of the given radius at the origin.
    pub fn circle(radius: f64) -> Result<Self> {
        Circle::new(radius).map(Shape::Circle)
    }

    /// A square of the given side at the origin.
    pub fn square(side: f64) -> Result<Self> {
        Square::new(side).map(Shape::Square)
    }

    /// A rectangle of the given size at the origin.
    pub fn rectangle(width: f64, height: f64) -> Result<Self> {
        Rectangle::new(width, height).map(Shape::Rectangle)
    }

    /// The active kind
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Square(_) => ShapeKind::Square,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
        }
    }

    /// Centre point of the active variant
    pub fn center(&self) -> Point {
        match self {
            Shape::Circle(c) => c.center(),
            Shape::Square(s) => s.center(),
            Shape::Rectangle(r) => r.center(),
        }
    }

    /// Orientation of the active variant. Circles have none and report zero.
    pub fn orientation(&self) -> Angle {
        match self {
            Shape::Circle(_) => Angle::ZERO,
            Shape::Square(s) => s.orientation(),
            Shape::Rectangle(r) => r.orientation(),
        }
    }

    /// Returns the circle, if this is one
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Shape::Circle(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the square, if this is one
    pub fn as_square(&self) -> Option<&Square> {
        match self {
            Shape::Square(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the rectangle, if this is one
    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        match self {
            Shape::Rectangle(r) => Some(r),
            _ => None,
        }
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

impl From<Square> for Shape {
    fn from(s: Square) -> Self {
        Shape::Square(s)
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Shape::Rectangle(r)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle(c) => write!(f, "circle(r={}) at {}", c.radius(), c.center()),
            Shape::Square(s) => write!(
                f,
                "square(side={}, {}) at {}",
                s.side(),
                s.orientation(),
                s.center()
            ),
            Shape::Rectangle(r) => write!(
                f,
                "rectangle({}x{}, {}) at {}",
                r.width(),
                r.height(),
                r.orientation(),
                r.center()
            ),
        }
    }
}

/// Check that a geometric parameter is strictly positive and finite.
pub(crate) fn require_positive(kind: ShapeKind, parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ShapeError::InvalidGeometry {
            kind,
            parameter,
            value,
        })
    }
}

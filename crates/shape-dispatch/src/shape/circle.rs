//! Circle variant

use serde::{Deserialize, Serialize};

use super::{require_positive, Point, ShapeKind};
use crate::error::{Result, ShapeError};

/// A circle. Rotationally symmetric, so it carries no orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CircleFields")]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// A circle centred at the origin.
    ///
    /// # Errors
    ///
    /// `InvalidGeometry` if `radius` is not positive and finite.
    pub fn new(radius: f64) -> Result<Self> {
        Self::at(Point::ORIGIN, radius)
    }

    /// A circle centred at `center`.
    pub fn at(center: Point, radius: f64) -> Result<Self> {
        let radius = require_positive(ShapeKind::Circle, "radius", radius)?;
        Ok(Self { center, radius })
    }

    /// Centre point
    pub fn center(&self) -> Point {
        self.center
    }

    /// Radius, always `> 0`
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Copy of this circle moved to `center`
    pub fn with_center(self, center: Point) -> Self {
        Self { center, ..self }
    }
}

#[derive(Deserialize)]
struct CircleFields {
    #[serde(default)]
    center: Point,
    radius: f64,
}

impl TryFrom<CircleFields> for Circle {
    type Error = ShapeError;

    fn try_from(fields: CircleFields) -> Result<Self> {
        Circle::at(fields.center, fields.radius)
    }
}

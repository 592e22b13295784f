//! Rectangle variant

use serde::{Deserialize, Serialize};

use super::{require_positive, Angle, Point, ShapeKind};
use crate::error::{Result, ShapeError};

/// A rectangle with an orientation about its centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RectangleFields")]
pub struct Rectangle {
    center: Point,
    width: f64,
    height: f64,
    orientation: Angle,
}

impl Rectangle {
    /// An axis-aligned rectangle centred at the origin.
    ///
    /// # Errors
    ///
    /// `InvalidGeometry` if either dimension is not positive and finite.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Self::at(Point::ORIGIN, width, height)
    }

    /// An axis-aligned rectangle centred at `center`.
    pub fn at(center: Point, width: f64, height: f64) -> Result<Self> {
        let width = require_positive(ShapeKind::Rectangle, "width", width)?;
        let height = require_positive(ShapeKind::Rectangle, "height", height)?;
        Ok(Self {
            center,
            width,
            height,
            orientation: Angle::ZERO,
        })
    }

    /// Centre point
    pub fn center(&self) -> Point {
        self.center
    }

    /// Width, always `> 0`
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height, always `> 0`
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Orientation about the centre
    pub fn orientation(&self) -> Angle {
        self.orientation
    }

    /// Copy of this rectangle moved to `center`
    pub fn with_center(self, center: Point) -> Self {
        Self { center, ..self }
    }

    /// Copy of this rectangle turned to `orientation`
    pub fn with_orientation(self, orientation: Angle) -> Self {
        Self {
            orientation,
            ..self
        }
    }
}

#[derive(Deserialize)]
struct RectangleFields {
    #[serde(default)]
    center: Point,
    width: f64,
    height: f64,
    #[serde(default)]
    orientation: Angle,
}

impl TryFrom<RectangleFields> for Rectangle {
    type Error = ShapeError;

    fn try_from(fields: RectangleFields) -> Result<Self> {
        Ok(Rectangle::at(fields.center, fields.width, fields.height)?
            .with_orientation(fields.orientation))
    }
}

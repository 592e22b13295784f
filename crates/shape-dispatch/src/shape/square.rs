//! Square variant

use serde::{Deserialize, Serialize};

use super::{require_positive, Angle, Point, ShapeKind};
use crate::error::{Result, ShapeError};

/// A square with an orientation about its centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SquareFields")]
pub struct Square {
    center: Point,
    side: f64,
    orientation: Angle,
}

impl Square {
    /// An axis-aligned square centred at the origin.
    ///
    /// # Errors
    ///
    /// `InvalidGeometry` if `side` is not positive and finite.
    pub fn new(side: f64) -> Result<Self> {
        Self::at(Point::ORIGIN, side)
    }

    /// An axis-aligned square centred at `center`.
    pub fn at(center: Point, side: f64) -> Result<Self> {
        let side = require_positive(ShapeKind::Square, "side", side)?;
        Ok(Self {
            center,
            side,
            orientation: Angle::ZERO,
        })
    }

    /// Centre point
    pub fn center(&self) -> Point {
        self.center
    }

    /// Side length, always `> 0`
    pub fn side(&self) -> f64 {
        self.side
    }

    /// Orientation about the centre
    pub fn orientation(&self) -> Angle {
        self.orientation
    }

    /// Copy of this square moved to `center`
    pub fn with_center(self, center: Point) -> Self {
        Self { center, ..self }
    }

    /// Copy of this square turned to `orientation`
    pub fn with_orientation(self, orientation: Angle) -> Self {
        Self {
            orientation,
            ..self
        }
    }
}

#[derive(Deserialize)]
struct SquareFields {
    #[serde(default)]
    center: Point,
    side: f64,
    #[serde(default)]
    orientation: Angle,
}

impl TryFrom<SquareFields> for Square {
    type Error = ShapeError;

    fn try_from(fields: SquareFields) -> Result<Self> {
        Ok(Square::at(fields.center, fields.side)?.with_orientation(fields.orientation))
    }
}

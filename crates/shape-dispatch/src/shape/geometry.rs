//! Plain geometric values shared by all shape kinds

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::fmt;
use std::ops::Add;

/// A point in the plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// The origin `(0, 0)`
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Return this point moved by `(dx, dy)`
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An orientation in radians, always kept in `[0, 2π)`.
///
/// Adding two angles wraps around, so rotating by `θ` twice lands on the
/// same angle as rotating once by `2θ` (up to floating point rounding).
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Angle(f64);

impl Angle {
    /// Zero rotation
    pub const ZERO: Angle = Angle(0.0);

    /// Create an angle from radians, normalizing into `[0, 2π)`.
    ///
    /// Non-finite input has no position on the circle and becomes zero.
    pub fn radians(radians: f64) -> Self {
        if !radians.is_finite() {
            return Angle::ZERO;
        }
        let wrapped = radians.rem_euclid(TAU);
        // rem_euclid can round up to TAU for tiny negative inputs
        if wrapped >= TAU {
            Angle(0.0)
        } else {
            Angle(wrapped)
        }
    }

    /// Create an angle from degrees.
    pub fn degrees(degrees: f64) -> Self {
        Self::radians(degrees.to_radians())
    }

    /// The normalized value in radians
    pub fn as_radians(self) -> f64 {
        self.0
    }

    /// The normalized value in degrees
    pub fn as_degrees(self) -> f64 {
        self.0.to_degrees()
    }

    /// Compare two angles on the circle, so values either side of zero
    /// are considered close.
    pub fn approx_eq(self, other: Angle, epsilon: f64) -> bool {
        let diff = (self.0 - other.0).rem_euclid(TAU);
        diff.min(TAU - diff) <= epsilon
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle::radians(self.0 + rhs.0)
    }
}

impl From<f64> for Angle {
    fn from(radians: f64) -> Self {
        Angle::radians(radians)
    }
}

impl From<Angle> for f64 {
    fn from(angle: Angle) -> Self {
        angle.0
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}rad", self.0)
    }
}

//! Standard operations: draw, rotate, translate, area, perimeter

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::{Operation, Outcome};
use crate::shape::{Angle, Shape};

/// Name of the draw operation
pub const DRAW: &str = "draw";
/// Name of the rotate operation
pub const ROTATE: &str = "rotate";
/// Name of the translate operation
pub const TRANSLATE: &str = "translate";
/// Name of the area operation
pub const AREA: &str = "area";
/// Name of the perimeter operation
pub const PERIMETER: &str = "perimeter";

/// Parameters baked into the standard operations at registration time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandardParams {
    /// Angle applied by `rotate`
    pub rotation: Angle,
    /// Horizontal offset applied by `translate`
    pub dx: f64,
    /// Vertical offset applied by `translate`
    pub dy: f64,
}

/// Every standard operation, in registration order.
pub fn all(params: &StandardParams) -> Vec<Operation> {
    vec![
        draw(),
        rotate(params.rotation),
        translate(params.dx, params.dy),
        area(),
        perimeter(),
    ]
}

/// Writes one line per shape to the sink.
pub fn draw() -> Operation {
    Operation::builder(DRAW)
        .circle(|c, sink| {
            sink.emit(&format!("circle r={} at {}", c.radius(), c.center()))?;
            Ok(Outcome::Unit)
        })
        .square(|s, sink| {
            sink.emit(&format!(
                "square side={} angle={} at {}",
                s.side(),
                s.orientation(),
                s.center()
            ))?;
            Ok(Outcome::Unit)
        })
        .rectangle(|r, sink| {
            sink.emit(&format!(
                "rectangle {}x{} angle={} at {}",
                r.width(),
                r.height(),
                r.orientation(),
                r.center()
            ))?;
            Ok(Outcome::Unit)
        })
        .build()
}

/// Turns a shape about its centre by `angle`. Pure.
///
/// Circles are rotationally symmetric and come back unchanged.
pub fn rotate(angle: Angle) -> Operation {
    Operation::builder(ROTATE)
        .circle(|c, _| Ok(Outcome::Shape(Shape::Circle(*c))))
        .square(move |s, _| {
            let turned = s.with_orientation(s.orientation() + angle);
            Ok(Outcome::Shape(turned.into()))
        })
        .rectangle(move |r, _| {
            let turned = r.with_orientation(r.orientation() + angle);
            Ok(Outcome::Shape(turned.into()))
        })
        .build()
}

/// Moves a shape's centre by `(dx, dy)`. Pure.
pub fn translate(dx: f64, dy: f64) -> Operation {
    Operation::builder(TRANSLATE)
        .circle(move |c, _| {
            let moved = c.with_center(c.center().offset(dx, dy));
            Ok(Outcome::Shape(moved.into()))
        })
        .square(move |s, _| {
            let moved = s.with_center(s.center().offset(dx, dy));
            Ok(Outcome::Shape(moved.into()))
        })
        .rectangle(move |r, _| {
            let moved = r.with_center(r.center().offset(dx, dy));
            Ok(Outcome::Shape(moved.into()))
        })
        .build()
}

/// Enclosed area.
pub fn area() -> Operation {
    Operation::builder(AREA)
        .circle(|c, _| Ok(Outcome::Scalar(PI * c.radius() * c.radius())))
        .square(|s, _| Ok(Outcome::Scalar(s.side() * s.side())))
        .rectangle(|r, _| Ok(Outcome::Scalar(r.width() * r.height())))
        .build()
}

/// Boundary length.
pub fn perimeter() -> Operation {
    Operation::builder(PERIMETER)
        .circle(|c, _| Ok(Outcome::Scalar(2.0 * PI * c.radius())))
        .square(|s, _| Ok(Outcome::Scalar(4.0 * s.side())))
        .rectangle(|r, _| Ok(Outcome::Scalar(2.0 * (r.width() + r.height()))))
        .build()
}

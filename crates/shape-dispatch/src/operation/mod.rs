//! Operations: open-ended behavior attached to the closed set of shapes
//!
//! An [`Operation`] holds one optional implementation per [`ShapeKind`].
//! Applying it is a single exhaustive `match` on the shape, which picks the
//! implementation for the active variant and hands it the concrete struct.

mod sink;
pub mod standard;

pub use sink::{NullSink, Sink, WriterSink};

use serde::Serialize;
use std::fmt;
use std::io;
use std::sync::Arc;
use thiserror::Error;

use crate::error::{Result, ShapeError};
use crate::shape::{Circle, Rectangle, Shape, ShapeKind, Square};

/// Result of applying an operation to one shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    /// Side effect only (e.g. `draw`)
    Unit,
    /// A new shape value (e.g. `rotate`, `translate`)
    Shape(Shape),
    /// A measurement (e.g. `area`)
    Scalar(f64),
}

impl Outcome {
    /// Returns the shape, if this outcome carries one
    pub fn as_shape(&self) -> Option<&Shape> {
        match self {
            Outcome::Shape(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the scalar, if this outcome carries one
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Outcome::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    /// Whether this is [`Outcome::Unit`]
    pub fn is_unit(&self) -> bool {
        matches!(self, Outcome::Unit)
    }
}

/// Failure reported by a kind-specific implementation.
#[derive(Error, Debug)]
pub enum HandlerError {
    /// Writing to the sink failed
    #[error("Sink error: {0}")]
    Sink(#[from] io::Error),
    /// The implementation rejected its input
    #[error("{0}")]
    Failed(String),
}

impl From<String> for HandlerError {
    fn from(message: String) -> Self {
        HandlerError::Failed(message)
    }
}

impl From<&str> for HandlerError {
    fn from(message: &str) -> Self {
        HandlerError::Failed(message.to_string())
    }
}

/// Return type of a kind-specific implementation
pub type HandlerResult = std::result::Result<Outcome, HandlerError>;

/// A kind-specific implementation receiving the concrete shape struct
pub type HandlerFn<K> = Arc<dyn Fn(&K, &mut dyn Sink) -> HandlerResult + Send + Sync>;

/// A named operation with one optional implementation per shape kind.
///
/// Cloning is cheap: implementations are shared behind `Arc`.
///
/// # Example
///
/// ```
/// use shape_dispatch::{NullSink, Operation, Outcome, Shape};
///
/// let kind_name = Operation::builder("kind_name")
///     .circle(|_, _| Ok(Outcome::Scalar(0.0)))
///     .square(|_, _| Ok(Outcome::Scalar(1.0)))
///     .rectangle(|_, _| Ok(Outcome::Scalar(2.0)))
///     .build();
///
/// let square = Shape::square(3.0).unwrap();
/// let outcome = kind_name.apply(&square, &mut NullSink).unwrap();
/// assert_eq!(outcome, Outcome::Scalar(1.0));
/// ```
#[derive(Clone)]
pub struct Operation {
    name: String,
    circle: Option<HandlerFn<Circle>>,
    square: Option<HandlerFn<Square>>,
    rectangle: Option<HandlerFn<Rectangle>>,
}

impl Operation {
    /// Start building an operation called `name`
    pub fn builder(name: impl Into<String>) -> OperationBuilder {
        OperationBuilder {
            op: Operation {
                name: name.into(),
                circle: None,
                square: None,
                rectangle: None,
            },
        }
    }

    /// The operation's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether an implementation exists for `kind`
    pub fn supports(&self, kind: ShapeKind) -> bool {
        match kind {
            ShapeKind::Circle => self.circle.is_some(),
            ShapeKind::Square => self.square.is_some(),
            ShapeKind::Rectangle => self.rectangle.is_some(),
        }
    }

    /// Kinds with no implementation, in declaration order
    pub fn missing_kinds(&self) -> Vec<ShapeKind> {
        ShapeKind::ALL
            .into_iter()
            .filter(|kind| !self.supports(*kind))
            .collect()
    }

    /// Whether every kind has an implementation
    pub fn is_complete(&self) -> bool {
        ShapeKind::ALL.into_iter().all(|kind| self.supports(kind))
    }

    /// Apply this operation to one shape.
    ///
    /// # Errors
    ///
    /// - `UnsupportedKind` if there is no implementation for the shape's kind
    /// - `OperationFailed` if the implementation rejects the shape
    /// - `Sink` if writing output failed
    pub fn apply(&self, shape: &Shape, sink: &mut dyn Sink) -> Result<Outcome> {
        match shape {
            Shape::Circle(c) => self.invoke(ShapeKind::Circle, self.circle.as_ref(), c, sink),
            Shape::Square(s) => self.invoke(ShapeKind::Square, self.square.as_ref(), s, sink),
            Shape::Rectangle(r) => {
                self.invoke(ShapeKind::Rectangle, self.rectangle.as_ref(), r, sink)
            }
        }
    }

    fn invoke<K>(
        &self,
        kind: ShapeKind,
        handler: Option<&HandlerFn<K>>,
        value: &K,
        sink: &mut dyn Sink,
    ) -> Result<Outcome> {
        let handler = handler.ok_or_else(|| ShapeError::UnsupportedKind {
            operation: self.name.clone(),
            kind,
        })?;

        handler(value, sink).map_err(|err| match err {
            HandlerError::Sink(e) => ShapeError::Sink(e),
            HandlerError::Failed(message) => ShapeError::OperationFailed {
                operation: self.name.clone(),
                kind,
                message,
            },
        })
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let supported: Vec<&str> = ShapeKind::ALL
            .into_iter()
            .filter(|kind| self.supports(*kind))
            .map(ShapeKind::name)
            .collect();
        write!(f, "Operation({}: {})", self.name, supported.join(", "))
    }
}

/// Builder for [`Operation`]. Kinds left unset stay unsupported.
pub struct OperationBuilder {
    op: Operation,
}

impl OperationBuilder {
    /// Set the circle implementation
    pub fn circle<F>(mut self, f: F) -> Self
    where
        F: Fn(&Circle, &mut dyn Sink) -> HandlerResult + Send + Sync + 'static,
    {
        self.op.circle = Some(Arc::new(f));
        self
    }

    /// Set the square implementation
    pub fn square<F>(mut self, f: F) -> Self
    where
        F: Fn(&Square, &mut dyn Sink) -> HandlerResult + Send + Sync + 'static,
    {
        self.op.square = Some(Arc::new(f));
        self
    }

    /// Set the rectangle implementation
    pub fn rectangle<F>(mut self, f: F) -> Self
    where
        F: Fn(&Rectangle, &mut dyn Sink) -> HandlerResult + Send + Sync + 'static,
    {
        self.op.rectangle = Some(Arc::new(f));
        self
    }

    /// Finish building
    pub fn build(self) -> Operation {
        self.op
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_error_display_and_source() {
        let failed = HandlerError::from("too large");
        assert_eq!(failed.to_string(), "too large");

        let sink: HandlerError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert_eq!(sink.to_string(), "Sink error: pipe closed");
        assert!(std::error::Error::source(&sink).is_some());
    }
}

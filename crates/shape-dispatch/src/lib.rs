//! # Shape Dispatch
//!
//! A closed set of shape variants with an open set of operations.
//!
//! Shapes are plain values in a sum type. Operations are free-standing
//! function values, registered externally, that carry one implementation
//! per shape kind. Dispatching an operation is an exhaustive `match` on the
//! shape, so the compiler checks that every kind is considered, while new
//! operations never require touching the shape definitions.
//!
//! ## Architecture
//!
//! - **Shapes** ([`shape`]): `Circle`, `Square`, `Rectangle`, validated on construction
//! - **Operations** ([`operation`]): per-kind implementations plus the standard set
//! - **Registry** ([`registry`]): named operations, populated at startup
//! - **Dispatcher** ([`dispatcher`]): fail-fast, in-order application over a sequence
//!
//! ## Example
//!
//! ```
//! use shape_dispatch::{Dispatcher, OperationRegistry, Shape, StandardParams};
//!
//! let registry = OperationRegistry::with_standard_operations(&StandardParams::default());
//! let shapes = vec![Shape::circle(1.0).unwrap(), Shape::square(2.0).unwrap()];
//!
//! let mut lines: Vec<String> = Vec::new();
//! Dispatcher::new(&registry).dispatch("draw", &shapes, &mut lines).unwrap();
//! assert_eq!(lines.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod dispatcher;
pub mod error;
pub mod operation;
pub mod registry;
pub mod shape;

// Re-export main types
pub use context::DispatchContext;
pub use dispatcher::{dispatch, Dispatcher};
pub use error::{Result, ShapeError};
pub use operation::standard::StandardParams;
pub use operation::{
    HandlerError, HandlerFn, HandlerResult, NullSink, Operation, OperationBuilder, Outcome, Sink,
    WriterSink,
};
pub use registry::OperationRegistry;
pub use shape::{Angle, Circle, Point, Rectangle, Shape, ShapeCollection, ShapeKind, Square};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Error types for shape construction and dispatch

use thiserror::Error;

use crate::shape::ShapeKind;

/// Main error type for shape dispatch operations
#[derive(Error, Debug)]
pub enum ShapeError {
    /// A geometric parameter violated its invariant
    #[error("Invalid geometry: {kind} {parameter} must be positive and finite, got {value}")]
    InvalidGeometry {
        /// Kind being constructed
        kind: ShapeKind,
        /// Offending parameter name
        parameter: &'static str,
        /// Offending value
        value: f64,
    },

    /// The operation has no implementation for this kind
    #[error("Unsupported kind: operation `{operation}` has no implementation for {kind}")]
    UnsupportedKind {
        /// Operation name
        operation: String,
        /// Kind that was not handled
        kind: ShapeKind,
    },

    /// No operation registered under this name
    #[error("Unknown operation: `{name}`")]
    UnknownOperation {
        /// Requested name
        name: String,
    },

    /// An operation with this name is already registered
    #[error("Duplicate operation: `{name}` is already registered")]
    DuplicateOperation {
        /// Conflicting name
        name: String,
    },

    /// A registered operation does not cover every kind
    #[error("Incomplete operation: `{operation}` is missing {missing:?}")]
    IncompleteOperation {
        /// Operation name
        operation: String,
        /// Kinds without an implementation
        missing: Vec<ShapeKind>,
    },

    /// The kind-specific implementation reported a failure
    #[error("Operation `{operation}` failed on {kind}: {message}")]
    OperationFailed {
        /// Operation name
        operation: String,
        /// Kind the operation was applied to
        kind: ShapeKind,
        /// Message returned by the implementation
        message: String,
    },

    /// Writing to the output sink failed
    #[error("Sink error: {0}")]
    Sink(#[from] std::io::Error),

    /// Dispatch was interrupted between elements
    #[error("Dispatch interrupted")]
    Interrupted,
}

impl ShapeError {
    /// Whether this error indicates a misconfigured registry rather than
    /// bad input. Callers should not try to recover from these.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ShapeError::UnsupportedKind { .. }
                | ShapeError::UnknownOperation { .. }
                | ShapeError::DuplicateOperation { .. }
                | ShapeError::IncompleteOperation { .. }
        )
    }
}

/// Result type alias for shape dispatch operations
pub type Result<T> = std::result::Result<T, ShapeError>;

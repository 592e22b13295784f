//! Registry of named operations

use indexmap::IndexMap;

use crate::error::{Result, ShapeError};
use crate::operation::standard::{self, StandardParams};
use crate::operation::{Operation, Outcome, Sink};
use crate::shape::Shape;

/// Named operations, kept in registration order.
///
/// The registry is the configuration step of a program: it is populated at
/// startup and then only read. Shapes never know which operations exist.
///
/// # Example
///
/// ```
/// use shape_dispatch::{OperationRegistry, Outcome, Shape, StandardParams};
///
/// let registry = OperationRegistry::with_standard_operations(&StandardParams::default());
/// let square = Shape::square(3.0).unwrap();
///
/// let mut lines: Vec<String> = Vec::new();
/// let area = registry.apply("area", &square, &mut lines).unwrap();
/// assert_eq!(area, Outcome::Scalar(9.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct OperationRegistry {
    operations: IndexMap<String, Operation>,
}

impl OperationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the standard operations.
    pub fn with_standard_operations(params: &StandardParams) -> Self {
        let mut registry = Self::new();
        registry.load_standard_operations(params);
        registry
    }

    /// Load the standard operations, replacing any that share their names.
    pub fn load_standard_operations(&mut self, params: &StandardParams) {
        for op in standard::all(params) {
            tracing::debug!(operation = op.name(), "loading standard operation");
            self.operations.insert(op.name().to_string(), op);
        }
    }

    /// Register an operation.
    ///
    /// # Errors
    ///
    /// `DuplicateOperation` if an operation with the same name exists.
    pub fn register(&mut self, op: Operation) -> Result<()> {
        if self.operations.contains_key(op.name()) {
            return Err(ShapeError::DuplicateOperation {
                name: op.name().to_string(),
            });
        }

        if !op.is_complete() {
            tracing::warn!(
                operation = op.name(),
                missing = ?op.missing_kinds(),
                "registering operation without implementations for every kind"
            );
        } else {
            tracing::debug!(operation = op.name(), "registering operation");
        }

        self.operations.insert(op.name().to_string(), op);
        Ok(())
    }

    /// Look up an operation by name.
    pub fn get(&self, name: &str) -> Option<&Operation> {
        self.operations.get(name)
    }

    /// Check if an operation is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    /// Apply the named operation to one shape.
    ///
    /// # Errors
    ///
    /// - `UnknownOperation` if `name` is not registered
    /// - anything [`Operation::apply`] returns
    pub fn apply(&self, name: &str, shape: &Shape, sink: &mut dyn Sink) -> Result<Outcome> {
        self.lookup(name)?.apply(shape, sink)
    }

    /// Look up an operation, failing if it is not registered.
    pub fn lookup(&self, name: &str) -> Result<&Operation> {
        self.get(name).ok_or_else(|| ShapeError::UnknownOperation {
            name: name.to_string(),
        })
    }

    /// Check that every registered operation covers every kind.
    ///
    /// # Errors
    ///
    /// `IncompleteOperation` for the first operation, in registration
    /// order, that is missing an implementation.
    pub fn validate(&self) -> Result<()> {
        match self.operations.values().find(|op| !op.is_complete()) {
            Some(op) => Err(ShapeError::IncompleteOperation {
                operation: op.name().to_string(),
                missing: op.missing_kinds(),
            }),
            None => Ok(()),
        }
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.operations.keys().map(String::as_str).collect()
    }

    /// Iterate over operations in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Operation> {
        self.operations.values()
    }

    /// Number of registered operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

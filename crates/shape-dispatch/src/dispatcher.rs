//! Applying one operation across an ordered sequence of shapes

use crate::context::DispatchContext;
use crate::error::{Result, ShapeError};
use crate::operation::{Operation, Outcome, Sink};
use crate::registry::OperationRegistry;
use crate::shape::Shape;

/// Resolves (shape, operation) pairs against a registry.
///
/// Dispatch is a single synchronous pass in sequence order. The first
/// failure aborts the pass and is returned; no partial results are kept.
#[derive(Debug, Clone)]
pub struct Dispatcher<'r> {
    registry: &'r OperationRegistry,
    ctx: DispatchContext,
}

impl<'r> Dispatcher<'r> {
    /// Create a dispatcher with a default context.
    pub fn new(registry: &'r OperationRegistry) -> Self {
        Self::with_context(registry, DispatchContext::default())
    }

    /// Create a dispatcher with an explicit context.
    pub fn with_context(registry: &'r OperationRegistry, ctx: DispatchContext) -> Self {
        Self { registry, ctx }
    }

    /// The dispatcher's context
    pub fn context(&self) -> &DispatchContext {
        &self.ctx
    }

    /// The registry operations are resolved against
    pub fn registry(&self) -> &'r OperationRegistry {
        self.registry
    }

    /// Apply the named operation to every shape, in order.
    ///
    /// # Errors
    ///
    /// - `UnknownOperation` if `name` is not registered (checked before
    ///   touching any shape)
    /// - the first error from [`Operation::apply`]
    /// - `Interrupted` if the context's interrupt flag is set
    pub fn dispatch(
        &self,
        name: &str,
        shapes: &[Shape],
        sink: &mut dyn Sink,
    ) -> Result<Vec<Outcome>> {
        let op = self.registry.lookup(name)?;
        self.dispatch_operation(op, shapes, sink)
    }

    /// Apply an operation value (registered or not) to every shape, in order.
    pub fn dispatch_operation(
        &self,
        op: &Operation,
        shapes: &[Shape],
        sink: &mut dyn Sink,
    ) -> Result<Vec<Outcome>> {
        let mut outcomes = Vec::with_capacity(shapes.len());

        for (index, shape) in shapes.iter().enumerate() {
            if self.ctx.is_interrupted() {
                tracing::debug!(operation = op.name(), index, "dispatch interrupted");
                return Err(ShapeError::Interrupted);
            }

            if self.ctx.trace {
                tracing::debug!(operation = op.name(), index, kind = %shape.kind(), "dispatching");
            } else {
                tracing::trace!(operation = op.name(), index, kind = %shape.kind(), "dispatching");
            }

            let outcome = op.apply(shape, sink).inspect_err(|err| {
                tracing::debug!(operation = op.name(), index, error = %err, "dispatch failed");
            })?;
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }
}

/// Dispatch the named operation with a default context (convenience wrapper).
pub fn dispatch(
    registry: &OperationRegistry,
    name: &str,
    shapes: &[Shape],
    sink: &mut dyn Sink,
) -> Result<Vec<Outcome>> {
    Dispatcher::new(registry).dispatch(name, shapes, sink)
}

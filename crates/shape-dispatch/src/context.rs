//! Dispatch context configuration

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Configuration and state for a dispatcher.
///
/// Clones share the interrupt flag, so a clone handed to another thread
/// can stop a running dispatch between elements.
#[derive(Debug, Clone, Default)]
pub struct DispatchContext {
    /// Interrupt flag - set to true to abort dispatch
    pub interrupt: Arc<AtomicBool>,

    /// Log every element at `debug` instead of `trace`
    pub trace: bool,
}

impl DispatchContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with per-element tracing enabled or disabled.
    pub fn with_trace(trace: bool) -> Self {
        Self {
            trace,
            ..Default::default()
        }
    }

    /// Check if dispatch has been interrupted.
    pub fn is_interrupted(&self) -> bool {
        self.interrupt.load(Ordering::Relaxed)
    }

    /// Request interruption of dispatch.
    pub fn interrupt(&self) {
        self.interrupt.store(true, Ordering::Relaxed);
    }

    /// Reset the interrupt flag.
    pub fn reset_interrupt(&self) {
        self.interrupt.store(false, Ordering::Relaxed);
    }
}

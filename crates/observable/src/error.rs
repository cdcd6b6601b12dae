//! Error types for the observable emitter.

use crate::callback::CallbackId;
use crate::config::Operation;
use thiserror::Error;

/// Error returned by a failing callback.
///
/// Boxed so that callbacks can use `?` on any error type.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by strict operations and by dispatch.
#[derive(Debug, Error)]
pub enum ObservableError {
    #[error("Invalid event name: {name:?}")]
    InvalidEventName { name: String },

    #[error("No callbacks supplied for event '{event}'")]
    NoCallbacks { event: String },

    #[error("Unknown event: '{event}'")]
    UnknownEvent { event: String },

    #[error("Unknown operation: '{name}'")]
    UnknownOperation { name: String },

    #[error("Operation '{name}' is bound to {bound:?}")]
    OperationMismatch { name: String, bound: Operation },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{} callback(s) failed while dispatching '{event}'", .failures.len())]
    Dispatch {
        event: String,
        failures: Vec<HandlerFailure>,
    },
}

impl ObservableError {
    /// Failures collected during dispatch, empty for every other variant.
    pub fn failures(&self) -> &[HandlerFailure] {
        match self {
            Self::Dispatch { failures, .. } => failures,
            _ => &[],
        }
    }
}

/// A single callback failure recorded during `fire`.
#[derive(Debug, Error)]
#[error("callback #{index} ({callback}) failed: {source}")]
pub struct HandlerFailure {
    /// Position of the callback in the dispatch snapshot.
    pub index: usize,
    /// Identity of the failing callback.
    pub callback: CallbackId,
    /// The error the callback returned.
    #[source]
    pub source: HandlerError,
}

//! # Callbacks
//!
//! A [`Callback`] is a shareable handle to a subscriber function. Every handle
//! carries a [`CallbackId`] minted at construction; clones share the id, and
//! the emitter compares callbacks by id only. That is what lets the same
//! handle be subscribed several times and later removed by identity.

use crate::error::HandlerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Result returned by every callback invocation.
pub type HandlerResult = Result<(), HandlerError>;

type HandlerFn<O, A> = dyn Fn(&O, &A) -> HandlerResult + Send + Sync;

/// Identity of a callback handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CallbackId(Uuid);

impl CallbackId {
    /// Mint a fresh, globally unique id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for CallbackId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CallbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A subscriber for events on an owner of type `O` carrying payload `A`.
///
/// The owner is passed as the first argument on every invocation, so the
/// callback always sees the object it was fired from.
pub struct Callback<O, A> {
    id: CallbackId,
    func: Arc<HandlerFn<O, A>>,
}

impl<O, A> Callback<O, A> {
    /// Wrap an infallible closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&O, &A) + Send + Sync + 'static,
    {
        Self::fallible(move |owner: &O, args: &A| {
            f(owner, args);
            Ok(())
        })
    }

    /// Wrap a closure that may fail. Failures surface from `fire`.
    pub fn fallible<F>(f: F) -> Self
    where
        F: Fn(&O, &A) -> HandlerResult + Send + Sync + 'static,
    {
        Self {
            id: CallbackId::new(),
            func: Arc::new(f),
        }
    }

    /// Identity shared by this handle and all of its clones.
    #[must_use]
    pub fn id(&self) -> CallbackId {
        self.id
    }

    pub(crate) fn invoke(&self, owner: &O, args: &A) -> HandlerResult {
        (self.func)(owner, args)
    }
}

impl<O, A> Clone for Callback<O, A> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            func: Arc::clone(&self.func),
        }
    }
}

impl<O, A> PartialEq for Callback<O, A> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<O, A> Eq for Callback<O, A> {}

impl<O, A> fmt::Debug for Callback<O, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback").field("id", &self.id).finish()
    }
}

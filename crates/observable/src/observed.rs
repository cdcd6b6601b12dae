//! # Observed Wrapper
//!
//! Attaches an emitter to any value without touching its type. The wrapper
//! owns the target, dereferences to it, and is itself the context callbacks
//! receive.

use crate::emitter::Emitter;
use crate::error::ObservableError;
use crate::observable::Observable;
use crate::{Args, ObservableConfig};
use std::fmt;
use std::ops::{Deref, DerefMut};

/// A target value paired with its own event table.
pub struct Observed<T, A = Args> {
    target: T,
    emitter: Emitter<Observed<T, A>, A>,
}

/// A standalone event bus with no target of its own.
pub type EventBus<A = Args> = Observed<(), A>;

impl<T, A> Observed<T, A> {
    /// Wrap `target` with an empty event table and the default configuration.
    pub fn new(target: T) -> Self {
        Self {
            target,
            emitter: Emitter::new(),
        }
    }

    /// Wrap `target` with a validated configuration.
    pub fn with_config(target: T, config: ObservableConfig) -> Result<Self, ObservableError> {
        Ok(Self {
            target,
            emitter: Emitter::try_with_config(config)?,
        })
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Unwrap the target, dropping every subscription.
    pub fn into_inner(self) -> T {
        self.target
    }

    pub fn config(&self) -> &ObservableConfig {
        self.emitter.config()
    }
}

impl<T, A> Observable for Observed<T, A> {
    type Args = A;

    fn emitter(&self) -> &Emitter<Self, A> {
        &self.emitter
    }
}

impl<T, A> Deref for Observed<T, A> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.target
    }
}

impl<T, A> DerefMut for Observed<T, A> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.target
    }
}

impl<T: Default, A> Default for Observed<T, A> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug, A> fmt::Debug for Observed<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observed")
            .field("target", &self.target)
            .field("emitter", &self.emitter)
            .finish()
    }
}

/// Attach publish/subscribe to `target`.
pub fn make_observable<T>(target: T) -> Observed<T> {
    Observed::new(target)
}

/// Attach publish/subscribe to `target` with custom method names or policy.
pub fn make_observable_with<T>(
    target: T,
    config: ObservableConfig,
) -> Result<Observed<T>, ObservableError> {
    Observed::with_config(target, config)
}

/// A fresh standalone event bus.
pub fn event_bus() -> EventBus {
    Observed::new(())
}

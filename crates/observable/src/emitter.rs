//! # Emitter
//!
//! The engine behind every observable: an [`EventTable`] behind a lock, plus
//! logging and dispatch.
//!
//! ## Locking
//!
//! The table sits behind a `parking_lot::RwLock`. Mutations hold the write
//! lock only while the table changes; dispatch holds the read lock only while
//! it copies the callbacks for the fired event. Callbacks therefore run with no
//! lock held, and may subscribe, unsubscribe or fire on the same owner.
//!
//! ## Dispatch
//!
//! `emit` invokes a snapshot taken when it starts. Changes made by callbacks
//! during dispatch apply to the next `emit`, never the current one.

use crate::callback::Callback;
use crate::config::{FailurePolicy, Operation};
use crate::error::{HandlerFailure, ObservableError};
use crate::table::{EventMap, EventTable};
use crate::{Args, ObservableConfig};
use parking_lot::RwLock;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, trace, warn};

/// Whether `event` can be registered. Empty names are rejected.
pub fn is_valid_event_name(event: &str) -> bool {
    !event.is_empty()
}

/// Event registry and dispatcher for an owner of type `O`.
///
/// Embed one in a type and implement [`Observable`](crate::Observable) to give
/// that type `on`, `off`, `fire` and `get_events`.
pub struct Emitter<O, A = Args> {
    /// Registered callbacks.
    table: RwLock<EventTable<O, A>>,

    /// Labels and dispatch policy.
    config: ObservableConfig,

    /// Total `emit` calls, including those that reached no callbacks.
    events_fired: AtomicU64,
}

impl<O, A> Emitter<O, A> {
    /// Create an emitter with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ObservableConfig::default())
    }

    /// Create an emitter with `config`, without validating it.
    #[must_use]
    pub fn with_config(config: ObservableConfig) -> Self {
        Self {
            table: RwLock::new(EventTable::new()),
            config,
            events_fired: AtomicU64::new(0),
        }
    }

    /// Create an emitter with `config` after validating it.
    pub fn try_with_config(config: ObservableConfig) -> Result<Self, ObservableError> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    #[must_use]
    pub fn config(&self) -> &ObservableConfig {
        &self.config
    }

    fn label(&self) -> &str {
        &self.config.label
    }

    fn op(&self, op: Operation) -> &str {
        self.config.method_names.name_of(op)
    }

    /// Append callbacks to `event`. Invalid names are ignored.
    ///
    /// Returns the number of callbacks added.
    pub fn subscribe<I>(&self, event: &str, callbacks: I) -> usize
    where
        I: IntoIterator<Item = Callback<O, A>>,
    {
        if !is_valid_event_name(event) {
            warn!(
                emitter = self.label(),
                op = self.op(Operation::Subscribe),
                "Ignoring subscription to empty event name"
            );
            return 0;
        }

        let added = self.table.write().subscribe(event, callbacks);
        debug!(
            emitter = self.label(),
            op = self.op(Operation::Subscribe),
            event,
            added,
            "Callbacks subscribed"
        );
        added
    }

    /// Strict [`subscribe`](Self::subscribe): rejects empty names and empty
    /// callback lists.
    pub fn try_subscribe<I>(&self, event: &str, callbacks: I) -> Result<usize, ObservableError>
    where
        I: IntoIterator<Item = Callback<O, A>>,
    {
        if !is_valid_event_name(event) {
            return Err(ObservableError::InvalidEventName {
                name: event.to_string(),
            });
        }

        let callbacks: Vec<_> = callbacks.into_iter().collect();
        if callbacks.is_empty() {
            return Err(ObservableError::NoCallbacks {
                event: event.to_string(),
            });
        }

        Ok(self.subscribe(event, callbacks))
    }

    /// Remove every occurrence of each supplied callback from `event`.
    ///
    /// Returns the number of entries removed.
    pub fn unsubscribe<I>(&self, event: &str, callbacks: I) -> usize
    where
        I: IntoIterator<Item = Callback<O, A>>,
    {
        if !is_valid_event_name(event) {
            warn!(
                emitter = self.label(),
                op = self.op(Operation::Unsubscribe),
                "Ignoring unsubscription from empty event name"
            );
            return 0;
        }

        let removed = self.table.write().unsubscribe(event, callbacks);
        debug!(
            emitter = self.label(),
            op = self.op(Operation::Unsubscribe),
            event,
            removed,
            "Callbacks unsubscribed"
        );
        removed
    }

    /// Strict [`unsubscribe`](Self::unsubscribe): rejects empty names,
    /// unknown events and empty callback lists.
    pub fn try_unsubscribe<I>(&self, event: &str, callbacks: I) -> Result<usize, ObservableError>
    where
        I: IntoIterator<Item = Callback<O, A>>,
    {
        self.ensure_registered(event)?;

        let callbacks: Vec<_> = callbacks.into_iter().collect();
        if callbacks.is_empty() {
            return Err(ObservableError::NoCallbacks {
                event: event.to_string(),
            });
        }

        Ok(self.unsubscribe(event, callbacks))
    }

    /// Drop `event` and all of its callbacks.
    ///
    /// Returns the number of callbacks that were registered for it.
    pub fn remove_event(&self, event: &str) -> usize {
        if !is_valid_event_name(event) {
            warn!(
                emitter = self.label(),
                op = self.op(Operation::Unsubscribe),
                "Ignoring removal of empty event name"
            );
            return 0;
        }

        let removed = self.table.write().remove_event(event).map_or(0, |cbs| cbs.len());
        debug!(
            emitter = self.label(),
            op = self.op(Operation::Unsubscribe),
            event,
            removed,
            "Event removed"
        );
        removed
    }

    /// Strict [`remove_event`](Self::remove_event): rejects empty names and
    /// unknown events.
    pub fn try_remove_event(&self, event: &str) -> Result<usize, ObservableError> {
        self.ensure_registered(event)?;
        Ok(self.remove_event(event))
    }

    /// Drop every event. Returns the number of events that were registered.
    pub fn clear(&self) -> usize {
        let events = self.table.write().clear();
        debug!(
            emitter = self.label(),
            op = self.op(Operation::Unsubscribe),
            events,
            "All events cleared"
        );
        events
    }

    /// Invoke every callback registered for `event`, in order, with `owner`
    /// as context.
    ///
    /// Returns the number of callbacks in the dispatch snapshot. Under
    /// [`FailurePolicy::Abort`] the first failing callback stops dispatch;
    /// under [`FailurePolicy::Continue`] the rest still run. Either way the
    /// failures are returned as [`ObservableError::Dispatch`].
    pub fn emit(&self, owner: &O, event: &str, args: &A) -> Result<usize, ObservableError> {
        self.events_fired.fetch_add(1, Ordering::Relaxed);

        let snapshot = self.table.read().snapshot(event);
        if snapshot.is_empty() {
            trace!(
                emitter = self.label(),
                op = self.op(Operation::Publish),
                event,
                "No callbacks registered"
            );
            return Ok(0);
        }

        debug!(
            emitter = self.label(),
            op = self.op(Operation::Publish),
            event,
            callbacks = snapshot.len(),
            "Dispatching event"
        );

        let mut failures = Vec::new();
        for (index, cb) in snapshot.iter().enumerate() {
            trace!(event, index, callback = %cb.id(), "Invoking callback");

            if let Err(source) = cb.invoke(owner, args) {
                warn!(
                    emitter = self.label(),
                    op = self.op(Operation::Publish),
                    event,
                    index,
                    callback = %cb.id(),
                    error = %source,
                    "Callback failed"
                );
                failures.push(HandlerFailure {
                    index,
                    callback: cb.id(),
                    source,
                });
                if self.config.failure_policy == FailurePolicy::Abort {
                    break;
                }
            }
        }

        if failures.is_empty() {
            Ok(snapshot.len())
        } else {
            Err(ObservableError::Dispatch {
                event: event.to_string(),
                failures,
            })
        }
    }

    /// Owned copy of the event table.
    pub fn events(&self) -> EventMap<O, A> {
        self.table.read().to_map()
    }

    /// Number of callbacks registered for `event`.
    pub fn listener_count(&self, event: &str) -> usize {
        self.table.read().listener_count(event)
    }

    pub fn has_listeners(&self, event: &str) -> bool {
        self.table.read().contains_event(event)
    }

    /// Registered event names, sorted.
    pub fn event_names(&self) -> Vec<String> {
        self.table.read().event_names()
    }

    /// Total number of `emit` calls so far.
    pub fn events_fired(&self) -> u64 {
        self.events_fired.load(Ordering::Relaxed)
    }

    fn ensure_registered(&self, event: &str) -> Result<(), ObservableError> {
        if !is_valid_event_name(event) {
            return Err(ObservableError::InvalidEventName {
                name: event.to_string(),
            });
        }
        if !self.has_listeners(event) {
            return Err(ObservableError::UnknownEvent {
                event: event.to_string(),
            });
        }
        Ok(())
    }
}

impl<O, A> Default for Emitter<O, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O, A> fmt::Debug for Emitter<O, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("label", &self.config.label)
            .field("events", &self.event_names())
            .field("events_fired", &self.events_fired())
            .finish()
    }
}

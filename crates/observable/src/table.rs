//! # Event Table
//!
//! Mapping from event name to the ordered callbacks registered for it.
//!
//! Pure data structure: no locking, no logging. The [`Emitter`](crate::Emitter)
//! owns one table behind a lock and layers both on top.
//!
//! ## Invariants
//!
//! - Callbacks for an event are kept in registration order.
//! - Duplicates are allowed.
//! - No key ever maps to an empty sequence.

use crate::callback::Callback;
use std::collections::HashMap;

/// Owned copy of an event table, as returned by `get_events`.
pub type EventMap<O, A> = HashMap<String, Vec<Callback<O, A>>>;

/// Per-owner registration table.
pub struct EventTable<O, A> {
    events: EventMap<O, A>,
}

impl<O, A> EventTable<O, A> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: HashMap::new(),
        }
    }

    /// Append callbacks to an event, in order. Returns how many were added.
    ///
    /// Nothing is created when `callbacks` is empty.
    pub fn subscribe<I>(&mut self, event: &str, callbacks: I) -> usize
    where
        I: IntoIterator<Item = Callback<O, A>>,
    {
        let mut callbacks = callbacks.into_iter().peekable();
        if callbacks.peek().is_none() {
            return 0;
        }

        let handlers = self.events.entry(event.to_string()).or_default();
        let before = handlers.len();
        handlers.extend(callbacks);
        handlers.len() - before
    }

    /// Remove every occurrence of each supplied callback. Returns how many
    /// entries were removed.
    pub fn unsubscribe<I>(&mut self, event: &str, callbacks: I) -> usize
    where
        I: IntoIterator<Item = Callback<O, A>>,
    {
        let Some(handlers) = self.events.get_mut(event) else {
            return 0;
        };

        let before = handlers.len();
        for cb in callbacks {
            handlers.retain(|existing| *existing != cb);
        }
        let removed = before - handlers.len();

        if handlers.is_empty() {
            self.events.remove(event);
        }
        removed
    }

    /// Drop an event entirely. Returns the callbacks it held.
    pub fn remove_event(&mut self, event: &str) -> Option<Vec<Callback<O, A>>> {
        self.events.remove(event)
    }

    /// Drop every event. Returns how many events were registered.
    pub fn clear(&mut self) -> usize {
        let count = self.events.len();
        self.events.clear();
        count
    }

    /// Copy of the callbacks for an event, in dispatch order.
    pub fn snapshot(&self, event: &str) -> Vec<Callback<O, A>> {
        self.events.get(event).cloned().unwrap_or_default()
    }

    /// Number of callbacks registered for an event.
    pub fn listener_count(&self, event: &str) -> usize {
        self.events.get(event).map_or(0, Vec::len)
    }

    pub fn contains_event(&self, event: &str) -> bool {
        self.events.contains_key(event)
    }

    /// Registered event names, sorted.
    pub fn event_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.events.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Owned copy of the whole table.
    pub fn to_map(&self) -> EventMap<O, A> {
        self.events.clone()
    }
}

impl<O, A> Default for EventTable<O, A> {
    fn default() -> Self {
        Self::new()
    }
}

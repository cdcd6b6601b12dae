//! # Observable Trait
//!
//! The public face of the mixin. Any type that can hand out an
//! [`Emitter`] over itself gets the full API as default methods:
//!
//! | Operation   | Permissive                  | Strict                  |
//! |-------------|-----------------------------|-------------------------|
//! | Subscribe   | `on`, `on_fn`               | `try_on`                |
//! | Unsubscribe | `off`, `off_event`, `off_all` | `try_off`, `try_off_event` |
//! | Publish     | `fire`                      |                         |
//! | Inspect     | `get_events`                |                         |
//!
//! Permissive operations never fail on malformed input and return `&Self` so
//! calls chain. `fire` only fails when a callback does.

use crate::callback::Callback;
use crate::config::Operation;
use crate::emitter::Emitter;
use crate::error::ObservableError;
use crate::table::EventMap;

/// A call expressed as data, routed by configured method name through
/// [`Observable::invoke`].
pub enum Invocation<O, A> {
    /// Append `callbacks` to `event`.
    Subscribe {
        event: String,
        callbacks: Vec<Callback<O, A>>,
    },
    /// With no event, clear everything. With no callbacks, drop the event.
    /// Otherwise remove the listed callbacks from the event.
    Unsubscribe {
        event: Option<String>,
        callbacks: Vec<Callback<O, A>>,
    },
    /// Fire `event` with `args`.
    Publish { event: String, args: A },
}

impl<O, A> Invocation<O, A> {
    /// The operation this call shape belongs to.
    pub fn operation(&self) -> Operation {
        match self {
            Self::Subscribe { .. } => Operation::Subscribe,
            Self::Unsubscribe { .. } => Operation::Unsubscribe,
            Self::Publish { .. } => Operation::Publish,
        }
    }
}

/// Publish/subscribe capability for a type that owns an [`Emitter`].
///
/// # Example
///
/// ```
/// use observable::{args, Args, Emitter, Observable};
///
/// #[derive(Default)]
/// struct Thermostat {
///     events: Emitter<Thermostat>,
/// }
///
/// impl Observable for Thermostat {
///     type Args = Args;
///
///     fn emitter(&self) -> &Emitter<Self> {
///         &self.events
///     }
/// }
///
/// let t = Thermostat::default();
/// t.on_fn("changed", |_t, args| assert_eq!(args[0], 21));
/// t.fire("changed", args![21]).unwrap();
/// ```
pub trait Observable: Sized {
    /// Payload delivered to callbacks.
    type Args;

    /// The emitter holding this value's event table.
    fn emitter(&self) -> &Emitter<Self, Self::Args>;

    /// Subscribe callbacks to `event`, in order.
    fn on<I>(&self, event: &str, callbacks: I) -> &Self
    where
        I: IntoIterator<Item = Callback<Self, Self::Args>>,
    {
        self.emitter().subscribe(event, callbacks);
        self
    }

    /// Subscribe a single closure and return its handle for later removal.
    fn on_fn<F>(&self, event: &str, f: F) -> Callback<Self, Self::Args>
    where
        F: Fn(&Self, &Self::Args) + Send + Sync + 'static,
    {
        let cb = Callback::new(f);
        self.on(event, [cb.clone()]);
        cb
    }

    /// Strict [`on`](Self::on).
    fn try_on<I>(&self, event: &str, callbacks: I) -> Result<&Self, ObservableError>
    where
        I: IntoIterator<Item = Callback<Self, Self::Args>>,
    {
        self.emitter().try_subscribe(event, callbacks)?;
        Ok(self)
    }

    /// Remove every occurrence of each callback from `event`.
    fn off<I>(&self, event: &str, callbacks: I) -> &Self
    where
        I: IntoIterator<Item = Callback<Self, Self::Args>>,
    {
        self.emitter().unsubscribe(event, callbacks);
        self
    }

    /// Strict [`off`](Self::off).
    fn try_off<I>(&self, event: &str, callbacks: I) -> Result<&Self, ObservableError>
    where
        I: IntoIterator<Item = Callback<Self, Self::Args>>,
    {
        self.emitter().try_unsubscribe(event, callbacks)?;
        Ok(self)
    }

    /// Remove `event` and every callback registered for it.
    fn off_event(&self, event: &str) -> &Self {
        self.emitter().remove_event(event);
        self
    }

    /// Strict [`off_event`](Self::off_event).
    fn try_off_event(&self, event: &str) -> Result<&Self, ObservableError> {
        self.emitter().try_remove_event(event)?;
        Ok(self)
    }

    /// Remove every event.
    fn off_all(&self) -> &Self {
        self.emitter().clear();
        self
    }

    /// Invoke the callbacks registered for `event` with `self` as context.
    fn fire(&self, event: &str, args: Self::Args) -> Result<&Self, ObservableError> {
        self.emitter().emit(self, event, &args)?;
        Ok(self)
    }

    /// Copy of the event table.
    fn get_events(&self) -> EventMap<Self, Self::Args> {
        self.emitter().events()
    }

    fn listener_count(&self, event: &str) -> usize {
        self.emitter().listener_count(event)
    }

    /// The operation a configured method name is bound to.
    fn operation(&self, name: &str) -> Option<Operation> {
        self.emitter().config().method_names.resolve(name)
    }

    /// Route a call through its configured method name.
    fn invoke(
        &self,
        name: &str,
        invocation: Invocation<Self, Self::Args>,
    ) -> Result<&Self, ObservableError> {
        let bound = self
            .operation(name)
            .ok_or_else(|| ObservableError::UnknownOperation {
                name: name.to_string(),
            })?;
        if bound != invocation.operation() {
            return Err(ObservableError::OperationMismatch {
                name: name.to_string(),
                bound,
            });
        }

        match invocation {
            Invocation::Subscribe { event, callbacks } => Ok(self.on(&event, callbacks)),
            Invocation::Unsubscribe { event: None, .. } => Ok(self.off_all()),
            Invocation::Unsubscribe {
                event: Some(event),
                callbacks,
            } if callbacks.is_empty() => Ok(self.off_event(&event)),
            Invocation::Unsubscribe {
                event: Some(event),
                callbacks,
            } => Ok(self.off(&event, callbacks)),
            Invocation::Publish { event, args } => self.fire(&event, args),
        }
    }
}

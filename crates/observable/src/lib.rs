//! # Observable - Publish/Subscribe for Any Value
//!
//! Gives a value four operations over a private event table:
//!
//! - **`on`**: subscribe callbacks to a named event
//! - **`off`** (`off`, `off_event`, `off_all`): unsubscribe
//! - **`fire`**: invoke an event's callbacks, in order, with arguments
//! - **`get_events`**: copy of the current registration table
//!
//! ## Attaching
//!
//! ```text
//!   embed                               wrap
//! ┌──────────────────────┐        ┌──────────────────────┐
//! │ struct Player {      │        │ make_observable(t)   │
//! │   events: Emitter<…> │        │   └─► Observed<T>    │
//! │ }                    │        │        ├─ target: T  │
//! │ impl Observable      │        │        └─ Emitter    │
//! └──────────┬───────────┘        └──────────┬───────────┘
//!            └──────────────┬────────────────┘
//!                           ▼
//!               ┌────────────────────────┐
//!               │ Emitter                │
//!               │  RwLock<EventTable>    │
//!               │  "e" ─► [cb1, cb2, …]  │
//!               └────────────────────────┘
//! ```
//!
//! Every owner has its own table. Dispatch is synchronous, runs on the calling
//! thread, and iterates a snapshot, so callbacks may freely subscribe or
//! unsubscribe on the owner that is firing them.
//!
//! ## Example
//!
//! ```
//! use observable::{args, make_observable, Observable};
//!
//! let t = make_observable(String::from("target"));
//! let f1 = t.on_fn("ping", |_, args| assert_eq!(args.len(), 2));
//! let f2 = t.on_fn("ping", |me, _| assert_eq!(me.as_str(), "target"));
//!
//! t.fire("ping", args![1, 2]).unwrap();
//! assert_eq!(t.get_events()["ping"], vec![f1.clone(), f2.clone()]);
//!
//! t.off("ping", [f1]);
//! assert_eq!(t.get_events()["ping"], vec![f2]);
//! ```
//!
//! ## Errors
//!
//! Malformed input to the permissive operations is ignored and logged. The
//! `try_*` variants report it as [`ObservableError`]. A failing callback is
//! always surfaced from `fire`.

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod callback;
pub mod config;
pub mod emitter;
pub mod error;
pub mod observable;
pub mod observed;
pub mod table;

// Re-export main types
pub use callback::{Callback, CallbackId, HandlerResult};
pub use config::{FailurePolicy, MethodNames, ObservableConfig, ObservableConfigBuilder, Operation};
pub use emitter::{is_valid_event_name, Emitter};
pub use error::{HandlerError, HandlerFailure, ObservableError};
pub use observable::{Invocation, Observable};
pub use observed::{event_bus, make_observable, make_observable_with, EventBus, Observed};
pub use table::{EventMap, EventTable};

#[doc(hidden)]
pub use serde_json as __serde_json;

/// Default positional payload: one JSON value per argument.
pub type Args = Vec<serde_json::Value>;

/// Name of the inspector operation. Not renameable.
pub const INSPECT_NAME: &str = "getEvents";

/// Label used in log records when none is configured.
pub const DEFAULT_LABEL: &str = "observable";

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build an [`Args`] payload from positional values.
///
/// ```
/// let args = observable::args!["Fred", 40, true];
/// assert_eq!(args[0], "Fred");
/// assert_eq!(args[1], 40);
/// assert_eq!(observable::args![].len(), 0);
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        {
            let args: $crate::Args = ::std::vec![$($crate::__serde_json::json!($arg)),*];
            args
        }
    };
}

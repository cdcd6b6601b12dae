//! # Observable Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── support.rs        # Tracing setup and call recorders
//! └── integration/      # End-to-end behaviour of the public API
//!     ├── scenarios.rs  # Subscribe / unsubscribe / fire / inspect flows
//!     ├── embedding.rs  # Types that embed an Emitter
//!     ├── reentrancy.rs # Callbacks mutating their own owner mid-dispatch
//!     └── concurrency.rs# Shared emitters across tokio tasks
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p observable-tests
//!
//! # By category
//! cargo test -p observable-tests integration::reentrancy
//!
//! # Benchmarks
//! cargo bench -p observable-tests
//! ```

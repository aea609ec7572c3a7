#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

//! Process-wide cleanup-hook registry.
//!
//! Independent parts of a program register named zero-argument callbacks
//! that should run when the process shuts down cleanly. [`Registry::run_all`]
//! sweeps them in no particular order, containing panics per hook, and
//! [`exit`] wraps `std::process::exit` so cleanup always precedes an
//! intentional termination.
//!
//! ```no_run
//! cleanup::register("db", || { /* close connections */ });
//! cleanup::register("log", || { /* flush buffers */ });
//!
//! // ... at the intentional-exit call site:
//! cleanup::exit(0);
//! ```
//!
//! Nothing here intercepts termination on its own: signal handling and
//! routing exit paths through [`exit`] (or [`run_all`]) are the hosting
//! program's responsibility.

pub mod global;
pub mod registry;

pub use global::{exit, global, register, run_all, unregister};
pub use registry::Registry;

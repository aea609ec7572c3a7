//! The process-wide registry instance.
//!
//! Components that cannot thread a [`Registry`] reference through their
//! constructors register against this instance instead. It is created on
//! first use and never torn down; the process discards it on exit.

use std::sync::OnceLock;

use crate::registry::Registry;

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry, created on first use.
pub fn global() -> &'static Registry {
    GLOBAL.get_or_init(Registry::new)
}

/// Register `hook` under `name` on the process-wide registry.
pub fn register<F>(name: impl Into<String>, hook: F)
where
    F: Fn() + Send + 'static,
{
    global().register(name, hook);
}

/// Remove `name` from the process-wide registry.
pub fn unregister(name: &str) {
    global().unregister(name);
}

/// Run every hook on the process-wide registry.
pub fn run_all() {
    global().run_all();
}

/// Run every hook on the process-wide registry, then terminate the process
/// with `code`. Drop-in replacement for `std::process::exit` at
/// intentional-exit call sites.
pub fn exit(code: i32) -> ! {
    global().exit(code)
}

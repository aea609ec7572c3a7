use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};

use parking_lot::Mutex;
use tracing::{debug, error};

/// A registered cleanup callback. May run any number of times, so it must
/// not assume it is called at most once.
type Hook = Box<dyn Fn() + Send>;

/// Named cleanup hooks behind a single mutex.
///
/// All operations are serialized against each other. [`run_all`] holds the
/// lock for the entire sweep, so the hook set is frozen while it runs; the
/// flip side is that a slow or stuck hook blocks every other registry call
/// until it returns. Programs that want one well-known instance should go
/// through [`crate::global`] instead of constructing their own.
///
/// [`run_all`]: Registry::run_all
pub struct Registry {
    hooks: Mutex<HashMap<String, Hook>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            hooks: Mutex::new(HashMap::new()),
        }
    }

    /// Register `hook` under `name`, replacing any hook already registered
    /// under that name. Last write wins; the replacement is silent.
    ///
    /// Any string is a valid name, including the empty string.
    pub fn register<F>(&self, name: impl Into<String>, hook: F)
    where
        F: Fn() + Send + 'static,
    {
        let name = name.into();
        debug!(hook = name.as_str(), "registered cleanup hook");
        self.hooks.lock().insert(name, Box::new(hook));
    }

    /// Remove the hook registered under `name`. No-op when there isn't one.
    pub fn unregister(&self, name: &str) {
        self.hooks.lock().remove(name);
    }

    /// Run every registered hook once, in no particular order.
    ///
    /// A panicking hook is logged and skipped; it never stops the sweep and
    /// never reaches the caller. Hooks stay registered afterwards, so a
    /// second call runs all of them again.
    pub fn run_all(&self) {
        let hooks = self.hooks.lock();
        debug!(hooks = hooks.len(), "running cleanup hooks");
        for (name, hook) in hooks.iter() {
            if catch_unwind(AssertUnwindSafe(|| hook())).is_err() {
                error!(hook = name.as_str(), "cleanup hook panicked; continuing");
            }
        }
    }

    /// Run every registered hook, then terminate the process with `code`.
    ///
    /// Only explicit calls come through here. Panics, signals, and raw
    /// `std::process::exit` calls elsewhere in the program bypass cleanup
    /// entirely; routing intentional-exit sites through this method is the
    /// caller's job.
    pub fn exit(&self, code: i32) -> ! {
        self.run_all();
        std::process::exit(code)
    }

    /// Number of registered hooks.
    pub fn len(&self) -> usize {
        self.hooks.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.lock().is_empty()
    }

    /// Whether a hook is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.hooks.lock().contains_key(name)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

//! Shared environment guards for integration tests.

use std::env;
use std::sync::{Mutex, MutexGuard, OnceLock};

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Guard that applies scoped environment variable updates and restores the
/// previous values on drop.
pub struct EnvVarGuard {
    previous: Vec<(String, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
    /// Applies `changes`: `Some` sets a variable, `None` removes it.
    pub fn apply(changes: &[(&str, Option<&str>)]) -> Self {
        let lock = env_lock();
        let previous = changes
            .iter()
            .map(|(key, value)| {
                let prior = env::var(key).ok();
                unsafe {
                    // SAFETY: the global mutex serializes environment mutations in tests.
                    match value {
                        Some(new_value) => env::set_var(key, new_value),
                        None => env::remove_var(key),
                    }
                }
                ((*key).to_owned(), prior)
            })
            .collect();

        Self {
            previous,
            _lock: lock,
        }
    }

    /// Removes every variable in `keys`.
    pub fn cleared(keys: &[&str]) -> Self {
        let changes: Vec<(&str, Option<&str>)> = keys.iter().map(|key| (*key, None)).collect();
        Self::apply(&changes)
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..).rev() {
            unsafe {
                // SAFETY: the global mutex serializes environment mutations in tests.
                match value {
                    Some(previous) => env::set_var(&key, previous),
                    None => env::remove_var(&key),
                }
            }
        }
    }
}

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

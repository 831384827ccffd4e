//! In-memory mapping from user ID to their chosen timezone identifier.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::utils::logging::log_registry_operation;

/// Volatile, process-local store of user timezone choices.
///
/// A single lock covers the whole map. Each `save` or `lookup` is atomic on
/// its own; nothing is atomic across calls. Callers must validate the
/// identifier before saving; the registry stores whatever it is given.
#[derive(Debug, Default)]
pub struct UserTimezoneRegistry {
    entries: Mutex<HashMap<String, String>>,
}

impl UserTimezoneRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the identifier stored for `user_id`.
    pub fn save(&self, user_id: &str, identifier: &str) {
        let previous = self
            .lock()
            .insert(user_id.to_string(), identifier.to_string());
        let details = match previous {
            Some(old) => format!("user {} {} -> {}", user_id, old, identifier),
            None => format!("user {} -> {}", user_id, identifier),
        };
        log_registry_operation("SAVE", Some(&details));
    }

    /// The identifier saved for `user_id`, if any.
    pub fn lookup(&self, user_id: &str) -> Option<String> {
        let found = self.lock().get(user_id).cloned();
        log_registry_operation(
            "LOOKUP",
            Some(&format!("user {} found={}", user_id, found.is_some())),
        );
        found
    }

    /// Number of users with a saved timezone.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when no user has saved a timezone.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // The map only holds owned strings, so a panic while locked cannot leave
    // an entry half-written.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

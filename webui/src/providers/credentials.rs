//! Local credential storage.

use std::sync::{Mutex, PoisonError};

/// Locally persisted credentials (the access token kept by the page).
pub trait CredentialStore: Send + Sync {
    /// Drop every stored credential.
    fn clear(&self);
}

/// Credential store held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    token: Mutex<Option<String>>,
}

impl InMemoryCredentialStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            token: Mutex::new(None),
        }
    }

    /// Store an access token, replacing any previous one.
    pub fn set(&self, token: impl Into<String>) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    /// The stored access token.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn clear(&self) {
        let previous = self.token.lock().unwrap_or_else(PoisonError::into_inner).take();
        tracing::debug!(had_token = previous.is_some(), "Cleared local credentials");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_drops_the_token() {
        let store = InMemoryCredentialStore::new();
        store.set("secret");
        assert_eq!(store.get().as_deref(), Some("secret"));

        store.clear();
        assert!(store.get().is_none());

        // Clearing twice is harmless
        store.clear();
        assert!(store.get().is_none());
    }
}

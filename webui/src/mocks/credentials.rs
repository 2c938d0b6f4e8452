//! Mock credential store.

use crate::providers::CredentialStore;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock credential store that only counts `clear` calls.
#[derive(Debug, Clone, Default)]
pub struct MockCredentialStore {
    clears: Arc<AtomicUsize>,
}

impl MockCredentialStore {
    /// Create a new mock credential store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `clear` calls so far.
    #[must_use]
    pub fn clears(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

impl CredentialStore for MockCredentialStore {
    fn clear(&self) {
        self.clears.fetch_add(1, Ordering::SeqCst);
    }
}

//! Mock collaborators for testing.
//!
//! In-memory, scriptable implementations of every provider trait. Clones
//! share their script and call records, so a test keeps one clone for
//! assertions and hands another to the environment.

use std::sync::{Mutex, MutexGuard, PoisonError};

pub mod account;
pub mod credentials;
pub mod list;

pub use account::MockAccountApi;
pub use credentials::MockCredentialStore;
pub use list::MockListApi;

use crate::config::ConsoleConfig;
use crate::environment::ConsoleEnvironment;
use crate::state::{Applications, Devices, Users};
use std::sync::Arc;

// A panicking test thread must not hide the records from the others.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Every mock collaborator of the console, ready to build an environment.
#[derive(Clone, Default)]
pub struct MockConsole {
    /// Console identity surface
    pub console_account: MockAccountApi,
    /// Public OAuth identity surface
    pub oauth_account: MockAccountApi,
    /// Devices listing
    pub devices: MockListApi<Devices>,
    /// Applications listing
    pub applications: MockListApi<Applications>,
    /// Users listing
    pub users: MockListApi<Users>,
    /// Local credentials
    pub credentials: MockCredentialStore,
}

impl MockConsole {
    /// Fresh mocks: nobody logged in, every listing answers an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an environment backed by clones of these mocks.
    #[must_use]
    pub fn environment(&self, config: ConsoleConfig) -> ConsoleEnvironment {
        ConsoleEnvironment {
            config,
            console_account: Arc::new(self.console_account.clone()),
            oauth_account: Arc::new(self.oauth_account.clone()),
            devices: Arc::new(self.devices.clone()),
            applications: Arc::new(self.applications.clone()),
            users: Arc::new(self.users.clone()),
            credentials: Arc::new(self.credentials.clone()),
        }
    }
}

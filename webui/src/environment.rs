//! Console environment.
//!
//! Dependencies handed to the logic units. Reducers receive it too but never
//! read it.

use crate::config::{ConsoleConfig, DeploymentMode};
use crate::providers::{AccountApi, CredentialStore, ListApi};
use crate::state::{Applications, Devices, Users};
use std::fmt;
use std::sync::Arc;

/// Console environment.
///
/// Cloning is cheap: every collaborator sits behind an `Arc`.
#[derive(Clone)]
pub struct ConsoleEnvironment {
    /// Deployment configuration
    pub config: ConsoleConfig,

    /// Identity surface of the console deployment
    pub console_account: Arc<dyn AccountApi>,

    /// Identity surface of the public deployment (OAuth)
    pub oauth_account: Arc<dyn AccountApi>,

    /// Devices listing
    pub devices: Arc<dyn ListApi<Devices>>,

    /// Applications listing
    pub applications: Arc<dyn ListApi<Applications>>,

    /// Users listing
    pub users: Arc<dyn ListApi<Users>>,

    /// Local credentials, cleared on logout
    pub credentials: Arc<dyn CredentialStore>,
}

impl ConsoleEnvironment {
    /// Identity surface for the configured deployment mode.
    #[must_use]
    pub fn account(&self) -> &Arc<dyn AccountApi> {
        match self.config.mode {
            DeploymentMode::Console => &self.console_account,
            DeploymentMode::Public => &self.oauth_account,
        }
    }
}

impl fmt::Debug for ConsoleEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleEnvironment")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

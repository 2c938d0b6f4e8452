//! Console configuration.
//!
//! The page receives an `APP_CONFIG` JSON document; its `console` flag decides
//! whether the session and logout calls go to the console backend or to the
//! public OAuth surface.
//!
//! # Example
//!
//! ```
//! use console_webui::config::{ConsoleConfig, DeploymentMode};
//!
//! let config = ConsoleConfig::from_json(r#"{"console": false, "page_size": 50}"#)?;
//! assert_eq!(config.mode, DeploymentMode::Public);
//! assert_eq!(config.page_size, 50);
//! # Ok::<(), console_webui::error::ConfigError>(())
//! ```

use crate::error::ConfigError;
use console_store_core::resource::Sequencing;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variable holding the full `APP_CONFIG` JSON document.
pub const APP_CONFIG_VAR: &str = "CONSOLE_APP_CONFIG";

/// Environment variable holding just the deployment mode.
pub const MODE_VAR: &str = "CONSOLE_MODE";

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Which backend surface the session and logout calls use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentMode {
    /// Served by the console: console identity and auth endpoints
    #[default]
    Console,
    /// Served publicly: OAuth identity and logout endpoints
    Public,
}

impl DeploymentMode {
    /// Mode from the `console` flag of `APP_CONFIG`.
    #[must_use]
    pub const fn from_console_flag(console: bool) -> Self {
        if console {
            Self::Console
        } else {
            Self::Public
        }
    }

    /// Check if this is the console deployment
    #[must_use]
    pub const fn is_console(self) -> bool {
        matches!(self, Self::Console)
    }
}

impl FromStr for DeploymentMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "console" => Ok(Self::Console),
            "public" | "oauth" => Ok(Self::Public),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Console => write!(f, "console"),
            Self::Public => write!(f, "public"),
        }
    }
}

/// Shape of the `APP_CONFIG` document.
#[derive(Debug, Deserialize)]
struct AppConfigDocument {
    console: bool,
    #[serde(default = "default_page_size")]
    page_size: u32,
    #[serde(default)]
    sequencing: Sequencing,
}

const fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Runtime configuration handed to logic units through the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Backend surface for session and logout calls
    pub mode: DeploymentMode,
    /// Items requested per page by list queries
    pub page_size: u32,
    /// How collections treat answers to superseded requests
    pub sequencing: Sequencing,
}

impl ConsoleConfig {
    /// Configuration for `mode` with default paging and sequencing.
    #[must_use]
    pub const fn new(mode: DeploymentMode) -> Self {
        Self {
            mode,
            page_size: DEFAULT_PAGE_SIZE,
            sequencing: Sequencing::Latest,
        }
    }

    /// Set the page size
    #[must_use]
    pub const fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the sequencing policy
    #[must_use]
    pub const fn with_sequencing(mut self, sequencing: Sequencing) -> Self {
        self.sequencing = sequencing;
        self
    }

    /// Parse an `APP_CONFIG` JSON document.
    ///
    /// # Errors
    ///
    /// Returns error if the document does not parse or fails validation.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let document: AppConfigDocument = serde_json::from_str(document)?;
        let config = Self {
            mode: DeploymentMode::from_console_flag(document.console),
            page_size: document.page_size,
            sequencing: document.sequencing,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from process environment variables.
    ///
    /// `CONSOLE_APP_CONFIG` (a full JSON document) wins over `CONSOLE_MODE`;
    /// with neither set the console deployment is assumed.
    ///
    /// # Errors
    ///
    /// Returns error if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns error if a variable is present but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(document) = lookup(APP_CONFIG_VAR) {
            return Self::from_json(&document);
        }

        let mode = match lookup(MODE_VAR) {
            Some(mode) => mode.parse()?,
            None => DeploymentMode::default(),
        };
        Ok(Self::new(mode))
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns error if configuration is invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Validation("page_size must be > 0".to_string()));
        }
        Ok(())
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::new(DeploymentMode::Console)
    }
}

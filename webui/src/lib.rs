//! # Console Web UI State
//!
//! State, actions, reducers and logic units of the device-management console.
//!
//! ## Slices
//!
//! | Slice          | State                            | Logic                          |
//! |----------------|----------------------------------|--------------------------------|
//! | `user`         | [`SessionState`]                 | session lookup, logout         |
//! | `devices`      | `ResourceState<Devices>`         | list, search                   |
//! | `applications` | `ResourceState<Applications>`    | list, search                   |
//! | `users`        | `ResourceState<Users>`           | list, search                   |
//!
//! ## Example
//!
//! ```
//! use console_webui::{console_store, AppAction, ConsoleConfig};
//! use console_webui::mocks::MockConsole;
//! use console_webui::state::User;
//! use console_webui::mocks::MockAccountApi;
//!
//! # tokio_test::block_on(async {
//! let mocks = MockConsole {
//!     console_account: MockAccountApi::authenticated(User::new("admin")),
//!     ..MockConsole::new()
//! };
//! let store = console_store(mocks.environment(ConsoleConfig::default()));
//!
//! let mut handle = store.send(AppAction::get_session()).await?;
//! handle.wait().await;
//!
//! let user = store.state(|s| s.user.user.clone()).await;
//! assert_eq!(user, Some(User::new("admin")));
//! # Ok::<(), console_store_runtime::StoreError>(())
//! # }).unwrap();
//! ```

pub mod actions;
pub mod config;
pub mod environment;
pub mod error;
pub mod logic;
pub mod providers;
pub mod reducers;
pub mod state;

#[cfg(feature = "test-utils")]
pub mod mocks;

pub use actions::{AppAction, SessionAction};
pub use config::{ConsoleConfig, DeploymentMode};
pub use environment::ConsoleEnvironment;
pub use error::{ApiError, ConfigError};
pub use reducers::{root_reducer, RootReducer};
pub use state::{AppState, SessionState};

use console_store_runtime::Store;

/// The console store.
pub type ConsoleStore = Store<AppState, AppAction, ConsoleEnvironment, RootReducer>;

/// Create a console store with default (unfetched) state.
///
/// The root reducer is built from the environment's configuration.
#[must_use]
pub fn console_store(env: ConsoleEnvironment) -> ConsoleStore {
    let reducer = root_reducer(&env.config);
    Store::new(AppState::default(), reducer, env)
}

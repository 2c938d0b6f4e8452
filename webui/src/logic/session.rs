//! Session lookup and logout logic.

use crate::actions::{SessionAction, SessionKind};
use crate::environment::ConsoleEnvironment;
use console_store_core::async_effect;
use console_store_core::effect::Effect;
use console_store_core::logic::Logic;
use console_store_runtime::metrics::LogicMetrics;
use std::sync::Arc;

/// Looks up the current identity on `GET_SESSION`.
///
/// The identity surface follows the deployment mode. A rejected lookup is
/// reported as `GET_SESSION_FAILURE` without the error; the page treats that
/// as "not logged in".
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionFetchLogic;

impl Logic<SessionAction, ConsoleEnvironment> for SessionFetchLogic {
    fn name(&self) -> &'static str {
        "session_fetch"
    }

    fn trigger(&self) -> SessionKind {
        SessionKind::GetSession
    }

    fn process(&self, _action: SessionAction, env: &ConsoleEnvironment) -> Effect<SessionAction> {
        let name = self.name();
        let mode = env.config.mode;
        let account = Arc::clone(env.account());
        LogicMetrics::record_invocation(name);

        async_effect! {
            match account.me().await {
                Ok(user) => {
                    tracing::debug!(%mode, user = %user.user_id, "Session found");
                    Some(SessionAction::GetSessionSuccess(user))
                },
                Err(error) => {
                    LogicMetrics::record_failure(name);
                    tracing::warn!(%mode, %error, "Session lookup rejected");
                    Some(SessionAction::GetSessionFailure)
                },
            }
        }
    }
}

/// Ends the session on `LOGOUT`.
///
/// Local credentials are cleared only once the backend confirmed the logout,
/// and before `LOGOUT_SUCCESS` is produced.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogoutLogic;

impl Logic<SessionAction, ConsoleEnvironment> for LogoutLogic {
    fn name(&self) -> &'static str {
        "logout"
    }

    fn trigger(&self) -> SessionKind {
        SessionKind::Logout
    }

    fn process(&self, _action: SessionAction, env: &ConsoleEnvironment) -> Effect<SessionAction> {
        let name = self.name();
        let mode = env.config.mode;
        let account = Arc::clone(env.account());
        let credentials = Arc::clone(&env.credentials);
        LogicMetrics::record_invocation(name);

        async_effect! {
            match account.logout().await {
                Ok(()) => {
                    credentials.clear();
                    tracing::info!(%mode, "Logged out");
                    Some(SessionAction::LogoutSuccess)
                },
                Err(error) => {
                    LogicMetrics::record_failure(name);
                    tracing::warn!(%mode, %error, "Logout rejected");
                    Some(SessionAction::LogoutFailure)
                },
            }
        }
    }
}

//! Identity surface.

use super::ApiFuture;
use crate::state::User;

/// Identity lookup and logout.
///
/// Two implementations exist per deployment: the console's own endpoints and
/// the public OAuth endpoints. [`crate::environment::ConsoleEnvironment::account`]
/// picks one from the configured mode.
pub trait AccountApi: Send + Sync {
    /// Fetch the currently authenticated user.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Nobody is logged in → `ApiError::Unauthenticated`
    /// - The request fails in transport
    fn me(&self) -> ApiFuture<'_, User>;

    /// End the session on the backend.
    ///
    /// # Errors
    ///
    /// Returns error if the backend rejects the logout or the request fails.
    fn logout(&self) -> ApiFuture<'_, ()>;
}

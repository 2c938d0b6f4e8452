//! Collection listing.

use super::ApiFuture;
use console_store_core::resource::{Page, Resource};

/// Paginated list call for collection `R`.
///
/// A query carrying search text is a search; the same call serves both.
pub trait ListApi<R: Resource>: Send + Sync {
    /// Fetch one page of `R`.
    ///
    /// # Errors
    ///
    /// Returns error if the backend rejects the query or the request fails.
    fn list(&self, query: R::Query) -> ApiFuture<'_, Page<R::Item>>;
}

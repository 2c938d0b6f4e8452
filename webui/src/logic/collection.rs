//! Collection fetch logic.

use crate::environment::ConsoleEnvironment;
use crate::error::ApiError;
use crate::providers::ListApi;
use console_store_core::async_effect;
use console_store_core::effect::Effect;
use console_store_core::logic::Logic;
use console_store_core::resource::{CollectionKind, Resource, ResourceAction, ResourceKind};
use console_store_runtime::metrics::LogicMetrics;
use std::fmt;
use std::sync::Arc;

/// Selects the listing of collection `R` from the environment.
pub type ListSelector<R> = fn(&ConsoleEnvironment) -> &Arc<dyn ListApi<R>>;

/// Fetches a page of collection `R` on a list or search request.
///
/// One unit serves one trigger: build one with [`FetchListLogic::list`] and
/// one with [`FetchListLogic::search`] per collection. The terminal action
/// echoes the request id.
pub struct FetchListLogic<R: Resource> {
    name: &'static str,
    trigger: ResourceKind,
    select: ListSelector<R>,
}

impl<R> FetchListLogic<R>
where
    R: Resource<Error = ApiError>,
{
    /// Unit triggered by `GET_<NAME>_LIST`.
    #[must_use]
    pub const fn list(name: &'static str, select: ListSelector<R>) -> Self {
        Self {
            name,
            trigger: ResourceKind::Request,
            select,
        }
    }

    /// Unit triggered by `SEARCH_<NAME>_LIST`.
    #[must_use]
    pub const fn search(name: &'static str, select: ListSelector<R>) -> Self {
        Self {
            name,
            trigger: ResourceKind::SearchRequest,
            select,
        }
    }
}

impl<R: Resource> fmt::Debug for FetchListLogic<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchListLogic")
            .field("name", &self.name)
            .field("trigger", &CollectionKind::<R>::new(self.trigger))
            .finish_non_exhaustive()
    }
}

impl<R> Logic<ResourceAction<R>, ConsoleEnvironment> for FetchListLogic<R>
where
    R: Resource<Error = ApiError>,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn trigger(&self) -> CollectionKind<R> {
        CollectionKind::new(self.trigger)
    }

    fn process(
        &self,
        action: ResourceAction<R>,
        env: &ConsoleEnvironment,
    ) -> Effect<ResourceAction<R>> {
        let (ResourceAction::Request { id, query } | ResourceAction::SearchRequest { id, query }) =
            action
        else {
            tracing::debug!(logic = self.name, "Ignoring terminal action");
            return Effect::None;
        };

        let name = self.name;
        let api = Arc::clone((self.select)(env));
        LogicMetrics::record_invocation(name);
        tracing::debug!(logic = name, resource = R::NAME, request = %id, ?query, "Fetching page");

        async_effect! {
            match api.list(query).await {
                Ok(page) => {
                    tracing::debug!(
                        resource = R::NAME,
                        request = %id,
                        items = page.items.len(),
                        total = page.total_count,
                        "Page fetched"
                    );
                    Some(ResourceAction::Success { id, page })
                },
                Err(error) => {
                    LogicMetrics::record_failure(name);
                    tracing::warn!(resource = R::NAME, request = %id, %error, "List request rejected");
                    Some(ResourceAction::Failure { id, error })
                },
            }
        }
    }
}

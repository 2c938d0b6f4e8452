//! Generic fetchable-collection state machine
//!
//! Every paginated collection in the console (devices, applications, users)
//! shares the same shape: a `fetching` flag, a `fetching_search` flag, an
//! optional error, the current page of items and the total count on the
//! server. [`ResourceReducer`] drives that state from the
//! request/search/success/failure action triad in [`ResourceAction`].
//!
//! # Transitions
//!
//! | Action         | Effect on state                                                    |
//! |----------------|--------------------------------------------------------------------|
//! | `Request`      | `fetching = true`                                                  |
//! | `SearchRequest`| `fetching = true`, `fetching_search = true`                        |
//! | `Success`      | flags cleared, error cleared, items and count replaced             |
//! | `Failure`      | flags cleared, error set, items emptied, count zeroed              |
//!
//! # Request sequencing
//!
//! Two requests for the same collection may resolve out of order. Under
//! [`Sequencing::Latest`] each terminal action must echo the [`RequestId`] of
//! the most recent request or it is discarded as stale. [`Sequencing::Unordered`]
//! applies every terminal action in arrival order.

use crate::action::Action;
use crate::effect::Effect;
use crate::reducer::Reducer;
use crate::{smallvec, SmallVec};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

/// A fetchable collection.
///
/// Implemented by zero-sized marker types; the associated types fix the item,
/// query and error shapes for one collection.
pub trait Resource: Send + Sync + 'static {
    /// Upper-case collection name used in action kinds (`DEVICES`)
    const NAME: &'static str;

    /// One element of the collection
    type Item: Clone + fmt::Debug + Send + Sync + 'static;

    /// Parameters of a list or search request
    type Query: Clone + fmt::Debug + Send + Sync + 'static;

    /// Error marker stored in state on failure
    type Error: Clone + fmt::Debug + Send + Sync + 'static;
}

static NEXT_REQUEST_ID: AtomicU64 = AtomicU64::new(1);

/// Identifier of one list or search request.
///
/// Allocated by the dispatch site and echoed by the terminal action that
/// answers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestId(u64);

impl RequestId {
    /// Allocate the next process-wide request id.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Wrap a raw id (deterministic tests, replay).
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req-{}", self.0)
    }
}

/// One page of a collection as returned by a list call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page, in server order
    pub items: Vec<T>,
    /// Total number of items matching the query on the server
    pub total_count: u64,
}

impl<T> Page<T> {
    /// Create a page.
    #[must_use]
    pub const fn new(items: Vec<T>, total_count: u64) -> Self {
        Self { items, total_count }
    }
}

/// Actions understood by a [`ResourceReducer`].
pub enum ResourceAction<R: Resource> {
    /// Fetch a page of the collection
    Request {
        /// Id echoed by the terminal action
        id: RequestId,
        /// List parameters
        query: R::Query,
    },
    /// Fetch a page filtered by a search
    SearchRequest {
        /// Id echoed by the terminal action
        id: RequestId,
        /// Search parameters
        query: R::Query,
    },
    /// The request identified by `id` returned a page
    Success {
        /// Id of the answered request
        id: RequestId,
        /// Returned page
        page: Page<R::Item>,
    },
    /// The request identified by `id` was rejected
    Failure {
        /// Id of the answered request
        id: RequestId,
        /// Rejection marker
        error: R::Error,
    },
}

impl<R: Resource> Clone for ResourceAction<R> {
    fn clone(&self) -> Self {
        match self {
            Self::Request { id, query } => Self::Request { id: *id, query: query.clone() },
            Self::SearchRequest { id, query } => {
                Self::SearchRequest { id: *id, query: query.clone() }
            },
            Self::Success { id, page } => Self::Success { id: *id, page: page.clone() },
            Self::Failure { id, error } => Self::Failure { id: *id, error: error.clone() },
        }
    }
}

impl<R: Resource> fmt::Debug for ResourceAction<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request { id, query } => f
                .debug_struct("Request")
                .field("id", id)
                .field("query", query)
                .finish(),
            Self::SearchRequest { id, query } => f
                .debug_struct("SearchRequest")
                .field("id", id)
                .field("query", query)
                .finish(),
            Self::Success { id, page } => f
                .debug_struct("Success")
                .field("id", id)
                .field("items", &page.items.len())
                .field("total_count", &page.total_count)
                .finish(),
            Self::Failure { id, error } => f
                .debug_struct("Failure")
                .field("id", id)
                .field("error", error)
                .finish(),
        }
    }
}

impl<R: Resource> ResourceAction<R> {
    /// Build a request with a freshly allocated id.
    #[must_use]
    pub fn request(query: R::Query) -> Self {
        Self::Request { id: RequestId::next(), query }
    }

    /// Build a search request with a freshly allocated id.
    #[must_use]
    pub fn search(query: R::Query) -> Self {
        Self::SearchRequest { id: RequestId::next(), query }
    }

    /// The request id carried by this action.
    #[must_use]
    pub const fn id(&self) -> RequestId {
        match self {
            Self::Request { id, .. }
            | Self::SearchRequest { id, .. }
            | Self::Success { id, .. }
            | Self::Failure { id, .. } => *id,
        }
    }
}

/// Kind tags for [`ResourceAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// `GET_<NAME>_LIST`
    Request,
    /// `SEARCH_<NAME>_LIST`
    SearchRequest,
    /// `GET_<NAME>_LIST_SUCCESS`
    Success,
    /// `GET_<NAME>_LIST_FAILURE`
    Failure,
}

impl ResourceKind {
    /// Write the wire identifier for this kind on collection `name`.
    ///
    /// # Errors
    ///
    /// Propagates formatter errors.
    pub fn write_wire_name(self, name: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request => write!(f, "GET_{name}_LIST"),
            Self::SearchRequest => write!(f, "SEARCH_{name}_LIST"),
            Self::Success => write!(f, "GET_{name}_LIST_SUCCESS"),
            Self::Failure => write!(f, "GET_{name}_LIST_FAILURE"),
        }
    }
}

/// A [`ResourceKind`] bound to its collection, displayable as the wire name.
pub struct CollectionKind<R: Resource> {
    kind: ResourceKind,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> CollectionKind<R> {
    /// Bind a kind to collection `R`.
    #[must_use]
    pub const fn new(kind: ResourceKind) -> Self {
        Self { kind, _resource: PhantomData }
    }

    /// The unbound kind.
    #[must_use]
    pub const fn kind(self) -> ResourceKind {
        self.kind
    }
}

impl<R: Resource> Clone for CollectionKind<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for CollectionKind<R> {}

impl<R: Resource> PartialEq for CollectionKind<R> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl<R: Resource> Eq for CollectionKind<R> {}

impl<R: Resource> fmt::Debug for CollectionKind<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<R: Resource> fmt::Display for CollectionKind<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.write_wire_name(R::NAME, f)
    }
}

impl<R: Resource> Action for ResourceAction<R> {
    type Kind = CollectionKind<R>;

    fn kind(&self) -> CollectionKind<R> {
        CollectionKind::new(match self {
            Self::Request { .. } => ResourceKind::Request,
            Self::SearchRequest { .. } => ResourceKind::SearchRequest,
            Self::Success { .. } => ResourceKind::Success,
            Self::Failure { .. } => ResourceKind::Failure,
        })
    }
}

/// Policy for terminal actions that answer a superseded request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sequencing {
    /// Only the terminal action of the most recent request is applied
    #[default]
    Latest,
    /// Every terminal action is applied in arrival order
    Unordered,
}

/// State of one fetchable collection.
pub struct ResourceState<R: Resource> {
    /// A list or search request is in flight
    pub fetching: bool,
    /// The in-flight request is a search
    pub fetching_search: bool,
    /// Marker of the last failure, cleared by the next success
    pub error: Option<R::Error>,
    /// Current page of items
    pub items: Vec<R::Item>,
    /// Total number of items on the server
    pub total_count: u64,
    pending: Option<RequestId>,
    latest: Option<RequestId>,
}

impl<R: Resource> ResourceState<R> {
    /// Id of the request the collection is waiting for, if any.
    #[must_use]
    pub const fn pending_request(&self) -> Option<RequestId> {
        self.pending
    }

    /// Id of the most recently issued request, answered or not.
    #[must_use]
    pub const fn latest_request(&self) -> Option<RequestId> {
        self.latest
    }

    /// Whether the last terminal action was a failure.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

// The console shows a spinner until the first page arrives, so a fresh
// collection starts out fetching.
impl<R: Resource> Default for ResourceState<R> {
    fn default() -> Self {
        Self {
            fetching: true,
            fetching_search: false,
            error: None,
            items: Vec::new(),
            total_count: 0,
            pending: None,
            latest: None,
        }
    }
}

impl<R: Resource> Clone for ResourceState<R> {
    fn clone(&self) -> Self {
        Self {
            fetching: self.fetching,
            fetching_search: self.fetching_search,
            error: self.error.clone(),
            items: self.items.clone(),
            total_count: self.total_count,
            pending: self.pending,
            latest: self.latest,
        }
    }
}

impl<R: Resource> fmt::Debug for ResourceState<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceState")
            .field("resource", &R::NAME)
            .field("fetching", &self.fetching)
            .field("fetching_search", &self.fetching_search)
            .field("error", &self.error)
            .field("items", &self.items)
            .field("total_count", &self.total_count)
            .field("pending", &self.pending)
            .field("latest", &self.latest)
            .finish()
    }
}

impl<R: Resource> PartialEq for ResourceState<R>
where
    R::Item: PartialEq,
    R::Error: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.fetching == other.fetching
            && self.fetching_search == other.fetching_search
            && self.error == other.error
            && self.items == other.items
            && self.total_count == other.total_count
            && self.pending == other.pending
            && self.latest == other.latest
    }
}

/// Reducer for one fetchable collection.
///
/// Generic over the environment so it can be composed under any root reducer;
/// it never reads the environment and never returns effects.
pub struct ResourceReducer<R, E> {
    sequencing: Sequencing,
    _phantom: PhantomData<fn(&E) -> R>,
}

impl<R: Resource, E> ResourceReducer<R, E> {
    /// Create a reducer with [`Sequencing::Latest`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_sequencing(Sequencing::Latest)
    }

    /// Create a reducer with an explicit sequencing policy.
    #[must_use]
    pub const fn with_sequencing(sequencing: Sequencing) -> Self {
        Self {
            sequencing,
            _phantom: PhantomData,
        }
    }

    /// The sequencing policy in use.
    #[must_use]
    pub const fn sequencing(&self) -> Sequencing {
        self.sequencing
    }

    fn is_stale(&self, state: &ResourceState<R>, id: RequestId) -> bool {
        match self.sequencing {
            Sequencing::Unordered => false,
            // Only terminal actions arriving before any request was issued
            // (e.g. replayed after a page reload) skip the check.
            Sequencing::Latest => state.latest.is_some_and(|latest| latest != id),
        }
    }
}

impl<R: Resource, E> Default for ResourceReducer<R, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource, E> Clone for ResourceReducer<R, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource, E> Copy for ResourceReducer<R, E> {}

impl<R: Resource, E> fmt::Debug for ResourceReducer<R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceReducer")
            .field("resource", &R::NAME)
            .field("sequencing", &self.sequencing)
            .finish()
    }
}

impl<R: Resource, E> Reducer for ResourceReducer<R, E> {
    type State = ResourceState<R>;
    type Action = ResourceAction<R>;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            ResourceAction::Request { id, .. } => {
                state.fetching = true;
                state.pending = Some(id);
                state.latest = Some(id);
            },
            ResourceAction::SearchRequest { id, .. } => {
                state.fetching = true;
                state.fetching_search = true;
                state.pending = Some(id);
                state.latest = Some(id);
            },
            ResourceAction::Success { id, page } => {
                if self.is_stale(state, id) {
                    tracing::debug!(
                        resource = R::NAME,
                        request = %id,
                        "Dropping stale list success"
                    );
                    return smallvec![Effect::None];
                }
                state.fetching = false;
                state.fetching_search = false;
                state.error = None;
                state.items = page.items;
                state.total_count = page.total_count;
                state.pending = None;
            },
            ResourceAction::Failure { id, error } => {
                if self.is_stale(state, id) {
                    tracing::debug!(
                        resource = R::NAME,
                        request = %id,
                        "Dropping stale list failure"
                    );
                    return smallvec![Effect::None];
                }
                state.fetching = false;
                state.fetching_search = false;
                state.error = Some(error);
                state.items.clear();
                state.total_count = 0;
                state.pending = None;
            },
        }

        smallvec![Effect::None]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct Gateways;

    impl Resource for Gateways {
        const NAME: &'static str = "GATEWAYS";
        type Item = &'static str;
        type Query = u32;
        type Error = String;
    }

    fn reducer() -> ResourceReducer<Gateways, ()> {
        ResourceReducer::new()
    }

    fn apply(
        reducer: &ResourceReducer<Gateways, ()>,
        state: &mut ResourceState<Gateways>,
        action: ResourceAction<Gateways>,
    ) {
        let _ = reducer.reduce(state, action, &());
    }

    #[test]
    fn default_state_is_unfetched() {
        let state = ResourceState::<Gateways>::default();
        assert!(state.fetching);
        assert!(!state.fetching_search);
        assert!(state.error.is_none());
        assert!(state.items.is_empty());
        assert_eq!(state.total_count, 0);
    }

    #[test]
    fn request_then_success_replaces_items() {
        let reducer = reducer();
        let mut state = ResourceState::default();
        let id = RequestId::new(1);

        apply(&reducer, &mut state, ResourceAction::Request { id, query: 1 });
        assert!(state.fetching);
        assert!(!state.fetching_search);
        assert!(state.items.is_empty());
        assert_eq!(state.total_count, 0);
        assert!(state.error.is_none());

        apply(
            &reducer,
            &mut state,
            ResourceAction::Success { id, page: Page::new(vec!["x", "y"], 2) },
        );
        assert!(!state.fetching);
        assert_eq!(state.items, vec!["x", "y"]);
        assert_eq!(state.total_count, 2);
        assert!(state.error.is_none());
    }

    #[test]
    fn success_is_a_full_replace() {
        let reducer = reducer();
        let mut state = ResourceState::default();

        let first = RequestId::new(1);
        apply(&reducer, &mut state, ResourceAction::Request { id: first, query: 1 });
        apply(
            &reducer,
            &mut state,
            ResourceAction::Success { id: first, page: Page::new(vec!["a", "b", "c"], 30) },
        );

        let second = RequestId::new(2);
        apply(&reducer, &mut state, ResourceAction::Request { id: second, query: 2 });
        // Items stay visible while the next page loads.
        assert_eq!(state.items.len(), 3);

        apply(
            &reducer,
            &mut state,
            ResourceAction::Success { id: second, page: Page::new(vec!["d"], 30) },
        );
        assert_eq!(state.items, vec!["d"]);
        assert_eq!(state.total_count, 30);
    }

    #[test]
    fn search_then_failure_clears_everything() {
        let reducer = reducer();
        let mut state = ResourceState::default();
        let id = RequestId::new(4);

        apply(&reducer, &mut state, ResourceAction::SearchRequest { id, query: 0 });
        assert!(state.fetching);
        assert!(state.fetching_search);

        apply(&reducer, &mut state, ResourceAction::Failure { id, error: "E".to_string() });
        assert!(!state.fetching);
        assert!(!state.fetching_search);
        assert!(state.items.is_empty());
        assert_eq!(state.total_count, 0);
        assert_eq!(state.error.as_deref(), Some("E"));
    }

    #[test]
    fn success_clears_previous_error() {
        let reducer = reducer();
        let mut state = ResourceState::default();

        let failed = RequestId::new(1);
        apply(&reducer, &mut state, ResourceAction::Request { id: failed, query: 0 });
        apply(&reducer, &mut state, ResourceAction::Failure { id: failed, error: "down".into() });
        assert!(state.is_failed());

        let retried = RequestId::new(2);
        apply(&reducer, &mut state, ResourceAction::Request { id: retried, query: 0 });
        // The error marker survives until the retry resolves.
        assert!(state.is_failed());
        apply(
            &reducer,
            &mut state,
            ResourceAction::Success { id: retried, page: Page::new(vec!["gw"], 1) },
        );
        assert!(!state.is_failed());
    }

    #[test]
    fn failure_is_idempotent() {
        let reducer = reducer();
        let mut once = ResourceState::default();
        let id = RequestId::new(9);
        apply(&reducer, &mut once, ResourceAction::Request { id, query: 0 });
        apply(&reducer, &mut once, ResourceAction::Failure { id, error: "E".into() });

        let mut twice = once.clone();
        apply(&reducer, &mut twice, ResourceAction::Failure { id, error: "E".into() });

        assert_eq!(once, twice);
    }

    #[test]
    fn latest_sequencing_drops_stale_success() {
        let reducer = reducer();
        let mut state = ResourceState::default();
        let older = RequestId::new(1);
        let newer = RequestId::new(2);

        apply(&reducer, &mut state, ResourceAction::Request { id: older, query: 1 });
        apply(&reducer, &mut state, ResourceAction::Request { id: newer, query: 2 });

        apply(
            &reducer,
            &mut state,
            ResourceAction::Success { id: newer, page: Page::new(vec!["new"], 1) },
        );
        apply(
            &reducer,
            &mut state,
            ResourceAction::Success { id: older, page: Page::new(vec!["old"], 1) },
        );

        assert_eq!(state.items, vec!["new"]);
        assert!(!state.fetching);
    }

    #[test]
    fn latest_sequencing_drops_stale_failure_after_newer_success() {
        let reducer = reducer();
        let mut state = ResourceState::default();
        let older = RequestId::new(1);
        let newer = RequestId::new(2);

        apply(&reducer, &mut state, ResourceAction::Request { id: older, query: 1 });
        apply(&reducer, &mut state, ResourceAction::SearchRequest { id: newer, query: 2 });
        apply(
            &reducer,
            &mut state,
            ResourceAction::Success { id: newer, page: Page::new(vec!["new"], 1) },
        );
        assert_eq!(state.pending_request(), None);
        assert_eq!(state.latest_request(), Some(newer));

        apply(&reducer, &mut state, ResourceAction::Failure { id: older, error: "late".into() });

        assert_eq!(state.items, vec!["new"]);
        assert_eq!(state.total_count, 1);
        assert!(state.error.is_none());
        assert!(!state.fetching);
    }

    #[test]
    fn terminal_before_any_request_is_applied() {
        let reducer = reducer();
        let mut state = ResourceState::default();

        apply(
            &reducer,
            &mut state,
            ResourceAction::Success { id: RequestId::new(3), page: Page::new(vec!["gw"], 1) },
        );

        assert_eq!(state.items, vec!["gw"]);
        assert!(!state.fetching);
    }

    #[test]
    fn latest_sequencing_keeps_fetching_until_newest_answers() {
        let reducer = reducer();
        let mut state = ResourceState::default();
        let older = RequestId::new(1);
        let newer = RequestId::new(2);

        apply(&reducer, &mut state, ResourceAction::Request { id: older, query: 1 });
        apply(&reducer, &mut state, ResourceAction::Request { id: newer, query: 2 });
        apply(&reducer, &mut state, ResourceAction::Failure { id: older, error: "late".into() });

        assert!(state.fetching);
        assert!(state.error.is_none());
        assert_eq!(state.pending_request(), Some(newer));
    }

    #[test]
    fn unordered_sequencing_lets_late_success_win() {
        let reducer = ResourceReducer::<Gateways, ()>::with_sequencing(Sequencing::Unordered);
        let mut state = ResourceState::default();
        let older = RequestId::new(1);
        let newer = RequestId::new(2);

        apply(&reducer, &mut state, ResourceAction::Request { id: older, query: 1 });
        apply(&reducer, &mut state, ResourceAction::Request { id: newer, query: 2 });
        apply(
            &reducer,
            &mut state,
            ResourceAction::Success { id: newer, page: Page::new(vec!["new"], 1) },
        );
        apply(
            &reducer,
            &mut state,
            ResourceAction::Success { id: older, page: Page::new(vec!["old"], 1) },
        );

        assert_eq!(state.items, vec!["old"]);
    }

    #[test]
    fn kinds_render_wire_names() {
        let id = RequestId::new(1);
        let request = ResourceAction::<Gateways>::Request { id, query: 0 };
        let search = ResourceAction::<Gateways>::SearchRequest { id, query: 0 };
        let success =
            ResourceAction::<Gateways>::Success { id, page: Page::new(Vec::new(), 0) };
        let failure = ResourceAction::<Gateways>::Failure { id, error: String::new() };

        assert_eq!(request.kind().to_string(), "GET_GATEWAYS_LIST");
        assert_eq!(search.kind().to_string(), "SEARCH_GATEWAYS_LIST");
        assert_eq!(success.kind().to_string(), "GET_GATEWAYS_LIST_SUCCESS");
        assert_eq!(failure.kind().to_string(), "GET_GATEWAYS_LIST_FAILURE");
    }

    #[test]
    fn request_ids_increase() {
        let a = RequestId::next();
        let b = RequestId::next();
        assert!(b > a);
    }

    fn arb_action() -> impl Strategy<Value = ResourceAction<Gateways>> {
        (0u64..4, 0u8..4).prop_map(|(raw, tag)| {
            let id = RequestId::new(raw);
            match tag {
                0 => ResourceAction::Request { id, query: 0 },
                1 => ResourceAction::SearchRequest { id, query: 0 },
                2 => ResourceAction::Success { id, page: Page::new(vec!["gw"], 1) },
                _ => ResourceAction::Failure { id, error: "E".to_string() },
            }
        })
    }

    proptest! {
        #[test]
        fn terminal_for_latest_request_clears_flags(
            actions in prop::collection::vec(arb_action(), 0..32),
            ordered in any::<bool>(),
        ) {
            let sequencing = if ordered { Sequencing::Latest } else { Sequencing::Unordered };
            let reducer = ResourceReducer::<Gateways, ()>::with_sequencing(sequencing);
            let mut state = ResourceState::default();

            for action in actions {
                let latest = state.latest_request();
                let id = action.id();
                let terminal = matches!(
                    action,
                    ResourceAction::Success { .. } | ResourceAction::Failure { .. }
                );
                let is_failure = matches!(action, ResourceAction::Failure { .. });

                apply(&reducer, &mut state, action);

                if terminal && (latest.is_none() || latest == Some(id) || !ordered) {
                    prop_assert!(!state.fetching);
                    prop_assert!(!state.fetching_search);
                    if is_failure {
                        prop_assert!(state.items.is_empty());
                        prop_assert_eq!(state.total_count, 0);
                        prop_assert!(state.error.is_some());
                    } else {
                        prop_assert!(state.error.is_none());
                    }
                }
            }
        }
    }
}

//! Integration tests for Store action broadcasting
//!
//! A small collection reducer with an attached fetch logic unit is driven
//! through the store; the tests observe the follow-up actions the logic
//! produces.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use console_store_core::action::Action;
use console_store_core::effect::Effect;
use console_store_core::logic::{from_fn, with_logic, LogicReducer, SharedLogic};
use console_store_core::resource::{
    CollectionKind, Page, Resource, ResourceAction, ResourceKind, ResourceReducer, ResourceState,
};
use console_store_runtime::{Store, StoreError};
use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

// ============================================================================
// Test Fixtures
// ============================================================================

struct Tags;

impl Resource for Tags {
    const NAME: &'static str = "TAGS";
    type Item = String;
    type Query = u64;
    type Error = String;
}

/// Query `0` is rejected; any other query returns that many tags after a
/// delay of `query` milliseconds.
#[derive(Clone, Default)]
struct TagEnvironment {
    calls: Arc<AtomicUsize>,
}

type TagReducer = LogicReducer<ResourceReducer<Tags, TagEnvironment>>;

fn fetch_tags(action: ResourceAction<Tags>, env: &TagEnvironment) -> Effect<ResourceAction<Tags>> {
    let id = action.id();
    let (ResourceAction::Request { query, .. } | ResourceAction::SearchRequest { query, .. }) =
        action
    else {
        return Effect::None;
    };
    let calls = Arc::clone(&env.calls);

    Effect::Future(Box::pin(async move {
        calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(query)).await;
        if query == 0 {
            return Some(ResourceAction::Failure {
                id,
                error: "rejected".to_string(),
            });
        }
        let items: Vec<String> = (0..query).map(|n| format!("tag-{n}")).collect();
        Some(ResourceAction::Success {
            id,
            page: Page::new(items, query),
        })
    }))
}

fn tag_reducer() -> TagReducer {
    let logic: Vec<SharedLogic<ResourceAction<Tags>, TagEnvironment>> = vec![
        Arc::new(from_fn(
            "tags_list",
            CollectionKind::new(ResourceKind::Request),
            fetch_tags,
        )),
        Arc::new(from_fn(
            "tags_search",
            CollectionKind::new(ResourceKind::SearchRequest),
            fetch_tags,
        )),
    ];
    with_logic(ResourceReducer::new(), logic)
}

fn tag_store() -> Store<ResourceState<Tags>, ResourceAction<Tags>, TagEnvironment, TagReducer> {
    Store::new(ResourceState::default(), tag_reducer(), TagEnvironment::default())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn is_terminal(action: &ResourceAction<Tags>) -> bool {
    matches!(
        action,
        ResourceAction::Success { .. } | ResourceAction::Failure { .. }
    )
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn send_and_wait_for_returns_the_logic_outcome() {
    init_tracing();
    let store = tag_store();
    let request = ResourceAction::request(2);
    let id = request.id();

    let outcome = store
        .send_and_wait_for(request, is_terminal, Duration::from_secs(1))
        .await
        .unwrap();

    assert_eq!(outcome.id(), id);
    assert!(matches!(outcome, ResourceAction::Success { .. }));

    let (fetching, total) = store.state(|s| (s.fetching, s.total_count)).await;
    assert!(!fetching);
    assert_eq!(total, 2);
}

#[tokio::test]
async fn rejected_fetch_is_broadcast_as_failure() {
    init_tracing();
    let store = tag_store();

    let outcome = store
        .send_and_wait_for(ResourceAction::search(0), is_terminal, Duration::from_secs(1))
        .await
        .unwrap();

    assert!(matches!(outcome, ResourceAction::Failure { ref error, .. } if error == "rejected"));
    let state = store.snapshot().await;
    assert!(!state.fetching);
    assert!(!state.fetching_search);
    assert!(state.items.is_empty());
    assert_eq!(state.error.as_deref(), Some("rejected"));
}

#[tokio::test]
async fn handle_completes_after_follow_up_is_reduced() {
    init_tracing();
    let store = tag_store();

    let mut handle = store.send(ResourceAction::request(5)).await.unwrap();
    assert!(store.state(|s| s.fetching).await);

    handle
        .wait_with_timeout(Duration::from_secs(1))
        .await
        .unwrap();

    assert!(!store.state(|s| s.fetching).await);
    assert_eq!(store.state(|s| s.items.len()).await, 5);
    assert_eq!(store.environment().calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn subscribers_see_every_outcome() {
    init_tracing();
    let store = tag_store();
    let mut rx = store.subscribe_actions();

    let mut first = store.send(ResourceAction::request(1)).await.unwrap();
    let mut second = store.send(ResourceAction::search(3)).await.unwrap();
    first.wait().await;
    second.wait().await;

    let mut seen = Vec::new();
    while let Ok(action) = rx.try_recv() {
        seen.push(action.kind().to_string());
    }

    assert_eq!(seen.len(), 2);
    assert!(seen.iter().all(|kind| kind == "GET_TAGS_LIST_SUCCESS"));
}

#[tokio::test]
async fn slow_superseded_answer_is_ignored() {
    init_tracing();
    let store = tag_store();

    // The first request answers after the second one
    let mut slow = store.send(ResourceAction::request(40)).await.unwrap();
    let mut fast = store.send(ResourceAction::search(1)).await.unwrap();

    fast.wait().await;
    assert_eq!(store.state(|s| s.items.len()).await, 1);

    slow.wait().await;
    let state = store.snapshot().await;
    assert_eq!(state.items.len(), 1);
    assert!(!state.fetching);
}

#[tokio::test]
async fn timeout_when_no_terminal_action_arrives() {
    init_tracing();
    let store = tag_store();

    let result = store
        .send_and_wait_for(
            ResourceAction::request(200),
            is_terminal,
            Duration::from_millis(20),
        )
        .await;

    assert!(matches!(result, Err(StoreError::Timeout)));
}

#[tokio::test]
async fn shutdown_waits_for_in_flight_logic() {
    init_tracing();
    let store = tag_store();

    let mut rx = store.subscribe_actions();
    let _handle = store.send(ResourceAction::request(20)).await.unwrap();
    store.shutdown(Duration::from_secs(1)).await.unwrap();

    assert_eq!(store.pending_effects(), 0);
    // The answer of the drained request was reduced, not just broadcast
    let state = store.snapshot().await;
    assert!(!state.fetching);
    assert_eq!(state.items.len(), 20);
    assert!(is_terminal(&rx.try_recv().unwrap()));
    assert!(matches!(
        store.send(ResourceAction::request(1)).await,
        Err(StoreError::ShutdownInProgress)
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Whatever order the answers arrive in, the page of the last request wins.
    #[test]
    fn last_dispatched_request_decides_the_page(
        requests in prop::collection::vec((any::<bool>(), 1u64..25), 1..6),
    ) {
        init_tracing();
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        let last = requests.last().map_or(0, |&(_, size)| size);

        let state = runtime.block_on(async {
            let store = tag_store();
            let mut handles = Vec::new();
            for &(search, size) in &requests {
                let action = if search {
                    ResourceAction::search(size)
                } else {
                    ResourceAction::request(size)
                };
                handles.push(store.send(action).await?);
            }
            for handle in &mut handles {
                handle.wait_with_timeout(Duration::from_secs(1)).await?;
            }
            Ok::<_, StoreError>(store.snapshot().await)
        })?;

        prop_assert!(!state.fetching);
        prop_assert!(!state.fetching_search);
        prop_assert!(state.error.is_none());
        prop_assert_eq!(state.total_count, last);
        prop_assert_eq!(state.items.len() as u64, last);
    }
}

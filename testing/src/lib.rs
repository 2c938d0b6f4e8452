//! # Console Store Testing
//!
//! Testing utilities and helpers for the console resource state machine.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then harness for reducers
//! - [`effects`]: Run effects without a store and collect their follow-up actions
//! - [`properties`]: proptest strategies for resource actions
//! - [`helpers`]: Test tracing setup
//!
//! ## Example
//!
//! ```ignore
//! use console_store_testing::effects::run_effects;
//!
//! #[tokio::test]
//! async fn session_fetch_reports_identity() {
//!     let env = test_environment();
//!     let mut state = AppState::default();
//!
//!     let effects = root_reducer().reduce(&mut state, AppAction::get_session(), &env);
//!     let follow_ups = run_effects(effects).await;
//!
//!     assert!(matches!(follow_ups[..], [AppAction::Session(SessionAction::GetSessionSuccess(_))]));
//! }
//! ```

pub mod effects;

/// Test helpers and utilities.
pub mod helpers {
    use tracing_subscriber::EnvFilter;

    /// Install a test-friendly tracing subscriber.
    ///
    /// Honours `RUST_LOG` and defaults to `debug`. Output goes through the
    /// test writer so it is captured per test. Safe to call from every test;
    /// only the first call installs anything.
    pub fn init_test_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use console_store_core::resource::{Page, RequestId, Resource, ResourceAction};
    use proptest::prelude::*;

    /// Request ids drawn from a small pool so that generated histories mix
    /// answers to the latest request with answers to superseded ones.
    pub fn request_id() -> impl Strategy<Value = RequestId> + Clone {
        (1u64..=4).prop_map(RequestId::new)
    }

    /// Arbitrary actions for resource `R`.
    ///
    /// Pages hold up to eight items and a total count below one hundred.
    pub fn resource_action<R, Q, I, Er>(
        query: Q,
        item: I,
        error: Er,
    ) -> BoxedStrategy<ResourceAction<R>>
    where
        R: Resource,
        Q: Strategy<Value = R::Query> + Clone + 'static,
        I: Strategy<Value = R::Item> + 'static,
        Er: Strategy<Value = R::Error> + 'static,
    {
        prop_oneof![
            (request_id(), query.clone())
                .prop_map(|(id, query)| ResourceAction::Request { id, query }),
            (request_id(), query)
                .prop_map(|(id, query)| ResourceAction::SearchRequest { id, query }),
            (request_id(), proptest::collection::vec(item, 0..8), 0u64..100).prop_map(
                |(id, items, total_count)| ResourceAction::Success {
                    id,
                    page: Page::new(items, total_count),
                }
            ),
            (request_id(), error).prop_map(|(id, error)| ResourceAction::Failure { id, error }),
        ]
        .boxed()
    }
}

// Re-export commonly used items
pub use effects::{run_effect, run_effects};
pub use helpers::init_test_tracing;
pub use reducer_test::{assertions, ReducerTest};

//! # Console Store Core
//!
//! Core traits and types for the console's asynchronous resource state machine.
//!
//! Every fetchable collection (devices, applications, users) and the session
//! singleton is modelled as a small state machine driven by a fixed
//! request/success/failure action triad. This crate provides the pieces those
//! state machines are built from.
//!
//! ## Core Concepts
//!
//! - **Action**: Named, side-effect-free descriptor with a stable kind
//! - **State**: Owned, `Clone`-able data for one resource
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Logic**: Effect handler bound to exactly one triggering action kind
//!
//! ## Data Flow
//!
//! ```text
//! UI ── Request ──► Store ──► Reducers (fetching = true)
//!                     │
//!                     └─────► Logic ── API call ──► Success / Failure ──► Store
//! ```
//!
//! ## Example
//!
//! ```
//! use console_store_core::resource::{
//!     Page, RequestId, Resource, ResourceAction, ResourceReducer, ResourceState,
//! };
//! use console_store_core::reducer::Reducer;
//!
//! struct Gateways;
//!
//! impl Resource for Gateways {
//!     const NAME: &'static str = "GATEWAYS";
//!     type Item = String;
//!     type Query = ();
//!     type Error = String;
//! }
//!
//! let reducer = ResourceReducer::<Gateways, ()>::new();
//! let mut state = ResourceState::<Gateways>::default();
//!
//! let id = RequestId::next();
//! let _ = reducer.reduce(&mut state, ResourceAction::Request { id, query: () }, &());
//! assert!(state.fetching);
//!
//! let page = Page::new(vec!["gw-1".to_string()], 1);
//! let _ = reducer.reduce(&mut state, ResourceAction::Success { id, page }, &());
//! assert!(!state.fetching);
//! assert_eq!(state.total_count, 1);
//! ```

// Re-export commonly used types
pub use serde::{Deserialize, Serialize};
pub use smallvec::{smallvec, SmallVec};

pub mod action;
pub mod composition;
pub mod effect_macros;
pub mod logic;
pub mod resource;

/// Reducer module - The core trait for state transitions
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They are deterministic and testable. Reducers in this workspace return
/// `Effect::None` for resource actions; side effects are contributed by
/// [`Logic`](crate::logic::Logic) units wrapped around them.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for state transitions
    ///
    /// # Type Parameters
    ///
    /// - `State`: The state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for SessionReducer {
    ///     type State = SessionState;
    ///     type Action = SessionAction;
    ///     type Environment = ConsoleEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut SessionState,
    ///         action: SessionAction,
    ///         env: &ConsoleEnvironment,
    ///     ) -> SmallVec<[Effect<SessionAction>; 4]> {
    ///         match action {
    ///             SessionAction::GetSession => {
    ///                 state.fetching = true;
    ///                 smallvec![Effect::None]
    ///             }
    ///             _ => smallvec![Effect::None],
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Updates state in place
        /// 2. Returns effect descriptions to be executed
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// Effects to be executed by the runtime
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime.
/// They are values (not execution) and are composable.
pub mod effect {
    use futures::FutureExt;
    use std::future::Future;
    use std::pin::Pin;
    use std::time::Duration;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what should happen,
    /// returned from reducers and logic units and executed by the Store runtime.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Run effects in parallel
        Parallel(Vec<Effect<Action>>),

        /// Run effects sequentially
        Sequential(Vec<Effect<Action>>),

        /// Delayed action
        Delay {
            /// How long to wait
            duration: Duration,
            /// Action to dispatch after delay
            action: Box<Action>,
        },

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if Some, the action is fed back into the reducer
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Parallel(effects) => {
                    f.debug_tuple("Effect::Parallel").field(effects).finish()
                },
                Effect::Sequential(effects) => {
                    f.debug_tuple("Effect::Sequential").field(effects).finish()
                },
                Effect::Delay { duration, action } => f
                    .debug_struct("Effect::Delay")
                    .field("duration", duration)
                    .field("action", action)
                    .finish(),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Combine effects to run in parallel
        #[must_use]
        pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Parallel(effects)
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }

        /// Whether this effect does nothing at all
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Effect::None => true,
                Effect::Parallel(effects) | Effect::Sequential(effects) => {
                    effects.iter().all(Effect::is_none)
                },
                Effect::Delay { .. } | Effect::Future(_) => false,
            }
        }

        /// Lift an effect into a parent action type
        ///
        /// Used by scoped reducers so a child's effects feed actions back
        /// into the parent store.
        #[must_use]
        pub fn map<Parent>(self, embed: fn(Action) -> Parent) -> Effect<Parent>
        where
            Action: Send + 'static,
            Parent: 'static,
        {
            match self {
                Effect::None => Effect::None,
                Effect::Parallel(effects) => {
                    Effect::Parallel(effects.into_iter().map(|e| e.map(embed)).collect())
                },
                Effect::Sequential(effects) => {
                    Effect::Sequential(effects.into_iter().map(|e| e.map(embed)).collect())
                },
                Effect::Delay { duration, action } => Effect::Delay {
                    duration,
                    action: Box::new(embed(*action)),
                },
                Effect::Future(fut) => {
                    Effect::Future(Box::pin(fut.map(move |action| action.map(embed))))
                },
            }
        }
    }
}

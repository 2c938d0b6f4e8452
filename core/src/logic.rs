//! Logic units (effect handlers)
//!
//! A logic unit reacts to exactly one action kind. When the store reduces an
//! action of that kind, the unit is handed the same action together with the
//! environment and returns an [`Effect`] describing the external call and the
//! follow-up action it will produce. Logic never touches state.
//!
//! Logic units are attached to a reducer with [`with_logic`]; the wrapped
//! reducer applies the state transition first and then collects the effects of
//! every unit whose trigger matches.
//!
//! # Completion
//!
//! An `Effect::Future` resolves exactly once, with at most one follow-up
//! action. The runtime's effect handle counts it as pending until then, which
//! is how callers learn that a handler has finished.

use crate::action::Action;
use crate::effect::Effect;
use crate::reducer::Reducer;
use crate::SmallVec;
use std::fmt;
use std::sync::Arc;

/// An effect handler bound to one triggering action kind.
pub trait Logic<A: Action, E>: Send + Sync {
    /// Name used in logs and metrics
    fn name(&self) -> &'static str;

    /// The single action kind this unit reacts to
    fn trigger(&self) -> A::Kind;

    /// Describe the side effect for a triggering action
    ///
    /// Implementations must convert every failure of the external call into a
    /// failure action; the returned effect never panics or drops the outcome.
    fn process(&self, action: A, env: &E) -> Effect<A>;
}

/// Shared, thread-safe logic trait object.
pub type SharedLogic<A, E> = Arc<dyn Logic<A, E>>;

/// Logic built from a plain function.
///
/// # Example
///
/// ```
/// use console_store_core::action::Action;
/// use console_store_core::effect::Effect;
/// use console_store_core::logic::{from_fn, Logic};
/// use std::fmt;
///
/// #[derive(Clone, Debug)]
/// enum Ping { Ping, Pong }
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// enum PingKind { Ping, Pong }
///
/// impl fmt::Display for PingKind {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         fmt::Debug::fmt(self, f)
///     }
/// }
///
/// impl Action for Ping {
///     type Kind = PingKind;
///     fn kind(&self) -> PingKind {
///         match self { Ping::Ping => PingKind::Ping, Ping::Pong => PingKind::Pong }
///     }
/// }
///
/// let pong = from_fn("pong", PingKind::Ping, |_action: Ping, _env: &()| {
///     Effect::Future(Box::pin(async { Some(Ping::Pong) }))
/// });
/// assert_eq!(pong.trigger(), PingKind::Ping);
/// ```
pub fn from_fn<A, E, F>(name: &'static str, trigger: A::Kind, process: F) -> FnLogic<A, E, F>
where
    A: Action,
    F: Fn(A, &E) -> Effect<A> + Send + Sync,
{
    FnLogic {
        name,
        trigger,
        process,
        _marker: std::marker::PhantomData,
    }
}

/// Logic created by [`from_fn`].
pub struct FnLogic<A: Action, E, F> {
    name: &'static str,
    trigger: A::Kind,
    process: F,
    _marker: std::marker::PhantomData<fn(A, &E)>,
}

impl<A, E, F> Logic<A, E> for FnLogic<A, E, F>
where
    A: Action,
    F: Fn(A, &E) -> Effect<A> + Send + Sync,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn trigger(&self) -> A::Kind {
        self.trigger
    }

    fn process(&self, action: A, env: &E) -> Effect<A> {
        (self.process)(action, env)
    }
}

/// Attach logic units to a reducer.
#[must_use]
pub fn with_logic<R>(
    reducer: R,
    logic: Vec<SharedLogic<R::Action, R::Environment>>,
) -> LogicReducer<R>
where
    R: Reducer,
    R::Action: Action,
{
    LogicReducer { reducer, logic }
}

/// A reducer followed by the logic units triggered by each action.
///
/// Created by [`with_logic`].
pub struct LogicReducer<R>
where
    R: Reducer,
    R::Action: Action,
{
    reducer: R,
    logic: Vec<SharedLogic<R::Action, R::Environment>>,
}

impl<R> LogicReducer<R>
where
    R: Reducer,
    R::Action: Action,
{
    /// Names of the units triggered by `kind`, in registration order.
    #[must_use]
    pub fn triggered_by(&self, kind: <R::Action as Action>::Kind) -> Vec<&'static str> {
        self.logic
            .iter()
            .filter(|logic| logic.trigger() == kind)
            .map(|logic| logic.name())
            .collect()
    }

    /// The wrapped reducer.
    #[must_use]
    pub const fn inner(&self) -> &R {
        &self.reducer
    }
}

impl<R> Clone for LogicReducer<R>
where
    R: Reducer + Clone,
    R::Action: Action,
{
    fn clone(&self) -> Self {
        Self {
            reducer: self.reducer.clone(),
            logic: self.logic.clone(),
        }
    }
}

impl<R> fmt::Debug for LogicReducer<R>
where
    R: Reducer,
    R::Action: Action,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.logic.iter().map(|logic| logic.name()).collect();
        f.debug_struct("LogicReducer")
            .field("logic", &names)
            .finish_non_exhaustive()
    }
}

impl<R> Reducer for LogicReducer<R>
where
    R: Reducer,
    R::Action: Action,
{
    type State = R::State;
    type Action = R::Action;
    type Environment = R::Environment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let kind = action.kind();
        let triggered: SmallVec<[&SharedLogic<Self::Action, Self::Environment>; 2]> = self
            .logic
            .iter()
            .filter(|logic| logic.trigger() == kind)
            .collect();

        if triggered.is_empty() {
            return self.reducer.reduce(state, action, env);
        }

        let mut effects = self.reducer.reduce(state, action.clone(), env);
        for logic in triggered {
            tracing::debug!(logic = logic.name(), kind = %kind, "Invoking logic");
            effects.push(logic.process(action.clone(), env));
        }

        effects
    }
}

#[cfg(test)]
#[allow(clippy::panic)] // Test code can panic
mod tests {
    use super::*;
    use crate::smallvec;

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Load,
        Loaded(u32),
        Clear,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum TestKind {
        Load,
        Loaded,
        Clear,
    }

    impl fmt::Display for TestKind {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Load => f.write_str("LOAD"),
                Self::Loaded => f.write_str("LOADED"),
                Self::Clear => f.write_str("CLEAR"),
            }
        }
    }

    impl Action for TestAction {
        type Kind = TestKind;

        fn kind(&self) -> TestKind {
            match self {
                Self::Load => TestKind::Load,
                Self::Loaded(_) => TestKind::Loaded,
                Self::Clear => TestKind::Clear,
            }
        }
    }

    #[derive(Default)]
    struct TestState {
        loading: bool,
        value: Option<u32>,
    }

    struct TestEnv {
        answer: u32,
    }

    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = TestEnv;

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                TestAction::Load => state.loading = true,
                TestAction::Loaded(value) => {
                    state.loading = false;
                    state.value = Some(value);
                },
                TestAction::Clear => state.value = None,
            }
            smallvec![Effect::None]
        }
    }

    fn load_logic() -> SharedLogic<TestAction, TestEnv> {
        Arc::new(from_fn("load", TestKind::Load, |_action: TestAction, env: &TestEnv| {
            let answer = env.answer;
            Effect::Future(Box::pin(async move { Some(TestAction::Loaded(answer)) }))
        }))
    }

    #[test]
    fn reducer_runs_before_logic_effects_are_collected() {
        let reducer = with_logic(TestReducer, vec![load_logic()]);
        let mut state = TestState::default();

        let effects = reducer.reduce(&mut state, TestAction::Load, &TestEnv { answer: 42 });

        assert!(state.loading);
        assert_eq!(effects.len(), 2);
        assert!(matches!(effects[0], Effect::None));
        assert!(matches!(effects[1], Effect::Future(_)));
    }

    #[test]
    fn untriggered_actions_only_reduce() {
        let reducer = with_logic(TestReducer, vec![load_logic()]);
        let mut state = TestState { loading: false, value: Some(1) };

        let effects = reducer.reduce(&mut state, TestAction::Clear, &TestEnv { answer: 0 });

        assert!(state.value.is_none());
        assert_eq!(effects.len(), 1);
        assert!(effects[0].is_none());
    }

    #[test]
    fn triggered_by_lists_units_for_kind() {
        let reducer = with_logic(TestReducer, vec![load_logic()]);
        assert_eq!(reducer.triggered_by(TestKind::Load), vec!["load"]);
        assert!(reducer.triggered_by(TestKind::Loaded).is_empty());
    }

    #[tokio::test]
    async fn logic_future_produces_follow_up() {
        let reducer = with_logic(TestReducer, vec![load_logic()]);
        let mut state = TestState::default();
        let env = TestEnv { answer: 7 };

        let mut effects = reducer.reduce(&mut state, TestAction::Load, &env);
        let Some(Effect::Future(fut)) = effects.pop() else {
            panic!("expected a future effect from the load logic");
        };
        let follow_up = fut.await;
        assert_eq!(follow_up, Some(TestAction::Loaded(7)));

        let _ = reducer.reduce(&mut state, TestAction::Loaded(7), &env);
        assert_eq!(state.value, Some(7));
        assert!(!state.loading);
    }
}

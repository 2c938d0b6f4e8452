//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers into one root reducer:
//! - **`combine_reducers`**: Run multiple reducers on the same state/action
//! - **`scope_reducer`**: Focus a reducer on one named slice of a larger state
//!
//! A root state is built from `Arc`-wrapped slices. A scoped reducer only
//! touches its slice when the action belongs to it, so every other slice keeps
//! its pointer identity and observers can detect change with [`Arc::ptr_eq`].
//!
//! # Examples
//!
//! ```
//! use console_store_core::composition::{combine_reducers, scope_reducer};
//! use console_store_core::reducer::Reducer;
//! use console_store_core::effect::Effect;
//! use console_store_core::{smallvec, SmallVec};
//! use std::sync::Arc;
//!
//! #[derive(Clone, Default)]
//! struct Counter {
//!     count: i32,
//! }
//!
//! #[derive(Clone)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = Counter;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut Counter, action: CounterAction, _env: &()) -> SmallVec<[Effect<CounterAction>; 4]> {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! #[derive(Clone, Default)]
//! struct Root {
//!     left: Arc<Counter>,
//!     right: Arc<Counter>,
//! }
//!
//! #[derive(Clone)]
//! enum RootAction {
//!     Left(CounterAction),
//!     Right(CounterAction),
//! }
//!
//! fn left(root: &mut Root) -> &mut Arc<Counter> {
//!     &mut root.left
//! }
//!
//! fn right(root: &mut Root) -> &mut Arc<Counter> {
//!     &mut root.right
//! }
//!
//! let root = combine_reducers(vec![
//!     Arc::new(scope_reducer(
//!         "left",
//!         left,
//!         |a: RootAction| match a { RootAction::Left(a) => Some(a), RootAction::Right(_) => None },
//!         RootAction::Left,
//!         CounterReducer,
//!     )),
//!     Arc::new(scope_reducer(
//!         "right",
//!         right,
//!         |a: RootAction| match a { RootAction::Right(a) => Some(a), RootAction::Left(_) => None },
//!         RootAction::Right,
//!         CounterReducer,
//!     )),
//! ]);
//!
//! let mut state = Root::default();
//! let before = state.clone();
//! let _ = root.reduce(&mut state, RootAction::Left(CounterAction::Increment), &());
//!
//! assert_eq!(state.left.count, 1);
//! assert!(!Arc::ptr_eq(&before.left, &state.left));
//! assert!(Arc::ptr_eq(&before.right, &state.right));
//! ```

use crate::effect::Effect;
use crate::reducer::Reducer;
use crate::SmallVec;
use std::marker::PhantomData;
use std::sync::Arc;

/// Shared, thread-safe reducer trait object used by [`CombinedReducer`].
pub type SharedReducer<S, A, E> = Arc<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in sequence with its own clone of the action, and all
/// effects are collected and concatenated.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The action type
/// - `E`: The environment type
#[must_use]
pub fn combine_reducers<S, A, E>(reducers: Vec<SharedReducer<S, A, E>>) -> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    reducers: Vec<SharedReducer<S, A, E>>,
}

impl<S, A, E> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    /// Number of child reducers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    /// Whether no child reducers were combined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }
}

impl<S, A, E> Clone for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    fn clone(&self) -> Self {
        Self {
            reducers: self.reducers.clone(),
        }
    }
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let mut all_effects = SmallVec::new();

        for reducer in &self.reducers {
            let effects = reducer.reduce(state, action.clone(), env);
            all_effects.extend(effects);
        }

        all_effects
    }
}

/// Scopes a reducer to one named `Arc` slice of a larger state.
///
/// # Arguments
///
/// - `name`: Slice name, used in tracing
/// - `lens`: Selects the slice inside the parent state
/// - `extract`: Returns the child action if the parent action belongs to this slice
/// - `embed`: Wraps child actions produced by effects back into the parent type
/// - `reducer`: The child reducer
///
/// When `extract` returns `None` the child reducer is not run and the slice's
/// `Arc` is left untouched. Otherwise the slice is updated through
/// [`Arc::make_mut`], which copies it only if a snapshot still shares it.
pub fn scope_reducer<S, SubS, A, SubA, E, R>(
    name: &'static str,
    lens: fn(&mut S) -> &mut Arc<SubS>,
    extract: fn(A) -> Option<SubA>,
    embed: fn(SubA) -> A,
    reducer: R,
) -> ScopedReducer<S, SubS, A, SubA, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    SubA: Send + 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
{
    ScopedReducer {
        name,
        reducer,
        lens,
        extract,
        embed,
        _env: PhantomData,
    }
}

/// A scoped reducer that operates on one slice of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, SubA, E, R>
where
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
{
    name: &'static str,
    reducer: R,
    lens: fn(&mut S) -> &mut Arc<SubS>,
    extract: fn(A) -> Option<SubA>,
    embed: fn(SubA) -> A,
    _env: PhantomData<fn(&E)>,
}

impl<S, SubS, A, SubA, E, R> ScopedReducer<S, SubS, A, SubA, E, R>
where
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
{
    /// Name of the slice this reducer owns.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<S, SubS, A, SubA, E, R> Clone for ScopedReducer<S, SubS, A, SubA, E, R>
where
    R: Reducer<State = SubS, Action = SubA, Environment = E> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            reducer: self.reducer.clone(),
            lens: self.lens,
            extract: self.extract,
            embed: self.embed,
            _env: PhantomData,
        }
    }
}

impl<S, SubS, A, SubA, E, R> Reducer for ScopedReducer<S, SubS, A, SubA, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    SubA: Send + 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let Some(sub_action) = (self.extract)(action) else {
            return SmallVec::new();
        };

        let span = tracing::trace_span!("slice", name = self.name);
        let _enter = span.enter();

        let sub_state = Arc::make_mut((self.lens)(state));
        let effects = self.reducer.reduce(sub_state, sub_action, env);

        effects
            .into_iter()
            .map(|effect| effect.map(self.embed))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smallvec;

    #[derive(Clone, Default)]
    struct TestState {
        counter: i32,
        name: String,
    }

    #[derive(Clone)]
    enum TestAction {
        Increment,
        Decrement,
        SetName(String),
    }

    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                TestAction::Increment => {
                    state.counter += 1;
                    smallvec![Effect::None]
                },
                TestAction::Decrement => {
                    state.counter -= 1;
                    smallvec![Effect::None]
                },
                TestAction::SetName(_) => smallvec![Effect::None],
            }
        }
    }

    struct NameReducer;

    impl Reducer for NameReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            if let TestAction::SetName(name) = action {
                state.name = name;
            }
            smallvec![Effect::None]
        }
    }

    #[test]
    fn test_combine_reducers() {
        let combined = combine_reducers(vec![Arc::new(CounterReducer), Arc::new(NameReducer)]);
        assert_eq!(combined.len(), 2);

        let mut state = TestState::default();

        let _ = combined.reduce(&mut state, TestAction::Increment, &());
        assert_eq!(state.counter, 1);

        let _ = combined.reduce(&mut state, TestAction::SetName("Alice".to_string()), &());
        assert_eq!(state.name, "Alice");

        let effects = combined.reduce(&mut state, TestAction::Decrement, &());
        assert_eq!(state.counter, 0);
        assert_eq!(state.name, "Alice");
        // One effect per child reducer
        assert_eq!(effects.len(), 2);
    }

    // Scoped reducer tests
    #[derive(Clone, Default, Debug, PartialEq)]
    struct SubState {
        value: i32,
    }

    #[derive(Clone, Debug)]
    enum SubAction {
        Add(i32),
        AddLater(i32),
    }

    struct SubReducer;

    impl Reducer for SubReducer {
        type State = SubState;
        type Action = SubAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                SubAction::Add(n) => {
                    state.value += n;
                    smallvec![Effect::None]
                },
                SubAction::AddLater(n) => smallvec![Effect::Delay {
                    duration: std::time::Duration::from_millis(1),
                    action: Box::new(SubAction::Add(n)),
                }],
            }
        }
    }

    #[derive(Clone, Default)]
    struct ParentState {
        left: Arc<SubState>,
        right: Arc<SubState>,
    }

    #[derive(Clone, Debug)]
    enum ParentAction {
        Left(SubAction),
        Right(SubAction),
    }

    fn left() -> ScopedReducer<ParentState, SubState, ParentAction, SubAction, (), SubReducer> {
        scope_reducer(
            "left",
            |s: &mut ParentState| &mut s.left,
            |a| match a {
                ParentAction::Left(a) => Some(a),
                ParentAction::Right(_) => None,
            },
            ParentAction::Left,
            SubReducer,
        )
    }

    fn right() -> ScopedReducer<ParentState, SubState, ParentAction, SubAction, (), SubReducer> {
        scope_reducer(
            "right",
            |s: &mut ParentState| &mut s.right,
            |a| match a {
                ParentAction::Right(a) => Some(a),
                ParentAction::Left(_) => None,
            },
            ParentAction::Right,
            SubReducer,
        )
    }

    #[test]
    fn test_scope_reducer() {
        let scoped = left();
        assert_eq!(scoped.name(), "left");

        let mut state = ParentState::default();

        let _ = scoped.reduce(&mut state, ParentAction::Left(SubAction::Add(3)), &());
        assert_eq!(state.left.value, 3);
        assert_eq!(state.right.value, 0);

        let effects = scoped.reduce(&mut state, ParentAction::Right(SubAction::Add(5)), &());
        assert!(effects.is_empty());
        assert_eq!(state.left.value, 3);
    }

    #[test]
    fn test_unrelated_slice_keeps_identity() {
        let root = combine_reducers(vec![Arc::new(left()), Arc::new(right())]);
        let mut state = ParentState::default();
        let snapshot = state.clone();

        let _ = root.reduce(&mut state, ParentAction::Left(SubAction::Add(1)), &());

        assert!(!Arc::ptr_eq(&snapshot.left, &state.left));
        assert!(Arc::ptr_eq(&snapshot.right, &state.right));
        // The snapshot itself is untouched
        assert_eq!(snapshot.left.value, 0);
    }

    #[test]
    fn test_unshared_slice_is_updated_in_place() {
        let scoped = left();
        let mut state = ParentState::default();
        let before = Arc::as_ptr(&state.left);

        let _ = scoped.reduce(&mut state, ParentAction::Left(SubAction::Add(2)), &());

        assert_eq!(Arc::as_ptr(&state.left), before);
        assert_eq!(state.left.value, 2);
    }

    #[test]
    fn test_scoped_effects_are_embedded() {
        let scoped = right();
        let mut state = ParentState::default();

        let effects = scoped.reduce(&mut state, ParentAction::Right(SubAction::AddLater(4)), &());

        assert_eq!(effects.len(), 1);
        assert!(matches!(
            &effects[0],
            Effect::Delay { action, .. } if matches!(**action, ParentAction::Right(SubAction::Add(4)))
        ));
    }
}

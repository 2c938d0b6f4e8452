//! Session reducer.

use crate::actions::SessionAction;
use crate::state::SessionState;
use console_store_core::effect::Effect;
use console_store_core::reducer::Reducer;
use console_store_core::{smallvec, SmallVec};
use std::fmt;
use std::marker::PhantomData;

/// Reducer for the session singleton.
///
/// | Action                | Effect on state                       |
/// |-----------------------|---------------------------------------|
/// | `GET_SESSION`         | `fetching = true`                     |
/// | `GET_SESSION_SUCCESS` | `fetching = false`, user stored       |
/// | `GET_SESSION_FAILURE` | `fetching = false`, user cleared      |
/// | `LOGOUT`              | `logging_out = true`                  |
/// | `LOGOUT_SUCCESS`      | `logging_out = false`, user cleared   |
/// | `LOGOUT_FAILURE`      | `logging_out = false`, user kept      |
///
/// Like the collection reducers it is generic over the environment it never
/// reads, and returns no effects.
pub struct SessionReducer<E> {
    _phantom: PhantomData<fn(&E)>,
}

impl<E> SessionReducer<E> {
    /// Create a new session reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<E> Default for SessionReducer<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for SessionReducer<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for SessionReducer<E> {}

impl<E> fmt::Debug for SessionReducer<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionReducer")
    }
}

impl<E> Reducer for SessionReducer<E> {
    type State = SessionState;
    type Action = SessionAction;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            SessionAction::GetSession => {
                state.fetching = true;
            },
            SessionAction::GetSessionSuccess(user) => {
                state.fetching = false;
                state.user = Some(user);
            },
            SessionAction::GetSessionFailure => {
                state.fetching = false;
                state.user = None;
            },
            SessionAction::Logout => {
                state.logging_out = true;
            },
            SessionAction::LogoutSuccess => {
                state.logging_out = false;
                state.user = None;
            },
            SessionAction::LogoutFailure => {
                state.logging_out = false;
            },
        }

        smallvec![Effect::None]
    }
}

//! Console reducers.
//!
//! Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.
//! The session and collection reducers own one slice each; [`root_reducer`]
//! composes them, with their logic units, into the reducer the store runs.

pub mod root;
pub mod session;

pub use root::{root_reducer, RootReducer};
pub use session::SessionReducer;

//! Root reducer.

use crate::actions::AppAction;
use crate::config::ConsoleConfig;
use crate::environment::ConsoleEnvironment;
use crate::logic;
use crate::reducers::SessionReducer;
use crate::state::{AppState, Applications, Devices, SessionState, Users};
use console_store_core::composition::{
    combine_reducers, scope_reducer, CombinedReducer, SharedReducer,
};
use console_store_core::logic::with_logic;
use console_store_core::resource::{ResourceReducer, ResourceState};
use std::sync::Arc;

/// The reducer run by the console store.
pub type RootReducer = CombinedReducer<AppState, AppAction, ConsoleEnvironment>;

fn user_slice(state: &mut AppState) -> &mut Arc<SessionState> {
    &mut state.user
}

fn devices_slice(state: &mut AppState) -> &mut Arc<ResourceState<Devices>> {
    &mut state.devices
}

fn applications_slice(state: &mut AppState) -> &mut Arc<ResourceState<Applications>> {
    &mut state.applications
}

fn users_slice(state: &mut AppState) -> &mut Arc<ResourceState<Users>> {
    &mut state.users
}

/// Compose the session and collection reducers, with their logic, into one
/// reducer over [`AppState`].
///
/// Each slice only sees its own actions; the other slices keep their `Arc`.
/// Collections apply terminal actions according to `config.sequencing`.
#[must_use]
pub fn root_reducer(config: &ConsoleConfig) -> RootReducer {
    let sequencing = config.sequencing;

    let slices: Vec<SharedReducer<AppState, AppAction, ConsoleEnvironment>> = vec![
        Arc::new(scope_reducer(
            "user",
            user_slice,
            AppAction::into_session,
            AppAction::Session,
            with_logic(SessionReducer::new(), logic::session_logic()),
        )),
        Arc::new(scope_reducer(
            "devices",
            devices_slice,
            AppAction::into_devices,
            AppAction::Devices,
            with_logic(ResourceReducer::with_sequencing(sequencing), logic::devices_logic()),
        )),
        Arc::new(scope_reducer(
            "applications",
            applications_slice,
            AppAction::into_applications,
            AppAction::Applications,
            with_logic(
                ResourceReducer::with_sequencing(sequencing),
                logic::applications_logic(),
            ),
        )),
        Arc::new(scope_reducer(
            "users",
            users_slice,
            AppAction::into_users,
            AppAction::Users,
            with_logic(ResourceReducer::with_sequencing(sequencing), logic::users_logic()),
        )),
    ];

    combine_reducers(slices)
}

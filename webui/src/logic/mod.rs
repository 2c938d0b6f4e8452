//! Console logic units.
//!
//! Each unit reacts to one action kind of one slice. The bundles below are
//! what the root reducer attaches to each slice reducer.

pub mod collection;
pub mod session;

pub use collection::{FetchListLogic, ListSelector};
pub use session::{LogoutLogic, SessionFetchLogic};

use crate::actions::{ApplicationsAction, DevicesAction, SessionAction, UsersAction};
use crate::environment::ConsoleEnvironment;
use crate::providers::ListApi;
use crate::state::{Applications, Devices, Users};
use console_store_core::logic::SharedLogic;
use std::sync::Arc;

fn devices_api(env: &ConsoleEnvironment) -> &Arc<dyn ListApi<Devices>> {
    &env.devices
}

fn applications_api(env: &ConsoleEnvironment) -> &Arc<dyn ListApi<Applications>> {
    &env.applications
}

fn users_api(env: &ConsoleEnvironment) -> &Arc<dyn ListApi<Users>> {
    &env.users
}

/// Session lookup and logout.
#[must_use]
pub fn session_logic() -> Vec<SharedLogic<SessionAction, ConsoleEnvironment>> {
    vec![Arc::new(SessionFetchLogic), Arc::new(LogoutLogic)]
}

/// Devices list and search.
#[must_use]
pub fn devices_logic() -> Vec<SharedLogic<DevicesAction, ConsoleEnvironment>> {
    vec![
        Arc::new(FetchListLogic::list("devices_list", devices_api)),
        Arc::new(FetchListLogic::search("devices_search", devices_api)),
    ]
}

/// Applications list and search.
#[must_use]
pub fn applications_logic() -> Vec<SharedLogic<ApplicationsAction, ConsoleEnvironment>> {
    vec![
        Arc::new(FetchListLogic::list("applications_list", applications_api)),
        Arc::new(FetchListLogic::search("applications_search", applications_api)),
    ]
}

/// Users list and search.
#[must_use]
pub fn users_logic() -> Vec<SharedLogic<UsersAction, ConsoleEnvironment>> {
    vec![
        Arc::new(FetchListLogic::list("users_list", users_api)),
        Arc::new(FetchListLogic::search("users_search", users_api)),
    ]
}

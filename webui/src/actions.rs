//! Console actions.
//!
//! Collections use the generic [`ResourceAction`]; the session has its own
//! enum. [`AppAction`] wraps both so the store handles a single action type.

use crate::state::{Applications, DeviceQuery, Devices, ListQuery, User, Users};
use console_store_core::action::Action;
use console_store_core::resource::{CollectionKind, ResourceAction};
use std::fmt;

/// Actions of the devices collection
pub type DevicesAction = ResourceAction<Devices>;
/// Actions of the applications collection
pub type ApplicationsAction = ResourceAction<Applications>;
/// Actions of the users collection
pub type UsersAction = ResourceAction<Users>;

/// Session and logout actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Look up the current identity
    GetSession,
    /// The identity lookup returned a user
    GetSessionSuccess(User),
    /// The identity lookup was rejected; detail is not kept
    GetSessionFailure,
    /// End the session
    Logout,
    /// The backend confirmed the logout and local credentials were cleared
    LogoutSuccess,
    /// The logout call was rejected
    LogoutFailure,
}

/// Kinds of [`SessionAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKind {
    /// `GET_SESSION`
    GetSession,
    /// `GET_SESSION_SUCCESS`
    GetSessionSuccess,
    /// `GET_SESSION_FAILURE`
    GetSessionFailure,
    /// `LOGOUT`
    Logout,
    /// `LOGOUT_SUCCESS`
    LogoutSuccess,
    /// `LOGOUT_FAILURE`
    LogoutFailure,
}

impl SessionKind {
    /// Stable wire identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GetSession => "GET_SESSION",
            Self::GetSessionSuccess => "GET_SESSION_SUCCESS",
            Self::GetSessionFailure => "GET_SESSION_FAILURE",
            Self::Logout => "LOGOUT",
            Self::LogoutSuccess => "LOGOUT_SUCCESS",
            Self::LogoutFailure => "LOGOUT_FAILURE",
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Action for SessionAction {
    type Kind = SessionKind;

    fn kind(&self) -> SessionKind {
        match self {
            Self::GetSession => SessionKind::GetSession,
            Self::GetSessionSuccess(_) => SessionKind::GetSessionSuccess,
            Self::GetSessionFailure => SessionKind::GetSessionFailure,
            Self::Logout => SessionKind::Logout,
            Self::LogoutSuccess => SessionKind::LogoutSuccess,
            Self::LogoutFailure => SessionKind::LogoutFailure,
        }
    }
}

/// Every action the console store handles.
#[derive(Debug, Clone)]
pub enum AppAction {
    /// Session slice
    Session(SessionAction),
    /// Devices slice
    Devices(DevicesAction),
    /// Applications slice
    Applications(ApplicationsAction),
    /// Users slice
    Users(UsersAction),
}

impl AppAction {
    /// `GET_SESSION`
    #[must_use]
    pub const fn get_session() -> Self {
        Self::Session(SessionAction::GetSession)
    }

    /// `LOGOUT`
    #[must_use]
    pub const fn logout() -> Self {
        Self::Session(SessionAction::Logout)
    }

    /// `GET_DEVICES_LIST` with a fresh request id
    #[must_use]
    pub fn list_devices(query: DeviceQuery) -> Self {
        Self::Devices(ResourceAction::request(query))
    }

    /// `SEARCH_DEVICES_LIST` with a fresh request id
    #[must_use]
    pub fn search_devices(query: DeviceQuery) -> Self {
        Self::Devices(ResourceAction::search(query))
    }

    /// `GET_APPLICATIONS_LIST` with a fresh request id
    #[must_use]
    pub fn list_applications(query: ListQuery) -> Self {
        Self::Applications(ResourceAction::request(query))
    }

    /// `SEARCH_APPLICATIONS_LIST` with a fresh request id
    #[must_use]
    pub fn search_applications(query: ListQuery) -> Self {
        Self::Applications(ResourceAction::search(query))
    }

    /// `GET_USERS_LIST` with a fresh request id
    #[must_use]
    pub fn list_users(query: ListQuery) -> Self {
        Self::Users(ResourceAction::request(query))
    }

    /// `SEARCH_USERS_LIST` with a fresh request id
    #[must_use]
    pub fn search_users(query: ListQuery) -> Self {
        Self::Users(ResourceAction::search(query))
    }

    // Slice extractors, used by the root reducer

    /// The session action, if this is one
    #[must_use]
    pub fn into_session(self) -> Option<SessionAction> {
        match self {
            Self::Session(action) => Some(action),
            _ => None,
        }
    }

    /// The devices action, if this is one
    #[must_use]
    pub fn into_devices(self) -> Option<DevicesAction> {
        match self {
            Self::Devices(action) => Some(action),
            _ => None,
        }
    }

    /// The applications action, if this is one
    #[must_use]
    pub fn into_applications(self) -> Option<ApplicationsAction> {
        match self {
            Self::Applications(action) => Some(action),
            _ => None,
        }
    }

    /// The users action, if this is one
    #[must_use]
    pub fn into_users(self) -> Option<UsersAction> {
        match self {
            Self::Users(action) => Some(action),
            _ => None,
        }
    }
}

/// Kinds of [`AppAction`]; displays as the wrapped kind's wire identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppKind {
    /// A session kind
    Session(SessionKind),
    /// A devices kind
    Devices(CollectionKind<Devices>),
    /// An applications kind
    Applications(CollectionKind<Applications>),
    /// A users kind
    Users(CollectionKind<Users>),
}

impl fmt::Display for AppKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Session(kind) => kind.fmt(f),
            Self::Devices(kind) => kind.fmt(f),
            Self::Applications(kind) => kind.fmt(f),
            Self::Users(kind) => kind.fmt(f),
        }
    }
}

impl Action for AppAction {
    type Kind = AppKind;

    fn kind(&self) -> AppKind {
        match self {
            Self::Session(action) => AppKind::Session(action.kind()),
            Self::Devices(action) => AppKind::Devices(action.kind()),
            Self::Applications(action) => AppKind::Applications(action.kind()),
            Self::Users(action) => AppKind::Users(action.kind()),
        }
    }
}

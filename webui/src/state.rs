//! Console state types.
//!
//! Domain entities returned by the API, the collection markers that bind them
//! to the generic resource state machine, and the composed [`AppState`] tree.

use crate::error::ApiError;
use chrono::{DateTime, Utc};
use console_store_core::resource::{Resource, ResourceState};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ═══════════════════════════════════════════════════════════════════════
// Entities
// ═══════════════════════════════════════════════════════════════════════

/// An authenticated identity, as returned by the identity lookup calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user id
    pub user_id: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Primary email address
    #[serde(default)]
    pub primary_email_address: Option<String>,
    /// Whether the user is an administrator
    #[serde(default)]
    pub admin: bool,
}

impl User {
    /// Create a user with only an id.
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: None,
            primary_email_address: None,
            admin: false,
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// An application owning end devices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    /// Unique application id
    pub application_id: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// An end device registered in an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Owning application id
    pub application_id: String,
    /// Device id, unique within the application
    pub device_id: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Hex-encoded DevEUI
    #[serde(default)]
    pub dev_eui: Option<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

// ═══════════════════════════════════════════════════════════════════════
// Queries
// ═══════════════════════════════════════════════════════════════════════

/// Paging, search and ordering parameters of a list call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// 1-based page number
    pub page: u32,
    /// Items per page
    pub limit: u32,
    /// Search text; present for search requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Field to order by, `-` prefixed for descending
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

impl ListQuery {
    /// Query for one page.
    #[must_use]
    pub const fn page(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            search: None,
            order: None,
        }
    }

    /// Filter by search text.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Order by a field.
    #[must_use]
    pub fn ordered_by(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }
}

/// Devices are listed per application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceQuery {
    /// Application whose devices are listed
    pub application_id: String,
    /// Paging and search
    #[serde(flatten)]
    pub list: ListQuery,
}

impl DeviceQuery {
    /// Query the devices of `application_id`.
    #[must_use]
    pub fn new(application_id: impl Into<String>, list: ListQuery) -> Self {
        Self {
            application_id: application_id.into(),
            list,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Collections
// ═══════════════════════════════════════════════════════════════════════

/// End devices of an application.
#[derive(Debug)]
pub struct Devices;

impl Resource for Devices {
    const NAME: &'static str = "DEVICES";
    type Item = Device;
    type Query = DeviceQuery;
    type Error = ApiError;
}

/// Applications visible to the user.
#[derive(Debug)]
pub struct Applications;

impl Resource for Applications {
    const NAME: &'static str = "APPLICATIONS";
    type Item = Application;
    type Query = ListQuery;
    type Error = ApiError;
}

/// Users, as listed for administrators.
#[derive(Debug)]
pub struct Users;

impl Resource for Users {
    const NAME: &'static str = "USERS";
    type Item = User;
    type Query = ListQuery;
    type Error = ApiError;
}

// ═══════════════════════════════════════════════════════════════════════
// State tree
// ═══════════════════════════════════════════════════════════════════════

/// Session singleton: who is logged in.
///
/// `user == None` means unauthenticated, including after a failed lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// An identity lookup is in flight
    pub fetching: bool,
    /// A logout call is in flight
    pub logging_out: bool,
    /// The authenticated identity
    pub user: Option<User>,
}

impl SessionState {
    /// Whether an identity is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            fetching: true,
            logging_out: false,
            user: None,
        }
    }
}

/// The composed console state.
///
/// Every slice sits behind an `Arc`: cloning the tree is a cheap snapshot, and
/// a slice keeps its pointer identity until an action addressed to it
/// arrives, so observers can detect change with [`Arc::ptr_eq`].
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Session slice (`"user"`)
    pub user: Arc<SessionState>,
    /// Devices slice (`"devices"`)
    pub devices: Arc<ResourceState<Devices>>,
    /// Applications slice (`"applications"`)
    pub applications: Arc<ResourceState<Applications>>,
    /// Users slice (`"users"`)
    pub users: Arc<ResourceState<Users>>,
}

/// Which slices differ between two snapshots, by pointer identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangedSlices {
    /// Session slice changed
    pub user: bool,
    /// Devices slice changed
    pub devices: bool,
    /// Applications slice changed
    pub applications: bool,
    /// Users slice changed
    pub users: bool,
}

impl AppState {
    /// Compare slice identities with an earlier snapshot.
    #[must_use]
    pub fn changed_since(&self, earlier: &Self) -> ChangedSlices {
        ChangedSlices {
            user: !Arc::ptr_eq(&self.user, &earlier.user),
            devices: !Arc::ptr_eq(&self.devices, &earlier.devices),
            applications: !Arc::ptr_eq(&self.applications, &earlier.applications),
            users: !Arc::ptr_eq(&self.users, &earlier.users),
        }
    }
}

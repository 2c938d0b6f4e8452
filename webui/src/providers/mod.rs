//! Console collaborators.
//!
//! The logic units depend on these traits only; the page wires in HTTP
//! clients, tests wire in the mocks from [`crate::mocks`].
//!
//! # Dyn Compatibility
//!
//! Calls return `Pin<Box<dyn Future>>` rather than `impl Future` so the
//! environment can hold them as `Arc<dyn ...>` and pick one at runtime
//! (console or OAuth identity surface).

use crate::error::Result;
use std::future::Future;
use std::pin::Pin;

pub mod account;
pub mod credentials;
pub mod list;

pub use account::AccountApi;
pub use credentials::{CredentialStore, InMemoryCredentialStore};
pub use list::ListApi;

/// Boxed future returned by every collaborator call.
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

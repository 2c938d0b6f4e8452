//! Mock identity surface.

use super::lock;
use crate::error::{ApiError, Result};
use crate::providers::{AccountApi, ApiFuture};
use crate::state::User;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock identity surface.
///
/// Answers `me` and `logout` with scripted results and counts the calls.
#[derive(Debug, Clone)]
pub struct MockAccountApi {
    me: Arc<Mutex<Result<User>>>,
    logout: Arc<Mutex<Result<()>>>,
    me_calls: Arc<AtomicUsize>,
    logout_calls: Arc<AtomicUsize>,
}

impl MockAccountApi {
    /// Nobody logged in; logout succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            me: Arc::new(Mutex::new(Err(ApiError::Unauthenticated))),
            logout: Arc::new(Mutex::new(Ok(()))),
            me_calls: Arc::new(AtomicUsize::new(0)),
            logout_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// `user` is logged in.
    #[must_use]
    pub fn authenticated(user: User) -> Self {
        let api = Self::new();
        api.set_me(Ok(user));
        api
    }

    /// Script the result of `me`.
    pub fn set_me(&self, result: Result<User>) {
        *lock(&self.me) = result;
    }

    /// Script the result of `logout`.
    pub fn set_logout(&self, result: Result<()>) {
        *lock(&self.logout) = result;
    }

    /// Number of `me` calls so far.
    #[must_use]
    pub fn me_calls(&self) -> usize {
        self.me_calls.load(Ordering::SeqCst)
    }

    /// Number of `logout` calls so far.
    #[must_use]
    pub fn logout_calls(&self) -> usize {
        self.logout_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockAccountApi {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountApi for MockAccountApi {
    fn me(&self) -> ApiFuture<'_, User> {
        self.me_calls.fetch_add(1, Ordering::SeqCst);
        let result = lock(&self.me).clone();
        Box::pin(async move { result })
    }

    fn logout(&self) -> ApiFuture<'_, ()> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        let result = lock(&self.logout).clone();
        Box::pin(async move { result })
    }
}

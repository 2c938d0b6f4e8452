//! Mock collection listing.

use super::lock;
use crate::error::{ApiError, Result};
use crate::providers::{ApiFuture, ListApi};
use console_store_core::resource::{Page, Resource};
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

struct Scripted<R: Resource> {
    result: Result<Page<R::Item>>,
    delay: Duration,
}

/// Mock listing for collection `R`.
///
/// Answers calls from a queue of scripted responses, each optionally
/// delayed; once the queue is empty every call gets an empty page. Every
/// query received is recorded.
pub struct MockListApi<R: Resource> {
    responses: Arc<Mutex<VecDeque<Scripted<R>>>>,
    queries: Arc<Mutex<Vec<R::Query>>>,
}

impl<R: Resource> MockListApi<R> {
    /// Create a mock with nothing scripted.
    #[must_use]
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answer the next call with `page`.
    pub fn respond(&self, page: Page<R::Item>) -> &Self {
        self.script(Ok(page), Duration::ZERO)
    }

    /// Answer the next call with `page` after `delay`.
    pub fn respond_after(&self, page: Page<R::Item>, delay: Duration) -> &Self {
        self.script(Ok(page), delay)
    }

    /// Reject the next call with `error`.
    pub fn fail(&self, error: ApiError) -> &Self {
        self.script(Err(error), Duration::ZERO)
    }

    /// Reject the next call with `error` after `delay`.
    pub fn fail_after(&self, error: ApiError, delay: Duration) -> &Self {
        self.script(Err(error), delay)
    }

    fn script(&self, result: Result<Page<R::Item>>, delay: Duration) -> &Self {
        lock(&self.responses).push_back(Scripted { result, delay });
        self
    }

    /// Queries received so far, in call order.
    #[must_use]
    pub fn queries(&self) -> Vec<R::Query> {
        lock(&self.queries).clone()
    }

    /// Number of calls so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        lock(&self.queries).len()
    }
}

impl<R: Resource> Default for MockListApi<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> Clone for MockListApi<R> {
    fn clone(&self) -> Self {
        Self {
            responses: Arc::clone(&self.responses),
            queries: Arc::clone(&self.queries),
        }
    }
}

impl<R: Resource> fmt::Debug for MockListApi<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockListApi")
            .field("resource", &R::NAME)
            .field("scripted", &lock(&self.responses).len())
            .field("calls", &self.calls())
            .finish()
    }
}

impl<R: Resource> ListApi<R> for MockListApi<R> {
    fn list(&self, query: R::Query) -> ApiFuture<'_, Page<R::Item>> {
        lock(&self.queries).push(query);
        let scripted = lock(&self.responses).pop_front();

        Box::pin(async move {
            let Some(Scripted { result, delay }) = scripted else {
                return Ok(Page::new(Vec::new(), 0));
            };
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            result
        })
    }
}

//! Prometheus metrics for the store and its logic units.
//!
//! The store records dispatch and effect metrics inline; logic units record
//! invocations and failures through [`LogicMetrics`]. [`MetricsRecorder`]
//! installs the Prometheus recorder and renders the text exposition; serving
//! it over HTTP is left to the embedding application.
//!
//! # Example
//!
//! ```rust,no_run
//! use console_store_runtime::metrics::MetricsRecorder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut recorder = MetricsRecorder::new();
//! recorder.start()?;
//!
//! if let Some(rendered) = recorder.render() {
//!     println!("{rendered}");
//! }
//! # Ok(())
//! # }
//! ```

use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use thiserror::Error;

pub use metrics::{counter, histogram};

/// Errors from metrics operations.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Failed to build metrics exporter
    #[error("Failed to build metrics exporter: {0}")]
    Build(String),
    /// Failed to install metrics exporter
    #[error("Failed to install metrics exporter: {0}")]
    Install(String),
}

/// Prometheus metrics recorder with a render handle.
#[derive(Default)]
pub struct MetricsRecorder {
    handle: Option<PrometheusHandle>,
}

impl MetricsRecorder {
    /// Create a recorder that is not installed yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { handle: None }
    }

    /// Describe all metrics and install the Prometheus recorder.
    ///
    /// # Errors
    ///
    /// Returns error if the exporter cannot be built or installed. A recorder
    /// that is already installed (e.g. by another test) is not an error.
    pub fn start(&mut self) -> Result<(), MetricsError> {
        describe_metrics();

        let builder = PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Suffix("duration_seconds".to_string()),
                &[0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0],
            )
            .map_err(|e| MetricsError::Build(e.to_string()))?;

        match builder.install_recorder() {
            Ok(handle) => {
                self.handle = Some(handle);
                tracing::info!("Metrics recorder installed");
                Ok(())
            },
            Err(e) => {
                let err_msg = e.to_string();
                if err_msg.contains("already initialized") {
                    tracing::warn!("Metrics recorder already initialized, skipping re-initialization");
                    Ok(())
                } else {
                    Err(MetricsError::Install(err_msg))
                }
            },
        }
    }

    /// Get the metrics handle for rendering.
    #[must_use]
    pub const fn handle(&self) -> Option<&PrometheusHandle> {
        self.handle.as_ref()
    }

    /// Render current metrics in Prometheus format.
    ///
    /// Returns `None` if this recorder was not the one installed.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        self.handle.as_ref().map(PrometheusHandle::render)
    }
}

/// Register descriptions for every metric the store and logic units emit.
pub fn describe_metrics() {
    // Store
    describe_counter!("store.commands.total", "Total number of actions dispatched");
    describe_histogram!(
        "store.reducer.duration_seconds",
        "Time spent reducing one action"
    );
    describe_counter!(
        "store.effects.executed",
        "Effects executed, labelled by effect type"
    );
    describe_counter!("store.shutdown.initiated", "Graceful shutdowns started");
    describe_counter!(
        "store.shutdown.completed",
        "Graceful shutdowns that drained every effect"
    );
    describe_counter!(
        "store.shutdown.timeout",
        "Graceful shutdowns that gave up with effects still running"
    );
    describe_counter!(
        "store.shutdown.rejected_actions",
        "Actions rejected because the store was shutting down"
    );

    // Logic units
    describe_counter!(
        "logic.invocations",
        "Logic unit invocations, labelled by logic name"
    );
    describe_counter!(
        "logic.failures",
        "Collaborator rejections turned into failure actions, labelled by logic name"
    );
}

/// Logic unit metrics recorder.
pub struct LogicMetrics;

impl LogicMetrics {
    /// Record that a logic unit was invoked.
    pub fn record_invocation(logic: &'static str) {
        counter!("logic.invocations", "logic" => logic).increment(1);
    }

    /// Record that a logic unit's collaborator rejected.
    pub fn record_failure(logic: &'static str) {
        counter!("logic.failures", "logic" => logic).increment(1);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can unwrap
mod tests {
    use super::*;

    #[test]
    fn test_recorder_renders_nothing_before_start() {
        let recorder = MetricsRecorder::new();
        assert!(recorder.handle().is_none());
        assert!(recorder.render().is_none());
    }

    #[test]
    fn test_logic_metrics_are_rendered() {
        let mut recorder = MetricsRecorder::default();
        recorder.start().unwrap();

        LogicMetrics::record_invocation("session_fetch");
        LogicMetrics::record_failure("session_fetch");

        // Another test may have installed the recorder first
        if let Some(rendered) = recorder.render() {
            assert!(rendered.contains("logic_invocations"));
            assert!(rendered.contains("logic_failures"));
        }
    }
}

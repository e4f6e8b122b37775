//! Metrics definitions for the discovery read path.
//!
//! All metrics follow Prometheus naming conventions:
//! - `dp_` prefix for the discovery provider
//! - `_total` suffix for counters
//! - `_seconds` suffix for duration histograms
//!
//! # Cardinality
//!
//! Labels are bounded to prevent cardinality explosion:
//! - `operation`: bounded by code (get_users_by_primary_node, ...)
//! - `status`: 2 values (success, error)

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

/// Initialize Prometheus metrics recorder and return the handle for serving
/// metrics via HTTP.
///
/// Must be called before any metrics are recorded. Histogram buckets are
/// aligned with the read-path SLO target of p99 < 50ms per query.
///
/// # Errors
///
/// Returns error if the Prometheus recorder fails to install (e.g., already
/// installed).
pub fn init_metrics_recorder() -> Result<PrometheusHandle, String> {
    PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Prefix("dp_db_query".to_string()),
            &[
                0.001, 0.002, 0.005, 0.010, 0.020, 0.050, 0.100, 0.250, 0.500, 1.000,
            ],
        )
        .map_err(|e| format!("Failed to set DB query buckets: {e}"))?
        .install_recorder()
        .map_err(|e| format!("Failed to install Prometheus recorder: {e}"))
}

/// Record a database query's duration and outcome.
///
/// Metric: `dp_db_queries_total`, `dp_db_query_duration_seconds`
/// Labels: `operation`, `status`
pub fn record_db_query(operation: &str, status: &str, duration: Duration) {
    histogram!("dp_db_query_duration_seconds",
        "operation" => operation.to_string(),
        "status" => status.to_string()
    )
    .record(duration.as_secs_f64());

    counter!("dp_db_queries_total",
        "operation" => operation.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

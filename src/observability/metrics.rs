//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_upstream_requests_total` (counter): upstream calls by status
//! - `gateway_upstream_duration_seconds` (histogram): upstream call latency
//!
//! # Design Decisions
//! - Labeled by status only; endpoint paths carry interpolated identifiers
//!   and would blow up label cardinality
//! - Status 0 means the call failed before any response was received
//! - Recording without an installed exporter is a no-op, so tests and the
//!   metrics-disabled path need no special handling

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one upstream forward and its outcome.
pub fn record_upstream(status: u16, start: Instant) {
    let status_label = status.to_string();
    counter!("gateway_upstream_requests_total", "status" => status_label.clone()).increment(1);
    histogram!("gateway_upstream_duration_seconds", "status" => status_label)
        .record(start.elapsed().as_secs_f64());
}

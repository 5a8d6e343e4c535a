//! Metrics collection and exposition.
//!
//! # Metrics
//! - `resource_router_requests_total` (counter): dispatched requests by
//!   method, route pattern and status
//! - `resource_router_request_duration_seconds` (histogram): time spent in
//!   the handler chain
//!
//! Without an installed recorder the macros are no-ops, so the library can
//! record unconditionally.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener on `addr`.
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one dispatched request.
pub fn record_request(method: &'static str, route: &str, status: u16, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("route", route.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!("resource_router_requests_total", &labels).increment(1);
    metrics::histogram!("resource_router_request_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}

//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Router building:
//!     → tracing events (resource tables, grouping, registration)
//!
//! Dispatch (routing::base):
//!     → metrics.rs (request counter + latency histogram per route pattern)
//!     → tracing events with request id (set by http::request)
//!
//! Consumers:
//!     → stdout (tracing-subscriber fmt layer)
//!     → Prometheus scrape endpoint (optional)
//! ```

pub mod logging;
pub mod metrics;

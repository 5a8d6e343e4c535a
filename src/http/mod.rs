//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum::serve, graceful shutdown)
//!     → request.rs (x-request-id assigned / propagated)
//!     → TraceLayer, TimeoutLayer
//!     → ResourceRouter::middleware() (routing::base dispatch)
//!     → handler chain
//! ```

pub mod request;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::HttpServer;

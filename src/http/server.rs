//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Wrap the router's dispatch service with the ambient middleware
//!   (request id, tracing, timeout)
//! - Bind to a listener and serve until shutdown is signalled

use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::http::request::{UuidRequestId, X_REQUEST_ID};

/// HTTP server for a dispatch service.
pub struct HttpServer {
    app: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Wrap `routes` (typically `ResourceRouter::middleware()`) with the
    /// server middleware stack.
    pub fn new(config: ServerConfig, routes: Router) -> Self {
        let app = Self::build_router(&config, routes);
        Self { app, config }
    }

    /// Apply the middleware layers. Outermost first: request id, trace,
    /// id propagation, timeout.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, routes: Router) -> Router {
        routes.layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
                .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs))),
        )
    }

    /// The fully layered application, for in-process use.
    pub fn app(&self) -> Router {
        self.app.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Serve on `listener` until `shutdown` fires (or its sender is dropped).
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

//! `resource-router` — serves the demo resource API.
//!
//! ```text
//! resource-router [--config router.toml] [--print-routes]
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use resource_router::config::{load_config, AppConfig};
use resource_router::demo;
use resource_router::http::HttpServer;
use resource_router::lifecycle::{signals, Shutdown};
use resource_router::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "resource-router")]
#[command(about = "RESTful resource routes served over axum", long_about = None)]
struct Cli {
    /// TOML configuration file; built-in defaults when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the registered route table and exit.
    #[arg(long)]
    print_routes: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    logging::init_tracing(&config.observability.log_level);
    tracing::info!("resource-router v{} starting", env!("CARGO_PKG_VERSION"));

    let router = demo::build_router(config.router.clone());

    if cli.print_routes {
        for line in demo::render_routes(router.routes()) {
            println!("{line}");
        }
        return Ok(());
    }

    tracing::info!(
        bind_address = %config.server.bind_address,
        prefix = %config.router.prefix,
        request_timeout_secs = config.server.request_timeout_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.server.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(signals::shutdown_on_signal(shutdown.clone()));

    let server = HttpServer::new(config.server.clone(), router.middleware());
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

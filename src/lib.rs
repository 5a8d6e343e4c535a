//! RESTful resource routing on top of axum.
//!
//! A [`ResourceRouter`] expands a resource name and a [`Controller`] into the
//! seven canonical routes (index, new, create, show, edit, update, remove),
//! keeps them in its `routes` / `resources` registries, nests resources with
//! [`group`](routing::group()), and hands the registry to its base router for
//! dispatch.
//!
//! ```no_run
//! use resource_router::config::ResourceOptions;
//! use resource_router::routing::{Controller, Handler, ResourceRouter};
//!
//! let mut router = ResourceRouter::new();
//! let cats = Controller::new().action("index", Handler::endpoint(|_req| async { "all cats" }));
//! router.resource("cats", cats, ResourceOptions::new());
//! let app: axum::Router = router.middleware();
//! ```

pub mod config;
pub mod demo;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::{AppConfig, ResourceOptions, RouterOptions};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{Controller, Handler, ResourceRouter, ResourceTable, RouteDescriptor, Verb};

//! The base router capability.
//!
//! # Responsibilities
//! - Construct single route descriptors (path composition, prefixing)
//! - Turn a descriptor registry into a dispatchable service
//!
//! # Design Decisions
//! - The resource layer holds a `BaseRouter` by composition; table building
//!   and grouping never touch axum directly
//! - Descriptors sharing a (verb, path) are merged into one handler chain in
//!   registration order, so every matching layer runs
//! - `:name` placeholders are rewritten to axum's `{name}` syntax only at
//!   dispatch-build time

use std::sync::Arc;
use std::time::Instant;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::routing::MethodRouter;

use crate::observability::metrics;
use crate::routing::handler::{Handler, Next};
use crate::routing::route::RouteDescriptor;
use crate::routing::verb::Verb;

/// Route construction and dispatch primitives the resource layer builds on.
pub trait BaseRouter {
    /// The dispatchable service produced from a registry.
    type Service;

    /// Prefix applied to every descriptor this base constructs.
    fn prefix(&self) -> &str;

    /// Construct one descriptor for `path` under this base's prefix.
    fn create_route(&self, verb: Verb, path: &str, handlers: Vec<Handler>) -> RouteDescriptor;

    /// Build a service dispatching `routes`.
    fn middleware(&self, routes: &[RouteDescriptor]) -> Self::Service;
}

/// Base router backed by `axum::Router`.
#[derive(Debug, Clone, Default)]
pub struct AxumBase {
    prefix: String,
}

impl AxumBase {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl BaseRouter for AxumBase {
    type Service = axum::Router;

    fn prefix(&self) -> &str {
        &self.prefix
    }

    fn create_route(&self, verb: Verb, path: &str, handlers: Vec<Handler>) -> RouteDescriptor {
        RouteDescriptor::new(verb, path, self.prefix.as_str(), handlers)
    }

    fn middleware(&self, routes: &[RouteDescriptor]) -> axum::Router {
        let mut router = axum::Router::new();

        for (path, verbs) in merge_chains(routes) {
            let mut method_router: MethodRouter = MethodRouter::new();
            for (verb, chain) in verbs {
                let chain: Arc<[Handler]> = chain.into();
                let pattern = path.clone();
                method_router = method_router.on(verb.method_filter(), move |req: Request<Body>| {
                    dispatch(Arc::clone(&chain), verb, pattern.clone(), req)
                });
            }
            tracing::debug!(path = %path, "Mounted route");
            router = router.route(&axum_path(&path), method_router);
        }

        router
    }
}

type VerbChains = Vec<(Verb, Vec<Handler>)>;

/// Group descriptors by full path, then by verb, concatenating handler
/// chains. First-seen order is kept at both levels.
fn merge_chains(routes: &[RouteDescriptor]) -> Vec<(String, VerbChains)> {
    let mut merged: Vec<(String, VerbChains)> = Vec::new();

    for route in routes {
        let index = match merged.iter().position(|(p, _)| p == route.full_path()) {
            Some(i) => i,
            None => {
                merged.push((route.full_path().to_string(), Vec::new()));
                merged.len() - 1
            }
        };
        let verbs = &mut merged[index].1;
        match verbs.iter_mut().find(|(v, _)| *v == route.verb()) {
            Some((_, chain)) => chain.extend_from_slice(route.handlers()),
            None => verbs.push((route.verb(), route.handlers().to_vec())),
        }
    }

    merged
}

/// Rewrite `:name` segments into axum's `{name}` captures.
pub fn axum_path(pattern: &str) -> String {
    if pattern.is_empty() {
        return "/".to_string();
    }
    pattern
        .split('/')
        .map(|segment| match segment.strip_prefix(':') {
            Some(name) if !name.is_empty() => format!("{{{name}}}"),
            _ => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

async fn dispatch(chain: Arc<[Handler]>, verb: Verb, pattern: String, req: Request<Body>) -> Response {
    let start = Instant::now();
    let response = Next::new(chain).run(req).await;
    let status = response.status().as_u16();

    metrics::record_request(verb.as_str(), &pattern, status, start);
    tracing::debug!(
        method = %verb,
        route = %pattern,
        status,
        elapsed_us = start.elapsed().as_micros() as u64,
        "Dispatched request"
    );

    response
}

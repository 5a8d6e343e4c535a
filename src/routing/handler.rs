//! Handler chains.
//!
//! A route descriptor carries an ordered chain of [`Handler`]s. Each handler
//! receives the request and a [`Next`] continuation; calling
//! [`Next::run`] passes control to the following handler in the chain.
//! Running past the end of the chain yields `404 Not Found`.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use futures_util::future::BoxFuture;

type HandlerFn = dyn Fn(Request<Body>, Next) -> BoxFuture<'static, Response> + Send + Sync;

/// A single step in a route's handler chain.
///
/// Cloning is cheap; clones compare equal to the original.
#[derive(Clone)]
pub struct Handler {
    inner: Arc<HandlerFn>,
}

impl Handler {
    /// Handler that may call `next` to continue the chain.
    pub fn middleware<F, Fut>(f: F) -> Self
    where
        F: Fn(Request<Body>, Next) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        Self {
            inner: Arc::new(move |req: Request<Body>, next: Next| -> BoxFuture<'static, Response> {
                Box::pin(f(req, next))
            }),
        }
    }

    /// Terminal handler that always produces the response itself.
    pub fn endpoint<F, Fut, R>(f: F) -> Self
    where
        F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse,
    {
        Self::middleware(move |req, _next| {
            let fut = f(req);
            async move { fut.await.into_response() }
        })
    }

    /// Responds `501 Not Implemented`. Stands in for controller actions
    /// that were not supplied.
    pub fn not_implemented() -> Self {
        Self::endpoint(|_req| async { StatusCode::NOT_IMPLEMENTED })
    }

    /// Invoke this handler.
    pub async fn call(&self, req: Request<Body>, next: Next) -> Response {
        (self.inner)(req, next).await
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &Handler) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("ptr", &Arc::as_ptr(&self.inner).cast::<()>())
            .finish()
    }
}

/// Continuation into the remainder of a handler chain.
#[derive(Clone)]
pub struct Next {
    chain: Arc<[Handler]>,
    index: usize,
}

impl Next {
    /// Continuation positioned at the start of `chain`.
    pub fn new(chain: Arc<[Handler]>) -> Self {
        Self { chain, index: 0 }
    }

    /// Number of handlers still to run.
    pub fn remaining(&self) -> usize {
        self.chain.len().saturating_sub(self.index)
    }

    /// Run the next handler, or respond 404 if the chain is exhausted.
    pub async fn run(self, req: Request<Body>) -> Response {
        let Some(handler) = self.chain.get(self.index).cloned() else {
            return StatusCode::NOT_FOUND.into_response();
        };
        let next = Next {
            chain: self.chain,
            index: self.index + 1,
        };
        handler.call(req, next).await
    }
}

impl fmt::Debug for Next {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Next")
            .field("remaining", &self.remaining())
            .finish()
    }
}

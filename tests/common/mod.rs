//! Shared helpers for integration tests.

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, Response, StatusCode};
use resource_router::routing::{Action, Controller, Handler};

/// Endpoint answering `200` with `body`.
pub fn text(body: &'static str) -> Handler {
    Handler::endpoint(move |_req| async move { body })
}

/// Controller whose every canonical action answers with its own name.
pub fn named_controller() -> Controller {
    Action::ALL.iter().fold(Controller::new(), |c, action| {
        c.action(action.name(), text(action.name()))
    })
}

pub fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Status and UTF-8 body of a response.
pub async fn read(res: Response<Body>) -> (StatusCode, String) {
    let status = res.status();
    let bytes = to_bytes(res.into_body(), 1024 * 1024).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

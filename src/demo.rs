//! Demo API served by the `resource-router` binary.
//!
//! ```text
//! GET    /                                        service info
//! *      /companies[/...]                         company actions (remove → 501)
//! *      /companies/:company/departments/...      departments grouped under companies
//! ```
//!
//! Every handler answers with a JSON description of the action it served
//! and the path parameters axum captured.

use axum::body::Body;
use axum::extract::{FromRequestParts, RawPathParams};
use axum::http::Request;
use axum::Json;
use serde_json::{json, Map, Value};

use crate::config::{ResourceOptions, RouterOptions};
use crate::routing::{Action, BaseRouter, Controller, Handler, ResourceRouter, RouteDescriptor};

/// Build the demo router from `options`.
pub fn build_router(options: RouterOptions) -> ResourceRouter {
    let mut router = ResourceRouter::with_options(options);

    let service = Controller::new().action(
        "index",
        Handler::endpoint(|_req| async {
            Json(json!({
                "service": "resource-router",
                "version": env!("CARGO_PKG_VERSION"),
            }))
        }),
    );
    router.root_resource(service, ResourceOptions::new());

    let company_actions = [
        Action::Index,
        Action::New,
        Action::Create,
        Action::Show,
        Action::Edit,
        Action::Update,
    ];
    let company_controller = describing_controller(&router, "companies", &company_actions);
    let companies = router.create_resource("company", company_controller, ResourceOptions::new());

    let department_controller = describing_controller(&router, "departments", &Action::ALL);
    let departments = router.create_resource("department", department_controller, ResourceOptions::new());

    let nested = router.group(&companies, &[&departments[..]]);
    router.add_resource(&companies).add_routes(&[&nested[..]]);

    tracing::info!(
        prefix = %router.base().prefix(),
        routes = router.routes().len(),
        resources = router.resources().len(),
        "Demo router built"
    );
    router
}

/// Controller whose handlers describe the request they served. Keys follow
/// the router's current action map.
fn describing_controller(router: &ResourceRouter, resource: &'static str, actions: &[Action]) -> Controller {
    actions.iter().fold(Controller::new(), |controller, &action| {
        let key = router.options().map.resolve(action).to_string();
        controller.action(
            key,
            Handler::endpoint(move |req| describe(resource, action, req)),
        )
    })
}

async fn describe(resource: &'static str, action: Action, req: Request<Body>) -> Json<Value> {
    let (mut parts, _body) = req.into_parts();
    let params: Map<String, Value> = match RawPathParams::from_request_parts(&mut parts, &()).await {
        Ok(raw) => raw
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect(),
        Err(_) => Map::new(),
    };

    Json(json!({
        "resource": resource,
        "action": action.name(),
        "method": parts.method.as_str(),
        "path": parts.uri.path(),
        "params": params,
    }))
}

/// One line per descriptor: verb, full path, handler count.
pub fn render_routes(routes: &[RouteDescriptor]) -> Vec<String> {
    routes
        .iter()
        .map(|r| {
            let action = r.action().map(|a| a.name()).unwrap_or("-");
            format!(
                "{:<7} {:<56} {:<7} {} handler(s)",
                r.verb().as_str(),
                r.full_path(),
                action,
                r.handlers().len()
            )
        })
        .collect()
}

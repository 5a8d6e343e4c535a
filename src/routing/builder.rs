//! Resource table construction.
//!
//! Expands a resource name and a controller into the seven canonical
//! descriptors. Verb and controller-key resolution go through the router's
//! current [`RouterOptions`]; descriptor construction goes through the
//! [`BaseRouter`].

use crate::config::RouterOptions;
use crate::routing::action::Action;
use crate::routing::base::BaseRouter;
use crate::routing::controller::Controller;
use crate::routing::inflect::Inflector;
use crate::routing::route::{ResourceTable, ROOT_NAME};

/// Name of the resource being expanded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResourceName {
    /// Routes live directly under the prefix (`/`, `/new`, `/:id`, ...).
    #[default]
    Root,
    Named(String),
}

impl ResourceName {
    /// Collection segment and member placeholder, e.g. `("cats", ":cat")`.
    pub fn segments(&self, inflector: &dyn Inflector) -> (String, String) {
        match self {
            ResourceName::Root => (String::new(), ":id".to_string()),
            ResourceName::Named(name) => {
                let route = inflector.pluralize(name);
                let param = format!(":{}", inflector.singularize(&route));
                (route, param)
            }
        }
    }
}

impl From<&str> for ResourceName {
    fn from(name: &str) -> Self {
        let trimmed = name.trim().trim_matches('/');
        if trimmed.is_empty() {
            ResourceName::Root
        } else {
            ResourceName::Named(trimmed.to_string())
        }
    }
}

impl From<String> for ResourceName {
    fn from(name: String) -> Self {
        ResourceName::from(name.as_str())
    }
}

impl From<&String> for ResourceName {
    fn from(name: &String) -> Self {
        ResourceName::from(name.as_str())
    }
}

impl From<Option<&str>> for ResourceName {
    fn from(name: Option<&str>) -> Self {
        name.map(ResourceName::from).unwrap_or_default()
    }
}

/// Build the table for `name` without registering it anywhere.
pub fn build_resource_table<B: BaseRouter>(
    base: &B,
    inflector: &dyn Inflector,
    options: &RouterOptions,
    name: &ResourceName,
    controller: Controller,
) -> ResourceTable {
    let (route, param) = name.segments(inflector);

    if controller.is_empty() {
        tracing::debug!(resource = %route, "No controller actions, every route answers 501");
    } else {
        let missing: Vec<&str> = Action::ALL
            .iter()
            .map(|&a| options.map.resolve(a))
            .filter(|key| !controller.contains(key))
            .collect();
        if !missing.is_empty() {
            tracing::debug!(resource = %route, ?missing, "Controller actions missing, answering 501");
        }
    }

    let defaults = Controller::not_implemented(Action::ALL.map(|a| options.map.resolve(a).to_string()));
    let controller = defaults.overlay(controller);

    let routes = Action::ALL.map(|action| {
        let verb = options.methods.resolve(action.verb_key());
        let key = options.map.resolve(action);
        let handlers = controller.get(key).map(<[_]>::to_vec).unwrap_or_default();
        base.create_route(verb, &action.path_pattern(&route, &param), handlers)
            .with_action(action)
    });

    let table_name = if route.is_empty() { ROOT_NAME } else { route.as_str() };
    ResourceTable::new(table_name, routes)
}

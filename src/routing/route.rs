//! Route descriptors and resource tables.

use std::ops::Deref;

use crate::routing::action::Action;
use crate::routing::handler::Handler;
use crate::routing::verb::Verb;

/// Name given to tables built for the root resource.
pub const ROOT_NAME: &str = "/";

/// One (verb, path, handler chain) binding.
#[derive(Debug, Clone)]
pub struct RouteDescriptor {
    verb: Verb,
    route_path: String,
    full_path: String,
    prefix: String,
    action: Option<Action>,
    handlers: Vec<Handler>,
}

impl RouteDescriptor {
    /// Build a descriptor; `full_path` is `route_path` under `prefix`.
    pub fn new(
        verb: Verb,
        route_path: impl Into<String>,
        prefix: impl Into<String>,
        handlers: Vec<Handler>,
    ) -> Self {
        let route_path = route_path.into();
        let prefix = prefix.into();
        let full_path = join_paths(&prefix, &route_path);
        Self {
            verb,
            route_path,
            full_path,
            prefix,
            action: None,
            handlers,
        }
    }

    /// Tag the descriptor with the resource action it serves.
    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn verb(&self) -> Verb {
        self.verb
    }

    /// Pattern relative to the prefix.
    pub fn route_path(&self) -> &str {
        &self.route_path
    }

    /// Pattern including the prefix; this is what gets dispatched.
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn action(&self) -> Option<Action> {
        self.action
    }

    pub fn handlers(&self) -> &[Handler] {
        &self.handlers
    }

    /// Copy of `self` with `inner`'s path nested under this one and
    /// `inner`'s handlers replacing ours. Verb, prefix and action stay.
    pub fn nest(&self, inner: &RouteDescriptor) -> RouteDescriptor {
        let route_path = join_paths(&self.route_path, &inner.route_path);
        RouteDescriptor {
            verb: self.verb,
            full_path: join_paths(&self.prefix, &route_path),
            route_path,
            prefix: self.prefix.clone(),
            action: self.action,
            handlers: inner.handlers.clone(),
        }
    }
}

/// Concatenate two path patterns with exactly one `/` at the seam.
/// A bare `/` on either side contributes nothing.
pub fn join_paths(left: &str, right: &str) -> String {
    let left = left.trim_end_matches('/');
    let right = right.trim_start_matches('/');
    match (left.is_empty(), right.is_empty()) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{right}"),
        (false, true) => left.to_string(),
        (false, false) => format!("{left}/{right}"),
    }
}

/// The seven descriptors generated for one resource, in [`Action::ALL`]
/// order.
#[derive(Debug, Clone)]
pub struct ResourceTable {
    name: String,
    routes: [RouteDescriptor; 7],
}

impl ResourceTable {
    pub fn new(name: impl Into<String>, routes: [RouteDescriptor; 7]) -> Self {
        Self {
            name: name.into(),
            routes,
        }
    }

    /// Collection segment, or [`ROOT_NAME`] for the root resource.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Descriptor for `action`.
    pub fn route(&self, action: Action) -> &RouteDescriptor {
        &self.routes[action as usize]
    }

    pub fn as_slice(&self) -> &[RouteDescriptor] {
        &self.routes
    }
}

impl Deref for ResourceTable {
    type Target = [RouteDescriptor];

    fn deref(&self) -> &Self::Target {
        &self.routes
    }
}

impl<'a> IntoIterator for &'a ResourceTable {
    type Item = &'a RouteDescriptor;
    type IntoIter = std::slice::Iter<'a, RouteDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_paths() {
        assert_eq!(join_paths("", "/"), "/");
        assert_eq!(join_paths("", "/cats"), "/cats");
        assert_eq!(join_paths("/", "/cats"), "/cats");
        assert_eq!(join_paths("/api", "/"), "/api");
        assert_eq!(join_paths("/api/", "/cats/:cat"), "/api/cats/:cat");
        assert_eq!(
            join_paths("/companies/:company", "/departments/:department"),
            "/companies/:company/departments/:department"
        );
    }

    #[test]
    fn test_full_path_uses_prefix() {
        let d = RouteDescriptor::new(Verb::Get, "/cats/:cat", "/api", Vec::new());
        assert_eq!(d.route_path(), "/cats/:cat");
        assert_eq!(d.full_path(), "/api/cats/:cat");
        assert_eq!(d.prefix(), "/api");
        assert!(d.handlers().is_empty());
        assert_eq!(d.action(), None);
    }

    #[test]
    fn test_nest_keeps_outer_verb_and_takes_inner_handlers() {
        let h = Handler::not_implemented();
        let outer = RouteDescriptor::new(Verb::Put, "/a/:a", "/v1", vec![Handler::not_implemented()])
            .with_action(Action::Update);
        let inner = RouteDescriptor::new(Verb::Post, "/b/:b", "", vec![h.clone()]);

        let nested = outer.nest(&inner);
        assert_eq!(nested.verb(), Verb::Put);
        assert_eq!(nested.route_path(), "/a/:a/b/:b");
        assert_eq!(nested.full_path(), "/v1/a/:a/b/:b");
        assert_eq!(nested.handlers(), &[h][..]);
        assert_eq!(nested.action(), Some(Action::Update));
    }
}

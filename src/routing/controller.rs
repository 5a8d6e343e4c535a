//! Controllers: named handler chains for resource actions.

use std::collections::HashMap;

use crate::routing::handler::Handler;

/// Mapping from action key to the handler chain that serves it.
///
/// Keys are usually the canonical action names (`index`, `show`, ...) but
/// any key can be used together with an action map override.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    actions: HashMap<String, Vec<Handler>>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a single handler to `key`, replacing any previous chain.
    pub fn action(self, key: impl Into<String>, handler: Handler) -> Self {
        self.chain(key, [handler])
    }

    /// Bind an ordered handler chain to `key`, replacing any previous chain.
    pub fn chain(mut self, key: impl Into<String>, handlers: impl IntoIterator<Item = Handler>) -> Self {
        self.actions.insert(key.into(), handlers.into_iter().collect());
        self
    }

    /// Handler chain registered under `key`.
    pub fn get(&self, key: &str) -> Option<&[Handler]> {
        self.actions.get(key).map(Vec::as_slice)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.actions.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// A controller answering 501 under every given key.
    pub(crate) fn not_implemented<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let actions = keys
            .into_iter()
            .map(|k| (k.into(), vec![Handler::not_implemented()]))
            .collect();
        Self { actions }
    }

    /// Lay `top` over `self`; entries in `top` win.
    pub(crate) fn overlay(mut self, top: Controller) -> Self {
        self.actions.extend(top.actions);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_prefers_supplied_actions() {
        let index = Handler::not_implemented();
        let supplied = Controller::new().action("index", index.clone());
        let merged = Controller::not_implemented(["index", "show"]).overlay(supplied);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get("index").unwrap(), &[index][..]);
        assert_eq!(merged.get("show").unwrap().len(), 1);
    }

    #[test]
    fn test_chain_keeps_order() {
        let a = Handler::not_implemented();
        let b = Handler::not_implemented();
        let controller = Controller::new().chain("create", vec![a.clone(), b.clone()]);
        assert_eq!(controller.get("create").unwrap(), &[a, b][..]);
        assert!(controller.get("update").is_none());
    }

    #[test]
    fn test_contains_and_is_empty() {
        let controller = Controller::new();
        assert!(controller.is_empty());

        let controller = controller.action("show", Handler::not_implemented());
        assert!(!controller.is_empty());
        assert!(controller.contains("show"));
        assert!(!controller.contains("index"));
    }
}

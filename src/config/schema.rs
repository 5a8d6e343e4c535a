//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router
//! and its demo server. All types derive Serde traits for deserialization
//! from config files.

use serde::{Deserialize, Serialize};

use crate::routing::action::{Action, VerbKey};
use crate::routing::verb::Verb;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,

    /// Router options (prefix, verb and action overrides).
    pub router: RouterOptions,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Persistent options owned by one router instance.
///
/// `methods` and `map` accumulate the overrides passed to every
/// resource-creation call on that router.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterOptions {
    /// Path prefix applied to every route (e.g. "/api"). Empty for none.
    pub prefix: String,

    /// Verb overrides.
    pub methods: MethodOverrides,

    /// Action-name to controller-key overrides.
    pub map: ActionMap,
}

impl RouterOptions {
    /// Shallow-merge `overrides`; set keys replace ours.
    pub fn merge(&mut self, overrides: &ResourceOptions) {
        self.methods.merge(&overrides.methods);
        self.map.merge(&overrides.map);
    }
}

/// Per-call overrides for a resource-creation call.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ResourceOptions {
    pub methods: MethodOverrides,
    pub map: ActionMap,
}

impl ResourceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the verb used for `key` (`get`, `post`, `put`, `del`, `delete`).
    pub fn method(mut self, key: &str, verb: Verb) -> Self {
        match key {
            "get" => self.methods.get = Some(verb),
            "post" => self.methods.post = Some(verb),
            "put" => self.methods.put = Some(verb),
            "del" => self.methods.del = Some(verb),
            "delete" => self.methods.delete = Some(verb),
            other => tracing::warn!(key = %other, "Ignoring unknown verb override key"),
        }
        self
    }

    /// Serve `action` from the controller entry named `key`.
    pub fn map(mut self, action: Action, key: impl Into<String>) -> Self {
        *self.map.slot_mut(action) = Some(key.into());
        self
    }
}

/// Verb overrides keyed by the canonical verb they replace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MethodOverrides {
    pub get: Option<Verb>,
    pub post: Option<Verb>,
    pub put: Option<Verb>,
    pub del: Option<Verb>,
    pub delete: Option<Verb>,
}

impl MethodOverrides {
    pub fn merge(&mut self, other: &MethodOverrides) {
        self.get = other.get.or(self.get);
        self.post = other.post.or(self.post);
        self.put = other.put.or(self.put);
        self.del = other.del.or(self.del);
        self.delete = other.delete.or(self.delete);
    }

    /// Effective verb for `key`. `del` is consulted before `delete`.
    pub fn resolve(&self, key: VerbKey) -> Verb {
        let configured = match key {
            VerbKey::Get => self.get,
            VerbKey::Post => self.post,
            VerbKey::Put => self.put,
            VerbKey::Delete => self.del.or(self.delete),
        };
        configured.unwrap_or_else(|| key.default_verb())
    }
}

/// Controller key overrides per canonical action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ActionMap {
    pub index: Option<String>,
    pub new: Option<String>,
    pub create: Option<String>,
    pub show: Option<String>,
    pub edit: Option<String>,
    pub update: Option<String>,
    pub remove: Option<String>,
}

impl ActionMap {
    pub fn merge(&mut self, other: &ActionMap) {
        for action in Action::ALL {
            if let Some(key) = other.slot(action) {
                *self.slot_mut(action) = Some(key.clone());
            }
        }
    }

    /// Controller key that serves `action`.
    pub fn resolve(&self, action: Action) -> &str {
        self.slot(action).as_deref().unwrap_or(action.name())
    }

    /// Explicit overrides as `(action, key)` pairs.
    pub fn overrides(&self) -> impl Iterator<Item = (Action, &str)> {
        Action::ALL
            .into_iter()
            .filter_map(|a| self.slot(a).as_deref().map(|k| (a, k)))
    }

    fn slot(&self, action: Action) -> &Option<String> {
        match action {
            Action::Index => &self.index,
            Action::New => &self.new,
            Action::Create => &self.create,
            Action::Show => &self.show,
            Action::Edit => &self.edit,
            Action::Update => &self.update,
            Action::Remove => &self.remove,
        }
    }

    fn slot_mut(&mut self, action: Action) -> &mut Option<String> {
        match action {
            Action::Index => &mut self.index,
            Action::New => &mut self.new,
            Action::Create => &mut self.create,
            Action::Show => &mut self.show,
            Action::Edit => &mut self.edit,
            Action::Update => &mut self.update,
            Action::Remove => &mut self.remove,
        }
    }
}

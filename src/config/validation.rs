//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic, including verb tokens)
//! - Check the route prefix is a usable path fragment
//! - Check controller keys in the action map are non-empty
//! - Validate value ranges and socket addresses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use crate::config::schema::AppConfig;
use crate::routing::action::Action;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("router prefix `{0}` must start with `/` and must not end with `/`")]
    InvalidPrefix(String),

    #[error("router map entry for `{0}` is empty")]
    EmptyControllerKey(Action),

    #[error("server request timeout must be greater than zero")]
    ZeroTimeout,

    #[error("invalid {field} `{value}`")]
    InvalidAddress { field: &'static str, value: String },
}

/// Validate `config`, collecting every problem found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let prefix = &config.router.prefix;
    if !prefix.is_empty() && (!prefix.starts_with('/') || prefix.ends_with('/')) {
        errors.push(ValidationError::InvalidPrefix(prefix.clone()));
    }

    for (action, key) in config.router.map.overrides() {
        if key.trim().is_empty() {
            errors.push(ValidationError::EmptyControllerKey(action));
        }
    }

    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "server.bind_address",
            value: config.server.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

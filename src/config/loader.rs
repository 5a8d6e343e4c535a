//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::action::{Action, VerbKey};
    use crate::routing::verb::Verb;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.server.bind_address, "0.0.0.0:3000");
        assert_eq!(config.router.prefix, "");
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_full_document() {
        let config = parse_config(
            r#"
            [server]
            bind_address = "127.0.0.1:4000"
            request_timeout_secs = 5

            [router]
            prefix = "/api"

            [router.methods]
            put = "post"
            delete = "post"

            [router.map]
            index = "list"

            [observability]
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.request_timeout_secs, 5);
        assert_eq!(config.router.methods.resolve(VerbKey::Put), Verb::Post);
        assert_eq!(config.router.methods.resolve(VerbKey::Delete), Verb::Post);
        assert_eq!(config.router.map.resolve(Action::Index), "list");
        assert_eq!(config.observability.log_level, "debug");
    }

    #[test]
    fn test_unknown_verb_is_parse_error() {
        let err = parse_config("[router.methods]\nput = \"fetch\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("unknown HTTP verb"));
    }

    #[test]
    fn test_validation_errors_are_reported_together() {
        let err = parse_config("[router]\nprefix = \"api\"\n[server]\nrequest_timeout_secs = 0\n")
            .unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}

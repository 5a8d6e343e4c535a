//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize, verb tokens checked by serde)
//!     → validation.rs (semantic checks)
//!     → AppConfig
//!         .router   → ResourceRouter (persistent RouterOptions)
//!         .server   → HttpServer
//!         .observability → logging / metrics init
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Router options are owned by one router instance; per-call resource
//!   overrides merge into them and persist for later calls

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    ActionMap, AppConfig, MethodOverrides, ObservabilityConfig, ResourceOptions, RouterOptions,
    ServerConfig,
};
pub use validation::ValidationError;

//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Resource building:
//!     name + Controller + ResourceOptions
//!     → router.rs (merge overrides into RouterOptions)
//!     → builder.rs (inflect name, resolve verbs & controller keys)
//!     → base.rs create_route (prefixing) × 7
//!     → ResourceTable → `resources` (and `routes` via resource/add_resource)
//!
//! Grouping:
//!     destination + [sources]
//!     → group.rs (index-aligned path nesting, last source's handlers)
//!     → new Vec<RouteDescriptor> (caller registers it)
//!
//! Dispatch:
//!     `routes` → base.rs middleware → axum::Router
//! ```
//!
//! # Design Decisions
//! - The base router is held by composition and injected as a capability
//! - Router options belong to one router instance
//! - Grouping accepts any number of sources

pub mod action;
pub mod base;
pub mod builder;
pub mod controller;
pub mod group;
pub mod handler;
pub mod inflect;
pub mod route;
pub mod router;
pub mod verb;

pub use action::Action;
pub use base::{AxumBase, BaseRouter};
pub use builder::ResourceName;
pub use controller::Controller;
pub use group::group;
pub use handler::{Handler, Next};
pub use inflect::{English, Inflector};
pub use route::{join_paths, ResourceTable, RouteDescriptor, ROOT_NAME};
pub use router::ResourceRouter;
pub use verb::{Verb, VerbParseError};

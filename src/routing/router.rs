//! Resource router: registries and the chainable registration surface.
//!
//! # Responsibilities
//! - Own the persistent router options and merge per-call overrides
//! - Build resource tables and record every one in `resources`
//! - Maintain the `routes` registry that dispatch consults
//! - Expose grouping and the dispatch adapter of the base router
//!
//! # Design Decisions
//! - Both registries are append-only through this API; no dedup
//! - Tables are shared behind `Arc` so lookups hand back the same table
//! - Building a table never registers it; `resource` does both

use std::sync::Arc;

use crate::config::{ResourceOptions, RouterOptions};
use crate::routing::base::{AxumBase, BaseRouter};
use crate::routing::builder::{build_resource_table, ResourceName};
use crate::routing::controller::Controller;
use crate::routing::group;
use crate::routing::handler::Handler;
use crate::routing::inflect::{English, Inflector};
use crate::routing::route::{ResourceTable, RouteDescriptor};
use crate::routing::verb::Verb;

/// Expands resources into RESTful routes on top of a [`BaseRouter`].
#[derive(Debug)]
pub struct ResourceRouter<B = AxumBase> {
    base: B,
    options: RouterOptions,
    inflector: Box<dyn Inflector>,
    routes: Vec<RouteDescriptor>,
    resources: Vec<Arc<ResourceTable>>,
}

impl ResourceRouter<AxumBase> {
    /// Router with default options and no prefix.
    pub fn new() -> Self {
        Self::with_options(RouterOptions::default())
    }

    /// Router backed by axum, using `options.prefix` as the route prefix.
    pub fn with_options(options: RouterOptions) -> Self {
        let base = AxumBase::new(options.prefix.clone());
        Self::with_base(base, options)
    }
}

impl Default for ResourceRouter<AxumBase> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: BaseRouter> ResourceRouter<B> {
    /// Router over an explicit base.
    pub fn with_base(base: B, options: RouterOptions) -> Self {
        Self {
            base,
            options,
            inflector: Box::new(English),
            routes: Vec::new(),
            resources: Vec::new(),
        }
    }

    /// Replace the inflector used to derive route segments and parameters.
    pub fn with_inflector(mut self, inflector: impl Inflector + 'static) -> Self {
        self.inflector = Box::new(inflector);
        self
    }

    // --- Resource tables ---

    /// Build the table for `name`, merge `overrides` into the persistent
    /// options, and record the table in `resources`. `routes` is untouched.
    pub fn create_resource(
        &mut self,
        name: impl Into<ResourceName>,
        controller: Controller,
        overrides: ResourceOptions,
    ) -> Arc<ResourceTable> {
        let name = name.into();
        self.options.merge(&overrides);

        let table = Arc::new(build_resource_table(
            &self.base,
            self.inflector.as_ref(),
            &self.options,
            &name,
            controller,
        ));
        tracing::debug!(
            resource = %table.name(),
            prefix = %self.base.prefix(),
            "Built resource table"
        );

        self.resources.push(Arc::clone(&table));
        table
    }

    /// Controller-only form of [`create_resource`](Self::create_resource);
    /// the table is built for the root resource.
    pub fn create_root_resource(
        &mut self,
        controller: Controller,
        overrides: ResourceOptions,
    ) -> Arc<ResourceTable> {
        self.create_resource(ResourceName::Root, controller, overrides)
    }

    /// Build `name` and register its descriptors in `routes`.
    pub fn resource(
        &mut self,
        name: impl Into<ResourceName>,
        controller: Controller,
        overrides: ResourceOptions,
    ) -> &mut Self {
        let table = self.create_resource(name, controller, overrides);
        self.add_resource(&table)
    }

    /// Build the root resource and register its descriptors in `routes`.
    pub fn root_resource(&mut self, controller: Controller, overrides: ResourceOptions) -> &mut Self {
        self.resource(ResourceName::Root, controller, overrides)
    }

    // --- Registration ---

    /// Append one table's descriptors to `routes`.
    pub fn add_resource(&mut self, table: &ResourceTable) -> &mut Self {
        self.routes.extend_from_slice(table);
        self
    }

    /// Append several tables' descriptors to `routes`, in order.
    pub fn add_resources<T: AsRef<ResourceTable>>(&mut self, tables: &[T]) -> &mut Self {
        for table in tables {
            self.add_resource(table.as_ref());
        }
        self
    }

    /// Append any number of descriptor sequences to `routes`, in order.
    pub fn add_routes(&mut self, sequences: &[&[RouteDescriptor]]) -> &mut Self {
        let before = self.routes.len();
        for sequence in sequences {
            self.routes.extend_from_slice(sequence);
        }
        tracing::debug!(added = self.routes.len() - before, total = self.routes.len(), "Registered routes");
        self
    }

    /// Register an ad-hoc route.
    pub fn route(&mut self, verb: Verb, path: &str, handlers: impl IntoIterator<Item = Handler>) -> &mut Self {
        let descriptor = self
            .base
            .create_route(verb, path, handlers.into_iter().collect());
        self.routes.push(descriptor);
        self
    }

    pub fn get(&mut self, path: &str, handler: Handler) -> &mut Self {
        self.route(Verb::Get, path, [handler])
    }

    pub fn post(&mut self, path: &str, handler: Handler) -> &mut Self {
        self.route(Verb::Post, path, [handler])
    }

    pub fn put(&mut self, path: &str, handler: Handler) -> &mut Self {
        self.route(Verb::Put, path, [handler])
    }

    pub fn patch(&mut self, path: &str, handler: Handler) -> &mut Self {
        self.route(Verb::Patch, path, [handler])
    }

    pub fn delete(&mut self, path: &str, handler: Handler) -> &mut Self {
        self.route(Verb::Delete, path, [handler])
    }

    // --- Lookup ---

    /// The live route registry.
    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    /// Mutable access to the live route registry.
    pub fn routes_mut(&mut self) -> &mut Vec<RouteDescriptor> {
        &mut self.routes
    }

    /// First table named `name`, if any.
    pub fn get_resource(&self, name: &str) -> Option<Arc<ResourceTable>> {
        self.resources.iter().find(|t| t.name() == name).cloned()
    }

    pub fn resources(&self) -> &[Arc<ResourceTable>] {
        &self.resources
    }

    pub fn resources_mut(&mut self) -> &mut Vec<Arc<ResourceTable>> {
        &mut self.resources
    }

    /// Current persistent options, including merged overrides.
    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    pub fn base(&self) -> &B {
        &self.base
    }

    // --- Grouping and dispatch ---

    /// Nest `sources` inside `destination`; see [`group::group`].
    pub fn group(&self, destination: &[RouteDescriptor], sources: &[&[RouteDescriptor]]) -> Vec<RouteDescriptor> {
        let grouped = group::group(destination, sources);
        tracing::debug!(routes = grouped.len(), sources = sources.len(), "Grouped routes");
        grouped
    }

    /// Dispatchable service for everything in `routes`.
    pub fn middleware(&self) -> B::Service {
        self.base.middleware(&self.routes)
    }
}

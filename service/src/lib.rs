//! Service contains the business logic of a real estate browsing session.
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;

#[cfg(doc)]
use infra::{Backend, Database};

pub use self::{command::Command, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    /// [`domain::cart::Pricing`] of [`domain::Cart`] totals.
    pub pricing: domain::cart::Pricing,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<Db, Bk> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Database`] of this [`Service`].
    database: Db,

    /// [`Backend`] of this [`Service`].
    backend: Bk,
}

impl<Db, Bk> Service<Db, Bk> {
    /// Creates a new [`Service`] with the provided parameters.
    #[must_use]
    pub fn new(config: Config, database: Db, backend: Bk) -> Self {
        Self {
            config,
            database,
            backend,
        }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Database`] of this [`Service`].
    #[must_use]
    pub fn database(&self) -> &Db {
        &self.database
    }

    /// Returns [`Backend`] of this [`Service`].
    #[must_use]
    pub fn backend(&self) -> &Bk {
        &self.backend
    }
}

#[cfg(test)]
mod spec {
    use crate::{infra, Config, Service};

    /// [`Service`] over the built-in catalog and an unconnected backend.
    pub(crate) type TestService =
        Service<infra::InMemory, infra::backend::Unconnected>;

    /// Creates a new [`TestService`] with the default [`Config`].
    pub(crate) fn service() -> TestService {
        Service::new(
            Config::default(),
            infra::InMemory::builtin().unwrap(),
            infra::backend::Unconnected,
        )
    }
}

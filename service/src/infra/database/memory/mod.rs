//! In-memory [`Database`] implementation.

mod impls;

use std::{collections::HashSet, path::Path, sync::Arc};

use config::{File, FileFormat, Source};
use derive_more::{Display, Error as StdError, From};
use serde::Deserialize;
use tracerr::Traced;

#[cfg(doc)]
use crate::infra::Database;
use crate::{
    domain::{listing, transaction, Listing, Transaction},
    infra::database,
};

/// Catalog compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("catalog.toml");

/// Read-only [`Database`] keeping the whole catalog in memory.
#[derive(Clone, Debug)]
pub struct InMemory(Arc<Catalog>);

impl InMemory {
    /// Creates a new [`InMemory`] [`Database`] with the catalog compiled into
    /// the binary.
    ///
    /// # Errors
    ///
    /// If the compiled catalog is malformed.
    pub fn builtin() -> Result<Self, Traced<database::Error>> {
        Self::from_source(File::from_str(BUILTIN_CATALOG, FileFormat::Toml))
    }

    /// Creates a new [`InMemory`] [`Database`] with the catalog loaded from
    /// the provided file.
    ///
    /// File format is detected by its extension.
    ///
    /// # Errors
    ///
    /// If the file cannot be read, or the catalog it contains is malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Traced<database::Error>> {
        Self::from_source(File::from(path.as_ref()))
    }

    /// Creates a new [`InMemory`] [`Database`] with the catalog parsed from
    /// the provided [`Source`].
    fn from_source<S>(source: S) -> Result<Self, Traced<database::Error>>
    where
        S: Source + Send + Sync + 'static,
    {
        let catalog = config::Config::builder()
            .add_source(source)
            .build()
            .and_then(config::Config::try_deserialize::<Catalog>)
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;
        catalog
            .validate()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;

        tracing::debug!(
            listings = catalog.listings.len(),
            transactions = catalog.transactions.len(),
            "catalog loaded",
        );

        Ok(Self(Arc::new(catalog)))
    }

    /// Returns all the [`Listing`]s in catalog order.
    #[must_use]
    pub fn listings(&self) -> &[Listing] {
        &self.0.listings
    }

    /// Returns all the [`Transaction`]s in catalog order.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.0.transactions
    }
}

/// Reference data of an [`InMemory`] [`Database`].
#[derive(Debug, Default, Deserialize)]
struct Catalog {
    /// [`Listing`]s available for browsing.
    #[serde(default)]
    listings: Vec<Listing>,

    /// History of [`Transaction`]s.
    #[serde(default)]
    transactions: Vec<Transaction>,
}

impl Catalog {
    /// Checks the invariants not expressed by the types themselves.
    fn validate(&self) -> Result<(), Error> {
        let mut ids = HashSet::with_capacity(self.listings.len());
        for listing in &self.listings {
            if !ids.insert(listing.id) {
                return Err(Error::DuplicateListing(listing.id));
            }
            if listing.price.is_negative() {
                return Err(Error::NegativePrice(listing.id));
            }
        }

        let mut codes = HashSet::with_capacity(self.transactions.len());
        for tx in &self.transactions {
            if !codes.insert(&tx.code) {
                return Err(Error::DuplicateTransaction(tx.code.clone()));
            }
        }

        Ok(())
    }
}

/// [`InMemory`] database error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Failed to read or parse a catalog.
    #[display("Failed to load catalog: {_0}")]
    Load(config::ConfigError),

    /// Several [`Listing`]s share the same [`listing::Id`].
    #[display("`Listing(id: {_0})` is defined more than once")]
    #[from(ignore)]
    DuplicateListing(#[error(not(source))] listing::Id),

    /// [`Listing`] is priced below zero.
    #[display("`Listing(id: {_0})` has negative price")]
    #[from(ignore)]
    NegativePrice(#[error(not(source))] listing::Id),

    /// Several [`Transaction`]s share the same [`transaction::Code`].
    #[display("`Transaction(code: {_0})` is defined more than once")]
    #[from(ignore)]
    DuplicateTransaction(#[error(not(source))] transaction::Code),
}

#[cfg(test)]
mod spec {
    use config::{File, FileFormat};

    use crate::infra::database;

    use super::{Error, InMemory};

    #[test]
    fn loads_builtin_catalog() {
        let db = InMemory::builtin().unwrap();

        assert_eq!(db.listings().len(), 6);
        assert_eq!(db.listings()[0].title.to_string(), "Apartamento Luxuoso no Centro");
        assert_eq!(db.listings()[0].price.to_string(), "850000BRL");
        assert_eq!(db.listings()[0].num_photos(), 5);
        assert_eq!(
            db.listings().iter().filter(|l| l.featured).count(),
            3,
        );

        assert_eq!(db.transactions().len(), 3);
        assert_eq!(db.transactions()[1].code.to_string(), "TXN-002");
        assert_eq!(
            db.transactions()[0].rating.map(|r| r.stars()),
            Some(5),
        );
    }

    #[test]
    fn rejects_duplicate_listings() {
        let toml = r#"
            [[listings]]
            id = 1
            title = "A"
            price = "1BRL"
            address = "Rua A"
            bedrooms = 1
            bathrooms = 1
            area = "10"
            category = "LOFT"
            image = "a.jpg"

            [[listings]]
            id = 1
            title = "B"
            price = "2BRL"
            address = "Rua B"
            bedrooms = 1
            bathrooms = 1
            area = "10"
            category = "LOFT"
            image = "b.jpg"
        "#;

        let err = InMemory::from_source(File::from_str(toml, FileFormat::Toml))
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            database::Error::Memory(Error::DuplicateListing(id))
                if u32::from(*id) == 1,
        ));
    }

    #[test]
    fn rejects_negative_price() {
        let toml = r#"
            [[listings]]
            id = 7
            title = "A"
            price = "-1BRL"
            address = "Rua A"
            bedrooms = 1
            bathrooms = 1
            area = "10"
            category = "HOUSE"
            image = "a.jpg"
        "#;

        let err = InMemory::from_source(File::from_str(toml, FileFormat::Toml))
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            database::Error::Memory(Error::NegativePrice(_)),
        ));
    }

    #[test]
    fn rejects_malformed_catalog() {
        let toml = r#"
            [[listings]]
            id = 1
            title = ""
        "#;

        let err = InMemory::from_source(File::from_str(toml, FileFormat::Toml))
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            database::Error::Memory(Error::Load(_)),
        ));
    }
}

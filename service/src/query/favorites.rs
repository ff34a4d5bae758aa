//! [`Query`] collection related to [`Favorites`].

use std::collections::HashMap;

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{listing, Favorites, Listing},
    infra::{database, Database},
    read::favorite::{Entry, Filter, Order},
    Query, Service,
};

/// Queries favorite [`Listing`]s.
///
/// Favorites missing from the catalog are skipped.
#[derive(Clone, Copy, Debug)]
pub struct List<'f> {
    /// [`Favorites`] to list.
    pub favorites: &'f Favorites,

    /// [`Filter`] of [`Entry`]s.
    pub filter: &'f Filter,

    /// [`Order`] of [`Entry`]s.
    pub order: Order,
}

impl<'f, Db, Bk> Query<List<'f>> for Service<Db, Bk>
where
    Db: Database<
        Select<By<HashMap<listing::Id, Listing>, Vec<listing::Id>>>,
        Ok = HashMap<listing::Id, Listing>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Vec<Entry>;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        List {
            favorites,
            filter,
            order,
        }: List<'f>,
    ) -> Result<Self::Ok, Self::Err> {
        let ids = favorites.ids().collect::<Vec<_>>();
        let mut listings = self
            .database()
            .execute(Select(By::<HashMap<_, _>, _>::new(ids)))
            .await
            .map_err(tracerr::wrap!())?;

        let mut entries = favorites
            .ids()
            .filter_map(|id| {
                Some(Entry {
                    listing: listings.remove(&id)?,
                    added_at: favorites.added_at(id)?,
                })
            })
            .filter(|e| filter.matches(e))
            .collect::<Vec<_>>();
        // Make the order of equal entries independent of hashing.
        entries.sort_by_key(|e| e.listing.id);
        order.sort(&mut entries);

        Ok(entries)
    }
}

/// Error of [`List`] [`Query`] execution.
pub type ExecutionError = database::Error;

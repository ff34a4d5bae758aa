//! [`InMemory`] [`Database`] implementations.

use std::collections::HashMap;

use common::{
    operations::{By, Select},
    DateTime,
};
use tracerr::Traced;

use crate::{
    domain::{listing, Listing, Transaction},
    infra::{
        database::{self, InMemory},
        Database,
    },
    read,
};

impl Database<Select<By<Option<Listing>, listing::Id>>> for InMemory {
    type Ok = Option<Listing>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Listing>, listing::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.listings().iter().find(|l| l.id == id).cloned())
    }
}

impl Database<Select<By<Vec<Listing>, read::listing::list::Filter>>>
    for InMemory
{
    type Ok = Vec<Listing>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Listing>, read::listing::list::Filter>>,
    ) -> Result<Self::Ok, Self::Err> {
        let filter = by.into_inner();
        Ok(self
            .listings()
            .iter()
            .filter(|l| filter.matches(l))
            .cloned()
            .collect())
    }
}

impl<IDs> Database<Select<By<HashMap<listing::Id, Listing>, IDs>>>
    for InMemory
where
    IDs: AsRef<[listing::Id]>,
{
    type Ok = HashMap<listing::Id, Listing>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<HashMap<listing::Id, Listing>, IDs>>,
    ) -> Result<Self::Ok, Self::Err> {
        let ids = by.into_inner();
        let ids: &[listing::Id] = ids.as_ref();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(self
            .listings()
            .iter()
            .filter(|l| ids.contains(&l.id))
            .map(|l| (l.id, l.clone()))
            .collect())
    }
}

impl Database<Select<By<Vec<Transaction>, read::transaction::list::Filter>>>
    for InMemory
{
    type Ok = Vec<Transaction>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<Vec<Transaction>, read::transaction::list::Filter>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let filter = by.into_inner();
        let now = DateTime::now();
        Ok(self
            .transactions()
            .iter()
            .filter(|t| filter.matches(t, now))
            .cloned()
            .collect())
    }
}

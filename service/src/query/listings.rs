//! [`Query`] collection related to the multiple [`Listing`]s.

use common::operations::By;

use crate::{domain::Listing, read};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a list of [`Listing`]s in catalog order.
pub type List = DatabaseQuery<By<Vec<Listing>, read::listing::list::Filter>>;

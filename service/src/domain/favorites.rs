//! [`Favorites`] definitions.

use std::collections::HashMap;

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf};

#[cfg(doc)]
use crate::domain::Listing;
use crate::domain::listing;

/// Set of [`Listing`]s marked as favorite.
#[derive(Clone, Debug, Default)]
pub struct Favorites {
    /// [`AdditionDateTime`] of every favorite [`listing::Id`].
    entries: HashMap<listing::Id, AdditionDateTime>,
}

impl Favorites {
    /// Flips the membership of the provided [`listing::Id`].
    ///
    /// Returns `true` if the [`Listing`] is a favorite after the toggle.
    pub fn toggle(&mut self, id: listing::Id) -> bool {
        if self.entries.remove(&id).is_some() {
            return false;
        }
        drop(self.entries.insert(id, DateTimeOf::now()));
        true
    }

    /// Indicates whether the provided [`listing::Id`] is a favorite.
    #[must_use]
    pub fn contains(&self, id: listing::Id) -> bool {
        self.entries.contains_key(&id)
    }

    /// Returns [`AdditionDateTime`] of the provided favorite
    /// [`listing::Id`].
    #[must_use]
    pub fn added_at(&self, id: listing::Id) -> Option<AdditionDateTime> {
        self.entries.get(&id).copied()
    }

    /// Returns all the favorite [`listing::Id`]s in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = listing::Id> + '_ {
        self.entries.keys().copied()
    }

    /// Returns the number of favorites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Indicates whether there are no favorites.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// [`DateTime`] when a [`Listing`] was marked as favorite.
pub type AdditionDateTime = DateTimeOf<(Favorites, unit::Addition)>;

//! Favorite [`Listing`] read model definitions.

use std::cmp::Reverse;

use common::define_kind;
use smart_default::SmartDefault;

use crate::domain::{favorites::AdditionDateTime, listing, Listing};

/// Favorite [`Listing`] along with the moment it was marked so.
#[derive(Clone, Debug)]
pub struct Entry {
    /// Favorite [`Listing`].
    pub listing: Listing,

    /// [`AdditionDateTime`] of the [`Listing`] to favorites.
    pub added_at: AdditionDateTime,
}

/// Filter of favorite [`Entry`]s.
#[derive(Clone, Debug, Default)]
pub struct Filter {
    /// Term to search for in [`listing::Title`]s and [`listing::Address`]es.
    pub search: Option<String>,

    /// [`listing::Category`] to keep.
    pub category: Option<listing::Category>,
}

impl Filter {
    /// Checks whether the provided [`Entry`] passes this [`Filter`].
    #[must_use]
    pub fn matches(&self, entry: &Entry) -> bool {
        self.search
            .as_deref()
            .is_none_or(|term| entry.listing.mentions(term))
            && self.category.is_none_or(|c| entry.listing.category == c)
    }
}

define_kind! {
    #[doc = "Order of favorite [`Entry`]s."]
    #[derive(SmartDefault)]
    enum Order {
        #[doc = "Most recently added first."]
        #[default]
        Recent = 1,

        #[doc = "Cheapest first."]
        PriceLow = 2,

        #[doc = "Most expensive first."]
        PriceHigh = 3,

        #[doc = "Largest area first."]
        Area = 4,
    }
}

impl Order {
    /// Sorts the provided [`Entry`]s according to this [`Order`].
    ///
    /// Sorting is stable, so equal [`Entry`]s keep their relative order.
    pub fn sort(self, entries: &mut [Entry]) {
        match self {
            Self::Recent => entries.sort_by_key(|e| Reverse(e.added_at)),
            Self::PriceLow => entries.sort_by_key(|e| e.listing.price.amount),
            Self::PriceHigh => {
                entries.sort_by_key(|e| Reverse(e.listing.price.amount));
            }
            Self::Area => entries.sort_by_key(|e| Reverse(e.listing.area)),
        }
    }
}

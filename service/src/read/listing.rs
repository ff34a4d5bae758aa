//! [`Listing`] read model definitions.
//!
//! [`Listing`]: crate::domain::Listing

pub mod list {
    //! [`Listing`]s list definitions.

    use crate::domain::{listing, Listing};

    /// Filter of a [`Listing`]s list.
    #[derive(Clone, Debug, Default)]
    pub struct Filter {
        /// Term to search for in [`listing::Title`]s and
        /// [`listing::Address`]es.
        pub search: Option<String>,

        /// [`listing::Category`] to keep.
        pub category: Option<listing::Category>,

        /// Indicator whether only featured [`Listing`]s should be kept.
        pub featured_only: bool,
    }

    impl Filter {
        /// Checks whether the provided [`Listing`] passes this [`Filter`].
        #[must_use]
        pub fn matches(&self, listing: &Listing) -> bool {
            self.search
                .as_deref()
                .is_none_or(|term| listing.mentions(term))
                && self.category.is_none_or(|c| listing.category == c)
                && (!self.featured_only || listing.featured)
        }
    }
}

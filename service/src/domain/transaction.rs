//! [`Transaction`] definitions.

use common::{define_kind, unit, DateTimeOf, Money, Percent};
use derive_more::{AsRef, Display, Error, Into};
use serde::{Deserialize, Serialize};

#[cfg(doc)]
use crate::domain::User;
use crate::domain::listing;

/// Deal brokered for a [`User`] in the past.
///
/// [`Transaction`]s are read-only history records.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Transaction {
    /// [`Code`] of this [`Transaction`].
    pub code: Code,

    /// [`listing::Title`] of the property this [`Transaction`] is about.
    pub title: listing::Title,

    /// [`listing::Address`] of the property this [`Transaction`] is about.
    pub address: listing::Address,

    /// Cover image of the property this [`Transaction`] is about.
    pub image: listing::ImageUrl,

    /// [`Kind`] of this [`Transaction`].
    pub kind: Kind,

    /// [`Status`] of this [`Transaction`].
    pub status: Status,

    /// Amount of this [`Transaction`].
    pub amount: Money,

    /// [`OpeningDateTime`] of this [`Transaction`].
    #[serde(with = "common::datetime::serde::rfc3339")]
    pub date: OpeningDateTime,

    /// Broker handling this [`Transaction`].
    pub broker: Broker,

    /// Names of the documents attached to this [`Transaction`].
    #[serde(default)]
    pub documents: Vec<String>,

    /// Progress of a [`Status::InProgress`] [`Transaction`].
    #[serde(default)]
    pub progress: Option<Percent>,

    /// [`Rating`] the [`User`] gave to a [`Status::Completed`]
    /// [`Transaction`].
    #[serde(default)]
    pub rating: Option<Rating>,
}

impl Transaction {
    /// Checks whether the provided `term` occurs (case-insensitively) in the
    /// [`Code`], title or address of this [`Transaction`].
    #[must_use]
    pub fn mentions(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        let matches = |s: &str| s.to_lowercase().contains(&term);
        matches(self.code.as_ref())
            || matches(self.title.as_ref())
            || matches(self.address.as_ref())
    }
}

/// Human-readable code of a [`Transaction`] (`TXN-001`).
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[as_ref(str, String)]
#[serde(transparent)]
pub struct Code(String);

impl From<&str> for Code {
    fn from(code: &str) -> Self {
        Self(code.to_owned())
    }
}

/// Name of a broker handling a [`Transaction`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[as_ref(str, String)]
#[serde(transparent)]
pub struct Broker(String);

/// Rating of a [`Transaction`], from 1 to 5 stars.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Maximum number of stars.
    pub const MAX: u8 = 5;

    /// Creates a new [`Rating`] if the provided number of `stars` is within
    /// `1..=`[`Rating::MAX`].
    #[must_use]
    pub fn new(stars: u8) -> Option<Self> {
        (1..=Self::MAX).contains(&stars).then_some(Self(stars))
    }

    /// Returns the number of stars of this [`Rating`].
    #[must_use]
    pub fn stars(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = InvalidRating;

    fn try_from(stars: u8) -> Result<Self, Self::Error> {
        Self::new(stars).ok_or(InvalidRating(stars))
    }
}

/// Error of a [`Rating`] being out of range.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("rating of {_0} stars is out of `1..=5` range")]
pub struct InvalidRating(#[error(not(source))] u8);

/// [`DateTimeOf`] a [`Transaction`] was opened.
pub type OpeningDateTime = DateTimeOf<(Transaction, unit::Creation)>;

define_kind! {
    #[doc = "Kind of a [`Transaction`]."]
    enum Kind {
        #[doc = "Property bought by the client."]
        Purchase = 1,

        #[doc = "Property sold by the client."]
        Sale = 2,

        #[doc = "Property rented by the client."]
        Rental = 3,
    }
}

define_kind! {
    #[doc = "Status of a [`Transaction`]."]
    enum Status {
        #[doc = "Deal is closed."]
        Completed = 1,

        #[doc = "Deal is being processed."]
        InProgress = 2,

        #[doc = "Deal awaits processing."]
        Pending = 3,

        #[doc = "Deal was called off."]
        Cancelled = 4,
    }
}

#[cfg(test)]
mod spec {
    use super::{Rating, Status};

    #[test]
    fn rating_is_bounded() {
        assert!(Rating::new(0).is_none());
        assert_eq!(Rating::new(5).map(Rating::stars), Some(5));
        assert!(Rating::try_from(6).is_err());
    }

    #[test]
    fn status_parses_snake_case() {
        assert_eq!("in_progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!(Status::InProgress.to_string(), "IN_PROGRESS");
    }
}

//! [`Listing`] definitions.

use std::{fmt, iter, str::FromStr};

use common::{define_kind, Money};
use derive_more::{AsRef, Display, From, Into};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Property listed in the catalog.
///
/// [`Listing`]s are reference data: they are never created or modified
/// during a session.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Listing {
    /// ID of this [`Listing`].
    pub id: Id,

    /// [`Title`] of this [`Listing`].
    pub title: Title,

    /// Asking price of this [`Listing`].
    pub price: Money,

    /// [`Address`] of this [`Listing`].
    pub address: Address,

    /// Number of bedrooms.
    pub bedrooms: NumRooms,

    /// Number of bathrooms.
    pub bathrooms: NumRooms,

    /// Floor [`Area`] of this [`Listing`].
    pub area: Area,

    /// [`Category`] of this [`Listing`].
    pub category: Category,

    /// Indicator whether this [`Listing`] is promoted on the home page.
    #[serde(default)]
    pub featured: bool,

    /// Cover image of this [`Listing`].
    pub image: ImageUrl,

    /// Additional photos of this [`Listing`].
    #[serde(default)]
    pub gallery: Vec<ImageUrl>,
}

impl Listing {
    /// Returns all the photos of this [`Listing`], starting with its cover
    /// image.
    pub fn photos(&self) -> impl Iterator<Item = &ImageUrl> {
        iter::once(&self.image).chain(&self.gallery)
    }

    /// Returns the number of [`Listing::photos()`].
    #[must_use]
    pub fn num_photos(&self) -> usize {
        1 + self.gallery.len()
    }

    /// Checks whether the provided `term` occurs (case-insensitively) in the
    /// [`Title`] or [`Address`] of this [`Listing`].
    #[must_use]
    pub fn mentions(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        let matches = |s: &str| s.to_lowercase().contains(&term);
        matches(self.title.as_ref()) || matches(self.address.as_ref())
    }
}

/// ID of a [`Listing`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    derive_more::FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct Id(u32);

/// Title of a [`Listing`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[as_ref(str, String)]
#[serde(transparent)]
pub struct Title(String);

impl Title {
    /// Creates a new [`Title`] if the given `title` is valid.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Option<Self> {
        let title = title.into();
        Self::check(&title).then_some(Self(title))
    }

    /// Checks whether the given `title` is a valid [`Title`].
    fn check(title: impl AsRef<str>) -> bool {
        let title = title.as_ref();
        title.trim() == title && !title.is_empty() && title.len() <= 256
    }
}

impl FromStr for Title {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Title`")
    }
}

impl<'de> Deserialize<'de> for Title {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

/// Street address of a [`Listing`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[as_ref(str, String)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Creates a new [`Address`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Address`].
    fn check(address: impl AsRef<str>) -> bool {
        let address = address.as_ref();
        address.trim() == address && !address.is_empty() && address.len() <= 512
    }
}

impl FromStr for Address {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Address`")
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

/// Number of rooms of some kind in a [`Listing`].
pub type NumRooms = u16;

/// Floor area of a [`Listing`] in square meters.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Area(Decimal);

impl Area {
    /// Creates a new [`Area`] if the given number of square meters is
    /// positive.
    #[must_use]
    pub fn new(square_meters: Decimal) -> Option<Self> {
        (square_meters > Decimal::ZERO).then_some(Self(square_meters))
    }

    /// Returns the number of square meters in this [`Area`].
    #[must_use]
    pub fn square_meters(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m\u{b2}", self.0.normalize())
    }
}

impl FromStr for Area {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim())
            .ok()
            .and_then(Self::new)
            .ok_or("invalid `Area`")
    }
}

impl<'de> Deserialize<'de> for Area {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

/// URL of a [`Listing`] photo.
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    PartialEq,
    Serialize,
)]
#[as_ref(str, String)]
#[from(&str, String)]
#[serde(transparent)]
pub struct ImageUrl(String);

define_kind! {
    #[doc = "Category of a [`Listing`]."]
    enum Category {
        #[doc = "An apartment in a building."]
        Apartment = 1,

        #[doc = "A detached house."]
        House = 2,

        #[doc = "A penthouse on the top floor of a building."]
        Penthouse = 3,

        #[doc = "A converted open-plan loft."]
        Loft = 4,
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use super::{Address, Area, Category, Title};

    #[test]
    fn validates_text_fields() {
        assert!(Title::new("Loft Industrial no Centro").is_some());
        assert!(Title::new("").is_none());
        assert!(Title::new(" padded ").is_none());

        assert!(Address::new("Rua das Flores, 123 - Centro").is_some());
        assert!(Address::new("x".repeat(513)).is_none());
    }

    #[test]
    fn area_is_positive() {
        assert!(Area::new(Decimal::new(120, 0)).is_some());
        assert!(Area::new(Decimal::ZERO).is_none());
        assert!(Area::new(Decimal::NEGATIVE_ONE).is_none());

        assert_eq!("95".parse::<Area>().unwrap().to_string(), "95m\u{b2}");
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("apartment".parse::<Category>().unwrap(), Category::Apartment);
        assert_eq!("LOFT".parse::<Category>().unwrap(), Category::Loft);
        assert!("castle".parse::<Category>().is_err());
    }
}

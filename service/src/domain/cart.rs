//! [`Cart`] definitions.

use std::num::NonZeroU32;

use common::{define_kind, money::Currency, Money, Percent};
use derive_more::{Display, Into};
use rust_decimal::Decimal;
use smart_default::SmartDefault;

use crate::domain::{listing, Listing};

/// Ordered collection of [`Line`]s a session expressed interest in.
///
/// Holds at most one [`Line`] per [`listing::Id`], and every [`Line`] always
/// has a positive [`Quantity`].
#[derive(Clone, Debug, Default)]
pub struct Cart {
    /// [`Line`]s of this [`Cart`] in insertion order.
    lines: Vec<Line>,
}

impl Cart {
    /// Expresses interest in the provided [`Listing`].
    ///
    /// Increments the [`Quantity`] of the existing [`Line`], or appends a
    /// new [`Line`] with display fields copied from the [`Listing`].
    pub fn add_interest(&mut self, listing: &Listing, intent: Intent) -> &Line {
        let pos = match self.position(listing.id) {
            Some(pos) => {
                self.lines[pos].quantity = self.lines[pos].quantity.incremented();
                pos
            }
            None => {
                self.lines.push(Line::new(listing, intent));
                self.lines.len() - 1
            }
        };
        &self.lines[pos]
    }

    /// Replaces the [`Quantity`] of the [`Line`] with the provided
    /// [`listing::Id`].
    ///
    /// Non-positive `quantity` removes the [`Line`]. Absent [`Line`] is a
    /// no-op. Quantities above [`u32::MAX`] are saturated.
    pub fn set_quantity(
        &mut self,
        id: listing::Id,
        quantity: i64,
    ) -> Option<&Line> {
        let quantity = u32::try_from(quantity.max(0)).unwrap_or(u32::MAX);
        let Some(quantity) = Quantity::new(quantity) else {
            drop(self.remove_interest(id));
            return None;
        };
        let pos = self.position(id)?;
        self.lines[pos].quantity = quantity;
        Some(&self.lines[pos])
    }

    /// Removes the [`Line`] with the provided [`listing::Id`], if any.
    pub fn remove_interest(&mut self, id: listing::Id) -> Option<Line> {
        self.position(id).map(|pos| self.lines.remove(pos))
    }

    /// Removes all the [`Line`]s from this [`Cart`].
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Returns the [`Line`] with the provided [`listing::Id`], if any.
    #[must_use]
    pub fn line(&self, id: listing::Id) -> Option<&Line> {
        self.lines.iter().find(|l| l.listing_id == id)
    }

    /// Returns all the [`Line`]s of this [`Cart`] in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Returns the number of [`Line`]s in this [`Cart`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Indicates whether this [`Cart`] has no [`Line`]s.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the sum of [`Quantity`]s across all the [`Line`]s.
    #[must_use]
    pub fn units(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity.get())).sum()
    }

    /// Calculates [`Totals`] of this [`Cart`] according to the provided
    /// [`Pricing`].
    ///
    /// Always calculated from scratch, so reflects the latest mutation.
    /// Amounts saturate at [`Decimal::MAX`].
    #[must_use]
    pub fn totals(&self, pricing: &Pricing) -> Totals {
        let currency = pricing.currency();
        let subtotal = self
            .lines
            .iter()
            .map(|l| l.total().amount)
            .fold(Decimal::ZERO, Decimal::saturating_add);
        let transfer_tax = pricing.transfer_tax.of(subtotal);
        let total = subtotal
            .saturating_add(pricing.documentation_fee.amount)
            .saturating_add(transfer_tax);

        Totals {
            subtotal: Money::new(subtotal, currency),
            documentation_fee: pricing.documentation_fee,
            transfer_tax: Money::new(transfer_tax, currency),
            total: Money::new(total, currency),
            lines: self.len(),
            units: self.units(),
        }
    }

    /// Returns the position of the [`Line`] with the provided
    /// [`listing::Id`], if any.
    fn position(&self, id: listing::Id) -> Option<usize> {
        self.lines.iter().position(|l| l.listing_id == id)
    }
}

/// Interest in a single [`Listing`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Line {
    /// ID of the [`Listing`] this [`Line`] is about.
    pub listing_id: listing::Id,

    /// [`listing::Title`] at the moment of insertion.
    pub title: listing::Title,

    /// Price of a single unit at the moment of insertion.
    pub price: Money,

    /// [`listing::Address`] at the moment of insertion.
    pub address: listing::Address,

    /// Cover image at the moment of insertion.
    pub image: listing::ImageUrl,

    /// [`Quantity`] of this [`Line`].
    pub quantity: Quantity,

    /// [`Intent`] of this [`Line`].
    pub intent: Intent,
}

impl Line {
    /// Creates a new [`Line`] of a single unit of the provided [`Listing`].
    fn new(listing: &Listing, intent: Intent) -> Self {
        Self {
            listing_id: listing.id,
            title: listing.title.clone(),
            price: listing.price,
            address: listing.address.clone(),
            image: listing.image.clone(),
            quantity: Quantity::ONE,
            intent,
        }
    }

    /// Returns the total price of this [`Line`].
    #[must_use]
    pub fn total(&self) -> Money {
        self.price.times(self.quantity.get())
    }
}

/// Positive quantity of a [`Line`].
#[derive(Clone, Copy, Debug, Display, Eq, Into, Ord, PartialEq, PartialOrd)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// Single unit.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Creates a new [`Quantity`] if the provided `value` is positive.
    #[must_use]
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    /// Returns the numeric value of this [`Quantity`].
    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns this [`Quantity`] increased by one unit.
    #[must_use]
    fn incremented(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

define_kind! {
    #[doc = "Kind of a transaction a [`Line`] expresses interest in."]
    enum Intent {
        #[doc = "Buying the property."]
        Purchase = 1,

        #[doc = "Renting the property."]
        Rent = 2,
    }
}

/// Fees applied on top of a [`Cart`] subtotal.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Pricing {
    /// Fixed documentation fee.
    ///
    /// Its [`Currency`] is the [`Currency`] of all the [`Totals`].
    #[default(Money::new(Decimal::from(5000), Currency::Brl))]
    pub documentation_fee: Money,

    /// Estimated transfer tax, as a share of the subtotal.
    #[default(Percent::new(Decimal::TWO).expect("valid `Percent`"))]
    pub transfer_tax: Percent,
}

impl Pricing {
    /// Returns the [`Currency`] [`Totals`] are calculated in.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.documentation_fee.currency
    }
}

/// Calculated totals of a [`Cart`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Totals {
    /// Sum of all the [`Line::total()`]s.
    pub subtotal: Money,

    /// Fixed documentation fee.
    pub documentation_fee: Money,

    /// Estimated transfer tax.
    pub transfer_tax: Money,

    /// Grand total.
    pub total: Money,

    /// Number of [`Line`]s.
    pub lines: usize,

    /// Sum of [`Quantity`]s.
    pub units: u64,
}

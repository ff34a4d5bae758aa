//! [`Inquiry`] definitions.

use common::{define_kind, unit, DateTimeOf};
use derive_more::{AsRef, Display, From, Into};
use uuid::Uuid;

#[cfg(doc)]
use crate::domain::cart::Cart;
use crate::domain::{
    cart::{Line, Totals},
    user,
};

/// Request handed over to the agency's backend.
#[derive(Clone, Debug, From)]
pub enum Inquiry {
    /// Checkout of a [`Cart`].
    Order(Order),

    /// Message to the agency.
    Contact(ContactMessage),
}

/// Checkout of a [`Cart`].
#[derive(Clone, Debug)]
pub struct Order {
    /// [`Line`]s of the checked out [`Cart`].
    pub lines: Vec<Line>,

    /// [`Totals`] of the checked out [`Cart`].
    pub totals: Totals,

    /// Preferred [`PaymentMethod`].
    pub payment: PaymentMethod,

    /// Preferred date of a property visit.
    pub visit_date: Option<VisitDateTime>,

    /// Preferred [`VisitPeriod`] of the day.
    pub visit_period: Option<VisitPeriod>,

    /// [`ContactDetails`] of the client.
    pub contact: ContactDetails,

    /// [`PlacementDateTime`] of this [`Order`].
    pub placed_at: PlacementDateTime,
}

/// Contact details of a client placing an [`Order`].
#[derive(Clone, Debug)]
pub struct ContactDetails {
    /// Name of the client.
    pub name: user::Name,

    /// Email of the client.
    pub email: user::Email,

    /// Phone of the client.
    pub phone: user::Phone,
}

/// Message to the agency.
#[derive(Clone, Debug)]
pub struct ContactMessage {
    /// Name of the sender.
    pub name: user::Name,

    /// Email of the sender.
    pub email: user::Email,

    /// [`Subject`] of this [`ContactMessage`].
    pub subject: Subject,

    /// [`Text`] of this [`ContactMessage`].
    pub message: Text,
}

/// Subject of a [`ContactMessage`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Subject(String);

impl Subject {
    /// Creates a new [`Subject`] if the given `subject` is valid.
    #[must_use]
    pub fn new(subject: impl Into<String>) -> Option<Self> {
        let subject = subject.into();
        let valid = !subject.trim().is_empty() && subject.len() <= 256;
        valid.then_some(Self(subject))
    }
}

/// Body of a [`ContactMessage`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Text(String);

impl Text {
    /// Creates a new [`Text`] if the given `text` is not blank.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        (!text.trim().is_empty()).then_some(Self(text))
    }
}

define_kind! {
    #[doc = "Payment method preferred for an [`Order`]."]
    enum PaymentMethod {
        #[doc = "Bank financing."]
        Financing = 1,

        #[doc = "Payment in full."]
        Cash = 2,

        #[doc = "Direct installments."]
        Installments = 3,
    }
}

define_kind! {
    #[doc = "Period of the day preferred for a property visit."]
    enum VisitPeriod {
        #[doc = "From 8 to 12 o'clock."]
        Morning = 1,

        #[doc = "From 12 to 18 o'clock."]
        Afternoon = 2,

        #[doc = "From 18 to 20 o'clock."]
        Evening = 3,
    }
}

/// [`DateTimeOf`] a property visit is preferred at.
pub type VisitDateTime = DateTimeOf<(Order, unit::Visit)>;

/// [`DateTimeOf`] an [`Order`] was placed at.
pub type PlacementDateTime = DateTimeOf<(Order, unit::Creation)>;

/// Acknowledgement of an accepted [`Inquiry`].
#[derive(Clone, Copy, Debug, Display, Eq, From, Hash, Into, PartialEq)]
pub struct Receipt(Uuid);

impl Receipt {
    /// Generates a new random [`Receipt`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Receipt {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod spec {
    use super::{PaymentMethod, Subject, Text, VisitPeriod};

    #[test]
    fn rejects_blank_message() {
        assert!(Subject::new("Visita").is_some());
        assert!(Subject::new("   ").is_none());
        assert!(Text::new("").is_none());
    }

    #[test]
    fn parses_choices() {
        assert_eq!("cash".parse::<PaymentMethod>().unwrap(), PaymentMethod::Cash);
        assert_eq!(
            "Afternoon".parse::<VisitPeriod>().unwrap(),
            VisitPeriod::Afternoon,
        );
        assert!("barter".parse::<PaymentMethod>().is_err());
    }
}

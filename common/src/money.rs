//! [`Money`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::{prelude::ToPrimitive as _, Decimal};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::define_kind;

/// Amount of money in some [`Currency`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Money {
    /// Amount of this [`Money`].
    pub amount: Decimal,

    /// [`Currency`] of this amount.
    pub currency: Currency,
}

impl Money {
    /// Creates a new [`Money`] amount.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount of the provided [`Currency`].
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Adds the `other` [`Money`] to this one.
    ///
    /// [`None`] is returned if currencies differ or the sum overflows.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        if self.currency != other.currency {
            return None;
        }
        self.amount
            .checked_add(other.amount)
            .map(|amount| Self::new(amount, self.currency))
    }

    /// Multiplies this [`Money`] by the provided `times`, saturating at
    /// [`Decimal::MAX`].
    #[must_use]
    pub fn times(self, times: u32) -> Self {
        Self::new(
            self.amount.saturating_mul(Decimal::from(times)),
            self.currency,
        )
    }

    /// Indicates whether this [`Money`] amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { amount, currency } = self;
        let amount = amount.normalize();
        match amount.is_integer().then(|| amount.to_i128()).flatten() {
            Some(int) => write!(f, "{int}{currency}"),
            None => write!(f, "{amount}{currency}"),
        }
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < 4 || !s.is_char_boundary(s.len() - 3) {
            return Err("too short");
        }

        let (amount, currency) = s.split_at(s.len() - 3);
        let amount = Decimal::from_str(amount.trim_end())
            .map_err(|_| "invalid amount")?;
        let currency =
            Currency::from_str(currency).map_err(|_| "invalid currency")?;

        Ok(Self { amount, currency })
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(de::Error::custom)
    }
}

define_kind! {
    #[doc = "Currency of a [`Money`] amount."]
    enum Currency {
        #[doc = "US Dollar."]
        Usd = 1,

        #[doc = "Euro."]
        Eur = 2,

        #[doc = "Russian Ruble."]
        Rub = 3,

        #[doc = "Brazilian Real."]
        Brl = 4,
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::{Currency, Money};

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn from_str() {
        assert_eq!(
            Money::from_str("123.45USD").unwrap(),
            Money {
                amount: decimal("123.45"),
                currency: Currency::Usd,
            },
        );
        assert_eq!(
            Money::from_str("850000BRL").unwrap(),
            Money {
                amount: decimal("850000"),
                currency: Currency::Brl,
            },
        );
        assert_eq!(
            Money::from_str("5000 brl").unwrap(),
            Money {
                amount: decimal("5000"),
                currency: Currency::Brl,
            },
        );

        assert!(Money::from_str("123.45").is_err());
        assert!(Money::from_str("123.45Us").is_err());
        assert!(Money::from_str("123.45Usdollar").is_err());

        assert!(Money::from_str("123.00USD").is_ok());
        assert!(Money::from_str("123USD").is_ok());
    }

    #[test]
    fn to_string() {
        assert_eq!(
            Money::new(decimal("123.45"), Currency::Eur).to_string(),
            "123.45EUR",
        );
        assert_eq!(
            Money::new(decimal("123.00"), Currency::Usd).to_string(),
            "123USD",
        );
        assert_eq!(
            Money::new(decimal("1739000.000"), Currency::Brl).to_string(),
            "1739000BRL",
        );
        assert_eq!(
            Money::new(decimal("12.50"), Currency::Brl).to_string(),
            "12.5BRL",
        );
    }

    #[test]
    fn arithmetic() {
        let price = Money::new(decimal("850000"), Currency::Brl);

        assert_eq!(
            price.times(2),
            Money::new(decimal("1700000"), Currency::Brl),
        );
        assert_eq!(
            price.checked_add(Money::new(decimal("5000"), Currency::Brl)),
            Some(Money::new(decimal("855000"), Currency::Brl)),
        );
        assert_eq!(
            price.checked_add(Money::new(decimal("5000"), Currency::Usd)),
            None,
        );
        assert_eq!(
            Money::new(Decimal::MAX, Currency::Brl)
                .checked_add(Money::new(Decimal::ONE, Currency::Brl)),
            None,
        );
        assert_eq!(
            Money::new(Decimal::MAX, Currency::Brl).times(2).amount,
            Decimal::MAX,
        );
        assert!(!Money::zero(Currency::Brl).is_negative());
        assert!(Money::new(decimal("-1"), Currency::Brl).is_negative());
    }
}

//! [`Percent`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Floating-point percentage in the `[0; 100]` range.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[display("{_0}%")]
pub struct Percent(Decimal);

impl Percent {
    /// Creates a new [`Percent`] by checking the provided value is
    /// between `0` and `100` (inclusive).
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        (Decimal::ZERO..=Decimal::ONE_HUNDRED)
            .contains(&val)
            .then_some(Self(val))
    }

    /// Applies this [`Percent`] to the provided `amount`.
    ///
    /// Saturates at [`Decimal::MAX`] instead of overflowing.
    #[must_use]
    pub fn of(self, amount: Decimal) -> Decimal {
        amount.saturating_mul(self.0) / Decimal::ONE_HUNDRED
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Decimal::from_str(s.strip_suffix('%').unwrap_or(s).trim_end())
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}

impl Serialize for Percent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Percent {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::Percent;

    #[test]
    fn from_str() {
        assert_eq!(
            Percent::from_str("2").unwrap(),
            Percent::new(Decimal::TWO).unwrap(),
        );
        assert_eq!(
            Percent::from_str("2.5%").unwrap(),
            Percent::new(Decimal::new(25, 1)).unwrap(),
        );
        assert!(Percent::from_str("0").is_ok());
        assert!(Percent::from_str("100").is_ok());

        assert!(Percent::from_str("-1").is_err());
        assert!(Percent::from_str("100.01").is_err());
        assert!(Percent::from_str("two").is_err());
    }

    #[test]
    fn applies_to_amount() {
        let tax = Percent::new(Decimal::TWO).unwrap();

        assert_eq!(tax.of(Decimal::new(1_700_000, 0)), Decimal::new(34_000, 0));
        assert_eq!(tax.of(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn to_string() {
        assert_eq!(Percent::new(Decimal::TWO).unwrap().to_string(), "2%");
    }
}

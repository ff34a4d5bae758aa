//! [`Transaction`] read model definitions.

use common::{money::Currency, Money};

use crate::domain::{transaction::Status, Transaction};

pub mod list {
    //! [`Transaction`]s list definitions.

    use std::time::Duration;

    use common::{define_kind, DateTime};
    use smart_default::SmartDefault;

    use crate::domain::{transaction, Transaction};

    /// Filter of a [`Transaction`]s list.
    #[derive(Clone, Debug, Default)]
    pub struct Filter {
        /// Term to search for in [`transaction::Code`]s, titles and
        /// addresses.
        pub search: Option<String>,

        /// [`transaction::Status`] to keep.
        pub status: Option<transaction::Status>,

        /// [`Period`] to keep.
        pub period: Period,
    }

    impl Filter {
        /// Checks whether the provided [`Transaction`] passes this
        /// [`Filter`] at the provided `now` moment.
        #[must_use]
        pub fn matches(&self, tx: &Transaction, now: DateTime) -> bool {
            self.search.as_deref().is_none_or(|term| tx.mentions(term))
                && self.status.is_none_or(|s| tx.status == s)
                && self.period.contains(tx.date.coerce(), now)
        }
    }

    define_kind! {
        #[doc = "Period a [`Transaction`] is dated within."]
        #[derive(SmartDefault)]
        enum Period {
            #[doc = "Any date."]
            #[default]
            All = 1,

            #[doc = "Last [`Period::RECENT_DAYS`] days."]
            Recent = 2,
        }
    }

    impl Period {
        /// Number of days considered [`Period::Recent`].
        pub const RECENT_DAYS: u64 = 30;

        /// Checks whether the provided `date` falls into this [`Period`]
        /// at the provided `now` moment.
        #[must_use]
        pub fn contains(self, date: DateTime, now: DateTime) -> bool {
            match self {
                Self::All => true,
                Self::Recent => {
                    date > now - Duration::from_secs(Self::RECENT_DAYS * 86_400)
                }
            }
        }
    }
}

/// Summary of a [`Transaction`]s history.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Stats {
    /// Total number of [`Transaction`]s.
    pub total: usize,

    /// Number of [`Status::Completed`] [`Transaction`]s.
    pub completed: usize,

    /// Number of [`Status::InProgress`] [`Transaction`]s.
    pub in_progress: usize,

    /// Sum of all the amounts, zero for an empty history.
    ///
    /// [`None`] if amounts are in different currencies.
    pub volume: Option<Money>,
}

impl Stats {
    /// Summarizes the provided [`Transaction`]s, whose amounts are expected
    /// in the provided [`Currency`].
    #[must_use]
    pub fn of(txs: &[Transaction], currency: Currency) -> Self {
        let count = |s| txs.iter().filter(|t| t.status == s).count();
        let volume = txs
            .iter()
            .try_fold(Money::zero(currency), |sum, t| sum.checked_add(t.amount));
        Self {
            total: txs.len(),
            completed: count(Status::Completed),
            in_progress: count(Status::InProgress),
            volume,
        }
    }
}

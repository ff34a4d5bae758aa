//! [`Settings`] of a [`User`].

use std::{collections::HashSet, mem};

use common::{define_kind, money::Currency};
use smart_default::SmartDefault;

#[cfg(doc)]
use crate::domain::User;

/// Notification and display preferences of a [`User`].
#[derive(Clone, Debug, Eq, PartialEq, SmartDefault)]
pub struct Settings {
    /// Enabled [`Notification`]s.
    #[default(HashSet::from([
        Notification::EmailAlerts,
        Notification::PushNotifications,
        Notification::PriceAlerts,
        Notification::NewListings,
    ]))]
    notifications: HashSet<Notification>,

    /// Preferred [`Language`].
    pub language: Language,

    /// [`Currency`] prices are preferred in.
    #[default(Currency::Brl)]
    pub currency: Currency,

    /// Preferred [`Theme`].
    pub theme: Theme,
}

impl Settings {
    /// Indicates whether the provided [`Notification`] is enabled.
    #[must_use]
    pub fn is_enabled(&self, notification: Notification) -> bool {
        self.notifications.contains(&notification)
    }

    /// Applies the provided [`Change`].
    ///
    /// Returns `false` if nothing has changed.
    pub fn apply(&mut self, change: Change) -> bool {
        match change {
            Change::Notification(n, true) => self.notifications.insert(n),
            Change::Notification(n, false) => self.notifications.remove(&n),
            Change::Language(l) => mem::replace(&mut self.language, l) != l,
            Change::Currency(c) => mem::replace(&mut self.currency, c) != c,
            Change::Theme(t) => mem::replace(&mut self.theme, t) != t,
        }
    }
}

/// Single change of [`Settings`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Change {
    /// Enables or disables a [`Notification`].
    Notification(Notification, bool),

    /// Switches the [`Language`].
    Language(Language),

    /// Switches the preferred [`Currency`].
    Currency(Currency),

    /// Switches the [`Theme`].
    Theme(Theme),
}

define_kind! {
    #[doc = "Kind of notifications a [`User`] may receive."]
    enum Notification {
        #[doc = "Emails about the account activity."]
        EmailAlerts = 1,

        #[doc = "SMS about the account activity."]
        SmsAlerts = 2,

        #[doc = "Push notifications."]
        PushNotifications = 3,

        #[doc = "Promotional emails."]
        MarketingEmails = 4,

        #[doc = "Price changes of favorite listings."]
        PriceAlerts = 5,

        #[doc = "Newly published listings."]
        NewListings = 6,
    }
}

define_kind! {
    #[doc = "Language of the interface."]
    #[derive(SmartDefault)]
    enum Language {
        #[doc = "Brazilian Portuguese."]
        #[default]
        PtBr = 1,

        #[doc = "American English."]
        EnUs = 2,

        #[doc = "Spanish."]
        EsEs = 3,
    }
}

define_kind! {
    #[doc = "Color theme of the interface."]
    #[derive(SmartDefault)]
    enum Theme {
        #[doc = "Light background."]
        #[default]
        Light = 1,

        #[doc = "Dark background."]
        Dark = 2,
    }
}

#[cfg(test)]
mod spec {
    use common::money::Currency;

    use super::{Change, Language, Notification, Settings, Theme};

    #[test]
    fn defaults_to_common_alerts() {
        let settings = Settings::default();

        assert!(settings.is_enabled(Notification::EmailAlerts));
        assert!(settings.is_enabled(Notification::PriceAlerts));
        assert!(!settings.is_enabled(Notification::SmsAlerts));
        assert!(!settings.is_enabled(Notification::MarketingEmails));
        assert_eq!(settings.language, Language::PtBr);
        assert_eq!(settings.currency, Currency::Brl);
        assert_eq!(settings.theme, Theme::Light);
    }

    #[test]
    fn reports_actual_changes() {
        let mut settings = Settings::default();
        let sms = |on| Change::Notification(Notification::SmsAlerts, on);

        assert!(settings.apply(sms(true)));
        assert!(!settings.apply(sms(true)));
        assert!(settings.is_enabled(Notification::SmsAlerts));

        assert!(settings
            .apply(Change::Notification(Notification::PriceAlerts, false)));
        assert!(!settings.is_enabled(Notification::PriceAlerts));

        assert!(settings.apply(Change::Theme(Theme::Dark)));
        assert!(!settings.apply(Change::Theme(Theme::Dark)));
        assert!(!settings.apply(Change::Language(Language::PtBr)));
        assert!(settings.apply(Change::Currency(Currency::Usd)));
        assert_eq!(settings.currency, Currency::Usd);
    }

    #[test]
    fn parses_kinds() {
        assert_eq!("pt_br".parse::<Language>().unwrap(), Language::PtBr);
        assert_eq!(
            "PRICE_ALERTS".parse::<Notification>().unwrap(),
            Notification::PriceAlerts,
        );
        assert_eq!(Theme::Dark.to_string(), "DARK");
    }
}

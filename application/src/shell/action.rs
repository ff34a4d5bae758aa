//! [`Action`] definitions.

use std::str::FromStr;

use common::DateTimeOf;
use derive_more::{Display, Error};
use service::{
    domain::{
        cart::Intent,
        inquiry::{PaymentMethod, Subject, Text, VisitDateTime, VisitPeriod},
        listing,
        transaction::Status,
        user::{self, settings},
        view::{Destination, Page, Step},
    },
    read::{favorite::Order, transaction::list::Period},
};

/// Usage of every [`Action`], as shown by [`Action::Help`].
pub const USAGE: &str = "\
Navigation:
  home | dashboard | favorites | transactions | profile | about
  go <page> [listing]        open any page
  open <listing>             open details of a listing
  next | prev                browse photos of the opened listing
Filters of the current page:
  search [term]              search by title or address (empty clears)
  category [kind]            apartment, house, penthouse, loft (empty clears)
  featured on|off            show featured listings only
  sort <order>               recent, price-low, price-high, area
  status [status]            completed, in-progress, pending, cancelled
  period all|recent          transactions of the last 30 days
Cart:
  add <listing> [purchase|rent]
  qty <listing> <quantity>   zero or less removes the listing
  remove <listing>
  cart                       show the cart with totals
  checkout <payment> [YYYY-MM-DD] [morning|afternoon|evening]
                             payment: financing, cash, installments
Favorites:
  fav <listing>              add or remove a favorite
Account:
  login <email> <name>
  logout
  name <name> | email <email> | phone [number]
  notify <kind> on|off       email-alerts, sms-alerts, push-notifications,
                             marketing-emails, price-alerts, new-listings
  language <lang>            pt-br, en-us, es-es
  currency <code>            brl, usd, eur, rub
  theme light|dark
  contact <subject> | <message>
Other:
  show | help | quit";

/// Action requested by the user in the shell.
#[derive(Clone, Debug)]
pub enum Action {
    /// Shows [`USAGE`].
    Help,

    /// Leaves the shell.
    Quit,

    /// Renders the current view again.
    Show,

    /// Navigates to the provided [`Destination`].
    Go(Destination),

    /// Browses photos of the opened listing.
    Photo(Step),

    /// Sets the search term of the current view.
    Search(Option<String>),

    /// Sets the [`listing::Category`] filter of the current view.
    Category(Option<listing::Category>),

    /// Toggles showing featured listings only.
    Featured(bool),

    /// Sets the [`Order`] of favorites.
    Sort(Order),

    /// Sets the [`Status`] filter of transactions.
    Status(Option<Status>),

    /// Sets the [`Period`] filter of transactions.
    Period(Period),

    /// Adds an interest in a listing to the cart.
    Add {
        /// ID of the listing.
        listing_id: listing::Id,

        /// [`Intent`] of the interest.
        intent: Intent,
    },

    /// Sets quantity of a cart line.
    Quantity {
        /// ID of the listing.
        listing_id: listing::Id,

        /// New quantity.
        quantity: i64,
    },

    /// Removes a cart line.
    Remove(listing::Id),

    /// Shows the cart.
    Cart,

    /// Checks out the cart.
    Checkout {
        /// Chosen [`PaymentMethod`].
        payment: PaymentMethod,

        /// Preferred visit date.
        visit_date: Option<VisitDateTime>,

        /// Preferred [`VisitPeriod`].
        visit_period: Option<VisitPeriod>,
    },

    /// Toggles a favorite listing.
    Favorite(listing::Id),

    /// Logs in.
    LogIn {
        /// [`user::Email`] to log in with.
        email: user::Email,

        /// [`user::Name`] to log in with.
        name: user::Name,
    },

    /// Logs out.
    LogOut,

    /// Updates the [`user::Name`].
    SetName(user::Name),

    /// Updates the [`user::Email`].
    SetEmail(user::Email),

    /// Updates or removes the [`user::Phone`].
    SetPhone(Option<user::Phone>),

    /// Changes [`user::Settings`].
    Configure(settings::Change),

    /// Sends a message to the agency.
    Contact {
        /// [`Subject`] of the message.
        subject: Subject,

        /// [`Text`] of the message.
        message: Text,
    },
}

impl FromStr for Action {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        use ParseError as E;

        let line = line.trim();
        let (cmd, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(c, r)| (c, r.trim()));
        let mut args = rest.split_whitespace();
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_owned());

        Ok(match cmd.to_ascii_lowercase().as_str() {
            "" => return Err(E::Empty),
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            "show" | "ls" => Self::Show,
            "home" => Self::Go(Destination::Home),
            "dashboard" => Self::Go(Destination::Dashboard),
            "favorites" => Self::Go(Destination::Favorites),
            "transactions" => Self::Go(Destination::Transactions),
            "profile" => Self::Go(Destination::Profile),
            "about" => Self::Go(Destination::About),
            "go" => {
                let page: Page = kind(required(args.next(), "page")?, "page")?;
                match page {
                    Page::PropertyDetails => Self::Go(
                        Destination::PropertyDetails(
                            args.next().map(listing_id).transpose()?,
                        ),
                    ),
                    Page::Home
                    | Page::Dashboard
                    | Page::Favorites
                    | Page::Transactions
                    | Page::Profile
                    | Page::About => Self::Go(page.into()),
                }
            }
            "open" | "details" => Self::Go(Destination::PropertyDetails(Some(
                listing_id(required(args.next(), "listing")?)?,
            ))),
            "next" => Self::Photo(Step::Next),
            "prev" | "previous" => Self::Photo(Step::Previous),
            "search" => Self::Search(non_empty(rest)),
            "category" => Self::Category(
                args.next()
                    .filter(|c| !c.eq_ignore_ascii_case("all"))
                    .map(|c| kind(c, "category"))
                    .transpose()?,
            ),
            "featured" => Self::Featured(toggle(args.next())?),
            "sort" => Self::Sort(kind(required(args.next(), "order")?, "order")?),
            "status" => Self::Status(
                args.next()
                    .filter(|s| !s.eq_ignore_ascii_case("all"))
                    .map(|s| kind(s, "status"))
                    .transpose()?,
            ),
            "period" => {
                Self::Period(kind(required(args.next(), "period")?, "period")?)
            }
            "add" => Self::Add {
                listing_id: listing_id(required(args.next(), "listing")?)?,
                intent: args
                    .next()
                    .map(|i| kind(i, "intent"))
                    .transpose()?
                    .unwrap_or(Intent::Purchase),
            },
            "qty" | "quantity" => Self::Quantity {
                listing_id: listing_id(required(args.next(), "listing")?)?,
                quantity: {
                    let q = required(args.next(), "quantity")?;
                    q.parse().map_err(|_| E::invalid("quantity", q))?
                },
            },
            "remove" | "rm" => {
                Self::Remove(listing_id(required(args.next(), "listing")?)?)
            }
            "cart" => Self::Cart,
            "checkout" => {
                let payment = kind(required(args.next(), "payment")?, "payment")?;
                let mut visit_date = None;
                let mut visit_period = None;
                for arg in args {
                    if let Ok(date) = DateTimeOf::from_date(arg) {
                        visit_date = Some(date);
                    } else {
                        visit_period = Some(kind(arg, "visit period")?);
                    }
                }
                Self::Checkout {
                    payment,
                    visit_date,
                    visit_period,
                }
            }
            "fav" | "favorite" => {
                Self::Favorite(listing_id(required(args.next(), "listing")?)?)
            }
            "login" => {
                let email = required(args.next(), "email")?;
                let name = args.collect::<Vec<_>>().join(" ");
                Self::LogIn {
                    email: email.parse().map_err(|_| E::invalid("email", email))?,
                    name: user::Name::new(required(non_empty(&name), "name")?)
                        .ok_or_else(|| E::invalid("name", &name))?,
                }
            }
            "logout" => Self::LogOut,
            "name" => Self::SetName(
                rest.parse().map_err(|_| E::invalid("name", rest))?,
            ),
            "email" => Self::SetEmail(
                rest.parse().map_err(|_| E::invalid("email", rest))?,
            ),
            "phone" => Self::SetPhone(
                non_empty(rest)
                    .map(|p| p.parse().map_err(|_| E::invalid("phone", &p)))
                    .transpose()?,
            ),
            "notify" => Self::Configure(settings::Change::Notification(
                kind(required(args.next(), "notification")?, "notification")?,
                toggle(args.next())?,
            )),
            "language" => Self::Configure(settings::Change::Language(kind(
                required(args.next(), "language")?,
                "language",
            )?)),
            "currency" => Self::Configure(settings::Change::Currency(kind(
                required(args.next(), "currency")?,
                "currency",
            )?)),
            "theme" => Self::Configure(settings::Change::Theme(kind(
                required(args.next(), "theme")?,
                "theme",
            )?)),
            "contact" => {
                let (subject, message) =
                    rest.split_once('|').ok_or(E::Missing("message"))?;
                Self::Contact {
                    subject: Subject::new(subject.trim())
                        .ok_or(E::Missing("subject"))?,
                    message: Text::new(message.trim())
                        .ok_or(E::Missing("message"))?,
                }
            }
            _ => return Err(E::UnknownCommand(cmd.to_owned())),
        })
    }
}

/// Error of parsing an [`Action`].
#[derive(Clone, Debug, Display, Error, Eq, PartialEq)]
pub enum ParseError {
    /// Nothing was entered.
    #[display("Nothing entered")]
    Empty,

    /// Command is not recognized.
    #[display("Unknown command `{_0}`, type `help` to list commands")]
    UnknownCommand(#[error(not(source))] String),

    /// Required argument is missing.
    #[display("Missing {_0}")]
    Missing(#[error(not(source))] &'static str),

    /// Argument cannot be parsed.
    #[display("Invalid {what}: `{value}`")]
    Invalid {
        /// Name of the argument.
        what: &'static str,

        /// Provided value.
        value: String,
    },
}

impl ParseError {
    /// Creates a new [`ParseError::Invalid`].
    fn invalid(what: &'static str, value: impl AsRef<str>) -> Self {
        Self::Invalid {
            what,
            value: value.as_ref().to_owned(),
        }
    }
}

/// Ensures the `what` argument is present.
fn required<T>(arg: Option<T>, what: &'static str) -> Result<T, ParseError> {
    arg.ok_or(ParseError::Missing(what))
}

/// Parses a [`listing::Id`].
fn listing_id(arg: &str) -> Result<listing::Id, ParseError> {
    arg.trim_start_matches('#')
        .parse()
        .map_err(|_| ParseError::invalid("listing", arg))
}

/// Parses a kind accepting `kebab-case` along with `snake_case`.
fn kind<T: FromStr>(arg: &str, what: &'static str) -> Result<T, ParseError> {
    arg.replace('-', "_")
        .parse()
        .map_err(|_| ParseError::invalid(what, arg))
}

/// Parses an `on`/`off` switch.
fn toggle(arg: Option<&str>) -> Result<bool, ParseError> {
    match required(arg, "on|off")?.to_ascii_lowercase().as_str() {
        "on" | "yes" | "true" => Ok(true),
        "off" | "no" | "false" => Ok(false),
        other => Err(ParseError::invalid("switch", other)),
    }
}

#[cfg(test)]
mod spec {
    use service::{
        domain::{
            cart::Intent,
            inquiry::{PaymentMethod, VisitPeriod},
            listing::Category,
            transaction::Status,
            user::settings::{Change, Language, Notification, Theme},
            view::{Destination, Step},
        },
        read::favorite::Order,
    };

    use super::{Action, ParseError};

    fn parse(line: &str) -> Action {
        line.parse().unwrap()
    }

    #[test]
    fn parses_navigation() {
        assert!(matches!(parse("home"), Action::Go(Destination::Home)));
        assert!(matches!(
            parse("go  Dashboard"),
            Action::Go(Destination::Dashboard),
        ));
        assert!(matches!(
            parse("open #3"),
            Action::Go(Destination::PropertyDetails(Some(id))) if id == 3.into(),
        ));
        assert!(matches!(
            parse("go property-details"),
            Action::Go(Destination::PropertyDetails(None)),
        ));
        assert!(matches!(parse("prev"), Action::Photo(Step::Previous)));
    }

    #[test]
    fn parses_filters() {
        assert!(matches!(
            parse("search  Rua das Flores "),
            Action::Search(Some(s)) if s == "Rua das Flores",
        ));
        assert!(matches!(parse("search"), Action::Search(None)));
        assert!(matches!(
            parse("category loft"),
            Action::Category(Some(Category::Loft)),
        ));
        assert!(matches!(parse("category all"), Action::Category(None)));
        assert!(matches!(parse("featured on"), Action::Featured(true)));
        assert!(matches!(parse("sort price-high"), Action::Sort(Order::PriceHigh)));
        assert!(matches!(
            parse("status in-progress"),
            Action::Status(Some(Status::InProgress)),
        ));
    }

    #[test]
    fn parses_cart_actions() {
        assert!(matches!(
            parse("add 2 rent"),
            Action::Add { listing_id, intent: Intent::Rent } if listing_id == 2.into(),
        ));
        assert!(matches!(
            parse("add 2"),
            Action::Add { intent: Intent::Purchase, .. },
        ));
        assert!(matches!(
            parse("qty 2 0"),
            Action::Quantity { quantity: 0, .. },
        ));
        assert!(matches!(
            parse("qty 2 -3"),
            Action::Quantity { quantity: -3, .. },
        ));

        let Action::Checkout {
            payment,
            visit_date,
            visit_period,
        } = parse("checkout cash 2030-01-15 evening")
        else {
            panic!("not a checkout");
        };
        assert_eq!(payment, PaymentMethod::Cash);
        assert_eq!(visit_date.unwrap().to_date_string(), "2030-01-15");
        assert_eq!(visit_period, Some(VisitPeriod::Evening));
    }

    #[test]
    fn parses_account_actions() {
        let Action::LogIn { email, name } =
            parse("login ana@email.com Ana Souza")
        else {
            panic!("not a login");
        };
        assert_eq!(email.to_string(), "ana@email.com");
        assert_eq!(name.to_string(), "Ana Souza");

        assert!(matches!(parse("phone"), Action::SetPhone(None)));

        let Action::Contact { subject, message } =
            parse("contact Visit | Can I visit on Sunday?")
        else {
            panic!("not a contact");
        };
        assert_eq!(subject.to_string(), "Visit");
        assert_eq!(message.to_string(), "Can I visit on Sunday?");
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!("".parse::<Action>().unwrap_err(), ParseError::Empty);
        assert_eq!(
            "fly".parse::<Action>().unwrap_err(),
            ParseError::UnknownCommand("fly".into()),
        );
        assert_eq!(
            "add".parse::<Action>().unwrap_err(),
            ParseError::Missing("listing"),
        );
        assert!(matches!(
            "add x".parse::<Action>().unwrap_err(),
            ParseError::Invalid { what: "listing", .. },
        ));
        assert!(matches!(
            "login not-an-email Ana".parse::<Action>().unwrap_err(),
            ParseError::Invalid { what: "email", .. },
        ));
        assert_eq!(
            "contact no separator".parse::<Action>().unwrap_err(),
            ParseError::Missing("message"),
        );
    }

    #[test]
    fn parses_settings() {
        assert!(matches!(
            parse("notify price-alerts off"),
            Action::Configure(Change::Notification(
                Notification::PriceAlerts,
                false,
            )),
        ));
        assert!(matches!(
            parse("language en-us"),
            Action::Configure(Change::Language(Language::EnUs)),
        ));
        assert!(matches!(
            parse("theme Dark"),
            Action::Configure(Change::Theme(Theme::Dark)),
        ));

        assert!(matches!(
            "notify sms-alerts".parse::<Action>(),
            Err(ParseError::Missing("on|off")),
        ));
        assert!(matches!(
            "theme neon".parse::<Action>(),
            Err(ParseError::Invalid { what: "theme", .. }),
        ));
    }
}

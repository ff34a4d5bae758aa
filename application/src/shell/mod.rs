//! Interactive [`Shell`] performing [`Action`]s over a [`Context`].

mod action;

use service::{
    command::{self, Command as _},
    domain::{
        inquiry::{ContactDetails, ContactMessage},
        view::{Destination, Details, Page, View},
    },
    query::{self, Query as _},
    read,
};
use tracing as log;

use crate::{
    define_error,
    error::{AsError, Error},
    render, Context,
};

pub use self::action::{Action, ParseError, USAGE};

define_error! {
    enum ShellError {
        #[code = "LOG_IN_REQUIRED"]
        #[message = "Log in first: `login <email> <name>`"]
        LogInRequired,

        #[code = "PHONE_REQUIRED"]
        #[message = "Set a contact phone first: `phone <number>`"]
        PhoneRequired,

        #[code = "LISTING_NOT_FOUND"]
        #[message = "No listing with the provided ID"]
        ListingNotFound,

        #[code = "NOT_IN_CART"]
        #[message = "The listing is not in the cart"]
        NotInCart,

        #[code = "NO_LISTING_OPENED"]
        #[message = "Open a listing first: `open <listing>`"]
        NoListingOpened,
    }
}

/// Reply of a [`Shell`] to an entered line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Reply {
    /// Text to print.
    Print(String),

    /// The [`Shell`] should be left.
    Quit,
}

/// Filters and ordering of the rendered lists.
#[derive(Clone, Debug, Default)]
struct Filters {
    listings: read::listing::list::Filter,
    favorites: read::favorite::Filter,
    order: read::favorite::Order,
    transactions: read::transaction::list::Filter,
}

/// Interactive shell of a browsing session.
#[derive(Debug)]
pub struct Shell {
    /// [`Context`] the [`Action`]s are performed in.
    context: Context,

    /// Presentation state of the lists.
    filters: Filters,
}

impl Shell {
    /// Creates a new [`Shell`] over the provided [`Context`].
    #[must_use]
    pub fn new(context: Context) -> Self {
        Self {
            context,
            filters: Filters::default(),
        }
    }

    /// Returns the [`Context`] of this [`Shell`].
    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Handles an entered `line`.
    ///
    /// Returns [`None`] if nothing was entered. Failures are replied with a
    /// notice.
    pub async fn handle(&mut self, line: &str) -> Option<Reply> {
        let action = match line.parse::<Action>() {
            Ok(action) => action,
            Err(ParseError::Empty) => return None,
            Err(e) => return Some(Reply::Print(Error::input(&e).notice())),
        };
        log::debug!(?action, "performing");

        Some(self.perform(action).await.unwrap_or_else(|e| {
            if e.code == "INTERNAL_ERROR" {
                log::error!("{e}");
            } else {
                log::debug!("{e}");
            }
            Reply::Print(e.notice())
        }))
    }

    /// Performs the provided [`Action`].
    ///
    /// # Errors
    ///
    /// If the [`Action`] cannot be performed in the current state.
    #[expect(clippy::too_many_lines, reason = "flat dispatch")]
    pub async fn perform(&mut self, action: Action) -> Result<Reply, Error> {
        use Action as A;

        let text = match action {
            A::Help => USAGE.to_owned(),
            A::Quit => return Ok(Reply::Quit),
            A::Show => self.render().await?,
            A::Go(to) => self.navigate(to).await?,
            A::Photo(step) => {
                let (svc, session) = self.context.split_mut();
                _ = svc
                    .execute(command::BrowsePhotos { session, step })
                    .await
                    .map_err(AsError::into_error)?
                    .ok_or(ShellError::NoListingOpened)?;
                self.render().await?
            }
            A::Search(term) => {
                let page = match self.page() {
                    Page::Favorites => {
                        self.filters.favorites.search = term;
                        Page::Favorites
                    }
                    Page::Transactions => {
                        self.filters.transactions.search = term;
                        Page::Transactions
                    }
                    Page::Home
                    | Page::Dashboard
                    | Page::PropertyDetails
                    | Page::Profile
                    | Page::About => {
                        self.filters.listings.search = term;
                        Page::Home
                    }
                };
                self.show(page).await?
            }
            A::Category(category) => {
                let page = if self.page() == Page::Favorites {
                    self.filters.favorites.category = category;
                    Page::Favorites
                } else {
                    self.filters.listings.category = category;
                    Page::Home
                };
                self.show(page).await?
            }
            A::Featured(only) => {
                self.filters.listings.featured_only = only;
                self.show(Page::Home).await?
            }
            A::Sort(order) => {
                self.filters.order = order;
                self.show(Page::Favorites).await?
            }
            A::Status(status) => {
                self.filters.transactions.status = status;
                self.show(Page::Transactions).await?
            }
            A::Period(period) => {
                self.filters.transactions.period = period;
                self.show(Page::Transactions).await?
            }
            A::Add { listing_id, intent } => {
                let (svc, session) = self.context.split_mut();
                let line = svc
                    .execute(command::AddInterest {
                        session,
                        listing_id,
                        intent,
                    })
                    .await
                    .map_err(AsError::into_error)?;
                format!(
                    "Added interest in {} ({}), quantity {}.\n{}",
                    line.title,
                    line.intent,
                    line.quantity,
                    self.render_cart().await,
                )
            }
            A::Quantity {
                listing_id,
                quantity,
            } => {
                let (svc, session) = self.context.split_mut();
                if session.cart.line(listing_id).is_none() {
                    return Err(ShellError::NotInCart.into());
                }
                let line = svc
                    .execute(command::SetQuantity {
                        session,
                        listing_id,
                        quantity,
                    })
                    .await
                    .unwrap_or_else(|e| match e {});
                let done = line.map_or_else(
                    || format!("Removed #{listing_id} from the cart."),
                    |l| format!("Quantity of {} set to {}.", l.title, l.quantity),
                );
                format!("{done}\n{}", self.render_cart().await)
            }
            A::Remove(listing_id) => {
                let (svc, session) = self.context.split_mut();
                let line = svc
                    .execute(command::RemoveInterest {
                        session,
                        listing_id,
                    })
                    .await
                    .unwrap_or_else(|e| match e {})
                    .ok_or(ShellError::NotInCart)?;
                format!(
                    "Removed {} from the cart.\n{}",
                    line.title,
                    self.render_cart().await,
                )
            }
            A::Cart => self.render_cart().await,
            A::Checkout {
                payment,
                visit_date,
                visit_period,
            } => {
                let user = self
                    .context
                    .session()
                    .user
                    .clone()
                    .ok_or(ShellError::LogInRequired)?;
                let contact = ContactDetails {
                    phone: user.phone.ok_or(ShellError::PhoneRequired)?,
                    name: user.name,
                    email: user.email,
                };
                let (svc, session) = self.context.split_mut();
                let receipt = svc
                    .execute(command::Checkout {
                        session,
                        payment,
                        visit_date,
                        visit_period,
                        contact,
                    })
                    .await
                    .map_err(AsError::into_error)?;
                format!(
                    "Your interest was sent to the agency, receipt {receipt}. \
                     A broker will contact you soon.",
                )
            }
            A::Favorite(listing_id) => {
                let listing = self
                    .context
                    .service()
                    .execute(query::listing::ById::by(listing_id))
                    .await
                    .map_err(AsError::into_error)?
                    .ok_or(ShellError::ListingNotFound)?;
                let (svc, session) = self.context.split_mut();
                let favorite = svc
                    .execute(command::ToggleFavorite {
                        session,
                        listing_id,
                    })
                    .await
                    .unwrap_or_else(|e| match e {});
                format!(
                    "{} {} favorites.",
                    listing.title,
                    if favorite { "added to" } else { "removed from" },
                )
            }
            A::LogIn { email, name } => {
                let (svc, session) = self.context.split_mut();
                let resumed = svc
                    .execute(command::LogIn {
                        session,
                        name,
                        email,
                    })
                    .await
                    .unwrap_or_else(|e| match e {});
                let greeting = self
                    .context
                    .session()
                    .user
                    .as_ref()
                    .map(|u| format!("Welcome, {}!", u.name))
                    .unwrap_or_default();
                if resumed.is_some() {
                    format!("{greeting}\n{}", self.render().await?)
                } else {
                    greeting
                }
            }
            A::LogOut => {
                let (svc, session) = self.context.split_mut();
                let user = svc
                    .execute(command::LogOut { session })
                    .await
                    .unwrap_or_else(|e| match e {});
                match user {
                    Some(u) => {
                        format!("Goodbye, {}.\n{}", u.name, self.render().await?)
                    }
                    None => "Nobody is logged in.".to_owned(),
                }
            }
            A::SetName(name) => {
                let (svc, session) = self.context.split_mut();
                let user = svc
                    .execute(command::UpdateUserName { session, name })
                    .await
                    .map_err(AsError::into_error)?;
                render::profile(&user)
            }
            A::SetEmail(email) => {
                let (svc, session) = self.context.split_mut();
                let user = svc
                    .execute(command::UpdateUserEmail { session, email })
                    .await
                    .map_err(AsError::into_error)?;
                render::profile(&user)
            }
            A::SetPhone(number) => {
                let (svc, session) = self.context.split_mut();
                let user = svc
                    .execute(command::UpdateUserPhone { session, number })
                    .await
                    .map_err(AsError::into_error)?;
                render::profile(&user)
            }
            A::Configure(change) => {
                let (svc, session) = self.context.split_mut();
                _ = svc
                    .execute(command::UpdateUserSettings { session, change })
                    .await
                    .map_err(AsError::into_error)?;
                render::profile(
                    self.context
                        .session()
                        .user
                        .as_ref()
                        .ok_or(ShellError::LogInRequired)?,
                )
            }
            A::Contact { subject, message } => {
                let user = self
                    .context
                    .session()
                    .user
                    .clone()
                    .ok_or(ShellError::LogInRequired)?;
                let receipt = self
                    .context
                    .service()
                    .execute(command::SubmitContact(ContactMessage {
                        name: user.name,
                        email: user.email,
                        subject,
                        message,
                    }))
                    .await
                    .map_err(AsError::into_error)?;
                format!("Message sent, receipt {receipt}.")
            }
        };

        Ok(Reply::Print(text))
    }

    /// Renders the currently displayed [`View`].
    ///
    /// # Errors
    ///
    /// If the data of the [`View`] cannot be queried.
    pub async fn render(&self) -> Result<String, Error> {
        let svc = self.context.service();
        let session = self.context.session();
        let Filters {
            listings: listings_filter,
            favorites: favorites_filter,
            order,
            transactions: transactions_filter,
        } = &self.filters;

        Ok(match session.router.view() {
            View::Home => {
                let listings = svc
                    .execute(query::listings::List::by(listings_filter.clone()))
                    .await
                    .map_err(AsError::into_error)?;
                render::home(&listings, &session.favorites, listings_filter)
            }
            View::Dashboard => {
                let user =
                    session.user.as_ref().ok_or(ShellError::LogInRequired)?;
                let totals = svc
                    .execute(query::cart::Totals(&session.cart))
                    .await
                    .unwrap_or_else(|e| match e {});
                let stats = svc
                    .execute(query::transactions::Stats(session))
                    .await
                    .map_err(AsError::into_error)?;
                render::dashboard(user, session.favorites.len(), &totals, &stats)
            }
            View::PropertyDetails(Details { listing_id, photo }) => {
                let listing = svc
                    .execute(query::listing::ById::by(listing_id))
                    .await
                    .map_err(AsError::into_error)?
                    .ok_or(ShellError::ListingNotFound)?;
                render::details(
                    &listing,
                    photo,
                    session.favorites.contains(listing_id),
                    session.cart.line(listing_id),
                )
            }
            View::Favorites => {
                let entries = svc
                    .execute(query::favorites::List {
                        favorites: &session.favorites,
                        filter: favorites_filter,
                        order: *order,
                    })
                    .await
                    .map_err(AsError::into_error)?;
                render::favorites(
                    &entries,
                    favorites_filter,
                    *order,
                    session.favorites.len(),
                )
            }
            View::Transactions => {
                let txs = svc
                    .execute(query::transactions::List {
                        session,
                        filter: transactions_filter,
                    })
                    .await
                    .map_err(AsError::into_error)?;
                let stats = svc
                    .execute(query::transactions::Stats(session))
                    .await
                    .map_err(AsError::into_error)?;
                render::transactions(&txs, &stats, transactions_filter)
            }
            View::Profile => render::profile(
                session.user.as_ref().ok_or(ShellError::LogInRequired)?,
            ),
            View::About => render::about().to_owned(),
        })
    }

    /// Renders the cart with its totals.
    async fn render_cart(&self) -> String {
        let cart = &self.context.session().cart;
        let totals = self
            .context
            .service()
            .execute(query::cart::Totals(cart))
            .await
            .unwrap_or_else(|e| match e {});
        render::cart(cart, &totals)
    }

    /// Returns the [`Page`] of the currently displayed [`View`].
    fn page(&self) -> Page {
        self.context.session().router.view().page()
    }

    /// Navigates to the provided [`Destination`] and renders the displayed
    /// [`View`].
    async fn navigate(&mut self, to: Destination) -> Result<String, Error> {
        let (svc, session) = self.context.split_mut();
        let navigation = svc
            .execute(command::Navigate { session, to })
            .await
            .map_err(AsError::into_error)?;

        let view = self.render().await?;
        Ok(match render::navigation(navigation) {
            Some(notice) => format!("{notice}\n{view}"),
            None => view,
        })
    }

    /// Renders the provided [`Page`], navigating to it if it's not displayed.
    async fn show(&mut self, page: Page) -> Result<String, Error> {
        if self.page() == page {
            self.render().await
        } else {
            self.navigate(page.into()).await
        }
    }
}

impl AsError for command::add_interest::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "LISTING_NOT_FOUND"]
                #[message = "No listing with the provided ID"]
                ListingNotExists,

                #[code = "CURRENCY_MISMATCH"]
                #[message = "The listing is priced in a currency other than \
                             the cart totals"]
                CurrencyMismatch,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::ListingNotExists(_) => Some(Error::ListingNotExists.into()),
            Self::CurrencyMismatch(_) => Some(Error::CurrencyMismatch.into()),
        }
    }
}

impl AsError for command::checkout::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "EMPTY_CART"]
                #[message = "The cart is empty: `add <listing>` first"]
                EmptyCart,
            }
        }

        match self {
            Self::Backend(e) => e.try_as_error(),
            Self::EmptyCart => Some(Error::EmptyCart.into()),
        }
    }
}

impl AsError for command::update_user_name::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::NotLoggedIn => Some(ShellError::LogInRequired.into()),
        }
    }
}

impl AsError for command::update_user_email::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::NotLoggedIn => Some(ShellError::LogInRequired.into()),
        }
    }
}

impl AsError for command::update_user_phone::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::NotLoggedIn => Some(ShellError::LogInRequired.into()),
        }
    }
}

impl AsError for command::update_user_settings::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::NotLoggedIn => Some(ShellError::LogInRequired.into()),
        }
    }
}

impl AsError for query::transactions::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::NotLoggedIn => Some(ShellError::LogInRequired.into()),
        }
    }
}

#[cfg(test)]
mod spec {
    use service::infra::{backend::Unconnected, InMemory};

    use crate::{Context, Service};

    use super::{Reply, Shell};

    fn shell() -> Shell {
        Shell::new(Context::new(Service::new(
            service::Config::default(),
            InMemory::builtin().unwrap(),
            Unconnected,
        )))
    }

    async fn print(shell: &mut Shell, line: &str) -> String {
        match shell.handle(line).await {
            Some(Reply::Print(text)) => text,
            other => panic!("unexpected reply to `{line}`: {other:?}"),
        }
    }

    #[tokio::test]
    async fn starts_at_catalog() {
        let mut shell = shell();

        let out = print(&mut shell, "show").await;

        assert!(out.starts_with("HOME: 6 listing(s)"), "{out}");
    }

    #[tokio::test]
    async fn ignores_blank_lines_and_quits() {
        let mut shell = shell();

        assert_eq!(shell.handle("   ").await, None);
        assert_eq!(shell.handle("quit").await, Some(Reply::Quit));
    }

    #[tokio::test]
    async fn notices_unknown_commands() {
        let mut shell = shell();

        let out = print(&mut shell, "fly away").await;

        assert!(out.starts_with("[INVALID_INPUT]"), "{out}");
    }

    #[tokio::test]
    async fn resumes_restricted_page_after_log_in() {
        let mut shell = shell();

        let out = print(&mut shell, "dashboard").await;
        assert!(out.contains("Log in to open this page"), "{out}");
        assert!(out.contains("HOME:"), "{out}");

        let out = print(&mut shell, "login ana@email.com Ana").await;
        assert!(out.starts_with("Welcome, Ana!"), "{out}");
        assert!(out.contains("DASHBOARD: welcome, Ana"), "{out}");
    }

    #[tokio::test]
    async fn leaves_restricted_page_on_log_out() {
        let mut shell = shell();
        _ = print(&mut shell, "login ana@email.com Ana").await;
        _ = print(&mut shell, "profile").await;

        let out = print(&mut shell, "logout").await;

        assert!(out.contains("HOME:"), "{out}");
        assert_eq!(print(&mut shell, "logout").await, "Nobody is logged in.");
    }

    #[tokio::test]
    async fn computes_cart_totals() {
        let mut shell = shell();

        let out = print(&mut shell, "add 1").await;

        assert!(out.contains("CART: 1 listing(s), 1 unit(s)"), "{out}");
        assert!(out.contains("Total:             872000BRL"), "{out}");

        let out = print(&mut shell, "qty 1 0").await;
        assert!(out.contains("Removed #1"), "{out}");
        assert!(out.contains("CART is empty"), "{out}");

        let out = print(&mut shell, "remove 1").await;
        assert!(out.starts_with("[NOT_IN_CART]"), "{out}");
    }

    #[tokio::test]
    async fn configures_settings_of_logged_in_user() {
        let mut shell = shell();

        let out = print(&mut shell, "theme dark").await;
        assert!(out.starts_with("[LOG_IN_REQUIRED]"), "{out}");

        _ = print(&mut shell, "login ana@email.com Ana").await;
        _ = print(&mut shell, "notify sms-alerts on").await;
        let out = print(&mut shell, "currency usd").await;

        assert!(out.contains("SMS_ALERTS           on"), "{out}");
        assert!(out.contains("currency USD"), "{out}");
        let user = shell.context().session().user.as_ref().unwrap();
        assert_eq!(user.settings.currency.to_string(), "USD");
    }

    #[tokio::test]
    async fn negative_quantity_empties_line() {
        let mut shell = shell();
        _ = print(&mut shell, "add 1").await;
        _ = print(&mut shell, "add 3 rent").await;

        let out = print(&mut shell, "qty 1 -1").await;

        assert!(out.contains("Removed #1"), "{out}");
        assert!(out.contains("CART: 1 listing(s), 1 unit(s)"), "{out}");
        assert!(shell.context().session().cart.line(1.into()).is_none());
    }

    #[tokio::test]
    async fn checks_out_with_contact_details() {
        let mut shell = shell();
        _ = print(&mut shell, "add 2 rent").await;

        let out = print(&mut shell, "checkout cash").await;
        assert!(out.starts_with("[LOG_IN_REQUIRED]"), "{out}");

        _ = print(&mut shell, "login ana@email.com Ana").await;
        let out = print(&mut shell, "checkout cash").await;
        assert!(out.starts_with("[PHONE_REQUIRED]"), "{out}");

        _ = print(&mut shell, "phone +55 (11) 99999-9999").await;
        let out = print(&mut shell, "checkout financing 2030-01-15").await;
        assert!(out.contains("receipt"), "{out}");
        assert!(shell.context().session().cart.is_empty());

        let out = print(&mut shell, "checkout cash").await;
        assert!(out.starts_with("[EMPTY_CART]"), "{out}");
    }

    #[tokio::test]
    async fn filters_current_list() {
        let mut shell = shell();
        _ = print(&mut shell, "fav 1").await;
        _ = print(&mut shell, "fav 6").await;

        let out = print(&mut shell, "favorites").await;
        assert!(
            out.starts_with("FAVORITES: 2 of 2, sorted by RECENT"),
            "{out}",
        );

        let out = print(&mut shell, "category loft").await;
        assert!(out.starts_with("FAVORITES: 1 of 2"), "{out}");

        let out = print(&mut shell, "home").await;
        assert!(out.starts_with("HOME: 6 listing(s)"), "{out}");
    }

    #[tokio::test]
    async fn browses_photos_of_opened_listing() {
        let mut shell = shell();

        let out = print(&mut shell, "next").await;
        assert!(out.starts_with("[NO_LISTING_OPENED]"), "{out}");

        _ = print(&mut shell, "open 3").await;
        let out = print(&mut shell, "prev").await;
        assert!(out.contains("Photo 5/5"), "{out}");
    }

    #[tokio::test]
    async fn toggles_only_existing_favorites() {
        let mut shell = shell();

        let out = print(&mut shell, "fav 99").await;

        assert!(out.starts_with("[LISTING_NOT_FOUND]"), "{out}");
        assert!(shell.context().session().favorites.is_empty());
    }
}

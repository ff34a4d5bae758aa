//! Text rendering of views.

use std::fmt::Write as _;

use itertools::Itertools as _;
use service::{
    domain::{
        cart::{self, Line},
        transaction::{Rating, Status},
        user::settings::Notification,
        view::{Fallback, Navigation},
        Cart, Favorites, Listing, Transaction, User,
    },
    read::{
        self,
        favorite::{Entry, Order},
    },
};

/// Renders the catalog of [`Listing`]s.
#[must_use]
pub fn home(
    listings: &[Listing],
    favorites: &Favorites,
    filter: &read::listing::list::Filter,
) -> String {
    let mut out = format!("HOME: {} listing(s)", listings.len());
    let active = [
        filter.search.as_ref().map(|s| format!("search \"{s}\"")),
        filter.category.map(|c| format!("category {c}")),
        filter.featured_only.then(|| "featured only".to_owned()),
    ];
    if active.iter().any(Option::is_some) {
        _ = write!(out, " ({})", active.iter().flatten().join(", "));
    }

    if listings.is_empty() {
        out.push_str("\n  No listings match the filters.");
    }
    for l in listings {
        _ = write!(
            out,
            "\n  {} #{:<3} {} | {} | {} | {} bd, {} ba, {} | {}{}",
            if favorites.contains(l.id) { '*' } else { ' ' },
            l.id,
            l.title,
            l.price,
            l.address,
            l.bedrooms,
            l.bathrooms,
            l.area,
            l.category,
            if l.featured { " | FEATURED" } else { "" },
        );
    }
    out
}

/// Renders details of a single [`Listing`] with its `photo`-th photo.
#[must_use]
pub fn details(
    listing: &Listing,
    photo: usize,
    favorite: bool,
    line: Option<&Line>,
) -> String {
    let Listing {
        id,
        title,
        price,
        address,
        bedrooms,
        bathrooms,
        area,
        category,
        featured,
        ..
    } = listing;

    let mut out = format!("PROPERTY #{id}: {title}");
    if *featured {
        out.push_str(" [FEATURED]");
    }
    _ = write!(
        out,
        "\n  {price}\n  {address}\n  {category}: {bedrooms} bedroom(s), \
         {bathrooms} bathroom(s), {area}",
    );
    if let Some(url) = listing.photos().nth(photo) {
        _ = write!(
            out,
            "\n  Photo {}/{}: {url}",
            photo + 1,
            listing.num_photos(),
        );
    }
    _ = write!(
        out,
        "\n  {}",
        if favorite { "In favorites" } else { "Not in favorites" },
    );
    if let Some(line) = line {
        _ = write!(out, "\n  In cart: {} x{}", line.intent, line.quantity);
    }
    out
}

/// Renders favorite [`Entry`]s.
#[must_use]
pub fn favorites(
    entries: &[Entry],
    filter: &read::favorite::Filter,
    order: Order,
    total: usize,
) -> String {
    let mut out =
        format!("FAVORITES: {} of {total}, sorted by {order}", entries.len());
    if let Some(s) = &filter.search {
        _ = write!(out, ", search \"{s}\"");
    }
    if let Some(c) = filter.category {
        _ = write!(out, ", category {c}");
    }

    if total == 0 {
        out.push_str("\n  No favorites yet: use `fav <listing>` to add one.");
    } else if entries.is_empty() {
        out.push_str("\n  No favorites match the filters.");
    }
    for Entry { listing: l, added_at } in entries {
        _ = write!(
            out,
            "\n  #{:<3} {} | {} | {} | {} | added {}",
            l.id,
            l.title,
            l.price,
            l.area,
            l.category,
            added_at.to_date_string(),
        );
    }
    out
}

/// Renders the history of [`Transaction`]s.
#[must_use]
pub fn transactions(
    txs: &[Transaction],
    stats: &read::transaction::Stats,
    filter: &read::transaction::list::Filter,
) -> String {
    let read::transaction::Stats {
        total,
        completed,
        in_progress,
        volume,
    } = stats;

    let mut out = format!(
        "TRANSACTIONS: {total} total, {completed} completed, \
         {in_progress} in progress, volume {}",
        volume.as_ref().map_or_else(|| "-".to_owned(), ToString::to_string),
    );
    _ = write!(
        out,
        "\n  Showing {} ({}, {}{})",
        txs.len(),
        filter.status.map_or_else(|| "any status".to_owned(), |s| s.to_string()),
        filter.period,
        filter
            .search
            .as_ref()
            .map(|s| format!(", search \"{s}\""))
            .unwrap_or_default(),
    );

    if txs.is_empty() {
        out.push_str("\n  No transactions match the filters.");
    }
    for tx in txs {
        _ = write!(
            out,
            "\n  {} | {} | {} | {} | {} | {}\n    {} | broker {}",
            tx.code,
            tx.date.to_date_string(),
            tx.kind,
            tx.status,
            tx.amount,
            tx.title,
            tx.address,
            tx.broker,
        );
        match tx.status {
            Status::InProgress => {
                if let Some(p) = tx.progress {
                    _ = write!(out, " | progress {p}");
                }
            }
            Status::Completed => {
                if let Some(r) = tx.rating {
                    _ = write!(out, " | rated {}/{}", r.stars(), Rating::MAX);
                }
            }
            Status::Pending | Status::Cancelled => {}
        }
        if !tx.documents.is_empty() {
            _ = write!(out, "\n    documents: {}", tx.documents.iter().join(", "));
        }
    }
    out
}

/// Renders the personal area of the logged-in [`User`].
#[must_use]
pub fn dashboard(
    user: &User,
    favorites: usize,
    totals: &cart::Totals,
    stats: &read::transaction::Stats,
) -> String {
    format!(
        "DASHBOARD: welcome, {}\n  Favorites: {favorites}\n  \
         Cart: {} listing(s), {} unit(s), total {}\n  \
         Transactions: {} ({} in progress)",
        user.name,
        totals.lines,
        totals.units,
        totals.total,
        stats.total,
        stats.in_progress,
    )
}

/// Renders profile settings of the logged-in [`User`].
#[must_use]
pub fn profile(user: &User) -> String {
    let settings = &user.settings;
    let notifications = Notification::ALL.iter().format_with("", |&n, f| {
        f(&format_args!(
            "\n    {:<20} {}",
            n.to_string(),
            if settings.is_enabled(n) { "on" } else { "off" },
        ))
    });
    format!(
        "PROFILE\n  Name:  {}\n  Email: {}\n  Phone: {}\n  \
         Notifications:{notifications}\n  \
         Preferences: language {}, currency {}, theme {}",
        user.name,
        user.email,
        user.phone
            .as_ref()
            .map_or_else(|| "-".to_owned(), ToString::to_string),
        settings.language,
        settings.currency,
        settings.theme,
    )
}

/// Renders the informational page about the agency.
#[must_use]
pub fn about() -> &'static str {
    "ABOUT\n  \
     A real estate agency helping to buy, sell and rent apartments, \
     houses, penthouses and lofts.\n  \
     Use `contact <subject> | <message>` to reach us."
}

/// Renders the [`Cart`] along with its [`cart::Totals`].
#[must_use]
pub fn cart(cart: &Cart, totals: &cart::Totals) -> String {
    if cart.is_empty() {
        return "CART is empty: use `add <listing>` to express an interest."
            .to_owned();
    }

    let lines = cart.lines().iter().format_with("", |l, f| {
        f(&format_args!(
            "\n  #{:<3} {} | {} | {} x{} = {}",
            l.listing_id,
            l.title,
            l.intent,
            l.price,
            l.quantity,
            l.total(),
        ))
    });
    let cart::Totals {
        subtotal,
        documentation_fee,
        transfer_tax,
        total,
        lines: num_lines,
        units,
    } = totals;
    format!(
        "CART: {num_lines} listing(s), {units} unit(s){lines}\n  \
         Subtotal:          {subtotal}\n  \
         Documentation fee: {documentation_fee}\n  \
         Transfer tax:      {transfer_tax}\n  \
         Total:             {total}",
    )
}

/// Renders a notice about the provided [`Navigation`], if it needs one.
#[must_use]
pub fn navigation(navigation: Navigation) -> Option<&'static str> {
    match navigation {
        Navigation::Shown => None,
        Navigation::Redirected(Fallback::MissingListing) => {
            Some("Listing not found, showing the catalog instead.")
        }
        Navigation::Redirected(Fallback::LogInRequired) => Some(
            "Log in to open this page: `login <email> <name>`. \
             It opens right after.",
        ),
    }
}

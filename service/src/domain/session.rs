//! [`Session`] definitions.

use crate::domain::{Cart, Favorites, Router, User};

/// State of a single browsing session.
///
/// Lives in memory only and is lost once the process exits.
#[derive(Debug, Default)]
pub struct Session {
    /// Logged-in [`User`], if any.
    pub user: Option<User>,

    /// [`Cart`] of interests.
    pub cart: Cart,

    /// [`Favorites`] of this [`Session`].
    pub favorites: Favorites,

    /// [`Router`] of the displayed view.
    pub router: Router,
}

impl Session {
    /// Indicates whether a [`User`] is logged in.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}

//! [`View`] routing definitions.

use common::define_kind;

#[cfg(doc)]
use crate::domain::{Listing, User};
use crate::domain::listing;

define_kind! {
    #[doc = "Page-level template a [`View`] is rendered with."]
    enum Page {
        #[doc = "Catalog of [`Listing`]s."]
        Home = 1,

        #[doc = "Personal area of a logged-in [`User`]."]
        Dashboard = 2,

        #[doc = "Details of a single [`Listing`]."]
        PropertyDetails = 3,

        #[doc = "Favorite [`Listing`]s."]
        Favorites = 4,

        #[doc = "Transaction history of a logged-in [`User`]."]
        Transactions = 5,

        #[doc = "Profile settings of a logged-in [`User`]."]
        Profile = 6,

        #[doc = "Informational page about the agency."]
        About = 7,
    }
}

impl Page {
    /// Indicates whether this [`Page`] is only available to a logged-in
    /// [`User`].
    #[must_use]
    pub const fn requires_user(self) -> bool {
        matches!(self, Self::Dashboard | Self::Transactions | Self::Profile)
    }
}

/// Currently displayed view.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum View {
    /// [`Page::Home`].
    #[default]
    Home,

    /// [`Page::Dashboard`].
    Dashboard,

    /// [`Page::PropertyDetails`] of the selected [`Listing`].
    PropertyDetails(Details),

    /// [`Page::Favorites`].
    Favorites,

    /// [`Page::Transactions`].
    Transactions,

    /// [`Page::Profile`].
    Profile,

    /// [`Page::About`].
    About,
}

impl View {
    /// Returns the [`Page`] this [`View`] is rendered with.
    #[must_use]
    pub const fn page(&self) -> Page {
        match self {
            Self::Home => Page::Home,
            Self::Dashboard => Page::Dashboard,
            Self::PropertyDetails(_) => Page::PropertyDetails,
            Self::Favorites => Page::Favorites,
            Self::Transactions => Page::Transactions,
            Self::Profile => Page::Profile,
            Self::About => Page::About,
        }
    }
}

/// Context of a [`View::PropertyDetails`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Details {
    /// ID of the displayed [`Listing`].
    pub listing_id: listing::Id,

    /// Index of the displayed photo in [`Listing::photos()`].
    pub photo: usize,
}

/// Requested navigation target.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Destination {
    /// Navigate to [`View::Home`].
    Home,

    /// Navigate to [`View::Dashboard`].
    Dashboard,

    /// Navigate to [`View::PropertyDetails`] of the selected [`Listing`], if
    /// any was selected.
    PropertyDetails(Option<listing::Id>),

    /// Navigate to [`View::Favorites`].
    Favorites,

    /// Navigate to [`View::Transactions`].
    Transactions,

    /// Navigate to [`View::Profile`].
    Profile,

    /// Navigate to [`View::About`].
    About,
}

impl Destination {
    /// Returns the [`Page`] this [`Destination`] leads to.
    #[must_use]
    pub const fn page(&self) -> Page {
        match self {
            Self::Home => Page::Home,
            Self::Dashboard => Page::Dashboard,
            Self::PropertyDetails(_) => Page::PropertyDetails,
            Self::Favorites => Page::Favorites,
            Self::Transactions => Page::Transactions,
            Self::Profile => Page::Profile,
            Self::About => Page::About,
        }
    }
}

impl From<Page> for Destination {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Self::Home,
            Page::Dashboard => Self::Dashboard,
            Page::PropertyDetails => Self::PropertyDetails(None),
            Page::Favorites => Self::Favorites,
            Page::Transactions => Self::Transactions,
            Page::Profile => Self::Profile,
            Page::About => Self::About,
        }
    }
}

/// Outcome of a [`Router::navigate()`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Navigation {
    /// Requested [`Destination`] is displayed.
    Shown,

    /// [`View::Home`] is displayed instead of the requested [`Destination`].
    Redirected(Fallback),
}

/// Reason of a [`Navigation::Redirected`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Fallback {
    /// No existing [`Listing`] was selected for [`Page::PropertyDetails`].
    MissingListing,

    /// [`Page`] requires a logged-in [`User`]: a log-in prompt is pending.
    LogInRequired,
}

/// Direction of browsing [`Listing::photos()`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Step {
    /// Next photo, wrapping to the first one.
    Next,

    /// Previous photo, wrapping to the last one.
    Previous,
}

/// Router selecting exactly one [`View`] at a time.
///
/// Starts at [`View::Home`], keeps no history, and never fails: requests
/// that cannot be satisfied resolve to [`View::Home`].
#[derive(Clone, Debug, Default)]
pub struct Router {
    /// Currently displayed [`View`].
    view: View,

    /// [`Destination`] awaiting a log-in.
    pending: Option<Destination>,
}

impl Router {
    /// Returns the currently displayed [`View`].
    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    /// Returns the [`Destination`] awaiting a log-in, if any.
    #[must_use]
    pub fn pending(&self) -> Option<Destination> {
        self.pending
    }

    /// Navigates to the provided [`Destination`].
    ///
    /// [`Destination::PropertyDetails`] must only carry IDs of existing
    /// [`Listing`]s.
    pub fn navigate(
        &mut self,
        to: Destination,
        logged_in: bool,
    ) -> Navigation {
        self.pending = None;

        if to.page().requires_user() && !logged_in {
            self.view = View::Home;
            self.pending = Some(to);
            return Navigation::Redirected(Fallback::LogInRequired);
        }

        self.view = match to {
            Destination::Home => View::Home,
            Destination::Dashboard => View::Dashboard,
            Destination::PropertyDetails(Some(listing_id)) => {
                View::PropertyDetails(Details {
                    listing_id,
                    photo: 0,
                })
            }
            Destination::PropertyDetails(None) => {
                self.view = View::Home;
                return Navigation::Redirected(Fallback::MissingListing);
            }
            Destination::Favorites => View::Favorites,
            Destination::Transactions => View::Transactions,
            Destination::Profile => View::Profile,
            Destination::About => View::About,
        };
        Navigation::Shown
    }

    /// Continues to the [`Destination`] awaiting a log-in, if any.
    pub fn resume(&mut self) -> Option<Navigation> {
        let to = self.pending.take()?;
        Some(self.navigate(to, true))
    }

    /// Leaves the current [`View`] if it requires a logged-in [`User`], and
    /// dismisses a pending log-in prompt.
    ///
    /// Returns `true` if the [`View`] has changed.
    pub fn leave_restricted(&mut self) -> bool {
        self.pending = None;
        if self.view.page().requires_user() {
            self.view = View::Home;
            return true;
        }
        false
    }

    /// Moves the photo cursor of a [`View::PropertyDetails`] by one [`Step`]
    /// over `num_photos` photos.
    ///
    /// Returns the new cursor position, or [`None`] if no
    /// [`View::PropertyDetails`] is displayed.
    pub fn browse_photos(
        &mut self,
        step: Step,
        num_photos: usize,
    ) -> Option<usize> {
        let View::PropertyDetails(details) = &mut self.view else {
            return None;
        };
        let num_photos = num_photos.max(1);
        details.photo = match step {
            Step::Next => (details.photo + 1) % num_photos,
            Step::Previous => (details.photo + num_photos - 1) % num_photos,
        };
        Some(details.photo)
    }
}

#[cfg(test)]
mod spec {
    use crate::domain::listing;

    use super::{Destination, Details, Fallback, Navigation, Page, Router, Step, View};

    #[test]
    fn starts_at_home() {
        let router = Router::default();

        assert_eq!(router.view(), View::Home);
        assert_eq!(router.pending(), None);
    }

    #[test]
    fn details_without_listing_fall_back_to_home() {
        let mut router = Router::default();
        _ = router.navigate(Destination::About, false);

        let nav = router.navigate(Destination::PropertyDetails(None), true);

        assert_eq!(nav, Navigation::Redirected(Fallback::MissingListing));
        assert_eq!(router.view(), View::Home);
    }

    #[test]
    fn details_keep_selected_listing() {
        let mut router = Router::default();
        let id = listing::Id::from(4);

        let nav = router.navigate(Destination::PropertyDetails(Some(id)), false);

        assert_eq!(nav, Navigation::Shown);
        assert_eq!(
            router.view(),
            View::PropertyDetails(Details {
                listing_id: id,
                photo: 0,
            }),
        );
    }

    #[test]
    fn restricted_pages_prompt_for_log_in() {
        for page in [Page::Dashboard, Page::Transactions, Page::Profile] {
            let mut router = Router::default();

            let nav = router.navigate(page.into(), false);

            assert_eq!(nav, Navigation::Redirected(Fallback::LogInRequired));
            assert_eq!(router.view(), View::Home);
            assert_eq!(router.pending(), Some(page.into()));

            assert_eq!(router.resume(), Some(Navigation::Shown));
            assert_eq!(router.view().page(), page);
            assert_eq!(router.pending(), None);
        }
    }

    #[test]
    fn every_page_reaches_home() {
        for &page in Page::ALL {
            let mut router = Router::default();
            let to = match page {
                Page::PropertyDetails => {
                    Destination::PropertyDetails(Some(listing::Id::from(1)))
                }
                other => other.into(),
            };
            _ = router.navigate(to, true);
            assert_eq!(router.view().page(), page);

            assert_eq!(router.navigate(Destination::Home, true), Navigation::Shown);
            assert_eq!(router.view(), View::Home);
        }
    }

    #[test]
    fn navigating_elsewhere_dismisses_prompt() {
        let mut router = Router::default();
        _ = router.navigate(Destination::Profile, false);

        _ = router.navigate(Destination::Favorites, false);

        assert_eq!(router.pending(), None);
        assert_eq!(router.resume(), None);
        assert_eq!(router.view(), View::Favorites);
    }

    #[test]
    fn leaves_restricted_view() {
        let mut router = Router::default();
        _ = router.navigate(Destination::Dashboard, true);
        assert!(router.leave_restricted());
        assert_eq!(router.view(), View::Home);

        _ = router.navigate(Destination::About, true);
        assert!(!router.leave_restricted());
        assert_eq!(router.view(), View::About);
    }

    #[test]
    fn photos_wrap_around() {
        let mut router = Router::default();
        assert_eq!(router.browse_photos(Step::Next, 5), None);

        _ = router.navigate(
            Destination::PropertyDetails(Some(listing::Id::from(1))),
            false,
        );

        assert_eq!(router.browse_photos(Step::Previous, 5), Some(4));
        assert_eq!(router.browse_photos(Step::Next, 5), Some(0));
        assert_eq!(router.browse_photos(Step::Next, 5), Some(1));
        assert_eq!(router.browse_photos(Step::Next, 1), Some(0));
    }
}

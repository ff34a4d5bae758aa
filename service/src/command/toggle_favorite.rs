//! [`Command`] for toggling a favorite [`Listing`].

use std::convert::Infallible;

#[cfg(doc)]
use crate::domain::{Favorites, Listing};
use crate::{
    domain::{listing, Session},
    Service,
};

use super::Command;

/// [`Command`] for adding a [`Listing`] to [`Favorites`], or removing it
/// from there.
#[derive(Debug)]
pub struct ToggleFavorite<'s> {
    /// [`Session`] owning the [`Favorites`].
    pub session: &'s mut Session,

    /// ID of the [`Listing`] to toggle.
    pub listing_id: listing::Id,
}

impl<'s, Db, Bk> Command<ToggleFavorite<'s>> for Service<Db, Bk> {
    /// Indicator whether the [`Listing`] is a favorite after the toggle.
    type Ok = bool;
    type Err = Infallible;

    async fn execute(
        &self,
        cmd: ToggleFavorite<'s>,
    ) -> Result<Self::Ok, Self::Err> {
        let ToggleFavorite {
            session,
            listing_id,
        } = cmd;

        let favorite = session.favorites.toggle(listing_id);
        tracing::info!(%listing_id, favorite, "favorite toggled");

        Ok(favorite)
    }
}

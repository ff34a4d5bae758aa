//! [`Command`] for setting the quantity of a [`cart::Line`].

use std::convert::Infallible;

#[cfg(doc)]
use crate::domain::{Cart, Listing};
use crate::{
    domain::{cart, listing, Session},
    Service,
};

use super::Command;

/// [`Command`] for setting the quantity of a [`cart::Line`].
///
/// Non-positive quantity removes the [`cart::Line`]. Absent [`cart::Line`]
/// is left absent.
#[derive(Debug)]
pub struct SetQuantity<'s> {
    /// [`Session`] owning the [`Cart`].
    pub session: &'s mut Session,

    /// ID of the [`Listing`] the [`cart::Line`] is about.
    pub listing_id: listing::Id,

    /// New quantity of the [`cart::Line`].
    pub quantity: i64,
}

impl<'s, Db, Bk> Command<SetQuantity<'s>> for Service<Db, Bk> {
    /// Updated [`cart::Line`], if it remains in the [`Cart`].
    type Ok = Option<cart::Line>;
    type Err = Infallible;

    async fn execute(
        &self,
        cmd: SetQuantity<'s>,
    ) -> Result<Self::Ok, Self::Err> {
        let SetQuantity {
            session,
            listing_id,
            quantity,
        } = cmd;

        let line = session.cart.set_quantity(listing_id, quantity).cloned();
        tracing::info!(%listing_id, quantity, "quantity set");

        Ok(line)
    }
}

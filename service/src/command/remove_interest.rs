//! [`Command`] for removing a [`cart::Line`].

use std::convert::Infallible;

#[cfg(doc)]
use crate::domain::{Cart, Listing};
use crate::{
    domain::{cart, listing, Session},
    Service,
};

use super::Command;

/// [`Command`] for removing a [`cart::Line`] from a [`Cart`].
#[derive(Debug)]
pub struct RemoveInterest<'s> {
    /// [`Session`] owning the [`Cart`].
    pub session: &'s mut Session,

    /// ID of the [`Listing`] the [`cart::Line`] is about.
    pub listing_id: listing::Id,
}

impl<'s, Db, Bk> Command<RemoveInterest<'s>> for Service<Db, Bk> {
    /// Removed [`cart::Line`], if there was any.
    type Ok = Option<cart::Line>;
    type Err = Infallible;

    async fn execute(
        &self,
        cmd: RemoveInterest<'s>,
    ) -> Result<Self::Ok, Self::Err> {
        let RemoveInterest {
            session,
            listing_id,
        } = cmd;

        let removed = session.cart.remove_interest(listing_id);
        if removed.is_some() {
            tracing::info!(%listing_id, "interest removed");
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        command::{AddInterest, Command as _, SetQuantity},
        domain::{cart::Intent, listing, Session},
        spec::service,
    };

    use super::RemoveInterest;

    #[tokio::test]
    async fn removes_only_present_lines() {
        let svc = service();
        let mut session = Session::default();
        for n in [3, 4] {
            _ = svc
                .execute(AddInterest {
                    session: &mut session,
                    listing_id: listing::Id::from(n),
                    intent: Intent::Rent,
                })
                .await
                .unwrap();
        }

        let removed = svc
            .execute(RemoveInterest {
                session: &mut session,
                listing_id: listing::Id::from(3),
            })
            .await
            .unwrap();
        assert_eq!(removed.map(|l| l.listing_id), Some(listing::Id::from(3)));

        let absent = svc
            .execute(RemoveInterest {
                session: &mut session,
                listing_id: listing::Id::from(3),
            })
            .await
            .unwrap();
        assert!(absent.is_none());
        assert_eq!(session.cart.len(), 1);
    }

    #[tokio::test]
    async fn zero_quantity_removes_line() {
        let svc = service();
        let mut session = Session::default();
        _ = svc
            .execute(AddInterest {
                session: &mut session,
                listing_id: listing::Id::from(5),
                intent: Intent::Purchase,
            })
            .await
            .unwrap();

        let line = svc
            .execute(SetQuantity {
                session: &mut session,
                listing_id: listing::Id::from(5),
                quantity: 3,
            })
            .await
            .unwrap();
        assert_eq!(line.map(|l| l.quantity.get()), Some(3));

        let line = svc
            .execute(SetQuantity {
                session: &mut session,
                listing_id: listing::Id::from(5),
                quantity: 0,
            })
            .await
            .unwrap();
        assert!(line.is_none());
        assert!(session.cart.is_empty());
    }
}

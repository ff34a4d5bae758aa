//! [`Command`] for adding an interest in a [`Listing`] to a [`Cart`].

use common::{
    money::Currency,
    operations::{By, Select},
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Cart;
use crate::{
    domain::{cart, listing, Listing, Session},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for adding an interest in a [`Listing`] to a [`Cart`].
///
/// Repeated interest in the same [`Listing`] increments the quantity of its
/// [`cart::Line`].
#[derive(Debug)]
pub struct AddInterest<'s> {
    /// [`Session`] owning the [`Cart`].
    pub session: &'s mut Session,

    /// ID of the [`Listing`] of interest.
    pub listing_id: listing::Id,

    /// [`cart::Intent`] of a new [`cart::Line`].
    pub intent: cart::Intent,
}

impl<'s, Db, Bk> Command<AddInterest<'s>> for Service<Db, Bk>
where
    Db: Database<
        Select<By<Option<Listing>, listing::Id>>,
        Ok = Option<Listing>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = cart::Line;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: AddInterest<'s>,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AddInterest {
            session,
            listing_id,
            intent,
        } = cmd;

        let listing = self
            .database()
            .execute(Select(By::<Option<Listing>, _>::new(listing_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ListingNotExists(listing_id))
            .map_err(tracerr::wrap!())?;

        let currency = self.config().pricing.currency();
        if listing.price.currency != currency {
            return Err(tracerr::new!(E::CurrencyMismatch(
                listing.price.currency
            )));
        }

        let line = session.cart.add_interest(&listing, intent).clone();
        tracing::info!(
            %listing_id,
            quantity = %line.quantity,
            units = session.cart.units(),
            "interest added",
        );

        Ok(line)
    }
}

/// Error of [`AddInterest`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Listing`] doesn't exist.
    #[display("`Listing(id: {_0})` does not exist")]
    #[from(ignore)]
    ListingNotExists(#[error(not(source))] listing::Id),

    /// [`Listing`] is priced in a [`Currency`] other than [`cart::Totals`].
    #[display("`Listing` is priced in `{_0}` unlike the `Cart` totals")]
    #[from(ignore)]
    CurrencyMismatch(#[error(not(source))] Currency),
}

#[cfg(test)]
mod spec {
    use common::Money;

    use crate::{
        command::Command as _,
        domain::{cart::Intent, listing, Session},
        spec::service,
    };

    use super::{AddInterest, ExecutionError};

    fn add(session: &mut Session, n: u32) -> AddInterest<'_> {
        AddInterest {
            session,
            listing_id: listing::Id::from(n),
            intent: Intent::Purchase,
        }
    }

    #[tokio::test]
    async fn aggregates_by_listing() {
        let svc = service();
        let mut session = Session::default();

        _ = svc.execute(add(&mut session, 1)).await.unwrap();
        let line = svc.execute(add(&mut session, 1)).await.unwrap();

        assert_eq!(line.quantity.get(), 2);
        assert_eq!(session.cart.len(), 1);
        assert_eq!(
            session.cart.totals(&svc.config().pricing).total,
            "1739000BRL".parse::<Money>().unwrap(),
        );
    }

    #[tokio::test]
    async fn copies_display_fields() {
        let svc = service();
        let mut session = Session::default();

        let line = svc.execute(add(&mut session, 6)).await.unwrap();

        assert_eq!(line.title.to_string(), "Loft Industrial no Centro");
        assert_eq!(line.price.to_string(), "720000BRL");
        assert_eq!(line.quantity.get(), 1);
        assert_eq!(line.intent, Intent::Purchase);
    }

    #[tokio::test]
    async fn reports_unknown_listing() {
        let svc = service();
        let mut session = Session::default();
        _ = svc.execute(add(&mut session, 2)).await.unwrap();

        let err = svc.execute(add(&mut session, 999)).await.unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::ListingNotExists(id) if u32::from(*id) == 999,
        ));
        assert_eq!(session.cart.len(), 1);
        assert_eq!(session.cart.units(), 1);
    }
}

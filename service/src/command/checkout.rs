//! [`Command`] for checking out a [`Cart`].

use common::{operations::Submit, DateTimeOf};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Cart;
use crate::{
    domain::{
        inquiry::{
            ContactDetails, Order, PaymentMethod, Receipt, VisitDateTime,
            VisitPeriod,
        },
        Inquiry, Session,
    },
    infra::{backend, Backend},
    Service,
};

use super::Command;

/// [`Command`] for submitting the [`Cart`] as an [`Order`] to the
/// [`Backend`].
///
/// The [`Cart`] is cleared once the [`Backend`] accepts the [`Order`].
#[derive(Debug)]
pub struct Checkout<'s> {
    /// [`Session`] owning the [`Cart`].
    pub session: &'s mut Session,

    /// Preferred [`PaymentMethod`].
    pub payment: PaymentMethod,

    /// Preferred date of a property visit.
    pub visit_date: Option<VisitDateTime>,

    /// Preferred [`VisitPeriod`] of the day.
    pub visit_period: Option<VisitPeriod>,

    /// [`ContactDetails`] of the client.
    pub contact: ContactDetails,
}

impl<'s, Db, Bk> Command<Checkout<'s>> for Service<Db, Bk>
where
    Bk: Backend<Submit<Inquiry>, Ok = Receipt, Err = Traced<backend::Error>>,
{
    type Ok = Receipt;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: Checkout<'s>) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let Checkout {
            session,
            payment,
            visit_date,
            visit_period,
            contact,
        } = cmd;

        if session.cart.is_empty() {
            return Err(tracerr::new!(E::EmptyCart));
        }

        let order = Order {
            lines: session.cart.lines().to_vec(),
            totals: session.cart.totals(&self.config().pricing),
            payment,
            visit_date,
            visit_period,
            contact,
            placed_at: DateTimeOf::now(),
        };
        let receipt = self
            .backend()
            .execute(Submit(order.into()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        session.cart.clear();
        tracing::info!(%receipt, "cart checked out");

        Ok(receipt)
    }
}

/// Error of [`Checkout`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Backend`] error.
    #[display("`Backend` operation failed: {_0}")]
    Backend(backend::Error),

    /// [`Cart`] has nothing to check out.
    #[display("`Cart` is empty")]
    #[from(ignore)]
    EmptyCart,
}

#[cfg(test)]
mod spec {
    use common::operations::Submit;
    use tracerr::Traced;

    use crate::{
        command::{AddInterest, Command as _},
        domain::{
            cart::Intent,
            inquiry::{ContactDetails, PaymentMethod, Receipt, VisitPeriod},
            listing, user, Inquiry, Session,
        },
        infra::{backend, Backend, InMemory},
        spec::service,
        Config, Service,
    };

    use super::{Checkout, ExecutionError};

    fn contact() -> ContactDetails {
        ContactDetails {
            name: user::Name::new("Ana").unwrap(),
            email: user::Email::new("ana@email.com").unwrap(),
            phone: user::Phone::new("(11) 99999-9999").unwrap(),
        }
    }

    fn checkout(session: &mut Session) -> Checkout<'_> {
        Checkout {
            session,
            payment: PaymentMethod::Financing,
            visit_date: None,
            visit_period: Some(VisitPeriod::Morning),
            contact: contact(),
        }
    }

    #[tokio::test]
    async fn rejects_empty_cart() {
        let svc = service();
        let mut session = Session::default();

        let err = svc.execute(checkout(&mut session)).await.unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::EmptyCart));
    }

    #[tokio::test]
    async fn clears_cart_once_accepted() {
        let svc = service();
        let mut session = Session::default();
        _ = svc
            .execute(AddInterest {
                session: &mut session,
                listing_id: listing::Id::from(4),
                intent: Intent::Purchase,
            })
            .await
            .unwrap();

        _ = svc.execute(checkout(&mut session)).await.unwrap();

        assert!(session.cart.is_empty());
    }

    /// [`Backend`] refusing everything.
    #[derive(Clone, Copy, Debug)]
    struct Refusing;

    impl Backend<Submit<Inquiry>> for Refusing {
        type Ok = Receipt;
        type Err = Traced<backend::Error>;

        async fn execute(
            &self,
            _: Submit<Inquiry>,
        ) -> Result<Self::Ok, Self::Err> {
            Err(tracerr::new!(backend::Error::Rejected("closed".into())))
        }
    }

    #[tokio::test]
    async fn keeps_cart_once_rejected() {
        let svc = Service::new(
            Config::default(),
            InMemory::builtin().unwrap(),
            Refusing,
        );
        let mut session = Session::default();
        _ = svc
            .execute(AddInterest {
                session: &mut session,
                listing_id: listing::Id::from(4),
                intent: Intent::Purchase,
            })
            .await
            .unwrap();

        let err = svc.execute(checkout(&mut session)).await.unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::Backend(_)));
        assert_eq!(session.cart.len(), 1);
    }
}

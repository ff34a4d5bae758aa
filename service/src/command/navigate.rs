//! [`Command`] for navigating between views.

use common::operations::{By, Select};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::{view::View, Router};
use crate::{
    domain::{
        listing,
        view::{Destination, Navigation},
        Listing, Session,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for navigating the [`Router`] to a [`Destination`].
///
/// Never fails on unsatisfiable [`Destination`]s: those resolve to
/// [`View::Home`] instead.
#[derive(Debug)]
pub struct Navigate<'s> {
    /// [`Session`] owning the [`Router`].
    pub session: &'s mut Session,

    /// [`Destination`] to navigate to.
    pub to: Destination,
}

impl<'s, Db, Bk> Command<Navigate<'s>> for Service<Db, Bk>
where
    Db: Database<
        Select<By<Option<Listing>, listing::Id>>,
        Ok = Option<Listing>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Navigation;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: Navigate<'s>) -> Result<Self::Ok, Self::Err> {
        let Navigate { session, mut to } = cmd;

        if let Destination::PropertyDetails(Some(id)) = to {
            let exists = self
                .database()
                .execute(Select(By::<Option<Listing>, _>::new(id)))
                .await
                .map_err(tracerr::wrap!())?
                .is_some();
            if !exists {
                tracing::debug!(listing_id = %id, "unknown `Listing` selected");
                to = Destination::PropertyDetails(None);
            }
        }

        let logged_in = session.is_logged_in();
        let navigation = session.router.navigate(to, logged_in);
        tracing::debug!(
            to = %to.page(),
            shown = %session.router.view().page(),
            ?navigation,
            "navigated",
        );

        Ok(navigation)
    }
}

/// Error of [`Navigate`] [`Command`] execution.
pub type ExecutionError = database::Error;

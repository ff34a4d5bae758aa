//! [`Command`] for browsing photos of the displayed [`Listing`].

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{
        listing,
        view::{Step, View},
        Listing, Session,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for moving the photo cursor of a [`View::PropertyDetails`].
#[derive(Debug)]
pub struct BrowsePhotos<'s> {
    /// [`Session`] owning the displayed [`View`].
    pub session: &'s mut Session,

    /// [`Step`] to move the cursor by.
    pub step: Step,
}

impl<'s, Db, Bk> Command<BrowsePhotos<'s>> for Service<Db, Bk>
where
    Db: Database<
        Select<By<Option<Listing>, listing::Id>>,
        Ok = Option<Listing>,
        Err = Traced<database::Error>,
    >,
{
    /// New cursor position, or [`None`] if no [`View::PropertyDetails`] is
    /// displayed.
    type Ok = Option<usize>;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: BrowsePhotos<'s>,
    ) -> Result<Self::Ok, Self::Err> {
        let BrowsePhotos { session, step } = cmd;

        let View::PropertyDetails(details) = session.router.view() else {
            return Ok(None);
        };
        let num_photos = self
            .database()
            .execute(Select(By::<Option<Listing>, _>::new(details.listing_id)))
            .await
            .map_err(tracerr::wrap!())?
            .map_or(1, |l| l.num_photos());

        Ok(session.router.browse_photos(step, num_photos))
    }
}

/// Error of [`BrowsePhotos`] [`Command`] execution.
pub type ExecutionError = database::Error;

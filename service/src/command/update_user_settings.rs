//! [`Command`] for updating [`user::Settings`].

use derive_more::{Display, Error};
use tracerr::Traced;

use crate::{
    domain::{user, Session, User},
    Service,
};

use super::Command;

/// [`Command`] for applying a [`user::settings::Change`] to the
/// [`user::Settings`] of the logged-in [`User`].
#[derive(Debug)]
pub struct UpdateUserSettings<'s> {
    /// [`Session`] of the [`User`].
    pub session: &'s mut Session,

    /// [`user::settings::Change`] to apply.
    pub change: user::settings::Change,
}

impl<'s, Db, Bk> Command<UpdateUserSettings<'s>> for Service<Db, Bk> {
    type Ok = user::Settings;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateUserSettings<'s>,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateUserSettings { session, change } = cmd;

        let user = session
            .user
            .as_mut()
            .ok_or(E::NotLoggedIn)
            .map_err(tracerr::wrap!())?;
        if user.settings.apply(change) {
            tracing::info!(email = %user.email, ?change, "user settings updated");
        }

        Ok(user.settings.clone())
    }
}

/// Error of [`UpdateUserSettings`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ExecutionError {
    /// No [`User`] is logged in.
    #[display("No `User` is logged in")]
    NotLoggedIn,
}

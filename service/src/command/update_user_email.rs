//! [`Command`] for updating an [`user::Email`].

use derive_more::{Display, Error};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::user::Email;
use crate::{
    domain::{user, Session, User},
    Service,
};

use super::Command;

/// [`Command`] for updating an [`user::Email`] of the logged-in [`User`].
#[derive(Debug)]
pub struct UpdateUserEmail<'s> {
    /// [`Session`] of the [`User`] which [`Email`] should be updated.
    pub session: &'s mut Session,

    /// New [`Email`] of the [`User`].
    pub email: user::Email,
}

impl<'s, Db, Bk> Command<UpdateUserEmail<'s>> for Service<Db, Bk> {
    type Ok = User;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateUserEmail<'s>,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateUserEmail { session, email } = cmd;

        let user = session
            .user
            .as_mut()
            .ok_or(E::NotLoggedIn)
            .map_err(tracerr::wrap!())?;
        if user.email == email {
            return Ok(user.clone());
        }

        tracing::info!(old = %user.email, new = %email, "user email updated");
        user.email = email;

        Ok(user.clone())
    }
}

/// Error of [`UpdateUserEmail`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ExecutionError {
    /// No [`User`] is logged in.
    #[display("No `User` is logged in")]
    NotLoggedIn,
}

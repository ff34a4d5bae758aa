//! [`Command`] for updating an [`user::Phone`].

use derive_more::{Display, Error};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::user::Phone;
use crate::{
    domain::{user, Session, User},
    Service,
};

use super::Command;

/// [`Command`] for updating an [`user::Phone`] of the logged-in [`User`].
#[derive(Debug)]
pub struct UpdateUserPhone<'s> {
    /// [`Session`] of the [`User`] which [`Phone`] should be updated.
    pub session: &'s mut Session,

    /// New [`Phone`] number of the [`User`].
    ///
    /// [`None`] indicating [`Phone`] deletion.
    pub number: Option<user::Phone>,
}

impl<'s, Db, Bk> Command<UpdateUserPhone<'s>> for Service<Db, Bk> {
    type Ok = User;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateUserPhone<'s>,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateUserPhone { session, number } = cmd;

        let user = session
            .user
            .as_mut()
            .ok_or(E::NotLoggedIn)
            .map_err(tracerr::wrap!())?;
        if user.phone == number {
            return Ok(user.clone());
        }

        tracing::info!(
            email = %user.email,
            removed = number.is_none(),
            "user phone updated",
        );
        user.phone = number;

        Ok(user.clone())
    }
}

/// Error of [`UpdateUserPhone`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ExecutionError {
    /// No [`User`] is logged in.
    #[display("No `User` is logged in")]
    NotLoggedIn,
}

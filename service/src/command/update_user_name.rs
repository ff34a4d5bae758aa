//! [`Command`] for updating an [`user::Name`].

use derive_more::{Display, Error};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::user::Name;
use crate::{
    domain::{user, Session, User},
    Service,
};

use super::Command;

/// [`Command`] for updating an [`user::Name`] of the logged-in [`User`].
#[derive(Debug)]
pub struct UpdateUserName<'s> {
    /// [`Session`] of the [`User`] which [`Name`] should be updated.
    pub session: &'s mut Session,

    /// New [`Name`] of the [`User`].
    pub name: user::Name,
}

impl<'s, Db, Bk> Command<UpdateUserName<'s>> for Service<Db, Bk> {
    type Ok = User;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateUserName<'s>,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateUserName { session, name } = cmd;

        let user = session
            .user
            .as_mut()
            .ok_or(E::NotLoggedIn)
            .map_err(tracerr::wrap!())?;
        if user.name == name {
            return Ok(user.clone());
        }

        tracing::info!(email = %user.email, %name, "user name updated");
        user.name = name;

        Ok(user.clone())
    }
}

/// Error of [`UpdateUserName`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ExecutionError {
    /// No [`User`] is logged in.
    #[display("No `User` is logged in")]
    NotLoggedIn,
}

#[cfg(test)]
mod spec {
    use crate::{
        command::{Command as _, LogIn},
        domain::{user, Session},
        spec::service,
    };

    use super::{ExecutionError, UpdateUserName};

    #[tokio::test]
    async fn requires_logged_in_user() {
        let svc = service();
        let mut session = Session::default();

        let err = svc
            .execute(UpdateUserName {
                session: &mut session,
                name: user::Name::new("Ana").unwrap(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::NotLoggedIn));
    }

    #[tokio::test]
    async fn renames_user() {
        let svc = service();
        let mut session = Session::default();
        _ = svc
            .execute(LogIn {
                session: &mut session,
                name: user::Name::new("Ana").unwrap(),
                email: user::Email::new("ana@email.com").unwrap(),
            })
            .await
            .unwrap();

        let user = svc
            .execute(UpdateUserName {
                session: &mut session,
                name: user::Name::new("Ana Souza").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(user.name.to_string(), "Ana Souza");
        assert_eq!(session.user.map(|u| u.name), Some(user.name));
    }
}

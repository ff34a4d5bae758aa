//! [`Command`] for logging a [`User`] out.

use std::convert::Infallible;

#[cfg(doc)]
use crate::domain::view::View;
use crate::{
    domain::{Session, User},
    Service,
};

use super::Command;

/// [`Command`] for logging a [`User`] out.
///
/// Leaves a [`View`] requiring a logged-in [`User`], if one is displayed.
#[derive(Debug)]
pub struct LogOut<'s> {
    /// [`Session`] to log out.
    pub session: &'s mut Session,
}

impl<'s, Db, Bk> Command<LogOut<'s>> for Service<Db, Bk> {
    /// Logged out [`User`], if there was any.
    type Ok = Option<User>;
    type Err = Infallible;

    async fn execute(&self, cmd: LogOut<'s>) -> Result<Self::Ok, Self::Err> {
        let LogOut { session } = cmd;

        let user = session.user.take();
        let left = session.router.leave_restricted();
        if let Some(user) = &user {
            tracing::info!(email = %user.email, left_view = left, "user logged out");
        }

        Ok(user)
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        command::{Command as _, LogIn, Navigate},
        domain::{
            user,
            view::{Destination, View},
            Session,
        },
        spec::service,
    };

    use super::LogOut;

    #[tokio::test]
    async fn leaves_profile() {
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
        _ = svc
            .execute(Navigate {
                session: &mut session,
                to: Destination::Profile,
            })
            .await
            .unwrap();
        assert_eq!(session.router.view(), View::Profile);

        let user = svc
            .execute(LogOut {
                session: &mut session,
            })
            .await
            .unwrap();

        assert!(user.is_some());
        assert!(!session.is_logged_in());
        assert_eq!(session.router.view(), View::Home);
    }

    #[tokio::test]
    async fn is_noop_when_logged_out() {
        let svc = service();
        let mut session = Session::default();

        let user = svc
            .execute(LogOut {
                session: &mut session,
            })
            .await
            .unwrap();

        assert!(user.is_none());
        assert_eq!(session.router.view(), View::Home);
    }
}

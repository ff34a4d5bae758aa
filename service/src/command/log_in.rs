//! [`Command`] for logging a [`User`] in.

use std::convert::Infallible;

#[cfg(doc)]
use crate::domain::{view::Destination, Router};
use crate::{
    domain::{user, view::Navigation, Session, User},
    Service,
};

use super::Command;

/// [`Command`] for logging a [`User`] in.
///
/// No credentials are verified: any well-formed [`user::Name`] and
/// [`user::Email`] pair is accepted, replacing the current [`User`], if any.
#[derive(Debug)]
pub struct LogIn<'s> {
    /// [`Session`] to log in.
    pub session: &'s mut Session,

    /// [`user::Name`] of the [`User`].
    pub name: user::Name,

    /// [`user::Email`] of the [`User`].
    pub email: user::Email,
}

impl<'s, Db, Bk> Command<LogIn<'s>> for Service<Db, Bk> {
    /// [`Navigation`] to the [`Destination`] awaiting the log-in, if any.
    type Ok = Option<Navigation>;
    type Err = Infallible;

    async fn execute(&self, cmd: LogIn<'s>) -> Result<Self::Ok, Self::Err> {
        let LogIn {
            session,
            name,
            email,
        } = cmd;

        tracing::info!(%email, "user logged in");
        session.user = Some(User {
            name,
            email,
            phone: None,
            settings: user::Settings::default(),
        });

        Ok(session.router.resume())
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        command::{Command as _, Navigate},
        domain::{
            user,
            view::{Destination, Navigation, View},
            Session,
        },
        spec::service,
    };

    use super::LogIn;

    fn log_in(session: &mut Session) -> LogIn<'_> {
        LogIn {
            session,
            name: user::Name::new("Ana Souza").unwrap(),
            email: user::Email::new("ana@email.com").unwrap(),
        }
    }

    #[tokio::test]
    async fn continues_to_pending_destination() {
        let svc = service();
        let mut session = Session::default();
        _ = svc
            .execute(Navigate {
                session: &mut session,
                to: Destination::Transactions,
            })
            .await
            .unwrap();

        let resumed = svc.execute(log_in(&mut session)).await.unwrap();

        assert_eq!(resumed, Some(Navigation::Shown));
        assert_eq!(session.router.view(), View::Transactions);
        assert_eq!(
            session.user.as_ref().map(|u| u.email.to_string()).as_deref(),
            Some("ana@email.com"),
        );
    }

    #[tokio::test]
    async fn stays_in_place_without_pending_destination() {
        let svc = service();
        let mut session = Session::default();
        _ = svc
            .execute(Navigate {
                session: &mut session,
                to: Destination::About,
            })
            .await
            .unwrap();

        let resumed = svc.execute(log_in(&mut session)).await.unwrap();

        assert_eq!(resumed, None);
        assert_eq!(session.router.view(), View::About);
        assert!(session.is_logged_in());
    }
}

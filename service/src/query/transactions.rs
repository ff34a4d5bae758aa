//! [`Query`] collection related to the [`Transaction`]s history.

use common::operations::{By, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::User;
use crate::{
    domain::{Session, Transaction},
    infra::{database, Database},
    read, Query, Service,
};

/// Queries [`Transaction`]s of the logged-in [`User`].
#[derive(Clone, Copy, Debug)]
pub struct List<'s> {
    /// [`Session`] of the [`User`].
    pub session: &'s Session,

    /// [`read::transaction::list::Filter`] of [`Transaction`]s.
    pub filter: &'s read::transaction::list::Filter,
}

impl<'s, Db, Bk> Query<List<'s>> for Service<Db, Bk>
where
    Db: Database<
        Select<By<Vec<Transaction>, read::transaction::list::Filter>>,
        Ok = Vec<Transaction>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Vec<Transaction>;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        List { session, filter }: List<'s>,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        if !session.is_logged_in() {
            return Err(tracerr::new!(E::NotLoggedIn));
        }

        self.database()
            .execute(Select(By::new(filter.clone())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Queries [`read::transaction::Stats`] of the whole [`Transaction`]s
/// history of the logged-in [`User`].
#[derive(Clone, Copy, Debug)]
pub struct Stats<'s>(pub &'s Session);

impl<'s, Db, Bk> Query<Stats<'s>> for Service<Db, Bk>
where
    Db: Database<
        Select<By<Vec<Transaction>, read::transaction::list::Filter>>,
        Ok = Vec<Transaction>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = read::transaction::Stats;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        Stats(session): Stats<'s>,
    ) -> Result<Self::Ok, Self::Err> {
        let all = read::transaction::list::Filter::default();
        let txs = self
            .execute(List {
                session,
                filter: &all,
            })
            .await
            .map_err(tracerr::wrap!())?;
        Ok(read::transaction::Stats::of(
            &txs,
            self.config().pricing.currency(),
        ))
    }
}

/// Error of [`List`] and [`Stats`] [`Query`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// No [`User`] is logged in.
    #[display("No `User` is logged in")]
    #[from(ignore)]
    NotLoggedIn,
}

#[cfg(test)]
mod spec {
    use common::Money;

    use crate::{
        domain::{transaction::Status, user, Session, User},
        query::Query as _,
        read::transaction::list::Filter,
        spec::service,
    };

    use super::{ExecutionError, List, Stats};

    fn logged_in() -> Session {
        Session {
            user: Some(User {
                name: user::Name::new("Ana").unwrap(),
                email: user::Email::new("ana@email.com").unwrap(),
                phone: None,
                settings: user::Settings::default(),
            }),
            ..Session::default()
        }
    }

    #[tokio::test]
    async fn requires_logged_in_user() {
        let svc = service();
        let session = Session::default();

        let err = svc
            .execute(List {
                session: &session,
                filter: &Filter::default(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::NotLoggedIn));
    }

    #[tokio::test]
    async fn filters_by_status() {
        let svc = service();
        let session = logged_in();

        let completed = svc
            .execute(List {
                session: &session,
                filter: &Filter {
                    status: Some(Status::Completed),
                    ..Filter::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(
            completed.iter().map(|t| t.code.to_string()).collect::<Vec<_>>(),
            ["TXN-001"],
        );
    }

    #[tokio::test]
    async fn summarizes_history() {
        let svc = service();
        let session = logged_in();

        let stats = svc.execute(Stats(&session)).await.unwrap();

        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.volume, Some("2053500BRL".parse::<Money>().unwrap()));
    }
}

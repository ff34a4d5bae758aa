//! [`Command`] for sending a [`ContactMessage`] to the agency.

use common::operations::Submit;
use tracerr::Traced;

use crate::{
    domain::{
        inquiry::{ContactMessage, Receipt},
        Inquiry,
    },
    infra::{backend, Backend},
    Service,
};

use super::Command;

/// [`Command`] for sending a [`ContactMessage`] to the [`Backend`].
#[derive(Clone, Debug)]
pub struct SubmitContact(pub ContactMessage);

impl<Db, Bk> Command<SubmitContact> for Service<Db, Bk>
where
    Bk: Backend<Submit<Inquiry>, Ok = Receipt, Err = Traced<backend::Error>>,
{
    type Ok = Receipt;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        SubmitContact(message): SubmitContact,
    ) -> Result<Self::Ok, Self::Err> {
        self.backend()
            .execute(Submit(message.into()))
            .await
            .map_err(tracerr::wrap!())
    }
}

/// Error of [`SubmitContact`] [`Command`] execution.
pub type ExecutionError = backend::Error;

#[cfg(test)]
mod spec {
    use crate::{
        command::Command as _,
        domain::{
            inquiry::{ContactMessage, Subject, Text},
            user,
        },
        spec::service,
    };

    use super::SubmitContact;

    #[tokio::test]
    async fn returns_receipt() {
        let svc = service();

        let first = svc
            .execute(SubmitContact(ContactMessage {
                name: user::Name::new("Ana").unwrap(),
                email: user::Email::new("ana@email.com").unwrap(),
                subject: Subject::new("Visita").unwrap(),
                message: Text::new("Gostaria de agendar uma visita.").unwrap(),
            }))
            .await
            .unwrap();
        let second = svc
            .execute(SubmitContact(ContactMessage {
                name: user::Name::new("Ana").unwrap(),
                email: user::Email::new("ana@email.com").unwrap(),
                subject: Subject::new("Financiamento").unwrap(),
                message: Text::new("Quais bancos?").unwrap(),
            }))
            .await
            .unwrap();

        assert_ne!(first, second);
    }
}

//! [`Backend`]-related implementations.

use common::operations::Submit;
use derive_more::{Display, Error as StdError};
use tracerr::Traced;

use crate::domain::{inquiry::Receipt, Inquiry};

/// Agency backend operation.
pub use common::Handler as Backend;

/// [`Backend`] error.
#[derive(Debug, Display, StdError)]
pub enum Error {
    /// [`Backend`] refused to accept an [`Inquiry`].
    #[display("`Inquiry` rejected: {_0}")]
    Rejected(#[error(not(source))] String),
}

/// [`Backend`] not connected to any agency system.
///
/// Accepts every [`Inquiry`] and only logs it.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unconnected;

impl Backend<Submit<Inquiry>> for Unconnected {
    type Ok = Receipt;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Submit(inquiry): Submit<Inquiry>,
    ) -> Result<Self::Ok, Self::Err> {
        let receipt = Receipt::new();
        match &inquiry {
            Inquiry::Order(order) => tracing::info!(
                %receipt,
                lines = order.lines.len(),
                total = %order.totals.total,
                payment = %order.payment,
                visit_date = ?order.visit_date.map(|d| d.to_date_string()),
                visit_period = ?order.visit_period,
                email = %order.contact.email,
                "order accepted",
            ),
            Inquiry::Contact(msg) => tracing::info!(
                %receipt,
                email = %msg.email,
                subject = %msg.subject,
                "contact message accepted",
            ),
        }
        Ok(receipt)
    }
}

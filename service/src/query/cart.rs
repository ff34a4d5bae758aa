//! [`Query`] collection related to a [`Cart`].

use std::convert::Infallible;

use crate::{
    domain::{cart, Cart},
    Query, Service,
};

/// Queries [`cart::Totals`] of a [`Cart`] under the configured
/// [`cart::Pricing`].
#[derive(Clone, Copy, Debug)]
pub struct Totals<'c>(pub &'c Cart);

impl<'c, Db, Bk> Query<Totals<'c>> for Service<Db, Bk> {
    type Ok = cart::Totals;
    type Err = Infallible;

    async fn execute(
        &self,
        Totals(cart): Totals<'c>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(cart.totals(&self.config().pricing))
    }
}

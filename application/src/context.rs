//! [`Context`]-related definitions.

use service::domain::Session;

use crate::Service;

/// Context of a running shell: the [`Service`] and the browsing [`Session`]
/// it operates on.
#[derive(Debug)]
pub struct Context {
    /// [`Service`] performing actions.
    service: Service,

    /// Current browsing [`Session`].
    session: Session,
}

impl Context {
    /// Creates a new [`Context`] starting a fresh [`Session`].
    #[must_use]
    pub fn new(service: Service) -> Self {
        Self {
            service,
            session: Session::default(),
        }
    }

    /// Returns the [`Service`] of this [`Context`].
    #[must_use]
    pub fn service(&self) -> &Service {
        &self.service
    }

    /// Returns the current [`Session`].
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Splits this [`Context`] for executing a command mutating the
    /// [`Session`].
    pub fn split_mut(&mut self) -> (&Service, &mut Session) {
        (&self.service, &mut self.session)
    }
}

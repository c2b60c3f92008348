use core::fmt;

use crate::ics02_client::client_type::ClientType;
use crate::ics02_client::header::{Committer, Header};
use crate::ics02_client::misbehaviour::Misbehaviour;

#[cfg(any(test, feature = "mocks"))]
use crate::mock::client_def::MockClient;

/// Consensus-algorithm capability backing one [`ClientType`].
///
/// This is where a concrete light client (e.g. Tendermint) validates headers and evidence.
/// Type matching, height monotonicity and the frozen latch are enforced by the caller before
/// either method is reached.
pub trait ClientDef: Send + Sync {
    /// Whether `committer` legitimately attested `header`.
    fn verify_header(&self, committer: &Committer, header: &Header) -> bool;

    /// Whether `misbehaviour` is valid evidence of a consensus safety violation.
    fn verify_misbehaviour(&self, misbehaviour: &Misbehaviour) -> bool;
}

/// One [`ClientDef`] per registered [`ClientType`]. Lookup is an exhaustive match, so
/// registering a new client type does not compile until its capability slot exists here.
pub struct ClientDefs {
    tendermint: Box<dyn ClientDef>,

    #[cfg(any(test, feature = "mocks"))]
    mock: Box<dyn ClientDef>,
}

impl ClientDefs {
    pub fn new(tendermint: impl ClientDef + 'static) -> Self {
        Self {
            tendermint: Box::new(tendermint),

            #[cfg(any(test, feature = "mocks"))]
            mock: Box::new(MockClient::default()),
        }
    }

    #[cfg(any(test, feature = "mocks"))]
    pub fn with_mock(mut self, mock: impl ClientDef + 'static) -> Self {
        self.mock = Box::new(mock);
        self
    }

    pub fn client_def(&self, client_type: ClientType) -> &dyn ClientDef {
        match client_type {
            ClientType::Tendermint => self.tendermint.as_ref(),

            #[cfg(any(test, feature = "mocks"))]
            ClientType::Mock => self.mock.as_ref(),
        }
    }
}

impl fmt::Debug for ClientDefs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(ClientType::ALL).finish()
    }
}

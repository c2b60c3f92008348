use crate::ics02_client::client_def::ClientDef;
use crate::ics02_client::header::{Committer, Header};
use crate::ics02_client::misbehaviour::Misbehaviour;

/// Stub consensus algorithm: accepts or rejects every header and every piece of evidence,
/// after checking that the committer attests the header height.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockClient {
    accept: bool,
}

impl MockClient {
    pub fn accepting() -> Self {
        Self { accept: true }
    }

    pub fn rejecting() -> Self {
        Self { accept: false }
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::accepting()
    }
}

impl ClientDef for MockClient {
    fn verify_header(&self, committer: &Committer, header: &Header) -> bool {
        self.accept && committer.height == header.height
    }

    fn verify_misbehaviour(&self, _misbehaviour: &Misbehaviour) -> bool {
        self.accept
    }
}

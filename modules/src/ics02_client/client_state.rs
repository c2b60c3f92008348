use serde_derive::{Deserialize, Serialize};

use crate::ics02_client::client_consensus::ConsensusState;
use crate::ics02_client::client_def::ClientDef;
use crate::ics02_client::client_type::ClientType;
use crate::ics02_client::error::Error;
use crate::ics02_client::header::Header;
use crate::ics02_client::misbehaviour::Misbehaviour;
use crate::ics24_host::identifier::ClientId;
use crate::Height;

/// Lifecycle of a light client. `Frozen` is terminal: no transition leads back to `Active`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientStatus {
    Active,
    Frozen,
}

/// Per-client record kept in the host's client store.
///
/// `latest_height` (the client sequence) only ever grows, and `status` only ever moves from
/// `Active` to `Frozen`. Both invariants hold because the only ways to obtain a modified state
/// are [`ClientState::advance`] and [`ClientState::freeze`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientState {
    client_id: ClientId,
    client_type: ClientType,
    latest_height: Height,
    status: ClientStatus,
}

impl ClientState {
    /// A freshly created client, active at `latest_height`.
    pub fn new(client_id: ClientId, client_type: ClientType, latest_height: Height) -> Self {
        Self {
            client_id,
            client_type,
            latest_height,
            status: ClientStatus::Active,
        }
    }

    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Type of client associated with this state (eg. Tendermint)
    pub fn client_type(&self) -> ClientType {
        self.client_type
    }

    /// Latest height the client has verified a header for.
    pub fn latest_height(&self) -> Height {
        self.latest_height
    }

    pub fn status(&self) -> ClientStatus {
        self.status
    }

    /// Freeze status of the client
    pub fn is_frozen(&self) -> bool {
        matches!(self.status, ClientStatus::Frozen)
    }

    /// Fails with `ClientFrozen` unless the client is active.
    pub fn ensure_active(&self) -> Result<(), Error> {
        match self.status {
            ClientStatus::Active => Ok(()),
            ClientStatus::Frozen => Err(Error::client_frozen(self.client_id.clone())),
        }
    }

    fn ensure_client_type(&self, actual: ClientType) -> Result<(), Error> {
        if actual != self.client_type {
            return Err(Error::client_type_mismatch(self.client_type, actual));
        }
        Ok(())
    }

    /// Validates `header` and returns the advanced client state together with the consensus
    /// state to store at the header height. `self` is left untouched on every error.
    pub fn advance(
        &self,
        client_def: &dyn ClientDef,
        header: &Header,
    ) -> Result<(ClientState, ConsensusState), Error> {
        self.ensure_active()?;
        self.ensure_client_type(header.client_type())?;
        self.ensure_client_type(header.committer().client_type)?;

        // A header at or below the current height is never folded in: a duplicate height
        // could carry a conflicting root.
        if header.height() <= self.latest_height {
            return Err(Error::stale_header(header.height(), self.latest_height));
        }

        let consensus_state = header.consensus_state();
        consensus_state.validate_basic()?;

        if !client_def.verify_header(header.committer(), header) {
            return Err(Error::header_verification_failed(
                self.client_id.clone(),
                header.height(),
            ));
        }

        let client_state = Self {
            latest_height: header.height(),
            ..self.clone()
        };

        Ok((client_state, consensus_state))
    }

    /// Validates `misbehaviour` and returns the frozen client state. Freezing an already
    /// frozen client succeeds and returns it unchanged.
    pub fn freeze(
        &self,
        client_def: &dyn ClientDef,
        misbehaviour: &Misbehaviour,
    ) -> Result<ClientState, Error> {
        if misbehaviour.client_id() != &self.client_id {
            return Err(Error::client_id_mismatch(
                self.client_id.clone(),
                misbehaviour.client_id().clone(),
            ));
        }
        self.ensure_client_type(misbehaviour.client_type())?;

        match self.status {
            ClientStatus::Frozen => Ok(self.clone()),
            ClientStatus::Active => {
                if !client_def.verify_misbehaviour(misbehaviour) {
                    return Err(Error::misbehaviour_verification_failed(
                        self.client_id.clone(),
                    ));
                }

                Ok(Self {
                    status: ClientStatus::Frozen,
                    ..self.clone()
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::ics02_client::error::ErrorDetail;
    use crate::ics02_client::header::Committer;
    use crate::mock::client_def::MockClient;

    fn client_id() -> ClientId {
        "07-tendermint-0".parse().unwrap()
    }

    fn header(client_type: ClientType, height: u64) -> Header {
        Header {
            client_type,
            height: Height::new(height),
            root: vec![0x11; 32].into(),
            committer: Committer::new(client_type, Height::new(height)),
            data: vec![],
        }
    }

    fn misbehaviour(client_id: ClientId, client_type: ClientType) -> Misbehaviour {
        Misbehaviour {
            client_id,
            client_type,
            evidence: vec![0xee],
        }
    }

    #[test]
    fn new_client_is_active() {
        let cs = ClientState::new(client_id(), ClientType::Tendermint, Height::zero());
        assert_eq!(cs.status(), ClientStatus::Active);
        assert!(!cs.is_frozen());
        assert!(cs.ensure_active().is_ok());
    }

    #[test]
    fn advance_moves_sequence_and_builds_consensus_state() {
        let cs = ClientState::new(client_id(), ClientType::Tendermint, Height::zero());
        let hdr = header(ClientType::Tendermint, 10);

        let (new_cs, consensus) = cs.advance(&MockClient::accepting(), &hdr).unwrap();

        assert_eq!(new_cs.latest_height(), Height::new(10));
        assert_eq!(consensus, hdr.consensus_state());
        // the receiver is untouched
        assert_eq!(cs.latest_height(), Height::zero());
    }

    #[test]
    fn advance_rejects_stale_and_duplicate_heights() {
        let cs = ClientState::new(client_id(), ClientType::Tendermint, Height::new(10));

        for height in [5, 10] {
            let err = cs
                .advance(&MockClient::accepting(), &header(ClientType::Tendermint, height))
                .unwrap_err();
            match err.detail() {
                ErrorDetail::StaleHeader(e) => {
                    assert_eq!(e.header_height, Height::new(height));
                    assert_eq!(e.latest_height, Height::new(10));
                }
                other => panic!("unexpected error: {:?}", other),
            }
        }
    }

    #[test]
    fn advance_rejects_type_mismatch() {
        let cs = ClientState::new(client_id(), ClientType::Tendermint, Height::zero());

        let err = cs
            .advance(&MockClient::accepting(), &header(ClientType::Mock, 3))
            .unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::ClientTypeMismatch(_)));

        let mut hdr = header(ClientType::Tendermint, 3);
        hdr.committer.client_type = ClientType::Mock;
        let err = cs.advance(&MockClient::accepting(), &hdr).unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::ClientTypeMismatch(_)));
    }

    #[test]
    fn advance_rejects_invalid_root_before_verifying() {
        let cs = ClientState::new(client_id(), ClientType::Tendermint, Height::zero());
        let mut hdr = header(ClientType::Tendermint, 3);
        hdr.root = vec![].into();

        let err = cs.advance(&MockClient::accepting(), &hdr).unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::InvalidConsensusState(_)));
    }

    #[test]
    fn advance_reports_failed_header_verification() {
        let cs = ClientState::new(client_id(), ClientType::Tendermint, Height::zero());

        let err = cs
            .advance(&MockClient::rejecting(), &header(ClientType::Tendermint, 3))
            .unwrap_err();
        assert!(matches!(
            err.detail(),
            ErrorDetail::HeaderVerificationFailed(_)
        ));
    }

    #[test]
    fn freeze_is_a_one_way_latch() {
        let cs = ClientState::new(client_id(), ClientType::Tendermint, Height::new(10));
        let evidence = misbehaviour(client_id(), ClientType::Tendermint);

        let frozen = cs.freeze(&MockClient::accepting(), &evidence).unwrap();
        assert!(frozen.is_frozen());
        assert_eq!(frozen.latest_height(), Height::new(10));

        // repeated evidence is a no-op, even if the capability would now reject it
        let again = frozen.freeze(&MockClient::rejecting(), &evidence).unwrap();
        assert_eq!(again, frozen);

        let err = frozen
            .advance(&MockClient::accepting(), &header(ClientType::Tendermint, 11))
            .unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::ClientFrozen(_)));
    }

    #[test]
    fn freeze_rejects_foreign_or_mistyped_evidence() {
        let cs = ClientState::new(client_id(), ClientType::Tendermint, Height::new(10));

        let other: ClientId = "07-tendermint-1".parse().unwrap();
        let err = cs
            .freeze(
                &MockClient::accepting(),
                &misbehaviour(other, ClientType::Tendermint),
            )
            .unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::ClientIdMismatch(_)));

        let err = cs
            .freeze(
                &MockClient::accepting(),
                &misbehaviour(client_id(), ClientType::Mock),
            )
            .unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::ClientTypeMismatch(_)));
    }

    #[test]
    fn freeze_requires_valid_evidence() {
        let cs = ClientState::new(client_id(), ClientType::Tendermint, Height::new(10));

        let err = cs
            .freeze(
                &MockClient::rejecting(),
                &misbehaviour(client_id(), ClientType::Tendermint),
            )
            .unwrap_err();
        assert!(matches!(
            err.detail(),
            ErrorDetail::MisbehaviourVerificationFailed(_)
        ));
        assert!(!cs.is_frozen());
    }
}

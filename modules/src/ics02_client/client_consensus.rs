use serde_derive::{Deserialize, Serialize};
use tendermint_proto::Protobuf;

use crate::ics02_client::client_type::ClientType;
use crate::ics02_client::error::Error;
use crate::ics23_commitment::commitment::CommitmentRoot;

/// Binary form of a [`ConsensusState`]. The client type travels as its numeric tag.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawConsensusState {
    #[prost(uint32, tag = "1")]
    pub client_type: u32,
    #[prost(bytes = "vec", tag = "2")]
    pub root: Vec<u8>,
}

/// Snapshot of the counterparty chain at one height, as trusted by a light client.
///
/// Created once per height when a header is accepted and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedConsensusState")]
pub struct ConsensusState {
    client_type: ClientType,
    root: CommitmentRoot,
}

/// Decoded JSON form, not yet checked by `validate_basic`.
#[derive(Deserialize)]
struct UncheckedConsensusState {
    client_type: ClientType,
    root: CommitmentRoot,
}

impl TryFrom<UncheckedConsensusState> for ConsensusState {
    type Error = Error;

    fn try_from(value: UncheckedConsensusState) -> Result<Self, Self::Error> {
        let consensus_state = Self::new(value.client_type, value.root);
        consensus_state.validate_basic()?;

        Ok(consensus_state)
    }
}

impl ConsensusState {
    pub fn new(client_type: ClientType, root: CommitmentRoot) -> Self {
        Self { client_type, root }
    }

    /// Type of client associated with this consensus state (eg. Tendermint)
    pub fn client_type(&self) -> ClientType {
        self.client_type
    }

    /// Commitment root of the consensus state, which is used for key-value pair verification.
    pub fn root(&self) -> &CommitmentRoot {
        &self.root
    }

    /// Performs basic validation of the consensus state. A state that fails here can never be
    /// used for proof checks and must not be stored.
    pub fn validate_basic(&self) -> Result<(), Error> {
        if self.root.is_empty() {
            return Err(Error::invalid_consensus_state(
                "commitment root cannot be empty".to_string(),
            ));
        }

        if self.root.is_zero() {
            return Err(Error::invalid_consensus_state(
                "commitment root cannot be all zeroes".to_string(),
            ));
        }

        Ok(())
    }
}

impl Protobuf<RawConsensusState> for ConsensusState {}

impl TryFrom<RawConsensusState> for ConsensusState {
    type Error = Error;

    fn try_from(raw: RawConsensusState) -> Result<Self, Self::Error> {
        let consensus_state = Self {
            client_type: ClientType::try_from(raw.client_type)?,
            root: raw.root.into(),
        };
        consensus_state.validate_basic()?;

        Ok(consensus_state)
    }
}

impl From<ConsensusState> for RawConsensusState {
    fn from(value: ConsensusState) -> Self {
        Self {
            client_type: value.client_type.into(),
            root: value.root.into_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use prost::Message;
    use test_log::test;

    use super::*;
    use crate::ics02_client::error::ErrorDetail;

    fn root() -> CommitmentRoot {
        CommitmentRoot::from_bytes(&[0xaa; 32])
    }

    #[test]
    fn validate_basic_accepts_non_empty_root() {
        let cs = ConsensusState::new(ClientType::Tendermint, root());
        assert!(cs.validate_basic().is_ok());
    }

    #[test]
    fn validate_basic_rejects_empty_and_zero_roots() {
        for bytes in [vec![], vec![0u8; 32]] {
            let cs = ConsensusState::new(ClientType::Tendermint, bytes.into());
            let err = cs.validate_basic().unwrap_err();
            assert!(matches!(err.detail(), ErrorDetail::InvalidConsensusState(_)));
        }
    }

    #[test]
    fn binary_encoding_carries_numeric_tag() {
        let cs = ConsensusState::new(ClientType::Tendermint, root());
        let bytes = cs.encode_vec().unwrap();

        let raw = RawConsensusState::decode(bytes.as_slice()).unwrap();
        assert_eq!(raw.client_type, 1);
        assert_eq!(raw.root, vec![0xaa; 32]);

        let decoded = ConsensusState::decode_vec(&bytes).unwrap();
        assert_eq!(decoded, cs);
    }

    #[test]
    fn decoding_rejects_unassigned_tag() {
        let raw = RawConsensusState {
            client_type: 0,
            root: vec![1; 32],
        };
        let err = ConsensusState::try_from(raw).unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::UnknownClientTypeTag(_)));
    }

    #[test]
    fn decoding_rejects_empty_root() {
        let raw = RawConsensusState {
            client_type: 1,
            root: vec![],
        };
        let err = ConsensusState::try_from(raw).unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::InvalidConsensusState(_)));
    }

    #[test]
    fn json_encoding_uses_type_name_and_hex_root() {
        let cs = ConsensusState::new(ClientType::Tendermint, vec![0x01, 0xff].into());
        let json = serde_json::to_string(&cs).unwrap();
        assert_eq!(json, r#"{"client_type":"tendermint","root":"01FF"}"#);

        let bad = json.replace("tendermint", "unknown");
        assert!(serde_json::from_str::<ConsensusState>(&bad).is_err());
    }

    #[test]
    fn json_decoding_rejects_unusable_roots() {
        for json in [
            r#"{"client_type":"tendermint","root":""}"#,
            r#"{"client_type":"tendermint","root":"0000"}"#,
        ] {
            let err = serde_json::from_str::<ConsensusState>(json).unwrap_err();
            assert!(err.to_string().contains("invalid consensus state"));
        }

        let ok: ConsensusState =
            serde_json::from_str(r#"{"client_type":"tendermint","root":"01FF"}"#).unwrap();
        assert_eq!(ok.root().as_bytes(), &[0x01, 0xff]);
    }
}

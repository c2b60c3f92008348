use serde_derive::{Deserialize, Serialize};

use crate::ics02_client::client_consensus::ConsensusState;
use crate::ics02_client::client_type::ClientType;
use crate::ics23_commitment::commitment::CommitmentRoot;
use crate::Height;

/// The authority (e.g. the validator set) responsible for attesting a header at a given height.
/// Its internal validity is established by the consensus algorithm, not by this crate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Committer {
    pub client_type: ClientType,
    pub height: Height,
}

impl Committer {
    pub fn new(client_type: ClientType, height: Height) -> Self {
        Self {
            client_type,
            height,
        }
    }
}

/// Consensus state update information.
///
/// `root` is the commitment root the header attests to; `data` is the algorithm-specific
/// attestation (signed header, signatures, ...) which only the consensus algorithm interprets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub client_type: ClientType,
    pub height: Height,
    pub root: CommitmentRoot,
    pub committer: Committer,
    #[serde(
        default,
        serialize_with = "crate::serializers::ser_hex_upper",
        deserialize_with = "crate::serializers::deser_hex_upper"
    )]
    pub data: Vec<u8>,
}

impl Header {
    /// The type of client (eg. Tendermint)
    pub fn client_type(&self) -> ClientType {
        self.client_type
    }

    /// The height of the consensus state
    pub fn height(&self) -> Height {
        self.height
    }

    pub fn committer(&self) -> &Committer {
        &self.committer
    }

    /// The consensus state this header produces once accepted.
    pub fn consensus_state(&self) -> ConsensusState {
        ConsensusState::new(self.client_type, self.root.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_json_round_trip() {
        let header = Header {
            client_type: ClientType::Tendermint,
            height: Height::new(10),
            root: vec![0x0a; 4].into(),
            committer: Committer::new(ClientType::Tendermint, Height::new(10)),
            data: vec![0xde, 0xad],
        };

        let json = serde_json::to_value(&header).unwrap();
        assert_eq!(json["client_type"], "tendermint");
        assert_eq!(json["height"], 10);
        assert_eq!(json["root"], "0A0A0A0A");
        assert_eq!(json["data"], "DEAD");

        let back: Header = serde_json::from_value(json).unwrap();
        assert_eq!(back, header);
        assert_eq!(
            back.consensus_state(),
            ConsensusState::new(ClientType::Tendermint, vec![0x0a; 4].into())
        );
    }
}

//! Definition of domain type message `MsgCreateClient`.

use serde_derive::{Deserialize, Serialize};

use crate::ics02_client::client_consensus::ConsensusState;
use crate::ics02_client::client_type::ClientType;
use crate::Height;

/// A type of message that triggers the creation of a new light client.
///
/// Without an initial `consensus_state` the client starts at height zero and only becomes
/// usable for verification after its first header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreateClient {
    pub client_type: ClientType,
    pub consensus_height: Height,
    pub consensus_state: Option<ConsensusState>,
}

impl MsgCreateClient {
    pub fn new(client_type: ClientType) -> Self {
        Self {
            client_type,
            consensus_height: Height::zero(),
            consensus_state: None,
        }
    }

    pub fn with_consensus_state(
        client_type: ClientType,
        consensus_height: Height,
        consensus_state: ConsensusState,
    ) -> Self {
        Self {
            client_type,
            consensus_height,
            consensus_state: Some(consensus_state),
        }
    }
}

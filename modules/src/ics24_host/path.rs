/// Path-space as listed in ICS-024
/// https://github.com/cosmos/ics/tree/master/spec/ics-024-host-requirements#path-space
/// Only the provable paths a light client is asked to verify are represented here.
use core::fmt::{Display, Formatter, Result};

use crate::ics24_host::identifier::{ChannelId, ClientId, ConnectionId, PortId};
use crate::Height;

/// The Path enum abstracts out the different sub-paths
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Path {
    ClientConsensusState(ClientId, Height),
    Connections(ConnectionId),
    ChannelEnds(PortId, ChannelId),
    SeqRecvs(PortId, ChannelId),
    Commitments(PortId, ChannelId, u64),
    Acks(PortId, ChannelId, u64),
}

impl Path {
    /// into_bytes implementation
    pub fn into_bytes(self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

/// The Display trait adds the `.to_string()` method to the Path struct
/// This is where the different path strings are constructed
impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match &self {
            Path::ClientConsensusState(id, height) => {
                write!(f, "clients/{}/consensusState/{}", id, height)
            }
            Path::Connections(id) => write!(f, "connections/{}", id),
            Path::ChannelEnds(port_id, channel_id) => {
                write!(f, "channelEnds/ports/{}/channels/{}", port_id, channel_id)
            }
            Path::SeqRecvs(port_id, channel_id) => write!(
                f,
                "seqRecvs/ports/{}/channels/{}/nextSequenceRecv",
                port_id, channel_id
            ),
            Path::Commitments(port_id, channel_id, seq) => write!(
                f,
                "commitments/ports/{}/channels/{}/packets/{}",
                port_id, channel_id, seq
            ),
            Path::Acks(port_id, channel_id, seq) => write!(
                f,
                "acks/ports/{}/channels/{}/acknowledgements/{}",
                port_id, channel_id, seq
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn port_and_channel() -> (PortId, ChannelId) {
        ("transfer".parse().unwrap(), "channel-0".parse().unwrap())
    }

    #[test]
    fn consensus_state_path() {
        let path = Path::ClientConsensusState("07-tendermint-0".parse().unwrap(), Height::new(10));
        assert_eq!(path.to_string(), "clients/07-tendermint-0/consensusState/10");
    }

    #[test]
    fn packet_paths() {
        let (port_id, channel_id) = port_and_channel();

        assert_eq!(
            Path::Commitments(port_id.clone(), channel_id.clone(), 3).to_string(),
            "commitments/ports/transfer/channels/channel-0/packets/3"
        );
        assert_eq!(
            Path::Acks(port_id.clone(), channel_id.clone(), 3).to_string(),
            "acks/ports/transfer/channels/channel-0/acknowledgements/3"
        );
        assert_eq!(
            Path::SeqRecvs(port_id.clone(), channel_id.clone()).to_string(),
            "seqRecvs/ports/transfer/channels/channel-0/nextSequenceRecv"
        );
        assert_eq!(
            Path::ChannelEnds(port_id, channel_id).into_bytes(),
            b"channelEnds/ports/transfer/channels/channel-0".to_vec()
        );
    }

    #[test]
    fn connection_path() {
        let path = Path::Connections("connection-0".parse().unwrap());
        assert_eq!(path.to_string(), "connections/connection-0");
    }
}

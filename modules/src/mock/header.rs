use crate::ics02_client::client_type::ClientType;
use crate::ics02_client::header::{Committer, Header};
use crate::Height;

/// Root committed by mock headers at `height`. Never empty nor all zeroes.
pub fn mock_root(height: u64) -> Vec<u8> {
    let mut root = vec![0xab; 24];
    root.extend_from_slice(&height.to_be_bytes());
    root
}

/// A header of the given type, attested by a committer at the same height.
pub fn mock_header(client_type: ClientType, height: u64) -> Header {
    Header {
        client_type,
        height: Height::new(height),
        root: mock_root(height).into(),
        committer: Committer::new(client_type, Height::new(height)),
        data: vec![],
    }
}

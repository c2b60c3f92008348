//! Definition of domain type message `MsgUpdateClient`.

use serde_derive::{Deserialize, Serialize};

use crate::ics02_client::header::Header;
use crate::ics24_host::identifier::ClientId;

/// A type of message that triggers the update of an on-chain (IBC) client with new headers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgUpdateClient {
    pub client_id: ClientId,
    pub header: Header,
}

impl MsgUpdateClient {
    pub fn new(client_id: ClientId, header: Header) -> Self {
        MsgUpdateClient { client_id, header }
    }
}

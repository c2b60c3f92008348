use serde_derive::{Deserialize, Serialize};

use crate::ics02_client::client_type::ClientType;
use crate::ics24_host::identifier::ClientId;

/// Evidence that the committer trusted by a client violated consensus safety. Beyond the
/// addressed client and its type, the evidence is opaque and interpreted by the consensus
/// algorithm only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Misbehaviour {
    pub client_id: ClientId,
    pub client_type: ClientType,
    #[serde(
        serialize_with = "crate::serializers::ser_hex_upper",
        deserialize_with = "crate::serializers::deser_hex_upper"
    )]
    pub evidence: Vec<u8>,
}

impl Misbehaviour {
    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    pub fn client_type(&self) -> ClientType {
        self.client_type
    }
}

use serde_derive::{Deserialize, Serialize};

use crate::ics02_client::misbehaviour::Misbehaviour;

/// A type of message that submits client misbehaviour proof.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgSubmitMisbehaviour {
    /// misbehaviour used for freezing the light client; it names the client it targets
    pub misbehaviour: Misbehaviour,
}

//! Protocol logic specific to processing ICS2 messages of type `MsgSubmitMisbehaviour`.

use tracing::{debug, warn};

use crate::events::IbcEvent;
use crate::handler::{HandlerOutput, HandlerResult};
use crate::ics02_client::client_def::ClientDefs;
use crate::ics02_client::client_state::ClientState;
use crate::ics02_client::context::ClientReader;
use crate::ics02_client::error::Error;
use crate::ics02_client::events::Attributes;
use crate::ics02_client::handler::ClientResult;
use crate::ics02_client::msgs::misbehaviour::MsgSubmitMisbehaviour;
use crate::ics24_host::identifier::ClientId;

/// The result following the successful processing of a `MsgSubmitMisbehaviour` message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Result {
    pub client_id: ClientId,
    pub client_state: ClientState,
}

pub fn process(
    ctx: &dyn ClientReader,
    client_defs: &ClientDefs,
    msg: MsgSubmitMisbehaviour,
) -> HandlerResult<ClientResult, Error> {
    let mut output = HandlerOutput::builder();

    let MsgSubmitMisbehaviour { misbehaviour } = msg;
    let client_id = misbehaviour.client_id().clone();

    let client_state = ctx
        .client_state(&client_id)
        .ok_or_else(|| Error::client_not_found(client_id.clone()))?;

    let client_def = client_defs.client_def(client_state.client_type());

    let new_client_state = client_state
        .freeze(client_def, &misbehaviour)
        .map_err(|e| {
            warn!(%client_id, "rejected misbehaviour: {}", e);
            e
        })?;

    if client_state.is_frozen() {
        debug!(%client_id, "misbehaviour reported for an already frozen client");
        output.log(format!("client {} is already frozen", client_id));
    } else {
        warn!(%client_id, height = %new_client_state.latest_height(), "client frozen on misbehaviour");
        output.emit(IbcEvent::ClientMisbehaviour(
            Attributes {
                client_id: client_id.clone(),
                client_type: new_client_state.client_type(),
                consensus_height: new_client_state.latest_height(),
            }
            .into(),
        ));
    }

    Ok(output.with_result(ClientResult::Misbehaviour(Result {
        client_id,
        client_state: new_client_state,
    })))
}

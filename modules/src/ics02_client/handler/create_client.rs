//! Protocol logic specific to processing ICS2 messages of type `MsgCreateClient`.

use tracing::info;

use crate::events::IbcEvent;
use crate::handler::{HandlerOutput, HandlerResult};
use crate::ics02_client::client_consensus::ConsensusState;
use crate::ics02_client::client_state::ClientState;
use crate::ics02_client::context::ClientReader;
use crate::ics02_client::error::Error;
use crate::ics02_client::events::Attributes;
use crate::ics02_client::handler::ClientResult;
use crate::ics02_client::msgs::create_client::MsgCreateClient;
use crate::ics24_host::identifier::ClientId;
use crate::Height;

/// The result following the successful processing of a `MsgCreateClient` message. Preferably
/// this data type should be used with a qualified name `create_client::Result` to avoid ambiguity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Result {
    pub client_state: ClientState,
    pub consensus_height: Height,
    pub consensus_state: Option<ConsensusState>,
}

pub fn process(
    ctx: &dyn ClientReader,
    msg: MsgCreateClient,
) -> HandlerResult<ClientResult, Error> {
    let mut output = HandlerOutput::builder();

    let MsgCreateClient {
        client_type,
        consensus_height,
        consensus_state,
    } = msg;

    match &consensus_state {
        Some(cs) => {
            if cs.client_type() != client_type {
                return Err(Error::client_type_mismatch(client_type, cs.client_type()));
            }
            cs.validate_basic()?;
        }
        None if !consensus_height.is_zero() => {
            return Err(Error::invalid_consensus_state(format!(
                "missing consensus state for initial height {}",
                consensus_height
            )));
        }
        None => {}
    }

    // Construct this client's identifier
    let id_counter = ctx.client_counter();
    let client_id = ClientId::new(client_type, id_counter).map_err(Error::invalid_identifier)?;

    if ctx.client_state(&client_id).is_some() {
        return Err(Error::client_already_exists(client_id));
    }

    output.log(format!(
        "success: generated new client identifier: {}",
        client_id
    ));
    info!(%client_id, %client_type, height = %consensus_height, "creating client");

    let client_state = ClientState::new(client_id.clone(), client_type, consensus_height);

    output.emit(IbcEvent::CreateClient(
        Attributes {
            client_id,
            client_type,
            consensus_height,
        }
        .into(),
    ));

    Ok(output.with_result(ClientResult::Create(Result {
        client_state,
        consensus_height,
        consensus_state,
    })))
}

use core::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::ics02_client::events as ClientEvents;

/// Events emitted by the handlers of this crate.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub enum IbcEvent {
    CreateClient(ClientEvents::CreateClient),
    UpdateClient(ClientEvents::UpdateClient),
    ClientMisbehaviour(ClientEvents::ClientMisbehaviour),
}

impl IbcEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            IbcEvent::CreateClient(_) => "create_client",
            IbcEvent::UpdateClient(_) => "update_client",
            IbcEvent::ClientMisbehaviour(_) => "client_misbehaviour",
        }
    }
}

impl fmt::Display for IbcEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IbcEvent::CreateClient(ev) => write!(f, "CreateClientEv({})", ev.0),
            IbcEvent::UpdateClient(ev) => write!(f, "UpdateClientEv({})", ev.0),
            IbcEvent::ClientMisbehaviour(ev) => write!(f, "ClientMisbehaviourEv({})", ev.0),
        }
    }
}

use std::collections::HashMap;

use crate::ics02_client::client_consensus::ConsensusState;
use crate::ics02_client::client_state::ClientState;
use crate::ics02_client::client_type::ClientType;
use crate::ics02_client::context::{ClientKeeper, ClientReader};
use crate::ics02_client::error::Error;
use crate::ics02_client::misbehaviour::Misbehaviour;
use crate::ics24_host::identifier::ClientId;
use crate::mock::client_def::MockClient;
use crate::mock::header::mock_root;
use crate::Height;

/// A client record, storing the client state and the consensus states per height.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockClientRecord {
    pub client_state: ClientState,
    pub consensus_states: HashMap<Height, ConsensusState>,
}

/// A mock implementation of the client context. This replaces the KV-store of a host chain
/// holding the records of the IBC clients it runs. Implements `ClientReader` and
/// `ClientKeeper`, and is therefore useful for testing the handlers and the verification
/// functions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MockContext {
    /// The set of all clients, indexed by their id.
    clients: HashMap<ClientId, MockClientRecord>,

    /// Counter for the client identifiers, necessary for `increase_client_counter` and the
    /// `client_counter` methods.
    client_ids_counter: u64,
}

impl MockContext {
    /// Registers a new active client of the given type at height `h`, with a consensus state
    /// for that height.
    pub fn with_client(mut self, client_id: &ClientId, client_type: ClientType, h: Height) -> Self {
        let mut client_record = MockClientRecord {
            client_state: ClientState::new(client_id.clone(), client_type, h),
            consensus_states: HashMap::with_capacity(1),
        };
        client_record.consensus_states.insert(
            h,
            ConsensusState::new(client_type, mock_root(h.value()).into()),
        );
        self.clients.insert(client_id.clone(), client_record);
        self
    }

    /// Freezes an already registered client.
    pub fn with_frozen_client(mut self, client_id: &ClientId) -> Self {
        let record = self
            .clients
            .get_mut(client_id)
            .expect("client must be registered before it is frozen");

        let misbehaviour = Misbehaviour {
            client_id: client_id.clone(),
            client_type: record.client_state.client_type(),
            evidence: vec![],
        };
        record.client_state = record
            .client_state
            .freeze(&MockClient::accepting(), &misbehaviour)
            .expect("mock client accepts all evidence");
        self
    }
}

impl ClientReader for MockContext {
    fn client_state(&self, client_id: &ClientId) -> Option<ClientState> {
        self.clients
            .get(client_id)
            .map(|record| record.client_state.clone())
    }

    fn consensus_state(&self, client_id: &ClientId, height: Height) -> Option<ConsensusState> {
        self.clients
            .get(client_id)
            .and_then(|record| record.consensus_states.get(&height))
            .cloned()
    }

    fn client_counter(&self) -> u64 {
        self.client_ids_counter
    }
}

impl ClientKeeper for MockContext {
    fn store_client_state(
        &mut self,
        client_id: ClientId,
        client_state: ClientState,
    ) -> Result<(), Error> {
        match self.clients.get_mut(&client_id) {
            Some(record) => record.client_state = client_state,
            None => {
                self.clients.insert(
                    client_id,
                    MockClientRecord {
                        client_state,
                        consensus_states: HashMap::new(),
                    },
                );
            }
        }
        Ok(())
    }

    fn store_consensus_state(
        &mut self,
        client_id: ClientId,
        height: Height,
        consensus_state: ConsensusState,
    ) -> Result<(), Error> {
        let record = self
            .clients
            .get_mut(&client_id)
            .ok_or_else(|| Error::client_not_found(client_id.clone()))?;
        record.consensus_states.insert(height, consensus_state);
        Ok(())
    }

    fn increase_client_counter(&mut self) {
        self.client_ids_counter += 1;
    }
}

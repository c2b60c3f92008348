//! ICS2 (client) context. The two traits `ClientReader` and `ClientKeeper` define the interface
//! that any host chain must implement to be able to process any `ClientMsg`.

use crate::ics02_client::client_consensus::ConsensusState;
use crate::ics02_client::client_state::ClientState;
use crate::ics02_client::error::Error;
use crate::ics02_client::handler::ClientResult::{self, Create, Misbehaviour, Update};
use crate::ics24_host::identifier::ClientId;
use crate::Height;

/// Defines the read-only part of ICS2 (client functions) context.
pub trait ClientReader {
    fn client_state(&self, client_id: &ClientId) -> Option<ClientState>;

    /// Consensus state stored for `client_id` at exactly `height`, if any.
    fn consensus_state(&self, client_id: &ClientId, height: Height) -> Option<ConsensusState>;

    /// Returns a natural number, counting how many clients have been created thus far.
    /// The value of this counter should increase only via method `ClientKeeper::increase_client_counter`.
    fn client_counter(&self) -> u64;
}

/// Defines the write-only part of ICS2 (client functions) context.
pub trait ClientKeeper {
    fn store_client_result(&mut self, handler_res: ClientResult) -> Result<(), Error> {
        match handler_res {
            Create(res) => {
                let client_id = res.client_state.client_id().clone();
                self.store_client_state(client_id.clone(), res.client_state)?;
                if let Some(consensus_state) = res.consensus_state {
                    self.store_consensus_state(client_id, res.consensus_height, consensus_state)?;
                }
                self.increase_client_counter();
            }
            Update(res) => {
                let height = res.client_state.latest_height();
                self.store_client_state(res.client_id.clone(), res.client_state)?;
                self.store_consensus_state(res.client_id, height, res.consensus_state)?;
            }
            Misbehaviour(res) => {
                self.store_client_state(res.client_id, res.client_state)?;
            }
        }
        Ok(())
    }

    fn store_client_state(
        &mut self,
        client_id: ClientId,
        client_state: ClientState,
    ) -> Result<(), Error>;

    fn store_consensus_state(
        &mut self,
        client_id: ClientId,
        height: Height,
        consensus_state: ConsensusState,
    ) -> Result<(), Error>;

    /// Called upon client creation.
    /// Increases the counter which keeps track of how many clients have been created.
    /// Should never fail.
    fn increase_client_counter(&mut self);
}

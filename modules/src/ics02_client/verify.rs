//! State verification functions as specified in
//! <https://github.com/cosmos/ibc/tree/master/spec/core/ics-002-client-semantics>.
//!
//! Every function resolves the claimed `height` to the consensus state a client stored for it,
//! builds the ICS-24 key under the counterparty `prefix`, and hands the byte-level check to the
//! injected [`ProofVerifier`]. Nothing here mutates the client store, so calls can be retried
//! and may run concurrently.

use tendermint_proto::Protobuf;
use tracing::{trace, warn};

use crate::ics02_client::client_consensus::ConsensusState;
use crate::ics02_client::context::ClientReader;
use crate::ics02_client::error::Error;
use crate::ics23_commitment::commitment::{apply_prefix, CommitmentPrefix, CommitmentProof};
use crate::ics23_commitment::verifier::ProofVerifier;
use crate::ics24_host::identifier::{ChannelId, ClientId, ConnectionId, PortId};
use crate::ics24_host::Path;
use crate::Height;

/// What the proof is expected to show about the key.
#[derive(Clone, Copy, Debug)]
enum Expectation<'v> {
    Membership(&'v [u8]),
    NonMembership,
}

/// Verifies facts about a counterparty chain against the consensus states stored by its
/// light client on this chain.
pub struct ClientVerifier<'a, Ctx: ?Sized, P: ?Sized> {
    ctx: &'a Ctx,
    proof_verifier: &'a P,
}

impl<'a, Ctx: ?Sized, P: ?Sized> Clone for ClientVerifier<'a, Ctx, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, Ctx: ?Sized, P: ?Sized> Copy for ClientVerifier<'a, Ctx, P> {}

impl<'a, Ctx, P> ClientVerifier<'a, Ctx, P>
where
    Ctx: ClientReader + ?Sized,
    P: ProofVerifier + ?Sized,
{
    pub fn new(ctx: &'a Ctx, proof_verifier: &'a P) -> Self {
        Self {
            ctx,
            proof_verifier,
        }
    }

    /// Verify a `proof` that the counterparty's client `counterparty_client_id` stores, for
    /// height `consensus_height`, exactly `expected_consensus_state` (a consensus state of
    /// this chain).
    #[allow(clippy::too_many_arguments)]
    pub fn verify_client_consensus_state(
        &self,
        client_id: &ClientId,
        height: Height,
        prefix: &CommitmentPrefix,
        proof: &CommitmentProof,
        counterparty_client_id: &ClientId,
        consensus_height: Height,
        expected_consensus_state: &ConsensusState,
    ) -> Result<(), Error> {
        let path = Path::ClientConsensusState(counterparty_client_id.clone(), consensus_height);
        let value = expected_consensus_state
            .encode_vec()
            .map_err(|e| Error::invalid_consensus_state(e.to_string()))?;

        self.verify(
            client_id,
            height,
            prefix,
            proof,
            path,
            Expectation::Membership(&value),
        )
    }

    /// Verify a `proof` that a connection end (in its encoded form) is stored under
    /// `connection_id`.
    pub fn verify_connection_state(
        &self,
        client_id: &ClientId,
        height: Height,
        prefix: &CommitmentPrefix,
        proof: &CommitmentProof,
        connection_id: &ConnectionId,
        expected_connection_end: &[u8],
    ) -> Result<(), Error> {
        let path = Path::Connections(connection_id.clone());
        self.verify(
            client_id,
            height,
            prefix,
            proof,
            path,
            Expectation::Membership(expected_connection_end),
        )
    }

    /// Verify a `proof` that a channel end (in its encoded form) is stored under
    /// `port_id`/`channel_id`.
    #[allow(clippy::too_many_arguments)]
    pub fn verify_channel_state(
        &self,
        client_id: &ClientId,
        height: Height,
        prefix: &CommitmentPrefix,
        proof: &CommitmentProof,
        port_id: &PortId,
        channel_id: &ChannelId,
        expected_channel_end: &[u8],
    ) -> Result<(), Error> {
        let path = Path::ChannelEnds(port_id.clone(), channel_id.clone());
        self.verify(
            client_id,
            height,
            prefix,
            proof,
            path,
            Expectation::Membership(expected_channel_end),
        )
    }

    /// Verify a `proof` that a packet has been committed.
    #[allow(clippy::too_many_arguments)]
    pub fn verify_packet_commitment(
        &self,
        client_id: &ClientId,
        height: Height,
        prefix: &CommitmentPrefix,
        proof: &CommitmentProof,
        port_id: &PortId,
        channel_id: &ChannelId,
        sequence: u64,
        commitment: &[u8],
    ) -> Result<(), Error> {
        let path = Path::Commitments(port_id.clone(), channel_id.clone(), sequence);
        self.verify(
            client_id,
            height,
            prefix,
            proof,
            path,
            Expectation::Membership(commitment),
        )
    }

    /// Verify a `proof` that a packet has been acknowledged with `acknowledgement`.
    #[allow(clippy::too_many_arguments)]
    pub fn verify_packet_acknowledgement(
        &self,
        client_id: &ClientId,
        height: Height,
        prefix: &CommitmentPrefix,
        proof: &CommitmentProof,
        port_id: &PortId,
        channel_id: &ChannelId,
        sequence: u64,
        acknowledgement: &[u8],
    ) -> Result<(), Error> {
        let path = Path::Acks(port_id.clone(), channel_id.clone(), sequence);
        self.verify(
            client_id,
            height,
            prefix,
            proof,
            path,
            Expectation::Membership(acknowledgement),
        )
    }

    /// Verify a `proof` that no acknowledgement has been written for a packet.
    #[allow(clippy::too_many_arguments)]
    pub fn verify_packet_acknowledgement_absence(
        &self,
        client_id: &ClientId,
        height: Height,
        prefix: &CommitmentPrefix,
        proof: &CommitmentProof,
        port_id: &PortId,
        channel_id: &ChannelId,
        sequence: u64,
    ) -> Result<(), Error> {
        let path = Path::Acks(port_id.clone(), channel_id.clone(), sequence);
        self.verify(
            client_id,
            height,
            prefix,
            proof,
            path,
            Expectation::NonMembership,
        )
    }

    /// Verify a `proof` of the next sequence to be received on a channel. The committed value
    /// is the big-endian encoding of the sequence.
    #[allow(clippy::too_many_arguments)]
    pub fn verify_next_sequence_recv(
        &self,
        client_id: &ClientId,
        height: Height,
        prefix: &CommitmentPrefix,
        proof: &CommitmentProof,
        port_id: &PortId,
        channel_id: &ChannelId,
        next_sequence_recv: u64,
    ) -> Result<(), Error> {
        let path = Path::SeqRecvs(port_id.clone(), channel_id.clone());
        let value = next_sequence_recv.to_be_bytes();
        self.verify(
            client_id,
            height,
            prefix,
            proof,
            path,
            Expectation::Membership(&value),
        )
    }

    fn verify(
        &self,
        client_id: &ClientId,
        height: Height,
        prefix: &CommitmentPrefix,
        proof: &CommitmentProof,
        path: Path,
        expectation: Expectation<'_>,
    ) -> Result<(), Error> {
        let client_state = self
            .ctx
            .client_state(client_id)
            .ok_or_else(|| Error::client_not_found(client_id.clone()))?;

        // A frozen client verifies nothing, whatever the proof.
        client_state.ensure_active()?;

        let consensus_state = self
            .ctx
            .consensus_state(client_id, height)
            .ok_or_else(|| Error::consensus_state_not_found(client_id.clone(), height))?;

        if consensus_state.client_type() != client_state.client_type() {
            return Err(Error::client_type_mismatch(
                client_state.client_type(),
                consensus_state.client_type(),
            ));
        }

        let path_str = path.to_string();
        let key = apply_prefix(prefix, path).map_err(|_| Error::empty_prefix())?;

        let root = consensus_state.root();
        let verified = !proof.is_empty()
            && match expectation {
                Expectation::Membership(value) => {
                    self.proof_verifier
                        .verify_membership(root, &key, value, proof)
                }
                Expectation::NonMembership => {
                    self.proof_verifier.verify_non_membership(root, &key, proof)
                }
            };

        if !verified {
            warn!(%client_id, %height, path = %path_str, "proof verification failed");
            return Err(Error::proof_verification_failed(
                client_id.clone(),
                height,
                path_str,
            ));
        }

        trace!(%client_id, %height, path = %path_str, ?expectation, "proof verified");
        Ok(())
    }
}

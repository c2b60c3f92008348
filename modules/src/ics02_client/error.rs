use flex_error::define_error;

use crate::ics02_client::client_type::ClientType;
use crate::ics24_host::error::ValidationError;
use crate::ics24_host::identifier::ClientId;
use crate::Height;

define_error! {
    #[derive(Debug, PartialEq, Eq)]
    Error {
        InvalidClientType
            { client_type: String }
            | e | { format_args!("invalid client type: {0}", e.client_type) },

        UnknownClientTypeTag
            { tag: u32 }
            | e | { format_args!("no client type registered for tag {0}", e.tag) },

        ClientTypeMismatch
            {
                expected: ClientType,
                actual: ClientType,
            }
            | e | {
                format_args!("mismatch between client and arguments types, expected: {0}, actual: {1}",
                    e.expected, e.actual)
            },

        ClientIdMismatch
            {
                expected: ClientId,
                actual: ClientId,
            }
            | e | {
                format_args!("misbehaviour for client {1} submitted to client {0}",
                    e.expected, e.actual)
            },

        ClientAlreadyExists
            { client_id: ClientId }
            | e | { format_args!("client already exists: {0}", e.client_id) },

        ClientNotFound
            { client_id: ClientId }
            | e | { format_args!("client not found: {0}", e.client_id) },

        ClientFrozen
            { client_id: ClientId }
            | e | { format_args!("client is frozen: {0}", e.client_id) },

        ConsensusStateNotFound
            {
                client_id: ClientId,
                height: Height,
            }
            | e | {
                format_args!("consensus state not found at: {0} at height {1}",
                    e.client_id, e.height)
            },

        StaleHeader
            {
                header_height: Height,
                latest_height: Height,
            }
            | e | {
                format_args!("received header height ({0}) is lower than or equal to the client latest height ({1})",
                    e.header_height, e.latest_height)
            },

        HeaderVerificationFailed
            {
                client_id: ClientId,
                height: Height,
            }
            | e | {
                format_args!("header verification failed for client {0} at height {1}",
                    e.client_id, e.height)
            },

        MisbehaviourVerificationFailed
            { client_id: ClientId }
            | e | { format_args!("misbehaviour verification failed for client {0}", e.client_id) },

        ProofVerificationFailed
            {
                client_id: ClientId,
                height: Height,
                path: String,
            }
            | e | {
                format_args!("proof verification failed for client {0} at height {1} on path {2}",
                    e.client_id, e.height, e.path)
            },

        EmptyPrefix
            | _ | { "empty prefix" },

        InvalidConsensusState
            { reason: String }
            | e | { format_args!("invalid consensus state: {0}", e.reason) },

        InvalidIdentifier
            [ ValidationError ]
            | _ | { "invalid client identifier" },
    }
}

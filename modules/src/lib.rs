#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![allow(clippy::large_enum_variant)]
#![deny(
    warnings,
    // missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

//! Client semantics core of IBC. Implementation of the following ICS modules:
//!
//! - ICS 02: Client (client types, lifecycle, state verification)
//! - ICS 23: Vector Commitment Scheme (roots, prefixes, proofs and the proof verifier seam)
//! - ICS 24: Host Requirements (identifiers and the provable key space)
//!
//! The crate does not implement any consensus algorithm nor any proof format. Both are
//! injected by the host: a [`ClientDef`](ics02_client::client_def::ClientDef) per
//! [`ClientType`](ics02_client::client_type::ClientType), and a
//! [`ProofVerifier`](ics23_commitment::verifier::ProofVerifier).

pub mod events;
pub mod handler;
pub mod ics02_client;
pub mod ics23_commitment;
pub mod ics24_host;

mod serializers;

/// Re-export of ICS 002 Height domain type
pub type Height = ics02_client::height::Height;

#[cfg(any(test, feature = "mocks"))]
pub mod mock; // Context mock and stub capabilities: for testing all handlers and verifications.

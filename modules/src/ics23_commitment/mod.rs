//! ICS 23: Vector Commitment Scheme. Only the values a light client stores and checks against
//! live here; the byte-level proof format is owned by the injected [`verifier::ProofVerifier`].

pub mod commitment;
pub mod error;
pub mod verifier;

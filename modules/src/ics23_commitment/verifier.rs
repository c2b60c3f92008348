use crate::ics23_commitment::commitment::{CommitmentProof, CommitmentRoot};

/// Byte-level membership checks against a commitment root.
///
/// Implementations own the proof format (e.g. ICS-23 Merkle proofs). A malformed proof must be
/// reported as `false`; the caller turns it into a typed verification failure.
pub trait ProofVerifier: Send + Sync {
    /// Check that `key` maps to exactly `value` under `root`.
    fn verify_membership(
        &self,
        root: &CommitmentRoot,
        key: &[u8],
        value: &[u8],
        proof: &CommitmentProof,
    ) -> bool;

    /// Check that `key` has no value under `root`.
    fn verify_non_membership(
        &self,
        root: &CommitmentRoot,
        key: &[u8],
        proof: &CommitmentProof,
    ) -> bool;
}

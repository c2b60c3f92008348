use std::collections::BTreeMap;

use crate::ics23_commitment::commitment::{CommitmentProof, CommitmentRoot};
use crate::ics23_commitment::verifier::ProofVerifier;

/// Stub proof verifier.
///
/// With `accept_all`/`reject_all` every check has a fixed outcome. Otherwise it behaves like a
/// key-value store per root: membership holds iff the entry was registered with that exact
/// value, non-membership iff no entry exists for the key.
#[derive(Clone, Debug, Default)]
pub struct MockProofVerifier {
    constant: Option<bool>,
    entries: BTreeMap<(Vec<u8>, Vec<u8>), Vec<u8>>,
}

impl MockProofVerifier {
    pub fn accept_all() -> Self {
        Self {
            constant: Some(true),
            ..Default::default()
        }
    }

    pub fn reject_all() -> Self {
        Self {
            constant: Some(false),
            ..Default::default()
        }
    }

    pub fn with_entry(mut self, root: &CommitmentRoot, key: Vec<u8>, value: Vec<u8>) -> Self {
        self.entries.insert((root.as_bytes().to_vec(), key), value);
        self
    }
}

impl ProofVerifier for MockProofVerifier {
    fn verify_membership(
        &self,
        root: &CommitmentRoot,
        key: &[u8],
        value: &[u8],
        _proof: &CommitmentProof,
    ) -> bool {
        match self.constant {
            Some(outcome) => outcome,
            None => self
                .entries
                .get(&(root.as_bytes().to_vec(), key.to_vec()))
                .map_or(false, |stored| stored.as_slice() == value),
        }
    }

    fn verify_non_membership(
        &self,
        root: &CommitmentRoot,
        key: &[u8],
        _proof: &CommitmentProof,
    ) -> bool {
        match self.constant {
            Some(outcome) => outcome,
            None => !self
                .entries
                .contains_key(&(root.as_bytes().to_vec(), key.to_vec())),
        }
    }
}

use core::fmt;

use serde_derive::{Deserialize, Serialize};
use subtle_encoding::{Encoding, Hex};

use crate::ics23_commitment::error::Error;
use crate::ics24_host::Path;

/// Separator placed between the store prefix and the ICS-24 path when building a proof key.
pub const KEY_SEPARATOR: &str = "/";

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitmentRoot(
    #[serde(
        serialize_with = "crate::serializers::ser_hex_upper",
        deserialize_with = "crate::serializers::deser_hex_upper"
    )]
    Vec<u8>,
);

impl CommitmentRoot {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(Vec::from(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the root carries no information: no bytes at all, or only zero bytes.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl From<Vec<u8>> for CommitmentRoot {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for CommitmentRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = Hex::upper_case()
            .encode_to_string(&self.0)
            .map_err(|_| fmt::Error)?;
        f.debug_tuple("CommitmentRoot").field(&hex).finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitmentProof(
    #[serde(
        serialize_with = "crate::serializers::ser_hex_upper",
        deserialize_with = "crate::serializers::deser_hex_upper"
    )]
    Vec<u8>,
);

impl CommitmentProof {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for CommitmentProof {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<CommitmentProof> for Vec<u8> {
    fn from(p: CommitmentProof) -> Vec<u8> {
        p.0
    }
}

/// Store namespace of the counterparty chain under which all provable paths live.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitmentPrefix(
    #[serde(
        serialize_with = "crate::serializers::ser_hex_upper",
        deserialize_with = "crate::serializers::deser_hex_upper"
    )]
    Vec<u8>,
);

impl CommitmentPrefix {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for CommitmentPrefix {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for CommitmentPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = core::str::from_utf8(&self.0);
        match converted {
            Ok(s) => write!(f, "{}", s),
            Err(_e) => write!(f, "{:?}", &self.0),
        }
    }
}

/// Builds the canonical key under which `path` is committed on the counterparty:
/// the prefix bytes, then [`KEY_SEPARATOR`], then the ICS-24 path string.
///
/// The counterparty must build proofs over exactly this byte string.
pub fn apply_prefix(prefix: &CommitmentPrefix, path: Path) -> Result<Vec<u8>, Error> {
    if prefix.is_empty() {
        return Err(Error::empty_prefix());
    }

    let path = path.into_bytes();
    let mut key = Vec::with_capacity(prefix.0.len() + KEY_SEPARATOR.len() + path.len());
    key.extend_from_slice(&prefix.0);
    key.extend_from_slice(KEY_SEPARATOR.as_bytes());
    key.extend_from_slice(&path);
    Ok(key)
}

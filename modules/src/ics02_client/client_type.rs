use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::Error;

pub const TENDERMINT_CLIENT_TYPE: &str = "tendermint";

#[cfg(any(test, feature = "mocks"))]
pub const MOCK_CLIENT_TYPE: &str = "mock";

/// Type of the consensus algorithm a light client follows.
///
/// The discriminants are the numeric tags used in binary encodings. A tag, once assigned, is
/// never reassigned to another algorithm. Tag `0` is reserved as "unregistered" and has no
/// variant, so a live client can never carry it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ClientType {
    Tendermint = 1,

    #[cfg(any(test, feature = "mocks"))]
    Mock = 255,
}

impl ClientType {
    /// Every registered client type, in tag order.
    pub const ALL: &'static [ClientType] = &[
        Self::Tendermint,
        #[cfg(any(test, feature = "mocks"))]
        Self::Mock,
    ];

    /// Yields the canonical name of this client type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tendermint => TENDERMINT_CLIENT_TYPE,

            #[cfg(any(test, feature = "mocks"))]
            Self::Mock => MOCK_CLIENT_TYPE,
        }
    }

    /// The stable numeric tag of this client type.
    pub fn tag(&self) -> u8 {
        *self as u8
    }

    /// Looks up a registered client type by its canonical name. Returns `None` for names that
    /// are not registered; use `str::parse` where an unknown name is an error.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == name)
    }

    /// Looks up a registered client type by its numeric tag.
    pub fn from_tag(tag: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.tag() == tag)
    }
}

/// Canonical name of an optional client type: unregistered (`None`) maps to the empty string.
pub fn name_of(client_type: Option<ClientType>) -> &'static str {
    client_type.map_or("", |t| t.as_str())
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ClientType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| Error::invalid_client_type(s.to_string()))
    }
}

impl TryFrom<u32> for ClientType {
    type Error = Error;

    fn try_from(tag: u32) -> Result<Self, Self::Error> {
        u8::try_from(tag)
            .ok()
            .and_then(Self::from_tag)
            .ok_or_else(|| Error::unknown_client_type_tag(tag))
    }
}

impl From<ClientType> for u32 {
    fn from(client_type: ClientType) -> Self {
        client_type.tag().into()
    }
}

/// Encoded as the canonical name, never as the numeric tag.
impl Serialize for ClientType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        crate::serializers::serde_string::serialize(self, serializer)
    }
}

/// Decoding a name that matches no registered type fails the enclosing message.
impl<'de> Deserialize<'de> for ClientType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        crate::serializers::serde_string::deserialize(deserializer)
    }
}

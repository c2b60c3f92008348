use core::fmt;
use core::str::FromStr;

use serde_derive::{Deserialize, Serialize};

use super::error::ValidationError;
use super::validate::{
    validate_channel_identifier, validate_client_identifier, validate_connection_identifier,
    validate_port_identifier,
};
use crate::ics02_client::client_type::ClientType;

/// Generates a validated string identifier newtype. Decoding (from a string or from serde)
/// runs the given validator; the inner string is never observable unvalidated.
macro_rules! ibc_identifier {
    ($(#[$meta:meta])* $name:ident, $validator:path) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Get this identifier as a borrowed `&str`
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Get this identifier as a borrowed byte slice
            pub fn as_bytes(&self) -> &[u8] {
                self.0.as_bytes()
            }
        }

        /// This implementation provides a `to_string` method.
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $validator(s).map(|_| Self(s.to_string()))
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                $validator(&value).map(|_| Self(value))
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        /// Equality check against string literal (satisfies &ClientId == &str).
        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.as_str().eq(other)
            }
        }
    };
}

ibc_identifier!(
    /// Identifier of a light client on the host chain. Assigned at creation, never changed.
    ClientId,
    validate_client_identifier
);

ibc_identifier!(ConnectionId, validate_connection_identifier);

ibc_identifier!(PortId, validate_port_identifier);

ibc_identifier!(ChannelId, validate_channel_identifier);

impl ClientId {
    /// Builds a new client identifier. Client identifiers are deterministically formed from two
    /// elements: a prefix derived from the client type `ctype`, and a monotonically increasing
    /// `counter`; these are separated by a dash "-".
    pub fn new(ctype: ClientType, counter: u64) -> Result<Self, ValidationError> {
        let prefix = Self::prefix(ctype);
        let id = format!("{}-{}", prefix, counter);
        Self::from_str(id.as_str())
    }

    /// Get this identifier's prefix, i.e. the client type tag and name joined by a dash.
    pub fn prefix(client_type: ClientType) -> String {
        format!("{:02}-{}", client_type.tag(), client_type.as_str())
    }
}

use super::error::ValidationError as Error;

/// Path separator (ie. forward slash '/')
const PATH_SEPARATOR: char = '/';
const VALID_SPECIAL_CHARS: &str = "._+-#[]<>";

/// Shared rules behind the per-identifier validators below. Only those fixed-bound wrappers
/// call it, so `min <= max` always holds.
fn validate_identifier(id: &str, min: usize, max: usize) -> Result<(), Error> {
    // Check identifier is not empty
    if id.is_empty() {
        return Err(Error::empty());
    }

    // Check identifier does not contain path separators
    if id.contains(PATH_SEPARATOR) {
        return Err(Error::contain_separator(id.to_string()));
    }

    // Check identifier length is between given min/max
    if id.len() < min || id.len() > max {
        return Err(Error::invalid_length(id.to_string(), id.len(), min, max));
    }

    // Check that the identifier comprises only valid characters:
    // - Alphanumeric
    // - `.`, `_`, `+`, `-`, `#`
    // - `[`, `]`, `<`, `>`
    if !id
        .chars()
        .all(|c| c.is_alphanumeric() || VALID_SPECIAL_CHARS.contains(c))
    {
        return Err(Error::invalid_character(id.to_string()));
    }

    // All good!
    Ok(())
}

/// Default validator function for Client identifiers.
///
/// A valid identifier must be between 9-64 characters and only contain lowercase
/// alphabetic characters,
pub fn validate_client_identifier(id: &str) -> Result<(), Error> {
    validate_identifier(id, 9, 64)
}

/// Default validator function for Connection identifiers.
///
/// A valid Identifier must be between 10-64 characters and only contain lowercase
/// alphabetic characters,
pub fn validate_connection_identifier(id: &str) -> Result<(), Error> {
    validate_identifier(id, 10, 64)
}

/// Default validator function for Port identifiers.
///
/// A valid Identifier must be between 2-128 characters and only contain lowercase
/// alphabetic characters,
pub fn validate_port_identifier(id: &str) -> Result<(), Error> {
    validate_identifier(id, 2, 128)
}

/// Default validator function for Channel identifiers.
///
/// A valid identifier must be between 8-64 characters and only contain
/// alphabetic characters,
pub fn validate_channel_identifier(id: &str) -> Result<(), Error> {
    validate_identifier(id, 8, 64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ics24_host::error::ValidationErrorDetail;

    #[test]
    fn parse_invalid_port_id_min() {
        // invalid min port id
        let id = validate_port_identifier("p");
        assert!(id.is_err())
    }

    #[test]
    fn parse_invalid_port_id_max() {
        // invalid max port id (test string length is 130 chars)
        let id = validate_port_identifier(
            "9anxkcme6je544d5lnj46zqiiiygfqzf8w4bjecbnyj4lj6s7zlpst67yln64tixp9anxkcme6je544d5lnj46zqiiiygfqzf8w4bjecbnyj4lj6s7zlpst67yln64tixp",
        );
        assert!(id.is_err())
    }

    #[test]
    fn parse_invalid_connection_id_min() {
        // invalid min connection id
        let id = validate_connection_identifier("connect01");
        assert!(id.is_err())
    }

    #[test]
    fn parse_invalid_channel_id_min() {
        // invalid channel id, must be at least 8 characters
        let id = validate_channel_identifier("channel");
        assert!(id.is_err())
    }

    #[test]
    fn parse_invalid_client_id_min() {
        // invalid min client id
        let id = validate_client_identifier("client");
        assert!(id.is_err())
    }

    #[test]
    fn parse_client_id_with_separator() {
        let err = validate_client_identifier("07-tendermint/0").unwrap_err();
        assert!(matches!(
            err.detail(),
            ValidationErrorDetail::ContainSeparator(_)
        ));
    }

    #[test]
    fn parse_client_id_with_bad_character() {
        let err = validate_client_identifier("07-tendermint@0").unwrap_err();
        assert!(matches!(
            err.detail(),
            ValidationErrorDetail::InvalidCharacter(_)
        ));
    }

    #[test]
    fn parse_empty_identifier() {
        let err = validate_identifier("", 1, 10).unwrap_err();
        assert!(matches!(err.detail(), ValidationErrorDetail::Empty(_)));
    }

    #[test]
    fn length_bounds_are_inclusive() {
        let cases: [(fn(&str) -> Result<(), Error>, usize, usize); 4] = [
            (validate_client_identifier, 9, 64),
            (validate_connection_identifier, 10, 64),
            (validate_port_identifier, 2, 128),
            (validate_channel_identifier, 8, 64),
        ];

        for (validate, min, max) in cases {
            assert!(validate(&"a".repeat(min)).is_ok());
            assert!(validate(&"a".repeat(max)).is_ok());

            for len in [min - 1, max + 1] {
                let err = validate(&"a".repeat(len)).unwrap_err();
                assert!(matches!(
                    err.detail(),
                    ValidationErrorDetail::InvalidLength(_)
                ));
            }
        }
    }

    #[test]
    fn parse_valid_identifiers() {
        assert!(validate_client_identifier("07-tendermint-0").is_ok());
        assert!(validate_connection_identifier("connection-0").is_ok());
        assert!(validate_port_identifier("transfer").is_ok());
        assert!(validate_channel_identifier("channel-0").is_ok());
    }
}

//! Manual address entry validation and display helpers.

use alloy::primitives::Address;
use thiserror::Error;

/// Rejection reasons for manually entered addresses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("address must start with 0x")]
    MissingPrefix,

    #[error("address must be 0x followed by 40 hex characters")]
    BadLength,

    #[error("address contains non-hex characters")]
    NotHex,
}

/// Validate and parse a manually entered address.
///
/// The connector accepts manual addresses verbatim, so this format check is
/// the caller's gate before invoking it: a `0x` prefix followed by exactly
/// 40 hex characters. No checksum validation.
pub fn parse_manual(input: &str) -> Result<Address, AddressError> {
    let digits = input.strip_prefix("0x").ok_or(AddressError::MissingPrefix)?;

    if digits.len() != 40 {
        return Err(AddressError::BadLength);
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AddressError::NotHex);
    }

    input.parse().map_err(|_| AddressError::NotHex)
}

/// Truncated display form for UI labels: `0x1F9f...e9F7`.
pub fn short_display(address: Address) -> String {
    let full = address.to_string();
    format!("{}...{}", &full[..6], &full[full.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "0x1F9fECf4100f18a227fab7E3868cA89Ef6b9e9F7";

    #[test]
    fn test_parse_valid_address() {
        let address = parse_manual(VALID).unwrap();
        assert_eq!(address, VALID.parse::<Address>().unwrap());
    }

    #[test]
    fn test_rejects_missing_prefix() {
        assert_eq!(
            parse_manual("1F9fECf4100f18a227fab7E3868cA89Ef6b9e9F7"),
            Err(AddressError::MissingPrefix)
        );
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(parse_manual("0x1F9f"), Err(AddressError::BadLength));
        assert_eq!(
            parse_manual(&format!("{}00", VALID)),
            Err(AddressError::BadLength)
        );
    }

    #[test]
    fn test_rejects_non_hex() {
        assert_eq!(
            parse_manual("0xZZ9fECf4100f18a227fab7E3868cA89Ef6b9e9F7"),
            Err(AddressError::NotHex)
        );
    }

    #[test]
    fn test_short_display() {
        let address: Address = VALID.parse().unwrap();
        assert_eq!(short_display(address), "0x1F9f...e9F7");
    }
}

//! Ethereum address representation and EIP-55 checksum casing.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

use super::codec::{keccak256, strip_hex_prefix};

/// An Ethereum address (20 bytes).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 20]);

impl Address {
    /// The all-zero address, treated as "no address" by this tool.
    pub const ZERO: Address = Address([0u8; 20]);

    /// Creates an address from raw bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Creates an address from a 64-byte raw public key (`x || y`).
    ///
    /// Takes the last 20 bytes of its Keccak-256 hash.
    pub fn from_raw_public_key(raw: &[u8; 64]) -> Self {
        let hash = keccak256(raw);

        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&hash[12..]);
        Self(bytes)
    }

    /// Returns the address as raw bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// Returns the address as a lowercase hex string (without 0x prefix).
    #[inline]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Returns the lowercase address with 0x prefix.
    pub fn to_hex_prefixed(&self) -> String {
        format!("0x{}", self.to_hex())
    }

    /// Returns the address with checksum encoding (EIP-55).
    pub fn to_checksum(&self) -> String {
        let hex_addr = self.to_hex();
        let hash = keccak256(hex_addr.as_bytes());

        let mut checksum = String::with_capacity(42);
        checksum.push_str("0x");

        for (i, c) in hex_addr.chars().enumerate() {
            let hash_byte = hash[i / 2];
            let hash_nibble = if i % 2 == 0 {
                hash_byte >> 4
            } else {
                hash_byte & 0x0f
            };

            if hash_nibble >= 8 {
                checksum.push(c.to_ascii_uppercase());
            } else {
                checksum.push(c);
            }
        }

        checksum
    }
}

impl FromStr for Address {
    type Err = Error;

    /// Parses exactly 40 hex characters, any case, optional `0x` prefix.
    ///
    /// The checksum casing of the input is not verified.
    fn from_str(s: &str) -> Result<Self> {
        let digits = strip_hex_prefix(s);
        if digits.len() != 40 {
            return Err(Error::invalid_address(s, "expected 40 hex characters"));
        }

        let mut bytes = [0u8; 20];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| Error::invalid_address(s, "contains non-hex characters"))?;

        Ok(Self(bytes))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_checksum())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_checksum())
    }
}

/// Normalizes an address string into its EIP-55 checksum form.
///
/// Rejects anything that is not exactly 40 hex digits, and the zero address.
pub fn to_checksum_case(address: &str) -> Result<String> {
    let parsed: Address = address.parse()?;
    if parsed.is_zero() {
        return Err(Error::invalid_address(address, "zero address"));
    }
    Ok(parsed.to_checksum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_address() {
        // Test vector from EIP-55
        let bytes = hex::decode("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed")
            .unwrap()
            .try_into()
            .unwrap();
        let addr = Address::from_bytes(bytes);
        assert_eq!(addr.to_checksum(), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
    }

    #[test]
    fn test_hex_output() {
        let addr = Address::ZERO;
        assert_eq!(addr.to_hex(), "0000000000000000000000000000000000000000");
        assert_eq!(
            addr.to_hex_prefixed(),
            "0x0000000000000000000000000000000000000000"
        );
        assert!(addr.is_zero());
    }

    #[test]
    fn test_to_checksum_case() {
        assert_eq!(
            to_checksum_case("0xb7a9e833865e9f2f4dffed6338da68130ed2B319").unwrap(),
            "0xb7A9E833865e9f2F4dFFED6338DA68130Ed2B319"
        );
        assert_eq!(
            to_checksum_case("fb6916095ca1df60bb79ce92ce3ea74c37c5d359").unwrap(),
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359"
        );
        // Wrongly-cased input is normalized, not rejected.
        assert_eq!(
            to_checksum_case("0XB7A9E833865E9F2F4DFFED6338DA68130ED2B319").unwrap(),
            "0xb7A9E833865e9f2F4dFFED6338DA68130Ed2B319"
        );
    }

    #[test]
    fn test_digits_only_address() {
        assert_eq!(
            to_checksum_case("0x0000000000000000000000000000000000000001").unwrap(),
            "0x0000000000000000000000000000000000000001"
        );
    }

    #[test]
    fn test_not_an_address() {
        assert!(matches!(
            to_checksum_case("foobar"),
            Err(Error::InvalidAddress { .. })
        ));
        assert!(matches!(
            to_checksum_case("0xb7a9e833865e9f2f4dffed6338da68130ed2b3"),
            Err(Error::InvalidAddress { .. })
        ));
        assert!(matches!(
            to_checksum_case("0xg7a9e833865e9f2f4dffed6338da68130ed2b319"),
            Err(Error::InvalidAddress { .. })
        ));
    }

    #[test]
    fn test_zero_address_rejected() {
        let err = to_checksum_case("0x0000000000000000000000000000000000000000").unwrap_err();
        match err {
            Error::InvalidAddress { reason, .. } => assert_eq!(reason, "zero address"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_ignores_case() {
        let lower: Address = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed".parse().unwrap();
        let mixed: Address = "5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".parse().unwrap();
        assert_eq!(lower, mixed);
        assert_eq!(lower.to_string(), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
    }
}

//! Ethereum address representation and EIP-55 checksum encoding.

use std::fmt;

use secp256k1::PublicKey;

use crate::error::AccountError;
use crate::hash::{keccak256, keccak256_str};

/// An Ethereum address (20 bytes).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 20]);

impl Address {
    /// Creates an address from raw bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Derives the address of a secp256k1 public key.
    ///
    /// Process:
    /// 1. Serialize the public key in uncompressed form (65 bytes)
    /// 2. Remove the first byte (0x04 prefix)
    /// 3. Hash the remaining 64 bytes with Keccak-256
    /// 4. Take the last 20 bytes of the hash
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        let uncompressed = public_key.serialize_uncompressed();
        let hash = keccak256(&uncompressed[1..]);

        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&hash[12..]);
        Self(bytes)
    }

    /// Parses an address from 40 hex characters, with or without a `0x`
    /// prefix. Casing is ignored; use [`Address::from_checksum`] to verify a
    /// checksummed string.
    pub fn from_hex(text: &str) -> Result<Self, AccountError> {
        let stripped = text.strip_prefix("0x").unwrap_or(text);
        if stripped.len() != 40 {
            return Err(AccountError::InvalidAddress(format!(
                "expected 40 hex characters, got {}",
                stripped.len()
            )));
        }

        let decoded =
            hex::decode(stripped).map_err(|e| AccountError::InvalidAddress(e.to_string()))?;
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&decoded);
        Ok(Self(bytes))
    }

    /// Parses a checksummed address and verifies its casing.
    ///
    /// The supplied string must match [`Address::to_checksum`] of the parsed
    /// address exactly; any single-character typo or casing corruption is
    /// rejected.
    pub fn from_checksum(text: &str) -> Result<Self, AccountError> {
        let address = Self::from_hex(text)?;
        let expected = address.to_checksum();
        let supplied = if text.starts_with("0x") {
            text.to_string()
        } else {
            format!("0x{text}")
        };

        if supplied != expected {
            return Err(AccountError::InvalidAddress(format!(
                "checksum mismatch: got {supplied}, expected {expected}"
            )));
        }
        Ok(address)
    }

    /// Returns the address as raw bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns the address as a lowercase hex string (without 0x prefix).
    #[inline]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Returns the address with checksum encoding (EIP-55).
    ///
    /// The lowercase 40-character hex address is hashed as ASCII text with
    /// Keccak-256, and each alphabetic character is uppercased exactly when
    /// the hash's hex digit at the same index has value greater than 7.
    /// Digits are unaffected. Pure function of the address bytes.
    pub fn to_checksum(&self) -> String {
        let hex_addr = self.to_hex();
        let hash = keccak256_str(&hex_addr);

        let mut checksum = String::with_capacity(42);
        checksum.push_str("0x");

        for (i, c) in hex_addr.chars().enumerate() {
            let hash_byte = hash[i / 2];
            let hash_nibble = if i % 2 == 0 {
                hash_byte >> 4
            } else {
                hash_byte & 0x0f
            };

            if hash_nibble > 7 {
                checksum.push(c.to_ascii_uppercase());
            } else {
                checksum.push(c);
            }
        }

        checksum
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_vectors() {
        // Test vectors from EIP-55
        let vectors = [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ];
        for vector in vectors {
            let addr = Address::from_hex(&vector.to_lowercase()).unwrap();
            assert_eq!(addr.to_checksum(), vector);
        }
    }

    #[test]
    fn test_checksum_idempotent() {
        let addr = Address::from_hex("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
        let checksummed = addr.to_checksum();
        let reparsed = Address::from_hex(&checksummed.to_lowercase()).unwrap();
        assert_eq!(reparsed.to_checksum(), checksummed);
    }

    #[test]
    fn test_casing_encodes_hash_bits() {
        let addr = Address::from_hex("0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359").unwrap();
        let checksummed = addr.to_checksum();
        let hash = keccak256_str(&addr.to_hex());

        for (i, c) in checksummed[2..].chars().enumerate() {
            let nibble = if i % 2 == 0 {
                hash[i / 2] >> 4
            } else {
                hash[i / 2] & 0x0f
            };
            if c.is_ascii_alphabetic() {
                assert_eq!(c.is_ascii_uppercase(), nibble > 7, "position {i}");
            }
        }
    }

    #[test]
    fn test_from_checksum_accepts_valid() {
        let addr = Address::from_checksum("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").unwrap();
        assert_eq!(addr.to_hex(), "5aaeb6053f3e94c9b9a09f33669435e7ef1beaed");
    }

    #[test]
    fn test_from_checksum_rejects_corrupted_casing() {
        // First letter's case flipped
        let err = Address::from_checksum("0x5aaeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
        assert!(matches!(err, Err(AccountError::InvalidAddress(_))));
    }

    #[test]
    fn test_from_hex_rejects_bad_length() {
        assert!(Address::from_hex("0x1234").is_err());
        assert!(Address::from_hex("").is_err());
    }

    #[test]
    fn test_hex_output() {
        let addr = Address::from_bytes([0u8; 20]);
        assert_eq!(addr.to_hex(), "0000000000000000000000000000000000000000");
    }
}

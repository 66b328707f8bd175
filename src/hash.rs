//! Keccak-256 entry points.
//!
//! Two variants are deliberately kept separate: [`keccak256`] digests raw
//! bytes, while [`keccak256_str`] digests the literal ASCII text of a string
//! (used for checksum hashing, which operates on the hex *characters* of an
//! address rather than the bytes they encode). They are not interchangeable:
//! `keccak256_str("00ff") != keccak256(&[0x00, 0xff])`.

use tiny_keccak::{Hasher, Keccak};

/// Hashes raw bytes with Keccak-256.
#[inline]
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);

    let mut hash = [0u8; 32];
    hasher.finalize(&mut hash);
    hash
}

/// Hashes the ASCII text of a string with Keccak-256, without decoding it.
#[inline]
pub fn keccak256_str(text: &str) -> [u8; 32] {
    keccak256(text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_vector() {
        // Keccak-256 of the empty string
        assert_eq!(
            hex::encode(keccak256(&[])),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
        assert_eq!(keccak256_str(""), keccak256(&[]));
    }

    #[test]
    fn test_known_vector() {
        assert_eq!(
            hex::encode(keccak256(b"hello")),
            "1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8"
        );
    }

    #[test]
    fn test_string_variant_hashes_text_not_bytes() {
        // "00ff" as text is four ASCII characters, not the two bytes 0x00 0xff.
        assert_ne!(keccak256_str("00ff"), keccak256(&[0x00, 0xff]));
        assert_eq!(keccak256_str("00ff"), keccak256(b"00ff"));
    }
}

//! Private keys, accounts, and key derivation.

use std::fmt;

use secp256k1::{All, PublicKey, Secp256k1, SecretKey};

use crate::address::Address;
use crate::entropy::{EntropySource, OsEntropy};
use crate::error::AccountError;
use crate::hash::keccak256;

/// A secp256k1 private key (32-byte scalar).
///
/// The hex form is `0x` followed by 64 lowercase hex characters. Validity as
/// a curve scalar is checked when the key is used, not at construction; the
/// curve library rejects zero and values at or above the curve order.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PrivateKey([u8; 32]);

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey({})", self.to_hex())
    }
}

impl PrivateKey {
    /// Creates a private key from raw bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parses a private key from 64 hex characters, with or without a `0x`
    /// prefix.
    pub fn from_hex(text: &str) -> Result<Self, AccountError> {
        let stripped = text.strip_prefix("0x").unwrap_or(text);
        if stripped.len() != 64 {
            return Err(AccountError::InvalidScalar(format!(
                "expected 64 hex characters, got {}",
                stripped.len()
            )));
        }

        let decoded =
            hex::decode(stripped).map_err(|e| AccountError::InvalidScalar(e.to_string()))?;
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&decoded);
        Ok(Self(bytes))
    }

    /// Returns the raw key bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the key as a `0x`-prefixed hex string (66 characters).
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    fn to_secret_key(self) -> Result<SecretKey, AccountError> {
        SecretKey::from_slice(&self.0).map_err(|e| AccountError::InvalidScalar(e.to_string()))
    }
}

/// An account: a checksummed address paired with the private key that
/// controls it. Immutable once derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Account {
    address: Address,
    private_key: PrivateKey,
}

impl Account {
    /// Returns the account's address.
    #[inline]
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Returns the account's private key, exactly as supplied or generated.
    #[inline]
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }
}

/// Key derivation engine.
///
/// Holds an explicitly constructed curve context and an entropy source;
/// there is no global curve state, so tests can inject scripted entropy and
/// still exercise the full derivation path.
pub struct Accounts<E: EntropySource = OsEntropy> {
    secp: Secp256k1<All>,
    entropy: E,
}

impl Accounts<OsEntropy> {
    /// Creates an engine backed by the operating system's entropy source.
    pub fn new() -> Self {
        Self::with_entropy(OsEntropy)
    }
}

impl Default for Accounts<OsEntropy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntropySource> Accounts<E> {
    /// Creates an engine with a caller-supplied entropy source.
    pub fn with_entropy(entropy: E) -> Self {
        Self {
            secp: Secp256k1::new(),
            entropy,
        }
    }

    /// Generates a fresh account.
    ///
    /// The private key is not a raw entropy draw. Three independent draws
    /// are mixed through two hashing rounds:
    ///
    /// ```text
    /// inner  = keccak256(random(32) || extra_or_random(32))
    /// middle = random(32) || inner || random(32)
    /// key    = keccak256(middle)
    /// ```
    ///
    /// so a partially predictable system RNG still yields a high-entropy
    /// key. This construction is a fixed protocol; it must not be collapsed
    /// into a single draw. `extra_entropy` lets the caller contribute their
    /// own randomness to the inner hash.
    pub fn create(&self, extra_entropy: Option<&[u8]>) -> Result<Account, AccountError> {
        let inner = match extra_entropy {
            Some(extra) => {
                let mut seed = Vec::with_capacity(32 + extra.len());
                seed.extend_from_slice(&self.entropy.random_32()?);
                seed.extend_from_slice(extra);
                keccak256(&seed)
            }
            None => {
                let mut seed = [0u8; 64];
                seed[..32].copy_from_slice(&self.entropy.random_32()?);
                seed[32..].copy_from_slice(&self.entropy.random_32()?);
                keccak256(&seed)
            }
        };

        let mut middle = [0u8; 96];
        middle[..32].copy_from_slice(&self.entropy.random_32()?);
        middle[32..64].copy_from_slice(&inner);
        middle[64..].copy_from_slice(&self.entropy.random_32()?);

        self.from_private(&PrivateKey::from_bytes(keccak256(&middle)))
    }

    /// Derives the account controlled by an existing private key.
    ///
    /// The address is the last 20 bytes of the Keccak-256 hash of the
    /// uncompressed public key (without its 0x04 prefix byte), checksummed.
    /// The private key passes through untouched.
    pub fn from_private(&self, private_key: &PrivateKey) -> Result<Account, AccountError> {
        let secret = private_key.to_secret_key()?;
        let public = PublicKey::from_secret_key(&self.secp, &secret);

        Ok(Account {
            address: Address::from_public_key(&public),
            private_key: *private_key,
        })
    }
}

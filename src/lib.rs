//! # eth_account
//!
//! Deterministic Ethereum account primitives over secp256k1 and Keccak-256:
//! key generation, address derivation, EIP-55 checksum encoding, and message
//! signing with public-key recovery.
//!
//! ## Architecture
//!
//! - `entropy`: cryptographically secure randomness, injectable for tests
//! - `account`: private keys and keypair/address derivation
//! - `address`: 20-byte addresses and checksum encoding/validation
//! - `signature`: recoverable ECDSA signing and address recovery
//! - `hash`: Keccak-256 entry points (byte- and string-oriented)
//!
//! All operations are synchronous, stateless between calls, and exchange
//! values as fixed-width byte arrays or `0x`-prefixed hex strings. Key
//! storage, transaction encoding, and networking are out of scope.

pub mod account;
pub mod address;
pub mod entropy;
pub mod error;
pub mod hash;
pub mod signature;

pub use account::{Account, Accounts, PrivateKey};
pub use address::Address;
pub use entropy::{EntropySource, OsEntropy};
pub use error::AccountError;
pub use hash::{keccak256, keccak256_str};
pub use signature::{Signature, Signer, SIGNATURE_LEN};

//! Error taxonomy for account operations.

/// Errors surfaced by key derivation, checksum validation, signing and
/// recovery.
///
/// Every variant is a hard rejection: retrying with the same inputs cannot
/// succeed, and no partial result (e.g. a half-built address) is ever
/// returned alongside one.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// A supplied private key is not a valid curve scalar (zero, not below
    /// the curve order, or malformed hex).
    #[error("invalid private key scalar: {0}")]
    InvalidScalar(String),

    /// A signature is not exactly 65 bytes, or its decoded `r`/`s` values
    /// are out of curve-order range.
    #[error("invalid signature encoding: {0}")]
    InvalidSignatureEncoding(String),

    /// Public-key recovery could not reconstruct a valid point (corrupted
    /// signature, wrong hash, wrong recovery id).
    #[error("signature recovery failed: {0}")]
    RecoveryFailure(String),

    /// The system entropy source is unavailable. Fatal for key generation;
    /// never downgraded to weak randomness.
    #[error("system entropy source unavailable: {0}")]
    EntropyUnavailable(String),

    /// An address string is malformed or its checksum casing does not match.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

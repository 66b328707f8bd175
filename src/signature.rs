//! Recoverable ECDSA signatures over 32-byte digests.

use std::fmt;

use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use secp256k1::{All, Message, Secp256k1};

use crate::account::PrivateKey;
use crate::address::Address;
use crate::error::AccountError;

/// Encoded signature length: 32 bytes `r`, 32 bytes `s`, 1 byte `v`.
pub const SIGNATURE_LEN: usize = 65;

/// An ECDSA signature with its recovery indicator.
///
/// The wire format is a hard contract: bytes encode as `r || s || v`, with
/// `r` and `s` big-endian and zero-padded to exactly 32 bytes each even when
/// their magnitudes are short. `v` carries the recovery param offset by the
/// signer's convention (27/28 under [`Signer::new`]).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    r: [u8; 32],
    s: [u8; 32],
    v: u8,
}

impl Signature {
    /// Assembles a signature from its components.
    #[inline]
    pub const fn new(r: [u8; 32], s: [u8; 32], v: u8) -> Self {
        Self { r, s, v }
    }

    /// Returns the `r` component, zero-padded to 32 bytes.
    #[inline]
    pub const fn r(&self) -> &[u8; 32] {
        &self.r
    }

    /// Returns the `s` component, zero-padded to 32 bytes.
    #[inline]
    pub const fn s(&self) -> &[u8; 32] {
        &self.s
    }

    /// Returns the recovery indicator byte.
    #[inline]
    pub const fn v(&self) -> u8 {
        self.v
    }

    /// Encodes the signature as `r || s || v`.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        let mut bytes = [0u8; SIGNATURE_LEN];
        bytes[..32].copy_from_slice(&self.r);
        bytes[32..64].copy_from_slice(&self.s);
        bytes[64] = self.v;
        bytes
    }

    /// Decodes a 65-byte signature.
    ///
    /// Inverse of [`Signature::to_bytes`]: `v` is taken from the tail byte,
    /// `r` from bytes 0..32 and `s` from bytes 32..64.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AccountError> {
        if bytes.len() != SIGNATURE_LEN {
            return Err(AccountError::InvalidSignatureEncoding(format!(
                "expected {SIGNATURE_LEN} bytes, got {}",
                bytes.len()
            )));
        }

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);
        Ok(Self::new(r, s, bytes[64]))
    }

    /// Returns the signature as a `0x`-prefixed hex string (132 characters).
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.to_bytes()))
    }

    /// Parses a signature from 130 hex characters, with or without a `0x`
    /// prefix.
    pub fn from_hex(text: &str) -> Result<Self, AccountError> {
        let stripped = text.strip_prefix("0x").unwrap_or(text);
        let decoded = hex::decode(stripped)
            .map_err(|e| AccountError::InvalidSignatureEncoding(e.to_string()))?;
        Self::from_bytes(&decoded)
    }

    /// Normalizes `v` to the raw recovery id the curve library expects.
    ///
    /// Historical convention: `v` may arrive either as a raw id (0 or 1) or
    /// as an offset-plus-parity value (27/28, or odd chain offsets). When
    /// `v < 2` it already is the id; otherwise the id is `1 - (v % 2)`.
    /// This dual branch is a compatibility quirk external verifiers depend
    /// on; it is deliberately not simplified.
    pub fn recovery_id(&self) -> u8 {
        if self.v < 2 {
            self.v
        } else {
            1 - self.v % 2
        }
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", self.to_hex())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Signing and recovery engine.
///
/// Holds an explicitly constructed curve context and the offset added to the
/// recovery param when encoding `v`. [`Signer::new`] uses 27, the
/// compatibility convention of the target verification ecosystem;
/// [`Signer::with_v_offset`] builds variants with a different offset.
pub struct Signer {
    secp: Secp256k1<All>,
    v_offset: u8,
}

impl Signer {
    /// Creates a signer using the standard `v = 27 + recovery_param`
    /// encoding.
    pub fn new() -> Self {
        Self::with_v_offset(27)
    }

    /// Creates a signer that adds a custom offset to the recovery param.
    ///
    /// The offset must be odd for [`Signature::recovery_id`] to invert the
    /// encoding (27 and EIP-155-style offsets are).
    pub fn with_v_offset(v_offset: u8) -> Self {
        Self {
            secp: Secp256k1::new(),
            v_offset,
        }
    }

    /// Signs a 32-byte digest, producing a canonical (low-s) signature.
    ///
    /// The caller is responsible for `hash` being the correct Keccak-256
    /// digest of whatever is being signed; this engine never hashes
    /// pre-images.
    pub fn sign(&self, hash: &[u8; 32], private_key: &PrivateKey) -> Result<Signature, AccountError> {
        let secret = secp256k1::SecretKey::from_slice(private_key.as_bytes())
            .map_err(|e| AccountError::InvalidScalar(e.to_string()))?;
        let message = Message::from_digest(*hash);

        let (recovery_id, compact) = self
            .secp
            .sign_ecdsa_recoverable(&message, &secret)
            .serialize_compact();

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&compact[..32]);
        s.copy_from_slice(&compact[32..]);

        Ok(Signature::new(r, s, self.v_offset + recovery_id.to_i32() as u8))
    }

    /// Recovers the signer's address from a signature over `hash`.
    ///
    /// The address is derived from the recovered public key exactly as
    /// [`Accounts::from_private`](crate::Accounts::from_private) derives it.
    pub fn recover(&self, hash: &[u8; 32], signature: &Signature) -> Result<Address, AccountError> {
        let recovery_id = RecoveryId::from_i32(i32::from(signature.recovery_id()))
            .map_err(|e| AccountError::InvalidSignatureEncoding(e.to_string()))?;

        let mut compact = [0u8; 64];
        compact[..32].copy_from_slice(signature.r());
        compact[32..].copy_from_slice(signature.s());
        let recoverable = RecoverableSignature::from_compact(&compact, recovery_id)
            .map_err(|e| AccountError::InvalidSignatureEncoding(e.to_string()))?;

        let message = Message::from_digest(*hash);
        let public = self
            .secp
            .recover_ecdsa(&message, &recoverable)
            .map_err(|e| AccountError::RecoveryFailure(e.to_string()))?;

        Ok(Address::from_public_key(&public))
    }
}

impl Default for Signer {
    fn default() -> Self {
        Self::new()
    }
}

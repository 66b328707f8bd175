//! Cryptographically secure entropy acquisition.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::AccountError;

/// A source of cryptographically strong random bytes.
///
/// Injected into [`Accounts`](crate::Accounts) at construction so tests can
/// substitute scripted entropy. Implementations must either fill the buffer
/// with unpredictable bytes or fail with
/// [`AccountError::EntropyUnavailable`] — silently returning weak randomness
/// is never acceptable.
pub trait EntropySource {
    /// Fills `buf` with random bytes.
    fn fill(&self, buf: &mut [u8]) -> Result<(), AccountError>;

    /// Draws 32 fresh random bytes.
    fn random_32(&self) -> Result<[u8; 32], AccountError> {
        let mut buf = [0u8; 32];
        self.fill(&mut buf)?;
        Ok(buf)
    }
}

/// The operating system's entropy source.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<(), AccountError> {
        let mut rng = OsRng;
        rng.try_fill_bytes(buf)
            .map_err(|e| AccountError::EntropyUnavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_requested_length() {
        let mut buf = [0u8; 7];
        OsEntropy.fill(&mut buf).unwrap();
        assert_eq!(OsEntropy.random_32().unwrap().len(), 32);
    }

    #[test]
    fn test_draws_are_distinct() {
        let a = OsEntropy.random_32().unwrap();
        let b = OsEntropy.random_32().unwrap();
        assert_ne!(a, b);
    }
}

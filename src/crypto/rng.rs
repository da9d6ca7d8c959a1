// src/crypto/rng.rs
//! Secure randomness for fixed-size public parameters (salt, IV).
//!
//! Adds `T::random()` to every `SpanBuffer<N>` alias, backed by the OS RNG.
//! Unlike a fill-and-ignore approach, RNG failure is surfaced as an error: a
//! zeroed salt or IV must never reach a container.

use crate::error::{JsoncryptError, Result};
use rand::rngs::OsRng;
use rand::TryRngCore;
use secure_gate::Fixed;

/// Extension trait – gives `.random()` to all fixed-size secret types
pub trait SecureRandomExt: Sized {
    /// Generate a cryptographically secure random instance of this type
    fn random() -> Result<Self>;
}

/// Blanket impl – every `Fixed<[u8; N]>` gets `.random()`
impl<const N: usize> SecureRandomExt for Fixed<[u8; N]> {
    #[inline]
    fn random() -> Result<Self> {
        let mut bytes = [0u8; N];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| JsoncryptError::Crypto(format!("OS RNG failure: {e}")))?;
        Ok(Fixed::new(bytes))
    }
}

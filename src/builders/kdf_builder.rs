//! src/builders/kdf_builder.rs
//! Salted key derivation builder (PBKDF2-HMAC-SHA256 + HKDF split)

use crate::aliases::{PasswordString, Salt32};
use crate::consts::DEFAULT_PBKDF2_ITERATIONS;
use crate::crypto::kdf::derive_keys;
use crate::crypto::kdf::subkeys::DerivedKeys;
use crate::crypto::rng::SecureRandomExt;
use crate::error::Result;

/// Key derivation builder
///
/// Strong defaults: fresh 32-byte random salt + 1,000,000 iterations
/// (uses [`DEFAULT_PBKDF2_ITERATIONS`]).
///
/// # Thread Safety
///
/// Builders hold no shared state and can be used from any thread.
pub struct KdfBuilder {
    iterations: u32,
    salt: Salt32, // Secure from birth
}

impl KdfBuilder {
    /// Create builder with a fresh random salt and the default iteration count
    pub fn new() -> Result<Self> {
        Ok(Self {
            iterations: DEFAULT_PBKDF2_ITERATIONS,
            salt: Salt32::random()?,
        })
    }

    /// Set custom iteration count (range is checked at derivation time)
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Use a known salt, e.g. the one read back from a container
    #[must_use]
    pub fn with_salt(mut self, salt: [u8; 32]) -> Self {
        self.salt = Salt32::new(salt);
        self
    }

    /// Current salt as raw bytes (for the container header)
    #[must_use]
    pub fn salt(&self) -> &[u8; 32] {
        self.salt.expose_secret()
    }

    /// Current iteration count
    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Derive the cipher + integrity key pair
    pub fn derive(&self, password: &PasswordString) -> Result<DerivedKeys> {
        derive_keys(password, &self.salt, self.iterations)
    }
}

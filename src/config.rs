//! src/config.rs
//! Per-call tuning: KDF cost and cipher window size.

use crate::consts::{
    BLOCK_SIZE, DEFAULT_PBKDF2_ITERATIONS, DEFAULT_WINDOW_SIZE, PBKDF2_MAX_ITER, PBKDF2_MIN_ITER,
};
use crate::error::{JsoncryptError, Result};
use serde::{Deserialize, Serialize};

/// Settings shared by encryption and decryption.
///
/// The iteration count is **not** recorded in the container, so a file can only
/// be decrypted with the same `kdf_iterations` it was encrypted with.
/// `window_size` only affects memory use and may differ between the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// PBKDF2-HMAC-SHA256 iteration count.
    pub kdf_iterations: u32,
    /// Bytes of plaintext/ciphertext processed per cipher window.
    pub window_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kdf_iterations: DEFAULT_PBKDF2_ITERATIONS,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl Config {
    #[must_use]
    pub fn with_kdf_iterations(mut self, iterations: u32) -> Self {
        self.kdf_iterations = iterations;
        self
    }

    #[must_use]
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Reject settings the pipeline cannot honour.
    pub fn validate(&self) -> Result<()> {
        if !(PBKDF2_MIN_ITER..=PBKDF2_MAX_ITER).contains(&self.kdf_iterations) {
            return Err(JsoncryptError::Config(format!(
                "kdf_iterations must be within {PBKDF2_MIN_ITER}..={PBKDF2_MAX_ITER}, got {}",
                self.kdf_iterations
            )));
        }
        if self.window_size == 0 || self.window_size % BLOCK_SIZE != 0 {
            return Err(JsoncryptError::Config(format!(
                "window_size must be a positive multiple of {BLOCK_SIZE}, got {}",
                self.window_size
            )));
        }
        Ok(())
    }
}

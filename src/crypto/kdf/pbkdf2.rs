//! src/crypto/kdf/pbkdf2.rs

use crate::aliases::{MasterKey32, PasswordString, Salt32};
use crate::consts::{PBKDF2_MAX_ITER, PBKDF2_MIN_ITER};
use crate::error::{JsoncryptError, Result};

use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha256;

/// Derive PBKDF2-HMAC-SHA256 directly into the caller's master key buffer
///
/// # Security
/// - Uses secure-gate types throughout
/// - Output buffer is zeroized on drop
/// - Password bytes are only borrowed for the duration of the call
#[inline]
pub fn derive_secure_pbkdf2_key(
    password: &PasswordString,
    salt: &Salt32,
    iterations: u32,
    out_key: &mut MasterKey32,
) -> Result<()> {
    if !(PBKDF2_MIN_ITER..=PBKDF2_MAX_ITER).contains(&iterations) {
        return Err(JsoncryptError::Crypto(format!(
            "PBKDF2 iterations must be within {PBKDF2_MIN_ITER}..={PBKDF2_MAX_ITER}"
        )));
    }

    pbkdf2::<Hmac<Sha256>>(
        password.expose_secret().as_bytes(),
        salt.expose_secret(),
        iterations,
        out_key.expose_secret_mut(),
    )
    .map_err(|e| JsoncryptError::Crypto(format!("PBKDF2 failed: {e}")))?;
    Ok(())
}

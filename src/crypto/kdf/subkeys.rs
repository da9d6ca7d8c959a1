//! src/crypto/kdf/subkeys.rs
//! Split the PBKDF2 master key into independent cipher and integrity keys.

use crate::aliases::{Aes256Key32, HmacKey32, MasterKey32};
use crate::consts::{CIPHER_KEY_INFO, INTEGRITY_KEY_INFO};
use crate::error::{JsoncryptError, Result};
use hkdf::Hkdf;
use sha2::Sha256;

/// The two keys a single encrypt/decrypt call works with.
///
/// Lives for exactly one operation; both halves zeroize on drop.
pub struct DerivedKeys {
    pub cipher_key: Aes256Key32,
    pub integrity_key: HmacKey32,
}

/// HKDF-SHA256 expand of the master key under two distinct info strings.
pub fn split_master_key(master: &MasterKey32) -> Result<DerivedKeys> {
    let hk = Hkdf::<Sha256>::new(None, master.expose_secret());

    let mut cipher_key = Aes256Key32::new([0u8; 32]);
    hk.expand(CIPHER_KEY_INFO, cipher_key.expose_secret_mut())
        .map_err(|e| JsoncryptError::Crypto(format!("HKDF expand failed: {e}")))?;

    let mut integrity_key = HmacKey32::new([0u8; 32]);
    hk.expand(INTEGRITY_KEY_INFO, integrity_key.expose_secret_mut())
        .map_err(|e| JsoncryptError::Crypto(format!("HKDF expand failed: {e}")))?;

    Ok(DerivedKeys {
        cipher_key,
        integrity_key,
    })
}

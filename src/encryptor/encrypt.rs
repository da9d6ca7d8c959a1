//! src/encryptor/encrypt.rs
//! Container encryption — mapping in, published container out.
//!
//! Pipeline (innermost last):
//! `write_object` → [`EncryptWriter`] → [`IntegrityWriter`] → [`ContainerWriter`]

use crate::aliases::{Iv16, PasswordString, Salt32};
use crate::config::Config;
use crate::container::{ContainerHeader, ContainerWriter};
use crate::crypto::kdf::derive_keys;
use crate::crypto::rng::SecureRandomExt;
use crate::encryptor::window::EncryptWriter;
use crate::error::Result;
use crate::integrity::{IntegrityEngine, IntegrityWriter};
use crate::json::{write_object, JsonObject};
use crate::key_source::KeySource;
use std::path::Path;

/// Encrypt `mapping` to `destination` with the default [`Config`].
///
/// # Example
///
/// ```no_run
/// use jsoncrypt_rs::{decrypt, encrypt, JsonObject, KeySource};
///
/// let mut doc = JsonObject::new();
/// doc.insert("secret", "confidential information");
/// doc.insert("numbers", vec![1, 2, 3, 4, 5]);
///
/// let key = KeySource::password("your-strong-password");
/// encrypt(&doc, "encrypted.bin", &key)?;
/// assert_eq!(decrypt("encrypted.bin", &key)?, doc);
/// # Ok::<(), jsoncrypt_rs::JsoncryptError>(())
/// ```
pub fn encrypt(
    mapping: &JsonObject,
    destination: impl AsRef<Path>,
    key_source: &KeySource,
) -> Result<()> {
    encrypt_with_config(mapping, destination, key_source, &Config::default())
}

/// Encrypt with explicit settings. Fresh salt and IV on every call.
pub fn encrypt_with_config(
    mapping: &JsonObject,
    destination: impl AsRef<Path>,
    key_source: &KeySource,
    config: &Config,
) -> Result<()> {
    config.validate()?;
    let password = key_source.resolve()?;
    encrypt_with_fixed_params(
        mapping,
        destination,
        &password,
        config,
        Salt32::random()?,
        Iv16::random()?,
    )
}

/// Encrypt with caller-chosen salt and IV.
///
/// Deterministic for identical inputs; meant for tests and fixtures only.
/// Reusing a salt/IV pair across real documents leaks plaintext equality.
pub fn encrypt_with_fixed_params(
    mapping: &JsonObject,
    destination: impl AsRef<Path>,
    password: &PasswordString,
    config: &Config,
    salt: Salt32,
    iv: Iv16,
) -> Result<()> {
    config.validate()?;
    let keys = derive_keys(password, &salt, config.kdf_iterations)?;

    let container = ContainerWriter::create(destination)?;
    let tee = IntegrityWriter::new(container, IntegrityEngine::new(&keys.integrity_key)?);
    let mut cipher = EncryptWriter::new(tee, &keys.cipher_key, &iv, config.window_size);

    write_object(mapping, &mut cipher)?;

    let (tee, ciphertext_len) = cipher.finish()?;
    let (container, engine) = tee.into_parts();

    let mut header = ContainerHeader::new(salt, iv, ciphertext_len);
    header.tag = engine.finalize(&header.associated_data());

    tracing::debug!(entries = mapping.len(), ciphertext_len, "document encrypted");
    container.finish(&header)
}

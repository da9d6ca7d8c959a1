//! src/decryptor/decrypt.rs
//! Container decryption — authenticate everything, then release the mapping.
//!
//! Order of checks: header size → method tag → declared length → key
//! derivation → full ciphertext pass (MAC + CBC) → tag → padding → JSON.
//! Nothing decrypted escapes before the tag comparison succeeds.

use crate::aliases::PasswordString;
use crate::config::Config;
use crate::container::{open, read_from, ContainerHeader};
use crate::crypto::kdf::derive_keys;
use crate::decryptor::window::WindowDecryptor;
use crate::error::{JsoncryptError, Result};
use crate::integrity::{IntegrityEngine, IntegrityReader};
use crate::json::{parse_object, JsonObject};
use crate::key_source::KeySource;
use crate::utils::read_full;
use std::io::Read;
use std::path::Path;
use zeroize::Zeroizing;

/// Decrypt the container at `source` with the default [`Config`].
pub fn decrypt(source: impl AsRef<Path>, key_source: &KeySource) -> Result<JsonObject> {
    decrypt_with_config(source, key_source, &Config::default())
}

/// Decrypt with explicit settings; `kdf_iterations` must match the encrypting side.
pub fn decrypt_with_config(
    source: impl AsRef<Path>,
    key_source: &KeySource,
    config: &Config,
) -> Result<JsonObject> {
    config.validate()?;
    let password = key_source.resolve()?;
    // `open` has already checked the length field against the file size.
    let (header, ciphertext) = open(source)?;
    let capacity = header.ciphertext_len;
    decrypt_body(header, ciphertext, capacity, &password, config)
}

/// Decrypt a container held by any reader (e.g. an in-memory buffer).
///
/// `available` is the total container size when known; passing it lets an
/// inflated length field be rejected as truncated before key derivation.
pub fn decrypt_from_reader<R: Read>(
    reader: R,
    available: Option<u64>,
    password: &PasswordString,
    config: &Config,
) -> Result<JsonObject> {
    config.validate()?;
    let (header, ciphertext) = read_from(reader, available)?;
    // Without a known size the length field is unchecked until the tag is;
    // let the buffer grow with what actually arrives.
    let capacity = if available.is_some() {
        header.ciphertext_len
    } else {
        0
    };
    decrypt_body(header, ciphertext, capacity, password, config)
}

/// `capacity` pre-sizes the plaintext buffer and must already be bounded by
/// the real input size.
fn decrypt_body<R: Read>(
    header: ContainerHeader,
    ciphertext: R,
    capacity: u64,
    password: &PasswordString,
    config: &Config,
) -> Result<JsonObject> {
    let keys = derive_keys(password, &header.salt, config.kdf_iterations)?;

    let mut reader = IntegrityReader::new(ciphertext, IntegrityEngine::new(&keys.integrity_key)?);
    let capacity = usize::try_from(capacity).unwrap_or(0);
    let mut decryptor = WindowDecryptor::with_capacity(&keys.cipher_key, &header.iv, capacity);

    let mut window = Zeroizing::new(vec![0u8; config.window_size]);
    let mut consumed = 0u64;
    loop {
        let n = read_full(&mut reader, &mut window)?;
        if n == 0 {
            break;
        }
        decryptor.update(&window[..n]);
        consumed += n as u64;
        if n < window.len() {
            break;
        }
    }

    if consumed != header.ciphertext_len {
        return Err(JsoncryptError::TruncatedContainer(format!(
            "expected {} ciphertext bytes, read {consumed}",
            header.ciphertext_len
        )));
    }

    reader
        .into_engine()
        .verify(&header.associated_data(), &header.tag)?;

    let plaintext = decryptor.finish()?;
    let mapping = parse_object(&plaintext)?;
    tracing::debug!(entries = mapping.len(), "document decrypted");
    Ok(mapping)
}

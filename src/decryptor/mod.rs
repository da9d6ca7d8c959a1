// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt(source, &key_source)?` returning the verified mapping.
//! Building block: [`WindowDecryptor`] for custom flows.

pub(crate) mod decrypt;
pub(crate) mod window;

pub use decrypt::{decrypt, decrypt_from_reader, decrypt_with_config};
pub use window::WindowDecryptor;

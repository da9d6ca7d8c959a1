// src/lib.rs

//! Encrypted JSON containers keyed by a password or an image file.
//!
//! A mapping is streamed through AES-256-CBC in bounded windows, authenticated
//! with HMAC-SHA256 and framed in a fixed 91-byte header. Keys come from
//! PBKDF2-HMAC-SHA256 over the password (or the base64 of an image file),
//! split into independent cipher and integrity keys.

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod config;
pub mod consts;
pub mod container;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod integrity;
pub mod json;
pub mod key_source;
pub mod utils;

// High-level API — this is what most callers import
pub use decryptor::{decrypt, decrypt_with_config};
pub use encryptor::{encrypt, encrypt_with_config};
pub use error::{JsoncryptError, Result};

pub use builders::kdf_builder::KdfBuilder;
pub use config::Config;
pub use container::peek_method;
pub use json::{JsonObject, JsonValue};
pub use key_source::{ImageFormat, KeySource};

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, encrypt_batch};

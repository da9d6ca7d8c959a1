// src/encryptor/mod.rs

//! High-level encryption facade.
//!
//! Core API: `encrypt(&mapping, destination, &key_source)?`.
//! Building block: [`EncryptWriter`], the windowed CBC cipher behind `io::Write`.

pub(crate) mod encrypt;
pub(crate) mod window;

pub use encrypt::{encrypt, encrypt_with_config, encrypt_with_fixed_params};
pub use window::EncryptWriter;

//! # Builders
//!
//! - [`kdf_builder`] - Builder for salted PBKDF2 + HKDF key derivation

pub mod kdf_builder;

// src/crypto/mod.rs

//! Low-level crypto primitives (KDF, randomness).
//!
//! The cipher and integrity engines live in [`encryptor`](crate::encryptor),
//! [`decryptor`](crate::decryptor) and [`integrity`](crate::integrity).

pub mod kdf;
pub mod rng;

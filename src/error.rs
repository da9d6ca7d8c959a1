//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All operations return [`Result<T>`](Result), i.e. `Result<T, JsoncryptError>`.
//!
//! Every failure is terminal for the operation that produced it: nothing is
//! retried, the destination of an encryption is left untouched and no
//! (partially) decrypted data is ever handed back alongside an error.

use thiserror::Error;

/// Convenience alias used by every public operation.
pub type Result<T> = std::result::Result<T, JsoncryptError>;

/// The error type for all container operations.
#[derive(Error, Debug)]
pub enum JsoncryptError {
    /// Zero or two key sources were supplied, or the password is empty.
    #[error("invalid key source: {0}")]
    InvalidKeySource(String),

    /// The image file used as key material does not start with a known signature.
    #[error("image key does not start with a recognized image signature")]
    InvalidImageFormat,

    /// The container's 3-byte method tag is not one this library understands.
    ///
    /// The contained value is the tag exactly as read from the file.
    #[error("unsupported container method tag: {0:02x?}")]
    UnsupportedMethod([u8; 3]),

    /// The file is shorter than the fixed header or the declared ciphertext length.
    #[error("truncated container: {0}")]
    TruncatedContainer(String),

    /// Integrity tag mismatch.
    ///
    /// Wrong key and tampering are reported identically.
    #[error("authentication failed")]
    Authentication,

    /// Padding was invalid after successful authentication.
    #[error("invalid padding in authenticated plaintext")]
    Padding,

    /// Authenticated plaintext is not a JSON object.
    #[error("malformed plaintext: {0}")]
    MalformedPlaintext(String),

    /// I/O error while reading the key image, the container or the scratch file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed while streaming a document into the cipher.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document nests arrays/objects deeper than the supported limit.
    ///
    /// Raised before anything is published.
    #[error("document nesting exceeds {0} levels")]
    NestingTooDeep(usize),

    /// A cryptographic primitive failed (RNG, KDF, MAC key setup).
    #[error("crypto error: {0}")]
    Crypto(String),

    /// Rejected [`Config`](crate::Config) value.
    #[error("invalid configuration: {0}")]
    Config(String),
}

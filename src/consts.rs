//! # Constants
//!
//! Container layout sizes, KDF parameters and streaming defaults.

/// The only supported method tag: "password / derived key".
pub const METHOD_TAG: [u8; 3] = *b"pwd";

/// Salt length stored in the container.
pub const SALT_LEN: usize = 32;

/// CBC initialization vector length.
pub const IV_LEN: usize = 16;

/// HMAC-SHA256 tag length.
pub const TAG_LEN: usize = 32;

/// Length of every derived key (master, cipher and integrity keys).
pub const KEY_LEN: usize = 32;

/// AES block size.
pub const BLOCK_SIZE: usize = 16;

/// Width of the big-endian ciphertext length field.
pub const LENGTH_FIELD_LEN: usize = 8;

/// Fixed header size: method tag + salt + IV + tag + length.
pub const HEADER_LEN: usize = METHOD_TAG.len() + SALT_LEN + IV_LEN + TAG_LEN + LENGTH_FIELD_LEN;

/// Header bytes covered by the integrity tag (everything except the tag itself).
pub const ASSOCIATED_DATA_LEN: usize = HEADER_LEN - TAG_LEN;

/// Byte offsets of each header field.
pub const SALT_OFFSET: usize = METHOD_TAG.len();
pub const IV_OFFSET: usize = SALT_OFFSET + SALT_LEN;
pub const TAG_OFFSET: usize = IV_OFFSET + IV_LEN;
pub const LENGTH_OFFSET: usize = TAG_OFFSET + TAG_LEN;

/// Minimum allowed PBKDF2 iteration count.
pub const PBKDF2_MIN_ITER: u32 = 1;

/// Maximum allowed PBKDF2 iteration count.
///
/// Guards against a config typo turning one call into a multi-minute stall.
pub const PBKDF2_MAX_ITER: u32 = 10_000_000;

/// Default PBKDF2-HMAC-SHA256 iteration count.
pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 1_000_000;

/// Default cipher window (1 MiB). Peak buffer use on encrypt is one window.
pub const DEFAULT_WINDOW_SIZE: usize = 1024 * 1024;

/// Deepest array/object nesting a document may have (the top-level object counts as 1).
pub const MAX_NESTING_DEPTH: usize = 1000;

/// HKDF info string for the AES-256-CBC subkey.
pub const CIPHER_KEY_INFO: &[u8] = b"jsoncrypt/v1/cipher";

/// HKDF info string for the HMAC-SHA256 subkey.
pub const INTEGRITY_KEY_INFO: &[u8] = b"jsoncrypt/v1/integrity";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_layout_matches_documented_offsets() {
        assert_eq!(HEADER_LEN, 91);
        assert_eq!(SALT_OFFSET, 3);
        assert_eq!(IV_OFFSET, 35);
        assert_eq!(TAG_OFFSET, 51);
        assert_eq!(LENGTH_OFFSET, 83);
        assert_eq!(ASSOCIATED_DATA_LEN, 59);
    }
}

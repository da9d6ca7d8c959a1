//! # Container Header
//!
//! The fixed 91-byte header that precedes every ciphertext:
//!
//! | Offset | Size | Field                                   |
//! |-------:|-----:|-----------------------------------------|
//! | 0      | 3    | method tag (`b"pwd"`)                   |
//! | 3      | 32   | PBKDF2 salt                             |
//! | 35     | 16   | CBC IV                                  |
//! | 51     | 32   | HMAC-SHA256 tag                         |
//! | 83     | 8    | ciphertext length, big-endian unsigned  |
//! | 91     | N    | ciphertext                              |

use crate::aliases::{Iv16, Salt32, Tag32};
use crate::consts::{
    ASSOCIATED_DATA_LEN, HEADER_LEN, IV_OFFSET, LENGTH_OFFSET, METHOD_TAG, SALT_OFFSET, TAG_LEN,
    TAG_OFFSET,
};
use crate::error::{JsoncryptError, Result};
use std::io::Read;

/// How the container's key was produced.
///
/// Only one method exists; the enum keeps the tag check in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodTag {
    /// Password (or image-as-password) through PBKDF2.
    Password,
}

impl MethodTag {
    pub const fn as_bytes(self) -> [u8; 3] {
        match self {
            Self::Password => METHOD_TAG,
        }
    }

    pub fn from_bytes(bytes: [u8; 3]) -> Result<Self> {
        if bytes == METHOD_TAG {
            Ok(Self::Password)
        } else {
            Err(JsoncryptError::UnsupportedMethod(bytes))
        }
    }
}

pub struct ContainerHeader {
    pub method: MethodTag,
    pub salt: Salt32,
    pub iv: Iv16,
    pub tag: Tag32,
    pub ciphertext_len: u64,
}

impl std::fmt::Debug for ContainerHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContainerHeader")
            .field("method", &self.method)
            .field("salt", self.salt.expose_secret())
            .field("iv", self.iv.expose_secret())
            .field("tag", self.tag.expose_secret())
            .field("ciphertext_len", &self.ciphertext_len)
            .finish()
    }
}

impl ContainerHeader {
    /// Header for a fresh encryption; the tag is filled in once the stream is done.
    pub fn new(salt: Salt32, iv: Iv16, ciphertext_len: u64) -> Self {
        Self {
            method: MethodTag::Password,
            salt,
            iv,
            tag: Tag32::new([0u8; TAG_LEN]),
            ciphertext_len,
        }
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[..SALT_OFFSET].copy_from_slice(&self.method.as_bytes());
        out[SALT_OFFSET..IV_OFFSET].copy_from_slice(self.salt.expose_secret());
        out[IV_OFFSET..TAG_OFFSET].copy_from_slice(self.iv.expose_secret());
        out[TAG_OFFSET..LENGTH_OFFSET].copy_from_slice(self.tag.expose_secret());
        out[LENGTH_OFFSET..].copy_from_slice(&self.ciphertext_len.to_be_bytes());
        out
    }

    /// Parse a complete header. Fails with `UnsupportedMethod` on a foreign tag.
    pub fn from_bytes(bytes: &[u8; HEADER_LEN]) -> Result<Self> {
        let method = MethodTag::from_bytes(field(bytes, 0))?;
        Ok(Self {
            method,
            salt: Salt32::new(field(bytes, SALT_OFFSET)),
            iv: Iv16::new(field(bytes, IV_OFFSET)),
            tag: Tag32::new(field(bytes, TAG_OFFSET)),
            ciphertext_len: u64::from_be_bytes(field(bytes, LENGTH_OFFSET)),
        })
    }

    /// Every header byte except the tag, in file order: what the tag binds.
    pub fn associated_data(&self) -> [u8; ASSOCIATED_DATA_LEN] {
        let full = self.to_bytes();
        let mut out = [0u8; ASSOCIATED_DATA_LEN];
        out[..TAG_OFFSET].copy_from_slice(&full[..TAG_OFFSET]);
        out[TAG_OFFSET..].copy_from_slice(&full[LENGTH_OFFSET..]);
        out
    }
}

#[inline(always)]
fn field<const N: usize>(bytes: &[u8; HEADER_LEN], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[offset..offset + N]);
    out
}

/// Check whether a stream starts with a supported container, reading only the
/// method tag.
///
/// Handy for routing files before paying for key derivation.
///
/// # Example
///
/// ```
/// use jsoncrypt_rs::peek_method;
/// use jsoncrypt_rs::container::MethodTag;
/// use std::io::Cursor;
///
/// assert_eq!(peek_method(Cursor::new(b"pwd..."))?, MethodTag::Password);
/// assert!(peek_method(Cursor::new(b"AES\x03\x00")).is_err());
/// # Ok::<(), jsoncrypt_rs::JsoncryptError>(())
/// ```
pub fn peek_method<R: Read>(mut reader: R) -> Result<MethodTag> {
    let mut tag = [0u8; 3];
    reader.read_exact(&mut tag).map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => {
            JsoncryptError::TruncatedContainer("shorter than the method tag".into())
        }
        _ => JsoncryptError::Io(e),
    })?;
    MethodTag::from_bytes(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ContainerHeader {
        let mut header =
            ContainerHeader::new(Salt32::new([0x11; 32]), Iv16::new([0x22; 16]), 0x0102_0304);
        header.tag = Tag32::new([0x33; 32]);
        header
    }

    #[test]
    fn layout_is_fixed() {
        let bytes = sample().to_bytes();
        assert_eq!(&bytes[..3], b"pwd");
        assert!(bytes[3..35].iter().all(|&b| b == 0x11));
        assert!(bytes[35..51].iter().all(|&b| b == 0x22));
        assert!(bytes[51..83].iter().all(|&b| b == 0x33));
        assert_eq!(hex::encode(&bytes[83..]), "0000000001020304");
    }

    #[test]
    fn parse_back() {
        let parsed = ContainerHeader::from_bytes(&sample().to_bytes()).unwrap();
        assert_eq!(parsed.method, MethodTag::Password);
        assert_eq!(parsed.salt.expose_secret(), &[0x11; 32]);
        assert_eq!(parsed.iv.expose_secret(), &[0x22; 16]);
        assert_eq!(parsed.tag.expose_secret(), &[0x33; 32]);
        assert_eq!(parsed.ciphertext_len, 0x0102_0304);
    }

    #[test]
    fn foreign_method_rejected() {
        let mut bytes = sample().to_bytes();
        bytes[..3].copy_from_slice(b"gif");
        assert!(matches!(
            ContainerHeader::from_bytes(&bytes),
            Err(JsoncryptError::UnsupportedMethod(tag)) if &tag == b"gif"
        ));
    }

    #[test]
    fn associated_data_skips_tag() {
        let header = sample();
        let ad = header.associated_data();
        assert_eq!(&ad[..3], b"pwd");
        assert!(ad[3..51].iter().all(|&b| b == 0x11 || b == 0x22));
        assert!(!ad.contains(&0x33));
        assert_eq!(&ad[51..], &0x0102_0304u64.to_be_bytes());
    }
}

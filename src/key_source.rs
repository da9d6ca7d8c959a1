//! src/key_source.rs
//! Password-or-image key sources, reduced to password-equivalent material.
//!
//! An image key is read in full, checked for a known image signature and
//! base64-encoded. The encoding is injective, so the rest of the pipeline treats
//! both kinds identically once [`KeySource::resolve`] has run.

use crate::aliases::PasswordString;
use crate::error::{JsoncryptError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fmt;
use std::path::{Path, PathBuf};

/// Image formats accepted as key files, identified by their leading bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Gif,
    Png,
    Jpeg,
    Bmp,
    Webp,
}

impl ImageFormat {
    /// Identify the format from the first bytes of a file.
    pub fn detect(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Some(Self::Gif)
        } else if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
            Some(Self::Png)
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(Self::Jpeg)
        } else if bytes.starts_with(b"BM") && bytes.len() >= 14 {
            Some(Self::Bmp)
        } else if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            Some(Self::Webp)
        } else {
            None
        }
    }
}

/// Exactly one secret the caller supplies for an operation.
///
/// An empty password is refused by [`resolve`](Self::resolve) with
/// [`InvalidKeySource`](JsoncryptError::InvalidKeySource): it would derive a
/// key anyone can reproduce, so it is treated the same as no key at all.
pub enum KeySource {
    Password(PasswordString),
    Image(PathBuf),
}

impl fmt::Debug for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Password(_) => f.write_str("KeySource::Password(<redacted>)"),
            Self::Image(path) => f.debug_tuple("KeySource::Image").field(path).finish(),
        }
    }
}

impl KeySource {
    pub fn password(password: impl Into<String>) -> Self {
        Self::Password(PasswordString::new(password.into()))
    }

    pub fn image(path: impl Into<PathBuf>) -> Self {
        Self::Image(path.into())
    }

    /// Build from the two optional inputs a front end typically has.
    ///
    /// Exactly one of them must be present.
    pub fn from_options(password: Option<&str>, image: Option<&Path>) -> Result<Self> {
        match (password, image) {
            (Some(password), None) => Ok(Self::password(password)),
            (None, Some(path)) => Ok(Self::image(path)),
            (None, None) => Err(JsoncryptError::InvalidKeySource(
                "either a password or an image key must be provided".into(),
            )),
            (Some(_), Some(_)) => Err(JsoncryptError::InvalidKeySource(
                "provide a password or an image key, not both".into(),
            )),
        }
    }

    /// Produce the password-equivalent material fed into key derivation.
    pub fn resolve(&self) -> Result<PasswordString> {
        match self {
            Self::Password(password) => {
                if password.expose_secret().is_empty() {
                    return Err(JsoncryptError::InvalidKeySource("empty password".into()));
                }
                Ok(PasswordString::new(password.expose_secret().clone()))
            }
            Self::Image(path) => image_material(path),
        }
    }
}

fn image_material(path: &Path) -> Result<PasswordString> {
    let bytes = zeroize::Zeroizing::new(std::fs::read(path)?);
    let format = ImageFormat::detect(&bytes).ok_or(JsoncryptError::InvalidImageFormat)?;
    tracing::debug!(path = %path.display(), ?format, size = bytes.len(), "image key loaded");
    Ok(PasswordString::new(STANDARD.encode(bytes.as_slice())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_known_signatures() {
        let cases: &[(&[u8], Option<ImageFormat>)] = &[
            (b"GIF87a....", Some(ImageFormat::Gif)),
            (b"GIF89a....", Some(ImageFormat::Gif)),
            (b"\x89PNG\r\n\x1a\n\0\0", Some(ImageFormat::Png)),
            (&[0xFF, 0xD8, 0xFF, 0xE0], Some(ImageFormat::Jpeg)),
            (b"BM\0\0\0\0\0\0\0\0\0\0\0\0", Some(ImageFormat::Bmp)),
            (b"RIFF\0\0\0\0WEBPVP8 ", Some(ImageFormat::Webp)),
            (b"GIF88a", None),
            (b"BM", None),
            (b"RIFF\0\0\0\0WAVE", None),
            (b"", None),
            (b"{\"a\":1}", None),
        ];
        for (bytes, expected) in cases {
            assert_eq!(ImageFormat::detect(bytes), *expected, "{bytes:?}");
        }
    }

    #[test]
    fn exactly_one_source_required() {
        assert!(matches!(
            KeySource::from_options(None, None),
            Err(JsoncryptError::InvalidKeySource(_))
        ));
        assert!(matches!(
            KeySource::from_options(Some("pw"), Some(Path::new("key.gif"))),
            Err(JsoncryptError::InvalidKeySource(_))
        ));
        assert!(matches!(
            KeySource::from_options(Some("pw"), None),
            Ok(KeySource::Password(_))
        ));
        assert!(matches!(
            KeySource::from_options(None, Some(Path::new("key.gif"))),
            Ok(KeySource::Image(_))
        ));
    }

    #[test]
    fn empty_password_rejected() {
        assert!(matches!(
            KeySource::password("").resolve(),
            Err(JsoncryptError::InvalidKeySource(_))
        ));
    }

    #[test]
    fn debug_redacts_password() {
        let rendered = format!("{:?}", KeySource::password("hunter2"));
        assert!(!rendered.contains("hunter2"));
    }
}

//! src/container/write.rs
//! Atomic container publishing.
//!
//! The container is assembled in a scratch file next to the destination
//! (same directory, so the final rename never crosses filesystems). The header
//! slot is reserved up front, ciphertext streams in behind it, the real header
//! is written once the tag is known, and only then is the scratch file renamed
//! over the destination. An unfinished [`ContainerWriter`] deletes its scratch
//! file when dropped, on success and error paths alike.

use crate::consts::HEADER_LEN;
use crate::container::header::ContainerHeader;
use crate::error::{JsoncryptError, Result};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub struct ContainerWriter {
    scratch: NamedTempFile,
    destination: PathBuf,
    written: u64,
}

impl ContainerWriter {
    /// Open a scratch file beside `destination` and reserve the header slot.
    pub fn create(destination: impl AsRef<Path>) -> Result<Self> {
        let destination = destination.as_ref().to_path_buf();
        let dir = match destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut scratch = tempfile::Builder::new()
            .prefix(".jsoncrypt-")
            .suffix(".tmp")
            .tempfile_in(&dir)?;
        scratch.write_all(&[0u8; HEADER_LEN])?;

        tracing::debug!(scratch = %scratch.path().display(), "container scratch file created");
        Ok(Self {
            scratch,
            destination,
            written: 0,
        })
    }

    /// Write the final header in place, sync, and rename over the destination.
    pub fn finish(mut self, header: &ContainerHeader) -> Result<()> {
        if header.ciphertext_len != self.written {
            return Err(JsoncryptError::Crypto(format!(
                "header declares {} ciphertext bytes but {} were written",
                header.ciphertext_len, self.written
            )));
        }

        self.scratch.flush()?;
        self.scratch.seek(SeekFrom::Start(0))?;
        self.scratch.write_all(&header.to_bytes())?;
        self.scratch.flush()?;
        self.scratch.as_file().sync_all()?;

        self.scratch
            .persist(&self.destination)
            .map_err(|e| JsoncryptError::Io(e.error))?;

        tracing::debug!(
            destination = %self.destination.display(),
            ciphertext_len = header.ciphertext_len,
            "container published"
        );
        Ok(())
    }
}

impl Write for ContainerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.scratch.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.scratch.flush()
    }
}

/// Serialize `header` + `ciphertext` to `path` atomically.
///
/// `ciphertext` must yield exactly `header.ciphertext_len` bytes.
pub fn write<R: Read>(
    path: impl AsRef<Path>,
    header: &ContainerHeader,
    mut ciphertext: R,
) -> Result<()> {
    let mut writer = ContainerWriter::create(path)?;
    io::copy(&mut ciphertext, &mut writer)?;
    writer.finish(header)
}

//! src/container/read.rs
//! Container parsing: header validation and a ciphertext reader bounded to the
//! declared length (trailing bytes are ignored).

use crate::consts::HEADER_LEN;
use crate::container::header::ContainerHeader;
use crate::error::{JsoncryptError, Result};
use std::fs::File;
use std::io::{BufReader, Read, Take};
use std::path::Path;

/// Read exactly `N` bytes into a stack-allocated `[u8; N]`.
///
/// EOF means the container is cut short.
#[inline(always)]
pub fn read_exact_span<R, const N: usize>(reader: &mut R) -> Result<[u8; N]>
where
    R: Read,
{
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf).map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => {
            JsoncryptError::TruncatedContainer(format!("expected {N} more bytes"))
        }
        _ => JsoncryptError::Io(e),
    })?;
    Ok(buf)
}

/// Parse the header from any reader and bound the rest to the ciphertext.
///
/// `available` is the total byte count of the source when known (file size);
/// it lets a length field pointing past the end be rejected before any key
/// derivation happens.
pub fn read_from<R: Read>(
    mut reader: R,
    available: Option<u64>,
) -> Result<(ContainerHeader, Take<R>)> {
    if let Some(len) = available {
        if len < HEADER_LEN as u64 {
            return Err(JsoncryptError::TruncatedContainer(format!(
                "{len} bytes is shorter than the {HEADER_LEN}-byte header"
            )));
        }
    }

    let raw: [u8; HEADER_LEN] = read_exact_span(&mut reader)?;
    let header = ContainerHeader::from_bytes(&raw)?;

    if let Some(len) = available {
        let body = len - HEADER_LEN as u64;
        if body < header.ciphertext_len {
            return Err(JsoncryptError::TruncatedContainer(format!(
                "header declares {} ciphertext bytes, only {body} present",
                header.ciphertext_len
            )));
        }
    }

    let ciphertext = reader.take(header.ciphertext_len);
    Ok((header, ciphertext))
}

/// Open a container file.
pub fn open(path: impl AsRef<Path>) -> Result<(ContainerHeader, Take<BufReader<File>>)> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let len = file.metadata()?.len();
    let (header, ciphertext) = read_from(BufReader::new(file), Some(len))?;
    tracing::debug!(
        path = %path.display(),
        ciphertext_len = header.ciphertext_len,
        "container opened"
    );
    Ok((header, ciphertext))
}

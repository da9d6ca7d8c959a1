//! src/integrity.rs
//! Running HMAC-SHA256 over the ciphertext stream, plus header binding.
//!
//! The tag covers, in order: every ciphertext byte as it is produced or
//! consumed, then the 59 header bytes `method ‖ salt ‖ iv ‖ length_be`.
//! The header is appended last because the ciphertext length is only known
//! once the stream is done.

use crate::aliases::{HmacKey32, HmacSha256, Tag32};
use crate::consts::{ASSOCIATED_DATA_LEN, TAG_LEN};
use crate::error::{JsoncryptError, Result};
use hmac::Mac;
use std::io::{self, Read, Write};

pub struct IntegrityEngine {
    mac: HmacSha256,
}

impl IntegrityEngine {
    pub fn new(key: &HmacKey32) -> Result<Self> {
        let mac = <HmacSha256 as Mac>::new_from_slice(key.expose_secret())
            .map_err(|e| JsoncryptError::Crypto(format!("HMAC key setup failed: {e}")))?;
        Ok(Self { mac })
    }

    #[inline]
    pub fn update(&mut self, ciphertext: &[u8]) {
        self.mac.update(ciphertext);
    }

    /// Bind the header and produce the tag to store.
    pub fn finalize(mut self, associated_data: &[u8; ASSOCIATED_DATA_LEN]) -> Tag32 {
        self.mac.update(associated_data);
        let mut tag = [0u8; TAG_LEN];
        tag.copy_from_slice(&self.mac.finalize().into_bytes());
        Tag32::new(tag)
    }

    /// Bind the header and compare against the stored tag in constant time.
    pub fn verify(
        mut self,
        associated_data: &[u8; ASSOCIATED_DATA_LEN],
        expected: &Tag32,
    ) -> Result<()> {
        self.mac.update(associated_data);
        self.mac
            .verify_slice(expected.expose_secret())
            .map_err(|_| JsoncryptError::Authentication)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Io adapters — tee ciphertext through the MAC on its way to/from the file
// ─────────────────────────────────────────────────────────────────────────────

/// Writer that feeds exactly the bytes accepted by `inner` into the MAC.
pub struct IntegrityWriter<W: Write> {
    inner: W,
    engine: IntegrityEngine,
}

impl<W: Write> IntegrityWriter<W> {
    pub fn new(inner: W, engine: IntegrityEngine) -> Self {
        Self { inner, engine }
    }

    pub fn into_parts(self) -> (W, IntegrityEngine) {
        (self.inner, self.engine)
    }
}

impl<W: Write> Write for IntegrityWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.engine.update(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Reader that feeds every byte handed out into the MAC.
pub struct IntegrityReader<R: Read> {
    inner: R,
    engine: IntegrityEngine,
}

impl<R: Read> IntegrityReader<R> {
    pub fn new(inner: R, engine: IntegrityEngine) -> Self {
        Self { inner, engine }
    }

    pub fn into_engine(self) -> IntegrityEngine {
        self.engine
    }
}

impl<R: Read> Read for IntegrityReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.engine.update(&buf[..n]);
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn engine() -> IntegrityEngine {
        IntegrityEngine::new(&HmacKey32::new([0x42; 32])).unwrap()
    }

    #[test]
    fn writer_and_reader_agree() {
        let ad = [9u8; ASSOCIATED_DATA_LEN];
        let data = vec![0xabu8; 4096];

        let mut writer = IntegrityWriter::new(Vec::new(), engine());
        writer.write_all(&data[..1000]).unwrap();
        writer.write_all(&data[1000..]).unwrap();
        let (written, write_engine) = writer.into_parts();
        assert_eq!(written, data);
        let tag = write_engine.finalize(&ad);

        let mut reader = IntegrityReader::new(Cursor::new(written), engine());
        let mut sink = Vec::new();
        reader.read_to_end(&mut sink).unwrap();
        reader.into_engine().verify(&ad, &tag).unwrap();
    }

    #[test]
    fn header_is_bound() {
        let mut ad = [1u8; ASSOCIATED_DATA_LEN];
        let mut e = engine();
        e.update(b"ciphertext");
        let tag = e.finalize(&ad);

        ad[40] ^= 0x01;
        let mut e = engine();
        e.update(b"ciphertext");
        assert!(matches!(
            e.verify(&ad, &tag),
            Err(JsoncryptError::Authentication)
        ));
    }

    #[test]
    fn wrong_key_rejected() {
        let ad = [0u8; ASSOCIATED_DATA_LEN];
        let mut e = engine();
        e.update(b"abc");
        let tag = e.finalize(&ad);

        let mut other = IntegrityEngine::new(&HmacKey32::new([0x43; 32])).unwrap();
        other.update(b"abc");
        assert!(matches!(
            other.verify(&ad, &tag),
            Err(JsoncryptError::Authentication)
        ));
    }
}

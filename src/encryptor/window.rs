//! src/encryptor/window.rs
//! Windowed AES-256-CBC encryption behind `std::io::Write`.
//!
//! Plaintext is gathered into a buffer of at most `window_size` bytes. Each time
//! the buffer fills, the whole window is encrypted in place and written out.
//! [`EncryptWriter::finish`] pads whatever is left (always 1..=16 bytes, PKCS#7
//! style) and emits the final blocks.

use crate::aliases::{Aes256Key32, Block16, Iv16};
use crate::consts::BLOCK_SIZE;
use crate::utils::xor_in_place;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes256Enc, Block as AesBlock};
use std::io::{self, Write};
use zeroize::Zeroizing;

pub struct EncryptWriter<W: Write> {
    inner: W,
    cipher: Aes256Enc,
    prev_block: Block16,
    buffer: Zeroizing<Vec<u8>>,
    window_size: usize,
    ciphertext_len: u64,
}

impl<W: Write> EncryptWriter<W> {
    /// `window_size` must be a positive multiple of 16; see [`Config::validate`](crate::Config::validate).
    pub fn new(inner: W, key: &Aes256Key32, iv: &Iv16, window_size: usize) -> Self {
        debug_assert!(window_size > 0 && window_size % BLOCK_SIZE == 0);
        Self {
            inner,
            cipher: Aes256Enc::new(key.expose_secret().into()),
            prev_block: Block16::new(*iv.expose_secret()),
            buffer: Zeroizing::new(Vec::with_capacity(window_size)),
            window_size,
            ciphertext_len: 0,
        }
    }

    /// CBC-encrypt a block-aligned buffer in place, carrying the chaining value.
    fn encrypt_blocks(&mut self, data: &mut [u8]) {
        for block in data.chunks_exact_mut(BLOCK_SIZE) {
            xor_in_place(block, self.prev_block.expose_secret());
            self.cipher.encrypt_block(AesBlock::from_mut_slice(block));
            self.prev_block.expose_secret_mut().copy_from_slice(block);
        }
    }

    fn flush_window(&mut self) -> io::Result<()> {
        let mut window = std::mem::take(&mut *self.buffer);
        self.encrypt_blocks(&mut window);
        let result = self.inner.write_all(&window);
        self.ciphertext_len += window.len() as u64;
        tracing::trace!(bytes = window.len(), "encrypted window");
        // Ciphertext only from here on; reuse the allocation.
        window.clear();
        *self.buffer = window;
        result
    }

    /// Pad, encrypt the tail, and hand back the inner writer with the total
    /// ciphertext length (always a positive multiple of 16).
    pub fn finish(mut self) -> io::Result<(W, u64)> {
        let pad = (BLOCK_SIZE - self.buffer.len() % BLOCK_SIZE) as u8;
        self.buffer
            .extend(std::iter::repeat(pad).take(usize::from(pad)));
        self.flush_window()?;
        self.inner.flush()?;
        Ok((self.inner, self.ciphertext_len))
    }
}

impl<W: Write> Write for EncryptWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut rest = buf;
        while !rest.is_empty() {
            let take = (self.window_size - self.buffer.len()).min(rest.len());
            self.buffer.extend_from_slice(&rest[..take]);
            rest = &rest[take..];
            if self.buffer.len() == self.window_size {
                self.flush_window()?;
            }
        }
        Ok(buf.len())
    }

    /// Only full windows are ever emitted; buffered plaintext stays put until
    /// the window fills or [`finish`](Self::finish) runs.
    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

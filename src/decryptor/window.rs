//! src/decryptor/window.rs
//! Windowed AES-256-CBC decryption into an internal plaintext buffer.
//!
//! Plaintext never leaves this type until [`WindowDecryptor::finish`], which the
//! caller only reaches after the integrity tag has been verified.

use crate::aliases::{Aes256Key32, Block16, Iv16};
use crate::consts::BLOCK_SIZE;
use crate::error::{JsoncryptError, Result};
use crate::utils::xor_in_place;
use aes::cipher::{BlockDecrypt, KeyInit};
use aes::{Aes256Dec, Block as AesBlock};
use zeroize::Zeroizing;

pub struct WindowDecryptor {
    cipher: Aes256Dec,
    prev_block: Block16,
    plaintext: Zeroizing<Vec<u8>>,
    /// Set once a window with a trailing partial block has been seen.
    misaligned: bool,
}

impl WindowDecryptor {
    pub fn new(key: &Aes256Key32, iv: &Iv16) -> Self {
        Self {
            cipher: Aes256Dec::new(key.expose_secret().into()),
            prev_block: Block16::new(*iv.expose_secret()),
            plaintext: Zeroizing::new(Vec::new()),
            misaligned: false,
        }
    }

    /// Size hint so a known ciphertext length allocates once.
    pub fn with_capacity(key: &Aes256Key32, iv: &Iv16, capacity: usize) -> Self {
        let mut this = Self::new(key, iv);
        this.plaintext.reserve_exact(capacity);
        this
    }

    /// Decrypt one window of ciphertext.
    ///
    /// Every window but the last must be block-aligned. A partial trailing
    /// block is dropped and remembered; [`finish`](Self::finish) then reports
    /// it as a padding failure.
    pub fn update(&mut self, ciphertext: &[u8]) {
        if self.misaligned {
            return;
        }
        let start = self.plaintext.len();
        let aligned = ciphertext.len() - ciphertext.len() % BLOCK_SIZE;
        self.misaligned = aligned != ciphertext.len();
        self.plaintext.extend_from_slice(&ciphertext[..aligned]);

        let mut chain = [0u8; BLOCK_SIZE];
        for block in self.plaintext[start..].chunks_exact_mut(BLOCK_SIZE) {
            chain.copy_from_slice(block);
            self.cipher.decrypt_block(AesBlock::from_mut_slice(block));
            xor_in_place(block, self.prev_block.expose_secret());
            self.prev_block.expose_secret_mut().copy_from_slice(&chain);
        }
        tracing::trace!(bytes = aligned, "decrypted window");
    }

    /// Validate and strip the padding, releasing the plaintext.
    ///
    /// Only call after the integrity tag has been verified.
    pub fn finish(mut self) -> Result<Zeroizing<Vec<u8>>> {
        if self.misaligned {
            return Err(JsoncryptError::Padding);
        }
        let unpadded_len = padded_len_without_padding(&self.plaintext)?;
        self.plaintext.truncate(unpadded_len);
        Ok(self.plaintext)
    }
}

/// Read `k` from the final byte, require `1 ≤ k ≤ 16` and `k` trailing copies of `k`.
fn padded_len_without_padding(plaintext: &[u8]) -> Result<usize> {
    let &k = plaintext.last().ok_or(JsoncryptError::Padding)?;
    let k = usize::from(k);
    if k == 0 || k > BLOCK_SIZE || k > plaintext.len() {
        return Err(JsoncryptError::Padding);
    }
    let tail = &plaintext[plaintext.len() - k..];
    // The tag has already been checked; the bytes here are not secret-dependent.
    if tail.iter().any(|&b| usize::from(b) != k) {
        return Err(JsoncryptError::Padding);
    }
    Ok(plaintext.len() - k)
}

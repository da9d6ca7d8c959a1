// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Utility functions used across the library.

use crate::consts::BLOCK_SIZE;
use std::io::{ErrorKind, Read};

/// XORs `mask` into `block` in place.
///
/// Used by both CBC directions: plaintext ⊕ previous ciphertext before
/// encryption, decrypted block ⊕ previous ciphertext after decryption.
///
/// # Panics (by contract)
///
/// Panics if either slice is shorter than 16 bytes. Callers only pass
/// `chunks_exact(16)` items and `[u8; 16]` chaining values.
#[inline(always)]
pub fn xor_in_place(block: &mut [u8], mask: &[u8]) {
    for (b, m) in block[..BLOCK_SIZE].iter_mut().zip(&mask[..BLOCK_SIZE]) {
        *b ^= m;
    }
}

/// Reads until `buf` is full or the reader is exhausted.
///
/// Returns the number of bytes placed in `buf`; anything short of `buf.len()`
/// means EOF was reached.
pub fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

//! # Secure-Gate Type Aliases
//!
//! Type aliases for secure memory management using [`secure-gate`](https://github.com/Slurp9187/secure-gate).
//! Every fixed-size type here zeroizes on drop and requires an explicit
//! `.expose_secret()` / `.expose_secret_mut()` to reach the bytes.
//!
//! Salt, IV and tag are public values once written to a container, but they are
//! wrapped anyway so that every buffer the pipeline touches is treated the same.

use hmac::Hmac;
use sha2::Sha256;

// ─────────────────────────────────────────────────────────────────────────────
// HMAC primitive
// ─────────────────────────────────────────────────────────────────────────────
pub type HmacSha256 = Hmac<Sha256>;

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer — generic secure stack buffer (direct alias to secure-gate's Fixed)
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

// Fixed-size secrets — alphabetical order
pub type Aes256Key32 = SpanBuffer<32>; // cipher subkey
pub type Block16 = SpanBuffer<16>; // one AES block
pub type HmacKey32 = SpanBuffer<32>; // integrity subkey
pub type Iv16 = SpanBuffer<16>; // CBC IV
pub type MasterKey32 = SpanBuffer<32>; // PBKDF2 output, only feeds HKDF
pub type Salt32 = SpanBuffer<32>; // PBKDF2 salt
pub type Tag32 = SpanBuffer<32>; // HMAC-SHA256 tag

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
pub type PasswordString = secure_gate::Dynamic<String>;

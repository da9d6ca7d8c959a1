//! # Key Derivation
//!
//! Turns password-equivalent material into the keys one operation uses.
//!
//! ## Modules
//!
//! - [`pbkdf2`] - PBKDF2-HMAC-SHA256 stretching of the material + salt (slow on purpose)
//! - [`subkeys`] - HKDF-SHA256 split of the stretched key into cipher and integrity keys
//!
//! Most callers never touch these directly: [`encrypt`](crate::encrypt) and
//! [`decrypt`](crate::decrypt) derive keys internally. [`KdfBuilder`](crate::KdfBuilder)
//! wraps both steps for custom flows.

pub mod pbkdf2;
pub mod subkeys;

use crate::aliases::{MasterKey32, PasswordString, Salt32};
use crate::error::Result;
use subkeys::{split_master_key, DerivedKeys};

/// Full derivation: PBKDF2 then HKDF split. The master key never leaves this function.
pub fn derive_keys(
    password: &PasswordString,
    salt: &Salt32,
    iterations: u32,
) -> Result<DerivedKeys> {
    tracing::debug!(iterations, "deriving container keys");
    let mut master = MasterKey32::new([0u8; 32]);
    pbkdf2::derive_secure_pbkdf2_key(password, salt, iterations, &mut master)?;
    split_master_key(&master)
}

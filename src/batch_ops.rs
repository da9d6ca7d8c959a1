//! src/batch_ops.rs
//! Parallel encrypt/decrypt of many independent containers (`batch-ops` feature).
//!
//! Each job derives its own keys from its own salt, so jobs share nothing but
//! the read-only key source and config.

use rayon::prelude::*;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::json::JsonObject;
use crate::key_source::KeySource;
use crate::{decrypt_with_config, encrypt_with_config};

/// Encrypt every `(mapping, destination)` pair. Stops at the first failure;
/// containers already published by other jobs stay in place.
pub fn encrypt_batch(
    jobs: &[(JsonObject, PathBuf)],
    key_source: &KeySource,
    config: &Config,
) -> Result<()> {
    jobs.par_iter()
        .try_for_each(|(mapping, dst)| encrypt_with_config(mapping, dst, key_source, config))
}

/// Decrypt every container, returning mappings in input order.
pub fn decrypt_batch(
    sources: &[PathBuf],
    key_source: &KeySource,
    config: &Config,
) -> Result<Vec<JsonObject>> {
    sources
        .par_iter()
        .map(|src| decrypt_with_config(src, key_source, config))
        .collect()
}

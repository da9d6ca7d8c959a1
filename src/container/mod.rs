// src/container/mod.rs

//! Container codec: the fixed binary envelope around the ciphertext.
//!
//! Core API: [`write`] / [`open`] for whole containers.
//! Helpers: [`ContainerWriter`] for streaming encryption, [`read_from`] for
//! arbitrary readers, [`peek_method`] for a quick format check.

pub(crate) mod header;
pub(crate) mod read;
pub(crate) mod write;

pub use header::{peek_method, ContainerHeader, MethodTag};
pub use read::{open, read_exact_span, read_from};
pub use write::{write, ContainerWriter};

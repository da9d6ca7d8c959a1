// src/json/mod.rs

//! Streaming JSON assembler: the document model plus the serialize/parse
//! halves that sit on either side of the cipher.

pub(crate) mod stream;
pub(crate) mod value;

pub use stream::{nesting_depth, parse_object, write_object};
pub use value::{JsonObject, JsonValue};

//! src/json/stream.rs
//! Fragment-by-fragment serialization into a writer, and parsing of verified
//! plaintext.

use crate::consts::MAX_NESTING_DEPTH;
use crate::error::{JsoncryptError, Result};
use crate::json::value::{JsonObject, JsonValue};
use serde::Deserialize;
use std::io::Write;

/// Emit `{`, then `"key":value` per entry separated by `,`, then `}`.
///
/// Each fragment goes straight to `out` (normally the cipher writer), so the
/// document is never held as one serialized buffer. The byte stream is exactly
/// what `serde_json::to_writer(&object)` would produce.
///
/// Documents nested deeper than [`MAX_NESTING_DEPTH`] are refused before the
/// first byte is written, so every container that gets published can be parsed.
pub fn write_object<W: Write>(object: &JsonObject, mut out: W) -> Result<()> {
    if nesting_depth(object) > MAX_NESTING_DEPTH {
        return Err(JsoncryptError::NestingTooDeep(MAX_NESTING_DEPTH));
    }
    out.write_all(b"{")?;
    for (i, (key, value)) in object.iter().enumerate() {
        if i > 0 {
            out.write_all(b",")?;
        }
        serde_json::to_writer(&mut out, key)?;
        out.write_all(b":")?;
        serde_json::to_writer(&mut out, value)?;
    }
    out.write_all(b"}")?;
    Ok(())
}

/// Array/object nesting of `object`, counting the object itself as 1.
///
/// Walks with an explicit stack so arbitrarily deep input cannot overflow.
pub fn nesting_depth(object: &JsonObject) -> usize {
    let mut deepest = 1;
    let mut pending: Vec<(&JsonValue, usize)> = object.values().map(|v| (v, 2)).collect();
    while let Some((value, depth)) = pending.pop() {
        match value {
            JsonValue::Array(items) => {
                deepest = deepest.max(depth);
                pending.extend(items.iter().map(|v| (v, depth + 1)));
            }
            JsonValue::Object(inner) => {
                deepest = deepest.max(depth);
                pending.extend(inner.values().map(|v| (v, depth + 1)));
            }
            _ => {}
        }
    }
    deepest
}

/// Parse authenticated plaintext back into an object.
///
/// serde_json's default 128-level recursion limit is lifted; `serde_stacker`
/// grows the stack on demand instead, so anything [`write_object`] accepted
/// parses back.
pub fn parse_object(plaintext: &[u8]) -> Result<JsonObject> {
    let malformed = |e: serde_json::Error| JsoncryptError::MalformedPlaintext(e.to_string());

    let mut de = serde_json::Deserializer::from_slice(plaintext);
    de.disable_recursion_limit();
    let object = JsonObject::deserialize(serde_stacker::Deserializer::new(&mut de))
        .map_err(malformed)?;
    de.end().map_err(malformed)?;
    Ok(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::value::JsonValue;

    fn sample() -> JsonObject {
        let mut nested = JsonObject::new();
        nested.insert("k\"ey", "v\nal");
        let mut object = JsonObject::new();
        object.insert("b", vec![1, 2, 3]);
        object.insert("a", 1);
        object.insert("nested", nested);
        object.insert("none", JsonValue::Null);
        object.insert("pi", 3.25);
        object
    }

    #[test]
    fn matches_serde_json_bytes() {
        let object = sample();
        let mut streamed = Vec::new();
        write_object(&object, &mut streamed).unwrap();
        assert_eq!(streamed, serde_json::to_vec(&object).unwrap());
        assert_eq!(
            String::from_utf8(streamed).unwrap(),
            r#"{"b":[1,2,3],"a":1,"nested":{"k\"ey":"v\nal"},"none":null,"pi":3.25}"#
        );
    }

    #[test]
    fn empty_object() {
        let mut streamed = Vec::new();
        write_object(&JsonObject::new(), &mut streamed).unwrap();
        assert_eq!(streamed, b"{}");
        assert!(parse_object(&streamed).unwrap().is_empty());
    }

    /// `{"deep":[[...[null]...]]}` with `depth` levels in total.
    fn nested(depth: usize) -> JsonObject {
        let mut value = JsonValue::Null;
        for _ in 1..depth {
            value = JsonValue::Array(vec![value]);
        }
        let mut object = JsonObject::new();
        object.insert("deep", value);
        object
    }

    #[test]
    fn depth_is_counted_like_the_parser() {
        assert_eq!(nesting_depth(&JsonObject::new()), 1);
        assert_eq!(nesting_depth(&sample()), 2);
        assert_eq!(nesting_depth(&nested(200)), 200);
    }

    #[test]
    fn deep_documents_roundtrip_past_default_limit() {
        let object = nested(200);
        let mut streamed = Vec::new();
        write_object(&object, &mut streamed).unwrap();
        assert_eq!(parse_object(&streamed).unwrap(), object);

        let object = nested(MAX_NESTING_DEPTH);
        let mut streamed = Vec::new();
        write_object(&object, &mut streamed).unwrap();
        assert_eq!(parse_object(&streamed).unwrap(), object);
    }

    #[test]
    fn too_deep_refused_before_writing() {
        let mut streamed = Vec::new();
        let err = write_object(&nested(MAX_NESTING_DEPTH + 1), &mut streamed).unwrap_err();
        assert!(matches!(err, JsoncryptError::NestingTooDeep(MAX_NESTING_DEPTH)));
        assert!(streamed.is_empty());
    }

    #[test]
    fn trailing_bytes_after_object_rejected() {
        assert!(matches!(
            parse_object(b"{} {}"),
            Err(JsoncryptError::MalformedPlaintext(_))
        ));
    }

    #[test]
    fn parse_rejects_garbage_and_non_objects() {
        let inputs: [&[u8]; 4] = [b"{\"a\":", b"[1]", b"\xff\xfe", b""];
        for input in inputs {
            assert!(matches!(
                parse_object(input),
                Err(JsoncryptError::MalformedPlaintext(_))
            ));
        }
    }
}

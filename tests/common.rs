//! tests/common.rs
//! Common constants and utilities shared across test files

use jsoncrypt_rs::{Config, JsonObject};
use std::path::{Path, PathBuf};

/// Fast iteration count for tests - performance testing is in benches/
/// Decrypt must use the same value, so every test goes through `test_config()`.
pub const TEST_ITERATIONS: u32 = 5;

/// Small window so multi-window paths get exercised by tiny documents.
#[allow(dead_code)] // Used across multiple test files
pub const TEST_WINDOW: usize = 64;

#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSWORD: &str = "correct-horse";

#[allow(dead_code)] // Used across multiple test files
pub const WRONG_PASSWORD: &str = "wrong";

#[allow(dead_code)] // Used across multiple test files
pub fn test_config() -> Config {
    Config::default()
        .with_kdf_iterations(TEST_ITERATIONS)
        .with_window_size(TEST_WINDOW)
}

/// `{"a": 1, "b": [1, 2, 3]}`
#[allow(dead_code)] // Used across multiple test files
pub fn sample_mapping() -> JsonObject {
    serde_json::from_str(r#"{"a": 1, "b": [1, 2, 3]}"#).unwrap()
}

/// A richer document touching every value kind.
#[allow(dead_code)] // Used across multiple test files
pub fn rich_mapping() -> JsonObject {
    serde_json::from_str(
        r#"{
            "secret": "confidential information",
            "numbers": [1, 2, 3, 4, 5],
            "float": -12.5e-3,
            "big": 18446744073709551615,
            "flag": false,
            "nothing": null,
            "unicode": "パスワード \u0000 \"quoted\" \n",
            "nested": {"z": {"y": []}, "a": {}},
            "": "empty key"
        }"#,
    )
    .unwrap()
}

/// Write a fake-but-valid GIF: real signature, arbitrary body.
#[allow(dead_code)] // Used across multiple test files
pub fn write_gif(dir: &Path, name: &str, body: &[u8]) -> PathBuf {
    let path = dir.join(name);
    let mut bytes = b"GIF89a".to_vec();
    bytes.extend_from_slice(body);
    std::fs::write(&path, bytes).unwrap();
    path
}

/// Route `tracing` output to the test harness; safe to call from every test.
#[allow(dead_code)] // Used across multiple test files
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

//! benches/roundtrip.rs
//! Encrypt / decrypt throughput by document size, KDF cost held low
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use jsoncrypt_rs::{decrypt_with_config, encrypt_with_config, Config, JsonObject, KeySource};
use std::hint::black_box;

fn document(size: usize) -> JsonObject {
    let chunk = "A".repeat(1024);
    let mut doc: JsonObject = (0..size / 1024)
        .map(|i| (format!("k{i}"), chunk.clone()))
        .collect();
    doc.insert("tail", "A".repeat(size % 1024));
    doc
}

fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");
    let key = KeySource::password("benchmark-password");
    // Cipher throughput only; see benches/kdf.rs for derivation cost
    let config = Config::default().with_kdf_iterations(1);
    let dir = tempfile::tempdir().unwrap();

    for &size in &[1024usize, 64 * 1024, 1024 * 1024, 10 * 1024 * 1024] {
        let doc = document(size);
        let path = dir.path().join(format!("{size}.bin"));
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("encrypt", format_size(size)), &doc, |b, doc| {
            b.iter(|| encrypt_with_config(black_box(doc), &path, &key, &config).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("decrypt", format_size(size)), &path, |b, path| {
            b.iter(|| black_box(decrypt_with_config(path, &key, &config).unwrap()));
        });
    }

    group.finish();
}

fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    if bytes >= MB {
        format!("{} MiB", bytes / MB)
    } else {
        format!("{} KiB", bytes / KB)
    }
}

criterion_group!(benches, bench_roundtrip);
criterion_main!(benches);

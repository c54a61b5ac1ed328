#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Build benchmarks: url-builder vs hand assembly with the url crate
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use url_builder::UrlBuilder;

fn bench_build_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_simple");

    let builder = UrlBuilder::new().domain("example.com");
    group.bench_function("url_builder", |b| {
        b.iter(|| black_box(&builder).build().unwrap());
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| url::Url::parse(black_box("http://example.com")).unwrap().to_string());
    });

    group.finish();
}

fn bench_build_full(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_full");

    let builder = UrlBuilder::new()
        .scheme_https()
        .credentials("user", "pass")
        .domain("test.example.com")
        .port(1234)
        .path(["path one", "path2"])
        .query("key1", ["val 1", "val2"])
        .query("key2", ["val3"])
        .anchor("Anchor");

    group.bench_function("url_builder", |b| {
        b.iter(|| black_box(&builder).build().unwrap());
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            let mut url = url::Url::parse(black_box("https://test.example.com:1234")).unwrap();
            url.set_username("user").unwrap();
            url.set_password(Some("pass")).unwrap();
            url.path_segments_mut().unwrap().extend(["path one", "path2"]);
            url.query_pairs_mut()
                .append_pair("key1", "val 1")
                .append_pair("key1", "val2")
                .append_pair("key2", "val3");
            url.set_fragment(Some("Anchor"));
            url.to_string()
        });
    });

    group.finish();
}

fn bench_build_many_segments(c: &mut Criterion) {
    let segments: Vec<String> = (0..64).map(|i| format!("segment {i}")).collect();
    let builder = UrlBuilder::new().domain("example.com").path(segments);

    c.bench_function("build_many_segments", |b| {
        b.iter(|| black_box(&builder).build().unwrap());
    });
}

criterion_group!(
    benches,
    bench_build_simple,
    bench_build_full,
    bench_build_many_segments
);
criterion_main!(benches);

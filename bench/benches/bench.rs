use criterion::{black_box, criterion_group, criterion_main, Criterion};
use uri_path::{
    pct_enc::{self, encoder::Path},
    ParsedUriPath,
};

criterion_group!(
    benches,
    bench_enc,
    bench_dec,
    bench_parse,
    bench_format,
    bench_normalize,
    bench_join,
    bench_resolve,
    bench_relative,
);
criterion_main!(benches);

const ENC_CASE: &str = "te😃a 测1`~!@试#$%st^&+=";
const DEC_CASE: &str = "te%F0%9F%98%83a%20%E6%B5%8B1%60~!@%E8%AF%95%23$%25st%5E&+=";
const PARSE_CASE: &str = "https://user@example.com/search/%E6%B5%8B%E8%AF%95.html?q=a%20b#fragment";
const NORMALIZE_CASE: &str = "http://example.com/a/./b/../b//c/./../../d/file.ext?q#f";
const RESOLVE_CASE: [&str; 3] = ["http://example.com/foo/bar", "../baz", "./qux?q"];
const RELATIVE_CASE: (&str, &str) = ("/dir/hoge/foo/bar/file", "/dir/hoge/baz/qux/file");

fn bench_enc(c: &mut Criterion) {
    c.bench_function("enc", |b| {
        b.iter(|| pct_enc::encode::<Path>(black_box(ENC_CASE)))
    });
}

fn bench_dec(c: &mut Criterion) {
    c.bench_function("dec", |b| b.iter(|| pct_enc::decode(black_box(DEC_CASE))));
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse", |b| {
        b.iter(|| ParsedUriPath::parse(black_box(PARSE_CASE)))
    });
}

fn bench_format(c: &mut Criterion) {
    let parsed = ParsedUriPath::parse(PARSE_CASE).unwrap();
    c.bench_function("format", |b| b.iter(|| black_box(&parsed).format()));
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize", |b| {
        b.iter(|| uri_path::normalize(black_box(NORMALIZE_CASE)))
    });
}

fn bench_join(c: &mut Criterion) {
    c.bench_function("join", |b| {
        b.iter(|| uri_path::join(black_box(RESOLVE_CASE)))
    });
}

fn bench_resolve(c: &mut Criterion) {
    c.bench_function("resolve", |b| {
        b.iter(|| uri_path::resolve(black_box(RESOLVE_CASE)))
    });
}

fn bench_relative(c: &mut Criterion) {
    let (from, to) = RELATIVE_CASE;
    c.bench_function("relative", |b| {
        b.iter(|| uri_path::relative(black_box(from), black_box(to)))
    });
}

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use slug::{SlugOptions, slug, slug_with};

fn bench_ascii(c: &mut Criterion) {
    let input = "The Quick Brown Fox Jumps Over The Lazy Dog ".repeat(8);
    c.bench_function("slug_ascii", |b| b.iter(|| slug(black_box(&input))));
}

fn bench_table_heavy(c: &mut Criterion) {
    let input = "Düsseldorf Санкт-Петербург Θεσσαλονίκη İstanbul København ".repeat(8);
    c.bench_function("slug_table_heavy", |b| b.iter(|| slug(black_box(&input))));
}

fn bench_multichar(c: &mut Criterion) {
    let input = "שׁלום בִירה וּגם תּה ".repeat(16);
    c.bench_function("slug_multichar", |b| b.iter(|| slug(black_box(&input))));
}

fn bench_fallback(c: &mut Criterion) {
    let input = "😀😃😄😁😆😅🤣".repeat(8);
    c.bench_function("slug_fallback", |b| b.iter(|| slug(black_box(&input))));
}

fn bench_remove_pattern(c: &mut Criterion) {
    let input = "one 1 two 2 three 3 four 4 five 5 ".repeat(8);
    let opts = SlugOptions::new()
        .remove_pattern(r"\d")
        .expect("pattern compiles");
    c.bench_function("slug_remove_pattern", |b| {
        b.iter(|| slug_with(black_box(&input), opts.clone()))
    });
}

criterion_group!(
    benches,
    bench_ascii,
    bench_table_heavy,
    bench_multichar,
    bench_fallback,
    bench_remove_pattern
);
criterion_main!(benches);

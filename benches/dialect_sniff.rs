//! Benchmarks for CSV dialect detection.
//!
//! ## Fixture shapes
//!
//! - **RFC quoted**: comma-delimited, double-quoted fields (the common case)
//! - **Ragged**: short rows interspersed, forcing the null-padding path
//! - **Preamble**: comment lines before the real header
//! - **Tab + single quote**: a less common but still unambiguous dialect
//! - **Escaped quotes**: doubled-quote escaping inside quoted fields
//!
//! ## Sizes
//!
//! 16KB, 128KB, and 1MB, to show how detection cost scales with how many
//! sample chunks get read before refinement converges.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use csv_dialect_sniff::dsv::fixtures::{generate_fixture, FixturePattern};
use csv_dialect_sniff::dsv::{detect_dialect, DialectOptions, SliceBufferManager};

const SIZES: [usize; 3] = [16 * 1024, 128 * 1024, 1024 * 1024];

fn bench_pattern(c: &mut Criterion, name: &str, pattern: FixturePattern, null_padding: bool) {
    let mut group = c.benchmark_group(name);

    for size in SIZES {
        let csv = generate_fixture(pattern, size, Some(7));
        let bytes = csv.as_bytes();
        let size_name = format_size(size);

        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(&size_name), bytes, |b, bytes| {
            b.iter(|| {
                let options = DialectOptions::default().with_null_padding(null_padding);
                let buffer = SliceBufferManager::new(black_box(bytes));
                black_box(detect_dialect(buffer, &options).unwrap())
            });
        });
    }

    group.finish();
}

fn bench_rfc_quoted(c: &mut Criterion) {
    bench_pattern(c, "dsv_bench_rfc_quoted", FixturePattern::RfcQuoted, false);
}

fn bench_ragged(c: &mut Criterion) {
    bench_pattern(c, "dsv_bench_ragged", FixturePattern::Ragged, true);
}

fn bench_preamble(c: &mut Criterion) {
    bench_pattern(c, "dsv_bench_preamble", FixturePattern::Preamble, false);
}

fn bench_tab_single_quote(c: &mut Criterion) {
    bench_pattern(c, "dsv_bench_tab_single_quote", FixturePattern::TabSingleQuote, false);
}

fn bench_escaped_quotes(c: &mut Criterion) {
    bench_pattern(c, "dsv_bench_escaped_quotes", FixturePattern::EscapedQuotes, false);
}

fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{}mb", bytes / (1024 * 1024))
    } else {
        format!("{}kb", bytes / 1024)
    }
}

criterion_group!(
    benches,
    bench_rfc_quoted,
    bench_ragged,
    bench_preamble,
    bench_tab_single_quote,
    bench_escaped_quotes,
);

criterion_main!(benches);

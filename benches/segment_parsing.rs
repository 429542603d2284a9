//! Benchmarks for marker segment parsing
//!
//! Measures the structural walk over synthetic JPEG buffers of increasing scan size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use jfifscope_core::{ByteCursor, SegmentParser};

/// SOI, JFIF APP0, `tables` DQT segments, SOS with `scan_len` bytes, EOI.
fn synthetic_jpeg(tables: usize, scan_len: usize) -> Vec<u8> {
    let mut v = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
    v.extend_from_slice(b"JFIF\0");
    v.extend_from_slice(&[0x01, 0x02, 0x01, 0x00, 0x48, 0x00, 0x48, 0x00, 0x00]);

    for i in 0..tables {
        v.extend_from_slice(&[0xFF, 0xDB, 0x00, 0x43, i as u8]);
        v.extend(std::iter::repeat(0x10).take(64));
    }

    v.extend_from_slice(&[0xFF, 0xDA, 0x00, 0x08, 0x01, 0x01, 0x00, 0x00, 0x3F, 0x00]);
    v.extend((0..scan_len).map(|i| (i % 251) as u8));
    v.extend_from_slice(&[0xFF, 0xD9]);
    v
}

fn bench_scan_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse/scan_size");

    for scan_len in [1024usize, 64 * 1024, 4 * 1024 * 1024] {
        let data = bytes::Bytes::from(synthetic_jpeg(2, scan_len));
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(scan_len), &data, |b, data| {
            b.iter(|| {
                let mut parser = SegmentParser::new(ByteCursor::new(data.clone()));
                black_box(parser.parse().unwrap())
            });
        });
    }

    group.finish();
}

fn bench_segment_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse/segment_count");

    for tables in [4usize, 64, 512] {
        let data = bytes::Bytes::from(synthetic_jpeg(tables, 256));
        group.throughput(Throughput::Elements(tables as u64 + 4));
        group.bench_with_input(BenchmarkId::from_parameter(tables), &data, |b, data| {
            b.iter(|| black_box(jfifscope_core::parse(data.clone()).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scan_sizes, bench_segment_counts);
criterion_main!(benches);

//! Batch decode throughput benchmarks.
//!
//! Measures decode throughput at various batch sizes using Criterion.
//!
//! # Running
//! ```bash
//! cargo bench --package recordcodec-batch
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use recordcodec_batch::BatchEngine;
use recordcodec_core::LineSpec;
use recordcodec_layout::LayoutParser;
use std::sync::Arc;

// ─── Layout setup ─────────────────────────────────────────────────────────────

const RESERVATIONS: &str = r#"
name: ReservationsData
length: 73
fields:
  - { name: RESERVATION-NUMBER,   type: String,           start: 0,  size: 11 }
  - { name: CHECKIN-DATE,         type: DateString,       start: 11, size: 6 }
  - { name: CALC-NET-AMOUNT,      type: BinaryNum,        start: 17, size: 4, decimals: 2 }
  - { name: CUSTOMER-NAME,        type: String,           start: 21, size: 30 }
  - { name: RUNDATE,              type: DateStringMMDDYY, start: 51, size: 6 }
  - { name: CURRENCY-CONV-RATE,   type: Packed,           start: 57, size: 6, decimals: 6 }
  - { name: US-DOLLAR-AMOUNT-DUE, type: Packed,           start: 63, size: 6, decimals: 2 }
  - { name: DATE-OF-BIRTH,        type: PackedDate,       start: 69, size: 4 }
"#;

const RECORD_HEX: &str = concat!(
    "F0F4F4F1F6F3F6F5E4E2F2",
    "F1F5F0F1F2F3",
    "0000AADB",
    "D2C1E840D2C5D5C76BD3D6E6",
    "404040404040404040404040404040404040",
    "F0F1F2F8F1F5",
    "00000762728F",
    "00000022026C",
    "0720809C",
);

fn make_layout() -> Arc<LineSpec> {
    Arc::new(LayoutParser::parse(RESERVATIONS).expect("parse reservations layout"))
}

// ─── Buffer factory ───────────────────────────────────────────────────────────

fn make_buffer(n: usize) -> Vec<u8> {
    let record = hex::decode(RECORD_HEX).expect("record hex");
    let mut buffer = Vec::with_capacity(record.len() * n);
    for i in 0..n {
        let mut rec = record.clone();
        // Vary the binary amount so every record differs.
        rec[19..21].copy_from_slice(&((i & 0xFFFF) as u16).to_be_bytes());
        buffer.extend_from_slice(&rec);
    }
    buffer
}

// ─── Benchmarks ───────────────────────────────────────────────────────────────

fn bench_sequential_decode(c: &mut Criterion) {
    let layout = make_layout();
    let engine = BatchEngine::default();

    let mut group = c.benchmark_group("sequential_decode");
    for batch_size in [100, 1_000, 10_000, 100_000] {
        let buffer = make_buffer(batch_size);
        group.throughput(Throughput::Elements(batch_size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            &buffer,
            |b, buffer| {
                b.iter(|| engine.decode_all(buffer, &layout).expect("decode"));
            },
        );
    }
    group.finish();
}

fn bench_parallel_decode(c: &mut Criterion) {
    let layout = make_layout();
    let engine = BatchEngine::default().parallel(true);

    let mut group = c.benchmark_group("parallel_decode_rayon");
    for batch_size in [1_000, 10_000, 100_000, 1_000_000] {
        let buffer = make_buffer(batch_size);
        group.throughput(Throughput::Elements(batch_size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            &buffer,
            |b, buffer| {
                b.iter(|| engine.decode_all(buffer, &layout).expect("decode"));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_sequential_decode, bench_parallel_decode);
criterion_main!(benches);

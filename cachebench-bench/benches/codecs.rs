//! In-process codec benchmarks, no store involved.

use cachebench_codec::all_codecs;
use cachebench_core::generate;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const RECORD_COUNT: usize = 1_000;

fn benchmark_encode(c: &mut Criterion) {
    let records = generate(RECORD_COUNT).unwrap();
    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Elements(RECORD_COUNT as u64));

    for codec in all_codecs() {
        group.bench_with_input(
            BenchmarkId::from_parameter(codec.name()),
            &records,
            |b, records| b.iter(|| codec.encode(black_box(records)).unwrap()),
        );
    }

    group.finish();
}

fn benchmark_decode(c: &mut Criterion) {
    let records = generate(RECORD_COUNT).unwrap();
    let mut group = c.benchmark_group("decode");

    for codec in all_codecs() {
        let payload = codec.encode(&records).unwrap();
        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(codec.name()),
            &payload,
            |b, payload| b.iter(|| codec.decode(black_box(payload)).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_encode, benchmark_decode);
criterion_main!(benches);

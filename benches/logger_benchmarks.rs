//! Criterion benchmarks for logxx

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use logxx::prelude::*;
use logxx::{debug, info};

// ============================================================================
// Write Path Benchmarks
// ============================================================================

fn bench_write_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_path");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::builder()
        .threshold(LogLevel::Info)
        .channel(NullChannel)
        .build();

    group.bench_function("visible", |b| {
        b.iter(|| {
            info!(logger, "request {} served in {}ms", black_box(42), black_box(7));
        });
    });

    group.bench_function("filtered_macro", |b| {
        b.iter(|| {
            debug!(logger, "request {} served in {}ms", black_box(42), black_box(7));
        });
    });

    group.bench_function("filtered_stream", |b| {
        b.iter(|| {
            logger.write(black_box(LogLevel::Trace)).append(black_box("payload"));
        });
    });

    group.bench_function("dump_64_bytes", |b| {
        let bytes = [0xa5u8; 64];
        logger.set_threshold(LogLevel::Debug);
        b.iter(|| logger.dump(black_box(&bytes)));
    });

    group.finish();
}

// ============================================================================
// Registry Benchmarks
// ============================================================================

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");
    group.throughput(Throughput::Elements(1));

    let registry = Registry::with_threshold(LogLevel::Info).with_root_channel(NullChannel);
    registry.get("net");

    group.bench_function("existing_lookup", |b| {
        b.iter(|| black_box(registry.get(black_box("net"))));
    });

    group.bench_function("lookup_and_log", |b| {
        b.iter(|| info!(registry.get("net"), "{}", black_box(1)));
    });

    group.finish();
}

criterion_group!(benches, bench_write_path, bench_registry);
criterion_main!(benches);

// In benches/encode_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bwtpack::kernels::{elias, frequency::FrequencyTable, prefix_code::CodeTable};
use bwtpack::{Encoder, SymbolIndexer};

// --- Mock data generation ---

/// BWT output tends to be long runs of few symbols.
fn generate_run_heavy_text(size: usize) -> String {
    let pattern = "aaaaaaabbbbbbbbbbccc$ddddddddddddeeeeeee";
    pattern.chars().cycle().take(size).collect()
}

/// Short runs over a wide alphabet.
fn generate_varied_text(size: usize) -> String {
    let pattern: String = ('%'..='~').collect();
    pattern.chars().cycle().take(size).collect()
}

// --- Benchmark Suite ---

const BENCH_DATA_SIZE: usize = 65536; // 64K symbols

fn bench_encoder(c: &mut Criterion) {
    let run_heavy = generate_run_heavy_text(BENCH_DATA_SIZE);
    let varied = generate_varied_text(BENCH_DATA_SIZE);
    let encoder = Encoder::default();

    let mut group = c.benchmark_group("Encoder Pipeline");
    group.throughput(criterion::Throughput::Elements(BENCH_DATA_SIZE as u64));

    group.bench_function("Encode (Run Heavy)", |b| {
        b.iter(|| black_box(encoder.encode(black_box(&run_heavy))))
    });
    group.bench_function("Encode (Varied)", |b| {
        b.iter(|| black_box(encoder.encode(black_box(&varied))))
    });

    // Code construction alone, on the widest alphabet.
    let symbols = encoder.alphabet().index_text(&varied).unwrap();
    let frequencies = FrequencyTable::build(&symbols, encoder.alphabet().range_size()).unwrap();
    group.bench_function("Build Prefix Code (Varied)", |b| {
        b.iter(|| black_box(CodeTable::build(black_box(&frequencies))))
    });

    group.bench_function("Elias Omega Encode 1..4096", |b| {
        b.iter(|| {
            for n in 1..4096u64 {
                black_box(elias::encode_one(black_box(n)).unwrap());
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_encoder);
criterion_main!(benches);

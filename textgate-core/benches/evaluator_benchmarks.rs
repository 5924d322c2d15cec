//! Benchmarks for sectioned evaluation

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::io::Cursor;
use textgate_core::{EvaluatorConfig, SectionedEvaluator, TextReader};

/// Generate prose of roughly the given size in megabytes
fn generate_test_text(size_mb: usize) -> String {
    let base_text =
        "This is a test sentence. It contains multiple words and ends with a period.\n\n";
    let repetitions = size_mb * 1024 * 1024 / base_text.len();

    base_text.repeat(repetitions)
}

fn benchmark_reader(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_reader");
    let text = generate_test_text(4);
    group.throughput(Throughput::Bytes(text.len() as u64));

    for max in [1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(max), &max, |b, &max| {
            b.iter(|| {
                let mut reader = TextReader::new(Cursor::new(black_box(text.as_bytes())), max);
                let mut chunks = 0;
                while let Some(_chunk) = reader.read_text().unwrap() {
                    chunks += 1;
                }
                chunks
            });
        });
    }

    group.finish();
}

fn benchmark_early_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let mut text = String::from("The needle sits in the first paragraph.\n\n");
    text.push_str(&generate_test_text(16));

    let evaluator = SectionedEvaluator::with_config(EvaluatorConfig::default()).unwrap();

    group.bench_function("early_match_16MB", |b| {
        b.iter(|| {
            evaluator
                .evaluate(black_box(text.as_bytes()), |section, _| {
                    Ok(section.contains("needle"))
                })
                .unwrap()
        });
    });

    group.sample_size(10);
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("full_scan_16MB", |b| {
        b.iter(|| {
            evaluator
                .evaluate(black_box(text.as_bytes()), |section, _| {
                    Ok(section.contains("haystack"))
                })
                .unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_reader, benchmark_early_match);
criterion_main!(benches);

//! Benchmarks for wordrank

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wordrank::*;

/// Sample text for benchmarking
const SAMPLE_TEXT: &str = r#"
Once upon a time there lived a merchant with three daughters. The youngest daughter,
Beauty, loved books and roses, while her proud sisters loved balls and fine dresses.
When the merchant lost his fortune, the family moved to a small cottage in the forest.
On a long journey the merchant found a silent castle, and in the castle garden he picked
a red rose for Beauty. A terrible Beast appeared and demanded the merchant's life for
the rose. Beauty went to the castle in her father's place. Every evening the Beast asked
Beauty to marry him, and every evening Beauty refused the Beast. In the enchanted castle
Beauty found a magic mirror, and in the mirror she saw her father, sick with grief.
"#;

fn filtered_words(text: &str) -> Vec<String> {
    let tokens = Tokenizer::new().tokenize(text);
    TokenFilter::default().filter(&tokens)
}

fn benchmark_tokenization(c: &mut Criterion) {
    let tokenizer = Tokenizer::new();

    c.bench_function("tokenize_sample", |b| {
        b.iter(|| tokenizer.tokenize(black_box(SAMPLE_TEXT)))
    });

    // Benchmark different document sizes
    let mut group = c.benchmark_group("tokenize_by_size");
    for size in [1, 5, 10, 20].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| tokenizer.tokenize(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_graph_building(c: &mut Criterion) {
    let words = filtered_words(SAMPLE_TEXT);
    let builder = CooccurrenceGraphBuilder::new(2);

    c.bench_function("graph_build", |b| {
        b.iter(|| builder.build_sequential(black_box(&words)))
    });

    // Benchmark parallel vs sequential
    let large_words = filtered_words(&SAMPLE_TEXT.repeat(200));

    let mut group = c.benchmark_group("graph_build_parallel");
    group.bench_function("sequential", |b| {
        b.iter(|| builder.build_sequential(black_box(&large_words)))
    });
    group.bench_function("parallel", |b| {
        b.iter(|| builder.build_parallel(black_box(&large_words)))
    });
    group.finish();
}

fn benchmark_pagerank(c: &mut Criterion) {
    let words = filtered_words(SAMPLE_TEXT);
    let graph = CooccurrenceGraphBuilder::new(2).build(&words).unwrap();

    c.bench_function("pagerank", |b| {
        b.iter(|| PowerIteration::new().run(black_box(&graph)))
    });

    // Benchmark with different random surfer probabilities
    let mut group = c.benchmark_group("pagerank_random_surfer");
    for rsp in [0.05, 0.15, 0.5].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(rsp), rsp, |b, &rsp| {
            b.iter(|| {
                PowerIteration::new()
                    .with_random_surfer_probability(rsp)
                    .run(black_box(&graph))
            })
        });
    }
    group.finish();
}

fn benchmark_pagerank_parallel(c: &mut Criterion) {
    // Synthetic vocabulary large enough for the dense multiply to dominate
    let words: Vec<String> = (0..20_000)
        .map(|i| format!("w{}", (i * 7919 + i / 13) % 1_500))
        .collect();
    let graph = CooccurrenceGraphBuilder::new(2).build(&words).unwrap();

    let mut group = c.benchmark_group("pagerank_multiply");
    group.sample_size(10);
    group.bench_function("sequential", |b| {
        b.iter(|| {
            PowerIteration::new()
                .with_parallel_threshold(usize::MAX)
                .run(black_box(&graph))
        })
    });
    group.bench_function("parallel", |b| {
        b.iter(|| {
            PowerIteration::new()
                .with_parallel_threshold(1)
                .run(black_box(&graph))
        })
    });
    group.finish();
}

fn benchmark_full_pipeline(c: &mut Criterion) {
    let extractor = TextRank::new();

    let mut group = c.benchmark_group("full_pipeline");
    for size in [1, 5, 10].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| extractor.extract(black_box(text)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_tokenization,
    benchmark_graph_building,
    benchmark_pagerank,
    benchmark_pagerank_parallel,
    benchmark_full_pipeline,
);

criterion_main!(benches);

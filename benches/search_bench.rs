use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sieve::{DocumentStatus, ExecutionMode, SearchEngine, status_filter};

fn generate_dictionary(rng: &mut StdRng, word_count: usize, max_length: usize) -> Vec<String> {
    let mut words: Vec<String> = (0..word_count)
        .map(|_| {
            let length = rng.random_range(1..=max_length);
            (0..length)
                .map(|_| char::from(rng.random_range(b'a'..=b'z')))
                .collect()
        })
        .collect();
    words.sort();
    words.dedup();
    words
}

fn generate_text(rng: &mut StdRng, dictionary: &[String], max_words: usize) -> String {
    let length = rng.random_range(1..=max_words);
    (0..length)
        .map(|_| dictionary[rng.random_range(0..dictionary.len())].as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn generate_query(rng: &mut StdRng, dictionary: &[String], word_count: usize) -> String {
    (0..word_count)
        .map(|i| {
            let word = &dictionary[rng.random_range(0..dictionary.len())];
            if i % 10 == 9 {
                format!("-{word}")
            } else {
                word.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn build_engine(rng: &mut StdRng, dictionary: &[String], document_count: usize) -> SearchEngine {
    let mut engine = SearchEngine::from_stop_words(dictionary.iter().take(4).cloned()).unwrap();
    for id in 0..document_count {
        let text = generate_text(rng, dictionary, 70);
        engine
            .add_document(id as i64, &text, DocumentStatus::Actual, &[1, 2, 3])
            .unwrap();
    }
    engine
}

fn bench_find_top_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("Find Top Documents");
    group.sample_size(10);

    let mut rng = StdRng::seed_from_u64(42);
    let dictionary = generate_dictionary(&mut rng, 1000, 10);
    let engine = build_engine(&mut rng, &dictionary, 10_000);
    let queries: Vec<String> = (0..100)
        .map(|_| generate_query(&mut rng, &dictionary, 70))
        .collect();

    group.throughput(Throughput::Elements(queries.len() as u64));
    for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("{mode:?}")), &mode, |b, &mode| {
            b.iter(|| {
                for query in &queries {
                    engine
                        .find_top_documents_with(mode, query, status_filter(DocumentStatus::Actual))
                        .unwrap();
                }
            })
        });
    }
    group.finish();
}

fn bench_remove_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("Remove Document");
    group.sample_size(10);

    let mut rng = StdRng::seed_from_u64(7);
    let dictionary = generate_dictionary(&mut rng, 2000, 25);
    let document_count = 2000;

    group.throughput(Throughput::Elements(document_count as u64));
    for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("{mode:?}")), &mode, |b, &mode| {
            b.iter_batched(
                || build_engine(&mut StdRng::seed_from_u64(11), &dictionary, document_count),
                |mut engine| {
                    for id in 0..document_count {
                        engine.remove_document_with(mode, id as i64);
                    }
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_match_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("Match Document");
    group.sample_size(10);

    let mut rng = StdRng::seed_from_u64(3);
    let dictionary = generate_dictionary(&mut rng, 1000, 10);
    let engine = build_engine(&mut rng, &dictionary, 5_000);
    let query = generate_query(&mut rng, &dictionary, 500);

    for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("{mode:?}")), &mode, |b, &mode| {
            b.iter(|| {
                for id in &engine {
                    engine.match_document_with(mode, &query, id).unwrap();
                }
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_find_top_documents,
    bench_remove_document,
    bench_match_document
);
criterion_main!(benches);

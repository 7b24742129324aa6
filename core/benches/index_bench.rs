use criterion::{criterion_group, criterion_main, Criterion};
use docfind_core::{tokenizer::tokenize, Index, IndexConfig, StemAlgorithm};

fn sample_text() -> String {
    "The quick brown fox jumps over the lazy dog while another document \
     describes running rivers, liked books and searched libraries. "
        .repeat(200)
}

fn bench_tokenize(c: &mut Criterion) {
    let text = sample_text();
    c.bench_function("tokenize_sample", |b| b.iter(|| tokenize(&text)));
}

fn bench_add_document(c: &mut Criterion) {
    let text = sample_text();
    c.bench_function("add_document_sample", |b| {
        b.iter(|| {
            let mut index = Index::with_config(IndexConfig {
                stemmer: Some(StemAlgorithm::English),
                stopwords: ["the", "a", "and"].iter().map(|w| w.to_string()).collect(),
            });
            index.add_document("sample", &text);
            index
        })
    });
}

criterion_group!(benches, bench_tokenize, bench_add_document);
criterion_main!(benches);

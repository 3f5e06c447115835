//! Criterion benchmarks for the kokbul stemming chain.
//!
//! Covers the two hot paths:
//! - Stem selection over raw analyzer output
//! - The full Turkish analysis chain over running text

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};

use kokbul::analysis::analyzer::analyzer::Analyzer;
use kokbul::analysis::analyzer::turkish::TurkishAnalyzer;
use kokbul::analysis::token_filter::morph_stem::MorphStemFilter;
use kokbul::morph::aggregate::{Aggregation, select_stem};
use kokbul::morph::invoke::TableMorphAnalyzer;
use kokbul::morph::override_map::OverrideMap;

/// A small parse table covering the benchmark vocabulary.
fn parse_table() -> TableMorphAnalyzer {
    TableMorphAnalyzer::from_entries([
        (
            "evi",
            vec!["evi ev<N><p3s>".to_string(), "evi evi<N>".to_string()],
        ),
        ("evler", vec!["evler ev<N><pl>".to_string()]),
        ("evlerden", vec!["evlerden ev<N><pl><abl>".to_string()]),
        ("kitaplar", vec!["kitaplar kitap<N><pl>".to_string()]),
        ("kedileri", vec!["kedileri kedi<N><pl><acc>".to_string()]),
        ("bahçeler", vec!["bahçeler bahçe<N><pl>".to_string()]),
        ("xyz", vec!["xyz +?".to_string()]),
    ])
}

fn generate_text(word_count: usize) -> String {
    let words = [
        "evi", "evler", "evlerden", "kitaplar", "kedileri", "bahçeler", "xyz", "ve", "bu",
    ];

    let mut text = String::new();
    for i in 0..word_count {
        if i > 0 {
            text.push(' ');
        }
        text.push_str(words[i % words.len()]);
    }
    text
}

fn bench_select_stem(c: &mut Criterion) {
    let lines: Vec<String> = vec![
        "evi ev<N><p3s>".to_string(),
        "evi evi<N>".to_string(),
        "evi ev<N><acc>".to_string(),
    ];

    let mut group = c.benchmark_group("select_stem");
    group.throughput(Throughput::Elements(1));
    group.bench_function("multi_candidate_min", |b| {
        b.iter(|| select_stem(black_box("evi"), black_box(&lines), Aggregation::Min))
    });
    group.bench_function("multi_candidate_max", |b| {
        b.iter(|| select_stem(black_box("evi"), black_box(&lines), Aggregation::Max))
    });

    let escape_lines = vec!["xyz +?".to_string()];
    group.bench_function("unanalyzable", |b| {
        b.iter(|| select_stem(black_box("xyz"), black_box(&escape_lines), Aggregation::Min))
    });
    group.finish();
}

fn bench_turkish_analyzer(c: &mut Criterion) {
    let text = generate_text(200);

    let mut group = c.benchmark_group("turkish_analyzer");
    group.throughput(Throughput::Elements(200));

    let stem = MorphStemFilter::new(Arc::new(parse_table()), Aggregation::Min);
    let analyzer = TurkishAnalyzer::new(stem);
    group.bench_function("analyzer_path", |b| {
        b.iter(|| {
            let tokens: Vec<_> = analyzer.analyze(black_box(&text)).unwrap().collect();
            tokens
        })
    });

    let overrides = OverrideMap::builder()
        .add("evi", "ev")
        .add("evler", "ev")
        .add("evlerden", "ev")
        .add("kitaplar", "kitap")
        .add("kedileri", "kedi")
        .add("bahçeler", "bahçe")
        .build();
    let stem = MorphStemFilter::new(Arc::new(parse_table()), Aggregation::Min)
        .with_override_map(Arc::new(overrides));
    let analyzer = TurkishAnalyzer::new(stem);
    group.bench_function("override_path", |b| {
        b.iter(|| {
            let tokens: Vec<_> = analyzer.analyze(black_box(&text)).unwrap().collect();
            tokens
        })
    });
    group.finish();
}

criterion_group!(benches, bench_select_stem, bench_turkish_analyzer);
criterion_main!(benches);

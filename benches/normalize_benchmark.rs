//! Benchmarks for normalization pipeline performance.
//!
//! Run with: cargo bench
//!
//! The pipeline applies a dozen-plus sequential regex passes; these
//! benchmarks track the multiplicative constant on OCR-sized documents.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lexnorm::highlight::{highlight, len_utf16, Span};
use lexnorm::{normalize_contract_text, NormalizationOptions};

/// Builds synthetic OCR contract text with the artifact mix the pipeline
/// targets: entities, LaTeX markup, checklist tokens, outline markers.
fn create_test_contract(clause_count: usize) -> String {
    let mut text = String::with_capacity(clause_count * 120);
    for i in 1..=clause_count {
        text.push_str(&format!(
            "제{}조 (손해배상) 갑은 을에게 배상한다. \\$\\cdot\\$ 지체상금 &amp; 위약금\n\
             체크리스트: 면책범위 확인; 통지기한 확인; 종료\n\
             가. 첫째 항목 나. 둘째 항목\n",
            i
        ));
    }
    text
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_contract_text");

    for clause_count in [10, 100, 1000] {
        let text = create_test_contract(clause_count);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(clause_count),
            &text,
            |b, text| {
                let options = NormalizationOptions::safe();
                b.iter(|| normalize_contract_text(black_box(text), &options));
            },
        );
    }

    group.finish();
}

fn bench_highlight(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlight");

    for clause_count in [10, 100, 1000] {
        let text = create_test_contract(clause_count);
        let len = len_utf16(&text);

        // Non-overlapping spans covering roughly half the text.
        let spans: Vec<Span> = (0..len / 100)
            .map(|i| Span::new(i * 100, i * 100 + 50))
            .collect();

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(clause_count),
            &(text, spans),
            |b, (text, spans)| {
                b.iter(|| highlight(black_box(text), black_box(spans)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_highlight);
criterion_main!(benches);

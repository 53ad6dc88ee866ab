//! Benchmarks for deterministic sequence assembly.
//!
//! Run with: cargo bench -p cloze-core

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use cloze_core::FilledPattern;
use cloze_core::assemble::{SequenceAssembler, TokenCounter, WordCounter};
use cloze_core::pattern::{literal, mask, shortenable};

fn synthetic_pattern(words: usize) -> FilledPattern {
    let body = (0..words)
        .map(|i| format!("word{i}"))
        .collect::<Vec<_>>()
        .join(" ");
    FilledPattern::new(
        vec![mask(), literal(":"), shortenable(body)],
        vec![
            literal("("),
            shortenable("some trailing context of fixed size"),
            literal(")"),
        ],
    )
}

fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble");
    let assembler = SequenceAssembler::new(256, "[MASK]");

    for words in [64usize, 512, 4096] {
        let pattern = synthetic_pattern(words);
        group.throughput(Throughput::Elements(words as u64));
        group.bench_with_input(BenchmarkId::from_parameter(words), &pattern, |b, pattern| {
            b.iter(|| assembler.assemble(black_box(pattern), &WordCounter));
        });
    }
    group.finish();
}

fn bench_word_counting(c: &mut Criterion) {
    let text = (0..1024)
        .map(|i| format!("word{i}"))
        .collect::<Vec<_>>()
        .join(" ");

    c.bench_function("word_counter_1024", |b| {
        b.iter(|| WordCounter.count(black_box(&text)));
    });
}

criterion_group!(benches, bench_assemble, bench_word_counting);
criterion_main!(benches);

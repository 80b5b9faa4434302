//! Benchmarks for unresume analysis performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks run the layout pipeline on synthetic pages.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use unresume::{Token, TesseractRecognizer};

const WORDS: [&str; 8] = [
    "Rust", "systems", "engineer", "Acme", "built", "compilers", "tooling", "services",
];

/// Creates a synthetic two-column page with the given number of lines.
fn create_test_page(lines: usize) -> Vec<Token> {
    let mut tokens = vec![
        Token::new("Jane", 40.0, 20.0, 100.0, 40.0),
        Token::new("Doe", 150.0, 20.0, 90.0, 40.0),
        Token::new("jane@example.com", 40.0, 80.0, 200.0, 14.0),
        Token::new("555-123-4567", 260.0, 80.0, 130.0, 14.0),
    ];

    let headings = ["Experience", "Education", "Skills", "Projects"];
    let mut y = 140.0;
    for line in 0..lines {
        if line % 10 == 0 {
            tokens.push(Token::new(headings[(line / 10) % headings.len()], 40.0, y, 120.0, 18.0));
            y += 30.0;
        }
        for (i, word) in WORDS.iter().enumerate() {
            // Second half of each line sits in the right column
            let x = if i < WORDS.len() / 2 { 40.0 + i as f32 * 80.0 } else { 440.0 + i as f32 * 80.0 };
            tokens.push(Token::new(*word, x, y, 70.0, 14.0));
        }
        y += 20.0;
    }

    tokens
}

/// Benchmark the full pipeline at various page sizes.
fn bench_analyze_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_layout");

    for lines in [10, 50, 200].iter() {
        let tokens = create_test_page(*lines);

        group.bench_function(format!("{}_lines", lines), |b| {
            b.iter(|| unresume::analyze_layout(black_box(&tokens), 800.0));
        });
    }

    group.finish();
}

/// Benchmark section segmentation alone.
fn bench_sections(c: &mut Criterion) {
    let tokens = create_test_page(200);

    c.bench_function("detect_sections", |b| {
        b.iter(|| unresume::analyzer::detect_sections(black_box(&tokens), 20.0, 3));
    });
}

/// Benchmark builder pattern overhead.
fn bench_builder_creation(c: &mut Criterion) {
    c.bench_function("builder_creation", |b| {
        b.iter(|| {
            let _builder = unresume::Unresume::new()
                .with_width(800.0)
                .with_frontmatter()
                .with_cleanup(unresume::CleanupPreset::Standard);
            let _recognizer = TesseractRecognizer::new().with_language("eng");
        });
    });
}

criterion_group!(
    benches,
    bench_analyze_layout,
    bench_sections,
    bench_builder_creation,
);
criterion_main!(benches);

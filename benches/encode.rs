use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ptil::{Format, Language, PtilEncoder};

const SENTENCES: &[&str] = &[
    "The boy will not go to school tomorrow.",
    "She gave him a book.",
    "Did the cat sleep?",
    "The book was thrown by the boy.",
    "She is running to school.",
    "Maybe he went home.",
];

fn bench_encode(c: &mut Criterion) {
    let encoder = PtilEncoder::for_language(Language::En);

    c.bench_function("encode_single_sentence", |b| {
        b.iter(|| encoder.encode(black_box("The boy will not go to school tomorrow.")));
    });

    c.bench_function("encode_mixed_batch", |b| {
        b.iter(|| {
            for text in SENTENCES {
                black_box(encoder.encode(black_box(text)));
            }
        });
    });
}

fn bench_serialize(c: &mut Criterion) {
    let encoder = PtilEncoder::for_language(Language::En);

    for format in [Format::Verbose, Format::Compact, Format::Ultra] {
        c.bench_function(&format!("encode_and_serialize_{format}"), |b| {
            b.iter(|| {
                encoder.encode_and_serialize(
                    black_box("The boy will not go to school tomorrow."),
                    format,
                )
            });
        });
    }
}

criterion_group!(benches, bench_encode, bench_serialize);
criterion_main!(benches);

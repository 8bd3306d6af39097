use std::{fs, sync::LazyLock};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tokr::{DfaDescription, TokenKinds, Tokenizer, TokenizerBuilder, IGNORE_LABEL};

static DESCRIPTION: LazyLock<DfaDescription> = LazyLock::new(|| {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/identifiers.json");
    let file = fs::File::open(path).unwrap();
    serde_json::from_reader(file).unwrap()
});

static TOKENIZER: LazyLock<Tokenizer<String>> = LazyLock::new(|| {
    TokenizerBuilder::new()
        .description(DESCRIPTION.clone())
        .token_kinds(token_kinds())
        .build()
        .unwrap()
});

static INPUT: LazyLock<String> =
    LazyLock::new(|| "abc = 12;\n# note\nxyz = 3;\n".repeat(1000));

fn token_kinds() -> TokenKinds<String> {
    let mut token_kinds = TokenKinds::new("EOI".to_string());
    for labels in DESCRIPTION.accepting.values() {
        for label in labels {
            if label.as_str() != IGNORE_LABEL {
                token_kinds.insert(label, label.clone());
            }
        }
    }
    token_kinds
}

fn builder_benchmark(c: &mut Criterion) {
    c.bench_function("builder_benchmark", |b| {
        b.iter(|| {
            black_box(
                TokenizerBuilder::new()
                    .description(DESCRIPTION.clone())
                    .token_kinds(token_kinds())
                    .build()
                    .unwrap(),
            );
        });
    });
}

fn tokenizer_benchmark(c: &mut Criterion) {
    c.bench_function("tokenizer_benchmark", |b| {
        b.iter(|| {
            // Create a token stream and drain it
            for token in TOKENIZER.token_stream(INPUT.chars()) {
                black_box(token.unwrap());
            }
        });
    });
}

criterion_group!(benches, builder_benchmark, tokenizer_benchmark);
criterion_main!(benches);

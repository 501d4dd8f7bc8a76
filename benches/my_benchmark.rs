use criterion::{black_box, criterion_group, criterion_main, Criterion};
use test_utils::load_test_dictionary;
use twitmin::{resolve_tweet, AlternativeDictionary, PhraseCombiner, Tokenizer, DEFAULT_RESOLVER_CONFIG};

const TWEET: &str = "By the way, thank you for the link https://example.com/a/long/path #grateful \
                     @bob... see you tomorrow because people are great LOL";

/// The test dictionary padded with phrases that never occur in the tweet.
fn large_dictionary() -> AlternativeDictionary {
    let mut dictionary = load_test_dictionary();
    for index in 0..5_000 {
        dictionary.insert(format!("phrase number {}", index), vec![format!("p{}", index)]);
    }
    dictionary
}

fn benchmark_resolve_tweet(c: &mut Criterion) {
    let dictionary = load_test_dictionary();

    c.bench_function("resolve_tweet", |b| {
        b.iter(|| resolve_tweet(black_box(TWEET), black_box(&dictionary)))
    });
}

fn benchmark_phrase_combiner(c: &mut Criterion) {
    let dictionary = large_dictionary();
    let tokens = Tokenizer::new(DEFAULT_RESOLVER_CONFIG).tokenize(TWEET).tokens;
    let combiner = PhraseCombiner::new(&dictionary);

    c.bench_function("combine_phrases_large_dictionary", |b| {
        b.iter(|| combiner.combine(black_box(tokens.clone())))
    });
}

criterion_group!(benches, benchmark_resolve_tweet, benchmark_phrase_combiner);
criterion_main!(benches);

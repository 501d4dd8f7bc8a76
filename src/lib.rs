mod config;
pub use config::DEFAULT_RESOLVER_CONFIG;
mod constants;
pub use constants::DEFAULT_URL_WEIGHT;
pub mod models;
pub use models::{
    AlternativeDictionary, AlternativeDictionaryPreprocessor, AlternativeResolver, Error,
    LengthAccountant, Normalizer, OptionRanker, PhraseCombiner, Resolution, ResolverConfig,
    SpecialKind, Token, Tokenizer, TweetResolver,
};
pub mod types;
mod utils;
pub use types::{Alternative, CharLength, DictionaryKey, LengthAdjustment, TokenText, WordOptions};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Tokenizes a tweet, attaches shorter alternatives to its words and computes its length as
/// the platform counts it.
pub fn resolve_tweet(text: &str, dictionary: &AlternativeDictionary) -> Resolution {
    resolve_tweet_with_custom_config(DEFAULT_RESOLVER_CONFIG, text, dictionary)
}

pub fn resolve_tweet_with_custom_config(
    resolver_config: &ResolverConfig,
    text: &str,
    dictionary: &AlternativeDictionary,
) -> Resolution {
    TweetResolver::new(resolver_config, dictionary).process_tweet(text)
}

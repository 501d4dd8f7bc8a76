pub mod alternative_dictionary;
pub use alternative_dictionary::{AlternativeDictionary, Phrase};

pub mod alternative_dictionary_preprocessor;
pub use alternative_dictionary_preprocessor::AlternativeDictionaryPreprocessor;

pub mod alternative_resolver;
pub use alternative_resolver::AlternativeResolver;

pub mod config;
pub use config::ResolverConfig;

pub mod error;
pub use error::Error;

pub mod length_accountant;
pub use length_accountant::LengthAccountant;

pub mod normalizer;
pub use normalizer::{NormalizedTweet, Normalizer};

pub mod option_ranker;
pub use option_ranker::OptionRanker;

pub mod phrase_combiner;
pub use phrase_combiner::PhraseCombiner;

pub mod resolution;
pub use resolution::Resolution;

pub mod token;
pub use token::{SpecialKind, Token};

pub mod tokenizer;
pub use tokenizer::{TokenizedTweet, Tokenizer, TokenizerState, Transition};

pub mod tweet_resolver;
pub use tweet_resolver::TweetResolver;

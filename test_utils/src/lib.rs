pub mod constants;
pub mod models;
pub mod strategies;

use constants::{TEST_ALTERNATIVES_CSV_PATH, TEST_FILES_DIRECTORY, TWEET_FILE_EXTENSION};
pub use models::TweetFixture;
use std::fs::read_dir;
use twitmin::{AlternativeDictionary, AlternativeDictionaryPreprocessor, Token};

/// Utility to load the test dictionary for testing and benchmarking.
pub fn load_test_dictionary() -> AlternativeDictionary {
    AlternativeDictionaryPreprocessor::read_dictionary_from_path(&*TEST_ALTERNATIVES_CSV_PATH)
        .expect("Failed to load test dictionary")
}

/// Reads every tweet fixture in the test files directory, sorted by path.
pub fn load_tweet_fixtures() -> Vec<TweetFixture> {
    let mut paths: Vec<_> = read_dir(&*TEST_FILES_DIRECTORY)
        .expect("Failed to read test files directory")
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| {
            path.extension()
                .is_some_and(|extension| extension == TWEET_FILE_EXTENSION)
        })
        .collect();
    paths.sort();

    paths
        .iter()
        .map(|path| TweetFixture::from_path(path))
        .collect()
}

/// Concatenates the verbatim text of the given tokens.
pub fn concat_token_text(tokens: &[Token]) -> String {
    tokens.iter().map(Token::text).collect()
}

/// Builds a dictionary from `(key, alternatives)` literals.
pub fn dictionary_from(entries: &[(&str, &[&str])]) -> AlternativeDictionary {
    entries
        .iter()
        .map(|(key, alternatives)| (*key, alternatives.to_vec()))
        .collect()
}

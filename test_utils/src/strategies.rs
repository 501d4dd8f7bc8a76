use proptest::prelude::*;

/// Fragments that exercise every tokenizer state and the transitions between them.
const TWEET_FRAGMENTS: &[&str] = &[
    "by", "the", "way", "You", "THANK", "you", "y'all", "rock''", "'", "#win", "#", "@bob",
    "@", "bob@x.com", "a@b@c", "http", "https", "http://x.co", "https://example.com/a?b=c#d",
    "HTTP:", ":", "...", "…", "linux", "LINUX", "sucks", "gnu/linux", "-", "/", "_", ",", "!",
    "?", " ", "  ", "\n", " \n", "\t", "😀", "žluť", "日本", "123", "a#b",
];

const SEPARATORS: &[&str] = &["", " ", ", ", "\r\n"];

/// Tweets assembled from tokenizer-relevant fragments, glued with and without separators.
pub fn tweet_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (
            prop::sample::select(TWEET_FRAGMENTS),
            prop::sample::select(SEPARATORS),
        ),
        0..24,
    )
    .prop_map(|parts| {
        parts
            .into_iter()
            .map(|(fragment, separator)| format!("{}{}", fragment, separator))
            .collect()
    })
}

/// Arbitrary Unicode text, including control characters and odd whitespace.
pub fn arbitrary_text_strategy() -> impl Strategy<Value = String> {
    any::<String>()
}

use crate::constants::ELLIPSIS;
use crate::models::ResolverConfig;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Matches "linux" (bare, `gnu/` or `arch` prefixed), the whitespace after it and an optional
/// negative remark. The empty alternative only matches when a word follows the whitespace.
static LINUX_PHRASE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)((?:gnu/|arch|\b)linux)(\s+)(is\s+bad|sucks(?:\s+dick|\s+balls)?|\b)")
        .expect("linux phrase pattern is valid")
});

/// A tweet after conditioning, in the two forms the pipeline needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTweet {
    /// Trimmed, with unified line endings. Lengths are measured on this.
    pub original: String,
    /// `original` after the literal rewrites. This is what gets tokenized.
    pub text: String,
}

pub struct Normalizer<'a> {
    config: &'a ResolverConfig,
}

impl<'a> Normalizer<'a> {
    pub fn new(config: &'a ResolverConfig) -> Self {
        Normalizer { config }
    }

    pub fn normalize(&self, tweet: &str) -> NormalizedTweet {
        let original = Self::condition(tweet);

        let mut text = original.clone();

        if self.config.compact_ellipsis {
            text = text.replace("...", ELLIPSIS);
        }

        if self.config.correct_linux_phrases {
            text = Self::correct_linux_phrases(&text);
        }

        NormalizedTweet { original, text }
    }

    /// Trims the tweet and normalizes `\r\n` line endings to `\n`.
    pub fn condition(tweet: &str) -> String {
        tweet.trim().replace("\r\n", "\n")
    }

    /// Rewrites "linux" to "GNU/Linux" and any negative remark after it to "is great", keeping
    /// the all-caps form of each part.
    pub fn correct_linux_phrases(text: &str) -> String {
        LINUX_PHRASE_REGEX
            .replace_all(text, |caps: &Captures| {
                let mut linux = caps[1].to_string();
                if linux.to_lowercase() == "linux" {
                    linux = if linux == "LINUX" {
                        "GNU/LINUX".to_string()
                    } else {
                        "GNU/Linux".to_string()
                    };
                }

                let remark = &caps[3];
                let is_great = if remark.to_uppercase() == remark {
                    "IS GREAT"
                } else {
                    "is great"
                };

                format!("{}{}{}", linux, &caps[2], is_great)
            })
            .into_owned()
    }
}

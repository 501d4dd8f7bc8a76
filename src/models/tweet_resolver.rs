use crate::models::{
    AlternativeDictionary, AlternativeResolver, LengthAccountant, Normalizer, OptionRanker,
    PhraseCombiner, Resolution, ResolverConfig, Tokenizer,
};
use crate::utils::normalize_filler_whitespace;

use log::info;

/// Runs a tweet through the whole pipeline: normalize, tokenize, combine phrases, look up
/// alternatives, rank them and account for the length.
///
/// Holds no per-tweet state, so one resolver can process any number of tweets.
pub struct TweetResolver<'a> {
    config: &'a ResolverConfig,
    dictionary: &'a AlternativeDictionary,
}

impl<'a> TweetResolver<'a> {
    pub fn new(config: &'a ResolverConfig, dictionary: &'a AlternativeDictionary) -> Self {
        TweetResolver { config, dictionary }
    }

    pub fn process_tweet(&self, tweet: &str) -> Resolution {
        info!("Normalizing...");
        let normalized = Normalizer::new(self.config).normalize(tweet);

        info!("Tokenizing...");
        let tokenized = Tokenizer::new(self.config).tokenize(&normalized.text);
        let mut tokens = tokenized.tokens;

        if self.config.combine_phrases {
            info!("Combining phrases...");
            tokens = PhraseCombiner::new(self.dictionary).combine(tokens);
        }

        info!("Finding alternatives...");
        AlternativeResolver::new(self.dictionary).find_alternatives(&mut tokens);

        info!("Ranking options...");
        OptionRanker::rank(&mut tokens);

        let normalized_length =
            LengthAccountant::normalized_length(&normalized.original, tokenized.length_adjustment);

        let normalized_text = normalize_filler_whitespace(&normalized.text);

        debug_assert_eq!(
            tokens.iter().map(|token| token.text()).collect::<String>(),
            normalized_text,
            "token stream must reproduce the normalized tweet"
        );

        Resolution::new(
            normalized.original,
            normalized_text,
            tokens,
            tokenized.length_adjustment,
            normalized_length,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SpecialKind, Token};
    use crate::DEFAULT_RESOLVER_CONFIG;

    fn dictionary() -> AlternativeDictionary {
        vec![
            ("by the way", vec!["btw"]),
            ("you", vec!["u"]),
            ("tomorrow", vec!["tmrw", "2moro"]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_full_pipeline() {
        let dictionary = dictionary();
        let resolver = TweetResolver::new(DEFAULT_RESOLVER_CONFIG, &dictionary);
        let resolution = resolver.process_tweet("  By the way, see YOU tomorrow @bob  ");

        assert_eq!(resolution.original_text(), "By the way, see YOU tomorrow @bob");
        assert_eq!(
            resolution.tokens(),
            &[
                Token::Word {
                    text: "By the way".to_string(),
                    options: vec!["Btw".to_string(), "By the way".to_string()],
                },
                Token::filler(", "),
                Token::word("see"),
                Token::filler(" "),
                Token::Word {
                    text: "YOU".to_string(),
                    options: vec!["U".to_string(), "YOU".to_string()],
                },
                Token::filler(" "),
                Token::Word {
                    text: "tomorrow".to_string(),
                    options: vec![
                        "tmrw".to_string(),
                        "2moro".to_string(),
                        "tomorrow".to_string()
                    ],
                },
                Token::filler(" "),
                Token::special("@bob", SpecialKind::Handle, 23),
            ]
        );
        assert_eq!(resolution.normalized_length(), 33);
        assert_eq!(resolution.shortest_rendering(), "Btw, see U tmrw @bob");
    }

    #[test]
    fn test_phrase_combining_can_be_disabled() {
        let dictionary = dictionary();
        let config = ResolverConfig {
            combine_phrases: false,
            ..*DEFAULT_RESOLVER_CONFIG
        };
        let resolution = TweetResolver::new(&config, &dictionary).process_tweet("by the way");

        assert_eq!(resolution.tokens().len(), 5);
        assert!(resolution.tokens().iter().all(|token| token.options().len() <= 1));
    }

    #[test]
    fn test_empty_tweet() {
        let dictionary = dictionary();
        let resolution =
            TweetResolver::new(DEFAULT_RESOLVER_CONFIG, &dictionary).process_tweet(" \r\n ");

        assert!(resolution.tokens().is_empty());
        assert_eq!(resolution.normalized_length(), 0);
    }
}

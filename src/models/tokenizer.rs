use crate::constants::{MAX_CHAR_ATTEMPTS, URL_SCHEMES};
use crate::models::{ResolverConfig, SpecialKind, Token};
use crate::types::LengthAdjustment;

/// What the tokenizer is currently collecting into its buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerState {
    /// A pending word, or nothing at all when the buffer is empty.
    Idle,
    Hashtag,
    Handle,
    Email,
    Url,
    /// Whitespace and punctuation.
    Junk,
}

/// The outcome of presenting one character to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The character was appended to the buffer.
    Consumed,
    /// A token was finalized; present the same character again in the new state.
    Retry,
}

/// The token stream of a tweet, plus what its special tokens take off the literal length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenizedTweet {
    pub tokens: Vec<Token>,
    pub length_adjustment: LengthAdjustment,
}

/// Splits tweet text into words, fillers and special tokens, one character at a time.
///
/// Note: Every character ends up in exactly one token, so concatenating the token text gives
/// back the input (with filler whitespace normalized).
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'a> {
    config: &'a ResolverConfig,
}

impl<'a> Tokenizer<'a> {
    pub fn new(config: &'a ResolverConfig) -> Self {
        Tokenizer { config }
    }

    pub fn tokenize(&self, text: &str) -> TokenizedTweet {
        let mut run = TokenizerRun::new(self.config);

        for ch in text.chars() {
            let consumed =
                (0..MAX_CHAR_ATTEMPTS).any(|_| run.process_char(ch) == Transition::Consumed);

            assert!(
                consumed,
                "tokenizer failed to consume {:?} within {} attempts (state {:?})",
                ch, MAX_CHAR_ATTEMPTS, run.state
            );
        }

        run.finish()
    }
}

/// Mutable state of a single tokenizer invocation.
struct TokenizerRun<'a> {
    config: &'a ResolverConfig,
    state: TokenizerState,
    buffer: String,
    tokens: Vec<Token>,
    length_adjustment: LengthAdjustment,
}

impl<'a> TokenizerRun<'a> {
    fn new(config: &'a ResolverConfig) -> Self {
        TokenizerRun {
            config,
            state: TokenizerState::Idle,
            buffer: String::new(),
            tokens: Vec::new(),
            length_adjustment: 0,
        }
    }

    fn process_char(&mut self, ch: char) -> Transition {
        match self.state {
            TokenizerState::Hashtag | TokenizerState::Handle => {
                self.collect_while(ch, is_handle_char)
            }
            TokenizerState::Url => self.collect_while(ch, is_url_char),
            TokenizerState::Email => self.collect_while(ch, is_email_char),
            TokenizerState::Junk => {
                if (is_word_char(ch) && ch != '\'') || ch == '#' || ch == '@' {
                    // End of junk, start of good stuff
                    self.finalize();
                    Transition::Retry
                } else {
                    self.buffer.push(ch);
                    Transition::Consumed
                }
            }
            TokenizerState::Idle => {
                self.process_idle_char(ch);
                Transition::Consumed
            }
        }
    }

    /// Appends `ch` while it belongs to the current special token; otherwise ends the token.
    fn collect_while(&mut self, ch: char, belongs: fn(char) -> bool) -> Transition {
        if belongs(ch) {
            self.buffer.push(ch);
            Transition::Consumed
        } else {
            self.finalize();
            Transition::Retry
        }
    }

    /// The idle state always consumes the character.
    fn process_idle_char(&mut self, ch: char) {
        if is_word_char(ch) {
            // Could be a word, or perhaps the start of a URL or e-mail
            self.buffer.push(ch);
            return;
        }

        match ch {
            '@' => {
                self.state = if self.buffer.is_empty() {
                    TokenizerState::Handle
                } else {
                    // The buffered word is the local part of an e-mail
                    TokenizerState::Email
                };
            }
            '#' => {
                // A `#` glued to a word stays inside that word
                if self.buffer.is_empty() {
                    self.state = TokenizerState::Hashtag;
                }
            }
            ':' if URL_SCHEMES.contains(&self.buffer.as_str()) => {
                self.state = TokenizerState::Url;
            }
            _ => {
                if !self.buffer.is_empty() {
                    self.finalize();
                }
                self.state = TokenizerState::Junk;
            }
        }

        self.buffer.push(ch);
    }

    /// Turns the buffer into a token according to the current state and resets to idle.
    fn finalize(&mut self) {
        let text = std::mem::take(&mut self.buffer);
        let state = std::mem::replace(&mut self.state, TokenizerState::Idle);

        if text.is_empty() {
            return;
        }

        let url_weight = self.config.url_weight;
        let token = match state {
            TokenizerState::Idle => Token::word(text),
            TokenizerState::Junk => Token::filler(&text),
            TokenizerState::Hashtag => Token::special(text, SpecialKind::Hashtag, url_weight),
            TokenizerState::Handle => Token::special(text, SpecialKind::Handle, url_weight),
            TokenizerState::Email => Token::special(text, SpecialKind::Email, url_weight),
            TokenizerState::Url => Token::special(text, SpecialKind::Url, url_weight),
        };

        self.emit(token);
    }

    fn emit(&mut self, token: Token) {
        match token {
            Token::Word { ref text, .. } if text.ends_with('\'') => {
                // Keep dangling quotes out of dictionary lookups
                let stripped = text.trim_end_matches('\'');
                let apostrophes = &text[stripped.len()..];

                if !stripped.is_empty() {
                    self.tokens.push(Token::word(stripped));
                }
                self.tokens.push(Token::filler(apostrophes));
            }
            Token::Special { .. } => {
                self.length_adjustment += token.length_adjustment();
                self.tokens.push(token);
            }
            Token::Word { .. } | Token::Filler { .. } => self.tokens.push(token),
        }
    }

    fn finish(mut self) -> TokenizedTweet {
        self.finalize();

        TokenizedTweet {
            tokens: self.tokens,
            length_adjustment: self.length_adjustment,
        }
    }
}

pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, '\'' | '-' | '/')
}

pub fn is_handle_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

pub fn is_url_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, '_' | '-' | '.' | '/' | '#' | '%' | '=' | '?' | '!')
}

pub fn is_email_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, '_' | '-' | '.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_RESOLVER_CONFIG;

    fn tokenize(text: &str) -> TokenizedTweet {
        Tokenizer::new(DEFAULT_RESOLVER_CONFIG).tokenize(text)
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), TokenizedTweet::default());
    }

    #[test]
    fn test_words_and_fillers() {
        let tokenized = tokenize("Hi there, you!");
        assert_eq!(
            tokenized.tokens,
            vec![
                Token::word("Hi"),
                Token::filler(" "),
                Token::word("there"),
                Token::filler(", "),
                Token::word("you"),
                Token::filler("!"),
            ]
        );
        assert_eq!(tokenized.length_adjustment, 0);
    }

    #[test]
    fn test_http_without_colon_is_a_word() {
        assert_eq!(tokenize("http").tokens, vec![Token::word("http")]);
    }

    #[test]
    fn test_uppercase_scheme_is_not_a_url() {
        assert_eq!(
            tokenize("HTTP://x").tokens,
            vec![Token::word("HTTP"), Token::filler(":"), Token::word("//x")]
        );
    }

    #[test]
    fn test_short_url_raises_adjustment_below_zero() {
        let tokenized = tokenize("http://x.co");
        assert_eq!(tokenized.length_adjustment, 11 - 23);
    }

    #[test]
    fn test_hash_inside_word_is_kept() {
        assert_eq!(tokenize("a#b").tokens, vec![Token::word("a#b")]);
    }

    #[test]
    fn test_junk_keeps_apostrophes() {
        assert_eq!(
            tokenize("hi '' there").tokens,
            vec![
                Token::word("hi"),
                Token::filler(" '' "),
                Token::word("there"),
            ]
        );
    }

    #[test]
    fn test_lone_apostrophes_become_filler() {
        assert_eq!(tokenize("''").tokens, vec![Token::filler("''")]);
    }

    #[test]
    fn test_multiple_trailing_apostrophes() {
        assert_eq!(
            tokenize("rock''").tokens,
            vec![Token::word("rock"), Token::filler("''")]
        );
    }

    #[test]
    fn test_handle_followed_by_at() {
        let tokenized = tokenize("a@b@c");
        assert_eq!(
            tokenized.tokens,
            vec![
                Token::special("a@b", SpecialKind::Email, 23),
                Token::special("@c", SpecialKind::Handle, 23),
            ]
        );
    }

    #[test]
    fn test_classifiers() {
        assert!(is_word_char('ř'));
        assert!(is_word_char('/'));
        assert!(!is_word_char('_'));
        assert!(is_handle_char('_'));
        assert!(!is_handle_char('-'));
        assert!(is_url_char('?'));
        assert!(!is_url_char(':'));
        assert!(is_email_char('.'));
        assert!(!is_email_char('@'));
    }
}

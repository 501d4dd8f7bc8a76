use crate::models::Token;
use crate::types::{CharLength, LengthAdjustment};

/// The finished analysis of one tweet. Owned by the caller and never changed after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    original_text: String,
    normalized_text: String,
    tokens: Vec<Token>,
    length_adjustment: LengthAdjustment,
    normalized_length: CharLength,
}

impl Resolution {
    pub(crate) fn new(
        original_text: String,
        normalized_text: String,
        tokens: Vec<Token>,
        length_adjustment: LengthAdjustment,
        normalized_length: CharLength,
    ) -> Self {
        Resolution {
            original_text,
            normalized_text,
            tokens,
            length_adjustment,
            normalized_length,
        }
    }

    /// The tweet as given, trimmed and with unified line endings.
    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    /// The text the tokens were cut from, after the literal rewrites and filler whitespace
    /// normalization. Concatenating every token's text yields exactly this.
    pub fn normalized_text(&self) -> &str {
        &self.normalized_text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Sum of literal length minus weight over all special tokens.
    pub fn length_adjustment(&self) -> LengthAdjustment {
        self.length_adjustment
    }

    /// The length of the tweet as the platform counts it.
    pub fn normalized_length(&self) -> CharLength {
        self.normalized_length
    }

    /// Concatenates the verbatim text of every token.
    pub fn reconstruct(&self) -> String {
        self.tokens.iter().map(Token::text).collect()
    }

    /// Renders every word with its first ranked option. Choosing renderings under a length
    /// budget is left to the caller.
    pub fn shortest_rendering(&self) -> String {
        self.tokens
            .iter()
            .map(|token| match token {
                Token::Word { text, options } => {
                    options.first().map(String::as_str).unwrap_or(text.as_str())
                }
                Token::Filler { text } | Token::Special { text, .. } => text.as_str(),
            })
            .collect()
    }
}

use crate::types::{CharLength, TokenText, TokenTextRef, WordOptions};
use crate::utils::{char_length, normalize_filler_whitespace};
use std::fmt;

/// The kind of a special token. Special tokens are kept verbatim and never substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialKind {
    Hashtag,
    Handle,
    Url,
    Email,
}

impl SpecialKind {
    /// Returns the number of characters a special of this kind contributes to the normalized
    /// length.
    ///
    /// URLs are shortened by the platform, so they count as `url_weight` no matter how long
    /// they are. Every other kind counts at its literal length.
    pub fn weight(self, text: &TokenTextRef, url_weight: CharLength) -> CharLength {
        match self {
            SpecialKind::Url => url_weight,
            SpecialKind::Hashtag | SpecialKind::Handle | SpecialKind::Email => char_length(text),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SpecialKind::Hashtag => "hashtag",
            SpecialKind::Handle => "handle",
            SpecialKind::Url => "url",
            SpecialKind::Email => "email",
        }
    }
}

/// A classified span of a tweet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A word or phrase which may be minified. `options` always holds the original text.
    Word {
        text: TokenText,
        options: WordOptions,
    },

    /// Whitespace / punctuation. Left alone, as it can contain emojis and other strange stuff.
    Filler { text: TokenText },

    /// A #hashtag, @handle, URL or e-mail. The content must be left exactly as is.
    Special {
        text: TokenText,
        kind: SpecialKind,
        weight: CharLength,
    },
}

impl Token {
    pub fn word(text: impl Into<TokenText>) -> Self {
        let text = text.into();
        let options = vec![text.clone()];
        Token::Word { text, options }
    }

    /// Creates a filler token. Newlines and spaces are normalized at creation.
    pub fn filler(text: &TokenTextRef) -> Self {
        Token::Filler {
            text: normalize_filler_whitespace(text),
        }
    }

    pub fn special(text: impl Into<TokenText>, kind: SpecialKind, url_weight: CharLength) -> Self {
        let text = text.into();
        let weight = kind.weight(&text, url_weight);
        Token::Special { text, kind, weight }
    }

    pub fn text(&self) -> &TokenTextRef {
        match self {
            Token::Word { text, .. } | Token::Filler { text } | Token::Special { text, .. } => text,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word { .. })
    }

    pub fn is_filler(&self) -> bool {
        matches!(self, Token::Filler { .. })
    }

    /// True for a filler made only of whitespace, which is what separates the words of a phrase.
    pub fn is_blank_filler(&self) -> bool {
        match self {
            Token::Filler { text } => text.trim().is_empty(),
            _ => false,
        }
    }

    pub fn special_kind(&self) -> Option<SpecialKind> {
        match self {
            Token::Special { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// The renderings of a word token, or an empty slice for anything else.
    pub fn options(&self) -> &[String] {
        match self {
            Token::Word { options, .. } => options.as_slice(),
            Token::Filler { .. } | Token::Special { .. } => &[],
        }
    }

    /// The number of characters this token contributes to the normalized length.
    pub fn weight(&self) -> CharLength {
        match self {
            Token::Special { weight, .. } => *weight,
            Token::Word { text, .. } | Token::Filler { text } => char_length(text),
        }
    }

    /// Literal length minus weight. Non-zero only for specials.
    pub fn length_adjustment(&self) -> isize {
        match self {
            Token::Special { text, weight, .. } => char_length(text) as isize - *weight as isize,
            Token::Word { .. } | Token::Filler { .. } => 0,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word { text, .. } => write!(f, "Word[{:?}]", text),
            Token::Filler { text } => write!(f, "Filler[{:?}]", text),
            Token::Special { text, kind, .. } => write!(f, "Special<{}>[{:?}]", kind.as_str(), text),
        }
    }
}

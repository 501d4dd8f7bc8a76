use crate::types::CharLength;

/// What the platform counts a shortened link as.
pub const DEFAULT_URL_WEIGHT: CharLength = 23;

/// No character can cause more than two finalizations, so a third attempt means the state
/// machine is broken.
pub const MAX_CHAR_ATTEMPTS: usize = 3;

pub const ELLIPSIS: &str = "…";

/// URL schemes recognized when a `:` follows the word buffer. Compared case-sensitively.
pub const URL_SCHEMES: &[&str] = &["http", "https"];

pub const PHRASE_WORD_SEPARATOR: char = ' ';

pub const CSV_PHRASE_HEADER: &str = "Phrase";
pub const CSV_ALTERNATIVES_HEADER: &str = "Alternatives";
pub const CSV_ALTERNATIVES_SEPARATOR: char = '|';

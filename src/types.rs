// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents the verbatim text of a token as an owned `String`.
pub type TokenText = String;

/// Represents a borrowed view of token text. This is used when ownership is not required.
pub type TokenTextRef = str;

/// A lowercase dictionary key. Either a single word or a phrase of words joined by single spaces.
pub type DictionaryKey = String;

/// A replacement string offered for a dictionary key.
pub type Alternative = String;

/// The ordered list of renderings carried by a word token. The first entry is always the
/// original text until the list is ranked.
pub type WordOptions = Vec<Alternative>;

/// A length measured in Unicode scalar values (what the platform counts), not bytes.
pub type CharLength = usize;

/// The running difference between literal and weighted length of special tokens.
///
/// Signed, since URLs shorter than the fixed URL weight push the normalized length up.
pub type LengthAdjustment = isize;

/// The words of a phrase key, split on single spaces, in order.
pub type PhraseWords = Vec<String>;

use crate::types::{CharLength, TokenTextRef};

/// Counts the Unicode scalar values in `text`.
///
/// The platform counts characters, not bytes, so every length in the crate goes through here.
pub fn char_length(text: &TokenTextRef) -> CharLength {
    text.chars().count()
}

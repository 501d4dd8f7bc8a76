use crate::types::{CharLength, LengthAdjustment};
use crate::utils::char_length;

/// Computes the length the platform reports for a tweet.
pub struct LengthAccountant {}

impl LengthAccountant {
    /// `original` is the trimmed tweet with unified line endings; `length_adjustment` is the sum
    /// of literal length minus weight over all special tokens.
    pub fn normalized_length(original: &str, length_adjustment: LengthAdjustment) -> CharLength {
        let length = char_length(original) as LengthAdjustment - length_adjustment;
        length.max(0) as CharLength
    }
}

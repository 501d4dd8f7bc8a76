use crate::models::Token;
use crate::utils::char_length;

/// Orders the options of every word token from shortest to longest.
pub struct OptionRanker {}

impl OptionRanker {
    /// The sort is stable: options of equal length keep their relative order.
    pub fn rank(tokens: &mut [Token]) {
        for token in tokens.iter_mut() {
            if let Token::Word { options, .. } = token {
                options.sort_by_key(|option| char_length(option));
            }
        }
    }
}

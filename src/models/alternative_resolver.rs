use crate::models::{AlternativeDictionary, Token};
use crate::utils::adjust_case;
use log::debug;

/// Attaches dictionary alternatives to word tokens, in the letter case of the original word.
pub struct AlternativeResolver<'a> {
    dictionary: &'a AlternativeDictionary,
}

impl<'a> AlternativeResolver<'a> {
    pub fn new(dictionary: &'a AlternativeDictionary) -> Self {
        AlternativeResolver { dictionary }
    }

    pub fn find_alternatives(&self, tokens: &mut [Token]) {
        for token in tokens.iter_mut() {
            match token {
                Token::Word { text, options } => {
                    let search = text.to_lowercase();

                    if let Some(alternatives) = self.dictionary.get(&search) {
                        debug!("Found {} alternative(s) for {:?}", alternatives.len(), text);
                        options.extend(adjust_case(alternatives, text));
                    }
                }
                Token::Filler { .. } | Token::Special { .. } => {}
            }
        }
    }
}

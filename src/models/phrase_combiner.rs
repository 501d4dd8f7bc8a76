use crate::models::{AlternativeDictionary, Phrase, Token};
use log::debug;
use std::collections::HashSet;

/// Merges runs of word tokens that spell a dictionary phrase into a single word token.
///
/// Each phrase gets its own left-to-right pass over the output of the previous phrase's pass,
/// in dictionary order. Within a phrase, words are compared case-insensitively and must be
/// separated by exactly one whitespace-only filler. The merged token keeps the original text,
/// spacing and case of everything it swallowed.
pub struct PhraseCombiner<'a> {
    dictionary: &'a AlternativeDictionary,
}

/// Half-open token index range of one phrase match.
type MatchRange = (usize, usize);

impl<'a> PhraseCombiner<'a> {
    pub fn new(dictionary: &'a AlternativeDictionary) -> Self {
        PhraseCombiner { dictionary }
    }

    pub fn combine(&self, mut tokens: Vec<Token>) -> Vec<Token> {
        // Lowercase text of every word token that is or was in the stream. A phrase with a word
        // missing from this set cannot match, so its pass is skipped.
        let mut known_words: HashSet<String> = tokens
            .iter()
            .filter(|token| token.is_word())
            .map(|token| token.text().to_lowercase())
            .collect();

        for phrase in self.dictionary.phrases() {
            if !phrase.words.iter().all(|word| known_words.contains(word)) {
                continue;
            }

            let matches = Self::find_phrase_matches(&tokens, phrase);
            if matches.is_empty() {
                continue;
            }

            tokens = Self::merge_matches(tokens, &matches);

            // Merged words can take part in later phrases
            for token in tokens.iter().filter(|token| token.is_word()) {
                known_words.insert(token.text().to_lowercase());
            }

            debug!(
                "Combined {} occurrence(s) of phrase {:?}",
                matches.len(),
                phrase.key
            );
        }

        tokens
    }

    /// Scans once, left to right. After a failed attempt the scan resumes at the token following
    /// the attempt's first token; after a match it resumes right after the match.
    fn find_phrase_matches(tokens: &[Token], phrase: &Phrase) -> Vec<MatchRange> {
        let mut matches = Vec::new();
        let mut start = 0;

        while start < tokens.len() {
            match Self::match_at(tokens, start, phrase) {
                Some(end) => {
                    matches.push((start, end));
                    start = end;
                }
                None => start += 1,
            }
        }

        matches
    }

    /// Returns the end of the match starting at `start`, if the phrase matches there.
    fn match_at(tokens: &[Token], start: usize, phrase: &Phrase) -> Option<usize> {
        let mut index = start;

        for (word_index, word) in phrase.words.iter().enumerate() {
            if word_index > 0 {
                if !tokens.get(index)?.is_blank_filler() {
                    return None;
                }
                index += 1;
            }

            let token = tokens.get(index)?;
            if !token.is_word() || token.text().to_lowercase() != *word {
                return None;
            }
            index += 1;
        }

        Some(index)
    }

    /// Replaces each matched range with one word token made of the range's original text.
    fn merge_matches(tokens: Vec<Token>, matches: &[MatchRange]) -> Vec<Token> {
        let mut merged = Vec::with_capacity(tokens.len());
        let mut pending = matches.iter().peekable();
        let mut phrase_text: Option<String> = None;

        for (index, token) in tokens.into_iter().enumerate() {
            let Some(&&(start, end)) = pending.peek() else {
                merged.push(token);
                continue;
            };

            if index < start {
                merged.push(token);
                continue;
            }

            phrase_text
                .get_or_insert_with(String::new)
                .push_str(token.text());

            if index + 1 == end {
                if let Some(text) = phrase_text.take() {
                    merged.push(Token::word(text));
                }
                pending.next();
            }
        }

        merged
    }
}

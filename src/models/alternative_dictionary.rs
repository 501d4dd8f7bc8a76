use crate::constants::PHRASE_WORD_SEPARATOR;
#[cfg(feature = "embed-bytes")]
use crate::models::AlternativeDictionaryPreprocessor;
use crate::types::{Alternative, DictionaryKey, PhraseWords};
use std::collections::HashMap;

/// A multi-word dictionary key, pre-split into its words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    pub key: DictionaryKey,
    pub words: PhraseWords,
}

/// Maps lowercase words and phrases to shorter alternatives.
///
/// Entries keep their insertion order; phrases are combined in that order. Once built the
/// dictionary is only ever read, so one instance can be shared by every tweet processed.
#[derive(Debug, Clone, Default)]
pub struct AlternativeDictionary {
    entries: Vec<(DictionaryKey, Vec<Alternative>)>,
    index: HashMap<DictionaryKey, usize>,
    phrases: Vec<Phrase>,
}

impl AlternativeDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// The default dictionary compiled into the crate.
    #[cfg(feature = "embed-bytes")]
    pub fn embedded() -> Result<Self, crate::Error> {
        AlternativeDictionaryPreprocessor::extract_embedded_dictionary()
    }

    /// Adds alternatives for `key`. The key is lowercased; alternatives for a key that is
    /// already present are appended to the existing ones.
    pub fn insert<K, I, A>(&mut self, key: K, alternatives: I)
    where
        K: AsRef<str>,
        I: IntoIterator<Item = A>,
        A: Into<Alternative>,
    {
        let key = key.as_ref().to_lowercase();

        if let Some(&entry_index) = self.index.get(&key) {
            self.entries[entry_index]
                .1
                .extend(alternatives.into_iter().map(Into::into));
            return;
        }

        if key.contains(PHRASE_WORD_SEPARATOR) {
            self.phrases.push(Phrase {
                key: key.clone(),
                words: key
                    .split(PHRASE_WORD_SEPARATOR)
                    .map(|word| word.to_string())
                    .collect(),
            });
        }

        self.index.insert(key.clone(), self.entries.len());
        self.entries
            .push((key, alternatives.into_iter().map(Into::into).collect()));
    }

    /// Looks up the alternatives for an already lowercased key.
    pub fn get(&self, key: &str) -> Option<&[Alternative]> {
        self.index
            .get(key)
            .map(|&entry_index| self.entries[entry_index].1.as_slice())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Multi-word keys, in insertion order.
    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Alternative])> {
        self.entries
            .iter()
            .map(|(key, alternatives)| (key.as_str(), alternatives.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, A> FromIterator<(K, Vec<A>)> for AlternativeDictionary
where
    K: AsRef<str>,
    A: Into<Alternative>,
{
    fn from_iter<T: IntoIterator<Item = (K, Vec<A>)>>(iter: T) -> Self {
        let mut dictionary = AlternativeDictionary::new();
        for (key, alternatives) in iter {
            dictionary.insert(key, alternatives);
        }
        dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_lowercased() {
        let dictionary: AlternativeDictionary = vec![("Thanks", vec!["thx"])].into_iter().collect();
        assert_eq!(dictionary.get("thanks"), Some(&["thx".to_string()][..]));
        assert!(dictionary.get("Thanks").is_none());
    }

    #[test]
    fn test_repeated_keys_merge() {
        let mut dictionary = AlternativeDictionary::new();
        dictionary.insert("please", vec!["pls"]);
        dictionary.insert("please", vec!["plz"]);
        assert_eq!(dictionary.len(), 1);
        assert_eq!(
            dictionary.get("please"),
            Some(&["pls".to_string(), "plz".to_string()][..])
        );
    }

    #[test]
    fn test_phrases_keep_insertion_order() {
        let dictionary: AlternativeDictionary = vec![
            ("the way", vec!["tw"]),
            ("you", vec!["u"]),
            ("by the way", vec!["btw"]),
        ]
        .into_iter()
        .collect();

        let keys: Vec<&str> = dictionary
            .phrases()
            .iter()
            .map(|phrase| phrase.key.as_str())
            .collect();
        assert_eq!(keys, vec!["the way", "by the way"]);
        assert_eq!(dictionary.phrases()[1].words, vec!["by", "the", "way"]);
    }
}

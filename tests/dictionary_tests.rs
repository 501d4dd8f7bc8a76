use test_utils::load_test_dictionary;
use twitmin::{AlternativeDictionaryPreprocessor, Error};

#[test]
fn test_loads_test_dictionary_from_path() {
    let dictionary = load_test_dictionary();

    assert_eq!(dictionary.len(), 11);
    assert_eq!(
        dictionary.get("thank you"),
        Some(&["thx".to_string(), "ty".to_string()][..])
    );

    let phrases: Vec<&str> = dictionary
        .phrases()
        .iter()
        .map(|phrase| phrase.key.as_str())
        .collect();
    assert_eq!(phrases, vec!["by the way", "thank you", "laughing out loud"]);
}

#[test]
fn test_missing_file_is_an_io_error() {
    let result = AlternativeDictionaryPreprocessor::read_dictionary_from_path(
        "tests/test_data_files/does_not_exist.csv",
    );
    assert!(matches!(result, Err(Error::IoError(_))));
}

#[test]
fn test_uneven_rows_are_a_parser_error() {
    let result = AlternativeDictionaryPreprocessor::read_dictionary_from_string(
        "Phrase,Alternatives\nyou,u,extra\n",
    );
    assert!(matches!(result, Err(Error::ParserError(_))));
}

#[cfg(feature = "embed-bytes")]
#[test]
fn test_embedded_dictionary_has_phrases_and_words() {
    let dictionary = twitmin::AlternativeDictionary::embedded().expect("embedded dictionary");

    assert!(dictionary.contains_key("by the way"));
    assert!(dictionary.contains_key("you"));
    assert!(dictionary
        .iter()
        .all(|(key, alternatives)| key == key.to_lowercase() && !alternatives.is_empty()));
}

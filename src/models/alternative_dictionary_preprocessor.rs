use crate::constants::{
    CSV_ALTERNATIVES_HEADER, CSV_ALTERNATIVES_SEPARATOR, CSV_PHRASE_HEADER,
};
use crate::models::AlternativeDictionary;
use crate::Error;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use log::warn;
use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;

#[cfg(feature = "embed-bytes")]
const COMPRESSED_ALTERNATIVES_BYTE_ARRAY: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/alternatives.csv.gz"));

pub struct AlternativeDictionaryPreprocessor {}

impl AlternativeDictionaryPreprocessor {
    /// Parses a CSV document with `Phrase` and `Alternatives` columns.
    ///
    /// `Alternatives` holds one or more replacements separated by `|`.
    pub fn read_dictionary_from_string(csv: &str) -> Result<AlternativeDictionary, Error> {
        let mut dictionary = AlternativeDictionary::new();

        // Use a cursor to simulate a file reader from the string
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(Cursor::new(csv));

        let headers = reader
            .headers()
            .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
            .clone();

        let phrase_column = headers
            .iter()
            .position(|h| h == CSV_PHRASE_HEADER)
            .ok_or_else(|| Error::ParserError(format!("Missing '{}' header", CSV_PHRASE_HEADER)))?;

        let alternatives_column = headers
            .iter()
            .position(|h| h == CSV_ALTERNATIVES_HEADER)
            .ok_or_else(|| {
                Error::ParserError(format!("Missing '{}' header", CSV_ALTERNATIVES_HEADER))
            })?;

        for record in reader.records() {
            let record =
                record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

            let phrase = record
                .get(phrase_column)
                .ok_or_else(|| Error::ParserError(format!("Missing '{}' field", CSV_PHRASE_HEADER)))?;

            let alternatives: Vec<String> = record
                .get(alternatives_column)
                .unwrap_or_default()
                .split(CSV_ALTERNATIVES_SEPARATOR)
                .map(|alternative| alternative.trim())
                .filter(|alternative| !alternative.is_empty())
                .map(|alternative| alternative.to_string())
                .collect();

            if phrase.is_empty() || alternatives.is_empty() {
                warn!("Skipping dictionary row without phrase or alternatives: {:?}", record);
                continue;
            }

            dictionary.insert(phrase, alternatives);
        }

        Ok(dictionary)
    }

    /// Decompress and parse a Gzip compressed dictionary CSV.
    pub fn extract_dictionary_from_bytes(read_bytes: &[u8]) -> Result<AlternativeDictionary, Error> {
        let mut decoder = GzDecoder::new(read_bytes);
        let mut decompressed_data = String::new();
        decoder.read_to_string(&mut decompressed_data)?;

        Self::read_dictionary_from_string(&decompressed_data)
    }

    /// Reads a dictionary CSV from disk. Paths ending in `.gz` are decompressed first.
    pub fn read_dictionary_from_path(path: impl AsRef<Path>) -> Result<AlternativeDictionary, Error> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;

        if path.extension().is_some_and(|extension| extension == "gz") {
            Self::extract_dictionary_from_bytes(&bytes)
        } else {
            let csv = String::from_utf8(bytes)
                .map_err(|e| Error::ParserError(format!("Dictionary is not UTF-8: {}", e)))?;
            Self::read_dictionary_from_string(&csv)
        }
    }

    /// Decodes the dictionary embedded at build time.
    #[cfg(feature = "embed-bytes")]
    pub fn extract_embedded_dictionary() -> Result<AlternativeDictionary, Error> {
        Self::extract_dictionary_from_bytes(COMPRESSED_ALTERNATIVES_BYTE_ARRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    const CSV: &str = "Phrase,Alternatives\nby the way,btw\nplease,pls|plz\nthanks, thx \n";

    #[test]
    fn test_reads_rows() {
        let dictionary = AlternativeDictionaryPreprocessor::read_dictionary_from_string(CSV).unwrap();
        assert_eq!(dictionary.len(), 3);
        assert_eq!(
            dictionary.get("please"),
            Some(&["pls".to_string(), "plz".to_string()][..])
        );
        assert_eq!(dictionary.get("thanks"), Some(&["thx".to_string()][..]));
        assert_eq!(dictionary.phrases().len(), 1);
    }

    #[test]
    fn test_skips_rows_without_alternatives() {
        let dictionary = AlternativeDictionaryPreprocessor::read_dictionary_from_string(
            "Phrase,Alternatives\nyou,\nare,r\n",
        )
        .unwrap();
        assert!(!dictionary.contains_key("you"));
        assert!(dictionary.contains_key("are"));
    }

    #[test]
    fn test_missing_header_is_an_error() {
        let result =
            AlternativeDictionaryPreprocessor::read_dictionary_from_string("Word,Short\nyou,u\n");
        assert!(matches!(result, Err(Error::ParserError(_))));
    }

    #[test]
    fn test_reads_gzip_bytes() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(CSV.as_bytes()).unwrap();
        let compressed = encoder.finish().unwrap();

        let dictionary =
            AlternativeDictionaryPreprocessor::extract_dictionary_from_bytes(&compressed).unwrap();
        assert_eq!(dictionary.get("by the way"), Some(&["btw".to_string()][..]));
    }

    #[cfg(feature = "embed-bytes")]
    #[test]
    fn test_embedded_dictionary_decodes() {
        let dictionary = AlternativeDictionaryPreprocessor::extract_embedded_dictionary().unwrap();
        assert!(dictionary.contains_key("by the way"));
        assert!(!dictionary.phrases().is_empty());
    }
}

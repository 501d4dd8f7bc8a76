use std::fs;
use std::path::{Path, PathBuf};

/// A tweet read from a test file, with the expectations written alongside it.
///
/// Lines starting with `EXPECTED_LENGTH:`, `EXPECTED_SHORTEST:` or `COMMENT:` are directives;
/// every other line belongs to the tweet.
#[derive(Debug, Clone)]
pub struct TweetFixture {
    pub path: PathBuf,
    pub tweet: String,
    pub expected_length: Option<usize>,
    pub expected_shortest: Option<String>,
}

impl TweetFixture {
    pub fn from_path(path: &Path) -> Self {
        let raw_text = fs::read_to_string(path).expect("Failed to read test file");

        let mut tweet_lines = Vec::new();
        let mut expected_length = None;
        let mut expected_shortest = None;

        for line in raw_text.lines() {
            let trimmed = line.trim_start();
            if let Some(value) = trimmed.strip_prefix("EXPECTED_LENGTH:") {
                expected_length = Some(
                    value
                        .trim()
                        .parse()
                        .expect("EXPECTED_LENGTH must be a number"),
                );
            } else if let Some(value) = trimmed.strip_prefix("EXPECTED_SHORTEST:") {
                expected_shortest = Some(value.trim().to_string());
            } else if !trimmed.starts_with("COMMENT:") {
                tweet_lines.push(line);
            }
        }

        TweetFixture {
            path: path.to_path_buf(),
            tweet: tweet_lines.join("\n"),
            expected_length,
            expected_shortest,
        }
    }
}

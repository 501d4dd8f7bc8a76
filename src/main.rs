use log::{error, info};
use std::io::{self, Read};
use twitmin::{
    resolve_tweet, AlternativeDictionary, AlternativeDictionaryPreprocessor, Error, Token,
};

fn main() {
    // Initialize the logger
    env_logger::init();

    let dictionary = match load_dictionary(std::env::args().nth(1)) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            error!("Failed to load dictionary: {}", e);
            std::process::exit(1);
        }
    };
    info!("Loaded {} dictionary entries", dictionary.len());

    // Read the input text from stdin
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("Failed to read from stdin: {}", e);
        std::process::exit(1);
    }

    let resolution = resolve_tweet(&input, &dictionary);

    for token in resolution.tokens() {
        match token {
            Token::Word { text, options } => {
                println!("word     {:?} -> {}", text, options.join(" | "));
            }
            Token::Filler { text } => println!("filler   {:?}", text),
            Token::Special { text, kind, weight } => {
                println!("{:<8} {:?} ({})", kind.as_str(), text, weight);
            }
        }
    }

    println!("Length: {}", resolution.normalized_length());
}

/// Loads the dictionary at `path`, or the embedded one when no path is given.
fn load_dictionary(path: Option<String>) -> Result<AlternativeDictionary, Error> {
    match path {
        Some(path) => AlternativeDictionaryPreprocessor::read_dictionary_from_path(path),
        None => embedded_dictionary(),
    }
}

#[cfg(feature = "embed-bytes")]
fn embedded_dictionary() -> Result<AlternativeDictionary, Error> {
    AlternativeDictionary::embedded()
}

#[cfg(not(feature = "embed-bytes"))]
fn embedded_dictionary() -> Result<AlternativeDictionary, Error> {
    Err(Error::Other(
        "No dictionary path given and no embedded dictionary available".to_string(),
    ))
}

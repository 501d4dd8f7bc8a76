use twitmin::{resolve_tweet, AlternativeDictionary};

fn main() {
    env_logger::init();

    let dictionary = AlternativeDictionary::embedded().unwrap();

    let text = "By the way, thank you for the link https://example.com/some/long/path #grateful";

    let resolution = resolve_tweet(text, &dictionary);

    println!("Resolved tweet \"{}\"", text);
    for token in resolution.tokens() {
        println!("{} {:?}", token, token.options());
    }
    println!("Shortest: {}", resolution.shortest_rendering());
    println!("Length: {}", resolution.normalized_length());
}

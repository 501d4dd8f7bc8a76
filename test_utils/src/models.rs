pub mod tweet_fixture;
pub use tweet_fixture::TweetFixture;

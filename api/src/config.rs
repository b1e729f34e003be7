use std::env;

#[derive(Clone)]
pub struct Config {
    /// Base URL of the Twitter API (overridable so tests can point at a fake)
    pub twitter_base_url: String,
    /// OAuth2 consumer key; absence surfaces at the first auth attempt
    pub consumer_key: Option<String>,
    /// OAuth2 consumer secret; absence surfaces at the first auth attempt
    pub consumer_secret: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            twitter_base_url: env::var("TWITTER_BASE_URL")
                .unwrap_or_else(|_| "https://api.twitter.com".to_string()),
            consumer_key: env::var("CONSUMER_KEY").ok(),
            consumer_secret: env::var("CONSUMER_SECRET").ok(),
        }
    }
}

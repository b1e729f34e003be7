//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{TimeZone, Utc};

use crate::domain::entities::Tweet;

/// Create an uncorrelated tweet with default values
pub fn test_tweet() -> Tweet {
    Tweet {
        id: 42,
        created_at: Utc.with_ymd_and_hms(2018, 10, 10, 20, 19, 24).unwrap(),
        text: "just setting up my twttr".to_string(),
        lang: "en".to_string(),
        link: None,
        comments: None,
    }
}

/// Create an uncorrelated tweet with a specific id
pub fn test_tweet_with_id(id: i64) -> Tweet {
    Tweet {
        id,
        ..test_tweet()
    }
}

/// Create a batch of uncorrelated tweets with descending ids starting at `first_id`
pub fn test_tweets(first_id: i64, count: usize) -> Vec<Tweet> {
    (0..count as i64)
        .map(|offset| test_tweet_with_id(first_id - offset))
        .collect()
}

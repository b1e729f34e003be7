//! Dashboard service
//!
//! Drives the fetch-correlate pipeline for one user: timeline first, then a
//! single reply search over the batch's id range, then the merge. Strictly
//! sequential; every request repeats the full fetch.

use std::sync::Arc;

use crate::domain::entities::{ReplyGroups, Tweet};
use crate::domain::ports::TwitterClient;
use crate::error::AppError;

/// Separator used when collapsing a tweet's replies into one string;
/// the leading space is part of the format.
const REPLY_SEPARATOR: &str = " ,";

/// Smallest and largest tweet id in a batch, bounding the reply search
pub fn min_max_id(tweets: &[Tweet]) -> (i64, i64) {
    let min = tweets.iter().map(|t| t.id).min().unwrap_or(0);
    let max = tweets.iter().map(|t| t.id).max().unwrap_or(0);
    (min, max)
}

/// Merge grouped replies into their parent tweets and derive permalinks.
///
/// Pure transform, no I/O. Order of the input batch is preserved. A tweet
/// gets `comments` only when its own id appears in `replies`; everything
/// else keeps `None`.
pub fn merge_replies(tweets: Vec<Tweet>, replies: &ReplyGroups, user: &str) -> Vec<Tweet> {
    tweets
        .into_iter()
        .map(|mut tweet| {
            tweet.link = Some(format!(
                "https://twitter.com/{}/status/{}",
                user, tweet.id
            ));
            if let Some(texts) = replies.get(&tweet.id) {
                tweet.comments = Some(texts.join(REPLY_SEPARATOR));
            }
            tweet
        })
        .collect()
}

/// Service producing the correlated tweet batch behind the dashboard feed
pub struct DashboardService<T>
where
    T: TwitterClient,
{
    twitter: Arc<T>,
}

impl<T> DashboardService<T>
where
    T: TwitterClient,
{
    pub fn new(twitter: Arc<T>) -> Self {
        Self { twitter }
    }

    /// Fetch up to `limit` recent tweets for `user` with their replies
    /// merged in and permalinks attached.
    pub async fn generate(&self, user: &str, limit: u32) -> Result<Vec<Tweet>, AppError> {
        let tweets = self.twitter.user_timeline(user, limit).await?;

        let (min_id, max_id) = min_max_id(&tweets);
        let replies = self.twitter.replies_to_user(user, min_id, max_id).await?;

        Ok(merge_replies(tweets, &replies, user))
    }
}

//! Twitter client port trait
//!
//! Defines the interface for interacting with the Twitter v1.1 API.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::domain::entities::{ReplyGroups, Tweet};
use crate::error::TwitterError;

/// Timestamp format used by the v1.1 API, e.g. "Wed Oct 10 20:19:24 +0000 2018"
pub const TWITTER_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Helper to deserialize Twitter's created_at string into a UTC timestamp
fn deserialize_created_at<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_str(&raw, TWITTER_DATE_FORMAT)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(serde::de::Error::custom)
}

/// One record from the user timeline endpoint.
///
/// Serde does the field projection here: everything the upstream sends
/// beyond these fields is dropped at the deserialization boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineStatus {
    pub id: i64,
    #[serde(deserialize_with = "deserialize_created_at")]
    pub created_at: DateTime<Utc>,
    pub text: String,
    pub lang: Option<String>,
}

impl From<TimelineStatus> for Tweet {
    fn from(status: TimelineStatus) -> Self {
        Tweet {
            id: status.id,
            created_at: status.created_at,
            text: status.text,
            lang: status.lang.unwrap_or_default(),
            link: None,
            comments: None,
        }
    }
}

/// One record from the search endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct SearchStatus {
    /// Id of the tweet this status replies to; null when it is not a reply
    pub in_reply_to_status_id: Option<i64>,
    pub text: String,
}

/// Envelope returned by the search endpoint
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub statuses: Vec<SearchStatus>,
}

/// Interface to the Twitter API.
///
/// Implementations own the bearer token lifecycle: credentials are
/// exchanged lazily on the first call and the token is reused afterwards.
#[async_trait]
pub trait TwitterClient: Send + Sync {
    /// Fetch the most recent tweets for a handle, trimmed to the fields
    /// the feed needs.
    ///
    /// Fails with `TwitterError::NotFound` when the handle is unknown
    /// (upstream 404) or when the timeline comes back empty - an empty
    /// timeline is a user-facing error, not a valid empty feed.
    async fn user_timeline(&self, user: &str, limit: u32) -> Result<Vec<Tweet>, TwitterError>;

    /// Fetch one page of replies addressed to the handle within the given
    /// id range, grouped by the tweet they reply to.
    ///
    /// An empty result is valid; "no replies found" is not an error here.
    async fn replies_to_user(
        &self,
        user: &str,
        since_id: i64,
        max_id: i64,
    ) -> Result<ReplyGroups, TwitterError>;
}

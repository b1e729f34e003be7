//! Tweet domain entity

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single tweet, trimmed to the fields the feed needs.
///
/// `id`, `created_at`, `text` and `lang` come straight from the timeline
/// fetch. `link` and `comments` are attached by the correlation step and
/// stay `None` until it runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tweet {
    /// Platform-assigned id, unique within one fetch
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub text: String,
    pub lang: String,
    /// Canonical permalink, always derived from the handle and id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Reply texts joined into a single string, absent when no one replied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

/// Reply texts grouped by the id of the tweet they reply to,
/// in the order the search returned them.
pub type ReplyGroups = HashMap<i64, Vec<String>>;

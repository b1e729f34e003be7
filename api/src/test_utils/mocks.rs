//! Mock implementation of the Twitter port
//!
//! An in-memory stand-in that can be configured per test and records the
//! calls it receives, mirroring the contract of the real adapter.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::entities::{ReplyGroups, Tweet};
use crate::domain::ports::TwitterClient;
use crate::error::TwitterError;

#[derive(Default)]
pub struct MockTwitterClient {
    /// Timelines by handle
    tweets: Arc<RwLock<HashMap<String, Vec<Tweet>>>>,
    /// Reply texts by parent tweet id
    replies: Arc<RwLock<ReplyGroups>>,
    should_fail: Arc<RwLock<bool>>,
    /// Recorded (user, limit) timeline calls
    pub timeline_calls: Arc<RwLock<Vec<(String, u32)>>>,
    /// Recorded (user, since_id, max_id) search calls
    pub search_calls: Arc<RwLock<Vec<(String, i64, i64)>>>,
}

impl MockTwitterClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let mock = Self::default();
        *mock.should_fail.write().unwrap() = true;
        mock
    }

    /// Configure a timeline for a handle
    pub fn with_tweets(self, user: &str, tweets: Vec<Tweet>) -> Self {
        self.tweets
            .write()
            .unwrap()
            .insert(user.to_string(), tweets);
        self
    }

    /// Configure reply texts for a parent tweet id
    pub fn with_replies(self, parent_id: i64, texts: Vec<&str>) -> Self {
        self.replies
            .write()
            .unwrap()
            .insert(parent_id, texts.into_iter().map(str::to_string).collect());
        self
    }
}

#[async_trait]
impl TwitterClient for MockTwitterClient {
    async fn user_timeline(&self, user: &str, limit: u32) -> Result<Vec<Tweet>, TwitterError> {
        self.timeline_calls
            .write()
            .unwrap()
            .push((user.to_string(), limit));

        if *self.should_fail.read().unwrap() {
            return Err(TwitterError::Api {
                status: 500,
                message: "Mock failure".to_string(),
            });
        }

        let tweets = self
            .tweets
            .read()
            .unwrap()
            .get(user)
            .cloned()
            .ok_or_else(|| TwitterError::NotFound(format!("No data found for {user}")))?;

        if tweets.is_empty() {
            return Err(TwitterError::NotFound(format!("{user} has no tweets")));
        }

        Ok(tweets.into_iter().take(limit as usize).collect())
    }

    async fn replies_to_user(
        &self,
        user: &str,
        since_id: i64,
        max_id: i64,
    ) -> Result<ReplyGroups, TwitterError> {
        self.search_calls
            .write()
            .unwrap()
            .push((user.to_string(), since_id, max_id));

        if *self.should_fail.read().unwrap() {
            return Err(TwitterError::Api {
                status: 500,
                message: "Mock failure".to_string(),
            });
        }

        // Like the real search, only replies within the id range come back
        let mut groups = ReplyGroups::new();
        for (parent_id, texts) in self.replies.read().unwrap().iter() {
            if (since_id..=max_id).contains(parent_id) {
                groups.insert(*parent_id, texts.clone());
            }
        }

        Ok(groups)
    }
}

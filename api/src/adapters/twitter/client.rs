//! Twitter API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::domain::entities::{ReplyGroups, Tweet};
use crate::domain::ports::{SearchResponse, TimelineStatus, TwitterClient};
use crate::error::TwitterError;

/// Fixed timeout applied to every outbound call (auth, timeline, search)
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// How many replies one search call may return, across the whole tweet batch
const REPLY_SEARCH_COUNT: u32 = 100;

/// Implementation of the Twitter API client
pub struct TwitterClientImpl {
    http: Client,
    base_url: String,
    credentials: Option<(String, String)>,
    /// Process-wide bearer token, exchanged lazily on first use and
    /// read-mostly afterwards
    bearer_token: RwLock<Option<String>>,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl TwitterClientImpl {
    pub fn new(config: &Config) -> Self {
        let credentials = config
            .consumer_key
            .clone()
            .zip(config.consumer_secret.clone());

        Self {
            http: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("failed to build HTTP client"),
            base_url: config.twitter_base_url.trim_end_matches('/').to_string(),
            credentials,
            bearer_token: RwLock::new(None),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Exchange the configured credentials for a bearer token via the
    /// client-credentials grant, caching the result for the lifetime of
    /// this client. Subsequent calls return the cached token without a
    /// network call.
    async fn bearer_token(&self) -> Result<String, TwitterError> {
        if let Some(token) = self.bearer_token.read().await.as_ref() {
            return Ok(token.clone());
        }

        let mut cached = self.bearer_token.write().await;
        // Another request may have won the exchange while we waited
        if let Some(token) = cached.as_ref() {
            return Ok(token.clone());
        }

        let (key, secret) = self
            .credentials
            .as_ref()
            .ok_or(TwitterError::MissingCredentials)?;

        let response = self
            .http
            .post(self.api_url("/oauth2/token"))
            .basic_auth(key, Some(secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 403 {
            return Err(TwitterError::InvalidCredentials);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TwitterError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| TwitterError::Deserialization(e.to_string()))?;

        *cached = Some(token.access_token.clone());
        Ok(token.access_token)
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        query: &[(&str, String)],
        user: &str,
    ) -> Result<T, TwitterError> {
        let token = self.bearer_token().await?;

        let response = self
            .http
            .get(self.api_url(path))
            .bearer_auth(token)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Err(TwitterError::NotFound(format!("No data found for {user}")));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TwitterError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| TwitterError::Deserialization(e.to_string()))
    }
}

#[async_trait]
impl TwitterClient for TwitterClientImpl {
    async fn user_timeline(&self, user: &str, limit: u32) -> Result<Vec<Tweet>, TwitterError> {
        let statuses: Vec<TimelineStatus> = self
            .get_json(
                "/1.1/statuses/user_timeline.json",
                &[
                    ("screen_name", user.to_string()),
                    ("count", limit.to_string()),
                    ("trim_user", "1".to_string()),
                    ("exclude_replies", "0".to_string()),
                ],
                user,
            )
            .await?;

        if statuses.is_empty() {
            return Err(TwitterError::NotFound(format!("{user} has no tweets")));
        }

        Ok(statuses.into_iter().map(Tweet::from).collect())
    }

    async fn replies_to_user(
        &self,
        user: &str,
        since_id: i64,
        max_id: i64,
    ) -> Result<ReplyGroups, TwitterError> {
        // One search across the whole batch instead of one call per tweet.
        // If an early tweet soaks up the whole page, later tweets can come
        // back without replies even though replies exist.
        let response: SearchResponse = self
            .get_json(
                "/1.1/search/tweets.json",
                &[
                    ("q", format!("to:{user}")),
                    ("since_id", since_id.to_string()),
                    ("max_id", max_id.to_string()),
                    ("count", REPLY_SEARCH_COUNT.to_string()),
                ],
                user,
            )
            .await?;

        let mut groups = ReplyGroups::new();
        for status in response.statuses {
            if let Some(parent_id) = status.in_reply_to_status_id {
                groups.entry(parent_id).or_default().push(status.text);
            }
        }

        Ok(groups)
    }
}

//! Feed renderer
//!
//! Builds an RSS channel from a correlated tweet batch and writes it into a
//! fresh temporary directory. The directory is handed back to the caller and
//! never cleaned up here; temp reaping is the operating system's problem.

use std::fs;
use std::path::PathBuf;

use rss::{ChannelBuilder, GuidBuilder, Item, ItemBuilder};

use crate::domain::entities::Tweet;
use crate::error::FeedError;

/// Name of the single file each render produces
pub const FEED_FILE_NAME: &str = "dashboard.xml";

fn feed_item(tweet: &Tweet) -> Item {
    let guid = GuidBuilder::default()
        .value(tweet.id.to_string())
        .permalink(false)
        .build();

    let mut item = ItemBuilder::default();
    item.title(tweet.text.clone())
        .link(tweet.link.clone())
        .pub_date(tweet.created_at.to_rfc2822())
        .guid(guid);

    if let Some(comments) = &tweet.comments {
        item.comments(comments.clone());
    }

    item.build()
}

/// Write the RSS document for `tweets` into a new temp directory and return
/// the directory path.
pub fn render_feed(user: &str, tweets: &[Tweet]) -> Result<PathBuf, FeedError> {
    let dir = tempfile::tempdir()?.keep();

    let channel = ChannelBuilder::default()
        .title(format!("Tweets for {user}"))
        .link("https://twitter.com".to_string())
        .description("List of tweets and replies for the user".to_string())
        .items(tweets.iter().map(feed_item).collect::<Vec<_>>())
        .build();

    fs::write(dir.join(FEED_FILE_NAME), channel.to_string())?;
    Ok(dir)
}

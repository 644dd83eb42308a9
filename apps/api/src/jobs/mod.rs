//! Job feed proxy — relays the public remote-jobs feed and the external
//! search service. No caching, no pagination logic, one attempt per request.

pub mod handlers;

use serde::{Deserialize, Serialize};

/// One job as shown on the landing-page ticker.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobItem {
    pub id: String,
    pub title: String,
    pub company: String,
    pub logo: Option<String>,
    /// ISO timestamp, relayed as-is from the feed.
    pub published_at: String,
}

/// Upstream feed envelope. Missing or malformed fields degrade to defaults
/// rather than failing the whole feed.
#[derive(Debug, Deserialize)]
pub struct JobsFeed {
    #[serde(default)]
    pub jobs: Vec<FeedJob>,
}

#[derive(Debug, Deserialize)]
pub struct FeedJob {
    pub id: FeedId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub company_logo_url: Option<String>,
    #[serde(default)]
    pub publication_date: String,
}

/// The feed serves numeric ids; tolerate strings too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum FeedId {
    Number(i64),
    Text(String),
}

impl FeedId {
    fn into_string(self) -> String {
        match self {
            FeedId::Number(n) => n.to_string(),
            FeedId::Text(s) => s,
        }
    }
}

/// Maps the upstream feed shape onto the ticker items the client renders.
pub fn map_feed(feed: JobsFeed) -> Vec<JobItem> {
    feed.jobs
        .into_iter()
        .map(|job| JobItem {
            id: job.id.into_string(),
            title: job.title,
            company: job.company_name,
            logo: job.company_logo_url,
            published_at: job.publication_date,
        })
        .collect()
}

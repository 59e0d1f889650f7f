//! YouTube Data API v3 video search.

use std::time::Duration;

use async_trait::async_trait;
use chatbot_common::AbsentCredential;
use serde::Deserialize;
use tracing::debug;

use super::{LookupClient, LookupResult};
use crate::error::check_base_url;
use crate::{ClientInitError, LookupError};

pub(crate) const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";
const WATCH_URL: &str = "https://www.youtube.com/watch?v=";
const CREDENTIAL_NAME: &str = "YOUTUBE_API_KEY";
/// The backend rejects larger pages.
const MAX_PAGE_SIZE: usize = 50;

#[derive(Clone)]
pub struct YouTubeConfig {
    /// Checked at call time so a missing key only disables video results.
    pub api_key: Option<String>,
    pub base_url: String,
    pub result_type: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for YouTubeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YouTubeConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("result_type", &self.result_type)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl YouTubeConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: YOUTUBE_API_BASE.to_string(),
            result_type: "video".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_result_type(mut self, result_type: impl Into<String>) -> Self {
        self.result_type = result_type.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug)]
pub struct YouTubeClient {
    config: YouTubeConfig,
    http: reqwest::Client,
}

impl YouTubeClient {
    pub fn new(config: YouTubeConfig) -> Result<Self, ClientInitError> {
        check_base_url(&config.base_url)?;
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientInitError::Http(e.to_string()))?;
        Ok(Self { config, http })
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl LookupClient for YouTubeClient {
    fn name(&self) -> &'static str {
        "youtube"
    }

    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<LookupResult>, LookupError> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| AbsentCredential::new(CREDENTIAL_NAME))?;

        let max_results = max_results.min(MAX_PAGE_SIZE);
        if max_results == 0 {
            return Ok(Vec::new());
        }

        debug!(max_results, "YouTube search request");

        let page_size = max_results.to_string();
        let response = self
            .http
            .get(self.search_url())
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("type", self.config.result_type.as_str()),
                ("maxResults", page_size.as_str()),
                ("key", key),
            ])
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(LookupError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let page: SearchPage = response
            .json()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))?;

        Ok(page.into_results(max_results))
    }
}

/// The fields of a search response this client reads. Everything else is
/// ignored; items are decoded one by one so a malformed item is skipped.
#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(default)]
    items: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: Option<ItemId>,
    snippet: Option<Snippet>,
}

#[derive(Debug, Deserialize)]
struct ItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: Option<String>,
}

impl SearchPage {
    fn into_results(self, max_results: usize) -> Vec<LookupResult> {
        let total = self.items.len();
        let results: Vec<LookupResult> = self
            .items
            .into_iter()
            .filter_map(|value| serde_json::from_value::<SearchItem>(value).ok())
            .filter_map(SearchItem::into_result)
            .take(max_results)
            .collect();

        if results.len() < total.min(max_results) {
            debug!(total, kept = results.len(), "skipped incomplete search items");
        }
        results
    }
}

impl SearchItem {
    fn into_result(self) -> Option<LookupResult> {
        let video_id = self.id?.video_id.filter(|id| !id.is_empty())?;
        let title = self.snippet?.title?;
        Some(LookupResult {
            title: decode_entities(&title),
            url: format!("{WATCH_URL}{video_id}"),
        })
    }
}

/// Undo the HTML escaping the search backend applies to titles.
fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    s.replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

//! Supplementary recommendation lookups.
//!
//! A lookup turns a free-text query into an ordered list of title/link
//! pairs. Results are produced fresh per query and never stored in the
//! session.

mod courses;
mod youtube;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::LookupError;

pub use courses::{CourseCatalog, Platform};
pub use youtube::{YouTubeClient, YouTubeConfig};

/// Default number of results requested per lookup.
pub const DEFAULT_MAX_RESULTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub title: String,
    pub url: String,
}

/// A keyword search backend.
#[async_trait]
pub trait LookupClient: Send + Sync {
    /// Short label used in log output.
    fn name(&self) -> &'static str;

    /// Return at most `max_results` results in backend relevance order.
    async fn search(&self, query: &str, max_results: usize)
        -> Result<Vec<LookupResult>, LookupError>;
}

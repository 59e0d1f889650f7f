//! Recommendation sources shown next to each answer: video search and
//! the course catalog.

use serde::{Deserialize, Serialize};

/// Video search backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub enabled: bool,
    pub base_url: String,
    /// Results requested per query (valid range: 1-50).
    pub max_results: u32,
    /// Backend result-type filter.
    pub result_type: String,
    /// Request timeout in seconds (valid range: 1-600).
    pub timeout_secs: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://www.googleapis.com/youtube/v3".into(),
            max_results: 5,
            result_type: "video".into(),
            timeout_secs: 30,
        }
    }
}

/// A learning platform the course catalog links to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlatformConfig {
    pub name: String,
    pub url: String,
}

impl PlatformConfig {
    fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Course recommendation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoursesConfig {
    pub enabled: bool,
    pub platforms: Vec<PlatformConfig>,
}

impl Default for CoursesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            platforms: vec![
                PlatformConfig::new("Coursera", "https://www.coursera.org"),
                PlatformConfig::new("Udemy", "https://www.udemy.com"),
                PlatformConfig::new("edX", "https://www.edx.org"),
            ],
        }
    }
}

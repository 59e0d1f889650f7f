//! Static course recommendations.

use async_trait::async_trait;

use super::{LookupClient, LookupResult};
use crate::LookupError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pub name: String,
    pub url: String,
}

impl Platform {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Deterministic placeholder course links, one per platform.
///
/// No network access and no failure mode: the same query always yields
/// the same list.
#[derive(Debug, Clone)]
pub struct CourseCatalog {
    platforms: Vec<Platform>,
}

impl CourseCatalog {
    pub fn new(platforms: Vec<Platform>) -> Self {
        Self { platforms }
    }

    pub fn recommend(&self, query: &str) -> Vec<LookupResult> {
        let query = query.trim();
        self.platforms
            .iter()
            .map(|p| LookupResult {
                title: format!("Learn {query} on {}", p.name),
                url: p.url.clone(),
            })
            .collect()
    }
}

impl Default for CourseCatalog {
    fn default() -> Self {
        Self::new(vec![
            Platform::new("Coursera", "https://www.coursera.org"),
            Platform::new("Udemy", "https://www.udemy.com"),
            Platform::new("edX", "https://www.edx.org"),
        ])
    }
}

#[async_trait]
impl LookupClient for CourseCatalog {
    fn name(&self) -> &'static str {
        "courses"
    }

    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<LookupResult>, LookupError> {
        let mut results = self.recommend(query);
        results.truncate(max_results);
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommend_is_deterministic() {
        let catalog = CourseCatalog::default();
        assert_eq!(catalog.recommend("Python"), catalog.recommend("Python"));
    }

    #[test]
    fn recommend_formats_titles_per_platform() {
        let results = CourseCatalog::default().recommend("Python");
        assert_eq!(
            results,
            vec![
                LookupResult {
                    title: "Learn Python on Coursera".into(),
                    url: "https://www.coursera.org".into(),
                },
                LookupResult {
                    title: "Learn Python on Udemy".into(),
                    url: "https://www.udemy.com".into(),
                },
                LookupResult {
                    title: "Learn Python on edX".into(),
                    url: "https://www.edx.org".into(),
                },
            ]
        );
    }

    #[test]
    fn recommend_trims_query() {
        let results = CourseCatalog::default().recommend("  Rust \n");
        assert_eq!(results[0].title, "Learn Rust on Coursera");
    }

    #[test]
    fn custom_platforms() {
        let catalog = CourseCatalog::new(vec![Platform::new("Khan", "https://khan.example")]);
        let results = catalog.recommend("algebra");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Learn algebra on Khan");
    }

    #[tokio::test]
    async fn search_respects_cap() {
        let catalog = CourseCatalog::default();
        let results = catalog.search("Go", 2).await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].title, "Learn Go on Udemy");

        let all = catalog.search("Go", 10).await.unwrap();
        assert_eq!(all.len(), 3);
    }
}

//! Configuration schema types for the chatbot.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the hosted backends expect.

mod model;
mod recommendations;
mod system;

pub use model::*;
pub use recommendations::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for the chatbot.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChatbotConfig {
    pub model: ModelConfig,
    pub search: SearchConfig,
    pub courses: CoursesConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: ChatbotConfig = toml::from_str(
            r#"
[model]
temperature = 0.2
history = "fresh"

[search]
enabled = false
"#,
        )
        .unwrap();

        assert_eq!(config.model.temperature, 0.2);
        assert_eq!(config.model.history, HistoryConfig::Fresh);
        assert_eq!(config.model.top_k, 50);
        assert!(!config.search.enabled);
        assert_eq!(config.search.max_results, 5);
        assert!(config.courses.enabled);
    }

    #[test]
    fn empty_toml_is_default() {
        let config: ChatbotConfig = toml::from_str("").unwrap();
        assert_eq!(config.model.name, "gemini-1.5-flash");
        assert_eq!(config.model.history, HistoryConfig::Replay);
        assert_eq!(config.logging.level, "chatbot=info");
    }

    #[test]
    fn course_platforms_can_be_replaced() {
        let config: ChatbotConfig = toml::from_str(
            r#"
[[courses.platforms]]
name = "Khan Academy"
url = "https://www.khanacademy.org"
"#,
        )
        .unwrap();

        assert_eq!(config.courses.platforms.len(), 1);
        assert_eq!(config.courses.platforms[0].name, "Khan Academy");
    }
}

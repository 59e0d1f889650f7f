//! Builds the turn pipeline from configuration and resolved credentials.

use std::sync::Arc;
use std::time::Duration;

use chatbot_ai::{
    ClientInitError, CourseCatalog, GeminiClient, GeminiConfig, HistoryMode, Platform,
    TurnPipeline, YouTubeClient, YouTubeConfig,
};
use chatbot_config::schema::HistoryConfig;
use chatbot_config::{ChatbotConfig, CredentialResolver, MODEL_API_KEY, SEARCH_API_KEY};
use tracing::{info, warn};

/// Surface-level switches layered over the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub fresh: bool,
    pub no_recommendations: bool,
}

/// Build the pipeline. Fails only when the model client cannot be built;
/// recommendation sources degrade to empty results instead.
pub fn build_pipeline(
    config: &ChatbotConfig,
    resolver: &CredentialResolver,
    overrides: Overrides,
) -> Result<TurnPipeline, ClientInitError> {
    let api_key = resolver.resolve(MODEL_API_KEY)?;
    let model = GeminiClient::new(gemini_config(config, api_key))?;
    info!(model = %config.model.name, "model client ready");

    let history = if overrides.fresh || config.model.history == HistoryConfig::Fresh {
        HistoryMode::Fresh
    } else {
        HistoryMode::Replay
    };

    let mut pipeline = TurnPipeline::new(Arc::new(model))
        .with_history_mode(history)
        .with_max_results(config.search.max_results as usize);

    if overrides.no_recommendations {
        return Ok(pipeline);
    }

    if config.search.enabled {
        let credential = resolver.lookup(SEARCH_API_KEY);
        if !credential.is_present() {
            warn!("{SEARCH_API_KEY} is not set; video recommendations will be empty");
        }
        let videos = YouTubeClient::new(youtube_config(config, credential.value))?;
        pipeline = pipeline.with_videos(Arc::new(videos));
    }

    if config.courses.enabled {
        let platforms = config
            .courses
            .platforms
            .iter()
            .map(|p| Platform::new(&p.name, &p.url))
            .collect();
        pipeline = pipeline.with_courses(Arc::new(CourseCatalog::new(platforms)));
    }

    Ok(pipeline)
}

fn gemini_config(config: &ChatbotConfig, api_key: String) -> GeminiConfig {
    let m = &config.model;
    GeminiConfig::new(api_key)
        .with_model(&m.name)
        .with_base_url(&m.base_url)
        .with_temperature(m.temperature)
        .with_top_p(m.top_p)
        .with_top_k(m.top_k)
        .with_max_output_tokens(m.max_output_tokens)
        .with_timeout(Duration::from_secs(u64::from(m.timeout_secs)))
}

fn youtube_config(config: &ChatbotConfig, api_key: Option<String>) -> YouTubeConfig {
    let s = &config.search;
    YouTubeConfig::new(api_key)
        .with_base_url(&s.base_url)
        .with_result_type(&s.result_type)
        .with_timeout(Duration::from_secs(u64::from(s.timeout_secs)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn resolver(pairs: &[(&str, &str)]) -> CredentialResolver {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CredentialResolver::new().with_layer(map)
    }

    #[test]
    fn missing_model_key_is_fatal() {
        let err = build_pipeline(&ChatbotConfig::default(), &resolver(&[]), Overrides::default())
            .err()
            .unwrap();
        assert!(matches!(err, ClientInitError::MissingCredential(ref c) if c.name == MODEL_API_KEY));
    }

    #[test]
    fn malformed_model_key_is_fatal() {
        let err = build_pipeline(
            &ChatbotConfig::default(),
            &resolver(&[(MODEL_API_KEY, "has space")]),
            Overrides::default(),
        )
        .err()
        .unwrap();
        assert!(matches!(err, ClientInitError::InvalidApiKey(_)));
    }

    #[test]
    fn missing_search_key_is_not_fatal() {
        let pipeline = build_pipeline(
            &ChatbotConfig::default(),
            &resolver(&[(MODEL_API_KEY, "model-key")]),
            Overrides::default(),
        );
        assert!(pipeline.is_ok());
    }

    #[test]
    fn history_mode_follows_config_and_flag() {
        let keys = resolver(&[(MODEL_API_KEY, "model-key")]);

        let pipeline = build_pipeline(&ChatbotConfig::default(), &keys, Overrides::default()).unwrap();
        assert_eq!(pipeline.history_mode(), HistoryMode::Replay);

        let overrides = Overrides {
            fresh: true,
            ..Overrides::default()
        };
        let pipeline = build_pipeline(&ChatbotConfig::default(), &keys, overrides).unwrap();
        assert_eq!(pipeline.history_mode(), HistoryMode::Fresh);

        let mut config = ChatbotConfig::default();
        config.model.history = HistoryConfig::Fresh;
        let pipeline = build_pipeline(&config, &keys, Overrides::default()).unwrap();
        assert_eq!(pipeline.history_mode(), HistoryMode::Fresh);
    }

    #[test]
    fn gemini_config_carries_generation_settings() {
        let mut config = ChatbotConfig::default();
        config.model.temperature = 0.1;
        config.model.top_k = 8;
        config.model.timeout_secs = 9;

        let gemini = gemini_config(&config, "k".into());
        assert_eq!(gemini.temperature, 0.1);
        assert_eq!(gemini.top_k, 8);
        assert_eq!(gemini.top_p, 0.95);
        assert_eq!(gemini.max_output_tokens, 1000);
        assert_eq!(gemini.timeout, Duration::from_secs(9));
    }
}

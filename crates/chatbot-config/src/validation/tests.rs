//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = ChatbotConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_temperature_out_of_range() {
    let mut config = ChatbotConfig::default();
    config.model.temperature = 2.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.temperature"));
}

#[test]
fn catches_negative_top_p() {
    let mut config = ChatbotConfig::default();
    config.model.top_p = -0.1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.top_p"));
}

#[test]
fn catches_nan_top_p() {
    let mut config = ChatbotConfig::default();
    config.model.top_p = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.top_p"));
}

#[test]
fn catches_zero_top_k() {
    let mut config = ChatbotConfig::default();
    config.model.top_k = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.top_k"));
}

#[test]
fn catches_zero_max_output_tokens() {
    let mut config = ChatbotConfig::default();
    config.model.max_output_tokens = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.max_output_tokens"));
}

#[test]
fn catches_empty_model_name() {
    let mut config = ChatbotConfig::default();
    config.model.name = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.name"));
}

#[test]
fn catches_non_http_base_url() {
    let mut config = ChatbotConfig::default();
    config.search.base_url = "ftp://example.com".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("search.base_url"));
}

#[test]
fn catches_search_max_results_too_large() {
    let mut config = ChatbotConfig::default();
    config.search.max_results = 51;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("search.max_results"));
}

#[test]
fn catches_enabled_courses_without_platforms() {
    let mut config = ChatbotConfig::default();
    config.courses.platforms.clear();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("courses.platforms"));
}

#[test]
fn disabled_courses_may_have_no_platforms() {
    let mut config = ChatbotConfig::default();
    config.courses.enabled = false;
    config.courses.platforms.clear();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_bad_platform_url() {
    let mut config = ChatbotConfig::default();
    config.courses.platforms[1].url = "udemy.com".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("courses.platforms[1].url"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = ChatbotConfig::default();
    config.model.top_k = 0;
    config.search.max_results = 0;
    config.logging.level = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.top_k"));
    assert!(err.contains("search.max_results"));
    assert!(err.contains("logging.level"));
}

#[test]
fn catches_model_base_url_without_host() {
    let mut config = ChatbotConfig::default();
    config.model.base_url = "https://".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.base_url"));
}

#[test]
fn catches_search_base_url_with_space_in_host() {
    let mut config = ChatbotConfig::default();
    config.search.base_url = "http://exa mple.com/yt v3".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("search.base_url"));
}

#[test]
fn catches_platform_url_with_broken_ipv6_host() {
    let mut config = ChatbotConfig::default();
    config.courses.platforms[0].url = "https://[::bad".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("courses.platforms[0].url"));
}

#[test]
fn catches_url_without_http_scheme() {
    let mut config = ChatbotConfig::default();
    config.model.base_url = "mailto:ops@example.com".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.base_url"));
}

#[test]
fn accepts_local_http_base_urls() {
    let mut config = ChatbotConfig::default();
    config.model.base_url = "http://127.0.0.1:8080/v1beta/models".into();
    config.search.base_url = "http://localhost:9000".into();
    assert!(validate(&config).is_ok());
}

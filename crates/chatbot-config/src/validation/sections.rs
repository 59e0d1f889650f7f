//! Per-section validators.

use crate::schema::ChatbotConfig;

use super::helpers::{validate_http_url, validate_non_empty, validate_range, validate_range_f64};

pub(super) fn validate_model(errors: &mut Vec<String>, config: &ChatbotConfig) {
    let m = &config.model;
    validate_non_empty(errors, "model.name", &m.name);
    validate_http_url(errors, "model.base_url", &m.base_url);
    validate_range_f64(errors, "model.temperature", m.temperature, 0.0, 2.0);
    validate_range_f64(errors, "model.top_p", m.top_p, 0.0, 1.0);
    validate_range(errors, "model.top_k", m.top_k, 1, 1000);
    validate_range(errors, "model.max_output_tokens", m.max_output_tokens, 1, 8192);
    validate_range(errors, "model.timeout_secs", m.timeout_secs, 1, 600);
}

pub(super) fn validate_search(errors: &mut Vec<String>, config: &ChatbotConfig) {
    let s = &config.search;
    validate_http_url(errors, "search.base_url", &s.base_url);
    validate_range(errors, "search.max_results", s.max_results, 1, 50);
    validate_non_empty(errors, "search.result_type", &s.result_type);
    validate_range(errors, "search.timeout_secs", s.timeout_secs, 1, 600);
}

pub(super) fn validate_courses(errors: &mut Vec<String>, config: &ChatbotConfig) {
    let c = &config.courses;
    if c.enabled && c.platforms.is_empty() {
        errors.push("courses.platforms must not be empty when courses are enabled".into());
    }
    for (i, platform) in c.platforms.iter().enumerate() {
        validate_non_empty(errors, &format!("courses.platforms[{i}].name"), &platform.name);
        validate_http_url(errors, &format!("courses.platforms[{i}].url"), &platform.url);
    }
}

pub(super) fn validate_logging(errors: &mut Vec<String>, config: &ChatbotConfig) {
    validate_non_empty(errors, "logging.level", &config.logging.level);
}

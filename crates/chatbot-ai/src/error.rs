//! Error types for client construction, model calls and lookups.

use chatbot_common::AbsentCredential;

/// A client could not be built. Fatal to opening a session.
#[derive(Debug, thiserror::Error)]
pub enum ClientInitError {
    #[error(transparent)]
    MissingCredential(#[from] AbsentCredential),

    #[error("invalid API key: {0}")]
    InvalidApiKey(String),

    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Http(String),
}

/// A single model call failed. Recovered per turn by the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("network error: {0}")]
    Network(String),

    #[error("rate limited")]
    RateLimited,

    #[error("API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    #[error("prompt blocked: {0}")]
    Blocked(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("model returned no text")]
    EmptyResponse,
}

/// A lookup call failed. Recovered as an empty result list.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error(transparent)]
    MissingCredential(#[from] AbsentCredential),

    #[error("network error: {0}")]
    Network(String),

    #[error("API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    #[error("parse error: {0}")]
    Parse(String),
}

/// Reject a base URL that is not an absolute http(s) URL with a host.
pub(crate) fn check_base_url(raw: &str) -> Result<(), ClientInitError> {
    let invalid = |reason: String| ClientInitError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };
    let url = url::Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".into()));
    }
    Ok(())
}

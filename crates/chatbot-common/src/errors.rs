use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// A named credential that no configuration layer could supply.
///
/// Absence is an ordinary outcome; callers check for it before building a
/// client that needs the value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("credential {name} is not set in secrets or environment")]
pub struct AbsentCredential {
    pub name: String,
}

impl AbsentCredential {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChatbotError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A backend client could not be built. The original error stays
    /// reachable through `source()`.
    #[error("client init error: {0}")]
    ClientInit(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ChatbotError {
    pub fn client_init(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::ClientInit(Box::new(err))
    }
}

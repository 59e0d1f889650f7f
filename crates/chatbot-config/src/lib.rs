//! Chatbot configuration system.
//!
//! Provides TOML-based configuration for the model backend, the video
//! search backend, course recommendations and logging, plus the secrets
//! store and credential resolution. All config sections use sensible
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use chatbot_config::{load_config, CredentialResolver, SecretsStore};
//!
//! let config = load_config(None).expect("failed to load config");
//! let secrets = SecretsStore::load_default().expect("failed to read secrets");
//! let resolver = CredentialResolver::standard(secrets);
//! let key = resolver.resolve("GEMINI_API_KEY");
//! println!("model = {}, key present = {}", config.model.name, key.is_ok());
//! ```

pub mod credentials;
pub mod schema;
pub mod secrets;
pub mod toml_loader;
pub mod validation;

pub use credentials::{
    Credential, CredentialResolver, ProcessEnv, SecretLayer, MODEL_API_KEY, SEARCH_API_KEY,
};
pub use schema::ChatbotConfig;
pub use secrets::SecretsStore;

use std::path::Path;

use chatbot_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default path is created with a documented template if missing. An
/// explicit path must exist. The result is validated either way.
pub fn load_config(path: Option<&Path>) -> Result<ChatbotConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            toml_loader::load_from_path(path)?
        }
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_with_missing_explicit_path_is_file_not_found() {
        let err = load_config(Some(Path::new("/tmp/nonexistent_chatbot_dir/config.toml")))
            .unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_config_rejects_out_of_range_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[model]\ntop_p = 3.0\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("model.top_p"));
    }
}

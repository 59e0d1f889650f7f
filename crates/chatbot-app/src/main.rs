mod bootstrap;
mod cli;
mod render;
mod repl;

use std::process::ExitCode;

use chatbot_common::ChatbotError;
use chatbot_config::{ChatbotConfig, CredentialResolver, SecretsStore};
use tracing_subscriber::EnvFilter;

use crate::bootstrap::Overrides;
use crate::repl::ReplOptions;

const DEFAULT_LOG_FILTER: &str = "chatbot=info";

/// `RUST_LOG` wins; otherwise the CLI flag, then the config file.
fn init_logging(directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: cli::Args, config: ChatbotConfig) -> Result<(), ChatbotError> {
    let secrets = match args.secrets {
        Some(ref path) => SecretsStore::load(path)?,
        None => SecretsStore::load_default()?,
    };
    let resolver = CredentialResolver::standard(secrets);

    let overrides = Overrides {
        fresh: args.fresh,
        no_recommendations: args.no_recommendations,
    };
    let pipeline = bootstrap::build_pipeline(&config, &resolver, overrides)
        .map_err(ChatbotError::client_init)?;

    let options = ReplOptions {
        json: args.json,
        recommendations: !args.no_recommendations
            && (config.search.enabled || config.courses.enabled),
    };

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    repl::run(&pipeline, stdin, tokio::io::stdout(), options).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Existing environment variables take precedence over .env entries.
    let dotenv = dotenvy::dotenv();

    let args = cli::parse();
    let config = chatbot_config::load_config(args.config.as_deref());

    let directive = args
        .log_level
        .clone()
        .or_else(|| config.as_ref().ok().map(|c| c.logging.level.clone()))
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_logging(&directive);

    tracing::info!("chatbot v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Ok(path) = dotenv {
        tracing::debug!("loaded environment from {}", path.display());
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("config load failed: {e}");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(args, config).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

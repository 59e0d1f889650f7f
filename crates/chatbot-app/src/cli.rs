use std::path::PathBuf;

use clap::Parser;

/// Terminal chatbot backed by a hosted language model, with video and
/// course recommendations for every question.
#[derive(Parser, Debug)]
#[command(name = "chatbot", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Secrets file path override.
    #[arg(long)]
    pub secrets: Option<PathBuf>,

    /// Log filter override (e.g. `chatbot=debug`). `RUST_LOG` takes precedence.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Send each question without the earlier conversation.
    #[arg(long)]
    pub fresh: bool,

    /// Skip video and course recommendations.
    #[arg(long)]
    pub no_recommendations: bool,

    /// Print each turn as a JSON line instead of formatted text.
    #[arg(long)]
    pub json: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["chatbot"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.secrets.is_none());
        assert!(args.log_level.is_none());
        assert!(!args.fresh);
        assert!(!args.no_recommendations);
        assert!(!args.json);
    }

    #[test]
    fn all_flags() {
        let args = Args::try_parse_from([
            "chatbot",
            "--config",
            "/tmp/c.toml",
            "--secrets",
            "/tmp/s.toml",
            "--log-level",
            "chatbot=debug",
            "--fresh",
            "--no-recommendations",
            "--json",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/c.toml")));
        assert_eq!(args.secrets, Some(PathBuf::from("/tmp/s.toml")));
        assert_eq!(args.log_level.as_deref(), Some("chatbot=debug"));
        assert!(args.fresh);
        assert!(args.no_recommendations);
        assert!(args.json);
    }

    #[test]
    fn rejects_unknown_flag() {
        assert!(Args::try_parse_from(["chatbot", "--stream"]).is_err());
    }
}

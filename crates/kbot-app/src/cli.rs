//! CLI argument definitions for the kbot console.

use clap::Parser;
use std::path::PathBuf;

/// kbot — knowledge-base search bot engine with a local turn console.
#[derive(Parser, Debug)]
#[command(name = "kbot", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Conversation id used for console turns.
    #[arg(long = "conversation", default_value = "local-console")]
    pub conversation: String,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > KBOT_CONFIG env var > ./kbot.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("KBOT_CONFIG") {
            return PathBuf::from(p);
        }
        PathBuf::from("kbot.toml")
    }
}

//! kbot application binary - composition root.
//!
//! Ties the workspace crates together:
//! 1. Load and validate configuration from TOML (missing collaborator
//!    settings are startup-fatal)
//! 2. Build the HTTP search client and query executor
//! 3. Wire a `TurnRouter` with an in-process conversation state store
//! 4. Run a line-oriented console: each stdin line is one message turn,
//!    composed payloads are printed as JSON lines
//!
//! The console stands in for a channel transport during development; real
//! channels adapt `InboundEvent`/`ResponsePayload` at their own boundary.

mod cli;

use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use kbot_core::{InboundEvent, KbotConfig};
use kbot_engine::{CancelSignal, ConversationStateStore, ResponseComposer, TurnRouter};
use kbot_search::{HttpSearchClient, SearchQueryExecutor};

use cli::CliArgs;

/// The console's stand-in id for the bot on this "channel".
const CONSOLE_BOT_ID: &str = "kbot";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = CliArgs::parse();
    let config_path = args.resolve_config_path();

    let config = KbotConfig::load(&config_path)?;
    config.validate()?;
    info!(index = %config.search.index, "search service configured");

    let client = Arc::new(HttpSearchClient::from_config(&config.search)?);
    let executor = SearchQueryExecutor::new(client);
    let store = Arc::new(ConversationStateStore::new());
    let router = TurnRouter::new(executor, ResponseComposer::new(), store);

    info!(conversation = %args.conversation, "console ready; type a query");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let event = InboundEvent::message(line, &args.conversation, CONSOLE_BOT_ID);
        let payloads = router.handle_turn(&event, &CancelSignal::new()).await;
        for payload in payloads {
            println!("{}", serde_json::to_string(&payload)?);
        }
    }

    Ok(())
}

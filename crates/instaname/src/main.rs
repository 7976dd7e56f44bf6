//! Instaname command-line tool.
//!
//! Reads `GEMINI_API_KEY` from the environment (or a `.env` file) and talks to
//! Gemini. See `instaname --help` for commands.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use instaname::{InstanameConfig, LogFormat, NameOrchestrator, init_tracing};
use std::process::ExitCode;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    })?;

    let mut config = InstanameConfig::load(cli.config.as_deref())?;
    if let Some(model) = cli.model {
        config = config.with_model(model);
    }
    info!(model = %config.model(), "Starting instaname");

    let orchestrator = NameOrchestrator::new(config.gemini_client()?);

    match cli.command {
        Commands::Generate {
            description,
            exclude,
            json,
        } => cli::handle_generate_command(&orchestrator, description, exclude, json).await,
        Commands::Session => {
            cli::run_session(&orchestrator).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "person_cli=info,person_api=info,person_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Run CLI
    run(cli).await
}

async fn run(cli: Cli) -> Result<()> {
    let mut settings = person_api::Settings::load()?;

    // Flags win over the config file and PERSON_APP_* variables
    if let Some(provider) = cli.provider {
        settings.provider = provider;
    }
    if cli.data_file.is_some() {
        settings.data_file = cli.data_file;
    }
    if cli.database_url.is_some() {
        settings.database_url = cli.database_url;
    }

    tracing::debug!("Using {} provider", settings.provider);

    commands::execute(cli.command, settings, cli.json).await
}

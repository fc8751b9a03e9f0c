use clap::{Parser, Subcommand};
use person_core::ProviderType;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "person-app")]
#[command(about = "Person record lookup service", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data provider (csv, db)
    #[arg(long, env = "PERSON_APP_PROVIDER")]
    pub provider: Option<ProviderType>,

    /// Delimited text file replacing the bundled data
    #[arg(long, env = "PERSON_APP_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Database URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Print records as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start API server
    Serve {
        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,
    },

    /// List all persons
    List,

    /// Show a person by ID
    Get {
        /// Person ID
        id: i64,
    },

    /// List persons with a color label
    Color {
        /// Color label, e.g. "blau"
        color: String,
    },

    /// Initialize database
    InitDb,
}

//! Study Buddy CLI.
//!
//! Runs the interactive menu by default, or an HTTP server with `serve`.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use study_buddy::cli;
use study_buddy::config::ServerConfig;
use study_buddy::roster::Roster;
use study_buddy::server;
use study_buddy::types::AppState;

#[derive(Parser)]
#[command(name = "study-buddy")]
#[command(about = "Match students by course and availability, and book study sessions")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive text menu (default).
    Menu,

    /// Serve the roster over HTTP.
    Serve {
        /// JSON config file with `address` and `port`
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn init_tracing(default_filter: &str) {
    // stderr keeps the menu's stdout free of log lines
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    match args.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            init_tracing("warn");
            let mut roster = Roster::new();
            let stdin = io::stdin();
            cli::run_menu(&mut roster, stdin.lock(), io::stdout())?;
        }
        Commands::Serve { config } => {
            init_tracing("info");
            let config = match config {
                Some(path) => ServerConfig::load_from_file(&path)?,
                None => ServerConfig::default(),
            };
            info!("Starting server with {:?}", config);
            server::run(Arc::new(AppState::new(config))).await?;
        }
    }

    Ok(())
}

//! Starboard CLI - harvest star-ranked repositories and serve discovery
//! slices over the result.

mod commands;
mod config;

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "starboard")]
#[command(version)]
#[command(about = "A star-ranked repository harvester and discovery server")]
#[command(
    long_about = "Starboard walks the GitHub search API across star-count windows to \
collect every repository of a language above a star floor, writes the ranked \
result as a JSON snapshot, and serves discovery endpoints over it."
)]
#[command(after_long_help = r#"EXAMPLES
    Harvest a fresh snapshot:
        $ starboard harvest --output repos.json

    Harvest with a higher star floor:
        $ starboard harvest --min-stars 1000

    Serve discovery endpoints over an existing snapshot:
        $ starboard serve --snapshot repos.json --addr 127.0.0.1:8080

CONFIGURATION
    Starboard reads configuration from:
      1. ~/.config/starboard/config.toml (or $XDG_CONFIG_HOME/starboard/config.toml)
      2. ./starboard.toml
      3. Environment variables (STARBOARD_* prefix)
      4. .env file in current directory

ENVIRONMENT VARIABLES
    STARBOARD_GITHUB_TOKEN    GitHub personal access token
    GITHUB_TOKEN              Fallback token variable
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Harvest repositories into a snapshot file
    Harvest {
        #[command(flatten)]
        opts: HarvestOptions,
    },
    /// Serve discovery endpoints over an existing snapshot
    Serve {
        #[command(flatten)]
        opts: ServeOptions,
    },
}

/// Options for the harvest subcommand.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct HarvestOptions {
    /// Language to search for (default from config or "rust")
    #[arg(short, long)]
    pub(crate) language: Option<String>,

    /// Star-count floor (default from config or 200)
    #[arg(long)]
    pub(crate) min_stars: Option<u64>,

    /// Star-count ceiling to start from (default from config or 1000000)
    #[arg(long)]
    pub(crate) max_stars: Option<u64>,

    /// Safety ceiling on harvest iterations (default from config or 200)
    #[arg(long)]
    pub(crate) max_iterations: Option<u32>,

    /// Snapshot file to write (default from config or "repos.json")
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,
}

/// Options for the serve subcommand.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ServeOptions {
    /// Address to bind (default from config or 127.0.0.1:8080)
    #[arg(long)]
    pub(crate) addr: Option<SocketAddr>,

    /// Snapshot file to load (default from config or "repos.json")
    #[arg(short, long)]
    pub(crate) snapshot: Option<PathBuf>,

    /// Entries per head slice and per random sample (default from config or 16)
    #[arg(long)]
    pub(crate) slice_size: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("starboard=info,starboard_cli=info"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    // Load configuration (config files -> env vars -> defaults)
    let config = config::Config::load();

    let cli = Cli::parse();

    match cli.command {
        Commands::Harvest { opts } => {
            commands::harvest::run(&config, &opts).await?;
        }
        Commands::Serve { opts } => {
            commands::serve::run(&config, &opts).await?;
        }
    }

    Ok(())
}

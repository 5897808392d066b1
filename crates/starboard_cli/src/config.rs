//! Configuration file support for starboard.
//!
//! Configuration is loaded with the following precedence (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (prefixed with `STARBOARD_`, e.g., `STARBOARD_GITHUB_TOKEN`)
//! 3. Config file (~/.config/starboard/config.toml or ./starboard.toml)
//! 4. Built-in defaults
//!
//! Example config file:
//! ```toml
//! [github]
//! token = "ghp_..."  # or use STARBOARD_GITHUB_TOKEN / GITHUB_TOKEN env vars
//!
//! [harvest]
//! language = "rust"
//! min_stars = 200
//! max_stars = 1000000
//! per_page = 100
//! max_iterations = 200
//! output = "repos.json"
//!
//! [serve]
//! addr = "127.0.0.1:8080"
//! snapshot = "repos.json"
//! slice_size = 16
//! ```

use std::path::PathBuf;

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GitHub configuration.
    pub github: GitHubConfig,
    /// Harvest parameters.
    pub harvest: HarvestConfig,
    /// Serving parameters.
    pub serve: ServeConfig,
}

/// GitHub configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// GitHub API token.
    /// Can also be set via the STARBOARD_GITHUB_TOKEN or GITHUB_TOKEN
    /// environment variables.
    pub token: Option<String>,
}

/// Harvest parameters.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HarvestConfig {
    /// Language qualifier for the search query.
    pub language: String,
    /// Star-count floor of the harvested range.
    pub min_stars: u64,
    /// Star-count ceiling the first window starts from.
    pub max_stars: u64,
    /// Page size for search requests.
    pub per_page: u32,
    /// Safety ceiling on harvest iterations.
    pub max_iterations: u32,
    /// Snapshot file the harvest writes.
    pub output: PathBuf,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            language: "rust".to_string(),
            min_stars: 200,
            max_stars: 1_000_000,
            per_page: 100,
            max_iterations: 200,
            output: PathBuf::from("repos.json"),
        }
    }
}

/// Serving parameters.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Address the server binds.
    pub addr: String,
    /// Snapshot file the server loads.
    pub snapshot: PathBuf,
    /// Entries per head slice and per random sample.
    pub slice_size: usize,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:8080".to_string(),
            snapshot: PathBuf::from("repos.json"),
            slice_size: 16,
        }
    }
}

impl Config {
    /// Load configuration using the config crate's layered approach.
    ///
    /// Sources are loaded in order (later sources override earlier):
    /// 1. Built-in defaults
    /// 2. XDG config file (~/.config/starboard/config.toml)
    /// 3. Local config file (./starboard.toml)
    /// 4. Environment variables with STARBOARD_ prefix
    pub fn load() -> Self {
        let mut builder = ConfigBuilder::builder();

        // Add XDG config file if it exists
        if let Some(proj_dirs) = ProjectDirs::from("", "", "starboard") {
            let xdg_config = proj_dirs.config_dir().join("config.toml");
            if xdg_config.exists() {
                tracing::debug!("loading config from {:?}", xdg_config);
                builder = builder.add_source(
                    File::from(xdg_config)
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }

        // Add local config file (higher priority than XDG)
        let local_config = PathBuf::from("starboard.toml");
        if local_config.exists() {
            tracing::debug!("loading config from ./starboard.toml");
            builder = builder.add_source(
                File::from(local_config)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        // Add STARBOARD_ prefixed environment variables
        // e.g., STARBOARD_GITHUB_TOKEN -> github.token
        builder = builder.add_source(
            Environment::with_prefix("STARBOARD")
                .separator("_")
                .try_parsing(true),
        );

        match builder.build() {
            Ok(settings) => match settings.try_deserialize::<Config>() {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("failed to deserialize config: {}", e);
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!("failed to build config: {}", e);
                Config::default()
            }
        }
    }

    /// Get the GitHub token, falling back to the conventional GITHUB_TOKEN
    /// environment variable.
    pub fn github_token(&self) -> Option<String> {
        self.github
            .token
            .clone()
            .or_else(|| std::env::var("GITHUB_TOKEN").ok())
    }
}

//! CLI command definitions and dispatch.

pub mod config;
pub mod token;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use launchpad_core::config::AppConfig;
use launchpad_core::error::AppError;

/// Launchpad session token and configuration tools
#[derive(Debug, Parser)]
#[command(name = "launchpad", version, about, long_about = None)]
pub struct Cli {
    /// Path to a configuration file (defaults to config/default + config/$LAUNCHPAD_ENV)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Issue and inspect session tokens
    Token(token::TokenArgs),
    /// Configuration checks
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = load_config(self.config.as_deref())?;

        match &self.command {
            Commands::Token(args) => token::execute(args, &config, self.format).await,
            Commands::Config(args) => config::execute(args, &config, self.format),
        }
    }
}

/// Helper: load configuration from an explicit file or the default layout
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig, AppError> {
    tracing::debug!(path = ?config_path, "Loading configuration");
    match config_path {
        Some(path) => AppConfig::from_file(path),
        None => {
            let env = std::env::var("LAUNCHPAD_ENV").unwrap_or_else(|_| "development".to_string());
            AppConfig::load(&env)
        }
    }
}

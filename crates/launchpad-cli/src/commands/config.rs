//! Configuration CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::output::{self, OutputFormat};
use launchpad_core::config::AppConfig;
use launchpad_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Validate configuration and print the effective session settings
    Check,
}

/// Session settings shown by `config check`. The secret is never printed.
#[derive(Debug, Serialize)]
struct SessionSummary<'a> {
    bind_address: String,
    cookie_name: &'a str,
    duration_seconds: u64,
    sign_in_path: &'a str,
    protected_prefixes: &'a [String],
    excluded_prefixes: &'a [String],
    placeholder_secret: bool,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Check => {
            // Loading already validated; repeat for configs built elsewhere.
            config.validate()?;

            if format == OutputFormat::Text {
                output::print_success("Configuration is valid");
            }
            output::print_item(
                &SessionSummary {
                    bind_address: config.server.bind_address(),
                    cookie_name: &config.session.cookie_name,
                    duration_seconds: config.session.duration_seconds,
                    sign_in_path: &config.session.sign_in_path,
                    protected_prefixes: &config.session.protected_prefixes,
                    excluded_prefixes: &config.session.excluded_prefixes,
                    placeholder_secret: config.auth.uses_placeholder_secret(),
                },
                format,
            );
            if config.auth.uses_placeholder_secret() {
                output::print_warning("auth.session_secret is the shipped placeholder");
            }
        }
    }

    Ok(())
}

//! Session token CLI commands.
//!
//! Sign-in itself is out of scope for Launchpad; `issue` mints a token
//! for local testing of the session guard.

use std::sync::Arc;

use chrono::Utc;
use clap::{Args, Subcommand};
use serde::Serialize;
use serde_json::Value;

use launchpad_auth::jwt::JwtSessionCodec;
use launchpad_core::config::AppConfig;
use launchpad_core::error::AppError;
use launchpad_core::traits::{SystemClock, TokenCodec};
use launchpad_core::types::SessionPayload;
use launchpad_core::types::session::iso8601;

use crate::output::{self, OutputFormat};

/// Arguments for token commands
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Token subcommand
    #[command(subcommand)]
    pub command: TokenCommand,
}

/// Token subcommands
#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Sign a new session token
    Issue {
        /// Subject (principal identifier)
        #[arg(short, long)]
        subject: String,
        /// Additional claim as key=value; JSON values are parsed, anything else is a string
        #[arg(long = "claim", value_parser = parse_claim)]
        claims: Vec<(String, Value)>,
        /// Lifetime in seconds (defaults to session.duration_seconds)
        #[arg(long)]
        ttl_seconds: Option<u64>,
    },
    /// Verify a token and print its payload
    Inspect {
        /// The token to verify
        token: String,
    },
}

#[derive(Debug, Serialize)]
struct IssuedToken {
    token: String,
    expires: String,
}

/// Execute token commands
pub async fn execute(
    args: &TokenArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let codec = JwtSessionCodec::new(&config.auth, Arc::new(SystemClock));

    if config.auth.uses_placeholder_secret() {
        output::print_warning("auth.session_secret is the shipped placeholder");
    }

    match &args.command {
        TokenCommand::Issue {
            subject,
            claims,
            ttl_seconds,
        } => {
            let ttl = ttl_seconds.unwrap_or(config.session.duration_seconds);
            let payload = build_payload(subject, claims, ttl)?;
            let token = codec.sign(&payload).await?;

            output::print_item(
                &IssuedToken {
                    token,
                    expires: iso8601::format(&payload.expires_at),
                },
                format,
            );
        }
        TokenCommand::Inspect { token } => {
            let payload = codec
                .verify(token)
                .await
                .map_err(|_| AppError::authentication("invalid session token"))?;
            output::print_item(&payload, format);
        }
    }

    Ok(())
}

fn build_payload(
    subject: &str,
    claims: &[(String, Value)],
    ttl_seconds: u64,
) -> Result<SessionPayload, AppError> {
    if subject.is_empty() {
        return Err(AppError::validation("subject must not be empty"));
    }
    let expires_at = i64::try_from(ttl_seconds)
        .ok()
        .filter(|t| *t > 0)
        .and_then(chrono::Duration::try_seconds)
        .and_then(|ttl| Utc::now().checked_add_signed(ttl))
        .ok_or_else(|| {
            AppError::validation("ttl must be a positive number of seconds within the date range")
        })?;
    let payload = claims
        .iter()
        .fold(SessionPayload::new(subject, expires_at), |p, (k, v)| {
            p.with_claim(k.clone(), v.clone())
        });

    Ok(payload)
}

fn parse_claim(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;

    if key.is_empty() {
        return Err("claim key must not be empty".to_string());
    }
    if key == "sub" || key == "expires" {
        return Err(format!("'{key}' is set by the command, not as a claim"));
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

//! # launchpad-api
//!
//! HTTP layer for Launchpad built on Axum.
//!
//! Installs the session guard as a middleware in front of every
//! human-navigable page, and serves placeholder pages plus a small JSON API
//! that the guard leaves alone.

pub mod app;
pub mod cookies;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;

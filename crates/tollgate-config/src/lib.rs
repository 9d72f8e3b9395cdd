#![allow(clippy::must_use_candidate)]

//! TOML configuration for the tollgate service

pub mod auth;
mod loader;
pub mod server;

use serde::Deserialize;

pub use auth::{AuthConfig, UserConfig};
pub use server::ServerConfig;

/// Top-level tollgate configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Authentication configuration
    pub auth: AuthConfig,
}

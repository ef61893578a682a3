//! Configuration for the Blog API
//!
//! Loads settings from:
//! 1. Environment variables
//! 2. .env file (local development)
//!
//! Every setting has a default. A variable that is set but cannot be parsed
//! is an error rather than a silent fallback.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::str::FromStr;

use crate::logging::LogFormat;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,

    /// GraphQL configuration
    pub graphql: GraphQLConfig,

    /// Store configuration
    pub store: StoreConfig,

    /// Log output format
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLConfig {
    /// Serve the in-browser IDE at /playground
    pub playground: bool,
    /// Max query depth
    pub max_depth: usize,
    /// Max query complexity
    pub max_complexity: usize,
    /// Enable introspection
    pub introspection: bool,
}

impl Default for GraphQLConfig {
    fn default() -> Self {
        Self {
            playground: true,
            max_depth: 10,
            max_complexity: 1000,
            introspection: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Preload the demo users, posts and comments
    pub seed: bool,
}

impl Config {
    /// Load configuration from environment variables, reading `.env` first.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let graphql_defaults = GraphQLConfig::default();

        Ok(Self {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env("SERVER_PORT", 4000)?,
                workers: parse_env("SERVER_WORKERS", num_cpus::get())?,
            },
            graphql: GraphQLConfig {
                playground: parse_env("GRAPHQL_PLAYGROUND", graphql_defaults.playground)?,
                max_depth: parse_env("GRAPHQL_MAX_DEPTH", graphql_defaults.max_depth)?,
                max_complexity: parse_env(
                    "GRAPHQL_MAX_COMPLEXITY",
                    graphql_defaults.max_complexity,
                )?,
                introspection: parse_env(
                    "GRAPHQL_INTROSPECTION",
                    graphql_defaults.introspection,
                )?,
            },
            store: StoreConfig {
                seed: parse_env("STORE_SEED", true)?,
            },
            log_format: parse_env("LOG_FORMAT", LogFormat::Json)?,
        })
    }
}

/// Parse `key` if it is set, otherwise return `default`.
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("Invalid {}={:?}: {}", key, raw, e)),
        Err(_) => Ok(default),
    }
}

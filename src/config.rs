// src/config.rs

use crate::resource::DEFAULT_API_BASE;
use std::env;

pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DB_NAME: &str = "nobel";

/// Runtime configuration for both binaries, read from the environment with
/// local-development defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Nobel Prize API (`NOBEL_API_BASE`).
    pub api_base: String,
    /// MongoDB connection string (`MONGODB_URI`).
    pub mongodb_uri: String,
    /// Target database name (`NOBEL_DB`).
    pub db_name: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            api_base: env::var("NOBEL_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            mongodb_uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| DEFAULT_MONGODB_URI.to_string()),
            db_name: env::var("NOBEL_DB").unwrap_or_else(|_| DEFAULT_DB_NAME.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base: DEFAULT_API_BASE.to_string(),
            mongodb_uri: DEFAULT_MONGODB_URI.to_string(),
            db_name: DEFAULT_DB_NAME.to_string(),
        }
    }
}

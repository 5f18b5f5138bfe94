//! Environment configuration loading

use super::models::*;
use crate::utils::error::{AccessError, Result};
use std::env;
use std::str::FromStr;
use tracing::debug;

impl ServiceConfig {
    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Override fields from environment variables
    pub fn apply_env(&mut self) -> Result<()> {
        debug!("Applying configuration from environment variables");

        if let Ok(url) = env::var("DATABASE_URL") {
            self.storage.database.url = url;
        }
        if let Some(max_conn) = parse_var("DATABASE_MAX_CONNECTIONS")? {
            self.storage.database.max_connections = max_conn;
        }

        if let Some(timeout) = parse_var("RBAC_STORE_TIMEOUT_SECS")? {
            self.access.store_timeout_secs = timeout;
        }
        if let Some(timeout) = parse_var("RBAC_INVALIDATION_TIMEOUT_SECS")? {
            self.access.invalidation_timeout_secs = timeout;
        }
        if let Ok(tier) = env::var("RBAC_UPGRADE_TIER_NAME") {
            self.access.upgrade_tier_name = tier;
        }

        if let Ok(level) = env::var("RBAC_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = env::var("RBAC_LOG_FORMAT") {
            self.logging.format = match format.to_lowercase().as_str() {
                "json" => LogFormat::Json,
                "text" => LogFormat::Text,
                other => {
                    return Err(AccessError::config(format!("Invalid log format: {}", other)));
                }
            };
        }

        Ok(())
    }
}

fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| AccessError::config(format!("Invalid {}: {}", name, e))),
        Err(_) => Ok(None),
    }
}

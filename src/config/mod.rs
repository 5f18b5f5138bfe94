//! Configuration management
//!
//! This module handles loading, validation, and management of the service
//! configuration.

mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{AccessError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,
}

impl Config {
    /// Load configuration from a YAML file, then apply environment overrides
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AccessError::config(format!("Failed to read config file: {}", e)))?;

        let mut service: ServiceConfig = serde_yaml::from_str(&content)
            .map_err(|e| AccessError::config(format!("Failed to parse config: {}", e)))?;
        service.apply_env()?;

        let config = Self { service };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            service: ServiceConfig::from_env()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.service.storage
    }

    /// Get access-control configuration
    pub fn access(&self) -> &AccessControlConfig {
        &self.service.access
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.service.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.service
            .storage
            .validate()
            .map_err(|e| AccessError::config(format!("Storage config error: {}", e)))?;

        self.service
            .access
            .validate()
            .map_err(|e| AccessError::config(format!("Access config error: {}", e)))?;

        self.service
            .logging
            .validate()
            .map_err(|e| AccessError::config(format!("Logging config error: {}", e)))?;

        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.service)
            .map_err(|e| AccessError::config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

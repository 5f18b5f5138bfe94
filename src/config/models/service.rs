//! Top-level service configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Access-control engine settings
    #[serde(default)]
    pub access: AccessControlConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

//! Configuration loading and validation tests

#[cfg(test)]
mod tests {
    use std::io::Write;
    use tenant_rbac::config::{Config, LogFormat, ServiceConfig, Validate};

    #[test]
    fn test_default_service_config_is_valid() {
        let config = ServiceConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.access.store_timeout_secs, 5);
        assert_eq!(config.access.upgrade_tier_name, "Business");
    }

    #[test]
    fn test_timeouts_are_bounded() {
        let mut config = ServiceConfig::default();
        config.access.store_timeout_secs = 0;
        assert!(config.validate().unwrap_err().contains("Store timeout"));

        let mut config = ServiceConfig::default();
        config.access.invalidation_timeout_secs = 600;
        assert!(config.validate().unwrap_err().contains("Invalidation timeout"));
    }

    #[test]
    fn test_unsupported_database_is_rejected() {
        let mut config = ServiceConfig::default();
        config.storage.database.url = "mysql://localhost/rbac".to_string();
        assert!(config.validate().is_err());

        config.storage.database.url = "sqlite::memory:".to_string();
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn test_partial_yaml_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "storage:\n  database:\n    url: \"sqlite::memory:\"\nlogging:\n  format: json"
        )
        .unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        assert!(config.storage().database.is_sqlite());
        assert_eq!(config.logging().format, LogFormat::Json);
        assert_eq!(config.access().free_tier_name, "free");
        assert_eq!(
            config.access().active_subscription_statuses,
            vec!["active".to_string(), "trialing".to_string()]
        );
    }
}

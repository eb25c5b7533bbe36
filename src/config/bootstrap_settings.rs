use std::fmt;
use std::sync::Arc;
use crate::config::errors::ApplicationError;
use crate::config::config_spec::ConfigSpec;
use crate::config::EnvironmentProvider;

/// Settings read once at startup
pub struct BootstrapSettings {
    database_url: String,
    server_host: String,
    server_port: u16,
    reject_empty_name: bool,
}

impl BootstrapSettings {
    /// Load bootstrap settings from the given environment provider
    pub fn from_env_provider(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Result<Self, ApplicationError> {
        let database_url_spec = ConfigSpec::new(env_provider.clone())
            .env_override("DATABASE_URL")
            .default_value("sqlite://items.db?mode=rwc")
            .min_length(1);

        let host_spec = ConfigSpec::new(env_provider.clone())
            .env_override("HOST")
            .default_value("0.0.0.0")
            .validator(ConfigSpec::validate_host_address);

        let port_spec = ConfigSpec::new(env_provider.clone())
            .env_override("PORT")
            .default_value("3000")
            .validator(|value| ConfigSpec::validate_port_range(value, 1, 65535));

        let reject_empty_name_spec = ConfigSpec::new(env_provider)
            .env_override("ITEMS_REJECT_EMPTY_NAME")
            .default_value("true")
            .validator(ConfigSpec::validate_bool);

        let database_url = database_url_spec
            .load_setting_with_source()?
            .value;

        let server_host = host_spec
            .load_setting_with_source()?
            .value;

        let port_value = port_spec
            .load_setting_with_source()?
            .value;
        let server_port = ConfigSpec::parse_port(&port_value, "PORT")?;

        let reject_value = reject_empty_name_spec
            .load_setting_with_source()?
            .value;
        let reject_empty_name = ConfigSpec::parse_bool(&reject_value, "ITEMS_REJECT_EMPTY_NAME")?;

        Ok(Self {
            database_url,
            server_host,
            server_port,
            reject_empty_name,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ApplicationError> {
        use crate::config::SystemEnvironment;
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Whether item names that are blank after trimming are refused
    pub fn reject_empty_name(&self) -> bool {
        self.reject_empty_name
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("database_url", &self.database_url)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("reject_empty_name", &self.reject_empty_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;
    use std::collections::HashMap;

    fn create_test_env(vars: HashMap<String, String>) -> Arc<MockEnvironment> {
        Arc::new(MockEnvironment::new(vars))
    }

    #[test]
    fn test_bootstrap_settings_with_all_vars() {
        let env_vars = HashMap::from([
            ("DATABASE_URL".to_string(), "sqlite://test.db".to_string()),
            ("HOST".to_string(), "127.0.0.1".to_string()),
            ("PORT".to_string(), "8080".to_string()),
            ("ITEMS_REJECT_EMPTY_NAME".to_string(), "false".to_string()),
        ]);
        let env_provider = create_test_env(env_vars);

        let settings = BootstrapSettings::from_env_provider(env_provider).unwrap();

        assert_eq!(settings.database_url(), "sqlite://test.db");
        assert_eq!(settings.server_host(), "127.0.0.1");
        assert_eq!(settings.server_port(), 8080);
        assert_eq!(settings.server_address(), "127.0.0.1:8080");
        assert!(!settings.reject_empty_name());
    }

    #[test]
    fn test_bootstrap_settings_with_defaults() {
        let env_provider = create_test_env(HashMap::new());

        let settings = BootstrapSettings::from_env_provider(env_provider).unwrap();

        assert_eq!(settings.database_url(), "sqlite://items.db?mode=rwc");
        assert_eq!(settings.server_host(), "0.0.0.0");
        assert_eq!(settings.server_port(), 3000);
        assert_eq!(settings.server_address(), "0.0.0.0:3000");
        assert!(settings.reject_empty_name());
    }

    #[test]
    fn test_bootstrap_settings_empty_database_url_fails_validation() {
        let env_vars = HashMap::from([
            ("DATABASE_URL".to_string(), "".to_string()),
        ]);
        let env_provider = create_test_env(env_vars);

        match BootstrapSettings::from_env_provider(env_provider).unwrap_err() {
            ApplicationError::InvalidSetting { setting_name, reason } => {
                assert_eq!(setting_name, "DATABASE_URL");
                assert!(reason.contains("must be at least 1 characters long"));
            },
            other => panic!("Expected InvalidSetting for DATABASE_URL, got: {:?}", other),
        }
    }

    #[test]
    fn test_bootstrap_settings_empty_host_fails_validation() {
        let env_vars = HashMap::from([
            ("HOST".to_string(), "".to_string()),
        ]);
        let env_provider = create_test_env(env_vars);

        match BootstrapSettings::from_env_provider(env_provider).unwrap_err() {
            ApplicationError::InvalidSetting { setting_name, reason } => {
                assert_eq!(setting_name, "HOST");
                assert!(reason.contains("cannot be empty"));
            },
            other => panic!("Expected InvalidSetting for HOST, got: {:?}", other),
        }
    }

    #[test]
    fn test_bootstrap_settings_invalid_port() {
        let env_vars = HashMap::from([
            ("PORT".to_string(), "not_a_number".to_string()),
        ]);
        let env_provider = create_test_env(env_vars);

        match BootstrapSettings::from_env_provider(env_provider).unwrap_err() {
            ApplicationError::InvalidSetting { setting_name, reason } => {
                assert_eq!(setting_name, "PORT");
                assert!(reason.contains("Expected port number between 1 and 65535"));
            },
            other => panic!("Expected InvalidSetting for PORT, got: {:?}", other),
        }
    }

    #[test]
    fn test_bootstrap_settings_zero_port() {
        let env_vars = HashMap::from([
            ("PORT".to_string(), "0".to_string()),
        ]);
        let env_provider = create_test_env(env_vars);

        match BootstrapSettings::from_env_provider(env_provider).unwrap_err() {
            ApplicationError::InvalidSetting { setting_name, reason } => {
                assert_eq!(setting_name, "PORT");
                assert!(reason.contains("outside valid range"));
            },
            other => panic!("Expected InvalidSetting error for zero PORT, got: {:?}", other),
        }
    }

    #[test]
    fn test_bootstrap_settings_invalid_reject_empty_name() {
        let env_vars = HashMap::from([
            ("ITEMS_REJECT_EMPTY_NAME".to_string(), "sometimes".to_string()),
        ]);
        let env_provider = create_test_env(env_vars);

        match BootstrapSettings::from_env_provider(env_provider).unwrap_err() {
            ApplicationError::InvalidSetting { setting_name, .. } => {
                assert_eq!(setting_name, "ITEMS_REJECT_EMPTY_NAME");
            },
            other => panic!("Expected InvalidSetting for ITEMS_REJECT_EMPTY_NAME, got: {:?}", other),
        }
    }
}

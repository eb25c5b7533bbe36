use std::sync::Arc;

use crate::config::EnvironmentProvider;
use crate::config::errors::ApplicationError;

/// Where a loaded value came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValueSource {
    EnvironmentVariable { name: String },
    Default,
}

#[derive(Debug, Clone)]
pub struct ConfigValue {
    pub value: String,
    pub source: ConfigValueSource,
}

/// Configuration specification with environment override → default priority
pub struct ConfigSpec {
    env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    env_override: Option<String>,
    default_value: Option<String>,
    min_length: Option<usize>,
    validator: Option<fn(&str) -> Result<(), String>>,
}

impl ConfigSpec {
    pub fn new(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Self {
        Self {
            env_provider,
            env_override: None,
            default_value: None,
            min_length: None,
            validator: None,
        }
    }

    pub fn env_override(mut self, name: &str) -> Self {
        self.env_override = Some(name.to_string());
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn validator(mut self, f: fn(&str) -> Result<(), String>) -> Self {
        self.validator = Some(f);
        self
    }

    /// Load a setting value with source tracking
    ///
    /// The environment variable wins when present; otherwise the default is used.
    /// Both are validated the same way.
    pub fn load_setting_with_source(&self) -> Result<ConfigValue, ApplicationError> {
        let setting_name = self.setting_name();

        if let Some(env_var) = &self.env_override {
            if let Some(value) = self.env_provider.get_var(env_var) {
                self.validate_value(&value, &setting_name)?;

                return Ok(ConfigValue {
                    value,
                    source: ConfigValueSource::EnvironmentVariable {
                        name: env_var.clone(),
                    },
                });
            }
        }

        match &self.default_value {
            Some(value) => {
                self.validate_value(value, &setting_name)?;
                Ok(ConfigValue {
                    value: value.clone(),
                    source: ConfigValueSource::Default,
                })
            }
            None => Err(ApplicationError::MissingSetting { setting_name }),
        }
    }

    /// Validate a setting value according to the ConfigSpec rules
    pub fn validate_value(&self, value: &str, setting_name: &str) -> Result<(), ApplicationError> {
        if let Some(min_len) = self.min_length {
            if value.len() < min_len {
                return Err(ApplicationError::InvalidSetting {
                    setting_name: setting_name.to_string(),
                    reason: format!("Value must be at least {} characters long", min_len),
                });
            }
        }

        if let Some(validator) = self.validator {
            validator(value).map_err(|reason| ApplicationError::InvalidSetting {
                setting_name: setting_name.to_string(),
                reason,
            })?;
        }

        Ok(())
    }

    fn setting_name(&self) -> String {
        self.env_override
            .clone()
            .unwrap_or_else(|| "unnamed_setting".to_string())
    }
}

/// Type parsing utilities for configuration values
impl ConfigSpec {
    /// Parse a boolean value from string
    ///
    /// Supports various boolean representations:
    /// - true: "true", "1", "yes", "on", "enabled" (case insensitive)
    /// - false: "false", "0", "no", "off", "disabled" (case insensitive)
    pub fn parse_bool(value: &str, setting_name: &str) -> Result<bool, ApplicationError> {
        match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" | "enabled" => Ok(true),
            "false" | "0" | "no" | "off" | "disabled" => Ok(false),
            _ => Err(ApplicationError::ParseError {
                setting_name: setting_name.to_string(),
                error: format!(
                    "Expected boolean value, got '{}'. Valid values: true/false, 1/0, yes/no, on/off, enabled/disabled",
                    value
                ),
            }),
        }
    }

    /// Parse a port number from string
    pub fn parse_port(value: &str, setting_name: &str) -> Result<u16, ApplicationError> {
        let port = value.trim().parse::<u16>()
            .map_err(|e| ApplicationError::ParseError {
                setting_name: setting_name.to_string(),
                error: format!("Expected port number (1-65535), got '{}': {}", value, e),
            })?;

        if port == 0 {
            return Err(ApplicationError::InvalidSetting {
                setting_name: setting_name.to_string(),
                reason: "Port number must be between 1 and 65535".to_string(),
            });
        }

        Ok(port)
    }
}

/// Validators usable with [`ConfigSpec::validator`]
impl ConfigSpec {
    pub fn validate_port_range(value: &str, min: u16, max: u16) -> Result<(), String> {
        let parsed = value.parse::<u16>()
            .map_err(|_| format!("Expected port number between {} and {}", min, max))?;

        if parsed < min || parsed > max {
            return Err(format!("Port {} is outside valid range {}-{}", parsed, min, max));
        }

        Ok(())
    }

    /// Accepts IPv4 addresses, bracketed IPv6 addresses and plain hostnames
    pub fn validate_host_address(value: &str) -> Result<(), String> {
        if value.is_empty() {
            return Err("Host address cannot be empty".to_string());
        }

        if value.chars().any(char::is_whitespace) {
            return Err("Host address cannot contain whitespace characters".to_string());
        }

        if let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
            return inner
                .parse::<std::net::Ipv6Addr>()
                .map(|_| ())
                .map_err(|_| "Invalid IPv6 address format".to_string());
        }

        let parts: Vec<&str> = value.split('.').collect();
        if parts.len() == 4 && parts.iter().all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit())) {
            return value
                .parse::<std::net::Ipv4Addr>()
                .map(|_| ())
                .map_err(|_| format!("Invalid IPv4 address: {}", value));
        }

        Ok(())
    }

    pub fn validate_bool(value: &str) -> Result<(), String> {
        Self::parse_bool(value, "").map(|_| ()).map_err(|_| {
            format!("Expected boolean value, got '{}'", value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    fn spec(env: MockEnvironment) -> ConfigSpec {
        ConfigSpec::new(Arc::new(env))
    }

    #[test]
    fn test_load_setting_with_source_env_override() {
        let value = spec(MockEnvironment::empty().with_var("TEST_SETTING", "from-env"))
            .env_override("TEST_SETTING")
            .default_value("fallback")
            .load_setting_with_source()
            .unwrap();

        assert_eq!(value.value, "from-env");
        assert_eq!(
            value.source,
            ConfigValueSource::EnvironmentVariable { name: "TEST_SETTING".to_string() }
        );
    }

    #[test]
    fn test_load_setting_with_source_default() {
        let value = spec(MockEnvironment::empty())
            .env_override("TEST_SETTING")
            .default_value("fallback")
            .load_setting_with_source()
            .unwrap();

        assert_eq!(value.value, "fallback");
        assert_eq!(value.source, ConfigValueSource::Default);
    }

    #[test]
    fn test_load_setting_without_default_is_missing() {
        let result = spec(MockEnvironment::empty())
            .env_override("TEST_SETTING")
            .load_setting_with_source();

        match result {
            Err(ApplicationError::MissingSetting { setting_name }) => {
                assert_eq!(setting_name, "TEST_SETTING")
            }
            other => panic!("Expected MissingSetting, got: {:?}", other),
        }
    }

    #[test]
    fn test_load_setting_with_source_validation() {
        let result = spec(MockEnvironment::empty().with_var("PORT", "99999"))
            .env_override("PORT")
            .validator(|v| ConfigSpec::validate_port_range(v, 1, 65535))
            .load_setting_with_source();

        assert!(matches!(result, Err(ApplicationError::InvalidSetting { .. })));
    }

    #[test]
    fn test_parse_bool() {
        assert!(ConfigSpec::parse_bool("true", "X").unwrap());
        assert!(ConfigSpec::parse_bool("Yes", "X").unwrap());
        assert!(ConfigSpec::parse_bool(" on ", "X").unwrap());
        assert!(!ConfigSpec::parse_bool("0", "X").unwrap());
        assert!(!ConfigSpec::parse_bool("disabled", "X").unwrap());
        assert!(ConfigSpec::parse_bool("maybe", "X").is_err());
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(ConfigSpec::parse_port("8080", "PORT").unwrap(), 8080);
        assert!(ConfigSpec::parse_port("0", "PORT").is_err());
        assert!(ConfigSpec::parse_port("70000", "PORT").is_err());
        assert!(ConfigSpec::parse_port("abc", "PORT").is_err());
    }

    #[test]
    fn test_validate_host_address() {
        assert!(ConfigSpec::validate_host_address("0.0.0.0").is_ok());
        assert!(ConfigSpec::validate_host_address("127.0.0.1").is_ok());
        assert!(ConfigSpec::validate_host_address("localhost").is_ok());
        assert!(ConfigSpec::validate_host_address("[::1]").is_ok());
        assert!(ConfigSpec::validate_host_address("").is_err());
        assert!(ConfigSpec::validate_host_address("256.0.0.1").is_err());
        assert!(ConfigSpec::validate_host_address("[]").is_err());
        assert!(ConfigSpec::validate_host_address("my host").is_err());
    }
}

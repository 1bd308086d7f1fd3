use std::env;
use std::fmt;
use std::time::Duration;

use url::Url;

/// Default maintainer API host, matching the production deployment.
pub const DEFAULT_API_BASE: &str = "https://api.stag-os.org";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Distinguishes runtime behavior for different stages of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the portal.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub api: ApiConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("PORTAL_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let base_url =
            env::var("PORTAL_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Url::parse(&base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            value: base_url.clone(),
            source,
        })?;

        let timeout_secs = match env::var("PORTAL_HTTP_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout)?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        let log_level = env::var("PORTAL_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            api: ApiConfig {
                base_url,
                timeout: Duration::from_secs(timeout_secs),
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Settings for the outbound maintainer API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidBaseUrl {
        value: String,
        source: url::ParseError,
    },
    InvalidTimeout,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBaseUrl { value, .. } => {
                write!(f, "PORTAL_API_BASE '{}' is not a valid URL", value)
            }
            ConfigError::InvalidTimeout => {
                write!(
                    f,
                    "PORTAL_HTTP_TIMEOUT_SECS must be a positive number of seconds"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidBaseUrl { source, .. } => Some(source),
            ConfigError::InvalidTimeout => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("PORTAL_ENV");
        env::remove_var("PORTAL_API_BASE");
        env::remove_var("PORTAL_HTTP_TIMEOUT_SECS");
        env::remove_var("PORTAL_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.api.base_url, DEFAULT_API_BASE);
        assert_eq!(config.api.timeout, Duration::from_secs(30));
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn rejects_a_malformed_base_url() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("PORTAL_API_BASE", "not a url");
        let err = AppConfig::load().expect_err("bad base url rejected");
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
        reset_env();
    }

    #[test]
    fn rejects_a_zero_timeout() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("PORTAL_HTTP_TIMEOUT_SECS", "0");
        let err = AppConfig::load().expect_err("zero timeout rejected");
        assert!(matches!(err, ConfigError::InvalidTimeout));
        reset_env();
    }
}

//! Process-level configuration

use serde::{Deserialize, Serialize};

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    /// Parse `"json"` / `"pretty"` (case-insensitive), anything else is `Pretty`
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application name
    pub app_name: String,
    /// Environment (dev, prod, etc.)
    pub environment: String,
    /// Default `EnvFilter` directive when `RUST_LOG` is unset
    pub log_filter: String,
    /// Log line format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "stockcard".to_string(),
            environment: "development".to_string(),
            log_filter: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Overlay `STOCKCARD_ENV` and `STOCKCARD_LOG_FORMAT` on the defaults
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("STOCKCARD_ENV").ok().as_deref(),
            std::env::var("STOCKCARD_LOG_FORMAT").ok().as_deref(),
        )
    }

    /// Build from raw environment values
    ///
    /// Production deployments log JSON unless a format is given explicitly.
    pub fn from_vars(environment: Option<&str>, log_format: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(env) = environment.map(str::trim).filter(|e| !e.is_empty()) {
            config.environment = env.to_string();
        }

        config.log_format = match log_format.map(str::trim).filter(|f| !f.is_empty()) {
            Some(format) => LogFormat::parse(format),
            None if config.is_production() => LogFormat::Json,
            None => LogFormat::Pretty,
        };

        config
    }

    /// Whether this is a production deployment
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
            || self.environment.eq_ignore_ascii_case("prod")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.app_name, "stockcard");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(!config.is_production());
    }

    #[test]
    fn test_production_defaults_to_json() {
        let config = Config::from_vars(Some("prod"), None);
        assert_eq!(config.environment, "prod");
        assert!(config.is_production());
        assert_eq!(config.log_format, LogFormat::Json);

        let config = Config::from_vars(Some("production"), Some("pretty"));
        assert_eq!(config.log_format, LogFormat::Pretty);

        let config = Config::from_vars(Some("  "), None);
        assert_eq!(config.environment, "development");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("xml"), LogFormat::Pretty);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&LogFormat::Json).unwrap();
        assert_eq!(json, "\"json\"");
    }
}

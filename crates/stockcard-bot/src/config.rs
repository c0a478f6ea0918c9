//! Configuration for the stock and image commands

use crate::api::StockCategory;
use crate::error::{BotError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use stockcard_core::ViewConfig;
use tracing::warn;
use url::Url;

/// How many entries each stock category shows at most
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCaps {
    /// Seed shop entries
    pub seeds: usize,
    /// Gear shop entries
    pub gear: usize,
    /// Egg shop entries
    pub eggs: usize,
    /// Event shop entries
    pub event: usize,
    /// Cosmetic shop entries
    pub cosmetics: usize,
}

impl Default for CategoryCaps {
    fn default() -> Self {
        Self {
            seeds: 9,
            gear: 9,
            eggs: 5,
            event: 5,
            cosmetics: 6,
        }
    }
}

impl CategoryCaps {
    /// Cap for one category
    pub fn cap(&self, category: StockCategory) -> usize {
        match category {
            StockCategory::Seeds => self.seeds,
            StockCategory::Gear => self.gear,
            StockCategory::Eggs => self.eggs,
            StockCategory::Event => self.event,
            StockCategory::Cosmetics => self.cosmetics,
        }
    }
}

/// Configuration for bot commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Accent color for regular views, as `"#RRGGBB"`
    pub accent_color: Option<String>,

    /// Accent color for error views, as `"#RRGGBB"`
    pub error_color: Option<String>,

    /// Stock listing endpoint
    pub stock_api_url: String,

    /// Image generation endpoint
    pub image_api_url: String,

    /// Request timeout applied by the HTTP data sources
    pub request_timeout: Duration,

    /// Per-category listing caps
    pub caps: CategoryCaps,

    /// Discord webhook used by the Discord presenter (optional)
    pub discord_webhook_url: Option<String>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            accent_color: None,
            error_color: None,
            stock_api_url: "http://127.0.0.1:8080/api/stock".to_string(),
            image_api_url: "http://127.0.0.1:8080/api/image".to_string(),
            request_timeout: Duration::from_secs(30),
            caps: CategoryCaps::default(),
            discord_webhook_url: None,
        }
    }
}

impl BotConfig {
    /// Create a new configuration builder
    pub fn builder() -> BotConfigBuilder {
        BotConfigBuilder::default()
    }

    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        Self::builder().with_env().build()
    }

    /// Resolve the view colors, falling back to the defaults for bad values
    pub fn view_config(&self) -> ViewConfig {
        let config = ViewConfig::from_hex(self.accent_color.as_deref(), self.error_color.as_deref());

        if let Some(raw) = &self.accent_color {
            if stockcard_core::Color::parse(raw).is_none() {
                warn!(value = %raw, fallback = %config.accent, "Ignoring malformed accent color");
            }
        }
        if let Some(raw) = &self.error_color {
            if stockcard_core::Color::parse(raw).is_none() {
                warn!(value = %raw, fallback = %config.error, "Ignoring malformed error color");
            }
        }

        config
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        validate_http_url("stock_api_url", &self.stock_api_url)?;
        validate_http_url("image_api_url", &self.image_api_url)?;

        if let Some(webhook) = &self.discord_webhook_url {
            validate_http_url("discord_webhook_url", webhook)?;
        }

        if self.request_timeout.is_zero() {
            return Err(BotError::ConfigError(
                "request_timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

fn validate_http_url(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value)
        .map_err(|e| BotError::ConfigError(format!("{field} is not a valid URL: {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(BotError::ConfigError(format!(
            "{field} must use http or https, got {scheme}"
        ))),
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Builder for BotConfig
#[derive(Debug, Default)]
pub struct BotConfigBuilder {
    accent_color: Option<String>,
    error_color: Option<String>,
    stock_api_url: Option<String>,
    image_api_url: Option<String>,
    request_timeout: Option<Duration>,
    caps: Option<CategoryCaps>,
    discord_webhook_url: Option<String>,
}

impl BotConfigBuilder {
    /// Set the accent color
    pub fn accent_color(mut self, color: impl Into<String>) -> Self {
        self.accent_color = Some(color.into());
        self
    }

    /// Set the error color
    pub fn error_color(mut self, color: impl Into<String>) -> Self {
        self.error_color = Some(color.into());
        self
    }

    /// Set the stock endpoint
    pub fn stock_api_url(mut self, url: impl Into<String>) -> Self {
        self.stock_api_url = Some(url.into());
        self
    }

    /// Set the image endpoint
    pub fn image_api_url(mut self, url: impl Into<String>) -> Self {
        self.image_api_url = Some(url.into());
        self
    }

    /// Set request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Set per-category caps
    pub fn caps(mut self, caps: CategoryCaps) -> Self {
        self.caps = Some(caps);
        self
    }

    /// Set the Discord webhook
    pub fn discord_webhook_url(mut self, url: impl Into<String>) -> Self {
        self.discord_webhook_url = Some(url.into());
        self
    }

    /// Load every setting that is present in the environment
    ///
    /// A malformed `STOCKCARD_REQUEST_TIMEOUT_SECS` is ignored with a warning.
    pub fn with_env(mut self) -> Self {
        if let Some(color) = env_non_empty("STOCKCARD_ACCENT_COLOR") {
            self.accent_color = Some(color);
        }
        if let Some(color) = env_non_empty("STOCKCARD_ERROR_COLOR") {
            self.error_color = Some(color);
        }
        if let Some(url) = env_non_empty("STOCKCARD_STOCK_API_URL") {
            self.stock_api_url = Some(url);
        }
        if let Some(url) = env_non_empty("STOCKCARD_IMAGE_API_URL") {
            self.image_api_url = Some(url);
        }
        if let Some(url) = env_non_empty("DISCORD_WEBHOOK_URL") {
            self.discord_webhook_url = Some(url);
        }
        if let Some(secs) = env_non_empty("STOCKCARD_REQUEST_TIMEOUT_SECS") {
            match secs.trim().parse::<u64>() {
                Ok(secs) => self.request_timeout = Some(Duration::from_secs(secs)),
                Err(e) => warn!(value = %secs, error = %e, "Ignoring invalid request timeout"),
            }
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<BotConfig> {
        let defaults = BotConfig::default();

        let config = BotConfig {
            accent_color: self.accent_color,
            error_color: self.error_color,
            stock_api_url: self.stock_api_url.unwrap_or(defaults.stock_api_url),
            image_api_url: self.image_api_url.unwrap_or(defaults.image_api_url),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            caps: self.caps.unwrap_or(defaults.caps),
            discord_webhook_url: self.discord_webhook_url,
        };

        config.validate()?;
        Ok(config)
    }
}

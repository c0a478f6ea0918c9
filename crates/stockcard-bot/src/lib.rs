//! Stock and image cards for chat bots
//!
//! This crate wires the refresh protocol from `stockcard-core` to concrete
//! data sources and chat platforms. It includes:
//!
//! - HTTP data sources for the shop stock and image generation APIs
//! - Mapping from API payloads to view specs, with per-category caps
//! - Bot configuration from environment variables
//! - Slash-command parsing
//! - Console and Discord webhook presenters
//!
//! # Example
//!
//! ```rust,ignore
//! use stockcard_bot::{BotConfig, DiscordWebhookPresenter, StockBot};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = BotConfig::from_env()?;
//!     let presenter = DiscordWebhookPresenter::new(
//!         "https://discord.com/api/webhooks/...",
//!         config.request_timeout,
//!     )?;
//!     let bot = StockBot::new(config, Box::new(presenter))?;
//!
//!     bot.handle("/image a red panda in the snow").await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod bot;
pub mod config;
pub mod error;
pub mod platforms;
pub mod views;

#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use api::{
    CategoryData, GeneratedImage, ImageApiClient, ImagePrompt, StockApiClient, StockCategory,
    StockSnapshot,
};
pub use bot::{Command, Reply, StockBot};
pub use config::{BotConfig, BotConfigBuilder, CategoryCaps};
pub use error::{BotError, Result};
pub use platforms::{ConsolePresenter, DiscordWebhookPresenter};
pub use views::{image_view_spec, stock_view_spec};

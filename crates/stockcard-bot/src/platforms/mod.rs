//! Platform-specific presenters

pub mod cli;
pub mod discord;

pub use cli::{ConsolePresenter, render_plain};
pub use discord::{DiscordWebhookPresenter, render_components};

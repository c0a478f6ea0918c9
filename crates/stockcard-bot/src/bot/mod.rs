//! Stock card bot
//!
//! Ties commands to the refresh protocol: every `/stock` or `/image` command
//! shows a loading message, fetches once, then replaces the message with the
//! result or an error card.
//!
//! # Example
//!
//! ```rust,ignore
//! use stockcard_bot::{BotConfig, ConsolePresenter, StockBot};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let bot = StockBot::new(BotConfig::from_env()?, Box::new(ConsolePresenter::stdout()))?;
//!     bot.handle("/stock").await?;
//!     Ok(())
//! }
//! ```

pub mod commands;

use crate::api::{ImageApiClient, ImagePrompt, StockApiClient};
use crate::config::BotConfig;
use crate::error::Result;
use crate::views::{IMAGE_TITLE, STOCK_TITLE, image_view_spec, stock_view_spec};
use stockcard_core::{Composer, Presenter, RefreshController, RefreshState};
use tracing::info;

pub use commands::Command;

/// What the bot did with one line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// A card was shown and settled in this state
    Refreshed(RefreshState),
    /// Help text to show the user
    Help(&'static str),
    /// The user asked to leave
    Exit,
}

/// Bot answering stock and image commands through one presenter
pub struct StockBot {
    config: BotConfig,
    composer: Composer,
    stock: StockApiClient,
    images: ImageApiClient,
    presenter: Box<dyn Presenter>,
}

impl StockBot {
    /// Create a bot from validated configuration and a presenter
    pub fn new(config: BotConfig, presenter: Box<dyn Presenter>) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            composer: Composer::new(config.view_config()),
            stock: StockApiClient::from_config(&config)?,
            images: ImageApiClient::from_config(&config)?,
            presenter,
            config,
        })
    }

    /// Bot configuration
    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    fn controller(&self) -> RefreshController<'_, dyn Presenter> {
        RefreshController::new(self.presenter.as_ref(), &self.composer)
    }

    /// Show the current shop stock
    pub async fn stock(&self) -> Result<RefreshState> {
        let caps = self.config.caps;
        let accent = self.composer.config().accent;

        let state = self
            .controller()
            .run(STOCK_TITLE, &self.stock, &(), |snapshot| {
                Ok(stock_view_spec(&snapshot, &caps, accent))
            })
            .await?;
        Ok(state)
    }

    /// Generate an image and show it
    pub async fn image(&self, prompt: &str) -> Result<RefreshState> {
        let accent = self.composer.config().accent;
        let params = ImagePrompt::new(prompt);

        let state = self
            .controller()
            .run(IMAGE_TITLE, &self.images, &params, |image| {
                image_view_spec(&image, accent)
            })
            .await?;
        Ok(state)
    }

    /// Parse one line of input and run the matching command
    pub async fn handle(&self, input: &str) -> Result<Reply> {
        let command = Command::parse(input)?;
        info!(command = command.description(), "Handling command");

        match command {
            Command::Stock => self.stock().await.map(Reply::Refreshed),
            Command::Image { prompt } => self.image(&prompt).await.map(Reply::Refreshed),
            Command::Help => Ok(Reply::Help(Command::help_text())),
            Command::Exit => Ok(Reply::Exit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::StockCategory;
    use crate::error::BotError;
    use crate::testing::{Call, RecordingPresenter, serve_once};
    use std::sync::Arc;
    use stockcard_core::{
        Color, ContentBlock, MessageHandle, PresentationError, RenderedView,
    };
    use tokio_test::{assert_err, assert_ok};

    /// Presenter handle shared between the bot and the test
    struct Shared(Arc<RecordingPresenter>);

    #[async_trait::async_trait]
    impl Presenter for Shared {
        async fn create(
            &self,
            view: &RenderedView,
        ) -> std::result::Result<MessageHandle, PresentationError> {
            self.0.create(view).await
        }

        async fn replace(
            &self,
            handle: &MessageHandle,
            view: &RenderedView,
        ) -> std::result::Result<(), PresentationError> {
            self.0.replace(handle, view).await
        }
    }

    fn bot_for(base: &str) -> (StockBot, Arc<RecordingPresenter>) {
        let config = BotConfig::builder()
            .stock_api_url(format!("{base}/api/stock"))
            .image_api_url(format!("{base}/api/image"))
            .accent_color("#112233")
            .build()
            .unwrap();
        let recorder = Arc::new(RecordingPresenter::default());
        let bot = StockBot::new(config, Box::new(Shared(recorder.clone()))).unwrap();
        (bot, recorder)
    }

    fn section_texts(view: &RenderedView) -> Vec<String> {
        view.texts()
            .filter(|t| t.starts_with("### "))
            .map(str::to_string)
            .collect()
    }

    #[tokio::test]
    async fn test_stock_single_seed() {
        let (url, server) =
            serve_once(200, r#"{"seeds": [{"name": "Carrot", "value": "50"}]}"#).await;
        let (bot, recorder) = bot_for(&url);

        let state = assert_ok!(bot.stock().await);
        assert_eq!(state, RefreshState::Succeeded);

        let calls = recorder.calls();
        match &calls[0] {
            Call::Create(loading) => {
                assert_eq!(
                    loading.texts().collect::<Vec<_>>(),
                    vec![format!("⏳ Loading {STOCK_TITLE}...")]
                );
                assert_eq!(loading.accent, Color::new(0x112233).unwrap());
            }
            Call::Replace(..) => panic!("first call must create"),
        }

        let view = recorder.final_view();
        assert_eq!(view.accent, Color::new(0x112233).unwrap());
        assert_eq!(
            section_texts(&view),
            vec![format!("### {}\nCarrot - 50", StockCategory::Seeds.heading())]
        );

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /api/stock "));
    }

    #[tokio::test]
    async fn test_stock_server_error_shows_error_card() {
        let (url, _server) = serve_once(500, "").await;
        let (bot, recorder) = bot_for(&url);

        let state = assert_ok!(bot.stock().await);
        assert_eq!(state, RefreshState::Failed);

        let view = recorder.final_view();
        assert_eq!(view.accent, Color::DEFAULT_ERROR);
        let texts: Vec<_> = view.texts().collect();
        assert_eq!(texts[0], "## ❌ Failed to load data");
        assert!(texts[1].contains("500"));
    }

    #[tokio::test]
    async fn test_stock_all_categories_absent() {
        let (url, _server) = serve_once(200, "{}").await;
        let (bot, recorder) = bot_for(&url);

        let state = assert_ok!(bot.stock().await);
        assert_eq!(state, RefreshState::Succeeded);

        let view = recorder.final_view();
        assert!(section_texts(&view).is_empty());
        assert_eq!(view.blocks[0], ContentBlock::text(format!("## {STOCK_TITLE}")));
        assert_eq!(view.blocks[1], ContentBlock::Separator);
        let last = view.blocks.last().and_then(ContentBlock::as_text).unwrap();
        assert!(last.starts_with("-# Updated <t:"));
        assert_eq!(view.block_count(), 3);
    }

    #[tokio::test]
    async fn test_stock_missing_eggs_has_no_stray_separator() {
        let (url, _server) = serve_once(
            200,
            r#"{"seeds": [], "gear": [], "event": [], "cosmetics": []}"#,
        )
        .await;
        let (bot, recorder) = bot_for(&url);

        assert_ok!(bot.stock().await);

        let view = recorder.final_view();
        let sections = section_texts(&view);
        assert_eq!(sections.len(), 4);
        assert!(sections.iter().all(|s| !s.contains("Egg")));

        // title, separator, then (section, separator) per category, then timestamp
        assert_eq!(view.block_count(), 2 + 4 * 2 + 1);
        let separators = view
            .blocks
            .iter()
            .filter(|b| **b == ContentBlock::Separator)
            .count();
        assert_eq!(separators, 5);
    }

    #[tokio::test]
    async fn test_image_success() {
        let (url, server) = serve_once(
            200,
            r#"{"imageUrl": "https://cdn.example.com/cat.png", "id": 7, "status": "done"}"#,
        )
        .await;
        let (bot, recorder) = bot_for(&url);

        let reply = assert_ok!(bot.handle("/image a cat").await);
        assert_eq!(reply, Reply::Refreshed(RefreshState::Succeeded));

        let view = recorder.final_view();
        assert!(view
            .blocks
            .contains(&ContentBlock::image("https://cdn.example.com/cat.png")));
        assert!(view.texts().any(|t| t.contains("**Prompt:** a cat")));

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/image "));
        assert!(request.contains(r#"{"prompt":"a cat"}"#));
    }

    #[tokio::test]
    async fn test_image_missing_url_shows_error_card() {
        let (url, _server) = serve_once(200, r#"{"status": "queued"}"#).await;
        let (bot, recorder) = bot_for(&url);

        let state = assert_ok!(bot.image("a dog").await);
        assert_eq!(state, RefreshState::Failed);
        assert_eq!(recorder.final_view().accent, Color::DEFAULT_ERROR);
    }

    #[tokio::test]
    async fn test_handle_help_and_bad_input() {
        let (bot, recorder) = bot_for("http://127.0.0.1:9");

        let reply = assert_ok!(bot.handle("/help").await);
        assert_eq!(reply, Reply::Help(Command::help_text()));
        assert_eq!(assert_ok!(bot.handle("/exit").await), Reply::Exit);

        let err = assert_err!(bot.handle("/nope").await);
        assert!(matches!(err, BotError::CommandError(_)));
        assert!(recorder.calls().is_empty());
    }

    struct Offline;

    #[async_trait::async_trait]
    impl Presenter for Offline {
        async fn create(
            &self,
            _view: &RenderedView,
        ) -> std::result::Result<MessageHandle, PresentationError> {
            Err(PresentationError::Unreachable("gateway down".to_string()))
        }

        async fn replace(
            &self,
            _handle: &MessageHandle,
            _view: &RenderedView,
        ) -> std::result::Result<(), PresentationError> {
            unreachable!("no message was ever created")
        }
    }

    #[tokio::test]
    async fn test_presenter_failure_reaches_caller() {
        let config = BotConfig::builder()
            .stock_api_url("http://127.0.0.1:9/api/stock")
            .build()
            .unwrap();
        let bot = StockBot::new(config, Box::new(Offline)).unwrap();

        let err = assert_err!(bot.handle("/stock").await);
        assert!(matches!(
            err,
            BotError::Presentation(PresentationError::Unreachable(ref msg)) if msg == "gateway down"
        ));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = BotConfig::default();
        config.stock_api_url = "ftp://example.com/stock".to_string();

        let result = StockBot::new(config, Box::new(RecordingPresenter::default()));
        assert!(matches!(result, Err(BotError::ConfigError(_))));
    }
}

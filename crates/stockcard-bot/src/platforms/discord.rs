//! Discord webhook presenter
//!
//! Renders views as Discord "components v2" messages: one container carrying
//! the accent color, holding text displays, separators, a media gallery and
//! link buttons. Messages are created and edited through a webhook.

use crate::api::http_client;
use crate::error::{BotError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde_json::{Value, json};
use std::time::Duration;
use stockcard_core::{ContentBlock, MessageHandle, PresentationError, Presenter, RenderedView};
use tracing::debug;
use url::Url;

/// Message flag enabling components v2 layouts
pub const IS_COMPONENTS_V2: u64 = 1 << 15;

/// Discord's limit on the combined text of one components v2 message
const MAX_TOTAL_TEXT: usize = 4000;

const ACTION_ROW: u8 = 1;
const BUTTON: u8 = 2;
const TEXT_DISPLAY: u8 = 10;
const MEDIA_GALLERY: u8 = 12;
const SEPARATOR: u8 = 14;
const CONTAINER: u8 = 17;
const LINK_STYLE: u8 = 5;

/// Truncate text to `limit` characters, on a character boundary
fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        let mut short: String = text.chars().take(limit.saturating_sub(1)).collect();
        short.push('…');
        short
    }
}

/// Render one block, charging text against the remaining message budget
///
/// Text blocks that find the budget exhausted are dropped.
fn block_component(block: &ContentBlock, budget: &mut usize) -> Option<Value> {
    let component = match block {
        ContentBlock::Text { content } => {
            if *budget == 0 {
                return None;
            }
            let content = truncate(content, *budget);
            *budget -= content.chars().count();
            json!({
                "type": TEXT_DISPLAY,
                "content": content,
            })
        }
        ContentBlock::Separator => json!({
            "type": SEPARATOR,
            "divider": true,
            "spacing": 1,
        }),
        ContentBlock::Image { url } => json!({
            "type": MEDIA_GALLERY,
            "items": [{ "media": { "url": url } }],
        }),
        ContentBlock::ActionRow(row) => json!({
            "type": ACTION_ROW,
            "components": row
                .links()
                .iter()
                .map(|link| json!({
                    "type": BUTTON,
                    "style": LINK_STYLE,
                    "label": link.label,
                    "url": link.url,
                }))
                .collect::<Vec<_>>(),
        }),
    };
    Some(component)
}

/// Render a view as a components v2 payload (top-level `components` array)
///
/// Text is cut to fit the message-wide limit; earlier blocks keep their text
/// and later ones are shortened or dropped.
pub fn render_components(view: &RenderedView) -> Value {
    let total: usize = view.texts().map(|t| t.chars().count()).sum();
    if total > MAX_TOTAL_TEXT {
        debug!(total, limit = MAX_TOTAL_TEXT, "Truncating message text");
    }

    let mut budget = MAX_TOTAL_TEXT;
    let components: Vec<Value> = view
        .blocks
        .iter()
        .filter_map(|block| block_component(block, &mut budget))
        .collect();

    json!([{
        "type": CONTAINER,
        "accent_color": view.accent.value(),
        "components": components,
    }])
}

/// Presenter posting and editing messages through a Discord webhook
pub struct DiscordWebhookPresenter {
    client: Client,
    webhook: Url,
}

impl DiscordWebhookPresenter {
    /// Create a presenter for a webhook URL, with a per-request timeout
    pub fn new(webhook_url: &str, timeout: Duration) -> Result<Self> {
        let webhook = Url::parse(webhook_url)
            .map_err(|e| BotError::ConfigError(format!("invalid Discord webhook URL: {e}")))?;
        if webhook.cannot_be_a_base() {
            return Err(BotError::ConfigError(
                "Discord webhook URL cannot be a base URL".to_string(),
            ));
        }

        Ok(Self {
            client: http_client(timeout)?,
            webhook,
        })
    }

    fn create_url(&self) -> Url {
        let mut url = self.webhook.clone();
        url.query_pairs_mut()
            .append_pair("wait", "true")
            .append_pair("with_components", "true");
        url
    }

    fn message_url(&self, handle: &MessageHandle) -> std::result::Result<Url, PresentationError> {
        let mut url = self.webhook.clone();
        url.path_segments_mut()
            .map_err(|()| PresentationError::InvalidResponse("webhook URL has no path".to_string()))?
            .pop_if_empty()
            .push("messages")
            .push(handle.id());
        url.query_pairs_mut().append_pair("with_components", "true");
        Ok(url)
    }
}

async fn rejected(response: Response) -> PresentationError {
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    PresentationError::Rejected { status, message }
}

fn transport_error(err: reqwest::Error) -> PresentationError {
    PresentationError::Unreachable(err.to_string())
}

#[async_trait]
impl Presenter for DiscordWebhookPresenter {
    async fn create(
        &self,
        view: &RenderedView,
    ) -> std::result::Result<MessageHandle, PresentationError> {
        let body = json!({
            "flags": IS_COMPONENTS_V2,
            "components": render_components(view),
        });

        let response = self
            .client
            .post(self.create_url())
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(rejected(response).await);
        }

        let message: Value = response
            .json()
            .await
            .map_err(|e| PresentationError::InvalidResponse(e.to_string()))?;

        let id = message
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| PresentationError::InvalidResponse("message has no id".to_string()))?;

        debug!(message_id = id, "Discord message created");
        Ok(MessageHandle::new(id))
    }

    async fn replace(
        &self,
        handle: &MessageHandle,
        view: &RenderedView,
    ) -> std::result::Result<(), PresentationError> {
        let body = json!({ "components": render_components(view) });

        let response = self
            .client
            .patch(self.message_url(handle)?)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        match response.status() {
            status if status.is_success() => {
                debug!(message_id = handle.id(), "Discord message updated");
                Ok(())
            }
            StatusCode::NOT_FOUND => Err(PresentationError::HandleExpired(handle.to_string())),
            _ => Err(rejected(response).await),
        }
    }
}

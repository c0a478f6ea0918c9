//! Image generation API client

use super::{http_client, scalar_to_string, status_failure};
use crate::config::BotConfig;
use crate::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use stockcard_core::{DataSource, FailureReason};

/// Parameters of an image request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImagePrompt {
    /// Text prompt
    pub prompt: String,
}

impl ImagePrompt {
    /// Create a prompt
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// A generated image as reported by the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    /// Where the image can be downloaded
    pub image_url: String,
    /// Prompt the image was generated from
    pub prompt: String,
    /// Generation id
    pub id: Option<String>,
    /// Generation status
    pub status: Option<String>,
    /// Generation time as reported upstream
    pub duration: Option<String>,
}

impl GeneratedImage {
    /// Parse the API's JSON body; `imageUrl` is required
    ///
    /// A missing `prompt` falls back to the prompt that was requested.
    pub fn from_value(value: &Value, requested: &ImagePrompt) -> std::result::Result<Self, FailureReason> {
        let field = |key: &str| {
            value
                .get(key)
                .and_then(scalar_to_string)
                .filter(|s| !s.trim().is_empty())
        };

        let image_url = field("imageUrl")
            .ok_or_else(|| FailureReason::malformed("image response has no imageUrl"))?;

        Ok(Self {
            image_url,
            prompt: field("prompt").unwrap_or_else(|| requested.prompt.clone()),
            id: field("id"),
            status: field("status"),
            duration: field("duration"),
        })
    }
}

/// Image generation API client
pub struct ImageApiClient {
    client: Client,
    url: String,
}

impl ImageApiClient {
    /// Create a client for an endpoint, with its own request timeout
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: http_client(timeout)?,
            url: url.into(),
        })
    }

    /// Create a client from bot configuration
    pub fn from_config(config: &BotConfig) -> Result<Self> {
        Self::new(config.image_api_url.clone(), config.request_timeout)
    }
}

#[async_trait]
impl DataSource for ImageApiClient {
    type Params = ImagePrompt;
    type Payload = GeneratedImage;

    async fn fetch(
        &self,
        params: &ImagePrompt,
    ) -> std::result::Result<GeneratedImage, FailureReason> {
        if params.prompt.trim().is_empty() {
            return Err(FailureReason::malformed("prompt must not be empty"));
        }

        let response = self
            .client
            .post(&self.url)
            .json(params)
            .send()
            .await
            .map_err(|e| FailureReason::unreachable(format!("Image request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(status_failure(response).await);
        }

        let body = response.json::<Value>().await.map_err(|e| {
            FailureReason::malformed(format!("Failed to parse image response: {e}"))
        })?;

        GeneratedImage::from_value(&body, params)
    }

    fn name(&self) -> &str {
        "image"
    }
}

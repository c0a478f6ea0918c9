//! HTTP data sources for bot commands

pub mod image;
pub mod stock;

pub use image::{GeneratedImage, ImageApiClient, ImagePrompt};
pub use stock::{CategoryData, StockApiClient, StockCategory, StockSnapshot};

use crate::error::Result;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;
use stockcard_core::FailureReason;

/// Longest response body excerpt kept in a failure message
const MAX_BODY_EXCERPT: usize = 200;

/// Build an HTTP client with the configured request timeout
pub(crate) fn http_client(timeout: Duration) -> Result<Client> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// Turn a non-success response into a transport failure carrying its status
pub(crate) async fn status_failure(response: Response) -> FailureReason {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let body = body.trim();

    let message = if body.is_empty() {
        status.canonical_reason().unwrap_or_default().to_string()
    } else {
        excerpt(body)
    };

    FailureReason::status(status.as_u16(), message)
}

fn excerpt(body: &str) -> String {
    if body.chars().count() <= MAX_BODY_EXCERPT {
        body.to_string()
    } else {
        let mut short: String = body.chars().take(MAX_BODY_EXCERPT).collect();
        short.push('…');
        short
    }
}

/// Loose scalar extraction: strings as-is, numbers and booleans stringified
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_to_string() {
        assert_eq!(scalar_to_string(&json!("50")), Some("50".to_string()));
        assert_eq!(scalar_to_string(&json!(120)), Some("120".to_string()));
        assert_eq!(scalar_to_string(&json!(1.5)), Some("1.5".to_string()));
        assert_eq!(scalar_to_string(&json!(null)), None);
        assert_eq!(scalar_to_string(&json!({"a": 1})), None);
    }

    #[test]
    fn test_excerpt_truncates_long_bodies() {
        let long = "x".repeat(500);
        let short = excerpt(&long);
        assert_eq!(short.chars().count(), MAX_BODY_EXCERPT + 1);
        assert!(short.ends_with('…'));

        assert_eq!(excerpt("short"), "short");
    }
}

//! Stock listing API client

use super::{http_client, scalar_to_string, status_failure};
use crate::config::BotConfig;
use crate::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;
use stockcard_core::{DataSource, FailureReason, ListingRecord};
use tracing::debug;

/// Shop categories reported by the stock API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockCategory {
    /// Seed shop
    Seeds,
    /// Gear shop
    Gear,
    /// Egg shop
    Eggs,
    /// Limited-time event shop
    Event,
    /// Cosmetic shop
    Cosmetics,
}

impl StockCategory {
    /// All categories, in display order
    pub const ALL: [Self; 5] = [
        Self::Seeds,
        Self::Gear,
        Self::Eggs,
        Self::Event,
        Self::Cosmetics,
    ];

    /// Key used in the API payload
    pub fn key(self) -> &'static str {
        match self {
            Self::Seeds => "seeds",
            Self::Gear => "gear",
            Self::Eggs => "eggs",
            Self::Event => "event",
            Self::Cosmetics => "cosmetics",
        }
    }

    /// Section heading shown to users
    pub fn heading(self) -> &'static str {
        match self {
            Self::Seeds => "🌱 Seeds Stock",
            Self::Gear => "🛠️ Gear Stock",
            Self::Eggs => "🥚 Egg Stock",
            Self::Event => "🎉 Event Stock",
            Self::Cosmetics => "🎨 Cosmetics Stock",
        }
    }
}

/// What the payload held under a category key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryData {
    /// A proper list of records
    Listed(Vec<ListingRecord>),
    /// The key was present but did not hold a list
    NotAList,
}

impl CategoryData {
    /// Records, or `None` when the upstream value was not a list
    pub fn records(&self) -> Option<&[ListingRecord]> {
        match self {
            Self::Listed(records) => Some(records),
            Self::NotAList => None,
        }
    }
}

/// One stock payload; categories missing upstream are simply not present
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockSnapshot {
    categories: BTreeMap<StockCategory, CategoryData>,
}

impl StockSnapshot {
    /// Build a snapshot from already-parsed categories
    pub fn from_categories(
        categories: impl IntoIterator<Item = (StockCategory, CategoryData)>,
    ) -> Self {
        Self {
            categories: categories.into_iter().collect(),
        }
    }

    /// Parse the API's JSON body
    ///
    /// The top level must be an object; unknown keys are ignored and
    /// `null` counts as absent.
    pub fn from_value(value: &Value) -> std::result::Result<Self, FailureReason> {
        let object = value.as_object().ok_or_else(|| {
            FailureReason::malformed("stock response is not a JSON object")
        })?;

        let categories = StockCategory::ALL
            .into_iter()
            .filter_map(|category| {
                let data = match object.get(category.key())? {
                    Value::Null => return None,
                    Value::Array(items) => {
                        CategoryData::Listed(items.iter().map(parse_record).collect())
                    }
                    _ => CategoryData::NotAList,
                };
                Some((category, data))
            });

        Ok(Self::from_categories(categories))
    }

    /// Data for one category, `None` when the category is absent
    pub fn get(&self, category: StockCategory) -> Option<&CategoryData> {
        self.categories.get(&category)
    }

    /// Present categories, in display order
    pub fn present(&self) -> impl Iterator<Item = (StockCategory, &CategoryData)> {
        self.categories.iter().map(|(category, data)| (*category, data))
    }
}

fn parse_record(item: &Value) -> ListingRecord {
    ListingRecord::new(
        item.get("name").and_then(scalar_to_string),
        item.get("value").and_then(scalar_to_string),
    )
}

/// Stock API client
pub struct StockApiClient {
    client: Client,
    url: String,
}

impl StockApiClient {
    /// Create a client for an endpoint, with its own request timeout
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: http_client(timeout)?,
            url: url.into(),
        })
    }

    /// Create a client from bot configuration
    pub fn from_config(config: &BotConfig) -> Result<Self> {
        Self::new(config.stock_api_url.clone(), config.request_timeout)
    }
}

#[async_trait]
impl DataSource for StockApiClient {
    type Params = ();
    type Payload = StockSnapshot;

    async fn fetch(&self, _params: &()) -> std::result::Result<StockSnapshot, FailureReason> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FailureReason::unreachable(format!("Stock request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(status_failure(response).await);
        }

        let body = response.json::<Value>().await.map_err(|e| {
            FailureReason::malformed(format!("Failed to parse stock response: {e}"))
        })?;

        let snapshot = StockSnapshot::from_value(&body)?;
        debug!(
            categories = snapshot.present().count(),
            "Parsed stock snapshot"
        );
        Ok(snapshot)
    }

    fn name(&self) -> &str {
        "stock"
    }
}

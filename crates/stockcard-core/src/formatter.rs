//! Listing formatter
//!
//! Turns a list of loosely-typed records into the multi-line body of a
//! section. Never fails: missing data degrades into placeholder text.

/// Returned when the source list is absent or was not a list at all
pub const NO_DATA_AVAILABLE: &str = "No data available";

/// Returned when the list exists but nothing survives the cap
pub const NO_ITEMS_AVAILABLE: &str = "No items available";

const UNKNOWN_NAME: &str = "Unknown";
const ZERO_VALUE: &str = "0";

/// A single listing entry, as loose as the upstream API sends it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingRecord {
    /// Display name
    pub name: Option<String>,
    /// Quantity, price or other value, already stringified
    pub value: Option<String>,
}

impl ListingRecord {
    /// Create a record
    pub fn new(name: Option<String>, value: Option<String>) -> Self {
        Self { name, value }
    }

    fn line(&self) -> String {
        let name = non_empty(self.name.as_deref()).unwrap_or(UNKNOWN_NAME);
        let value = non_empty(self.value.as_deref()).unwrap_or(ZERO_VALUE);
        format!("{name} - {value}")
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// Format up to `cap` records as `"<name> - <value>"` lines
///
/// # Example
///
/// ```
/// use stockcard_core::{format_category, ListingRecord};
///
/// let records = vec![
///     ListingRecord::new(Some("Carrot".into()), Some("50".into())),
///     ListingRecord::new(None, Some("120".into())),
/// ];
///
/// assert_eq!(format_category(Some(records.as_slice()), 9), "Carrot - 50\nUnknown - 120");
/// assert_eq!(format_category(None, 9), "No data available");
/// assert_eq!(format_category(Some(records.as_slice()), 0), "No items available");
/// ```
pub fn format_category(records: Option<&[ListingRecord]>, cap: usize) -> String {
    let Some(records) = records else {
        return NO_DATA_AVAILABLE.to_string();
    };

    let lines: Vec<String> = records.iter().take(cap).map(ListingRecord::line).collect();

    if lines.is_empty() {
        NO_ITEMS_AVAILABLE.to_string()
    } else {
        lines.join("\n")
    }
}

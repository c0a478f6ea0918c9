//! View composition
//!
//! Pure builders that turn a [`ViewSpec`] (or a loading title, or an error
//! message) into a [`RenderedView`]. Nothing here performs I/O; the current
//! time is passed in by the caller.

use crate::block::{ActionRow, ContentBlock, RenderedView};
use crate::view::{ViewConfig, ViewSpec};
use chrono::{DateTime, Utc};

/// Detail shown when an error carries no message
pub const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// Builds loading, success and error views
#[derive(Debug, Clone, Copy, Default)]
pub struct Composer {
    config: ViewConfig,
}

impl Composer {
    /// Create a composer with resolved colors
    pub fn new(config: ViewConfig) -> Self {
        Self { config }
    }

    /// Colors this composer applies
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Provisional view shown while the fetch is in flight
    pub fn build_loading_view(&self, title: &str) -> RenderedView {
        let mut view = RenderedView::new(self.config.accent);
        view.push(ContentBlock::text(format!("⏳ Loading {title}...")));
        view
    }

    /// Final view for a successful fetch
    ///
    /// Layout: title, separator, then each section followed by a separator,
    /// then the optional image, the optional link row, and a timestamp line.
    pub fn build_success_view(&self, spec: &ViewSpec, at: DateTime<Utc>) -> RenderedView {
        let mut view = RenderedView::new(spec.accent);

        view.push(ContentBlock::text(format!("## {}", spec.title)));
        view.push(ContentBlock::Separator);

        for section in &spec.sections {
            view.push(ContentBlock::text(format!(
                "### {}\n{}",
                section.heading, section.body
            )));
            view.push(ContentBlock::Separator);
        }

        if let Some(url) = &spec.image_url {
            view.push(ContentBlock::image(url.clone()));
        }

        if let Some(row) = ActionRow::new(spec.action_links.clone()) {
            view.push(ContentBlock::ActionRow(row));
        }

        view.push(ContentBlock::text(timestamp_line(spec.footer.as_deref(), at)));
        view
    }

    /// Final view for a failed fetch
    pub fn build_error_view(&self, message: &str, at: DateTime<Utc>) -> RenderedView {
        let detail = if message.trim().is_empty() {
            UNKNOWN_ERROR
        } else {
            message
        };

        let mut view = RenderedView::new(self.config.error);
        view.push(ContentBlock::text("## ❌ Failed to load data"));
        view.push(ContentBlock::Separator);
        view.push(ContentBlock::text(detail));
        view.push(ContentBlock::Separator);
        view.push(ContentBlock::text(timestamp_line(None, at)));
        view
    }
}

/// Relative timestamp markup (`<t:UNIX:R>`), rendered by the client as "5 minutes ago"
pub fn relative_timestamp(at: DateTime<Utc>) -> String {
    format!("<t:{}:R>", at.timestamp())
}

fn timestamp_line(footer: Option<&str>, at: DateTime<Utc>) -> String {
    match footer.filter(|f| !f.is_empty()) {
        Some(footer) => format!("-# {footer} • Updated {}", relative_timestamp(at)),
        None => format!("-# Updated {}", relative_timestamp(at)),
    }
}

//! Semantic view descriptions

use crate::block::ActionLink;
use crate::color::Color;
use serde::{Deserialize, Serialize};

/// A titled group of pre-formatted lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Section heading
    pub heading: String,
    /// Pre-formatted body text
    pub body: String,
}

impl Section {
    /// Create a new section
    pub fn new(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            body: body.into(),
        }
    }
}

/// Everything the composer needs to build a success view
///
/// Which sections exist is decided by whoever builds the spec; the composer
/// renders exactly the sections it is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSpec {
    /// View title
    pub title: String,
    /// Container accent color
    pub accent: Color,
    /// Sections in display order
    pub sections: Vec<Section>,
    /// Optional inline image
    pub image_url: Option<String>,
    /// Optional footer text shown next to the timestamp
    pub footer: Option<String>,
    /// Link buttons, in display order
    pub action_links: Vec<ActionLink>,
}

impl ViewSpec {
    /// Create a spec with a title and accent and nothing else
    pub fn new(title: impl Into<String>, accent: Color) -> Self {
        Self {
            title: title.into(),
            accent,
            sections: Vec::new(),
            image_url: None,
            footer: None,
            action_links: Vec::new(),
        }
    }

    /// Append a section
    pub fn with_section(mut self, heading: impl Into<String>, body: impl Into<String>) -> Self {
        self.sections.push(Section::new(heading, body));
        self
    }

    /// Set the inline image
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Set the footer
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Append a link button
    pub fn with_link(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.action_links.push(ActionLink::new(label, url));
        self
    }
}

/// Colors used by the composer, resolved once per invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Accent for loading and success views
    pub accent: Color,
    /// Accent for error views
    pub error: Color,
}

impl ViewConfig {
    /// Resolve colors from optional hex strings, falling back to the defaults
    pub fn from_hex(accent: Option<&str>, error: Option<&str>) -> Self {
        Self {
            accent: Color::parse_or(accent, Color::DEFAULT_ACCENT),
            error: Color::parse_or(error, Color::DEFAULT_ERROR),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            accent: Color::DEFAULT_ACCENT,
            error: Color::DEFAULT_ERROR,
        }
    }
}

//! Renderable content blocks
//!
//! A view is an ordered sequence of blocks; the order in which blocks are
//! pushed is the order in which a presenter draws them.

use crate::color::Color;
use serde::Serialize;

/// A labeled external link, rendered as a link button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionLink {
    /// Button label
    pub label: String,
    /// Target URL
    pub url: String,
}

impl ActionLink {
    /// Create a new link
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// A row of one or more link buttons
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionRow {
    links: Vec<ActionLink>,
}

impl ActionRow {
    /// Group links into a row; an empty row is not representable
    pub fn new(links: Vec<ActionLink>) -> Option<Self> {
        if links.is_empty() {
            None
        } else {
            Some(Self { links })
        }
    }

    /// Links in display order
    pub fn links(&self) -> &[ActionLink] {
        &self.links
    }
}

/// One renderable unit of a view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Markdown text section
    Text {
        /// Text content
        content: String,
    },

    /// Visual divider
    Separator,

    /// Image shown inline
    Image {
        /// Image URL
        url: String,
    },

    /// Row of link buttons
    ActionRow(ActionRow),
}

impl ContentBlock {
    /// Create a text block
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    /// Create an image block
    pub fn image(url: impl Into<String>) -> Self {
        Self::Image { url: url.into() }
    }

    /// Text content, if this is a text block
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { content } => Some(content),
            _ => None,
        }
    }
}

/// A composed view: the block sequence plus the container accent color
///
/// The accent is metadata for the presenter, not a block of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedView {
    /// Accent color applied to the surrounding container
    pub accent: Color,
    /// Blocks in render order
    pub blocks: Vec<ContentBlock>,
}

impl RenderedView {
    /// Create an empty view with the given accent
    pub fn new(accent: Color) -> Self {
        Self {
            accent,
            blocks: Vec::new(),
        }
    }

    /// Append a block
    pub fn push(&mut self, block: ContentBlock) {
        self.blocks.push(block);
    }

    /// Iterate over the text content of all text blocks
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(ContentBlock::as_text)
    }

    /// Number of blocks
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}

//! Rich-message composition and refresh protocol for stockcard
//!
//! This crate turns a semantic description of a message (title, accent color,
//! sections, image, links) into an ordered sequence of [`ContentBlock`]s, and
//! drives the loading -> fetch -> success | error lifecycle that shows the
//! result to a user.
//!
//! # Architecture
//!
//! - [`ContentBlock`] / [`RenderedView`]: the renderable component tree
//! - [`format_category`]: capped, human readable listing text
//! - [`Composer`]: pure builders for loading, success and error views
//! - [`DataSource`] / [`Presenter`]: the two collaborators injected per command
//! - [`RefreshController`]: the single-shot state machine tying them together
//!
//! # Example
//!
//! ```rust,ignore
//! use stockcard_core::{Composer, RefreshController, ViewConfig, ViewSpec};
//!
//! let composer = Composer::new(ViewConfig::default());
//! let controller = RefreshController::new(&presenter, &composer);
//!
//! let state = controller
//!     .run("Stock", &source, &(), |snapshot| Ok(ViewSpec::new("Stock", accent)))
//!     .await?;
//! ```

pub mod block;
pub mod color;
pub mod composer;
pub mod controller;
pub mod error;
pub mod formatter;
pub mod presenter;
pub mod source;
pub mod view;

pub use block::{ActionLink, ActionRow, ContentBlock, RenderedView};
pub use color::Color;
pub use composer::Composer;
pub use controller::{RefreshController, RefreshState};
pub use error::{Error, FailureReason, PresentationError, Result};
pub use formatter::{ListingRecord, NO_DATA_AVAILABLE, NO_ITEMS_AVAILABLE, format_category};
pub use presenter::{MessageHandle, Presenter};
pub use source::DataSource;
pub use view::{Section, ViewConfig, ViewSpec};

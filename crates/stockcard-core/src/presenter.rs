//! Presenter trait definition

use crate::block::RenderedView;
use crate::error::PresentationError;
use async_trait::async_trait;
use std::fmt;

/// Opaque reference to a message shown by a presenter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageHandle(String);

impl MessageHandle {
    /// Wrap a platform message id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Platform message id
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The host platform's message channel
///
/// Both operations are single attempts; a failure ends the invocation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Presenter: Send + Sync {
    /// Display a new message and return a handle to it
    async fn create(&self, view: &RenderedView) -> Result<MessageHandle, PresentationError>;

    /// Replace the content of a previously created message
    async fn replace(
        &self,
        handle: &MessageHandle,
        view: &RenderedView,
    ) -> Result<(), PresentationError>;
}

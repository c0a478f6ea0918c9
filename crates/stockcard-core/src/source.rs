//! Data source trait definition

use crate::error::FailureReason;
use async_trait::async_trait;

/// External collaborator performing the single network fetch for a command
///
/// Implementations make exactly one attempt per call and never retry. Any
/// timeout is the implementation's own business; the caller waits for
/// whatever the call resolves to.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Per-invocation parameters (`()` when the command takes none)
    type Params: Send + Sync;

    /// Successful payload
    type Payload: Send;

    /// Fetch the payload
    async fn fetch(&self, params: &Self::Params) -> Result<Self::Payload, FailureReason>;

    /// Name used in logs
    fn name(&self) -> &str;
}

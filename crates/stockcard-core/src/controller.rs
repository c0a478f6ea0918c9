//! Refresh controller
//!
//! Drives one invocation through `Loading -> Succeeded | Failed`:
//!
//! 1. compose a loading view and `create` it, obtaining the message handle
//! 2. fetch once from the data source
//! 3. map the payload into a [`ViewSpec`] and compose the success view, or
//!    compose an error view from the failure
//! 4. `replace` the loading view with the result
//!
//! Fetch and mapping failures end up on screen. Presenter failures are
//! returned to the caller, since the display channel itself is unusable.

use crate::composer::Composer;
use crate::error::{FailureReason, Result};
use crate::presenter::Presenter;
use crate::source::DataSource;
use crate::view::ViewSpec;
use chrono::Utc;
use tracing::{debug, error, info, warn};

/// Lifecycle of a single invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshState {
    /// Loading view shown, fetch in flight
    Loading,
    /// Success view shown
    Succeeded,
    /// Error view shown
    Failed,
}

impl RefreshState {
    /// Whether the state can no longer change
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Loading)
    }

    /// Single transition out of `Loading`; terminal states stay put
    fn settle(self, succeeded: bool) -> Self {
        match self {
            Self::Loading if succeeded => Self::Succeeded,
            Self::Loading => Self::Failed,
            terminal => terminal,
        }
    }
}

/// Runs the load -> fetch -> replace protocol against one presenter
///
/// The controller holds no state between calls to [`RefreshController::run`];
/// concurrent invocations may share one controller.
pub struct RefreshController<'a, P: Presenter + ?Sized> {
    presenter: &'a P,
    composer: &'a Composer,
}

impl<'a, P: Presenter + ?Sized> RefreshController<'a, P> {
    /// Create a controller over a presenter and composer
    pub fn new(presenter: &'a P, composer: &'a Composer) -> Self {
        Self {
            presenter,
            composer,
        }
    }

    /// Run one invocation to completion
    ///
    /// `map` turns the fetched payload into a view spec; returning an error
    /// from it is treated exactly like a failed fetch. `map` must not panic:
    /// a panic unwinds past the replace step and leaves the loading view on
    /// screen. Report bad payloads through the returned `FailureReason`.
    ///
    /// Returns the terminal state on success. Returns an error only when the
    /// presenter fails to create or replace the message.
    pub async fn run<D, F>(
        &self,
        title: &str,
        source: &D,
        params: &D::Params,
        map: F,
    ) -> Result<RefreshState>
    where
        D: DataSource + ?Sized,
        F: FnOnce(D::Payload) -> std::result::Result<ViewSpec, FailureReason> + Send,
    {
        let state = RefreshState::Loading;

        let loading = self.composer.build_loading_view(title);
        let handle = self.presenter.create(&loading).await.map_err(|e| {
            error!(source = source.name(), error = %e, "Failed to create loading view");
            e
        })?;
        debug!(source = source.name(), handle = %handle, "Loading view created");

        let outcome = source.fetch(params).await.and_then(map);

        let (view, state) = match outcome {
            Ok(spec) => {
                info!(
                    source = source.name(),
                    sections = spec.sections.len(),
                    "Fetch succeeded"
                );
                (
                    self.composer.build_success_view(&spec, Utc::now()),
                    state.settle(true),
                )
            }
            Err(reason) => {
                warn!(source = source.name(), reason = %reason, "Fetch failed");
                (
                    self.composer.build_error_view(&reason.to_string(), Utc::now()),
                    state.settle(false),
                )
            }
        };

        debug_assert!(state.is_terminal());

        self.presenter.replace(&handle, &view).await.map_err(|e| {
            error!(source = source.name(), handle = %handle, error = %e, "Failed to replace view");
            e
        })?;
        debug!(
            source = source.name(),
            handle = %handle,
            state = ?state,
            blocks = view.block_count(),
            "View replaced"
        );

        Ok(state)
    }
}

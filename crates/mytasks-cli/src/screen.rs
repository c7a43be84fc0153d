/*
[INPUT]:  Pending task requests and a parent cancellation token
[OUTPUT]: Request lifecycle state and a scope that cancels requests on teardown
[POS]:    Presentation layer - shared screen plumbing
[UPDATE]: When the request lifecycle or cancellation rules change
*/

use mytasks_adapter::{Result, TaskClientError};
use std::future::Future;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

/// Lifecycle of one screen request: idle -> loading -> (loaded | failed)
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Run `request` inside `scope`, recording the outcome.
    ///
    /// A cancelled request leaves the state as it was after entering
    /// `Loading`: nothing is written once the scope is gone.
    pub async fn track<F>(&mut self, scope: &ViewScope, action: &str, request: F)
    where
        F: Future<Output = Result<T>>,
    {
        *self = LoadState::Loading;
        match scope.run(request).await {
            Ok(value) => *self = LoadState::Loaded(value),
            Err(err) if err.is_cancelled() => {
                debug!(action, "request cancelled; screen state left untouched");
            }
            Err(err) => {
                error!(action, error = %err, "request failed");
                *self = LoadState::Failed(err.to_string());
            }
        }
    }
}

/// Cancellation scope bound to a screen's lifetime.
///
/// Dropping the scope cancels whatever request is still running in it.
#[derive(Debug, Default)]
pub struct ViewScope {
    token: CancellationToken,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope that is also cancelled when `parent` is
    pub fn child_of(parent: &CancellationToken) -> Self {
        Self {
            token: parent.child_token(),
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Await `request` unless the scope is cancelled first
    pub async fn run<T, F>(&self, request: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(TaskClientError::Cancelled),
            result = request => result,
        }
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

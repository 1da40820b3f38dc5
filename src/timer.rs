//! Single-slot cancellable timer handle.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio_util::sync::CancellationToken;

/// Holds the one outstanding pending action of an input field.
///
/// Arming a new action cancels the previous one. Completions go through
/// [`PendingTimer::commit`], which takes the same lock as `rearm` and
/// `cancel`, so a superseded action can never apply its result.
#[derive(Debug, Default)]
pub struct PendingTimer {
    slot: Mutex<Option<CancellationToken>>,
}

impl PendingTimer {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> MutexGuard<'_, Option<CancellationToken>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Cancels the pending action, if any, and returns a token for a new one.
    pub fn rearm(&self) -> CancellationToken {
        let token = CancellationToken::new();
        if let Some(previous) = self.slot().replace(token.clone()) {
            previous.cancel();
        }
        token
    }

    /// Cancels the pending action, if any.
    pub fn cancel(&self) {
        if let Some(previous) = self.slot().take() {
            previous.cancel();
        }
    }

    /// Whether an action is armed and has not completed or been cancelled.
    pub fn is_armed(&self) -> bool {
        self.slot().as_ref().is_some_and(|t| !t.is_cancelled())
    }

    /// Runs `f` if `token` is still the current action, then disarms.
    ///
    /// Returns `false` without running `f` when the action was superseded.
    pub fn commit<F: FnOnce()>(&self, token: &CancellationToken, f: F) -> bool {
        let mut slot = self.slot();
        if token.is_cancelled() {
            return false;
        }
        f();
        *slot = None;
        true
    }
}

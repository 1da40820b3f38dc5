//! Debounced username availability checks.
//!
//! Every keystroke in the username field goes to
//! [`AvailabilityProbe::on_input`]. Short names are rejected immediately;
//! longer ones show a loading state and, once typing pauses for the debounce
//! interval, are resolved through an [`AvailabilityLookup`]. A new keystroke
//! cancels whatever check is still pending, so only the latest input ever
//! resolves.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::watch;

use crate::timer::PendingTimer;
use crate::view::{StatusLine, Tone};

/// Answer of an availability backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Taken,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Username lookup failed: {0}")]
    Backend(String),
    #[error("Username lookup timed out after {0:?}")]
    Timeout(Duration),
    #[error("Reserved username list is not initialized")]
    NotInitialized,
}

/// Client of the service that knows which usernames exist.
pub trait AvailabilityLookup: Send + Sync + 'static {
    fn check(&self, name: &str) -> impl Future<Output = Result<Availability, LookupError>> + Send;
}

/// What the username feedback line currently says.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeState {
    /// No input received yet.
    Idle,
    TooShort,
    Checking,
    Available,
    Taken,
    /// The lookup failed or timed out.
    Unverified,
}

impl ProbeState {
    fn render<S: StatusLine + ?Sized>(self, status: &S) {
        match self {
            ProbeState::Idle | ProbeState::TooShort => status.clear(),
            ProbeState::Checking => status.show("Checking...", Tone::Neutral),
            ProbeState::Available => status.show("✓ Available", Tone::Success),
            ProbeState::Taken => status.show("✗ Already taken", Tone::Danger),
            ProbeState::Unverified => status.show("Could not verify username", Tone::Danger),
        }
    }
}

impl From<Result<Availability, LookupError>> for ProbeState {
    fn from(result: Result<Availability, LookupError>) -> Self {
        match result {
            Ok(Availability::Available) => ProbeState::Available,
            Ok(Availability::Taken) => ProbeState::Taken,
            Err(_) => ProbeState::Unverified,
        }
    }
}

/// Timing and threshold settings of the probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Minimum trimmed length worth checking, in UTF-16 code units as a
    /// browser counts a field's length.
    pub min_length: usize,
    /// Quiet period after the last keystroke before the lookup starts.
    pub debounce: Duration,
    /// Upper bound on a single lookup.
    pub lookup_timeout: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            min_length: 3,
            debounce: Duration::from_millis(300),
            lookup_timeout: Duration::from_secs(5),
        }
    }
}

impl ProbeConfig {
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_lookup_timeout(mut self, lookup_timeout: Duration) -> Self {
        self.lookup_timeout = lookup_timeout;
        self
    }
}

pub struct AvailabilityProbe<L, S> {
    lookup: Arc<L>,
    status: Arc<S>,
    config: ProbeConfig,
    pending: Arc<PendingTimer>,
    state: Arc<watch::Sender<ProbeState>>,
}

impl<L, S> AvailabilityProbe<L, S>
where
    L: AvailabilityLookup,
    S: StatusLine + 'static,
{
    /// Returns `None` when the page has no feedback element.
    pub fn attach(lookup: L, status: Option<S>, config: ProbeConfig) -> Option<Self> {
        let status = status?;
        let (state, _) = watch::channel(ProbeState::Idle);
        Some(Self {
            lookup: Arc::new(lookup),
            status: Arc::new(status),
            config,
            pending: Arc::new(PendingTimer::new()),
            state: Arc::new(state),
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<ProbeState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> ProbeState {
        *self.state.borrow()
    }

    fn publish(&self, state: ProbeState) {
        state.render(&*self.status);
        self.state.send_replace(state);
    }

    /// Handles one input event and returns the state shown synchronously.
    ///
    /// The check runs on the current Tokio runtime; outside of one the name
    /// resolves to [`ProbeState::Unverified`] straight away.
    pub fn on_input(&self, raw: &str) -> ProbeState {
        let name = raw.trim();

        if name.encode_utf16().count() < self.config.min_length {
            self.pending.cancel();
            self.publish(ProbeState::TooShort);
            return ProbeState::TooShort;
        }

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            #[cfg(feature = "tracing")]
            tracing::error!("Username {:?} not checked: no Tokio runtime", name);
            self.pending.cancel();
            self.publish(ProbeState::Unverified);
            return ProbeState::Unverified;
        };

        let token = self.pending.rearm();
        self.publish(ProbeState::Checking);

        let name = name.to_string();
        let lookup = Arc::clone(&self.lookup);
        let status = Arc::clone(&self.status);
        let pending = Arc::clone(&self.pending);
        let state = Arc::clone(&self.state);
        let debounce = self.config.debounce;
        let limit = self.config.lookup_timeout;

        runtime.spawn(async move {
            if token
                .run_until_cancelled(tokio::time::sleep(debounce))
                .await
                .is_none()
            {
                return;
            }

            let check = tokio::time::timeout(limit, lookup.check(&name));
            let Some(outcome) = token.run_until_cancelled(check).await else {
                return;
            };
            let result = outcome.unwrap_or(Err(LookupError::Timeout(limit)));

            #[cfg(feature = "tracing")]
            match &result {
                Ok(availability) => tracing::info!("Username {:?} resolved: {:?}", name, availability),
                Err(e) => tracing::warn!("Username {:?} could not be verified: {}", name, e),
            }

            let resolved = ProbeState::from(result);
            pending.commit(&token, || {
                resolved.render(&*status);
                state.send_replace(resolved);
            });
        });

        ProbeState::Checking
    }

    /// Cancels the pending check without touching the feedback line.
    pub fn cancel(&self) {
        self.pending.cancel();
    }
}

impl<L, S> Drop for AvailabilityProbe<L, S> {
    fn drop(&mut self) {
        self.pending.cancel();
    }
}

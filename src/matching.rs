//! Password confirmation matching.

use secrecy::{ExposeSecret, SecretString};

use crate::view::{StatusLine, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// At least one of the two fields is empty.
    Empty,
    Match,
    Mismatch,
}

pub fn check_match(password: &SecretString, confirmation: &SecretString) -> MatchState {
    let (a, b) = (password.expose_secret(), confirmation.expose_secret());
    if a.is_empty() || b.is_empty() {
        MatchState::Empty
    } else if a == b {
        MatchState::Match
    } else {
        MatchState::Mismatch
    }
}

/// Confirmation feedback under the second password field.
///
/// The host calls [`MatchIndicator::on_input`] on every keystroke in either
/// field.
pub struct MatchIndicator<S> {
    status: S,
}

impl<S: StatusLine> MatchIndicator<S> {
    pub fn attach(status: Option<S>) -> Option<Self> {
        status.map(|status| Self { status })
    }

    pub fn on_input(&self, password: &SecretString, confirmation: &SecretString) -> MatchState {
        let state = check_match(password, confirmation);
        match state {
            MatchState::Empty => self.status.clear(),
            MatchState::Match => self.status.show("✓ Passwords match", Tone::Success),
            MatchState::Mismatch => self.status.show("✗ Passwords do not match", Tone::Danger),
        }
        state
    }
}

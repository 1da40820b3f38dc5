//! Headless form interactivity library
//!
//! Client-side behaviour for a registration form and a sequential
//! questionnaire: password strength, confirmation matching, debounced
//! username availability, required-field validation, answer capture with
//! navigation, and entrance transitions. The host page resolves its elements
//! and hands them to each component as handles (see [`view`]); a component
//! whose elements are missing is simply not attached.
//!
//! # Features
//!
//! - `async` (default): Enables the debounced availability probe and
//!   timed transitions (Tokio)
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `QUIZ_RESERVED_USERNAMES_PATH`: Custom path to the reserved username
//!   list (default: `./assets/reserved-usernames.txt`)
//!
//! # Example
//!
//! ```rust
//! use quiz_forms::{check_match, score_password, MatchState, StrengthTier};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abcdef12!@".to_string().into());
//! let confirmation = SecretString::new("Abcdef12!@".to_string().into());
//!
//! let strength = score_password(&password);
//! assert_eq!(strength.tier, StrengthTier::Strong);
//! assert_eq!(strength.percentage, 100);
//! assert_eq!(check_match(&password, &confirmation), MatchState::Match);
//! ```

// Internal modules
mod criteria;
mod guard;
mod matching;
mod quiz;
mod relay;
mod reserved;
mod strength;
pub mod transition;
pub mod view;

#[cfg(feature = "async")]
mod availability;
#[cfg(feature = "async")]
mod timer;

#[cfg(test)]
mod testing;

// Public API
pub use criteria::criteria_breakdown;
pub use guard::{FormError, FormField, FormGuard};
pub use matching::{check_match, MatchIndicator, MatchState};
pub use quiz::{AnswerSummary, Classification, Guidance, QuizError, QuizOutcome, QUESTION_COUNT};
pub use relay::{
    AnswerForm, AnswerRecord, AnswerRelay, AnswerSheet, AnswerSink, Destination, RelayError,
    SaveError, StepMode,
};
pub use reserved::{
    init_reserved_usernames, init_reserved_usernames_from_path, is_reserved,
    reserved_usernames, reserved_usernames_path, ReservedError,
};
pub use strength::{criteria_score, score_password, StrengthMeter, StrengthResult, StrengthTier};

#[cfg(feature = "async")]
pub use availability::{
    Availability, AvailabilityLookup, AvailabilityProbe, LookupError, ProbeConfig, ProbeState,
};
#[cfg(feature = "async")]
pub use reserved::ReservedNameLookup;
#[cfg(feature = "async")]
pub use timer::PendingTimer;

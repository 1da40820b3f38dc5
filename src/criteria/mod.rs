//! Password strength criteria
//!
//! Each criterion awards points for one aspect of a password.

mod length;
mod variety;

pub use length::length_criterion;
pub use variety::character_variety_criterion;

/// Points awarded by a single criterion.
pub type CriterionResult = u8;

/// A criterion function, evaluated against the exposed password text.
pub type Criterion = fn(&str) -> CriterionResult;

/// All criteria, in evaluation order. Their points sum to at most 6.
pub const CRITERIA: [(&str, Criterion); 2] = [
    ("length", length_criterion),
    ("variety", character_variety_criterion),
];

/// Points awarded by each criterion, keyed by criterion name.
pub fn criteria_breakdown(password: &str) -> Vec<(&'static str, CriterionResult)> {
    CRITERIA
        .iter()
        .map(|&(name, criterion)| (name, criterion(password)))
        .collect()
}

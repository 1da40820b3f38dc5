//! Length criterion - one point per length threshold reached.

use super::CriterionResult;

const MIN_LENGTH: usize = 8;
const LONG_LENGTH: usize = 12;

/// Awards a point for reaching 8 characters and another for reaching 12.
///
/// Length is counted in UTF-16 code units, the unit browsers report for a
/// text field's length, so a character outside the BMP counts twice.
pub fn length_criterion(password: &str) -> CriterionResult {
    let len = password.encode_utf16().count();
    [MIN_LENGTH, LONG_LENGTH]
        .iter()
        .filter(|&&threshold| len >= threshold)
        .count() as CriterionResult
}

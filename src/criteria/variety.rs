//! Character variety criterion - uppercase, lowercase, digits, symbols.

use super::CriterionResult;

/// Awards one point for each character class present.
///
/// Classes are ASCII: `A-Z`, `a-z`, `0-9`, and anything outside
/// `[A-Za-z0-9]` (so accented letters count as symbols).
pub fn character_variety_criterion(password: &str) -> CriterionResult {
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| !c.is_ascii_alphanumeric());

    [has_upper, has_lower, has_digit, has_special]
        .iter()
        .filter(|&&present| present)
        .count() as CriterionResult
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variety_criterion_lowercase_only() {
        assert_eq!(character_variety_criterion("lowercase"), 1);
    }

    #[test]
    fn test_variety_criterion_missing_special() {
        assert_eq!(character_variety_criterion("NoSpecial123"), 3);
    }

    #[test]
    fn test_variety_criterion_all_categories() {
        assert_eq!(character_variety_criterion("HasAll123!@#"), 4);
    }

    #[test]
    fn test_variety_criterion_non_ascii_is_special() {
        assert_eq!(character_variety_criterion("ü"), 1);
        assert_eq!(character_variety_criterion("Üa"), 2);
    }

    #[test]
    fn test_variety_criterion_empty() {
        assert_eq!(character_variety_criterion(""), 0);
    }
}

//! Password strength scoring and the strength meter.

use secrecy::{ExposeSecret, SecretString};

use crate::criteria::criteria_breakdown;
use crate::view::{MeterBar, StatusLine, Tone};

/// Strength tier derived from the criteria score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthTier {
    /// Nothing typed yet.
    None,
    Weak,
    Moderate,
    Strong,
}

impl StrengthTier {
    /// Maps a criteria score (0..=6) to a tier for a non-empty password.
    fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthTier::Weak,
            3..=4 => StrengthTier::Moderate,
            _ => StrengthTier::Strong,
        }
    }

    pub fn percentage(self) -> u8 {
        match self {
            StrengthTier::None => 0,
            StrengthTier::Weak => 33,
            StrengthTier::Moderate => 66,
            StrengthTier::Strong => 100,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::None => "",
            StrengthTier::Weak => "Weak",
            StrengthTier::Moderate => "Moderate",
            StrengthTier::Strong => "Strong",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            StrengthTier::None => Tone::Transparent,
            StrengthTier::Weak => Tone::Danger,
            StrengthTier::Moderate => Tone::Warning,
            StrengthTier::Strong => Tone::Success,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthResult {
    pub percentage: u8,
    pub tier: StrengthTier,
}

impl From<StrengthTier> for StrengthResult {
    fn from(tier: StrengthTier) -> Self {
        Self {
            percentage: tier.percentage(),
            tier,
        }
    }
}

/// Sums the points of every criterion.
pub fn criteria_score(password: &str) -> u8 {
    let breakdown = criteria_breakdown(password);

    #[cfg(feature = "tracing")]
    tracing::trace!("Password criteria: {:?}", breakdown);

    breakdown.iter().map(|(_, points)| points).sum()
}

/// Scores a password.
///
/// An empty password is [`StrengthTier::None`]; otherwise the tier follows
/// the criteria score: up to 2 is weak, 3-4 moderate, 5-6 strong.
pub fn score_password(password: &SecretString) -> StrengthResult {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return StrengthTier::None.into();
    }
    StrengthTier::from_score(criteria_score(pwd)).into()
}

/// Keeps the strength bar and its caption in sync with the password input.
pub struct StrengthMeter<B, T> {
    bar: B,
    text: T,
}

impl<B: MeterBar, T: StatusLine> StrengthMeter<B, T> {
    /// Returns `None` when the page lacks either element.
    pub fn attach(bar: Option<B>, text: Option<T>) -> Option<Self> {
        Some(Self {
            bar: bar?,
            text: text?,
        })
    }

    pub fn on_input(&self, password: &SecretString) -> StrengthResult {
        let result = score_password(password);
        let tone = result.tier.tone();
        self.bar.set_fill(result.percentage, tone);
        self.text.show(result.tier.label(), tone);
        result
    }
}

//! Element handles supplied by the host page.
//!
//! Components never look elements up themselves. The host resolves its
//! markup once and passes the handles it has; a component whose handles are
//! missing is simply not attached.

/// Colour role of a piece of feedback, mapped to the page's CSS variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Success,
    Warning,
    Danger,
    Transparent,
}

impl Tone {
    pub fn css_var(self) -> &'static str {
        match self {
            Tone::Neutral => "var(--gray)",
            Tone::Success => "var(--success)",
            Tone::Warning => "var(--warning)",
            Tone::Danger => "var(--danger)",
            Tone::Transparent => "transparent",
        }
    }
}

/// A text node used for inline feedback under an input.
pub trait StatusLine: Send + Sync {
    fn show(&self, text: &str, tone: Tone);
    fn clear(&self);
}

/// The coloured fill of the password strength bar.
pub trait MeterBar: Send + Sync {
    fn set_fill(&self, percentage: u8, tone: Tone);
}

/// Border highlighting for form fields, addressed by field name.
pub trait FieldHighlighter: Send + Sync {
    fn mark(&self, field: &str, invalid: bool);
}

/// Blocking notice shown to the user (an `alert` on the web).
pub trait Notice: Send + Sync {
    fn alert(&self, message: &str);
}

/// Page navigation, supplied by the hosting router.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// A single inline style property change.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleChange {
    Opacity(f32),
    TranslateY(i32),
    Scale(f32),
    Transition { seconds: f32 },
}

/// An element whose inline style can be changed.
pub trait Styled: Send + Sync {
    fn apply(&self, change: &StyleChange);
}

/// A submit event as delivered by the host.
///
/// Handlers call [`SubmitEvent::prevent_default`] to stop the host from
/// performing its normal page post.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_event_starts_allowed() {
        let mut event = SubmitEvent::new();
        assert!(!event.default_prevented());
        event.prevent_default();
        assert!(event.default_prevented());
    }

    #[test]
    fn test_tone_css_vars() {
        assert_eq!(Tone::Danger.css_var(), "var(--danger)");
        assert_eq!(Tone::Transparent.css_var(), "transparent");
    }
}

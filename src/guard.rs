//! Required-field validation on submit.

use thiserror::Error;

use crate::view::{FieldHighlighter, Notice, SubmitEvent};

const MISSING_FIELDS_NOTICE: &str = "Please fill all required fields";

/// A form control as seen at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
    pub required: bool,
}

impl FormField {
    pub fn required(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            required: true,
        }
    }

    pub fn optional(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            required: false,
        }
    }

    fn is_missing(&self) -> bool {
        self.required && self.value.trim().is_empty()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Required fields are empty: {}", .0.join(", "))]
    MissingRequired(Vec<String>),
}

pub struct FormGuard<H, N> {
    highlighter: H,
    notice: N,
}

impl<H: FieldHighlighter, N: Notice> FormGuard<H, N> {
    pub fn new(highlighter: H, notice: N) -> Self {
        Self { highlighter, notice }
    }

    /// Validates every required field before the host submits the form.
    ///
    /// All fields are visited so every empty one is flagged at once. On
    /// failure the submission is cancelled and the user is notified.
    pub fn on_submit(&self, fields: &[FormField], event: &mut SubmitEvent) -> Result<(), FormError> {
        let mut missing = Vec::new();

        for field in fields.iter().filter(|f| f.required) {
            let invalid = field.is_missing();
            self.highlighter.mark(&field.name, invalid);
            if invalid {
                missing.push(field.name.clone());
            }
        }

        if missing.is_empty() {
            return Ok(());
        }

        #[cfg(feature = "tracing")]
        tracing::warn!("Submission blocked, missing required fields: {:?}", missing);

        event.prevent_default();
        self.notice.alert(MISSING_FIELDS_NOTICE);
        Err(FormError::MissingRequired(missing))
    }
}

//! Recording element handles shared by the unit tests.

use std::sync::Mutex;

use crate::view::{FieldHighlighter, MeterBar, Navigator, Notice, StatusLine, StyleChange, Styled, Tone};

#[derive(Default)]
pub struct RecordingStatus {
    pub current: Mutex<Option<(String, Tone)>>,
    pub history: Mutex<Vec<Option<String>>>,
}

impl RecordingStatus {
    pub fn text(&self) -> Option<String> {
        self.current.lock().unwrap().as_ref().map(|(t, _)| t.clone())
    }

    pub fn tone(&self) -> Option<Tone> {
        self.current.lock().unwrap().as_ref().map(|(_, tone)| *tone)
    }

    pub fn history(&self) -> Vec<Option<String>> {
        self.history.lock().unwrap().clone()
    }
}

impl StatusLine for RecordingStatus {
    fn show(&self, text: &str, tone: Tone) {
        *self.current.lock().unwrap() = Some((text.to_string(), tone));
        self.history.lock().unwrap().push(Some(text.to_string()));
    }

    fn clear(&self) {
        *self.current.lock().unwrap() = None;
        self.history.lock().unwrap().push(None);
    }
}

#[derive(Default)]
pub struct RecordingBar {
    pub fill: Mutex<Option<(u8, Tone)>>,
}

impl MeterBar for RecordingBar {
    fn set_fill(&self, percentage: u8, tone: Tone) {
        *self.fill.lock().unwrap() = Some((percentage, tone));
    }
}

#[derive(Default)]
pub struct RecordingHighlighter {
    pub marks: Mutex<Vec<(String, bool)>>,
}

impl RecordingHighlighter {
    pub fn invalid(&self) -> Vec<String> {
        self.marks
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, invalid)| *invalid)
            .map(|(name, _)| name.clone())
            .collect()
    }
}

impl FieldHighlighter for RecordingHighlighter {
    fn mark(&self, field: &str, invalid: bool) {
        self.marks.lock().unwrap().push((field.to_string(), invalid));
    }
}

#[derive(Default)]
pub struct RecordingNotice {
    pub alerts: Mutex<Vec<String>>,
}

impl Notice for RecordingNotice {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub visits: Mutex<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visits.lock().unwrap().push(path.to_string());
    }
}

#[derive(Default)]
pub struct RecordingStyled {
    pub changes: Mutex<Vec<StyleChange>>,
}

impl RecordingStyled {
    pub fn changes(&self) -> Vec<StyleChange> {
        self.changes.lock().unwrap().clone()
    }
}

impl Styled for RecordingStyled {
    fn apply(&self, change: &StyleChange) {
        self.changes.lock().unwrap().push(change.clone());
    }
}

//! Answer capture and question-to-question navigation.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::view::{Navigator, SubmitEvent};

/// Field values of one submitted answer form, keyed by field name.
///
/// When a name repeats, the last value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerRecord(BTreeMap<String, String>);

impl AnswerRecord {
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Whether submitting moves on to the next question or finishes the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMode {
    Next,
    Final,
}

/// A submitted question form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerForm {
    pub fields: Vec<(String, String)>,
    /// 1-based index of the question being answered.
    pub current_question: u32,
    pub mode: StepMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Question(u32),
    Results,
}

impl Destination {
    pub fn path(&self) -> String {
        match self {
            Destination::Question(n) => format!("/question/{}", n),
            Destination::Results => "/results".to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to save answer: {0}")]
pub struct SaveError(pub String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("Question {question} is outside 1..={count}")]
    QuestionOutOfRange { question: u32, count: u32 },
    #[error("Question {0} is the last one and cannot advance")]
    NoNextQuestion(u32),
    #[error(transparent)]
    Save(#[from] SaveError),
}

/// Where captured answers go.
pub trait AnswerSink {
    fn save(&mut self, question: u32, record: AnswerRecord) -> Result<(), SaveError>;
}

/// In-memory answers for one run of the questionnaire.
///
/// Resubmitting a question replaces its earlier record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    answers: BTreeMap<u32, AnswerRecord>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question: u32) -> Option<&AnswerRecord> {
        self.answers.get(&question)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Records in question order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &AnswerRecord)> {
        self.answers.iter().map(|(q, r)| (*q, r))
    }
}

impl AnswerSink for AnswerSheet {
    fn save(&mut self, question: u32, record: AnswerRecord) -> Result<(), SaveError> {
        self.answers.insert(question, record);
        Ok(())
    }
}

/// Intercepts answer forms, stores their fields and moves to the next view.
pub struct AnswerRelay<K, N> {
    sink: K,
    navigator: N,
    question_count: u32,
}

impl<K: AnswerSink, N: Navigator> AnswerRelay<K, N> {
    pub fn new(sink: K, navigator: N, question_count: u32) -> Self {
        Self {
            sink,
            navigator,
            question_count,
        }
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn into_sink(self) -> K {
        self.sink
    }

    fn destination(&self, form: &AnswerForm) -> Result<Destination, RelayError> {
        let question = form.current_question;
        if question == 0 || question > self.question_count {
            return Err(RelayError::QuestionOutOfRange {
                question,
                count: self.question_count,
            });
        }
        match form.mode {
            StepMode::Final => Ok(Destination::Results),
            StepMode::Next if question == self.question_count => {
                Err(RelayError::NoNextQuestion(question))
            }
            StepMode::Next => Ok(Destination::Question(question + 1)),
        }
    }

    /// Handles an answer form submission.
    ///
    /// The host's own submit action is always prevented; on error nothing is
    /// saved and the page stays where it is.
    pub fn on_submit(&mut self, form: AnswerForm, event: &mut SubmitEvent) -> Result<Destination, RelayError> {
        event.prevent_default();

        let destination = self.destination(&form)?;
        let record = AnswerRecord::from_fields(form.fields);

        #[cfg(feature = "tracing")]
        let field_count = record.len();

        self.sink.save(form.current_question, record)?;

        #[cfg(feature = "tracing")]
        tracing::info!("Answer saved for question {}: {} field(s)", form.current_question, field_count);

        self.navigator.navigate(&destination.path());
        Ok(destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingNavigator;

    fn form(question: u32, answer: &str, mode: StepMode) -> AnswerForm {
        AnswerForm {
            fields: vec![("answer".to_string(), answer.to_string())],
            current_question: question,
            mode,
        }
    }

    fn relay() -> AnswerRelay<AnswerSheet, RecordingNavigator> {
        AnswerRelay::new(AnswerSheet::new(), RecordingNavigator::default(), 10)
    }

    struct FailingSink;

    impl AnswerSink for FailingSink {
        fn save(&mut self, _question: u32, _record: AnswerRecord) -> Result<(), SaveError> {
            Err(SaveError("database unavailable".to_string()))
        }
    }

    #[test]
    fn test_next_question_prevents_default() {
        let mut relay = relay();
        let mut event = SubmitEvent::new();

        let destination = relay.on_submit(form(3, "1", StepMode::Next), &mut event).unwrap();

        assert!(event.default_prevented());
        assert_eq!(destination, Destination::Question(4));
        assert_eq!(*relay.navigator.visits.lock().unwrap(), vec!["/question/4"]);
        assert_eq!(relay.sink().get(3).and_then(|r| r.get("answer")), Some("1"));
    }

    #[test]
    fn test_final_step_goes_to_results() {
        let mut relay = relay();
        let mut event = SubmitEvent::new();

        let destination = relay.on_submit(form(10, "0", StepMode::Final), &mut event).unwrap();

        assert!(event.default_prevented());
        assert_eq!(destination.path(), "/results");
        assert_eq!(*relay.navigator.visits.lock().unwrap(), vec!["/results"]);
    }

    #[test]
    fn test_out_of_range_question() {
        let mut relay = relay();
        let mut event = SubmitEvent::new();

        let result = relay.on_submit(form(11, "1", StepMode::Next), &mut event);
        assert_eq!(result, Err(RelayError::QuestionOutOfRange { question: 11, count: 10 }));
        assert!(event.default_prevented());
        assert!(relay.sink().is_empty());
        assert!(relay.navigator.visits.lock().unwrap().is_empty());

        let result = relay.on_submit(form(0, "1", StepMode::Final), &mut SubmitEvent::new());
        assert!(matches!(result, Err(RelayError::QuestionOutOfRange { question: 0, .. })));
    }

    #[test]
    fn test_next_on_last_question_rejected() {
        let mut relay = relay();
        let result = relay.on_submit(form(10, "1", StepMode::Next), &mut SubmitEvent::new());
        assert_eq!(result, Err(RelayError::NoNextQuestion(10)));
    }

    #[test]
    fn test_resubmission_overwrites() {
        let mut relay = relay();
        relay.on_submit(form(2, "1", StepMode::Next), &mut SubmitEvent::new()).unwrap();
        relay.on_submit(form(2, "0", StepMode::Next), &mut SubmitEvent::new()).unwrap();

        let sheet = relay.into_sink();
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.get(2).and_then(|r| r.get("answer")), Some("0"));
    }

    #[test]
    fn test_save_failure_does_not_navigate() {
        let mut relay = AnswerRelay::new(FailingSink, RecordingNavigator::default(), 10);
        let mut event = SubmitEvent::new();

        let result = relay.on_submit(form(1, "1", StepMode::Next), &mut event);

        assert!(matches!(result, Err(RelayError::Save(_))));
        assert!(event.default_prevented());
        assert!(relay.navigator.visits.lock().unwrap().is_empty());
    }

    #[test]
    fn test_record_last_value_wins() {
        let record = AnswerRecord::from_fields([("answer", "1"), ("note", "x"), ("answer", "0")]);
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("answer"), Some("0"));
        assert_eq!(record.iter().collect::<Vec<_>>(), vec![("answer", "0"), ("note", "x")]);
    }
}

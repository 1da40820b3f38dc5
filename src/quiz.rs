//! Questionnaire outcome scoring.
//!
//! Each question is answered agree (`1`) or disagree (`0`). Every agreement
//! is worth 10 points.

use thiserror::Error;

use crate::relay::AnswerSheet;

/// Number of questions in a run.
pub const QUESTION_COUNT: u32 = 10;

const POINTS_PER_AGREEMENT: u32 = 10;
const POSITIVE_THRESHOLD: u32 = 70;
const HIGH_THRESHOLD: u32 = 80;
const TYPICAL_THRESHOLD: u32 = 50;

/// Per-question advice, as (agree, disagree).
const RECOMMENDATIONS: [(&str, &str); QUESTION_COUNT as usize] = [
    // 1
    (
        "Consider sensory training exercises to help manage auditory sensitivity. This might include gradual exposure to different environments with varying noise levels.",
        "Your normal auditory processing is a strength. Continue to maintain balanced sensory environments.",
    ),
    // 2
    (
        "Practice focusing on details through activities like puzzles or detailed artwork to balance your tendency to see the whole picture.",
        "Work on seeing the bigger picture through activities that require holistic thinking like strategic games or system mapping.",
    ),
    // 3
    (
        "Your ability to multitask is a strength. Continue to utilize this in your daily activities.",
        "Practice single-tasking with full attention, then gradually introduce secondary tasks to improve multitasking abilities.",
    ),
    // 4
    (
        "Your ability to resume tasks after interruption is a strength. Continue to apply this skill in structured environments.",
        "Practice task-switching exercises and use techniques like pomodoro method to build task resumption skills.",
    ),
    // 5
    (
        "Continue to leverage your ability to understand implied meanings in communication.",
        "Consider practicing contextual interpretation through reading literary texts with metaphors and discussing them with others.",
    ),
    // 6
    (
        "Your social attentiveness is a strength. Continue to observe and respond to social cues.",
        "Practice recognizing boredom signals through social skills training or by watching and analyzing social interactions in media.",
    ),
    // 7
    (
        "Work with a therapist on theory of mind exercises to better understand others' intentions.",
        "Your ability to understand others' intentions is a strength. Continue to use this in social situations.",
    ),
    // 8
    (
        "Consider structured social activities based on your interests to practice friendship-building skills.",
        "Your social connection skills are a strength. Continue to use these skills to build and maintain relationships.",
    ),
    // 9
    (
        "Your enjoyment of social occasions is a strength. Continue to engage in social activities that you find pleasant.",
        "Start with small, structured social interactions in environments where you feel comfortable, gradually expanding your comfort zone.",
    ),
    // 10
    (
        "Consider emotion recognition training or working with a therapist on empathy-building exercises.",
        "Your emotional intelligence is a strength. Continue to apply this in your interpersonal relationships.",
    ),
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("Question {question} has no {field:?} field")]
    MissingAnswer { question: u32, field: String },
    #[error("Question {question} has invalid answer {value:?}")]
    InvalidAnswer { question: u32, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guidance {
    High,
    Typical,
    Low,
}

impl Guidance {
    fn for_score(score: u32) -> Self {
        if score >= HIGH_THRESHOLD {
            Guidance::High
        } else if score >= TYPICAL_THRESHOLD {
            Guidance::Typical
        } else {
            Guidance::Low
        }
    }

    pub fn lines(self) -> &'static [&'static str] {
        match self {
            Guidance::High => &[
                "Consider professional evaluation.",
                "Your answers suggest very high probability of Autism.",
            ],
            Guidance::Typical => &[
                "Your results suggest typical characteristics.",
                "Continue monitoring if concerned.",
            ],
            Guidance::Low => &[
                "Your results suggest that probability of Autism is low, still can take medical advice.",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerSummary {
    pub question: u32,
    pub agreed: bool,
}

impl AnswerSummary {
    pub fn label(&self) -> &'static str {
        if self.agreed { "Agree" } else { "Disagree" }
    }

    /// Advice for this answer, or `None` for a question outside the run.
    pub fn recommendation(&self) -> Option<&'static str> {
        let index = usize::try_from(self.question.checked_sub(1)?).ok()?;
        let &(agree, disagree) = RECOMMENDATIONS.get(index)?;
        Some(if self.agreed { agree } else { disagree })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome {
    pub score: u32,
    pub classification: Classification,
    pub guidance: Guidance,
    pub answers: Vec<AnswerSummary>,
}

impl QuizOutcome {
    /// Scores every answered question on the sheet.
    pub fn from_sheet(sheet: &AnswerSheet, answer_field: &str) -> Result<Self, QuizError> {
        let answers = sheet
            .iter()
            .map(|(question, record)| {
                let value = record.get(answer_field).ok_or_else(|| QuizError::MissingAnswer {
                    question,
                    field: answer_field.to_string(),
                })?;
                let agreed = match value.trim() {
                    "1" => true,
                    "0" => false,
                    _ => {
                        return Err(QuizError::InvalidAnswer {
                            question,
                            value: value.to_string(),
                        })
                    }
                };
                Ok(AnswerSummary { question, agreed })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let score = answers.iter().filter(|a| a.agreed).count() as u32 * POINTS_PER_AGREEMENT;
        let classification = if score >= POSITIVE_THRESHOLD {
            Classification::Positive
        } else {
            Classification::Negative
        };

        Ok(Self {
            score,
            classification,
            guidance: Guidance::for_score(score),
            answers,
        })
    }
}

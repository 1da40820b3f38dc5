//! Entrance animations for question and result views.
//!
//! A [`TransitionPlan`] is plain data: styles applied on render, then style
//! changes at fixed offsets. [`play`] schedules it against the elements the
//! page actually has.

use std::time::Duration;

use crate::view::StyleChange;

/// Which element of a view a style change targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    QuestionCard,
    ScoreCircle,
    ResultDetails,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransitionStep {
    pub role: Role,
    /// Offset from the initial render.
    pub at: Duration,
    pub changes: Vec<StyleChange>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransitionPlan {
    pub initial: Vec<(Role, Vec<StyleChange>)>,
    pub steps: Vec<TransitionStep>,
}

impl TransitionPlan {
    pub fn initial_for(&self, role: Role) -> impl Iterator<Item = &StyleChange> {
        self.initial
            .iter()
            .filter(move |(r, _)| *r == role)
            .flat_map(|(_, changes)| changes.iter())
    }

    pub fn steps_for(&self, role: Role) -> impl Iterator<Item = &TransitionStep> {
        self.steps.iter().filter(move |s| s.role == role)
    }
}

/// Cards fade in and slide up 100 ms after render.
pub fn question_card_plan() -> TransitionPlan {
    TransitionPlan {
        initial: vec![(
            Role::QuestionCard,
            vec![
                StyleChange::Opacity(0.0),
                StyleChange::TranslateY(20),
                StyleChange::Transition { seconds: 0.4 },
            ],
        )],
        steps: vec![TransitionStep {
            role: Role::QuestionCard,
            at: Duration::from_millis(100),
            changes: vec![StyleChange::Opacity(1.0), StyleChange::TranslateY(0)],
        }],
    }
}

/// The score circle pulses at 500 ms; details fade in at 800 ms.
pub fn result_summary_plan() -> TransitionPlan {
    TransitionPlan {
        initial: vec![(
            Role::ResultDetails,
            vec![
                StyleChange::Opacity(0.0),
                StyleChange::TranslateY(20),
                StyleChange::Transition { seconds: 0.6 },
            ],
        )],
        steps: vec![
            TransitionStep {
                role: Role::ScoreCircle,
                at: Duration::from_millis(500),
                changes: vec![StyleChange::Scale(1.1)],
            },
            TransitionStep {
                role: Role::ScoreCircle,
                at: Duration::from_millis(800),
                changes: vec![StyleChange::Scale(1.0)],
            },
            TransitionStep {
                role: Role::ResultDetails,
                at: Duration::from_millis(800),
                changes: vec![StyleChange::Opacity(1.0), StyleChange::TranslateY(0)],
            },
        ],
    }
}

/// Applies the initial styles now and schedules every step.
///
/// Elements are matched to steps by role; roles with no element are
/// skipped. Timers are independent: dropping the returned handles does not
/// stop them.
#[cfg(feature = "async")]
pub fn play(
    plan: &TransitionPlan,
    elements: &[(Role, std::sync::Arc<dyn crate::view::Styled>)],
) -> Vec<tokio::task::JoinHandle<()>> {
    let mut timers = Vec::new();

    for (role, element) in elements {
        for change in plan.initial_for(*role) {
            element.apply(change);
        }

        for step in plan.steps_for(*role) {
            let element = std::sync::Arc::clone(element);
            let step = step.clone();
            timers.push(tokio::spawn(async move {
                tokio::time::sleep(step.at).await;
                for change in &step.changes {
                    element.apply(change);
                }
            }));
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!("Scheduled {} transition timer(s) for {} element(s)", timers.len(), elements.len());

    timers
}

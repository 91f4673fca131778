//! The three fixed stages of a guided quest.
//!
//! Every quest walks the same three steps: form a hypothesis, run the
//! experiment, record the outcome in the questbook. Using an enum instead of
//! a bare index makes out-of-range steps unrepresentable.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::quest::Quest;

/// One of the three fixed stages of a guided quest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Predict what will happen before starting.
    #[default]
    Hypothesis,
    /// Carry out the procedure from the kit.
    Experiment,
    /// Record observations and check the prediction.
    Questbook,
}

impl Step {
    /// All steps in walk order.
    pub const ALL: [Step; 3] = [Step::Hypothesis, Step::Experiment, Step::Questbook];

    /// Zero-based position of this step.
    pub fn index(self) -> usize {
        match self {
            Self::Hypothesis => 0,
            Self::Experiment => 1,
            Self::Questbook => 2,
        }
    }

    /// One-based position, as shown to the user.
    pub fn number(self) -> usize {
        self.index() + 1
    }

    /// The step after this one, or `None` after the questbook.
    pub fn next(self) -> Option<Step> {
        match self {
            Self::Hypothesis => Some(Self::Experiment),
            Self::Experiment => Some(Self::Questbook),
            Self::Questbook => None,
        }
    }

    /// Numbered display label ("1. Hypothesis").
    pub fn label(self) -> String {
        format!("{}. {}", self.number(), self)
    }

    /// The instructional text for this step. The hypothesis prompt names the
    /// quest being run; the other two are the same for every quest.
    pub fn prompt(self, quest: &Quest) -> String {
        match self {
            Self::Hypothesis => format!(
                "What do you think will happen during the {} experiment?",
                quest.title
            ),
            Self::Experiment => {
                "Follow the steps provided in your kit to conduct the procedure.".to_string()
            }
            Self::Questbook => {
                "Record your observations. Was your hypothesis correct?".to_string()
            }
        }
    }

    /// Label for the action button that advances past this step.
    pub fn action_label(self) -> &'static str {
        match self {
            Self::Hypothesis | Self::Experiment => "NEXT STEP",
            Self::Questbook => "COMPLETE QUEST",
        }
    }

    /// Fraction of the quest completed once this step is on screen.
    pub fn progress(self) -> f64 {
        self.number() as f64 / Self::ALL.len() as f64
    }

    /// Progress as a whole percentage (33, 67, 100).
    pub fn percent(self) -> u16 {
        (self.progress() * 100.0).round() as u16
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hypothesis => write!(f, "Hypothesis"),
            Self::Experiment => write!(f, "Experiment"),
            Self::Questbook => write!(f, "Questbook"),
        }
    }
}

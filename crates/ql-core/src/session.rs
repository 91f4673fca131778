//! Session state and the transitions between the two screens.
//!
//! The whole flow is a two-state machine: the library list, and the quest
//! engine walking the three fixed steps. State is a plain value and every
//! transition is a pure function from state and action to a new state; the
//! view layer holds the current value and swaps it wholesale on each action.

use serde::{Deserialize, Serialize};

use crate::quest::QuestId;
use crate::step::Step;

/// Identifies which screen is on display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// The quest list.
    #[default]
    Library,
    /// The three-step quest engine.
    Quest,
}

/// A user intent emitted by one of the views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Start the given quest from the library list.
    StartQuest(QuestId),
    /// Advance to the next step, or complete the quest on the last one.
    AdvanceStep,
    /// Leave the quest engine and return to the library.
    ExitQuest,
}

/// The mutable session triple: current view, active quest, current step.
///
/// Invariant: `view == View::Quest` implies `active_quest.is_some()`. The
/// only transition into the quest view is [`Action::StartQuest`], which sets
/// the quest, so [`SessionState::apply`] upholds this by construction.
///
/// Once a quest has been started, `active_quest` stays set even after the
/// quest completes or is exited; the last quest is remembered and the
/// library view simply never reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Which screen is on display.
    pub view: View,
    /// The quest being run, if any was ever started.
    pub active_quest: Option<QuestId>,
    /// The step the quest engine is on.
    pub step: Step,
}

impl SessionState {
    /// The launch state: library view, no quest, step reset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action and return the resulting state.
    pub fn apply(&self, action: &Action) -> SessionState {
        match action {
            Action::StartQuest(id) => SessionState {
                view: View::Quest,
                active_quest: Some(id.clone()),
                step: Step::Hypothesis,
            },
            Action::AdvanceStep => match (self.view, self.step.next()) {
                // Library view has no advance affordance; stay put.
                (View::Library, _) => self.clone(),
                (View::Quest, Some(next)) => SessionState {
                    step: next,
                    ..self.clone()
                },
                // Advancing past the questbook completes the quest.
                (View::Quest, None) => SessionState {
                    view: View::Library,
                    step: Step::Hypothesis,
                    ..self.clone()
                },
            },
            Action::ExitQuest => SessionState {
                view: View::Library,
                step: Step::Hypothesis,
                ..self.clone()
            },
        }
    }

    /// Fraction of the active quest completed, for the progress indicator.
    pub fn progress(&self) -> f64 {
        self.step.progress()
    }

    /// Whether the session is showing the quest engine.
    pub fn in_quest(&self) -> bool {
        self.view == View::Quest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::Library;

    #[test]
    fn launch_state_is_library_at_step_zero() {
        let state = SessionState::new();
        assert_eq!(state.view, View::Library);
        assert_eq!(state.active_quest, None);
        assert_eq!(state.step, Step::Hypothesis);
    }

    #[test]
    fn start_quest_enters_quest_view_at_hypothesis() {
        let library = Library::builtin();
        for quest in library.quests() {
            let state = SessionState::new().apply(&Action::StartQuest(quest.id.clone()));
            assert_eq!(state.view, View::Quest);
            assert_eq!(state.active_quest, Some(quest.id.clone()));
            assert_eq!(state.step, Step::Hypothesis);
        }
    }

    #[test]
    fn advance_walks_the_steps_in_quest_view() {
        let state = SessionState::new().apply(&Action::StartQuest(QuestId::from("1")));

        let state = state.apply(&Action::AdvanceStep);
        assert_eq!(state.view, View::Quest);
        assert_eq!(state.step, Step::Experiment);

        let state = state.apply(&Action::AdvanceStep);
        assert_eq!(state.view, View::Quest);
        assert_eq!(state.step, Step::Questbook);
    }

    #[test]
    fn advance_on_last_step_completes_to_library() {
        for id in ["1", "2", "3"] {
            let mut state = SessionState::new().apply(&Action::StartQuest(QuestId::from(id)));
            for _ in 0..3 {
                state = state.apply(&Action::AdvanceStep);
            }
            assert_eq!(state.view, View::Library);
            assert_eq!(state.step, Step::Hypothesis);
        }
    }

    #[test]
    fn advance_in_library_view_is_a_no_op() {
        let state = SessionState::new();
        assert_eq!(state.apply(&Action::AdvanceStep), state);
    }

    #[test]
    fn exit_returns_to_library_from_any_step() {
        for advances in 0..3 {
            let mut state = SessionState::new().apply(&Action::StartQuest(QuestId::from("3")));
            for _ in 0..advances {
                state = state.apply(&Action::AdvanceStep);
            }
            let state = state.apply(&Action::ExitQuest);
            assert_eq!(state.view, View::Library);
            assert_eq!(state.step, Step::Hypothesis);
        }
    }

    #[test]
    fn active_quest_is_remembered_after_completion_and_exit() {
        let started = SessionState::new().apply(&Action::StartQuest(QuestId::from("2")));

        let exited = started.apply(&Action::ExitQuest);
        assert_eq!(exited.active_quest, Some(QuestId::from("2")));

        let mut completed = started;
        for _ in 0..3 {
            completed = completed.apply(&Action::AdvanceStep);
        }
        assert_eq!(completed.active_quest, Some(QuestId::from("2")));
    }

    #[test]
    fn progress_tracks_the_step() {
        let mut state = SessionState::new().apply(&Action::StartQuest(QuestId::from("1")));
        assert_eq!(state.step.percent(), 33);
        state = state.apply(&Action::AdvanceStep);
        assert_eq!(state.step.percent(), 67);
        state = state.apply(&Action::AdvanceStep);
        assert_eq!(state.step.percent(), 100);
    }

    #[test]
    fn solar_oven_walkthrough() {
        let library = Library::builtin();
        let quest = library.resolve("2").unwrap();
        assert_eq!(quest.title, "Solar Oven");

        let state = SessionState::new().apply(&Action::StartQuest(quest.id.clone()));
        assert!(state.step.prompt(quest).contains("Solar Oven"));

        let state = state
            .apply(&Action::AdvanceStep)
            .apply(&Action::AdvanceStep);
        assert_eq!(state.step, Step::Questbook);
        assert_eq!(state.step.action_label(), "COMPLETE QUEST");

        let state = state.apply(&Action::AdvanceStep);
        assert_eq!(state.view, View::Library);

        // The library list is untouched by running a quest.
        assert_eq!(library.len(), 3);
        let titles: Vec<_> = library.quests().iter().map(|q| q.title.as_str()).collect();
        assert_eq!(titles, ["Volcanic Eruption", "Solar Oven", "Plant Osmosis"]);
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        fn arb_action() -> impl Strategy<Value = Action> {
            prop_oneof![
                prop::sample::select(vec!["1", "2", "3"])
                    .prop_map(|id| Action::StartQuest(QuestId::from(id))),
                Just(Action::AdvanceStep),
                Just(Action::ExitQuest),
            ]
        }

        proptest! {
            #[test]
            fn quest_view_always_has_an_active_quest(
                actions in prop::collection::vec(arb_action(), 0..64)
            ) {
                let mut state = SessionState::new();
                for action in &actions {
                    state = state.apply(action);
                    if state.view == View::Quest {
                        prop_assert!(state.active_quest.is_some());
                    }
                }
            }

            #[test]
            fn library_view_always_sits_at_step_zero_after_leaving_a_quest(
                actions in prop::collection::vec(arb_action(), 1..64)
            ) {
                let mut state = SessionState::new();
                for action in &actions {
                    state = state.apply(action);
                }
                if state.view == View::Library {
                    prop_assert_eq!(state.step, Step::Hypothesis);
                }
            }
        }
    }
}

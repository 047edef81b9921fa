//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes text changes,
//! key presses, pointer selection, and outside interaction, translating them
//! into state changes and action sequences. It is the primary control flow
//! coordinator for the widget.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. A raw event arrives from the host binding
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `TypeaheadState` methods
//! 4. Actions are collected and returned for the host to execute
//!
//! Events are processed to completion, one at a time, in arrival order; every
//! event produces exactly one resulting state snapshot. There is no error
//! path reachable by user input — only host-integration mistakes (stale
//! suggestion indices) surface as errors.

use crate::app::{Action, TypeaheadState};
use crate::app::keys::KeyPress;
use crate::app::suggestions::{Direction, FocusAdvance};
use crate::domain::error::{Result, TypeaheadError};

/// Where a key press was fired from, as reported by the host binding.
///
/// The origin is authoritative for where platform focus currently sits:
/// native focus traversal may have moved between suggestions without the
/// core's involvement, so the focused index is resynchronized from the
/// origin before the key is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOrigin {
    /// The text field fired the event.
    Field,
    /// The suggestion at this index fired the event.
    Suggestion(usize),
}

impl KeyOrigin {
    /// Returns the suggestion index, or `None` for the field.
    #[must_use]
    pub fn suggestion_index(self) -> Option<usize> {
        match self {
            Self::Field => None,
            Self::Suggestion(index) => Some(index),
        }
    }
}

/// Events consumed by the widget core.
///
/// Each event represents a discrete occurrence forwarded by the host binding.
/// The handler processes these sequentially, ensuring deterministic state
/// transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The field's text content changed to the given value.
    ///
    /// Recomputes the match list, resets focus, and un-dismisses the box if
    /// the text is non-blank — regardless of prior phase.
    TextChanged(String),

    /// A key was pressed while focus sat on the field or on a suggestion.
    KeyPress {
        /// Element that fired the event.
        origin: KeyOrigin,
        /// The raw key press.
        press: KeyPress,
    },

    /// A suggestion was selected by pointer.
    SuggestionClicked(usize),

    /// Pointer activity happened outside the widget.
    ///
    /// Supplied by the host's outside-interaction detector. The detector must
    /// not fire for clicks the widget itself consumes; the core additionally
    /// treats this event as inert whenever the box is already hidden, so a
    /// misbehaving host cannot double-dismiss.
    OutsideInteraction,
}

/// Processes an event, mutates widget state, and returns actions to execute.
///
/// # Returns
///
/// A `(render, actions)` pair: `render` is `true` when the state changed in a
/// way the host should re-render; `actions` are declarative side effects
/// (focus intents, default-behavior suppression) to execute in order.
///
/// # Errors
///
/// Returns [`TypeaheadError::StaleIndex`] when the host references a
/// suggestion index that is not currently visible — an integration error,
/// since selection always targets a rendered suggestion.
///
/// # Examples
///
/// ```
/// use typeahead::{handle_event, CandidateSet, Event, Theme, TypeaheadState};
///
/// let candidates = CandidateSet::new(vec!["Audi".to_string()])?;
/// let mut state = TypeaheadState::new(candidates, Theme::default());
///
/// let (render, actions) = handle_event(&mut state, &Event::TextChanged("a".to_string()))?;
/// assert!(render);
/// assert!(actions.is_empty());
/// assert!(state.is_box_visible());
/// # Ok::<(), typeahead::TypeaheadError>(())
/// ```
pub fn handle_event(state: &mut TypeaheadState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::TextChanged(text) => {
            state.set_text(text);
            Ok((true, vec![]))
        }
        Event::KeyPress { origin, press } => handle_key_press(state, *origin, *press),
        Event::SuggestionClicked(index) => {
            let (render, actions) = commit_selection(state, *index)?;
            Ok((render, actions))
        }
        Event::OutsideInteraction => {
            if state.is_box_visible() {
                tracing::debug!("outside interaction, dismissing");
                state.dismiss();
                Ok((true, vec![Action::FocusField]))
            } else {
                Ok((false, vec![]))
            }
        }
    }
}

/// Classifies a key press and applies the matching transition.
///
/// While the box is hidden every key keeps its default behavior: Tab-forward
/// on the field with no visible matches proceeds to whatever the host page
/// places next, and unrecognized keys are inert.
fn handle_key_press(
    state: &mut TypeaheadState,
    origin: KeyOrigin,
    press: KeyPress,
) -> Result<(bool, Vec<Action>)> {
    {
        let Some(list) = state.suggestion_list_mut() else {
            return Ok((false, vec![]));
        };
        list.sync_focus(origin.suggestion_index())?;
    }

    if press.is_escape() {
        tracing::debug!("escape pressed, dismissing");
        state.dismiss();
        return Ok((true, vec![Action::FocusField]));
    }

    if press.is_enter() {
        return match origin {
            KeyOrigin::Suggestion(index) => {
                let (render, mut actions) = commit_selection(state, index)?;
                actions.insert(0, Action::SuppressDefault);
                Ok((render, actions))
            }
            // Enter on the field is the host's concern (e.g. form submit).
            KeyOrigin::Field => Ok((false, vec![])),
        };
    }

    let direction = if press.is_tab_forward() {
        Direction::Forward
    } else if press.is_tab_backward() {
        Direction::Backward
    } else {
        return Ok((false, vec![]));
    };

    let Some(list) = state.suggestion_list_mut() else {
        return Ok((false, vec![]));
    };
    match list.advance_focus(direction) {
        FocusAdvance::Moved(Some(index)) => Ok((
            true,
            vec![Action::SuppressDefault, Action::FocusSuggestion(index)],
        )),
        FocusAdvance::Moved(None) => {
            Ok((true, vec![Action::SuppressDefault, Action::FocusField]))
        }
        FocusAdvance::Deferred => Ok((false, vec![])),
    }
}

/// Commits the candidate at `index` into the input text and closes the box.
fn commit_selection(state: &mut TypeaheadState, index: usize) -> Result<(bool, Vec<Action>)> {
    let text = {
        let Some(list) = state.suggestion_list() else {
            // Nothing is rendered while the box is hidden, so any selection
            // the host reports is stale by definition.
            return Err(TypeaheadError::StaleIndex { index, len: 0 });
        };
        list.select(index)?.full_text()
    };

    state.commit(text);
    Ok((true, vec![Action::FocusField]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::keys::Key;
    use crate::app::Phase;
    use crate::domain::CandidateSet;
    use crate::ui::theme::Theme;

    fn state(entries: &[&str]) -> TypeaheadState {
        let candidates =
            CandidateSet::new(entries.iter().map(ToString::to_string).collect()).unwrap();
        TypeaheadState::new(candidates, Theme::default())
    }

    fn press(key: Key, shift: bool) -> KeyPress {
        KeyPress { key, shift }
    }

    fn key_event(origin: KeyOrigin, key: Key, shift: bool) -> Event {
        Event::KeyPress {
            origin,
            press: press(key, shift),
        }
    }

    #[test]
    fn escape_dismisses_and_refocuses_field() {
        let mut state = state(&["Audi"]);
        state.set_text("a");

        let (render, actions) =
            handle_event(&mut state, &key_event(KeyOrigin::Field, Key::Escape, false)).unwrap();

        assert!(render);
        assert_eq!(actions, vec![Action::FocusField]);
        assert_eq!(*state.phase(), Phase::Dismissed);
        assert_eq!(state.input_text(), "a");
    }

    #[test]
    fn escape_on_focused_suggestion_dismisses_too() {
        let mut state = state(&["Audi", "Alfa Romeo"]);
        state.set_text("a");

        let (render, actions) = handle_event(
            &mut state,
            &key_event(KeyOrigin::Suggestion(1), Key::Escape, false),
        )
        .unwrap();

        assert!(render);
        assert_eq!(actions, vec![Action::FocusField]);
        assert_eq!(*state.phase(), Phase::Dismissed);
    }

    #[test]
    fn escape_while_hidden_is_inert() {
        let mut state = state(&["Audi"]);
        let (render, actions) =
            handle_event(&mut state, &key_event(KeyOrigin::Field, Key::Escape, false)).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn tab_from_field_enters_suggestions() {
        let mut state = state(&["Audi", "Alfa Romeo"]);
        state.set_text("a");

        let (render, actions) =
            handle_event(&mut state, &key_event(KeyOrigin::Field, Key::Tab, false)).unwrap();

        assert!(render);
        assert_eq!(
            actions,
            vec![Action::SuppressDefault, Action::FocusSuggestion(0)]
        );
        assert_eq!(state.focused_index(), Some(0));
    }

    #[test]
    fn tab_on_last_suggestion_wraps_to_first() {
        let mut state = state(&["Audi", "Alfa Romeo"]);
        state.set_text("a");

        let (render, actions) = handle_event(
            &mut state,
            &key_event(KeyOrigin::Suggestion(1), Key::Tab, false),
        )
        .unwrap();

        assert!(render);
        assert_eq!(
            actions,
            vec![Action::SuppressDefault, Action::FocusSuggestion(0)]
        );
        assert_eq!(state.focused_index(), Some(0));
        assert!(state.is_box_visible());
    }

    #[test]
    fn tab_with_no_matches_defers_to_default_traversal() {
        let mut state = state(&["Audi"]);
        state.set_text("zzz");

        let (render, actions) =
            handle_event(&mut state, &key_event(KeyOrigin::Field, Key::Tab, false)).unwrap();

        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn tab_while_hidden_defers_to_default_traversal() {
        let mut state = state(&["Audi"]);
        let (render, actions) =
            handle_event(&mut state, &key_event(KeyOrigin::Field, Key::Tab, false)).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn shift_tab_on_first_suggestion_returns_to_field() {
        let mut state = state(&["Audi", "Alfa Romeo"]);
        state.set_text("a");

        let (render, actions) = handle_event(
            &mut state,
            &key_event(KeyOrigin::Suggestion(0), Key::Tab, true),
        )
        .unwrap();

        assert!(render);
        assert_eq!(actions, vec![Action::SuppressDefault, Action::FocusField]);
        assert_eq!(state.focused_index(), None);
    }

    #[test]
    fn shift_tab_between_suggestions_defers() {
        let mut state = state(&["Audi", "Alfa Romeo"]);
        state.set_text("a");

        let (render, actions) = handle_event(
            &mut state,
            &key_event(KeyOrigin::Suggestion(1), Key::Tab, true),
        )
        .unwrap();

        assert!(!render);
        assert!(actions.is_empty());
        // The origin still resynchronized the focused index.
        assert_eq!(state.focused_index(), Some(1));
    }

    #[test]
    fn enter_on_focused_suggestion_commits() {
        let mut state = state(&["Audi", "Alfa Romeo"]);
        state.set_text("a");

        let (render, actions) = handle_event(
            &mut state,
            &key_event(KeyOrigin::Suggestion(0), Key::Enter, false),
        )
        .unwrap();

        assert!(render);
        assert_eq!(actions, vec![Action::SuppressDefault, Action::FocusField]);
        assert_eq!(state.input_text(), "Audi");
        assert_eq!(*state.phase(), Phase::Dismissed);
    }

    #[test]
    fn enter_on_field_is_inert() {
        let mut state = state(&["Audi"]);
        state.set_text("a");

        let (render, actions) =
            handle_event(&mut state, &key_event(KeyOrigin::Field, Key::Enter, false)).unwrap();

        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.is_box_visible());
    }

    #[test]
    fn click_commits_and_refocuses_field() {
        let mut state = state(&["Audi", "Alfa Romeo"]);
        state.set_text("a");

        let (render, actions) =
            handle_event(&mut state, &Event::SuggestionClicked(1)).unwrap();

        assert!(render);
        assert_eq!(actions, vec![Action::FocusField]);
        assert_eq!(state.input_text(), "Alfa Romeo");
        assert_eq!(*state.phase(), Phase::Dismissed);
    }

    #[test]
    fn click_out_of_range_reports_stale_index() {
        let mut state = state(&["Audi"]);
        state.set_text("a");

        let err = handle_event(&mut state, &Event::SuggestionClicked(5)).unwrap_err();
        assert!(matches!(
            err,
            TypeaheadError::StaleIndex { index: 5, len: 1 }
        ));
    }

    #[test]
    fn click_while_hidden_reports_stale_index() {
        let mut state = state(&["Audi"]);
        let err = handle_event(&mut state, &Event::SuggestionClicked(0)).unwrap_err();
        assert!(matches!(
            err,
            TypeaheadError::StaleIndex { index: 0, len: 0 }
        ));
    }

    #[test]
    fn outside_interaction_dismisses_once() {
        let mut state = state(&["Audi"]);
        state.set_text("a");

        let (render, actions) =
            handle_event(&mut state, &Event::OutsideInteraction).unwrap();
        assert!(render);
        assert_eq!(actions, vec![Action::FocusField]);
        assert_eq!(*state.phase(), Phase::Dismissed);

        let (render, actions) =
            handle_event(&mut state, &Event::OutsideInteraction).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn text_change_after_dismissal_reopens() {
        let mut state = state(&["Audi"]);
        state.set_text("a");
        handle_event(&mut state, &key_event(KeyOrigin::Field, Key::Escape, false)).unwrap();
        assert_eq!(*state.phase(), Phase::Dismissed);

        handle_event(&mut state, &Event::TextChanged("au".to_string())).unwrap();
        assert!(state.is_box_visible());
        assert_eq!(state.focused_index(), None);
    }

    #[test]
    fn unrecognized_keys_are_inert() {
        let mut state = state(&["Audi"]);
        state.set_text("a");

        let (render, actions) =
            handle_event(&mut state, &key_event(KeyOrigin::Field, Key::Other, false)).unwrap();

        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.is_box_visible());
    }

    #[test]
    fn key_origin_resyncs_focus_before_classification() {
        let mut state = state(&["Audi", "Alfa Romeo"]);
        state.set_text("a");

        // Native traversal put focus on index 1; the core learns it from the
        // origin of the next key press.
        handle_event(&mut state, &key_event(KeyOrigin::Suggestion(1), Key::Other, false))
            .unwrap();
        assert_eq!(state.focused_index(), Some(1));
    }

    #[test]
    fn stale_key_origin_reports_integration_error() {
        let mut state = state(&["Audi"]);
        state.set_text("a");

        let err = handle_event(
            &mut state,
            &key_event(KeyOrigin::Suggestion(7), Key::Tab, false),
        )
        .unwrap_err();
        assert!(matches!(err, TypeaheadError::StaleIndex { index: 7, len: 1 }));
    }
}

//! End-to-end tests of the suggestion state machine through its public
//! event protocol: matching, visibility lifecycle, keyboard navigation,
//! selection, and dismissal.

use typeahead::{
    handle_event, initialize, Action, CandidateSet, Config, Event, Key, KeyOrigin, KeyPress,
    Phase, Theme, TypeaheadState,
};

fn widget(entries: &[&str]) -> TypeaheadState {
    let candidates =
        CandidateSet::new(entries.iter().map(ToString::to_string).collect()).unwrap();
    TypeaheadState::new(candidates, Theme::default())
}

fn type_text(state: &mut TypeaheadState, text: &str) {
    handle_event(state, &Event::TextChanged(text.to_string())).unwrap();
}

fn key(state: &mut TypeaheadState, origin: KeyOrigin, key: Key, shift: bool) -> Vec<Action> {
    let (_, actions) =
        handle_event(state, &Event::KeyPress { origin, press: KeyPress { key, shift } }).unwrap();
    actions
}

#[test]
fn typing_a_narrows_to_prefix_matches_and_shows_box() {
    let mut state = widget(&["Audi", "Alfa Romeo", "BMW"]);
    type_text(&mut state, "a");

    assert!(state.is_box_visible());
    let suggestions = state.suggestions();
    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].matched_prefix, "A");
    assert_eq!(suggestions[0].remainder, "udi");
    assert_eq!(suggestions[1].matched_prefix, "A");
    assert_eq!(suggestions[1].remainder, "lfa Romeo");
}

#[test]
fn whitespace_only_input_keeps_widget_idle() {
    let mut state = widget(&["Audi", "Alfa Romeo", "BMW"]);
    type_text(&mut state, "   ");

    assert_eq!(*state.phase(), Phase::Idle);
    assert!(!state.is_box_visible());
    assert!(state.suggestions().is_empty());
}

#[test]
fn tab_forward_wraps_from_last_to_first() {
    let mut state = widget(&["Audi", "Alfa Romeo", "BMW"]);
    type_text(&mut state, "a");

    // Focus sits on the last of two suggestions; Tab wraps to the first and
    // the host is told to swallow the key.
    let actions = key(&mut state, KeyOrigin::Suggestion(1), Key::Tab, false);
    assert_eq!(
        actions,
        vec![Action::SuppressDefault, Action::FocusSuggestion(0)]
    );
    assert_eq!(state.focused_index(), Some(0));
    assert!(state.is_box_visible());
}

#[test]
fn escape_dismisses_but_keeps_input_text() {
    let mut state = widget(&["Audi", "Alfa Romeo", "BMW"]);
    type_text(&mut state, "a");

    let actions = key(&mut state, KeyOrigin::Field, Key::Escape, false);
    assert_eq!(actions, vec![Action::FocusField]);
    assert_eq!(*state.phase(), Phase::Dismissed);
    assert_eq!(state.input_text(), "a");
    assert!(!state.is_box_visible());
}

#[test]
fn enter_on_focused_suggestion_commits_its_full_text() {
    let mut state = widget(&["Audi", "Alfa Romeo", "BMW"]);
    type_text(&mut state, "a");
    key(&mut state, KeyOrigin::Field, Key::Tab, false);
    assert_eq!(state.focused_index(), Some(0));

    let actions = key(&mut state, KeyOrigin::Suggestion(0), Key::Enter, false);
    assert_eq!(actions, vec![Action::SuppressDefault, Action::FocusField]);
    assert_eq!(state.input_text(), "Audi");
    assert_eq!(*state.phase(), Phase::Dismissed);
}

#[test]
fn dismissed_widget_reopens_on_next_keystroke() {
    let mut state = widget(&["Audi", "Alfa Romeo", "BMW"]);
    type_text(&mut state, "a");
    key(&mut state, KeyOrigin::Field, Key::Escape, false);
    assert_eq!(*state.phase(), Phase::Dismissed);

    // The user keeps typing: the box always un-dismisses on a text change.
    type_text(&mut state, "al");
    assert!(state.is_box_visible());
    assert_eq!(state.suggestions().len(), 1);
    assert_eq!(state.input_text(), "al");
}

#[test]
fn full_keyboard_round_trip() {
    let mut state = widget(&["Audi", "Alfa Romeo", "BMW"]);

    // Type, walk the whole list forward with wraparound, step back out, and
    // finally select by pointer.
    type_text(&mut state, "A");
    key(&mut state, KeyOrigin::Field, Key::Tab, false);
    assert_eq!(state.focused_index(), Some(0));
    key(&mut state, KeyOrigin::Suggestion(0), Key::Tab, false);
    assert_eq!(state.focused_index(), Some(1));
    key(&mut state, KeyOrigin::Suggestion(1), Key::Tab, false);
    assert_eq!(state.focused_index(), Some(0));

    let actions = key(&mut state, KeyOrigin::Suggestion(0), Key::Tab, true);
    assert_eq!(actions, vec![Action::SuppressDefault, Action::FocusField]);
    assert_eq!(state.focused_index(), None);

    handle_event(&mut state, &Event::SuggestionClicked(1)).unwrap();
    assert_eq!(state.input_text(), "Alfa Romeo");
    assert_eq!(*state.phase(), Phase::Dismissed);
}

#[test]
fn outside_interaction_matches_escape_semantics() {
    let mut state = widget(&["Audi", "Alfa Romeo", "BMW"]);
    type_text(&mut state, "b");

    let (render, actions) = handle_event(&mut state, &Event::OutsideInteraction).unwrap();
    assert!(render);
    assert_eq!(actions, vec![Action::FocusField]);
    assert_eq!(*state.phase(), Phase::Dismissed);
    assert_eq!(state.input_text(), "b");

    // Repeated dismissals stay valid and inert.
    let (render, actions) = handle_event(&mut state, &Event::OutsideInteraction).unwrap();
    assert!(!render);
    assert!(actions.is_empty());
}

#[test]
fn focused_index_stays_in_bounds_across_event_storms() {
    let mut state = widget(&["Audi", "Alfa Romeo", "BMW", "Fiat", "Ford"]);

    let inputs = ["a", "f", "fo", "zzz", "", "A", "al", "   ", "b", "fO"];
    let presses = [
        (Key::Tab, false),
        (Key::Tab, false),
        (Key::Tab, true),
        (Key::Escape, false),
        (Key::Other, false),
    ];

    for (step, input) in inputs.iter().enumerate() {
        type_text(&mut state, input);
        assert_in_bounds(&state);

        for (key_id, shift) in presses.iter().skip(step % 2) {
            let origin = match state.focused_index() {
                Some(index) => KeyOrigin::Suggestion(index),
                None => KeyOrigin::Field,
            };
            handle_event(
                &mut state,
                &Event::KeyPress { origin, press: KeyPress { key: *key_id, shift: *shift } },
            )
            .unwrap();
            assert_in_bounds(&state);
        }
    }
}

fn assert_in_bounds(state: &TypeaheadState) {
    if let Some(index) = state.focused_index() {
        assert!(
            index < state.suggestions().len(),
            "focused index {index} out of bounds for {} suggestions",
            state.suggestions().len()
        );
    }
}

#[test]
fn selection_is_committed_from_the_rendered_split() {
    let mut state = widget(&["Škoda", "Saab"]);
    type_text(&mut state, "š");

    let view = state.compute_viewmodel();
    assert_eq!(view.suggestions.len(), 1);
    assert_eq!(view.suggestions[0].matched_prefix, "Š");
    assert_eq!(view.suggestions[0].remainder, "koda");

    handle_event(&mut state, &Event::SuggestionClicked(0)).unwrap();
    assert_eq!(state.input_text(), "Škoda");
}

#[test]
fn initialized_widget_runs_the_demo_candidate_list() {
    let state = initialize(&Config::default()).unwrap();
    assert_eq!(*state.phase(), Phase::Idle);

    let mut state = state;
    type_text(&mut state, "v");
    let matched: Vec<String> = state
        .suggestions()
        .iter()
        .map(typeahead::Candidate::full_text)
        .collect();
    assert_eq!(matched, ["Volkswagen", "Volvo"]);
}

#[test]
fn view_model_serializes_for_headless_hosts() {
    let mut state = widget(&["Audi"]);
    type_text(&mut state, "au");
    key(&mut state, KeyOrigin::Field, Key::Tab, false);

    let json = serde_json::to_value(state.compute_viewmodel()).unwrap();
    assert_eq!(json["input_text"], "au");
    assert_eq!(json["box_visible"], true);
    assert_eq!(json["focused_index"], 0);
    assert_eq!(json["suggestions"][0]["matched_prefix"], "Au");
    assert_eq!(json["suggestions"][0]["remainder"], "di");
    assert_eq!(json["suggestions"][0]["is_focused"], true);
}

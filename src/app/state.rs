//! Widget state and view model computation.
//!
//! This module defines [`TypeaheadState`], the central state container for the
//! widget, and [`Phase`], the explicit state machine it moves through. It
//! serves as the single source of truth for all transient widget state.
//!
//! # Architecture
//!
//! State separates core data (the immutable candidate set) from derived state
//! (the current match list and focused index, owned by the `Filtering` phase).
//! View models are computed on-demand from state snapshots; the match list is
//! recomputed wholesale on every text change, never patched incrementally.
//!
//! # State Components
//!
//! - **Candidates**: Immutable, ordered, unique strings supplied at construction
//! - **Input Text**: Current raw text, mutated only via explicit transitions
//! - **Phase**: `Idle` (blank text, box hidden), `Filtering` (box visible,
//!   carrying the suggestion list), `Dismissed` (non-blank text, box hidden)
//! - **Theme**: Color scheme consumed by view model computation

use crate::domain::{matcher, CandidateSet};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, FooterInfo, SuggestionItem, TypeaheadView};

use super::suggestions::SuggestionList;

/// The widget's state machine.
///
/// The suggestion box is visible exactly in the `Filtering` phase, and only
/// that phase carries a match list and a focused index — the invariant that
/// focus is `None` or in bounds whenever the box is visible is structural.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Input text is blank and the box is hidden. Initial state.
    Idle,
    /// Input text is non-blank and the box is visible, showing the carried
    /// suggestion list (possibly empty when nothing matches).
    Filtering(SuggestionList),
    /// Input text is non-blank but the box was explicitly dismissed. Any
    /// subsequent text change un-dismisses.
    Dismissed,
}

/// Central widget state container.
///
/// Mutated exclusively by the event handler in response to classified events.
/// View models are computed on demand from state snapshots.
///
/// # Examples
///
/// ```
/// use typeahead::{CandidateSet, Theme, TypeaheadState};
///
/// let candidates = CandidateSet::new(vec!["Audi".to_string(), "BMW".to_string()])?;
/// let mut state = TypeaheadState::new(candidates, Theme::default());
///
/// state.set_text("a");
/// assert!(state.is_box_visible());
/// assert_eq!(state.suggestions().len(), 1);
/// # Ok::<(), typeahead::TypeaheadError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TypeaheadState {
    /// Immutable candidate strings, in presentation order.
    candidates: CandidateSet,

    /// Current raw input text. Blank iff the phase is `Idle`.
    input: String,

    /// Current phase of the visibility/selection lifecycle.
    phase: Phase,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl TypeaheadState {
    /// Creates a new widget state in the `Idle` phase with empty input.
    #[must_use]
    pub fn new(candidates: CandidateSet, theme: Theme) -> Self {
        Self {
            candidates,
            input: String::new(),
            phase: Phase::Idle,
            theme,
        }
    }

    /// Applies a text change: recomputes the match list, resets focus, and
    /// un-dismisses the box if the new text is non-blank.
    ///
    /// This is the only transition that recomputes matches. The previous
    /// match list (and with it any focused position) is discarded even when
    /// the new text produces identical matches.
    pub fn set_text(&mut self, text: &str) {
        let _span = tracing::debug_span!(
            "set_text",
            candidates = self.candidates.len(),
            input_len = text.len(),
        )
        .entered();

        self.input = text.to_string();

        if text.trim().is_empty() {
            self.phase = Phase::Idle;
            tracing::debug!("blank input, box hidden");
            return;
        }

        let matches = matcher::filter(&self.candidates, text);
        tracing::debug!(match_count = matches.len(), "match list recomputed");
        self.phase = Phase::Filtering(SuggestionList::new(matches));
    }

    /// Hides the suggestion box without touching the input text.
    ///
    /// No-op outside `Filtering`; repeated dismissals are valid events.
    pub fn dismiss(&mut self) {
        if matches!(self.phase, Phase::Filtering(_)) {
            self.phase = Phase::Dismissed;
        }
    }

    /// Commits a selected candidate's full text and closes the box.
    pub(crate) fn commit(&mut self, text: String) {
        tracing::debug!(committed = %text, "selection committed");
        self.input = text;
        self.phase = Phase::Dismissed;
    }

    /// Returns the current input text.
    #[must_use]
    pub fn input_text(&self) -> &str {
        &self.input
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Returns `true` iff the suggestion box is visible.
    #[must_use]
    pub fn is_box_visible(&self) -> bool {
        matches!(self.phase, Phase::Filtering(_))
    }

    /// Returns the visible suggestions, or an empty slice when the box is
    /// hidden.
    #[must_use]
    pub fn suggestions(&self) -> &[crate::domain::Candidate] {
        match &self.phase {
            Phase::Filtering(list) => list.candidates(),
            _ => &[],
        }
    }

    /// Returns the focused suggestion index, or `None` when the text field
    /// holds logical focus (or the box is hidden).
    #[must_use]
    pub fn focused_index(&self) -> Option<usize> {
        match &self.phase {
            Phase::Filtering(list) => list.focused(),
            _ => None,
        }
    }

    /// Mutable access to the suggestion list while filtering.
    pub(crate) fn suggestion_list_mut(&mut self) -> Option<&mut SuggestionList> {
        match &mut self.phase {
            Phase::Filtering(list) => Some(list),
            _ => None,
        }
    }

    /// Shared access to the suggestion list while filtering.
    pub(crate) fn suggestion_list(&self) -> Option<&SuggestionList> {
        match &self.phase {
            Phase::Filtering(list) => Some(list),
            _ => None,
        }
    }

    /// Computes a renderable view model from the current state.
    ///
    /// The view model is the complete declarative boundary towards the host
    /// binding: input text, box visibility, the prefix/remainder split per
    /// suggestion, and the focused index the host must mirror with literal
    /// focus transfer.
    #[must_use]
    pub fn compute_viewmodel(&self) -> TypeaheadView {
        let (suggestions, focused_index) = match &self.phase {
            Phase::Filtering(list) => {
                let focused = list.focused();
                let items = list
                    .candidates()
                    .iter()
                    .enumerate()
                    .map(|(index, candidate)| SuggestionItem {
                        matched_prefix: candidate.matched_prefix.clone(),
                        remainder: candidate.remainder.clone(),
                        is_focused: focused == Some(index),
                    })
                    .collect();
                (items, focused)
            }
            _ => (vec![], None),
        };

        let empty_state = match &self.phase {
            Phase::Filtering(list) if list.is_empty() => Some(EmptyState {
                message: "No matches".to_string(),
            }),
            _ => None,
        };

        TypeaheadView {
            input_text: self.input.clone(),
            box_visible: self.is_box_visible(),
            suggestions,
            focused_index,
            empty_state,
            footer: self.compute_footer(),
        }
    }

    /// Computes footer keybinding hints for the current phase.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match &self.phase {
            Phase::Idle => "Type to see suggestions".to_string(),
            Phase::Filtering(list) if list.focused().is_some() => {
                "Tab: next (wraps)  Shift+Tab: back  Enter: select  Esc: dismiss".to_string()
            }
            Phase::Filtering(_) => {
                "Tab: focus suggestions  Esc: dismiss  Click: select".to_string()
            }
            Phase::Dismissed => "Keep typing to reopen suggestions".to_string(),
        };
        FooterInfo { keybindings }
    }
}

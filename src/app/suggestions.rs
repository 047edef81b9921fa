//! Suggestion list controller.
//!
//! This module owns the currently visible match list and the focused index,
//! and implements the navigation protocol over them: entering the list from
//! the field, forward wraparound at the last suggestion, and the single
//! managed backward transition from index 0 back to the field. Everything
//! else defers to the host's native focus order.
//!
//! The focused index is always either `None` (the text field holds logical
//! focus) or a valid index into the match list; installing a new match list
//! resets it to `None`, so a stale position can never survive a filter pass.

use crate::domain::{Candidate, Result, TypeaheadError};

/// Navigation direction for [`SuggestionList::advance_focus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Tab: towards higher indices, wrapping at the end.
    Forward,
    /// Shift+Tab: towards the field.
    Backward,
}

/// Outcome of a focus advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusAdvance {
    /// The list took the transition: focus moved to the given suggestion, or
    /// back to the field (`None`). The host must apply the transfer and
    /// swallow the key press that triggered it.
    Moved(Option<usize>),
    /// The list does not manage this step; the host's default focus
    /// traversal applies.
    Deferred,
}

/// Ordered matches for the current input plus the focused position.
///
/// # Examples
///
/// ```
/// use typeahead::{Candidate, SuggestionList};
///
/// let list = SuggestionList::new(vec![Candidate {
///     matched_prefix: "A".to_string(),
///     remainder: "udi".to_string(),
/// }]);
/// assert_eq!(list.focused(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionList {
    matches: Vec<Candidate>,
    focused: Option<usize>,
}

impl SuggestionList {
    /// Installs a freshly computed match list with no focused suggestion.
    #[must_use]
    pub fn new(matches: Vec<Candidate>) -> Self {
        Self {
            matches,
            focused: None,
        }
    }

    /// Returns the visible candidates in match order.
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.matches
    }

    /// Returns the focused index, or `None` when the field holds focus.
    #[must_use]
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Returns the number of visible suggestions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Returns `true` if no suggestions are visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Moves focus to the first suggestion. No-op on an empty list.
    pub fn focus_first(&mut self) {
        if !self.matches.is_empty() {
            self.focused = Some(0);
        }
    }

    /// Resynchronizes the focused index from where the host reports platform
    /// focus actually sits.
    ///
    /// Key presses are scoped to the field or to a specific suggestion, which
    /// makes the event origin authoritative: native traversal may have moved
    /// focus between suggestions without the list's involvement.
    ///
    /// # Errors
    ///
    /// Returns [`TypeaheadError::StaleIndex`] if the host names an index that
    /// is not currently visible.
    pub fn sync_focus(&mut self, origin: Option<usize>) -> Result<()> {
        if let Some(index) = origin {
            if index >= self.matches.len() {
                return Err(TypeaheadError::StaleIndex {
                    index,
                    len: self.matches.len(),
                });
            }
        }
        self.focused = origin;
        Ok(())
    }

    /// Advances focus one step in the given direction.
    ///
    /// Forward: entering the list from the field lands on index 0, interior
    /// steps move to the next suggestion, and the last suggestion wraps back
    /// to index 0. Backward: index 0 returns focus to the field; interior
    /// steps are deferred to native focus order, and the field itself keeps
    /// its default behavior.
    pub fn advance_focus(&mut self, direction: Direction) -> FocusAdvance {
        if self.matches.is_empty() {
            return FocusAdvance::Deferred;
        }

        match (direction, self.focused) {
            (Direction::Forward, None) => {
                self.focus_first();
                FocusAdvance::Moved(self.focused)
            }
            (Direction::Forward, Some(index)) => {
                let next = (index + 1) % self.matches.len();
                self.focused = Some(next);
                FocusAdvance::Moved(Some(next))
            }
            (Direction::Backward, Some(0)) => {
                self.focused = None;
                FocusAdvance::Moved(None)
            }
            (Direction::Backward, _) => FocusAdvance::Deferred,
        }
    }

    /// Returns the candidate at `index` for committing.
    ///
    /// Selection always targets a currently rendered suggestion, so an
    /// out-of-range index is an integration error from the host binding.
    ///
    /// # Errors
    ///
    /// Returns [`TypeaheadError::StaleIndex`] if `index` is not visible.
    pub fn select(&self, index: usize) -> Result<&Candidate> {
        self.matches.get(index).ok_or(TypeaheadError::StaleIndex {
            index,
            len: self.matches.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(names: &[&str]) -> SuggestionList {
        SuggestionList::new(
            names
                .iter()
                .map(|name| Candidate {
                    matched_prefix: String::new(),
                    remainder: (*name).to_string(),
                })
                .collect(),
        )
    }

    #[test]
    fn new_list_has_no_focus() {
        assert_eq!(list(&["a", "b"]).focused(), None);
    }

    #[test]
    fn focus_first_noop_when_empty() {
        let mut empty = list(&[]);
        empty.focus_first();
        assert_eq!(empty.focused(), None);
    }

    #[test]
    fn forward_from_field_enters_at_zero() {
        let mut suggestions = list(&["a", "b"]);
        assert_eq!(
            suggestions.advance_focus(Direction::Forward),
            FocusAdvance::Moved(Some(0))
        );
        assert_eq!(suggestions.focused(), Some(0));
    }

    #[test]
    fn forward_from_last_wraps_to_zero() {
        let mut suggestions = list(&["a", "b"]);
        suggestions.sync_focus(Some(1)).unwrap();
        assert_eq!(
            suggestions.advance_focus(Direction::Forward),
            FocusAdvance::Moved(Some(0))
        );
    }

    #[test]
    fn forward_interior_steps_once() {
        let mut suggestions = list(&["a", "b", "c"]);
        suggestions.sync_focus(Some(0)).unwrap();
        assert_eq!(
            suggestions.advance_focus(Direction::Forward),
            FocusAdvance::Moved(Some(1))
        );
    }

    #[test]
    fn backward_from_zero_returns_to_field() {
        let mut suggestions = list(&["a", "b"]);
        suggestions.sync_focus(Some(0)).unwrap();
        assert_eq!(
            suggestions.advance_focus(Direction::Backward),
            FocusAdvance::Moved(None)
        );
        assert_eq!(suggestions.focused(), None);
    }

    #[test]
    fn backward_interior_defers_to_native_order() {
        let mut suggestions = list(&["a", "b", "c"]);
        suggestions.sync_focus(Some(2)).unwrap();
        assert_eq!(
            suggestions.advance_focus(Direction::Backward),
            FocusAdvance::Deferred
        );
        assert_eq!(suggestions.focused(), Some(2));
    }

    #[test]
    fn backward_from_field_defers() {
        let mut suggestions = list(&["a", "b"]);
        assert_eq!(
            suggestions.advance_focus(Direction::Backward),
            FocusAdvance::Deferred
        );
    }

    #[test]
    fn empty_list_defers_everything() {
        let mut empty = list(&[]);
        assert_eq!(empty.advance_focus(Direction::Forward), FocusAdvance::Deferred);
        assert_eq!(empty.advance_focus(Direction::Backward), FocusAdvance::Deferred);
    }

    #[test]
    fn sync_focus_rejects_stale_index() {
        let mut suggestions = list(&["a"]);
        let err = suggestions.sync_focus(Some(1)).unwrap_err();
        assert!(matches!(
            err,
            TypeaheadError::StaleIndex { index: 1, len: 1 }
        ));
    }

    #[test]
    fn select_returns_candidate_or_stale_error() {
        let suggestions = list(&["a", "b"]);
        assert_eq!(suggestions.select(1).unwrap().full_text(), "b");
        assert!(suggestions.select(2).is_err());
    }

    #[test]
    fn single_suggestion_wraps_onto_itself() {
        let mut suggestions = list(&["only"]);
        suggestions.sync_focus(Some(0)).unwrap();
        assert_eq!(
            suggestions.advance_focus(Direction::Forward),
            FocusAdvance::Moved(Some(0))
        );
    }
}

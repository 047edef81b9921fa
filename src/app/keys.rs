//! Key press classification.
//!
//! This module maps a raw key press into the closed set of semantic actions
//! the controller cares about. Classification is pure: a [`KeyPress`] exposes
//! a key identifier and a shift-modifier flag, and the four predicates are
//! mutually exclusive by construction. Any other key yields `false` for all
//! four and passes through to default text-field behavior.

/// Key identifiers the controller distinguishes.
///
/// Everything outside the navigation protocol collapses into [`Key::Other`];
/// the core never inspects character keys (text edits arrive as separate
/// text-changed events from the host).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// The Tab key (direction decided by the shift modifier).
    Tab,
    /// The Escape key.
    Escape,
    /// The Enter/Return key.
    Enter,
    /// Any key the core does not handle.
    Other,
}

/// A raw key press event as supplied by the host binding.
///
/// # Examples
///
/// ```
/// use typeahead::{Key, KeyPress};
///
/// let press = KeyPress { key: Key::Tab, shift: true };
/// assert!(press.is_tab_backward());
/// assert!(!press.is_tab_forward());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// Which key was pressed.
    pub key: Key,
    /// Whether the shift modifier was held.
    pub shift: bool,
}

impl KeyPress {
    /// True iff the key is Tab with no shift modifier.
    #[must_use]
    pub fn is_tab_forward(&self) -> bool {
        self.key == Key::Tab && !self.shift
    }

    /// True iff the key is Tab with the shift modifier held.
    #[must_use]
    pub fn is_tab_backward(&self) -> bool {
        self.key == Key::Tab && self.shift
    }

    /// True iff the key is Escape.
    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.key == Key::Escape
    }

    /// True iff the key is Enter/Return.
    #[must_use]
    pub fn is_enter(&self) -> bool {
        self.key == Key::Enter
    }
}

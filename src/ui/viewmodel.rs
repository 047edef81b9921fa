//! View model types representing renderable widget state.
//!
//! This module defines the immutable view model computed from widget state,
//! following the MVVM pattern. The view model is the full declarative surface
//! the host binding renders from: it contains no business logic, only
//! display-ready data, and serializes to JSON so headless hosts can snapshot
//! it over a wire.
//!
//! # Example
//!
//! ```
//! use typeahead::ui::viewmodel::{FooterInfo, SuggestionItem, TypeaheadView};
//!
//! let view = TypeaheadView {
//!     input_text: "a".to_string(),
//!     box_visible: true,
//!     suggestions: vec![SuggestionItem {
//!         matched_prefix: "A".to_string(),
//!         remainder: "udi".to_string(),
//!         is_focused: false,
//!     }],
//!     focused_index: None,
//!     empty_state: None,
//!     footer: FooterInfo { keybindings: "Esc: dismiss".to_string() },
//! };
//! assert!(view.box_visible);
//! ```

use serde::Serialize;

/// Complete widget view model for rendering.
///
/// Computed from `TypeaheadState` on demand. The host binding renders this
/// and applies literal focus transfer whenever `focused_index` (or
/// visibility) changes — the core only ever declares intent.
#[derive(Debug, Clone, Serialize)]
pub struct TypeaheadView {
    /// Current raw input text.
    pub input_text: String,

    /// Whether the suggestion box is visible.
    pub box_visible: bool,

    /// Visible suggestions in match order. Empty when the box is hidden.
    pub suggestions: Vec<SuggestionItem>,

    /// Index of the keyboard-focused suggestion, `None` when the text field
    /// holds logical focus.
    pub focused_index: Option<usize>,

    /// Notice shown inside a visible box with no matches.
    pub empty_state: Option<EmptyState>,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,
}

/// Display information for a single suggestion row.
///
/// The matched prefix is pre-split from the remainder so the renderer can
/// emphasize it (bold highlighting is a view concern).
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionItem {
    /// Leading portion that matched the input text.
    pub matched_prefix: String,

    /// Everything after the matched prefix.
    pub remainder: String,

    /// Whether this suggestion currently holds keyboard focus.
    pub is_focused: bool,
}

/// Notice displayed when the box is visible but nothing matches.
#[derive(Debug, Clone, Serialize)]
pub struct EmptyState {
    /// Message text (e.g. "No matches").
    pub message: String,
}

/// Footer display information.
#[derive(Debug, Clone, Serialize)]
pub struct FooterInfo {
    /// Keybinding help text for the current phase.
    pub keybindings: String,
}

//! Composable UI component renderers.
//!
//! Each component renders one part of the widget and returns the next free
//! row, so layouts compose by threading the row position through.
//!
//! # Components
//!
//! - [`field`]: Bordered input box with the current text
//! - [`suggestions`]: Suggestion rows with prefix emphasis and focus styling
//! - [`empty`]: "No matches" notice for a visible but empty box
//! - [`footer`]: Help text and keybinding hints
//!
//! # Layout Modes
//!
//! - [`render_open_widget`]: Field + suggestion box (or empty notice) + footer
//! - [`render_closed_widget`]: Field + footer (box hidden)

pub(crate) mod empty;
pub(crate) mod field;
pub(crate) mod footer;
pub(crate) mod suggestions;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::TypeaheadView;

use empty::render_empty_state;
use field::render_field;
use footer::render_footer;
use suggestions::render_suggestion_box;

/// Rows of chrome around the suggestion rows: the leading blank row, the
/// 3-line field box, the box's bottom border, and the footer with its
/// separating gap.
const CHROME_ROWS: usize = 7;

/// Renders the widget with the suggestion box open.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Field Box - 3 lines]
/// [Suggestion Rows | Empty Notice]
/// [Box Bottom Border]
/// [Footer at screen bottom]
/// ```
pub fn render_open_widget(vm: &TypeaheadView, theme: &Theme, cols: usize, rows: usize) {
    let field_focused = vm.focused_index.is_none();
    let current_row = render_field(2, &vm.input_text, field_focused, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    } else {
        let max_rows = rows.saturating_sub(CHROME_ROWS).max(1);
        render_suggestion_box(current_row, &vm.suggestions, theme, cols, max_rows);
    }

    render_footer(rows.saturating_sub(1), &vm.footer, theme, cols);
}

/// Renders the widget with the suggestion box hidden (`Idle` or `Dismissed`).
pub fn render_closed_widget(vm: &TypeaheadView, theme: &Theme, cols: usize, rows: usize) {
    render_field(2, &vm.input_text, true, theme, cols);
    render_footer(rows.saturating_sub(1), &vm.footer, theme, cols);
}

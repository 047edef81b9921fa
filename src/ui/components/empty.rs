//! Empty state component renderer.
//!
//! Renders the "no matches" notice shown when the suggestion box is visible
//! but the current input matches nothing.

use crate::ui::components::field::FIELD_BOX_MARGIN;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty-match notice at the specified row.
///
/// Displays a single bordered row, aligned with the field box above, with the
/// message centered and dimmed.
///
/// Returns the next available row position.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(FIELD_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    let msg_len = empty.message.len().min(inner_width);
    let msg_padding = (inner_width.saturating_sub(msg_len)) / 2;

    position_cursor(row, 1);
    print!("{}", " ".repeat(FIELD_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.border));
    print!("│");
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{}", empty.message);
    print!("{}", " ".repeat(inner_width.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(FIELD_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 2
}

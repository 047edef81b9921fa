//! Suggestion box component renderer.
//!
//! Renders the visible suggestions as a bordered box directly under the input
//! field, one row per candidate, with the matched prefix emphasized and the
//! focused row highlighted with selection colors.

use crate::ui::components::field::FIELD_BOX_MARGIN;
use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SuggestionItem;

/// Renders the suggestion box at the specified row.
///
/// Displays one bordered row per suggestion, aligned with the field box
/// above. At most `max_rows` suggestions are drawn; overflow is a pure
/// rendering concern and does not affect navigation state.
///
/// Returns the next available row position.
pub fn render_suggestion_box(
    row: usize,
    items: &[SuggestionItem],
    theme: &Theme,
    cols: usize,
    max_rows: usize,
) -> usize {
    let box_width = cols.saturating_sub(FIELD_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    let mut current_row = row;
    for item in items.iter().take(max_rows) {
        current_row = render_suggestion_row(current_row, item, theme, inner_width);
    }

    position_cursor(current_row, 1);
    print!("{}", " ".repeat(FIELD_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    current_row + 1
}

/// Renders a single suggestion row between side borders.
fn render_suggestion_row(
    row: usize,
    item: &SuggestionItem,
    theme: &Theme,
    inner_width: usize,
) -> usize {
    position_cursor(row, 1);
    print!("{}", " ".repeat(FIELD_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.border));
    print!("│");

    if item.is_focused {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    print!(" ");
    helpers::render_split_candidate(item, theme);

    let text_len = 1 + item.matched_prefix.chars().count() + item.remainder.chars().count();
    print!("{}", " ".repeat(inner_width.saturating_sub(text_len)));
    print!("{}", Theme::reset());

    print!("{}", Theme::fg(&theme.colors.border));
    print!("│");
    print!("{}", Theme::reset());

    row + 1
}

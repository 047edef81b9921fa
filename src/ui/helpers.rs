//! Shared rendering utilities.
//!
//! Low-level helpers used across the UI components: cursor positioning and
//! the split rendering of a suggestion's matched prefix versus its remainder.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::SuggestionItem;

/// Positions the cursor at a specific row and column.
///
/// Uses the ANSI escape sequence `\x1b[{row};{col}H`. Coordinates are
/// 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Renders one suggestion's text with the matched prefix emphasized.
///
/// The prefix is printed bold in the theme's prefix color and the remainder
/// in normal text. When the row is focused, the selection colors take over
/// and only the bold weight distinguishes the prefix, so the emphasis
/// survives on top of the selection background.
pub fn render_split_candidate(item: &SuggestionItem, theme: &Theme) {
    if item.is_focused {
        print!("{}", Theme::bold());
        print!("{}", item.matched_prefix);
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        print!("{}", item.remainder);
    } else {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.prefix_fg));
        print!("{}", item.matched_prefix);
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{}", item.remainder);
    }
}

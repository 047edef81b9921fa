//! Input field component renderer.
//!
//! Renders the text field as a bordered 3-line box with the current input
//! text and a trailing cursor marker.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;

/// Horizontal margin for the field box (spaces on left and right).
pub(crate) const FIELD_BOX_MARGIN: usize = 5;

/// Renders the input field box at the specified row.
///
/// Displays a 3-line bordered box containing the input text. The box is
/// horizontally centered with margins on both sides; the border color dims
/// when the field does not hold logical focus (a suggestion does).
///
/// # Layout
///
/// ```text
/// [margin] ┌─────────────┐ [margin]
/// [margin] │ {input}▏    │ [margin]
/// [margin] └─────────────┘ [margin]
/// ```
///
/// Returns the next available row position (row + 3).
pub fn render_field(
    row: usize,
    input_text: &str,
    field_focused: bool,
    theme: &Theme,
    cols: usize,
) -> usize {
    let box_width = cols.saturating_sub(FIELD_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    let border_color = if field_focused {
        &theme.colors.field_border
    } else {
        &theme.colors.border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(FIELD_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let field_text = format!(" {input_text}▏");
    let text_len = field_text.chars().count();
    let padding = inner_width.saturating_sub(text_len);

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(FIELD_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{field_text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(FIELD_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

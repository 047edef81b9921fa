//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to the UI components. Rendering is a
//! one-way projection of state: nothing here mutates the widget.

use crate::app::TypeaheadState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TypeaheadView;

/// Renders the widget UI to stdout.
///
/// Computes the view model from widget state and delegates to the open or
/// closed layout depending on box visibility. Prints ANSI-styled output using
/// `print!`; does not clear the screen or flush — the host binding owns the
/// frame lifecycle.
pub fn render(state: &TypeaheadState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel();

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Renders a pre-computed view model.
fn render_viewmodel(vm: &TypeaheadView, theme: &Theme, rows: usize, cols: usize) {
    if vm.box_visible {
        components::render_open_widget(vm, theme, cols, rows);
    } else {
        components::render_closed_widget(vm, theme, cols, rows);
    }
}

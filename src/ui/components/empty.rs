//! Centered notices: loading, load error, and the empty result state.

use crate::ui::helpers::{truncate, width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

fn centered(canvas: &mut Canvas, row: usize, text: &str, cols: usize) {
    let text = truncate(text, cols);
    canvas.move_to(row, 1);
    canvas.pad(cols.saturating_sub(width(&text)) / 2);
    canvas.put(&text);
}

/// Two centered lines: message, then a dimmed subtitle.
pub fn render_empty_state(canvas: &mut Canvas, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    canvas.fg(&theme.colors.empty_state_fg);
    centered(canvas, row + 1, &empty.message, cols);
    canvas.reset();

    canvas.fg(&theme.colors.text_dim);
    centered(canvas, row + 2, &empty.subtitle, cols);
    canvas.reset();
    row + 3
}

pub fn render_loading(canvas: &mut Canvas, row: usize, theme: &Theme, cols: usize) -> usize {
    canvas.fg(&theme.colors.text_dim);
    centered(canvas, row + 1, "Loading projects...", cols);
    canvas.reset();
    row + 2
}

/// The load error with a retry hint.
pub fn render_load_error(canvas: &mut Canvas, row: usize, message: &str, theme: &Theme, cols: usize) -> usize {
    canvas.fg(&theme.colors.error_fg);
    centered(canvas, row + 1, message, cols);
    canvas.reset();

    canvas.fg(&theme.colors.text_dim);
    centered(canvas, row + 2, "Press R to retry", cols);
    canvas.reset();
    row + 3
}

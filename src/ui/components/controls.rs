//! Project search box with the category and sort selectors.

use crate::ui::helpers::{truncate, width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ControlsInfo;

/// Horizontal margin for the search box.
const SEARCH_BOX_MARGIN: usize = 2;

/// Renders a 3-line search box followed by one selector line. Returns the
/// next free row.
///
/// ```text
///   ┌──────────────────────────────┐
///   │ Search: react▏               │
///   └──────────────────────────────┘
///   Category: All   Sort: Date   2 projects
/// ```
pub fn render_controls(canvas: &mut Canvas, row: usize, controls: &ControlsInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if controls.searching {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    };

    canvas.move_to(row, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.fg(border);
    canvas.put(&format!("┌{}┐", "─".repeat(inner_width)));
    canvas.reset();

    let cursor = if controls.searching { "▏" } else { "" };
    let search_text = truncate(&format!(" Search: {}{cursor}", controls.query), inner_width);

    canvas.move_to(row + 1, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.fg(border);
    canvas.put("│");
    canvas.fg(&theme.colors.text_normal);
    canvas.put(&search_text);
    canvas.pad(inner_width.saturating_sub(width(&search_text)));
    canvas.fg(border);
    canvas.put("│");
    canvas.reset();

    canvas.move_to(row + 2, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.fg(border);
    canvas.put(&format!("└{}┘", "─".repeat(inner_width)));
    canvas.reset();

    let noun = if controls.result_count == 1 { "project" } else { "projects" };
    canvas.move_to(row + 3, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.fg(&theme.colors.text_dim);
    canvas.put("Category: ");
    canvas.fg(&theme.colors.accent);
    canvas.put(&controls.filter_label);
    canvas.fg(&theme.colors.text_dim);
    canvas.put("   Sort: ");
    canvas.fg(&theme.colors.accent);
    canvas.put(&controls.sort_label);
    canvas.fg(&theme.colors.text_dim);
    canvas.put(&format!("   {} {noun}", controls.result_count));
    canvas.reset();

    row + 4
}

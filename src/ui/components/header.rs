//! Greeting bar with the theme toggle indicator.

use crate::ui::helpers::{truncate, width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the two-line header: greeting on the left, toggle on the right,
/// subtitle below. Returns the next free row.
pub fn render_header(canvas: &mut Canvas, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let toggle = format!("[t] {}", header.theme_icon);
    let toggle_width = width(&toggle) + 1;
    let headline = truncate(&format!(" {}", header.headline), cols.saturating_sub(toggle_width));

    canvas.move_to(row, 1);
    canvas.bold();
    canvas.fg(&theme.colors.header_fg);
    if let Some(bg) = &theme.colors.header_bg {
        canvas.bg(bg);
    }
    canvas.put(&headline);
    canvas.pad(cols.saturating_sub(width(&headline) + toggle_width));
    canvas.put(&toggle);
    canvas.put(" ");
    canvas.reset();

    canvas.move_to(row + 1, 1);
    canvas.fg(&theme.colors.text_dim);
    canvas.put(&truncate(&format!(" {}", header.subtitle), cols));
    canvas.reset();

    row + 2
}

//! Section navigation bar and the menu overlay.

use crate::ui::helpers::{width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NavItem;

/// Renders `1 Home  2 About  3 Projects  4 Contact` with the active section
/// emphasized. Returns the next free row.
pub fn render_nav(canvas: &mut Canvas, row: usize, items: &[NavItem], theme: &Theme) -> usize {
    canvas.move_to(row, 1);
    canvas.put(" ");

    for item in items {
        if item.active {
            canvas.bold();
            canvas.fg(&theme.colors.accent);
            canvas.put(&format!("[{} {}]", item.key, item.title));
        } else {
            canvas.fg(&theme.colors.text_normal);
            canvas.put(&format!(" {} {} ", item.key, item.title));
        }
        canvas.reset();
        canvas.put(" ");
    }

    row + 1
}

/// Draws the menu as a bordered box starting at `row`, over whatever is
/// below it.
pub fn render_menu(canvas: &mut Canvas, row: usize, items: &[NavItem], theme: &Theme) {
    let inner = items.iter().map(|item| width(&item.title) + 6).max().unwrap_or(0);

    canvas.move_to(row, 2);
    canvas.fg(&theme.colors.search_bar_border);
    canvas.put(&format!("┌{}┐", "─".repeat(inner)));

    for (offset, item) in items.iter().enumerate() {
        canvas.move_to(row + 1 + offset, 2);
        canvas.fg(&theme.colors.search_bar_border);
        canvas.put("│");
        if item.active {
            canvas.fg(&theme.colors.selection_fg);
            canvas.bg(&theme.colors.selection_bg);
        } else {
            canvas.fg(&theme.colors.text_normal);
        }
        let label = format!(" {}  {}", item.key, item.title);
        canvas.put(&label);
        canvas.pad(inner.saturating_sub(width(&label)));
        canvas.reset();
        canvas.fg(&theme.colors.search_bar_border);
        canvas.put("│");
    }

    canvas.move_to(row + 1 + items.len(), 2);
    canvas.put(&format!("└{}┘", "─".repeat(inner)));
    canvas.reset();
}

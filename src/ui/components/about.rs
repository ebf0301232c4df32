//! Collapsible About panels.

use crate::ui::helpers::{truncate, wrap, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PanelItem;

/// Renders each panel title with its `+`/`−` indicator, and the wrapped body
/// of expanded panels. Stops at `max_row`. Returns the next free row.
pub fn render_panels(
    canvas: &mut Canvas,
    row: usize,
    panels: &[PanelItem],
    theme: &Theme,
    cols: usize,
    max_row: usize,
) -> usize {
    let mut current_row = row;

    for panel in panels {
        if current_row > max_row {
            break;
        }

        canvas.move_to(current_row, 1);
        canvas.put("  ");
        if panel.is_selected {
            canvas.fg(&theme.colors.selection_fg);
            canvas.bg(&theme.colors.selection_bg);
        } else {
            canvas.fg(&theme.colors.header_fg);
        }
        canvas.bold();
        let title = format!(" {} {} ", panel.indicator(), panel.title);
        canvas.put(&truncate(&title, cols.saturating_sub(2)));
        canvas.reset();
        current_row += 1;

        if panel.expanded {
            canvas.fg(&theme.colors.text_normal);
            for line in wrap(&panel.body, cols.saturating_sub(6)) {
                if current_row > max_row {
                    break;
                }
                canvas.move_to(current_row, 1);
                canvas.pad(5);
                canvas.put(&line);
                current_row += 1;
            }
            canvas.reset();
        }

        current_row += 1;
    }

    current_row
}

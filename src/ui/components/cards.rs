//! Project cards.
//!
//! Each card takes five rows:
//!
//! ```text
//! ▌ Weather Dashboard
//! ▌ Web Development · 11/25/2023
//! ▌ Real-time weather dashboard with interactive charts
//! ▌ JavaScript  Chart.js  Weather API
//!
//! ```

use crate::ui::helpers::{self, truncate, width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardItem;

const CARD_INDENT: usize = 2;

/// Renders `items` starting at `row`, one card each.
///
/// # Parameters
///
/// * `row` - First row to draw on (1-indexed)
/// * `items` - The visible window of cards, already scrolled to the selection
/// * `cols` - Pane width; titles and descriptions are truncated to it
///
/// # Returns
///
/// The next free row.
pub fn render_cards(canvas: &mut Canvas, row: usize, items: &[CardItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_card(canvas, current_row, item, theme, cols);
    }
    current_row
}

fn gutter(canvas: &mut Canvas, row: usize, item: &CardItem, theme: &Theme) {
    canvas.move_to(row, 1);
    canvas.pad(CARD_INDENT);
    if item.is_selected {
        canvas.fg(&theme.colors.accent);
        canvas.put("▌ ");
    } else {
        canvas.put("  ");
    }
    canvas.reset();
}

fn render_card(canvas: &mut Canvas, row: usize, item: &CardItem, theme: &Theme, cols: usize) -> usize {
    let text_width = cols.saturating_sub(CARD_INDENT + 3);

    gutter(canvas, row, item, theme);
    if item.is_selected {
        canvas.fg(&theme.colors.selection_fg);
        canvas.bg(&theme.colors.selection_bg);
    }
    canvas.bold();
    if !item.is_selected {
        canvas.fg(&theme.colors.header_fg);
    }
    let title = truncate(&item.title, text_width);
    let ranges: Vec<(usize, usize)> = item
        .highlight_ranges
        .iter()
        .filter(|(_, end)| *end <= width(&title))
        .copied()
        .collect();
    helpers::render_highlighted_text(canvas, &title, &ranges, theme, item.is_selected);
    canvas.reset();

    gutter(canvas, row + 1, item, theme);
    canvas.fg(&theme.colors.accent);
    canvas.put(&truncate(&item.category_label, text_width));
    canvas.fg(&theme.colors.text_dim);
    canvas.put(&format!(" · {}", item.date));
    canvas.reset();

    gutter(canvas, row + 2, item, theme);
    canvas.fg(&theme.colors.text_normal);
    canvas.put(&truncate(&item.description, text_width));
    canvas.reset();

    gutter(canvas, row + 3, item, theme);
    canvas.fg(&theme.colors.tag_fg);
    canvas.put(&truncate(&item.technologies.join("  "), text_width));
    canvas.reset();

    row + 5
}

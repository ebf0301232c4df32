//! Contact form: fields with inline errors, submit button, status line.

use crate::ui::helpers::{truncate, width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ContactInfo, FieldItem};

const LABEL_WIDTH: usize = 10;

/// Renders the form starting at `row`: one boxed line per field with its
/// inline error, the submit button, then the status line if any.
///
/// The field being edited shows a `▏` cursor. While a submission is pending
/// the button reads "Sending..." and is dimmed.
///
/// # Returns
///
/// The next free row.
pub fn render_contact(canvas: &mut Canvas, row: usize, contact: &ContactInfo, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for field in &contact.fields {
        current_row = render_field(canvas, current_row, field, theme, cols);
    }

    canvas.move_to(current_row, 1);
    canvas.pad(LABEL_WIDTH + 4);
    let label = format!(" {} ", contact.submit.label);
    if contact.submit.is_focused && contact.submit.enabled {
        canvas.fg(&theme.colors.selection_fg);
        canvas.bg(&theme.colors.selection_bg);
        canvas.bold();
    } else if contact.submit.enabled {
        canvas.fg(&theme.colors.accent);
    } else {
        canvas.fg(&theme.colors.text_dim);
    }
    canvas.put(&format!("[{label}]"));
    canvas.reset();
    current_row += 2;

    if let Some(status) = &contact.status {
        canvas.move_to(current_row, 1);
        canvas.pad(2);
        canvas.bold();
        canvas.fg(if status.is_error {
            &theme.colors.error_fg
        } else {
            &theme.colors.success_fg
        });
        canvas.put(&truncate(&status.text, cols.saturating_sub(2)));
        canvas.reset();
        current_row += 1;
    }

    current_row
}

fn render_field(canvas: &mut Canvas, row: usize, field: &FieldItem, theme: &Theme, cols: usize) -> usize {
    let value_width = cols.saturating_sub(LABEL_WIDTH + 8);

    canvas.move_to(row, 1);
    canvas.put(if field.is_focused { " ▸ " } else { "   " });
    canvas.fg(&theme.colors.header_fg);
    canvas.put(&format!("{:<LABEL_WIDTH$}", field.label));
    canvas.reset();

    let border = if field.is_editing {
        &theme.colors.search_bar_border
    } else if field.error.is_some() {
        &theme.colors.error_fg
    } else {
        &theme.colors.border
    };
    let cursor = if field.is_editing { "▏" } else { "" };
    let shown = tail(&format!("{}{cursor}", field.value), value_width);

    canvas.fg(border);
    canvas.put("[");
    canvas.fg(&theme.colors.text_normal);
    canvas.put(&shown);
    canvas.pad(value_width.saturating_sub(width(&shown)));
    canvas.fg(border);
    canvas.put("]");
    canvas.reset();

    if let Some(error) = &field.error {
        canvas.move_to(row + 1, 1);
        canvas.pad(LABEL_WIDTH + 4);
        canvas.fg(&theme.colors.error_fg);
        canvas.put(&truncate(error, cols.saturating_sub(LABEL_WIDTH + 4)));
        canvas.reset();
    }

    row + 2
}

/// Keeps the end of `text` visible while typing past the box width.
fn tail(text: &str, max: usize) -> String {
    let len = width(text);
    if len <= max {
        return text.to_string();
    }
    text.chars().skip(len - max).collect()
}

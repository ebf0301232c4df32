//! Component renderers and the frame layout.
//!
//! Every component draws into a [`Canvas`] at an absolute row and returns the
//! next free row.
//!
//! ```text
//! [Header: greeting + theme toggle]
//! [Header: subtitle]
//! [Border]
//! [Navigation bar]
//! [Border]
//! [Section body]
//! [Border]
//! [Footer]
//! ```
//!
//! The section menu, when open, is drawn last over the top of the body.

mod about;
mod cards;
mod contact;
mod controls;
mod empty;
mod footer;
mod header;
mod nav;

use crate::ui::helpers::{truncate, wrap, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{HomeInfo, ProjectListView, ProjectsInfo, SectionBody, UIViewModel};

fn render_border(canvas: &mut Canvas, row: usize, color: &str, cols: usize) -> usize {
    canvas.move_to(row, 1);
    canvas.fg(color);
    canvas.put(&"─".repeat(cols));
    canvas.reset();
    row + 1
}

/// Lays out a whole frame of `rows` x `cols` cells.
///
/// # Parameters
///
/// * `canvas` - Frame buffer to draw into
/// * `vm` - View model snapshot from [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel)
/// * `theme` - Active palette
/// * `rows` - Pane height; the footer sits on the last row
/// * `cols` - Pane width; every line is truncated to it
///
/// # Layout
///
/// Header (two rows), border, section nav, border, then the section body
/// down to the border above the footer. An open menu is drawn last, over
/// the top of the body. Panes too short for the chrome still get a header
/// and footer.
pub fn render_frame(canvas: &mut Canvas, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = header::render_header(canvas, 1, &vm.header, theme, cols);
    current_row = render_border(canvas, current_row, &theme.colors.border, cols);
    current_row = nav::render_nav(canvas, current_row, &vm.nav, theme);
    let body_start = render_border(canvas, current_row, &theme.colors.border, cols);

    let footer_row = rows.max(body_start + 2);
    let body_end = footer_row.saturating_sub(2);

    match &vm.body {
        SectionBody::Home(home) => {
            render_home(canvas, body_start + 1, home, theme, cols, body_end);
        }
        SectionBody::About(panels) => {
            about::render_panels(canvas, body_start + 1, panels, theme, cols, body_end);
        }
        SectionBody::Projects(projects) => render_projects(canvas, body_start, projects, theme, cols),
        SectionBody::Contact(form) => {
            contact::render_contact(canvas, body_start + 1, form, theme, cols);
        }
    }

    render_border(canvas, footer_row - 1, &theme.colors.border, cols);
    footer::render_footer(canvas, footer_row, &vm.footer, theme, cols);

    if let Some(menu) = &vm.menu {
        nav::render_menu(canvas, body_start, menu, theme);
    }
}

fn render_home(canvas: &mut Canvas, row: usize, home: &HomeInfo, theme: &Theme, cols: usize, max_row: usize) {
    canvas.move_to(row, 1);
    canvas.bold();
    canvas.fg(&theme.colors.accent);
    canvas.put(&truncate(&format!("  {}", home.headline), cols));
    canvas.reset();

    canvas.move_to(row + 1, 1);
    canvas.fg(&theme.colors.text_dim);
    canvas.put(&truncate(&format!("  {}", home.subtitle), cols));
    canvas.reset();

    canvas.fg(&theme.colors.text_normal);
    for (offset, line) in wrap(&home.intro, cols.saturating_sub(4)).iter().enumerate() {
        let line_row = row + 3 + offset;
        if line_row > max_row {
            break;
        }
        canvas.move_to(line_row, 1);
        canvas.put("  ");
        canvas.put(line);
    }
    canvas.reset();
}

fn render_projects(canvas: &mut Canvas, row: usize, projects: &ProjectsInfo, theme: &Theme, cols: usize) {
    let list_row = controls::render_controls(canvas, row, &projects.controls, theme, cols);

    match &projects.list {
        ProjectListView::Loading => {
            empty::render_loading(canvas, list_row, theme, cols);
        }
        ProjectListView::Error(message) => {
            empty::render_load_error(canvas, list_row, message, theme, cols);
        }
        ProjectListView::Empty(state) => {
            empty::render_empty_state(canvas, list_row, state, theme, cols);
        }
        ProjectListView::Cards(cards) => {
            cards::render_cards(canvas, list_row, cards, theme, cols);
        }
    }
}

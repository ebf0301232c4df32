//! Top-level rendering entry point.
//!
//! Rendering is two steps: [`AppState::compute_viewmodel`] snapshots the
//! state, then the component layer draws the snapshot into a frame.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Canvas;

/// Prints one frame of the plugin UI to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", render_to_string(state, rows, cols));
}

/// Builds one frame as an ANSI string without printing it.
///
/// # Returns
///
/// The frame with cursor positioning and color escapes, ready for `print!`.
///
/// # Example
///
/// ```rust
/// use folio::ui::render_to_string;
/// use folio::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// let frame = render_to_string(&state, 24, 80);
/// assert!(frame.contains("Contact"));
/// ```
#[must_use]
pub fn render_to_string(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows);
    let mut canvas = Canvas::new();
    components::render_frame(&mut canvas, &viewmodel, state.theme(), rows, cols);
    canvas.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{LoadStatus, Settings};
    use crate::domain::catalog::sample_projects;
    use crate::domain::page::{Section, ThemeMode};
    use crate::ui::theme::ThemeSet;

    /// Drops escape sequences so frames can be compared as plain text.
    fn plain(frame: &str) -> String {
        let mut out = String::new();
        let mut chars = frame.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
                if !out.ends_with('\n') {
                    out.push('\n');
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    fn state_on(section: Section) -> AppState {
        let mut state = AppState::new(Settings::default(), ThemeSet::default(), ThemeMode::Light);
        state.section = section;
        state
    }

    #[test]
    fn frame_has_chrome_on_every_section() {
        for section in Section::ALL {
            let text = plain(&render_to_string(&state_on(section), 30, 80));
            assert!(text.contains("[t] 🌙"), "{section:?}");
            assert!(text.contains("Contact"), "{section:?}");
            assert!(text.contains("─"), "{section:?}");
        }
    }

    #[test]
    fn projects_show_loading_then_cards() {
        let mut state = state_on(Section::Projects);
        assert!(plain(&render_to_string(&state, 30, 80)).contains("Loading projects..."));

        state.set_catalog(sample_projects());
        let text = plain(&render_to_string(&state, 30, 80));
        assert!(!text.contains("Loading projects..."));
        assert!(text.contains(&state.view[0].title));
    }

    #[test]
    fn load_failure_offers_retry() {
        let mut state = state_on(Section::Projects);
        state.load_status = LoadStatus::Failed("Failed to load projects. Please try again later.".into());
        let text = plain(&render_to_string(&state, 30, 80));
        assert!(text.contains("Failed to load projects"));
        assert!(text.contains("Press R to retry"));
    }

    #[test]
    fn expanded_panel_shows_minus_and_body() {
        let mut state = state_on(Section::About);
        let collapsed = plain(&render_to_string(&state, 40, 80));
        assert!(collapsed.contains("+ Experience"));

        state.toggle_selected_panel();
        let expanded = plain(&render_to_string(&state, 40, 80));
        assert!(expanded.contains("− Experience"));
    }

    #[test]
    fn contact_form_renders_submit_button() {
        let text = plain(&render_to_string(&state_on(Section::Contact), 30, 80));
        assert!(text.contains("Send Message"));
    }

    #[test]
    fn tiny_panes_do_not_panic() {
        for section in Section::ALL {
            let _ = render_to_string(&state_on(section), 1, 1);
            let _ = render_to_string(&state_on(section), 0, 0);
        }
    }
}

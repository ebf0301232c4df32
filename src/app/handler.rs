//! Event handling and state transitions.
//!
//! The plugin shim translates Zellij input into [`Event`]s with as little
//! interpretation as possible (a character is just [`Event::Char`]); this
//! module decides what a key means given the active section and input mode,
//! mutates [`AppState`], and returns the [`Action`]s to run.
//!
//! ```text
//! Key / Timer / Worker reply ─▶ Event ─▶ handle_event ─▶ AppState + Vec<Action>
//! ```

use super::modes::{ContactFocus, FormStatusKind, InputMode, LoadStatus};
use super::state::{
    TimerKind, FORM_INVALID_MESSAGE, GREETING_REFRESH_MS, LOAD_FAILED_MESSAGE, SUBMIT_FAILED_MESSAGE,
    SUBMIT_SUCCESS_MESSAGE,
};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::page::{Greeting, Section, ABOUT_PANELS};
use crate::domain::pipeline::SortKey;
use crate::worker::{WorkerMessage, WorkerResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Plugin loaded: request the stored theme and the catalog, arm the
    /// greeting timer.
    Start,

    /// A printable key. Text in search/editing modes, a command otherwise.
    Char(char),
    Enter,
    Escape,
    Backspace,
    Up,
    Down,
    /// `Tab`.
    NextSection,
    /// `Shift+Tab`.
    PreviousSection,
    /// `Ctrl+s`: submit the contact form from anywhere in it.
    Submit,

    ShowSection(Section),
    ToggleTheme,
    ToggleMenu,
    CloseFocus,

    /// A timer armed by [`Action::SetTimeout`] fired after `millis` elapsed.
    Timer { millis: u64 },

    WorkerResponse(WorkerResponse),
}

/// Processes one event.
///
/// Keys are interpreted by [`InputMode`] first and by the active section
/// second: while searching or editing a field, characters are text; in
/// normal mode they are commands.
///
/// # Parameters
///
/// * `state` - Application state, mutated in place
/// * `event` - The event to process
///
/// # Returns
///
/// Whether the UI should re-render, and the [`Action`]s the plugin shim must
/// carry out (worker messages, timers, hiding the pane).
///
/// # Example
///
/// ```rust
/// use folio::{handle_event, initialize, Config, Event, Section};
///
/// let mut state = initialize(&Config::default());
/// let (render, _actions) = handle_event(&mut state, &Event::Char('3'))?;
/// assert!(render);
/// assert_eq!(state.section, Section::Projects);
/// # Ok::<(), folio::FolioError>(())
/// ```
///
/// # Errors
///
/// Currently infallible; the `Result` leaves room for handlers that touch
/// fallible collaborators.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Start => Ok((true, start(state))),
        Event::Char(c) => handle_char(state, *c),
        Event::Enter => handle_enter(state),
        Event::Escape => Ok(handle_escape(state)),
        Event::Backspace => Ok(handle_backspace(state)),
        Event::Up => Ok(move_cursor(state, false)),
        Event::Down => Ok(move_cursor(state, true)),
        Event::NextSection => {
            let next = state.section.next();
            Ok((true, navigate(state, next)))
        }
        Event::PreviousSection => {
            let previous = state.section.previous();
            Ok((true, navigate(state, previous)))
        }
        Event::Submit => {
            if state.section == Section::Contact {
                Ok((true, submit(state)))
            } else {
                Ok((false, vec![]))
            }
        }
        Event::ShowSection(section) => Ok((true, navigate(state, *section))),
        Event::ToggleTheme => Ok((true, toggle_theme(state))),
        Event::ToggleMenu => {
            state.menu_open = !state.menu_open;
            state.menu_cursor = state.section;
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Timer { millis } => Ok(handle_timer(state, *millis)),
        Event::WorkerResponse(response) => Ok(handle_worker_response(state, response)),
    }
}

fn start(state: &mut AppState) -> Vec<Action> {
    tracing::debug!("requesting theme preference and catalog");
    state.load_status = LoadStatus::Loading;
    vec![
        Action::PostToWorker(WorkerMessage::load_theme()),
        load_catalog_action(state),
        Action::SetTimeout {
            millis: GREETING_REFRESH_MS,
        },
    ]
}

fn load_catalog_action(state: &AppState) -> Action {
    Action::PostToWorker(WorkerMessage::load_catalog(
        state.settings.catalog_file.clone(),
        state.settings.latency.catalog_ms,
    ))
}

/// Activates `section`, closes the menu and leaves any text entry. Leaving a
/// contact field counts as blurring it.
fn navigate(state: &mut AppState, section: Section) -> Vec<Action> {
    blur(state);
    tracing::debug!(from = ?state.section, to = ?section, "navigating");
    state.section = section;
    state.menu_open = false;
    vec![]
}

fn blur(state: &mut AppState) {
    if let InputMode::Editing(field) = state.input_mode {
        state.form.validate_field(field);
    }
    state.input_mode = InputMode::Normal;
}

fn toggle_theme(state: &mut AppState) -> Vec<Action> {
    state.theme_mode = state.theme_mode.toggled();
    state.theme_touched = true;
    tracing::debug!(mode = state.theme_mode.as_str(), "theme toggled");
    vec![Action::PostToWorker(WorkerMessage::save_theme(state.theme_mode))]
}

fn handle_char(state: &mut AppState, c: char) -> Result<(bool, Vec<Action>)> {
    match state.input_mode {
        InputMode::Search => {
            state.query.text.push(c);
            state.selected_index = 0;
            state.refresh_view();
            return Ok((true, vec![]));
        }
        InputMode::Editing(field) => {
            state.form.push_char(field, c);
            return Ok((true, vec![]));
        }
        InputMode::Normal => {}
    }

    let global = match c {
        '1'..='4' => {
            let idx = c as usize - '1' as usize;
            Some(Event::ShowSection(Section::ALL[idx]))
        }
        't' => Some(Event::ToggleTheme),
        'm' => Some(Event::ToggleMenu),
        'q' => Some(Event::CloseFocus),
        _ => None,
    };
    if let Some(event) = global {
        return handle_event(state, &event);
    }

    if state.menu_open {
        return Ok(match c {
            'j' => move_cursor(state, true),
            'k' => move_cursor(state, false),
            _ => (false, vec![]),
        });
    }

    Ok(match (state.section, c) {
        (_, 'j') => move_cursor(state, true),
        (_, 'k') => move_cursor(state, false),
        (Section::About, ' ') => {
            state.toggle_selected_panel();
            (true, vec![])
        }
        (Section::Projects, cmd) => projects_command(state, cmd),
        _ => (false, vec![]),
    })
}

fn projects_command(state: &mut AppState, cmd: char) -> (bool, Vec<Action>) {
    match cmd {
        '/' => {
            state.input_mode = InputMode::Search;
            (true, vec![])
        }
        'f' | 'F' => {
            state.query.category = if cmd == 'f' {
                state.query.category.next()
            } else {
                state.query.category.previous()
            };
            state.selected_index = 0;
            state.refresh_view();
            (true, vec![])
        }
        'd' | 'n' => {
            state.query.sort = if cmd == 'd' { SortKey::Date } else { SortKey::Name };
            state.selected_index = 0;
            state.refresh_view();
            (true, vec![])
        }
        'r' => {
            state.reset_query();
            (true, vec![])
        }
        'R' => retry_load(state),
        _ => (false, vec![]),
    }
}

fn retry_load(state: &mut AppState) -> (bool, Vec<Action>) {
    if !matches!(state.load_status, LoadStatus::Failed(_)) {
        return (false, vec![]);
    }
    tracing::info!("retrying catalog load");
    state.load_status = LoadStatus::Loading;
    (true, vec![load_catalog_action(state)])
}

fn handle_enter(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    match state.input_mode {
        InputMode::Search | InputMode::Editing(_) => {
            blur(state);
            return Ok((true, vec![]));
        }
        InputMode::Normal => {}
    }

    if state.menu_open {
        let section = state.menu_cursor;
        return Ok((true, navigate(state, section)));
    }

    Ok(match state.section {
        Section::About => {
            state.toggle_selected_panel();
            (true, vec![])
        }
        Section::Contact => match state.contact_focus {
            ContactFocus::Field(field) => {
                state.input_mode = InputMode::Editing(field);
                (true, vec![])
            }
            ContactFocus::Submit => (true, submit(state)),
        },
        Section::Home | Section::Projects => (false, vec![]),
    })
}

fn handle_escape(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.input_mode.is_text_entry() {
        blur(state);
        return (true, vec![]);
    }
    if state.menu_open {
        state.menu_open = false;
        return (true, vec![]);
    }
    (false, vec![])
}

fn handle_backspace(state: &mut AppState) -> (bool, Vec<Action>) {
    match state.input_mode {
        InputMode::Search => {
            if state.query.text.pop().is_none() {
                return (false, vec![]);
            }
            state.refresh_view();
            (true, vec![])
        }
        InputMode::Editing(field) => {
            state.form.pop_char(field);
            (true, vec![])
        }
        InputMode::Normal => (false, vec![]),
    }
}

fn move_cursor(state: &mut AppState, down: bool) -> (bool, Vec<Action>) {
    if state.input_mode.is_text_entry() {
        return (false, vec![]);
    }

    if state.menu_open {
        state.menu_cursor = if down {
            state.menu_cursor.next()
        } else {
            state.menu_cursor.previous()
        };
        return (true, vec![]);
    }

    match state.section {
        Section::About => {
            state.about_cursor = if down {
                (state.about_cursor + 1).min(ABOUT_PANELS.len() - 1)
            } else {
                state.about_cursor.saturating_sub(1)
            };
        }
        Section::Projects => {
            if down {
                state.move_selection_down();
            } else {
                state.move_selection_up();
            }
        }
        Section::Contact => {
            state.contact_focus = if down {
                state.contact_focus.next()
            } else {
                state.contact_focus.previous()
            };
        }
        Section::Home => return (false, vec![]),
    }
    (true, vec![])
}

/// Validates every field and, if the form is clean, hands it to the worker.
/// Ignored while a submission is pending.
fn submit(state: &mut AppState) -> Vec<Action> {
    if state.submitting {
        tracing::debug!("submission already pending");
        return vec![];
    }

    blur(state);

    if !state.form.validate_all() {
        tracing::debug!("contact form invalid");
        return vec![state.show_form_status(FormStatusKind::Error, FORM_INVALID_MESSAGE)];
    }

    state.submitting = true;
    tracing::info!("submitting contact form");
    vec![Action::PostToWorker(WorkerMessage::submit_contact(
        state.form.fields(),
        state.settings.latency.submit_ms,
    ))]
}

fn handle_timer(state: &mut AppState, millis: u64) -> (bool, Vec<Action>) {
    match TimerKind::from_elapsed(millis) {
        TimerKind::StatusHide => {
            state.pending_status_hides = state.pending_status_hides.saturating_sub(1);
            if state.pending_status_hides == 0 && state.form_status.take().is_some() {
                return (true, vec![]);
            }
            (false, vec![])
        }
        TimerKind::GreetingRefresh => {
            let greeting = Greeting::now();
            let changed = greeting != state.greeting;
            state.greeting = greeting;
            (
                changed,
                vec![Action::SetTimeout {
                    millis: GREETING_REFRESH_MS,
                }],
            )
        }
    }
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> (bool, Vec<Action>) {
    match response {
        WorkerResponse::CatalogLoaded { projects } => {
            tracing::debug!(project_count = projects.len(), "catalog received");
            state.set_catalog(projects.clone());
            (true, vec![])
        }
        WorkerResponse::CatalogFailed { message } => {
            tracing::warn!(error = %message, "catalog unavailable");
            state.catalog.clear();
            state.refresh_view();
            state.load_status = LoadStatus::Failed(LOAD_FAILED_MESSAGE.to_string());
            (true, vec![])
        }
        WorkerResponse::ThemeLoaded { mode } => {
            let Some(mode) = mode else {
                return (false, vec![]);
            };
            if state.theme_touched {
                tracing::debug!("theme already chosen this session, ignoring stored preference");
                return (false, vec![]);
            }
            let changed = state.theme_mode != *mode;
            state.theme_mode = *mode;
            (changed, vec![])
        }
        WorkerResponse::ThemeSaved { mode } => {
            tracing::debug!(mode = mode.as_str(), "theme persisted");
            (false, vec![])
        }
        WorkerResponse::SubmissionSaved { count } => {
            tracing::debug!(count, "submission stored");
            state.submitting = false;
            state.form.reset();
            state.contact_focus = ContactFocus::default();
            (true, vec![state.show_form_status(FormStatusKind::Success, SUBMIT_SUCCESS_MESSAGE)])
        }
        WorkerResponse::SubmissionFailed { message } => {
            tracing::warn!(error = %message, "submission failed");
            state.submitting = false;
            (true, vec![state.show_form_status(FormStatusKind::Error, SUBMIT_FAILED_MESSAGE)])
        }
        WorkerResponse::Error { message } => {
            tracing::warn!(error = %message, "worker error");
            (false, vec![])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{Settings, STATUS_HIDE_MS};
    use crate::domain::catalog::sample_projects;
    use crate::domain::contact::ContactField;
    use crate::domain::page::ThemeMode;
    use crate::ui::theme::ThemeSet;

    fn state() -> AppState {
        AppState::new(Settings::default(), ThemeSet::default(), ThemeMode::Light)
    }

    fn send(state: &mut AppState, event: Event) -> Vec<Action> {
        handle_event(state, &event).unwrap().1
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            send(state, Event::Char(c));
        }
    }

    #[test]
    fn start_requests_theme_and_catalog() {
        let mut state = state();
        let actions = send(&mut state, Event::Start);

        assert!(matches!(
            actions[0],
            Action::PostToWorker(WorkerMessage::LoadTheme { .. })
        ));
        assert!(matches!(
            actions[1],
            Action::PostToWorker(WorkerMessage::LoadCatalog { catalog_file: None, .. })
        ));
        assert_eq!(
            actions[2],
            Action::SetTimeout {
                millis: GREETING_REFRESH_MS
            }
        );
    }

    #[test]
    fn digits_navigate_and_close_the_menu() {
        let mut state = state();
        send(&mut state, Event::Char('m'));
        assert!(state.menu_open);

        send(&mut state, Event::Char('3'));
        assert_eq!(state.section, Section::Projects);
        assert!(!state.menu_open);
    }

    #[test]
    fn menu_cursor_selects_a_section() {
        let mut state = state();
        send(&mut state, Event::ToggleMenu);
        send(&mut state, Event::Down);
        send(&mut state, Event::Down);
        send(&mut state, Event::Enter);
        assert_eq!(state.section, Section::Projects);
        assert!(!state.menu_open);
    }

    #[test]
    fn toggling_theme_persists_it() {
        let mut state = state();
        let actions = send(&mut state, Event::Char('t'));
        assert_eq!(state.theme_mode, ThemeMode::Dark);
        assert!(matches!(
            actions[0],
            Action::PostToWorker(WorkerMessage::SaveTheme {
                mode: ThemeMode::Dark,
                ..
            })
        ));
    }

    #[test]
    fn stored_theme_applies_until_the_user_toggles() {
        let mut state = state();
        send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::ThemeLoaded {
                mode: Some(ThemeMode::Dark),
            }),
        );
        assert_eq!(state.theme_mode, ThemeMode::Dark);

        send(&mut state, Event::ToggleTheme);
        send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::ThemeLoaded {
                mode: Some(ThemeMode::Dark),
            }),
        );
        assert_eq!(state.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn search_keys_are_text_not_commands() {
        let mut state = state();
        send(&mut state, Event::ShowSection(Section::Projects));
        send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::CatalogLoaded {
                projects: sample_projects(),
            }),
        );

        send(&mut state, Event::Char('/'));
        type_text(&mut state, "react");
        assert_eq!(state.query.text, "react");
        assert_eq!(state.theme_mode, ThemeMode::Light);
        assert_eq!(state.view.iter().map(|p| p.id).collect::<Vec<_>>(), [2, 1]);

        send(&mut state, Event::Enter);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.query.text, "react");
    }

    #[test]
    fn filter_cycles_and_reset_restores() {
        let mut state = state();
        state.section = Section::Projects;
        state.set_catalog(sample_projects());

        send(&mut state, Event::Char('f'));
        send(&mut state, Event::Char('f'));
        send(&mut state, Event::Char('f'));
        assert_eq!(state.view.iter().map(|p| p.id).collect::<Vec<_>>(), [3]);

        send(&mut state, Event::Char('n'));
        send(&mut state, Event::Char('r'));
        assert_eq!(state.view.len(), 6);
        assert_eq!(state.query.sort, SortKey::Date);
    }

    #[test]
    fn failed_load_can_be_retried() {
        let mut state = state();
        state.section = Section::Projects;
        send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::CatalogFailed {
                message: "gone".to_string(),
            }),
        );
        assert_eq!(state.load_status, LoadStatus::Failed(LOAD_FAILED_MESSAGE.to_string()));

        let actions = send(&mut state, Event::Char('R'));
        assert_eq!(state.load_status, LoadStatus::Loading);
        assert!(matches!(
            actions[0],
            Action::PostToWorker(WorkerMessage::LoadCatalog { .. })
        ));

        assert!(send(&mut state, Event::Char('R')).is_empty());
    }

    #[test]
    fn about_panels_toggle_with_enter_and_space() {
        let mut state = state();
        send(&mut state, Event::ShowSection(Section::About));
        send(&mut state, Event::Enter);
        assert!(state.is_panel_expanded("experience"));

        send(&mut state, Event::Down);
        send(&mut state, Event::Char(' '));
        assert!(state.is_panel_expanded("education"));
        assert!(state.is_panel_expanded("experience"));
    }

    fn fill_form(state: &mut AppState, name: &str, email: &str, message: &str) {
        for (field, value) in [
            (ContactField::Name, name),
            (ContactField::Email, email),
            (ContactField::Message, message),
        ] {
            state.contact_focus = ContactFocus::Field(field);
            send(state, Event::Enter);
            type_text(state, value);
            send(state, Event::Enter);
        }
    }

    #[test]
    fn blur_validates_and_editing_clears_the_error() {
        let mut state = state();
        send(&mut state, Event::ShowSection(Section::Contact));
        send(&mut state, Event::Enter);
        type_text(&mut state, "A");
        send(&mut state, Event::Escape);
        assert!(state.form.error(ContactField::Name).is_some());

        send(&mut state, Event::Enter);
        type_text(&mut state, "l");
        assert!(state.form.error(ContactField::Name).is_none());
    }

    #[test]
    fn invalid_form_is_not_submitted() {
        let mut state = state();
        send(&mut state, Event::ShowSection(Section::Contact));
        fill_form(&mut state, "Jo", "jo@example", "Hello there, friend");

        let actions = send(&mut state, Event::Submit);
        assert_eq!(actions, [Action::SetTimeout { millis: STATUS_HIDE_MS }]);
        assert!(!state.submitting);
        assert_eq!(state.form_status.as_ref().map(|s| s.text.as_str()), Some(FORM_INVALID_MESSAGE));
    }

    #[test]
    fn successful_submission_resets_the_form() {
        let mut state = state();
        send(&mut state, Event::ShowSection(Section::Contact));
        fill_form(&mut state, "Jo", "jo@example.com", "Hello there, friend");

        let actions = send(&mut state, Event::Submit);
        assert!(state.submitting);
        assert!(matches!(
            &actions[0],
            Action::PostToWorker(WorkerMessage::SubmitContact { fields, .. }) if fields.name == "Jo"
        ));
        assert!(send(&mut state, Event::Submit).is_empty());

        send(&mut state, Event::WorkerResponse(WorkerResponse::SubmissionSaved { count: 1 }));
        assert!(!state.submitting);
        assert_eq!(state.form.value(ContactField::Name), "");
        assert_eq!(
            state.form_status.as_ref().map(|s| s.text.as_str()),
            Some(SUBMIT_SUCCESS_MESSAGE)
        );
    }

    #[test]
    fn failed_submission_keeps_values() {
        let mut state = state();
        send(&mut state, Event::ShowSection(Section::Contact));
        fill_form(&mut state, "Jo", "jo@example.com", "Hello there, friend");
        send(&mut state, Event::Submit);

        send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::SubmissionFailed {
                message: "disk full".to_string(),
            }),
        );
        assert!(!state.submitting);
        assert_eq!(state.form.value(ContactField::Email), "jo@example.com");
        assert_eq!(
            state.form_status.as_ref().map(|s| s.text.as_str()),
            Some(SUBMIT_FAILED_MESSAGE)
        );
    }

    #[test]
    fn newer_status_restarts_the_hide_window() {
        let mut state = state();
        state.show_form_status(FormStatusKind::Error, FORM_INVALID_MESSAGE);
        state.show_form_status(FormStatusKind::Success, SUBMIT_SUCCESS_MESSAGE);

        let (render, _) = handle_event(&mut state, &Event::Timer { millis: STATUS_HIDE_MS }).unwrap();
        assert!(!render);
        assert!(state.form_status.is_some());

        let (render, _) = handle_event(&mut state, &Event::Timer { millis: STATUS_HIDE_MS }).unwrap();
        assert!(render);
        assert!(state.form_status.is_none());
    }

    #[test]
    fn late_ticks_still_hide_the_status() {
        let mut state = state();
        state.show_form_status(FormStatusKind::Error, FORM_INVALID_MESSAGE);

        let (render, actions) = handle_event(&mut state, &Event::Timer { millis: 5_001 }).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert!(state.form_status.is_none());
        assert_eq!(state.pending_status_hides, 0);
    }

    #[test]
    fn late_greeting_tick_rearms_the_refresh() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::Timer { millis: 60_002 }).unwrap();
        assert_eq!(
            actions,
            [Action::SetTimeout {
                millis: GREETING_REFRESH_MS
            }]
        );
        assert!(state.form_status.is_none());
    }

    #[test]
    fn leaving_a_field_by_navigation_validates_it() {
        let mut state = state();
        send(&mut state, Event::ShowSection(Section::Contact));
        send(&mut state, Event::Enter);
        send(&mut state, Event::NextSection);

        assert_eq!(state.section, Section::Home);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.form.error(ContactField::Name).is_some());
    }
}

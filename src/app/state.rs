//! Application state and view model computation.
//!
//! [`AppState`] is the single owner of everything the page shows: active
//! section, theme, catalog and its filtered view, About panels, and the
//! contact form. The event handler mutates it; `compute_viewmodel` turns a
//! snapshot into a [`UIViewModel`] for the renderer.

use super::actions::Action;
use super::modes::{ContactFocus, FormStatus, FormStatusKind, InputMode, LoadStatus};
use crate::domain::contact::{ContactField, ContactForm};
use crate::domain::page::{Greeting, Section, ThemeMode, ABOUT_PANELS};
use crate::domain::pipeline::{self, ProjectList, ProjectQuery};
use crate::domain::project::ProjectRecord;
use crate::ui::theme::{Theme, ThemeSet};
use crate::ui::viewmodel::{
    CardItem, ContactInfo, ControlsInfo, EmptyState, FieldItem, FooterInfo, HeaderInfo, HomeInfo, NavItem,
    PanelItem, ProjectListView, ProjectsInfo, SectionBody, StatusLine, SubmitInfo, UIViewModel,
};
use std::collections::BTreeSet;

pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// How long a form status message stays visible.
pub const STATUS_HIDE_MS: u64 = 5_000;

/// Interval between greeting refreshes.
pub const GREETING_REFRESH_MS: u64 = 60_000;

/// The armed timer a tick belongs to.
///
/// Zellij reports the elapsed time it measured, which overshoots the
/// requested duration, so a tick is matched to the nearest armed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    StatusHide,
    GreetingRefresh,
}

impl TimerKind {
    /// Classifies a tick of `millis` elapsed.
    ///
    /// # Example
    ///
    /// ```
    /// use folio::app::state::TimerKind;
    ///
    /// assert_eq!(TimerKind::from_elapsed(5_003), TimerKind::StatusHide);
    /// assert_eq!(TimerKind::from_elapsed(60_002), TimerKind::GreetingRefresh);
    /// ```
    #[must_use]
    pub const fn from_elapsed(millis: u64) -> Self {
        if millis < (STATUS_HIDE_MS + GREETING_REFRESH_MS) / 2 {
            Self::StatusHide
        } else {
            Self::GreetingRefresh
        }
    }
}

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load projects. Please try again later.";
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";
pub const SUBMIT_FAILED_MESSAGE: &str = "Sorry, there was an error sending your message. Please try again.";
pub const FORM_INVALID_MESSAGE: &str = "Please fix the errors above";

const HOME_INTRO: &str = "Designer and developer building thoughtful web, mobile and data products. \
Browse the projects, read a little about me, or drop a message.";

const CARD_ROWS: usize = 5;
const PROJECTS_CHROME_ROWS: usize = 11;

/// Artificial delays applied on the worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Latency {
    pub catalog_ms: u64,
    pub submit_ms: u64,
}

/// Runtime settings derived from the plugin configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// JSON catalog path; `None` uses the built-in sample.
    pub catalog_file: Option<String>,
    pub latency: Latency,
    /// `strftime` pattern for card dates.
    pub date_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_file: None,
            latency: Latency::default(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Central state container.
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,
    pub themes: ThemeSet,
    pub theme_mode: ThemeMode,
    /// Set once the user toggles; a late stored preference no longer applies.
    pub theme_touched: bool,
    pub greeting: Greeting,

    pub section: Section,
    pub menu_open: bool,
    pub menu_cursor: Section,
    pub input_mode: InputMode,

    pub about_cursor: usize,
    /// Ids of expanded About panels.
    pub expanded_panels: BTreeSet<&'static str>,

    /// Full catalog, in catalog order. Empty until loaded.
    pub catalog: Vec<ProjectRecord>,
    pub load_status: LoadStatus,
    pub query: ProjectQuery,
    /// Filtered and sorted catalog.
    pub view: Vec<ProjectRecord>,
    pub selected_index: usize,

    pub form: ContactForm,
    pub contact_focus: ContactFocus,
    pub submitting: bool,
    pub form_status: Option<FormStatus>,
    /// Hide timers still running for the status message.
    pub pending_status_hides: usize,
}

impl AppState {
    #[must_use]
    pub fn new(settings: Settings, themes: ThemeSet, theme_mode: ThemeMode) -> Self {
        Self {
            settings,
            themes,
            theme_mode,
            theme_touched: false,
            greeting: Greeting::now(),
            section: Section::Home,
            menu_open: false,
            menu_cursor: Section::Home,
            input_mode: InputMode::Normal,
            about_cursor: 0,
            expanded_panels: BTreeSet::new(),
            catalog: Vec::new(),
            load_status: LoadStatus::Loading,
            query: ProjectQuery::default(),
            view: Vec::new(),
            selected_index: 0,
            form: ContactForm::default(),
            contact_focus: ContactFocus::default(),
            submitting: false,
            form_status: None,
            pending_status_hides: 0,
        }
    }

    /// Palette for the current mode.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        self.themes.get(self.theme_mode)
    }

    /// Re-runs the pipeline over the catalog with the current query and
    /// clamps the selection.
    pub fn refresh_view(&mut self) {
        self.view = pipeline::apply(&self.catalog, &self.query);

        if self.view.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.view.len() - 1);
        }
    }

    /// Replaces the catalog and re-applies the current query to it.
    pub fn set_catalog(&mut self, projects: Vec<ProjectRecord>) {
        self.catalog = projects;
        self.load_status = LoadStatus::Ready;
        self.refresh_view();
    }

    /// Restores the default query: empty search, all categories, newest first.
    pub fn reset_query(&mut self) {
        self.query = ProjectQuery::default();
        self.selected_index = 0;
        self.refresh_view();
    }

    pub fn move_selection_down(&mut self) {
        if self.view.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.view.len();
    }

    pub fn move_selection_up(&mut self) {
        if self.view.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.view.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Flips the About panel under the cursor. Other panels are untouched.
    pub fn toggle_selected_panel(&mut self) {
        let Some(panel) = ABOUT_PANELS.get(self.about_cursor) else {
            return;
        };
        if !self.expanded_panels.remove(panel.id) {
            self.expanded_panels.insert(panel.id);
        }
    }

    #[must_use]
    pub fn is_panel_expanded(&self, id: &str) -> bool {
        self.expanded_panels.contains(id)
    }

    /// Shows a status message under the form and returns the timer action
    /// that will hide it. Each new message needs its own timer to expire.
    pub fn show_form_status(&mut self, kind: FormStatusKind, text: &str) -> Action {
        self.form_status = Some(FormStatus {
            kind,
            text: text.to_string(),
        });
        self.pending_status_hides += 1;
        Action::SetTimeout { millis: STATUS_HIDE_MS }
    }

    /// Computes the view model for a pane `rows` lines tall.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize) -> UIViewModel {
        UIViewModel {
            header: self.compute_header(),
            nav: self.compute_nav(|section| section == self.section),
            menu: self
                .menu_open
                .then(|| self.compute_nav(|section| section == self.menu_cursor)),
            body: self.compute_body(rows),
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            headline: self.greeting.headline.to_string(),
            subtitle: self.greeting.subtitle.to_string(),
            theme_icon: self.theme_mode.icon().to_string(),
        }
    }

    fn compute_nav(&self, is_active: impl Fn(Section) -> bool) -> Vec<NavItem> {
        Section::ALL
            .iter()
            .zip('1'..='4')
            .map(|(section, key)| NavItem {
                key,
                title: section.title().to_string(),
                active: is_active(*section),
            })
            .collect()
    }

    fn compute_body(&self, rows: usize) -> SectionBody {
        match self.section {
            Section::Home => SectionBody::Home(HomeInfo {
                headline: self.greeting.headline.to_string(),
                subtitle: self.greeting.subtitle.to_string(),
                intro: HOME_INTRO.to_string(),
            }),
            Section::About => SectionBody::About(
                ABOUT_PANELS
                    .iter()
                    .enumerate()
                    .map(|(idx, panel)| PanelItem {
                        title: panel.title.to_string(),
                        body: panel.body.to_string(),
                        expanded: self.is_panel_expanded(panel.id),
                        is_selected: idx == self.about_cursor,
                    })
                    .collect(),
            ),
            Section::Projects => SectionBody::Projects(ProjectsInfo {
                controls: ControlsInfo {
                    query: self.query.text.clone(),
                    searching: self.input_mode == InputMode::Search,
                    filter_label: self.query.category.label().to_string(),
                    sort_label: self.query.sort.label().to_string(),
                    result_count: self.view.len(),
                },
                list: self.compute_project_list(rows),
            }),
            Section::Contact => SectionBody::Contact(self.compute_contact()),
        }
    }

    /// Renders the filtered view and keeps a window of cards around the
    /// selection that fits in `rows`.
    fn compute_project_list(&self, rows: usize) -> ProjectListView {
        match &self.load_status {
            LoadStatus::Loading => return ProjectListView::Loading,
            LoadStatus::Failed(message) => return ProjectListView::Error(message.clone()),
            LoadStatus::Ready => {}
        }

        let cards = match pipeline::render(&self.view, &self.query.text, &self.settings.date_format) {
            ProjectList::Empty => {
                return ProjectListView::Empty(EmptyState {
                    message: "No projects found".to_string(),
                    subtitle: "Try a different search or category (r to reset)".to_string(),
                })
            }
            ProjectList::Cards(cards) => cards,
        };

        let capacity = (rows.saturating_sub(PROJECTS_CHROME_ROWS) / CARD_ROWS).max(1);
        let mut visible_start = self.selected_index.saturating_sub(capacity / 2);
        let visible_end = (visible_start + capacity).min(cards.len());
        if visible_end - visible_start < capacity && cards.len() >= capacity {
            visible_start = visible_end.saturating_sub(capacity);
        }

        let items = cards
            .into_iter()
            .enumerate()
            .skip(visible_start)
            .take(visible_end - visible_start)
            .map(|(idx, card)| CardItem {
                title: card.title,
                category_label: card.category_label,
                date: card.date,
                description: card.description,
                technologies: card.technologies,
                is_selected: idx == self.selected_index,
                highlight_ranges: card.title_matches,
            })
            .collect();

        ProjectListView::Cards(items)
    }

    fn compute_contact(&self) -> ContactInfo {
        let fields = ContactField::ALL
            .into_iter()
            .map(|field| FieldItem {
                label: field.label().to_string(),
                value: self.form.value(field).to_string(),
                error: self.form.error(field).map(|e| e.to_string()),
                is_focused: self.contact_focus == ContactFocus::Field(field),
                is_editing: self.input_mode == InputMode::Editing(field),
            })
            .collect();

        ContactInfo {
            fields,
            submit: SubmitInfo {
                label: if self.submitting { "Sending..." } else { "Send Message" }.to_string(),
                enabled: !self.submitting,
                is_focused: self.contact_focus == ContactFocus::Submit,
            },
            status: self.form_status.as_ref().map(|status| StatusLine {
                text: status.text.clone(),
                is_error: status.kind == FormStatusKind::Error,
            }),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.menu_open {
            "j/k: move  Enter: go  1-4: jump  m/Esc: close menu"
        } else {
            match (self.input_mode, self.section) {
                (InputMode::Search, _) => "Type to search  Backspace: delete  Enter/Esc: done",
                (InputMode::Editing(_), _) => "Type to edit  Backspace: delete  Enter/Esc: done  Ctrl+s: send",
                (InputMode::Normal, Section::Home) => "1-4/Tab: sections  m: menu  t: theme  q: quit",
                (InputMode::Normal, Section::About) => {
                    "j/k: move  Enter/Space: expand  1-4/Tab: sections  t: theme  q: quit"
                }
                (InputMode::Normal, Section::Projects) => match self.load_status {
                    LoadStatus::Failed(_) => "R: retry  1-4/Tab: sections  t: theme  q: quit",
                    _ => "/: search  f/F: category  d/n: sort  r: reset  j/k: scroll  t: theme  q: quit",
                },
                (InputMode::Normal, Section::Contact) => {
                    "j/k: move  Enter: edit/send  Ctrl+s: send  1-4/Tab: sections  t: theme  q: quit"
                }
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::sample_projects;
    use crate::domain::pipeline::{CategoryFilter, SortKey};
    use crate::domain::project::Category;

    fn ready_state() -> AppState {
        let mut state = AppState::new(Settings::default(), ThemeSet::default(), ThemeMode::Light);
        state.set_catalog(sample_projects());
        state
    }

    fn ids(state: &AppState) -> Vec<u32> {
        state.view.iter().map(|p| p.id).collect()
    }

    #[test]
    fn catalog_arrival_applies_the_current_query() {
        let mut state = AppState::new(Settings::default(), ThemeSet::default(), ThemeMode::Light);
        state.query.category = CategoryFilter::Only(Category::Design);
        state.refresh_view();
        assert!(state.view.is_empty());

        state.set_catalog(sample_projects());
        assert_eq!(ids(&state), [3]);
    }

    #[test]
    fn reset_restores_everything_newest_first() {
        let mut state = ready_state();
        state.query.text = "react".to_string();
        state.query.sort = SortKey::Name;
        state.refresh_view();

        state.reset_query();
        assert_eq!(ids(&state), [2, 1, 3, 4, 5, 6]);
        assert_eq!(state.query.sort, SortKey::Date);
    }

    #[test]
    fn selection_is_clamped_when_the_view_shrinks() {
        let mut state = ready_state();
        state.selected_index = 5;
        state.query.text = "react".to_string();
        state.refresh_view();
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn panels_toggle_independently() {
        let mut state = ready_state();
        state.toggle_selected_panel();
        state.about_cursor = 2;
        state.toggle_selected_panel();
        assert!(state.is_panel_expanded("experience"));
        assert!(state.is_panel_expanded("skills"));

        state.about_cursor = 0;
        state.toggle_selected_panel();
        assert!(!state.is_panel_expanded("experience"));
        assert!(state.is_panel_expanded("skills"));
    }

    #[test]
    fn project_list_reflects_load_status() {
        let mut state = AppState::new(Settings::default(), ThemeSet::default(), ThemeMode::Light);
        state.section = Section::Projects;
        assert!(matches!(
            state.compute_viewmodel(40).body,
            SectionBody::Projects(ProjectsInfo {
                list: ProjectListView::Loading,
                ..
            })
        ));

        state.load_status = LoadStatus::Failed(LOAD_FAILED_MESSAGE.to_string());
        let SectionBody::Projects(info) = state.compute_viewmodel(40).body else {
            panic!("expected projects body");
        };
        assert_eq!(info.list, ProjectListView::Error(LOAD_FAILED_MESSAGE.to_string()));
    }

    #[test]
    fn card_window_follows_the_selection() {
        let mut state = ready_state();
        state.section = Section::Projects;
        state.selected_index = 5;

        let rows = PROJECTS_CHROME_ROWS + 2 * CARD_ROWS;
        let SectionBody::Projects(info) = state.compute_viewmodel(rows).body else {
            panic!("expected projects body");
        };
        let ProjectListView::Cards(cards) = info.list else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 2);
        assert!(cards[1].is_selected);
        assert_eq!(cards[1].title, "Social Media Analytics");
        assert_eq!(info.controls.result_count, 6);
    }

    #[test]
    fn header_shows_the_mode_to_switch_to() {
        let mut state = ready_state();
        assert_eq!(state.compute_viewmodel(40).header.theme_icon, "🌙");
        state.theme_mode = ThemeMode::Dark;
        assert_eq!(state.compute_viewmodel(40).header.theme_icon, "☀️");
    }
}

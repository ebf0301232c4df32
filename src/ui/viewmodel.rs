//! Display-ready snapshots of [`AppState`](crate::app::AppState).
//!
//! Produced by `AppState::compute_viewmodel` and consumed by the renderer.
//! They hold strings and flags only; no behavior lives here, which keeps
//! everything the user would see assertable in tests.

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub nav: Vec<NavItem>,
    /// Present while the section menu is open.
    pub menu: Option<Vec<NavItem>>,
    pub body: SectionBody,
    pub footer: FooterInfo,
}

/// Greeting and theme toggle indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub headline: String,
    pub subtitle: String,
    /// `🌙` while light, `☀️` while dark.
    pub theme_icon: String,
}

/// One entry of the navigation bar or menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Key that jumps to the section.
    pub key: char,
    pub title: String,
    /// The active section in the bar; the cursor row in the menu.
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Home(HomeInfo),
    About(Vec<PanelItem>),
    Projects(ProjectsInfo),
    Contact(ContactInfo),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeInfo {
    pub headline: String,
    pub subtitle: String,
    pub intro: String,
}

/// A collapsible About panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelItem {
    pub title: String,
    /// Shown only when expanded.
    pub body: String,
    pub expanded: bool,
    pub is_selected: bool,
}

impl PanelItem {
    /// `+` when collapsed, `−` when expanded.
    #[must_use]
    pub const fn indicator(&self) -> char {
        if self.expanded {
            '−'
        } else {
            '+'
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectsInfo {
    pub controls: ControlsInfo,
    pub list: ProjectListView,
}

/// Search box, filter selector and sort selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlsInfo {
    pub query: String,
    /// `true` while the search box has focus.
    pub searching: bool,
    pub filter_label: String,
    pub sort_label: String,
    /// Number of records in the filtered view.
    pub result_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectListView {
    Loading,
    Error(String),
    Empty(EmptyState),
    /// A window of cards around the selection.
    Cards(Vec<CardItem>),
}

/// One rendered project card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    pub title: String,
    pub category_label: String,
    pub date: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub is_selected: bool,
    /// Character ranges of the search text in `title`, exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Shown when nothing matches the current search and filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    pub fields: Vec<FieldItem>,
    pub submit: SubmitInfo,
    pub status: Option<StatusLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldItem {
    pub label: String,
    pub value: String,
    pub error: Option<String>,
    pub is_focused: bool,
    pub is_editing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitInfo {
    /// `Send Message`, or `Sending...` while a submission is pending.
    pub label: String,
    pub enabled: bool,
    pub is_focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

/// Keybinding hints for the current context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

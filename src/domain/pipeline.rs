//! Filter, sort, and render pipeline for the project list.
//!
//! The pipeline is a pure function of `(catalog, query, category filter, sort
//! key)`. It never touches application state; [`AppState`] owns the inputs
//! and stores the output.
//!
//! ```text
//! catalog ──filter──▶ matching records ──stable sort──▶ ordered view ──render──▶ ProjectList
//! ```
//!
//! [`AppState`]: crate::app::AppState

use crate::domain::project::{Category, ProjectRecord};
use std::cmp::Ordering;
use std::fmt::Write as _;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fallback date layout when a configured pattern cannot be rendered.
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Category restriction applied after the text search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Returns `true` if records of `category` pass the filter.
    #[must_use]
    pub fn admits(&self, category: &Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    /// Value shown in the filter selector.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    /// Next entry in the selector order `all → web → mobile → design → other → all`.
    #[must_use]
    pub fn next(&self) -> Self {
        self.step(1)
    }

    /// Previous entry in the selector order.
    #[must_use]
    pub fn previous(&self) -> Self {
        self.step(Category::KNOWN.len())
    }

    fn step(&self, offset: usize) -> Self {
        let slots = Category::KNOWN.len() + 1;
        let current = match self {
            Self::All => 0,
            Self::Only(category) => Category::KNOWN
                .iter()
                .position(|known| known == category)
                .map_or(0, |idx| idx + 1),
        };
        match (current + offset) % slots {
            0 => Self::All,
            idx => Self::Only(Category::KNOWN[idx - 1].clone()),
        }
    }
}

/// Ordering of the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Most recent first.
    #[default]
    Date,
    /// Title, ascending.
    Name,
}

impl SortKey {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Name => "Name",
        }
    }
}

/// The three pipeline inputs besides the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectQuery {
    /// Free-text search, matched case-insensitively.
    pub text: String,
    pub category: CategoryFilter,
    pub sort: SortKey,
}

/// Keeps the records that match the text search and the category filter,
/// preserving catalog order.
#[must_use]
pub fn filter_projects(catalog: &[ProjectRecord], text: &str, category: &CategoryFilter) -> Vec<ProjectRecord> {
    let needle = text.to_lowercase();
    catalog
        .iter()
        .filter(|record| category.admits(&record.category) && record.matches_lowercase(&needle))
        .cloned()
        .collect()
}

/// Sorts in place. Both orders are stable, so ties keep catalog order.
pub fn sort_projects(projects: &mut [ProjectRecord], sort: SortKey) {
    match sort {
        SortKey::Date => projects.sort_by(|a, b| b.date.cmp(&a.date)),
        SortKey::Name => projects.sort_by(|a, b| locale_compare(&a.title, &b.title)),
    }
}

/// Runs filter then sort.
///
/// # Example
///
/// ```rust
/// use folio::domain::catalog::sample_projects;
/// use folio::domain::pipeline::{apply, ProjectQuery};
///
/// let query = ProjectQuery { text: "react".into(), ..Default::default() };
/// let view = apply(&sample_projects(), &query);
/// assert_eq!(view.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 1]);
/// ```
#[must_use]
pub fn apply(catalog: &[ProjectRecord], query: &ProjectQuery) -> Vec<ProjectRecord> {
    let _span = tracing::debug_span!(
        "pipeline_apply",
        catalog_len = catalog.len(),
        query_len = query.text.len(),
        category = %query.category.label(),
        sort = query.sort.label()
    )
    .entered();

    let mut view = filter_projects(catalog, &query.text, &query.category);
    sort_projects(&mut view, query.sort);

    tracing::debug!(view_len = view.len(), "pipeline applied");
    view
}

/// Title ordering that approximates a locale collation.
///
/// Letters compare by base form first, ignoring accents and case, so
/// "Éclair" sorts among the E's. Ties go unaccented before accented, then
/// lowercase before uppercase.
///
/// ```rust
/// use folio::domain::pipeline::locale_compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(locale_compare("Éclair", "Zebra"), Ordering::Less);
/// assert_eq!(locale_compare("resume", "résumé"), Ordering::Less);
/// ```
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Lowercased text with diacritics stripped (NFD minus combining marks).
fn base_letters(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Display unit for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub id: u32,
    pub title: String,
    pub category_label: String,
    pub date: String,
    pub description: String,
    pub technologies: Vec<String>,
    /// Character ranges of the search text inside `title`, exclusive end.
    pub title_matches: Vec<(usize, usize)>,
}

/// Rendered project list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectList {
    /// Nothing matched; distinct from loading and error states.
    Empty,
    Cards(Vec<ProjectCard>),
}

/// Produces one card per record, or [`ProjectList::Empty`].
#[must_use]
pub fn render(projects: &[ProjectRecord], search_text: &str, date_format: &str) -> ProjectList {
    if projects.is_empty() {
        return ProjectList::Empty;
    }

    let cards = projects
        .iter()
        .map(|record| ProjectCard {
            id: record.id,
            title: record.title.clone(),
            category_label: record.category.label().to_string(),
            date: format_date(record, date_format),
            description: record.description.clone(),
            technologies: record.technologies.clone(),
            title_matches: match_ranges(&record.title, search_text),
        })
        .collect();

    ProjectList::Cards(cards)
}

fn format_date(record: &ProjectRecord, date_format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", record.date.format(date_format)).is_err() {
        out.clear();
        let _ = write!(out, "{}", record.date.format(ISO_DATE_FORMAT));
    }
    out
}

/// Finds non-overlapping case-insensitive occurrences of `needle` in
/// `haystack`, returned as character index ranges.
#[must_use]
pub fn match_ranges(haystack: &str, needle: &str) -> Vec<(usize, usize)> {
    let fold = |c: char| c.to_lowercase().next().unwrap_or(c);
    let hay: Vec<char> = haystack.chars().map(fold).collect();
    let pat: Vec<char> = needle.chars().map(fold).collect();

    if pat.is_empty() || pat.len() > hay.len() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut start = 0;
    while start + pat.len() <= hay.len() {
        if hay[start..start + pat.len()] == pat[..] {
            ranges.push((start, start + pat.len()));
            start += pat.len();
        } else {
            start += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::sample_projects;

    fn ids(view: &[ProjectRecord]) -> Vec<u32> {
        view.iter().map(|p| p.id).collect()
    }

    #[test]
    fn empty_query_and_all_keeps_catalog_order() {
        let catalog = sample_projects();
        let view = filter_projects(&catalog, "", &CategoryFilter::All);
        assert_eq!(ids(&view), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn react_matches_technologies_and_sorts_by_date() {
        let query = ProjectQuery { text: "react".into(), ..Default::default() };
        assert_eq!(ids(&apply(&sample_projects(), &query)), vec![2, 1]);
    }

    #[test]
    fn design_category_only() {
        let query = ProjectQuery {
            category: CategoryFilter::Only(Category::Design),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&sample_projects(), &query)), vec![3]);
    }

    #[test]
    fn query_and_category_combine() {
        let query = ProjectQuery {
            text: "real-time".into(),
            category: CategoryFilter::Only(Category::Web),
            sort: SortKey::Name,
        };
        assert_eq!(ids(&apply(&sample_projects(), &query)), vec![4, 5]);
    }

    #[test]
    fn no_match_renders_empty() {
        let query = ProjectQuery { text: "zzz".into(), ..Default::default() };
        let view = apply(&sample_projects(), &query);
        assert!(view.is_empty());
        assert_eq!(render(&view, "zzz", "%-m/%-d/%Y"), ProjectList::Empty);
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = sample_projects();
        let filter = CategoryFilter::Only(Category::Web);
        let once = filter_projects(&catalog, "a", &filter);
        let twice = filter_projects(&once, "a", &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn date_sort_is_descending() {
        let mut view = sample_projects();
        sort_projects(&mut view, SortKey::Date);
        assert!(view.windows(2).all(|w| w[0].date >= w[1].date));
        assert_eq!(ids(&view), vec![2, 1, 3, 4, 5, 6]);
    }

    #[test]
    fn name_sort_is_ascending() {
        let mut view = sample_projects();
        sort_projects(&mut view, SortKey::Name);
        assert!(view
            .windows(2)
            .all(|w| locale_compare(&w[0].title, &w[1].title) != Ordering::Greater));
        assert_eq!(ids(&view), vec![1, 2, 3, 6, 4, 5]);
    }

    #[test]
    fn sort_is_stable_for_equal_dates() {
        let mut catalog = sample_projects();
        catalog[3].date = catalog[0].date;
        sort_projects(&mut catalog, SortKey::Date);
        let pos = |id| catalog.iter().position(|p| p.id == id).unwrap();
        assert!(pos(1) < pos(4));
    }

    #[test]
    fn locale_compare_ignores_case_first() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("Same", "Same"), Ordering::Equal);
    }

    #[test]
    fn accented_titles_sort_by_base_letter() {
        assert_eq!(locale_compare("Éclair Bakery", "Zebra Tracker"), Ordering::Less);
        assert_eq!(locale_compare("Éclair", "eclair"), Ordering::Greater);
        assert_eq!(locale_compare("Ångström", "Apple"), Ordering::Less);

        let mut view = sample_projects();
        view[0].title = "Zebra Tracker".to_string();
        view[1].title = "Éclair Bakery".to_string();
        sort_projects(&mut view, SortKey::Name);
        let pos = |id| view.iter().position(|p| p.id == id).unwrap();
        assert!(pos(2) < pos(1));
        assert_eq!(view.last().map(|p| p.id), Some(1));
    }

    #[test]
    fn render_maps_labels_dates_and_matches() {
        let mut catalog = sample_projects();
        catalog[5].category = Category::from("games".to_string());
        let ProjectList::Cards(cards) = render(&catalog, "web", "%-m/%-d/%Y") else {
            panic!("expected cards");
        };
        assert_eq!(cards[0].category_label, "Web Development");
        assert_eq!(cards[0].date, "1/15/2024");
        assert_eq!(cards[0].technologies, vec!["React", "Node.js", "MongoDB", "Stripe"]);
        assert_eq!(cards[2].title_matches, vec![(10, 13)]);
        assert_eq!(cards[5].category_label, "games");
    }

    #[test]
    fn filter_cycles_through_every_category() {
        let mut filter = CategoryFilter::All;
        let mut seen = vec![];
        for _ in 0..5 {
            filter = filter.next();
            seen.push(filter.label().to_string());
        }
        assert_eq!(seen, vec!["Web Development", "Mobile App", "UI/UX Design", "Other", "All"]);
        assert_eq!(CategoryFilter::All.previous(), CategoryFilter::Only(Category::Other));
    }

    #[test]
    fn match_ranges_finds_every_occurrence() {
        assert_eq!(match_ranges("Banana", "an"), vec![(1, 3), (3, 5)]);
        assert!(match_ranges("Banana", "").is_empty());
    }
}

//! Filter, sort and render behavior over the sample catalog.

use folio::domain::catalog::sample_projects;
use folio::domain::pipeline::{
    apply, filter_projects, locale_compare, render, sort_projects, CategoryFilter, ProjectList, ProjectQuery,
    SortKey,
};
use folio::domain::project::Category;
use std::cmp::Ordering;

fn ids(projects: &[folio::ProjectRecord]) -> Vec<u32> {
    projects.iter().map(|p| p.id).collect()
}

fn query(text: &str, category: CategoryFilter, sort: SortKey) -> ProjectQuery {
    ProjectQuery {
        text: text.to_string(),
        category,
        sort,
    }
}

#[test]
fn react_search_is_newest_first() {
    let view = apply(&sample_projects(), &query("react", CategoryFilter::All, SortKey::Date));
    assert_eq!(ids(&view), [2, 1]);
}

#[test]
fn search_ignores_case() {
    let catalog = sample_projects();
    let lower = apply(&catalog, &query("react", CategoryFilter::All, SortKey::Date));
    let upper = apply(&catalog, &query("REACT", CategoryFilter::All, SortKey::Date));
    assert_eq!(lower, upper);
}

#[test]
fn design_filter_keeps_only_design() {
    let view = apply(
        &sample_projects(),
        &query("", CategoryFilter::Only(Category::Design), SortKey::Date),
    );
    assert_eq!(ids(&view), [3]);
}

#[test]
fn search_and_category_combine() {
    let view = apply(
        &sample_projects(),
        &query("react", CategoryFilter::Only(Category::Mobile), SortKey::Date),
    );
    assert_eq!(ids(&view), [2]);
}

#[test]
fn unmatched_search_renders_the_empty_state() {
    let view = apply(&sample_projects(), &query("zzz", CategoryFilter::All, SortKey::Date));
    assert!(view.is_empty());
    assert_eq!(render(&view, "zzz", "%-m/%-d/%Y"), ProjectList::Empty);
}

#[test]
fn empty_query_keeps_catalog_order_before_sorting() {
    let catalog = sample_projects();
    let filtered = filter_projects(&catalog, "", &CategoryFilter::All);
    assert_eq!(filtered, catalog);
}

#[test]
fn filtering_is_idempotent() {
    let catalog = sample_projects();
    for text in ["", "react", "data", "zzz"] {
        let once = filter_projects(&catalog, text, &CategoryFilter::All);
        let twice = filter_projects(&once, text, &CategoryFilter::All);
        assert_eq!(once, twice, "{text}");
    }
}

#[test]
fn date_sort_is_non_increasing() {
    let mut projects = sample_projects();
    sort_projects(&mut projects, SortKey::Date);
    assert!(projects.windows(2).all(|w| w[0].date >= w[1].date));
}

#[test]
fn name_sort_is_non_decreasing() {
    let mut projects = sample_projects();
    sort_projects(&mut projects, SortKey::Name);
    assert!(projects
        .windows(2)
        .all(|w| locale_compare(&w[0].title, &w[1].title) != Ordering::Greater));
}

#[test]
fn default_query_shows_everything_by_date() {
    let catalog = sample_projects();
    let view = apply(&catalog, &ProjectQuery::default());
    assert_eq!(view.len(), catalog.len());
    assert!(view.windows(2).all(|w| w[0].date >= w[1].date));
}

#[test]
fn cards_format_dates_and_keep_tag_order() {
    let view = apply(&sample_projects(), &query("fitness", CategoryFilter::All, SortKey::Date));
    let ProjectList::Cards(cards) = render(&view, "fitness", "%-m/%-d/%Y") else {
        panic!("expected cards");
    };
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].date, "2/20/2024");
    assert_eq!(cards[0].technologies, ["React Native", "Firebase", "Redux"]);
    assert_eq!(cards[0].title_matches, [(7, 14)]);
}

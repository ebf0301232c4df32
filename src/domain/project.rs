//! Project domain model.
//!
//! A [`ProjectRecord`] is one portfolio item. Records arrive from a
//! [`CatalogSource`](crate::domain::catalog::CatalogSource) and are never
//! mutated afterwards; the pipeline only reorders and filters references to
//! them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Portfolio project category.
///
/// The four known tags get human-readable labels. Any other tag is kept
/// verbatim in [`Category::Unknown`] so that a catalog written against a newer
/// taxonomy still renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Web,
    Mobile,
    Design,
    Other,
    /// Unrecognized tag, rendered with its raw value as label.
    Unknown(String),
}

impl Category {
    /// Tags the category filter can cycle through, in display order.
    pub const KNOWN: [Self; 4] = [Self::Web, Self::Mobile, Self::Design, Self::Other];

    /// Returns the wire tag (`"web"`, `"mobile"`, ...).
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::Design => "design",
            Self::Other => "other",
            Self::Unknown(raw) => raw,
        }
    }

    /// Returns the human-readable label shown on project cards.
    ///
    /// ```rust
    /// use folio::domain::Category;
    ///
    /// assert_eq!(Category::Web.label(), "Web Development");
    /// assert_eq!(Category::from("games".to_string()).label(), "games");
    /// ```
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Web => "Web Development",
            Self::Mobile => "Mobile App",
            Self::Design => "UI/UX Design",
            Self::Other => "Other",
            Self::Unknown(raw) => raw,
        }
    }
}

impl From<String> for Category {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "web" => Self::Web,
            "mobile" => Self::Mobile,
            "design" => Self::Design,
            "other" => Self::Other,
            _ => Self::Unknown(tag),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Unknown(raw) => raw,
            known => known.tag().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One portfolio item.
///
/// # Fields
///
/// - `id`: unique across the catalog
/// - `title`: display name, also the `name` sort key
/// - `category`: filter tag
/// - `description`: free text, searchable
/// - `technologies`: ordered tags, searchable, may be empty
/// - `date`: calendar date, the `date` sort key (serialized as `YYYY-MM-DD`)
/// - `image`: opaque asset reference, carried but never interpreted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: String,
    pub category: Category,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub image: String,
}

impl ProjectRecord {
    /// Returns `true` if `needle` occurs in the title, description, or any
    /// technology tag. `needle` must already be lowercased.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .technologies
                .iter()
                .any(|tech| tech.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_keeps_raw_tag_and_label() {
        let category = Category::from("games".to_string());
        assert_eq!(category, Category::Unknown("games".to_string()));
        assert_eq!(category.label(), "games");
        assert_eq!(String::from(category), "games");
    }

    #[test]
    fn record_deserializes_from_catalog_json() {
        let json = r#"{
            "id": 7,
            "title": "CLI Tool",
            "category": "tooling",
            "description": "Terminal helper",
            "date": "2022-05-01"
        }"#;
        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.category.label(), "tooling");
        assert!(record.technologies.is_empty());
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2022, 5, 1).unwrap());
    }

    #[test]
    fn invalid_date_is_rejected() {
        let json = r#"{"id":1,"title":"x","category":"web","description":"","date":"15/01/2024"}"#;
        assert!(serde_json::from_str::<ProjectRecord>(json).is_err());
    }

    #[test]
    fn search_covers_technologies_case_insensitively() {
        let record = ProjectRecord {
            id: 1,
            title: "Weather Dashboard".to_string(),
            category: Category::Web,
            description: "Charts".to_string(),
            technologies: vec!["Chart.js".to_string()],
            date: NaiveDate::from_ymd_opt(2023, 11, 25).unwrap(),
            image: String::new(),
        };
        assert!(record.matches_lowercase("chart.js"));
        assert!(record.matches_lowercase("weather"));
        assert!(!record.matches_lowercase("react"));
    }
}

//! Project catalog sources.
//!
//! The catalog is the authoritative, ordered list of [`ProjectRecord`]s for a
//! session. It is produced once by a [`CatalogSource`] on the worker thread
//! and handed to the plugin in a single response.

use crate::domain::error::{FolioError, Result};
use crate::domain::project::{Category, ProjectRecord};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::path::PathBuf;

/// Supplies the full catalog.
///
/// Implementations may block (the worker thread absorbs the latency) and
/// either return every record in catalog order or fail with
/// [`FolioError::Load`].
pub trait CatalogSource: Send {
    /// Loads the complete catalog.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Load`] if the source is unavailable or its
    /// contents violate the catalog invariants.
    fn load(&self) -> Result<Vec<ProjectRecord>>;
}

/// The built-in sample catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleCatalog;

impl CatalogSource for SampleCatalog {
    fn load(&self) -> Result<Vec<ProjectRecord>> {
        Ok(sample_projects())
    }
}

/// Catalog read from a JSON array on disk.
///
/// ```json
/// [
///   { "id": 1, "title": "E-commerce Website", "category": "web",
///     "description": "...", "technologies": ["React"], "date": "2024-01-15",
///     "image": "project1.jpg" }
/// ]
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CatalogSource for JsonFileCatalog {
    fn load(&self) -> Result<Vec<ProjectRecord>> {
        let _span = tracing::debug_span!("json_catalog_load", path = ?self.path).entered();

        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            FolioError::Load(format!("failed to read {}: {e}", self.path.display()))
        })?;
        let records: Vec<ProjectRecord> = serde_json::from_str(&contents)
            .map_err(|e| FolioError::Load(format!("failed to parse catalog JSON: {e}")))?;

        ensure_unique_ids(&records)?;

        tracing::debug!(count = records.len(), "catalog loaded from file");
        Ok(records)
    }
}

/// Rejects catalogs in which two records share an id.
///
/// # Errors
///
/// Returns [`FolioError::Load`] naming the first duplicated id.
pub fn ensure_unique_ids(records: &[ProjectRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id) {
            return Err(FolioError::Load(format!("duplicate project id {}", record.id)));
        }
    }
    Ok(())
}

fn record(
    id: u32,
    title: &str,
    category: Category,
    description: &str,
    technologies: &[&str],
    (year, month, day): (i32, u32, u32),
    image: &str,
) -> ProjectRecord {
    ProjectRecord {
        id,
        title: title.to_string(),
        category,
        description: description.to_string(),
        technologies: technologies.iter().map(ToString::to_string).collect(),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        image: image.to_string(),
    }
}

/// Returns the six built-in sample projects in catalog order.
#[must_use]
pub fn sample_projects() -> Vec<ProjectRecord> {
    vec![
        record(
            1,
            "E-commerce Website",
            Category::Web,
            "A fully responsive e-commerce platform with shopping cart and payment integration.",
            &["React", "Node.js", "MongoDB", "Stripe"],
            (2024, 1, 15),
            "project1.jpg",
        ),
        record(
            2,
            "Mobile Fitness App",
            Category::Mobile,
            "Cross-platform mobile application for tracking workouts and nutrition.",
            &["React Native", "Firebase", "Redux"],
            (2024, 2, 20),
            "project2.jpg",
        ),
        record(
            3,
            "Portfolio Website Design",
            Category::Design,
            "Modern UI/UX design for a personal portfolio website.",
            &["Figma", "Adobe XD", "Illustrator"],
            (2024, 1, 5),
            "project3.jpg",
        ),
        record(
            4,
            "Task Management System",
            Category::Web,
            "Web-based task management system with real-time updates.",
            &["Vue.js", "Express", "Socket.io", "PostgreSQL"],
            (2023, 12, 10),
            "project4.jpg",
        ),
        record(
            5,
            "Weather Dashboard",
            Category::Web,
            "Real-time weather dashboard with data visualization.",
            &["JavaScript", "Chart.js", "Weather API"],
            (2023, 11, 25),
            "project5.jpg",
        ),
        record(
            6,
            "Social Media Analytics",
            Category::Other,
            "Analytics platform for social media performance tracking.",
            &["Python", "Django", "D3.js", "Redis"],
            (2023, 10, 15),
            "project6.jpg",
        ),
    ]
}

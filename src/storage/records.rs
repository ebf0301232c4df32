//! Typed access to the two persisted entries.
//!
//! | key                  | value                                      |
//! |----------------------|--------------------------------------------|
//! | `theme`              | `"light"` or `"dark"`                      |
//! | `contactSubmissions` | JSON array of submissions, append-only     |

use crate::domain::contact::ContactSubmission;
use crate::domain::error::{FolioError, Result};
use crate::domain::page::ThemeMode;
use crate::storage::backend::KeyValueStore;

pub const THEME_KEY: &str = "theme";
pub const SUBMISSIONS_KEY: &str = "contactSubmissions";

/// Reads the stored theme preference. Absent or unrecognised values yield
/// `None` so the caller falls back to its default.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn load_theme(store: &dyn KeyValueStore) -> Result<Option<ThemeMode>> {
    let Some(raw) = store.get_item(THEME_KEY)? else {
        return Ok(None);
    };

    match raw.parse::<ThemeMode>() {
        Ok(mode) => Ok(Some(mode)),
        Err(e) => {
            tracing::warn!(value = %raw, error = %e, "ignoring stored theme");
            Ok(None)
        }
    }
}

/// Persists the theme preference.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn save_theme(store: &mut dyn KeyValueStore, mode: ThemeMode) -> Result<()> {
    store.set_item(THEME_KEY, mode.as_str().to_string())
}

/// Reads every stored submission in insertion order.
///
/// # Errors
///
/// Returns [`FolioError::Storage`] if the stored value is not a JSON array of
/// submissions.
pub fn load_submissions(store: &dyn KeyValueStore) -> Result<Vec<ContactSubmission>> {
    let Some(raw) = store.get_item(SUBMISSIONS_KEY)? else {
        return Ok(Vec::new());
    };

    serde_json::from_str(&raw)
        .map_err(|e| FolioError::Storage(format!("stored submissions are malformed: {e}")))
}

/// Appends `submission` to the stored list and returns the new length.
///
/// Existing entries are never rewritten or reordered.
///
/// # Errors
///
/// Returns [`FolioError::Storage`] if the stored list is unreadable and
/// [`FolioError::Submission`] if the new list cannot be written.
pub fn append_submission(store: &mut dyn KeyValueStore, submission: ContactSubmission) -> Result<usize> {
    let mut submissions = load_submissions(store)?;
    submissions.push(submission);

    let json = serde_json::to_string(&submissions)
        .map_err(|e| FolioError::Storage(format!("failed to serialize submissions: {e}")))?;
    store
        .set_item(SUBMISSIONS_KEY, json)
        .map_err(|e| FolioError::Submission(format!("could not record submission: {e}")))?;

    Ok(submissions.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::ContactFields;
    use crate::storage::MemoryStore;

    fn submission(name: &str) -> ContactSubmission {
        ContactSubmission {
            fields: ContactFields {
                name: name.to_string(),
                email: "jo@example.com".to_string(),
                message: "Hello, nice portfolio!".to_string(),
            },
            timestamp: "2024-03-01T10:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn theme_defaults_to_none_and_ignores_garbage() {
        let mut store = MemoryStore::new();
        assert_eq!(load_theme(&store).unwrap(), None);

        store.set_item(THEME_KEY, "sepia".to_string()).unwrap();
        assert_eq!(load_theme(&store).unwrap(), None);

        save_theme(&mut store, ThemeMode::Dark).unwrap();
        assert_eq!(load_theme(&store).unwrap(), Some(ThemeMode::Dark));
        assert_eq!(store.get_item(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn submissions_append_in_order() {
        let mut store = MemoryStore::new();
        assert_eq!(append_submission(&mut store, submission("Jo")).unwrap(), 1);
        assert_eq!(append_submission(&mut store, submission("Sam")).unwrap(), 2);

        let stored = load_submissions(&store).unwrap();
        let names: Vec<_> = stored.iter().map(|s| s.fields.name.as_str()).collect();
        assert_eq!(names, ["Jo", "Sam"]);
    }

    #[test]
    fn stored_entries_use_flat_field_names() {
        let mut store = MemoryStore::new();
        append_submission(&mut store, submission("Jo")).unwrap();

        let raw = store.get_item(SUBMISSIONS_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let entry = &value[0];
        assert_eq!(entry["name"], "Jo");
        assert_eq!(entry["email"], "jo@example.com");
        assert_eq!(entry["timestamp"], "2024-03-01T10:00:00.000Z");
    }

    #[test]
    fn malformed_list_fails_the_append() {
        let mut store = MemoryStore::new();
        store.set_item(SUBMISSIONS_KEY, "{}".to_string()).unwrap();

        assert!(matches!(
            append_submission(&mut store, submission("Jo")),
            Err(FolioError::Storage(_))
        ));
        assert_eq!(store.get_item(SUBMISSIONS_KEY).unwrap().as_deref(), Some("{}"));
    }
}

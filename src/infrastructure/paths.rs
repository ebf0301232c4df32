//! Sandbox path helpers.
//!
//! Inside a Zellij plugin the host filesystem is visible under `/host`, which
//! points at the cwd of the last focused terminal (usually `$HOME`).

use std::path::PathBuf;

/// Plugin data directory, `/host/.local/share/zellij/folio`.
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("folio")
}

/// The key-value store file inside [`data_dir`].
#[must_use]
pub fn store_file() -> PathBuf {
    data_dir().join("store.json")
}

/// Rewrites a leading `~` to the sandbox's `/host` mount.
///
/// ```
/// use folio::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/catalog.json"), "/host/catalog.json");
/// assert_eq!(expand_tilde("/abs/catalog.json"), "/abs/catalog.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_lives_in_the_data_dir() {
        assert_eq!(store_file(), PathBuf::from("/host/.local/share/zellij/folio/store.json"));
    }

    #[test]
    fn tilde_expansion() {
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
        assert_eq!(expand_tilde("relative/~/x"), "relative/~/x");
    }
}

// Despacho - platform/config.rs
//
// Session-storage path resolution.
//
// The alert history is session-scoped: it survives an app restart within
// the same OS session but not a reboot. A file under the OS temp
// directory has exactly that lifetime on the supported platforms. A CLI
// override exists mainly so tests and demos can point the store at a
// throwaway directory.

use crate::util::constants::{APP_ID, HISTORY_FILE_NAME};
use std::path::{Path, PathBuf};

/// Resolved session-storage locations.
#[derive(Debug, Clone)]
pub struct SessionPaths {
    /// Directory holding the session store (created lazily on first save).
    pub store_dir: PathBuf,
}

impl SessionPaths {
    /// Resolve the default session store under the OS temp directory.
    pub fn resolve() -> Self {
        Self {
            store_dir: std::env::temp_dir().join(APP_ID),
        }
    }

    /// Resolve with an optional CLI override taking precedence.
    pub fn resolve_with_override(store_dir: Option<&Path>) -> Self {
        match store_dir {
            Some(dir) => Self {
                store_dir: dir.to_path_buf(),
            },
            None => Self::resolve(),
        }
    }

    /// Full path of the persisted history file.
    pub fn history_path(&self) -> PathBuf {
        self.store_dir.join(HISTORY_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_store_is_under_temp_dir() {
        let paths = SessionPaths::resolve();
        assert!(paths.store_dir.starts_with(std::env::temp_dir()));
        assert!(paths.history_path().ends_with(HISTORY_FILE_NAME));
    }

    #[test]
    fn test_override_takes_precedence() {
        let custom = PathBuf::from("/custom/store");
        let paths = SessionPaths::resolve_with_override(Some(&custom));
        assert_eq!(paths.store_dir, custom);
        assert_eq!(paths.history_path(), custom.join(HISTORY_FILE_NAME));
    }
}

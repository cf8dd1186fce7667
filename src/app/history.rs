// Despacho - app/history.rs
//
// Session-scoped history persistence: save after every append, reload at
// startup, remove on clear.
//
// Design principles:
// - Saves are atomic (write→temp, rename→final) so a crash during save
//   never corrupts the previous good file.
// - Loads are fail-safe: a missing, unreadable, or malformed file yields
//   an empty history, never an error. Initialization must not abort on
//   bad stored data.
// - The store directory is created on first save; no user action required.

use crate::core::model::HistoryEntry;
use crate::util::error::HistoryError;
use std::path::Path;

/// Load the persisted history from `path`.
///
/// Any failure (file not found, I/O error, malformed JSON) yields an empty
/// history. "Not found" is the normal first-run case and is not logged.
pub fn load(path: &Path) -> Vec<HistoryEntry> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %e, "Cannot read history file");
            }
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<HistoryEntry>>(&content) {
        Ok(history) => {
            tracing::info!(path = %path.display(), entries = history.len(), "History loaded");
            history
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "History file is malformed — starting with an empty history"
            );
            Vec::new()
        }
    }
}

/// Save the full history to `path` atomically (write temp → rename).
///
/// Creates the parent directory as needed. Callers log and ignore the
/// error; a failed save degrades persistence only, never interactivity.
pub fn save(history: &[HistoryEntry], path: &Path) -> Result<(), HistoryError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| HistoryError::CreateDir {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let json =
        serde_json::to_string_pretty(history).map_err(|e| HistoryError::Serialize { source: e })?;

    // Atomic write: a crash between write and rename loses the new history
    // but never corrupts the previous one.
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json.as_bytes()).map_err(|e| HistoryError::Write {
        path: tmp.clone(),
        operation: "write temp for",
        source: e,
    })?;

    std::fs::rename(&tmp, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        HistoryError::Write {
            path: path.to_path_buf(),
            operation: "finalise",
            source: e,
        }
    })?;

    tracing::debug!(path = %path.display(), entries = history.len(), "History saved");
    Ok(())
}

/// Remove the stored history file (the clear action).
///
/// A file that is already absent counts as success.
pub fn clear(path: &Path) -> Result<(), HistoryError> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "History store removed");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(HistoryError::Remove {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_history() -> Vec<HistoryEntry> {
        vec![
            HistoryEntry {
                incident_type: "Incendio forestal".to_string(),
                location: "Parque Norte".to_string(),
                timestamp_millis: 1_700_000_000_000,
            },
            HistoryEntry {
                incident_type: "Rescate".to_string(),
                location: "Río Sur".to_string(),
                timestamp_millis: 1_700_000_060_000,
            },
        ]
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("historial.json");
        let original = sample_history();

        save(&original, &path).expect("save should succeed");
        let loaded = load(&path);
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(load(&dir.path().join("nonexistent.json")).is_empty());
    }

    #[test]
    fn test_load_malformed_json_is_empty_not_panic() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("historial.json");
        std::fs::write(&path, b"not valid json {{{{").unwrap();
        assert!(load(&path).is_empty());
    }

    #[test]
    fn test_load_wrong_shape_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("historial.json");
        // Valid JSON, wrong shape (object instead of array).
        std::fs::write(&path, br#"{"tipo": "x"}"#).unwrap();
        assert!(load(&path).is_empty());
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("historial.json");
        save(&sample_history(), &path).expect("save should create parents");
        assert!(path.exists());
    }

    #[test]
    fn test_save_atomic_leftover_temp_does_not_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("historial.json");
        save(&sample_history(), &path).unwrap();

        // Simulate a leftover temp file from a previous crash.
        std::fs::write(path.with_extension("json.tmp"), b"garbage").unwrap();

        let mut updated = sample_history();
        updated.pop();
        save(&updated, &path).unwrap();
        assert_eq!(load(&path), updated);
    }

    #[test]
    fn test_clear_removes_store_and_tolerates_absence() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("historial.json");
        save(&sample_history(), &path).unwrap();

        clear(&path).expect("clear should succeed");
        assert!(!path.exists());
        assert!(load(&path).is_empty());

        // Clearing again is not an error.
        clear(&path).expect("clearing an absent store is fine");
    }
}

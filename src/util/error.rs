// Despacho - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; all errors preserve the causal
// chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all Despacho operations.
#[derive(Debug)]
pub enum DespachoError {
    /// History persistence failed.
    History(HistoryError),

    /// Export operation failed.
    Export(ExportError),
}

impl fmt::Display for DespachoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::History(e) => write!(f, "History error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
        }
    }
}

impl std::error::Error for DespachoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::History(e) => Some(e),
            Self::Export(e) => Some(e),
        }
    }
}

impl From<HistoryError> for DespachoError {
    fn from(e: HistoryError) -> Self {
        Self::History(e)
    }
}

impl From<ExportError> for DespachoError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// History persistence errors
// ---------------------------------------------------------------------------

/// Errors raised while saving or clearing the persisted history.
///
/// Load failures deliberately have no variant here: a history that cannot
/// be read is treated as empty, never as an error.
#[derive(Debug)]
pub enum HistoryError {
    /// The session-store directory could not be created.
    CreateDir { path: PathBuf, source: io::Error },

    /// The history could not be serialised to JSON.
    Serialize { source: serde_json::Error },

    /// Writing the temp file or renaming it into place failed.
    Write {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },

    /// Removing the stored file (on clear) failed.
    Remove { path: PathBuf, source: io::Error },
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateDir { path, source } => {
                write!(
                    f,
                    "cannot create session store directory '{}': {source}",
                    path.display()
                )
            }
            Self::Serialize { source } => {
                write!(f, "failed to serialise history: {source}")
            }
            Self::Write {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "failed to {operation} history file '{}': {source}",
                    path.display()
                )
            }
            Self::Remove { path, source } => {
                write!(
                    f,
                    "failed to remove history file '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for HistoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CreateDir { source, .. }
            | Self::Write { source, .. }
            | Self::Remove { source, .. } => Some(source),
            Self::Serialize { source } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors raised while exporting the history to a user-chosen file.
#[derive(Debug)]
pub enum ExportError {
    /// JSON serialisation to the destination writer failed.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The destination file could not be created.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { path, source } => {
                write!(f, "JSON export to '{}' failed: {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "cannot write export file '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_path() {
        let err = HistoryError::Write {
            path: PathBuf::from("/tmp/despacho/historial.json"),
            operation: "finalise",
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("historial.json"));
        assert!(msg.contains("finalise"));
    }

    #[test]
    fn test_error_chain_is_preserved() {
        use std::error::Error;
        let err: DespachoError = HistoryError::Serialize {
            source: serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        }
        .into();
        assert!(err.source().is_some());
        assert!(err.source().unwrap().source().is_some());
    }
}

// Despacho - core/export.rs
//
// JSON export of the alert history.
// Core layer: writes to any Write trait object.

use crate::core::model::HistoryEntry;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Export the full history to pretty-printed JSON (array of objects).
///
/// Returns the number of entries written. The output uses the same wire
/// field names as the session store (`tipo` / `ubicacion` / `timestamp`).
pub fn export_json<W: Write>(
    history: &[HistoryEntry],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, history).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(history.len())
}

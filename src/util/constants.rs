// Despacho - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Despacho";

/// Application identifier used for the session-storage directory.
pub const APP_ID: &str = "despacho";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Session storage
// =============================================================================

/// File name of the persisted alert history inside the session store.
pub const HISTORY_FILE_NAME: &str = "historial.json";

/// Default file name offered by the export save dialog.
pub const EXPORT_FILE_NAME: &str = "historial_alertas.json";

// =============================================================================
// Transient alerts
// =============================================================================

/// Default auto-hide timeout for a transient alert.
pub const TOAST_DEFAULT_TIMEOUT_MS: u64 = 6_000;

/// Shorter timeout used for the "no units available" warning.
pub const TOAST_WARNING_TIMEOUT_MS: u64 = 4_000;

// =============================================================================
// Form placeholders
// =============================================================================

/// Substituted for a blank incident-type field.
pub const PLACEHOLDER_INCIDENT_TYPE: &str = "No especificado";

/// Substituted for a blank location field.
pub const PLACEHOLDER_LOCATION: &str = "No especificada";

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG nor --debug is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

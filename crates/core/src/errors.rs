use thiserror::Error;

/// Unified error type for the entire eth-dashboard-core library.
/// Every public function returns `Result<T, CoreError>`.
///
/// Nothing here is fatal: a failed mutation leaves the dashboard state
/// exactly as it was before the call.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Interaction input ───────────────────────────────────────────
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),

    #[error("Emergency-fund ratio is undefined for a zero threshold")]
    DivisionByZero,

    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    #[error("Tab not available in this dashboard: {0}")]
    TabUnavailable(String),

    #[error("Unknown forecast interval: {0}")]
    UnknownInterval(String),

    // ── Configuration ───────────────────────────────────────────────
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Snapshot boundary ───────────────────────────────────────────
    #[error("Unsupported snapshot version: {0}")]
    UnsupportedVersion(u16),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Series sources ──────────────────────────────────────────────
    #[error("Data source error ({source_name}): {message}")]
    DataSource {
        source_name: String,
        message: String,
    },

    #[error("No series source registered")]
    NoDataSource,
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

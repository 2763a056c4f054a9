use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::state::InteractionState;

/// Tag identifying a dashboard state snapshot.
pub const MAGIC: &str = "ETHD";

/// Current snapshot format version.
pub const CURRENT_VERSION: u16 = 1;

/// Versioned wrapper around a serialized `InteractionState`.
///
/// Layout (JSON):
/// ```text
/// { "magic": "ETHD", "version": 1, "state": { ... } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotEnvelope {
    pub magic: String,
    pub version: u16,
    pub state: InteractionState,
}

/// Wrap a state in the current envelope and serialize it.
pub fn write_snapshot(state: &InteractionState) -> Result<String, CoreError> {
    let envelope = SnapshotEnvelope {
        magic: MAGIC.to_string(),
        version: CURRENT_VERSION,
        state: state.clone(),
    };
    serde_json::to_string_pretty(&envelope)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize snapshot: {e}")))
}

/// Parse and check an envelope. Does not validate the state itself.
pub fn read_snapshot(json: &str) -> Result<SnapshotEnvelope, CoreError> {
    let envelope: SnapshotEnvelope = serde_json::from_str(json)
        .map_err(|e| CoreError::Deserialization(format!("Failed to parse snapshot: {e}")))?;

    if envelope.magic != MAGIC {
        return Err(CoreError::Deserialization(format!(
            "Invalid snapshot tag '{}'",
            envelope.magic
        )));
    }
    if envelope.version == 0 || envelope.version > CURRENT_VERSION {
        return Err(CoreError::UnsupportedVersion(envelope.version));
    }

    Ok(envelope)
}

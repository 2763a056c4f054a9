use crate::errors::CoreError;
use crate::models::settings::DashboardConfig;
use crate::models::state::InteractionState;

use super::format;

/// Serialization boundary for interaction state.
///
/// Turns state into text and back; where the text is kept is up to the
/// caller. Nothing is written by the library itself.
pub struct SnapshotManager;

impl SnapshotManager {
    /// InteractionState → versioned JSON envelope.
    pub fn save_to_string(state: &InteractionState) -> Result<String, CoreError> {
        format::write_snapshot(state)
    }

    /// Versioned JSON envelope → InteractionState, checked against `config`.
    ///
    /// Rejects snapshots whose threshold breaks the state invariant or whose
    /// active tab is not offered by this dashboard.
    pub fn load_from_str(json: &str, config: &DashboardConfig) -> Result<InteractionState, CoreError> {
        let envelope = format::read_snapshot(json)?;
        let state = envelope.state;

        if !state.threshold.is_finite() || state.threshold < 0.0 {
            return Err(CoreError::InvalidThreshold(format!(
                "snapshot threshold must be a finite number >= 0, got {}",
                state.threshold
            )));
        }
        if !config.tabs.is_empty() && !config.has_tab(state.active_tab) {
            return Err(CoreError::TabUnavailable(state.active_tab.to_string()));
        }

        Ok(state)
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::state::{ForecastInterval, Tab};

/// A discrete input to the dashboard: either a user action or a clock tick.
///
/// Events are applied one at a time, in arrival order, by
/// `Dashboard::apply`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DashboardEvent {
    SelectTab(Tab),
    /// Raw text from the threshold field
    SetThreshold(String),
    SetForecastInterval(ForecastInterval),
    ToggleChecklistItem(String),
    RequestForecastUpdate,
    /// Advance the displayed clock to this instant
    Tick(DateTime<Utc>),
}

impl DashboardEvent {
    pub fn is_tick(&self) -> bool {
        matches!(self, DashboardEvent::Tick(_))
    }
}

impl std::fmt::Display for DashboardEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardEvent::SelectTab(tab) => write!(f, "SelectTab({tab})"),
            DashboardEvent::SetThreshold(text) => write!(f, "SetThreshold({text})"),
            DashboardEvent::SetForecastInterval(i) => write!(f, "SetForecastInterval({i})"),
            DashboardEvent::ToggleChecklistItem(id) => write!(f, "ToggleChecklistItem({id})"),
            DashboardEvent::RequestForecastUpdate => write!(f, "RequestForecastUpdate"),
            DashboardEvent::Tick(at) => write!(f, "Tick({at})"),
        }
    }
}

/// What `Dashboard::apply` did with an event.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    /// State changed (or the event was a no-op by nature)
    Applied,
    /// Checklist toggle result: `true` when the item is now checked
    Toggled(bool),
    /// The event was rejected; state is unchanged
    Rejected(String),
}

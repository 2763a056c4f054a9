use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::errors::CoreError;

/// Navigation tabs of the full dashboard, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Price, gas, sector and predicted-vs-actual charts
    Forecasting,
    /// One card per holding
    Holdings,
    /// Learning-plan checklist
    Learning,
    Monitoring,
    Decisions,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Forecasting,
        Tab::Holdings,
        Tab::Learning,
        Tab::Monitoring,
        Tab::Decisions,
    ];

    /// Stable identifier (e.g. "forecasting").
    pub fn id(&self) -> &'static str {
        match self {
            Tab::Forecasting => "forecasting",
            Tab::Holdings => "holdings",
            Tab::Learning => "learning",
            Tab::Monitoring => "monitoring",
            Tab::Decisions => "decisions",
        }
    }

    /// Button caption.
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Forecasting => "AI Forecasting",
            Tab::Holdings => "Holdings",
            Tab::Learning => "Learning Plan",
            Tab::Monitoring => "Monitoring",
            Tab::Decisions => "Decision Framework",
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tab {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Tab::ALL
            .into_iter()
            .find(|tab| tab.id() == needle)
            .ok_or_else(|| CoreError::UnknownTab(s.to_string()))
    }
}

/// Nominal horizon of the "latest forecast" figure. Purely a label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForecastInterval {
    #[default]
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "6h")]
    SixHours,
    #[serde(rename = "1d")]
    OneDay,
}

impl ForecastInterval {
    pub const ALL: [ForecastInterval; 3] = [
        ForecastInterval::OneHour,
        ForecastInterval::SixHours,
        ForecastInterval::OneDay,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ForecastInterval::OneHour => "1h",
            ForecastInterval::SixHours => "6h",
            ForecastInterval::OneDay => "1d",
        }
    }

    /// Option caption, e.g. "6 Hours".
    pub fn title(&self) -> &'static str {
        match self {
            ForecastInterval::OneHour => "1 Hour",
            ForecastInterval::SixHours => "6 Hours",
            ForecastInterval::OneDay => "1 Day",
        }
    }
}

impl std::fmt::Display for ForecastInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ForecastInterval {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        ForecastInterval::ALL
            .into_iter()
            .find(|interval| interval.id() == needle)
            .ok_or_else(|| CoreError::UnknownInterval(s.to_string()))
    }
}

/// Everything the user can change while the dashboard is mounted.
///
/// Invariant: `threshold` is finite and ≥ 0. All mutation goes through
/// `Dashboard`, which enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionState {
    pub active_tab: Tab,

    /// Emergency-fund threshold in USD
    pub threshold: f64,

    pub forecast_interval: ForecastInterval,

    /// Ids of ticked checklist items, kept sorted for stable output
    pub checked_items: BTreeSet<String>,

    /// Timestamp shown as "Last updated at"
    pub current_time: DateTime<Utc>,

    /// Number of clock ticks applied since mount
    #[serde(default)]
    pub ticks: u64,

    /// Number of forecast update requests since mount
    #[serde(default)]
    pub forecast_requests: u64,
}

impl InteractionState {
    pub fn new(
        active_tab: Tab,
        threshold: f64,
        forecast_interval: ForecastInterval,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            active_tab,
            threshold,
            forecast_interval,
            checked_items: BTreeSet::new(),
            current_time: now,
            ticks: 0,
            forecast_requests: 0,
        }
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.checked_items.contains(id)
    }
}

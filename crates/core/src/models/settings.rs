use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::CoreError;

use super::holding::KnowledgeStatus;
use super::state::{ForecastInterval, Tab};

/// Which rendition of the dashboard to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardVariant {
    /// Static headline card: totals and the emergency-fund indicator only
    Simple,
    /// Tabbed view with charts, holdings and the learning plan
    Full,
}

impl std::fmt::Display for DashboardVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardVariant::Simple => write!(f, "simple"),
            DashboardVariant::Full => write!(f, "full"),
        }
    }
}

/// Colors picked by data: P&L sign and knowledge status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub positive: String,
    pub negative: String,
    pub warning: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            positive: "#00ff88".to_string(),
            negative: "#ff4444".to_string(),
            warning: "#ffaa00".to_string(),
        }
    }
}

impl Theme {
    /// Badge color for a knowledge status.
    pub fn knowledge_color(&self, status: KnowledgeStatus) -> &str {
        match status {
            KnowledgeStatus::Strong => &self.positive,
            KnowledgeStatus::Weak => &self.negative,
            KnowledgeStatus::Transitioning => &self.warning,
        }
    }

    /// Color for a signed P&L figure.
    pub fn pnl_color(&self, pnl: f64) -> &str {
        if pnl > 0.0 {
            &self.positive
        } else {
            &self.negative
        }
    }
}

/// Configuration object for one dashboard instance.
///
/// The simple card and the full tabbed view are two values of this type,
/// not two code paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub variant: DashboardVariant,

    /// Footer caption
    pub title: String,

    /// Tabs offered, in display order. Empty for the simple card.
    pub tabs: Vec<Tab>,

    /// Tab active right after mount
    pub default_tab: Tab,

    /// Initial emergency-fund threshold in USD
    pub default_threshold: f64,

    pub default_interval: ForecastInterval,

    /// Whether the "last updated" clock ticks while mounted
    pub live_clock: bool,

    /// Clock tick period in milliseconds
    pub tick_interval_ms: u64,

    /// Center of the mock price and forecast series, USD
    pub base_price: f64,

    /// Seed for the mock series; `None` draws from OS entropy
    pub seed: Option<u64>,

    pub theme: Theme,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::full()
    }
}

impl DashboardConfig {
    /// The tabbed dashboard with all five tabs and a live clock.
    pub fn full() -> Self {
        Self {
            variant: DashboardVariant::Full,
            title: "ETH Market Dashboard v2".to_string(),
            tabs: Tab::ALL.to_vec(),
            default_tab: Tab::Forecasting,
            default_threshold: 5000.0,
            default_interval: ForecastInterval::OneHour,
            live_clock: true,
            tick_interval_ms: 1000,
            base_price: 2400.0,
            seed: None,
            theme: Theme::default(),
        }
    }

    /// The static headline card: no tabs, no live clock.
    pub fn simple() -> Self {
        Self {
            variant: DashboardVariant::Simple,
            title: "ETH Market Dashboard v1".to_string(),
            tabs: Vec::new(),
            live_clock: false,
            ..Self::full()
        }
    }

    /// Parse a config from JSON. Missing fields take the full-variant defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let config: DashboardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize config: {e}")))
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.variant == DashboardVariant::Full && self.tabs.is_empty() {
            return Err(CoreError::InvalidConfig(
                "the full dashboard needs at least one tab".into(),
            ));
        }
        if !self.tabs.is_empty() && !self.tabs.contains(&self.default_tab) {
            return Err(CoreError::InvalidConfig(format!(
                "default tab '{}' is not among the enabled tabs",
                self.default_tab
            )));
        }
        for (i, tab) in self.tabs.iter().enumerate() {
            if self.tabs[..i].contains(tab) {
                return Err(CoreError::InvalidConfig(format!("tab '{tab}' listed twice")));
            }
        }
        if !self.default_threshold.is_finite() || self.default_threshold < 0.0 {
            return Err(CoreError::InvalidConfig(format!(
                "default threshold must be a finite number >= 0, got {}",
                self.default_threshold
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(CoreError::InvalidConfig(
                "tick interval must be greater than zero".into(),
            ));
        }
        if !self.base_price.is_finite() || self.base_price <= 0.0 {
            return Err(CoreError::InvalidConfig(format!(
                "base price must be a finite positive number, got {}",
                self.base_price
            )));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_interval_ms)
    }

    pub fn has_tab(&self, tab: Tab) -> bool {
        self.tabs.contains(&tab)
    }
}

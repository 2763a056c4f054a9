use serde::{Deserialize, Serialize};

use super::holding::KnowledgeStatus;
use super::state::ForecastInterval;

/// Portfolio totals derived from the holding list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Sum of `amount × price` over all holdings, USD
    pub total_value: f64,

    /// Sum of unrealized P&L over all holdings, USD
    pub total_pnl: f64,

    /// total_value - total_pnl
    pub cost_basis: f64,

    /// (total_pnl / cost_basis) * 100, or 0 when cost_basis is not positive
    pub total_return_pct: f64,

    /// Per-holding rows, in fixture order
    pub holdings: Vec<HoldingSummary>,
}

/// Summary of a single holding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoldingSummary {
    pub symbol: String,
    pub value: f64,
    pub pnl: f64,
    pub pnl_percent: f64,
    /// Authored allocation percentage
    pub allocation: f64,
    pub knowledge: KnowledgeStatus,
}

/// How the portfolio compares to the emergency-fund threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FundStatus {
    /// Below the threshold: money you can afford to lose
    PlayMoney,
    /// At or above the threshold
    MeaningfulMoney,
    /// Threshold is zero, so there is nothing to compare against
    Undefined,
}

impl std::fmt::Display for FundStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FundStatus::PlayMoney => write!(f, "Play Money"),
            FundStatus::MeaningfulMoney => write!(f, "Meaningful Money"),
            FundStatus::Undefined => write!(f, "Undefined"),
        }
    }
}

/// Emergency-fund indicator shown under the threshold input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyFundReport {
    pub portfolio_value: f64,
    pub threshold: f64,
    /// Unrounded ratio in percent; `None` when the threshold is zero
    pub ratio_pct: Option<f64>,
    /// Rounded display form, e.g. "20%", or "—" when undefined
    pub display: String,
    pub status: FundStatus,
}

/// Headline figure of the forecasting tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSummary {
    /// Predicted value of the last forecast sample
    pub latest: f64,
    pub interval: ForecastInterval,
    /// Authored model confidence in percent
    pub confidence: f64,
}

impl ForecastSummary {
    /// Caption under the figure, e.g. "Next 1h prediction".
    pub fn caption(&self) -> String {
        format!("Next {} prediction", self.interval)
    }
}

use std::collections::BTreeSet;

use crate::errors::CoreError;
use crate::fixtures::MODEL_CONFIDENCE;
use crate::models::analytics::{
    EmergencyFundReport, ForecastSummary, FundStatus, HoldingSummary, PortfolioSummary,
};
use crate::models::checklist::{ChecklistProgress, ChecklistSection};
use crate::models::holding::{Holding, KnowledgeStatus};
use crate::models::series::ForecastPoint;
use crate::models::state::ForecastInterval;
use crate::providers::mock::latest_forecast;

/// Display form of an undefined ratio.
pub const UNDEFINED_RATIO: &str = "—";

/// Derived figures over holdings, the threshold and the checklist.
///
/// Pure computation over values passed in.
pub struct MetricsService;

impl MetricsService {
    pub fn new() -> Self {
        Self
    }

    /// Sum of every holding's `amount × price`.
    pub fn portfolio_value(&self, holdings: &[Holding]) -> f64 {
        holdings.iter().map(Holding::value).sum()
    }

    /// Sum of the authored allocation percentages.
    pub fn allocation_total(&self, holdings: &[Holding]) -> f64 {
        holdings.iter().map(|h| h.allocation).sum()
    }

    /// Totals derived from the holdings, plus one row per holding.
    pub fn summarize(&self, holdings: &[Holding]) -> PortfolioSummary {
        let total_value = self.portfolio_value(holdings);
        let total_pnl: f64 = holdings.iter().map(|h| h.pnl).sum();
        let cost_basis = total_value - total_pnl;
        let total_return_pct = if cost_basis > 0.0 {
            total_pnl / cost_basis * 100.0
        } else {
            0.0
        };

        let rows = holdings
            .iter()
            .map(|h| HoldingSummary {
                symbol: h.symbol.clone(),
                value: h.value(),
                pnl: h.pnl,
                pnl_percent: h.pnl_percent,
                allocation: h.allocation,
                knowledge: h.knowledge,
            })
            .collect();

        PortfolioSummary {
            total_value,
            total_pnl,
            cost_basis,
            total_return_pct,
            holdings: rows,
        }
    }

    /// Holdings whose knowledge status matches `status`, in fixture order.
    pub fn holdings_with_status<'a>(
        &self,
        holdings: &'a [Holding],
        status: KnowledgeStatus,
    ) -> Vec<&'a Holding> {
        holdings.iter().filter(|h| h.knowledge == status).collect()
    }

    /// (portfolio value / threshold) × 100.
    pub fn emergency_fund_ratio(&self, portfolio_value: f64, threshold: f64) -> Result<f64, CoreError> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(CoreError::InvalidThreshold(format!(
                "threshold must be a finite number >= 0, got {threshold}"
            )));
        }
        if threshold == 0.0 {
            return Err(CoreError::DivisionByZero);
        }
        Ok(portfolio_value / threshold * 100.0)
    }

    /// Ratio, rounded display string and status for the threshold card.
    ///
    /// A zero threshold never errors here: it shows `UNDEFINED_RATIO`.
    pub fn emergency_fund_report(&self, portfolio_value: f64, threshold: f64) -> EmergencyFundReport {
        let ratio_pct = self.emergency_fund_ratio(portfolio_value, threshold).ok();
        let (display, status) = match ratio_pct {
            Some(pct) => (
                format_ratio(pct),
                if pct < 100.0 {
                    FundStatus::PlayMoney
                } else {
                    FundStatus::MeaningfulMoney
                },
            ),
            None => (UNDEFINED_RATIO.to_string(), FundStatus::Undefined),
        };
        EmergencyFundReport {
            portfolio_value,
            threshold,
            ratio_pct,
            display,
            status,
        }
    }

    /// Latest predicted value together with the selected interval label.
    pub fn forecast_summary(
        &self,
        forecast: &[ForecastPoint],
        interval: ForecastInterval,
    ) -> ForecastSummary {
        ForecastSummary {
            latest: latest_forecast(forecast),
            interval,
            confidence: MODEL_CONFIDENCE,
        }
    }

    /// Per-section completion. Ids not in a section are ignored.
    pub fn checklist_progress(
        &self,
        sections: &[ChecklistSection],
        checked: &BTreeSet<String>,
    ) -> Vec<ChecklistProgress> {
        sections
            .iter()
            .map(|section| ChecklistProgress {
                title: section.title.clone(),
                completed: section
                    .items
                    .iter()
                    .filter(|item| checked.contains(&item.id))
                    .count(),
                total: section.items.len(),
            })
            .collect()
    }

    /// Completion across the whole plan.
    pub fn overall_progress(
        &self,
        sections: &[ChecklistSection],
        checked: &BTreeSet<String>,
    ) -> ChecklistProgress {
        let per_section = self.checklist_progress(sections, checked);
        ChecklistProgress {
            title: "Learning Plan".to_string(),
            completed: per_section.iter().map(|p| p.completed).sum(),
            total: per_section.iter().map(|p| p.total).sum(),
        }
    }
}

impl Default for MetricsService {
    fn default() -> Self {
        Self::new()
    }
}

/// Round to the nearest whole percent, e.g. 20.1956 → "20%".
pub fn format_ratio(pct: f64) -> String {
    format!("{:.0}%", pct.round())
}

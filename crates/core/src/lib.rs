pub mod errors;
pub mod fixtures;
pub mod models;
pub mod providers;
pub mod services;
pub mod session;
pub mod storage;

use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

use models::{
    analytics::{EmergencyFundReport, ForecastSummary, PortfolioSummary},
    checklist::{ChecklistProgress, ChecklistSection},
    event::{DashboardEvent, EventOutcome},
    holding::Holding,
    series::{ForecastPoint, GasPoint, PricePoint, SectorShare, SeriesSnapshot},
    settings::DashboardConfig,
    state::{ForecastInterval, InteractionState, Tab},
};
use providers::registry::SeriesSourceRegistry;
use services::{
    clock::{Clock, SystemClock},
    metrics_service::MetricsService,
    series_service::SeriesService,
};
use storage::manager::SnapshotManager;

use errors::CoreError;

/// Main entry point for the dashboard core.
/// Holds the fixture data, the series generated at mount, and the
/// interaction state. All state changes go through `&mut self` methods and
/// either succeed completely or leave the state untouched.
#[must_use]
pub struct Dashboard {
    config: DashboardConfig,
    holdings: Vec<Holding>,
    learning_plan: Vec<ChecklistSection>,
    series: SeriesSnapshot,
    state: InteractionState,
    metrics: MetricsService,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("variant", &self.config.variant)
            .field("holdings", &self.holdings.len())
            .field("series_source", &self.series.source)
            .field("state", &self.state)
            .finish()
    }
}

impl Dashboard {
    /// Build a dashboard with the mock series source and the system clock.
    pub async fn mount(config: DashboardConfig) -> Result<Self, CoreError> {
        let registry = SeriesSourceRegistry::new_with_defaults(config.seed, config.base_price);
        let series_service = SeriesService::new(registry);
        Self::mount_with(config, &series_service, Arc::new(SystemClock)).await
    }

    /// Build a dashboard from explicit collaborators.
    ///
    /// Series are fetched exactly once, here; they are not re-sampled later.
    pub async fn mount_with(
        config: DashboardConfig,
        series_service: &SeriesService,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, CoreError> {
        config.validate()?;
        let now = clock.now();
        let series = series_service.load(now).await?;
        let state = InteractionState::new(
            config.default_tab,
            config.default_threshold,
            config.default_interval,
            now,
        );

        info!(
            variant = %config.variant,
            source = %series.source,
            threshold = config.default_threshold,
            "dashboard built"
        );

        Ok(Self {
            config,
            holdings: fixtures::holdings(),
            learning_plan: fixtures::learning_plan(),
            series,
            state,
            metrics: MetricsService::new(),
            clock,
        })
    }

    // ── Interaction ─────────────────────────────────────────────────

    /// Switch the active tab. Only tabs enabled by the config are accepted.
    pub fn select_tab(&mut self, tab: Tab) -> Result<(), CoreError> {
        if !self.config.has_tab(tab) {
            return Err(CoreError::TabUnavailable(tab.to_string()));
        }
        debug!(from = %self.state.active_tab, to = %tab, "tab selected");
        self.state.active_tab = tab;
        Ok(())
    }

    /// Set the emergency-fund threshold.
    /// Non-finite and negative values are rejected; the prior value is kept.
    pub fn set_threshold(&mut self, value: f64) -> Result<(), CoreError> {
        if !value.is_finite() {
            return Err(CoreError::InvalidThreshold(format!(
                "'{value}' is not a finite number"
            )));
        }
        if value < 0.0 {
            return Err(CoreError::InvalidThreshold(format!(
                "{value} is negative; the threshold must be >= 0"
            )));
        }
        debug!(from = self.state.threshold, to = value, "threshold set");
        self.state.threshold = value;
        Ok(())
    }

    /// Set the threshold from raw field text (e.g. "5000", " 1e4 ").
    pub fn set_threshold_input(&mut self, text: &str) -> Result<(), CoreError> {
        let value: f64 = text
            .trim()
            .parse()
            .map_err(|_| CoreError::InvalidThreshold(format!("'{text}' is not a number")))?;
        self.set_threshold(value)
    }

    /// Change the forecast interval label. Does not regenerate any series.
    pub fn set_forecast_interval(&mut self, interval: ForecastInterval) {
        debug!(from = %self.state.forecast_interval, to = %interval, "forecast interval set");
        self.state.forecast_interval = interval;
    }

    /// Flip membership of `id` in the checked set.
    /// Returns `true` if the item is checked afterwards.
    pub fn toggle_checklist_item(&mut self, id: &str) -> bool {
        if !self.learning_plan.iter().any(|s| s.contains(id)) {
            debug!(id, "toggling an id that is not in the learning plan");
        }
        let checked = if self.state.checked_items.remove(id) {
            false
        } else {
            self.state.checked_items.insert(id.to_string());
            true
        };
        debug!(id, checked, "checklist item toggled");
        checked
    }

    /// Advance the displayed clock to `now`.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        self.state.current_time = now;
        self.state.ticks += 1;
    }

    /// Advance the displayed clock using the dashboard's own clock.
    pub fn tick_now(&mut self) {
        let now = self.clock.now();
        self.tick(now);
    }

    /// Ask for a fresh forecast.
    ///
    /// Only recorded and logged: the mock source has nothing to refresh.
    /// A live forecasting backend hooks in here.
    pub fn request_forecast_update(&mut self) {
        self.state.forecast_requests += 1;
        info!(
            interval = %self.state.forecast_interval,
            requests = self.state.forecast_requests,
            "Updating forecast for {} interval",
            self.state.forecast_interval
        );
    }

    /// Apply one event. Rejections are logged and reported, never propagated.
    pub fn apply(&mut self, event: DashboardEvent) -> EventOutcome {
        let result = match event {
            DashboardEvent::SelectTab(tab) => self.select_tab(tab).map(|_| EventOutcome::Applied),
            DashboardEvent::SetThreshold(text) => self
                .set_threshold_input(&text)
                .map(|_| EventOutcome::Applied),
            DashboardEvent::SetForecastInterval(interval) => {
                self.set_forecast_interval(interval);
                Ok(EventOutcome::Applied)
            }
            DashboardEvent::ToggleChecklistItem(id) => {
                Ok(EventOutcome::Toggled(self.toggle_checklist_item(&id)))
            }
            DashboardEvent::RequestForecastUpdate => {
                self.request_forecast_update();
                Ok(EventOutcome::Applied)
            }
            DashboardEvent::Tick(now) => {
                self.tick(now);
                Ok(EventOutcome::Applied)
            }
        };

        result.unwrap_or_else(|e| {
            warn!(error = %e, "event rejected");
            EventOutcome::Rejected(e.to_string())
        })
    }

    // ── State Accessors ─────────────────────────────────────────────

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    #[must_use]
    pub fn active_tab(&self) -> Tab {
        self.state.active_tab
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.state.threshold
    }

    #[must_use]
    pub fn forecast_interval(&self) -> ForecastInterval {
        self.state.forecast_interval
    }

    #[must_use]
    pub fn checked_items(&self) -> &BTreeSet<String> {
        &self.state.checked_items
    }

    #[must_use]
    pub fn is_checked(&self, id: &str) -> bool {
        self.state.is_checked(id)
    }

    #[must_use]
    pub fn current_time(&self) -> DateTime<Utc> {
        self.state.current_time
    }

    /// Number of clock ticks applied since mount.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.state.ticks
    }

    /// The clock this dashboard was mounted with.
    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    // ── Fixture & Series Data ───────────────────────────────────────

    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    #[must_use]
    pub fn learning_plan(&self) -> &[ChecklistSection] {
        &self.learning_plan
    }

    #[must_use]
    pub fn series(&self) -> &SeriesSnapshot {
        &self.series
    }

    #[must_use]
    pub fn price_history(&self) -> &[PricePoint] {
        &self.series.price_history
    }

    #[must_use]
    pub fn gas_history(&self) -> &[GasPoint] {
        &self.series.gas_history
    }

    #[must_use]
    pub fn forecast(&self) -> &[ForecastPoint] {
        &self.series.forecast
    }

    #[must_use]
    pub fn sector_shares(&self) -> &[SectorShare] {
        &self.series.sector_shares
    }

    // ── Derived Metrics ─────────────────────────────────────────────

    /// Sum of all holding values.
    #[must_use]
    pub fn portfolio_value(&self) -> f64 {
        self.metrics.portfolio_value(&self.holdings)
    }

    #[must_use]
    pub fn summary(&self) -> PortfolioSummary {
        self.metrics.summarize(&self.holdings)
    }

    /// Ratio of portfolio value to the current threshold, in percent.
    pub fn emergency_fund_ratio(&self) -> Result<f64, CoreError> {
        self.metrics
            .emergency_fund_ratio(self.portfolio_value(), self.state.threshold)
    }

    #[must_use]
    pub fn emergency_fund(&self) -> EmergencyFundReport {
        self.metrics
            .emergency_fund_report(self.portfolio_value(), self.state.threshold)
    }

    #[must_use]
    pub fn forecast_summary(&self) -> ForecastSummary {
        self.metrics
            .forecast_summary(&self.series.forecast, self.state.forecast_interval)
    }

    #[must_use]
    pub fn checklist_progress(&self) -> Vec<ChecklistProgress> {
        self.metrics
            .checklist_progress(&self.learning_plan, &self.state.checked_items)
    }

    #[must_use]
    pub fn overall_progress(&self) -> ChecklistProgress {
        self.metrics
            .overall_progress(&self.learning_plan, &self.state.checked_items)
    }

    /// Badge color for a holding's knowledge status under the configured theme.
    #[must_use]
    pub fn knowledge_color(&self, holding: &Holding) -> &str {
        self.config.theme.knowledge_color(holding.knowledge)
    }

    // ── Snapshot Boundary ───────────────────────────────────────────

    /// Serialize the interaction state (not the fixtures or series).
    pub fn snapshot_json(&self) -> Result<String, CoreError> {
        SnapshotManager::save_to_string(&self.state)
    }

    /// Replace the interaction state from a snapshot.
    /// The snapshot is fully validated before anything changes.
    pub fn restore_json(&mut self, json: &str) -> Result<(), CoreError> {
        let state = SnapshotManager::load_from_str(json, &self.config)?;
        debug!(
            tab = %state.active_tab,
            checked = state.checked_items.len(),
            "interaction state restored"
        );
        self.state = state;
        Ok(())
    }
}

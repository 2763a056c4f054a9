use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::CoreError;
use crate::models::series::{ForecastPoint, GasPoint, PricePoint, SectorShare};

/// Capability the dashboard reads its chart data through.
///
/// The mock generator is one implementation; a live feed can be dropped in
/// without touching the dashboard. Every method receives the mount instant so
/// implementations never read the wall clock themselves.
#[async_trait]
pub trait SeriesSource: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// Hourly price samples ending at `now`, oldest first.
    async fn fetch_price_history(&self, now: DateTime<Utc>) -> Result<Vec<PricePoint>, CoreError>;

    /// Gas-fee samples ending at `now`, oldest first.
    async fn fetch_gas_history(&self, now: DateTime<Utc>) -> Result<Vec<GasPoint>, CoreError>;

    /// Predicted-vs-actual samples starting at `now`.
    async fn fetch_forecast(&self, now: DateTime<Utc>) -> Result<Vec<ForecastPoint>, CoreError>;

    /// Sector breakdown.
    async fn fetch_sector_shares(&self) -> Result<Vec<SectorShare>, CoreError>;
}

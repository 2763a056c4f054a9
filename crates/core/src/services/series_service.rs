use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::series::SeriesSnapshot;
use crate::providers::registry::SeriesSourceRegistry;
use crate::providers::traits::SeriesSource;

/// Loads every chart series for a mount, with fallback across sources.
///
/// A snapshot comes from a single source: if any of the four fetches fails,
/// or returns a non-finite value, the whole source is skipped and the next
/// one is tried.
pub struct SeriesService {
    registry: SeriesSourceRegistry,
}

impl SeriesService {
    pub fn new(registry: SeriesSourceRegistry) -> Self {
        Self { registry }
    }

    /// Names of the registered sources, in priority order.
    pub fn source_names(&self) -> Vec<String> {
        self.registry.names()
    }

    /// Fetch all series as of `now`.
    pub async fn load(&self, now: DateTime<Utc>) -> Result<SeriesSnapshot, CoreError> {
        let sources = self.registry.sources();
        if sources.is_empty() {
            return Err(CoreError::NoDataSource);
        }

        let mut last_error = None;
        for source in sources {
            match Self::load_from(source, now).await {
                Ok(snapshot) => {
                    debug!(
                        source = source.name(),
                        price_points = snapshot.price_history.len(),
                        gas_points = snapshot.gas_history.len(),
                        forecast_points = snapshot.forecast.len(),
                        "series loaded"
                    );
                    return Ok(snapshot);
                }
                Err(e) => {
                    warn!(source = source.name(), error = %e, "series source failed, trying next");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or(CoreError::NoDataSource))
    }

    async fn load_from(
        source: &dyn SeriesSource,
        now: DateTime<Utc>,
    ) -> Result<SeriesSnapshot, CoreError> {
        let price_history = source.fetch_price_history(now).await?;
        let gas_history = source.fetch_gas_history(now).await?;
        let forecast = source.fetch_forecast(now).await?;
        let sector_shares = source.fetch_sector_shares().await?;

        let finite = price_history
            .iter()
            .all(|p| p.price.is_finite() && p.volume.is_finite())
            && gas_history.iter().all(|g| g.gas_price.is_finite())
            && forecast
                .iter()
                .all(|f| f.predicted.is_finite() && f.actual.map_or(true, f64::is_finite))
            && sector_shares.iter().all(|s| s.value.is_finite());
        if !finite {
            return Err(CoreError::DataSource {
                source_name: source.name().to_string(),
                message: "series contains non-finite values".into(),
            });
        }

        Ok(SeriesSnapshot {
            source: source.name().to_string(),
            generated_at: now,
            price_history,
            gas_history,
            forecast,
            sector_shares,
        })
    }
}

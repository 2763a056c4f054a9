use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

use crate::errors::CoreError;
use crate::fixtures;
use crate::models::series::{time_label, ForecastPoint, GasPoint, PricePoint, SectorShare};

use super::traits::SeriesSource;

/// Default center of the mock ETH price series, USD.
pub const DEFAULT_BASE_PRICE: f64 = 2400.0;

pub const PRICE_HISTORY_LEN: usize = 24;
pub const GAS_HISTORY_LEN: usize = 12;
pub const FORECAST_LEN: usize = 12;
/// Forecast samples with an observed ("actual") value; the rest are future.
pub const FORECAST_OBSERVED_LEN: usize = 6;

/// Hours between gas samples.
const GAS_STEP_HOURS: i64 = 2;

/// 24 hourly price samples ending at `now`.
///
/// price = base + U[-100, 100) + 100·sin(i/4); volume = U[500k, 1.5M).
pub fn generate_price_history<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    base_price: f64,
) -> Vec<PricePoint> {
    (0..PRICE_HISTORY_LEN)
        .map(|i| {
            let timestamp = now - Duration::hours((PRICE_HISTORY_LEN - 1 - i) as i64);
            let noise = (rng.gen::<f64>() - 0.5) * 200.0;
            let price = base_price + noise + (i as f64 / 4.0).sin() * 100.0;
            let volume = rng.gen::<f64>() * 1_000_000.0 + 500_000.0;
            PricePoint {
                timestamp,
                label: time_label(timestamp),
                price,
                volume,
            }
        })
        .collect()
}

/// 12 gas samples two hours apart, ending at `now`.
///
/// gas = 15 + U[0, 25) + 5·sin(i/2).
pub fn generate_gas_history<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<GasPoint> {
    (0..GAS_HISTORY_LEN)
        .map(|i| {
            let timestamp = now - Duration::hours((GAS_HISTORY_LEN - 1 - i) as i64 * GAS_STEP_HOURS);
            let gas_price = 15.0 + rng.gen::<f64>() * 25.0 + (i as f64 / 2.0).sin() * 5.0;
            GasPoint {
                timestamp,
                label: time_label(timestamp),
                gas_price,
            }
        })
        .collect()
}

/// 12 hourly samples starting at `now`.
///
/// The first six carry `actual = base + U[-50, 50)`; every sample carries
/// `predicted = base + U[-60, 60) + 80·sin(i/3)`. The actual value is drawn
/// before the predicted one.
pub fn generate_forecast_history<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    base_price: f64,
) -> Vec<ForecastPoint> {
    (0..FORECAST_LEN)
        .map(|i| {
            let timestamp = now + Duration::hours(i as i64);
            let actual = if i < FORECAST_OBSERVED_LEN {
                Some(base_price + (rng.gen::<f64>() - 0.5) * 100.0)
            } else {
                None
            };
            let predicted =
                base_price + (rng.gen::<f64>() - 0.5) * 120.0 + (i as f64 / 3.0).sin() * 80.0;
            ForecastPoint {
                timestamp,
                label: time_label(timestamp),
                actual,
                predicted,
            }
        })
        .collect()
}

/// The headline forecast: predicted value of the last sample.
pub fn latest_forecast(points: &[ForecastPoint]) -> f64 {
    points
        .last()
        .map(|p| p.predicted)
        .unwrap_or(fixtures::DEFAULT_LATEST_FORECAST)
}

/// Synthetic series source backed by a (optionally seeded) PRNG.
pub struct MockSeriesSource {
    rng: Mutex<StdRng>,
    base_price: f64,
    seed: Option<u64>,
}

impl MockSeriesSource {
    /// Unseeded source; output differs per instance.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
            base_price: DEFAULT_BASE_PRICE,
            seed: None,
        }
    }

    /// Seeded source; two sources with the same seed yield the same series.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            base_price: DEFAULT_BASE_PRICE,
            seed: Some(seed),
        }
    }

    pub fn with_base_price(mut self, base_price: f64) -> Self {
        self.base_price = base_price;
        self
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> Result<T, CoreError> {
        let mut rng = self.rng.lock().map_err(|_| CoreError::DataSource {
            source_name: self.name().to_string(),
            message: "random source lock poisoned".into(),
        })?;
        Ok(f(&mut *rng))
    }
}

impl Default for MockSeriesSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SeriesSource for MockSeriesSource {
    fn name(&self) -> &str {
        "MockSeries"
    }

    async fn fetch_price_history(&self, now: DateTime<Utc>) -> Result<Vec<PricePoint>, CoreError> {
        self.with_rng(|rng| generate_price_history(rng, now, self.base_price))
    }

    async fn fetch_gas_history(&self, now: DateTime<Utc>) -> Result<Vec<GasPoint>, CoreError> {
        self.with_rng(|rng| generate_gas_history(rng, now))
    }

    async fn fetch_forecast(&self, now: DateTime<Utc>) -> Result<Vec<ForecastPoint>, CoreError> {
        self.with_rng(|rng| generate_forecast_history(rng, now, self.base_price))
    }

    async fn fetch_sector_shares(&self) -> Result<Vec<SectorShare>, CoreError> {
        Ok(fixtures::sector_shares())
    }
}


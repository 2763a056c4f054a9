use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Format used for chart axis labels, e.g. "03:00 PM".
pub const TIME_LABEL_FORMAT: &str = "%I:%M %p";

/// Render a timestamp as a chart axis label, on the UTC wall clock.
pub fn time_label(at: DateTime<Utc>) -> String {
    at.format(TIME_LABEL_FORMAT).to_string()
}

/// One hourly sample of the price chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub label: String,
    /// Price in USD
    pub price: f64,
    /// Traded volume in USD
    pub volume: f64,
}

/// One sample of the gas-fee chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasPoint {
    pub timestamp: DateTime<Utc>,
    pub label: String,
    /// Gas price in gwei
    pub gas_price: f64,
}

/// One sample of the predicted-vs-actual chart.
///
/// `actual` is `None` for samples beyond the observed range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub timestamp: DateTime<Utc>,
    pub label: String,
    pub actual: Option<f64>,
    pub predicted: f64,
}

/// A slice of the sector bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorShare {
    pub name: String,
    pub value: f64,
    pub color: String,
}

impl SectorShare {
    pub fn new(name: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            color: color.into(),
        }
    }
}

/// All chart series for one mount of the dashboard.
///
/// Produced once and never re-sampled; redraws read the same data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSnapshot {
    /// Name of the source that produced the data
    pub source: String,
    pub generated_at: DateTime<Utc>,
    pub price_history: Vec<PricePoint>,
    pub gas_history: Vec<GasPoint>,
    pub forecast: Vec<ForecastPoint>,
    pub sector_shares: Vec<SectorShare>,
}

pub mod clock;
pub mod metrics_service;
pub mod series_service;

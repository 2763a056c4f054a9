pub mod analytics;
pub mod checklist;
pub mod event;
pub mod holding;
pub mod series;
pub mod settings;
pub mod state;

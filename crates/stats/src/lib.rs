//! `scholar-stats` — Researcher profile aggregation engine.
//!
//! Pure engine crate: receives pre-loaded researcher records and a research
//! taxonomy, returns typed statistical views. No CLI or IO dependencies.

pub mod aggregate;
pub mod bucket;
pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod rank;
pub mod taxonomy;

pub use config::EngineConfig;
pub use engine::{run, StatsEngine};
pub use error::StatsError;
pub use model::{parse_records, Metric, ResearcherRecord, StatsInput, StatsReport};
pub use taxonomy::Taxonomy;

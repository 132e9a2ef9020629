//! Resolution-time prediction and historical statistics
//!
//! Estimates blend a per-category baseline, a priority multiplier, the
//! shared workload factor, and bounded uniform variance. The same baselines
//! back the fallback path of the historical statistics.

pub mod predictor;
pub mod statistics;

pub use predictor::{
    default_baseline_hours, estimate_phrase, ResolutionPrediction, ResolutionPredictor,
};
pub use statistics::{aggregate, CategoryStatistics, CategoryStats};

//! Historical category statistics over a supplied complaint log

use crate::models::{Category, ComplaintRecord, ComplaintStatus};
use crate::prediction::predictor::{round_decimal, ResolutionPredictor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregated history for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    /// Records carrying this category
    pub total_count: usize,

    /// Records marked resolved
    pub resolved_count: usize,

    /// Mean resolution hours over resolved records with a recorded time,
    /// or the category baseline when there are none; 1-decimal rounded
    pub avg_resolution_hours: f64,

    /// The hour average expressed in days, 1-decimal rounded
    pub avg_resolution_days: f64,
}

/// Per-category statistics in normative category order
pub type CategoryStatistics = BTreeMap<Category, CategoryStats>;

/// Aggregate a complaint log into per-category statistics
///
/// Every fixed category gets an entry. The average covers resolved records
/// with a recorded resolution time (zero hours included); categories without
/// any fall back to `baseline`.
pub fn aggregate(
    records: &[ComplaintRecord],
    baseline: impl Fn(Category) -> u32,
) -> CategoryStatistics {
    Category::ALL
        .iter()
        .map(|&category| {
            let matching: Vec<&ComplaintRecord> = records
                .iter()
                .filter(|record| record.category == category)
                .collect();

            let resolved_count = matching
                .iter()
                .filter(|record| record.status == ComplaintStatus::Resolved)
                .count();

            let times: Vec<f64> = matching
                .iter()
                .filter(|record| record.is_resolved_with_time())
                .filter_map(|record| record.resolution_time_hours)
                .collect();

            let avg_hours = if times.is_empty() {
                baseline(category) as f64
            } else {
                times.iter().sum::<f64>() / times.len() as f64
            };

            let stats = CategoryStats {
                total_count: matching.len(),
                resolved_count,
                avg_resolution_hours: round_decimal(avg_hours),
                avg_resolution_days: round_decimal(avg_hours / 24.0),
            };
            (category, stats)
        })
        .collect()
}

impl ResolutionPredictor {
    /// Per-category statistics over a historical complaint log
    ///
    /// Categories with no resolved history fall back to this predictor's
    /// baseline hours, overrides included.
    pub fn category_statistics(&self, records: &[ComplaintRecord]) -> CategoryStatistics {
        aggregate(records, |category| self.baseline_hours(category))
    }
}

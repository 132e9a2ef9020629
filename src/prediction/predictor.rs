//! Heuristic resolution-time estimation

use crate::models::{Category, Priority};
use parking_lot::{Mutex, RwLock};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use tracing::{debug, info};

/// Baseline substituted for a category name the predictor does not recognize
const UNKNOWN_CATEGORY_BASELINE: u32 = 72;

/// Multiplier substituted for a priority name the predictor does not recognize
const UNKNOWN_PRIORITY_MULTIPLIER: f64 = 1.0;

/// Declared trust in the heuristic; not derived from data
const PREDICTION_CONFIDENCE: f64 = 0.75;

/// Bounds of the uniform variance factor applied to every prediction
const VARIANCE_LOW: f64 = 0.8;
const VARIANCE_HIGH: f64 = 1.2;

/// Default expected resolution time per category, in hours
pub fn default_baseline_hours(category: Category) -> u32 {
    match category {
        Category::ItIssues => 24,
        Category::HostelManagement => 48,
        Category::Academics => 72,
        Category::Administration => 96,
        Category::Library => 48,
        Category::SportsRecreation => 72,
        Category::Other => 120,
    }
}

/// Human-readable bucket for a predicted hour count
pub fn estimate_phrase(hours: u32) -> String {
    if hours < 24 {
        format!("Within {} hours", hours)
    } else if hours < 48 {
        "1-2 days".to_string()
    } else if hours < 72 {
        "2-3 days".to_string()
    } else if hours < 120 {
        "3-5 days".to_string()
    } else {
        format!("{} days", hours / 24)
    }
}

/// Resolution-time estimate for one complaint
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResolutionPrediction {
    /// Predicted hours, always at least 1
    pub hours: u32,

    /// Predicted days, rounded to 1 decimal
    pub days: f64,

    /// Baseline hours used for the category
    pub category_baseline_hours: u32,

    /// Multiplier used for the priority
    pub priority_multiplier: f64,

    /// Fixed declared trust level
    pub confidence: f64,
}

/// Heuristic resolution-time predictor
///
/// Blends a per-category baseline, a priority multiplier, the shared workload
/// factor, and a bounded uniform variance draw. The workload factor is the
/// only mutable state beyond the RNG; both sit behind locks so the predictor
/// is freely shareable across threads. Concurrent readers observe either the
/// old or the new factor, never a torn value.
#[derive(Debug)]
pub struct ResolutionPredictor {
    baselines: HashMap<Category, u32>,
    workload_factor: RwLock<f64>,
    rng: Mutex<StdRng>,
}

impl ResolutionPredictor {
    /// Build a predictor with the default baselines and an entropy-seeded RNG
    pub fn new() -> Self {
        Self::with_overrides(&[], None)
    }

    /// Build a predictor with a fixed RNG seed, for deterministic tests
    pub fn with_seed(seed: u64) -> Self {
        Self::with_overrides(&[], Some(seed))
    }

    /// Build a predictor with per-category baseline overrides and an
    /// optional RNG seed
    pub fn with_overrides(overrides: &[(Category, u32)], seed: Option<u64>) -> Self {
        let mut baselines: HashMap<Category, u32> = Category::ALL
            .iter()
            .map(|&category| (category, default_baseline_hours(category)))
            .collect();
        for &(category, hours) in overrides {
            baselines.insert(category, hours);
        }

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            baselines,
            workload_factor: RwLock::new(1.0),
            rng: Mutex::new(rng),
        }
    }

    /// Baseline hours in effect for a category
    pub fn baseline_hours(&self, category: Category) -> u32 {
        self.baselines[&category]
    }

    /// Current workload factor
    pub fn workload_factor(&self) -> f64 {
        *self.workload_factor.read()
    }

    /// Recompute the workload factor from the pending-complaint count
    ///
    /// Step function: <10 -> 0.9, <20 -> 1.0, <50 -> 1.2, else 1.5. The new
    /// factor applies to subsequent predictions only.
    pub fn update_workload(&self, pending_count: usize) {
        let factor = if pending_count < 10 {
            0.9
        } else if pending_count < 20 {
            1.0
        } else if pending_count < 50 {
            1.2
        } else {
            1.5
        };

        *self.workload_factor.write() = factor;
        info!(pending_count, factor, "updated workload factor");
    }

    /// Predict resolution time for a typed category and priority
    ///
    /// `description` is accepted for interface symmetry but does not
    /// currently influence the estimate.
    pub fn predict(
        &self,
        category: Category,
        priority: Priority,
        description: Option<&str>,
    ) -> ResolutionPrediction {
        let _ = description;
        self.predict_from(self.baseline_hours(category), priority.multiplier())
    }

    /// Predict resolution time from category and priority names
    ///
    /// Unrecognized names are substituted with the defaults (72 h baseline,
    /// 1.0 multiplier) rather than rejected; callers wanting loud failures
    /// should parse eagerly and use [`predict`](Self::predict).
    pub fn predict_named(
        &self,
        category: &str,
        priority: &str,
        description: Option<&str>,
    ) -> ResolutionPrediction {
        let _ = description;

        let base = match Category::from_str(category) {
            Ok(category) => self.baseline_hours(category),
            Err(_) => {
                debug!(category, "unknown category, using default baseline");
                UNKNOWN_CATEGORY_BASELINE
            }
        };

        let mult = match Priority::from_str(priority) {
            Ok(priority) => priority.multiplier(),
            Err(_) => {
                debug!(priority, "unknown priority, using default multiplier");
                UNKNOWN_PRIORITY_MULTIPLIER
            }
        };

        self.predict_from(base, mult)
    }

    /// Human-readable estimate from a fresh prediction
    pub fn estimate_text(&self, category: Category, priority: Priority) -> String {
        estimate_phrase(self.predict(category, priority, None).hours)
    }

    fn predict_from(&self, base: u32, mult: f64) -> ResolutionPrediction {
        let workload = *self.workload_factor.read();
        let variance = self.rng.lock().gen_range(VARIANCE_LOW..=VARIANCE_HIGH);

        let raw = base as f64 * mult * workload * variance;
        let hours = (raw as u32).max(1);
        let days = round_decimal(hours as f64 / 24.0);

        debug!(base, mult, workload, hours, "predicted resolution time");

        ResolutionPrediction {
            hours,
            days,
            category_baseline_hours: base,
            priority_multiplier: mult,
            confidence: PREDICTION_CONFIDENCE,
        }
    }
}

impl Default for ResolutionPredictor {
    fn default() -> Self {
        Self::new()
    }
}

/// Round to 1 decimal place
pub(crate) fn round_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

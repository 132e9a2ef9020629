//! Engine facade composing the three triage stages
//!
//! The surrounding system feeds complaint text (plus optional manual
//! overrides) in and persists the structured outcome. Classification and
//! sentiment run independently on the raw text; their outputs feed the
//! resolution-time predictor.

use crate::classification::{CategorySuggestion, ClassificationResult, ComplaintClassifier};
use crate::config::TriageConfig;
use crate::error::Result;
use crate::models::ComplaintRecord;
use crate::prediction::{
    estimate_phrase, CategoryStatistics, ResolutionPrediction, ResolutionPredictor,
};
use crate::sentiment::{SentimentAnalyzer, SentimentResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One complaint to triage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageRequest {
    /// Free-text complaint body
    pub text: String,

    /// Manual category override; ignored unless it is an exact display name
    pub manual_category: Option<String>,

    /// Manual priority override; ignored unless it is an exact level name
    pub manual_priority: Option<String>,
}

impl TriageRequest {
    /// Request with no manual overrides
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            manual_category: None,
            manual_priority: None,
        }
    }

    /// Set a manual category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.manual_category = Some(category.into());
        self
    }

    /// Set a manual priority
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.manual_priority = Some(priority.into());
        self
    }
}

/// Combined output of one triage run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageOutcome {
    /// Category and confidence
    pub classification: ClassificationResult,

    /// Polarity, urgency, and priority
    pub sentiment: SentimentResult,

    /// Resolution-time estimate
    pub prediction: ResolutionPrediction,

    /// Human-readable phrasing of the estimate
    pub estimate: String,

    /// When the triage ran
    pub triaged_at: DateTime<Utc>,
}

/// The complaint-triage engine
///
/// Owns one instance of each pipeline component. Construct once at process
/// start and share by reference; every operation takes `&self`.
pub struct TriageEngine {
    classifier: ComplaintClassifier,
    analyzer: SentimentAnalyzer,
    predictor: ResolutionPredictor,
}

impl TriageEngine {
    /// Engine over the built-in keyword tables and baselines
    pub fn new() -> Self {
        Self {
            classifier: ComplaintClassifier::new(),
            analyzer: SentimentAnalyzer::new(),
            predictor: ResolutionPredictor::new(),
        }
    }

    /// Engine configured from a loaded [`TriageConfig`]
    pub fn from_config(config: &TriageConfig) -> Result<Self> {
        let extensions = config.classification_extensions()?;
        let overrides = config.baseline_overrides()?;

        let engine = Self {
            classifier: ComplaintClassifier::with_extensions(&extensions),
            analyzer: SentimentAnalyzer::with_extensions(&config.sentiment.extra_urgent_keywords)?,
            predictor: ResolutionPredictor::with_overrides(&overrides, config.prediction.rng_seed),
        };

        info!(
            keyword_extensions = extensions.len(),
            urgent_extensions = config.sentiment.extra_urgent_keywords.len(),
            baseline_overrides = overrides.len(),
            seeded = config.prediction.rng_seed.is_some(),
            "triage engine configured"
        );
        Ok(engine)
    }

    /// Run the full pipeline on one complaint
    pub fn triage(&self, request: &TriageRequest) -> TriageOutcome {
        let classification = self
            .classifier
            .classify(&request.text, request.manual_category.as_deref());
        let sentiment = self
            .analyzer
            .analyze(&request.text, request.manual_priority.as_deref());

        let prediction = self.predictor.predict(
            classification.category,
            sentiment.priority,
            Some(&request.text),
        );

        debug!(
            category = %classification.category,
            priority = %sentiment.priority,
            hours = prediction.hours,
            "triaged complaint"
        );

        TriageOutcome {
            classification,
            sentiment,
            estimate: estimate_phrase(prediction.hours),
            prediction,
            triaged_at: Utc::now(),
        }
    }

    /// Ranked category suggestions for a complaint text
    pub fn suggest(&self, text: &str, top_n: usize) -> Vec<CategorySuggestion> {
        self.classifier.suggest(text, top_n)
    }

    /// Per-category statistics over a historical complaint log
    pub fn category_statistics(&self, records: &[ComplaintRecord]) -> CategoryStatistics {
        self.predictor.category_statistics(records)
    }

    /// The owned classifier
    pub fn classifier(&self) -> &ComplaintClassifier {
        &self.classifier
    }

    /// The owned sentiment analyzer
    pub fn analyzer(&self) -> &SentimentAnalyzer {
        &self.analyzer
    }

    /// The owned predictor
    pub fn predictor(&self) -> &ResolutionPredictor {
        &self.predictor
    }
}

impl Default for TriageEngine {
    fn default() -> Self {
        Self::new()
    }
}

// The analyzer holds a trait-object scorer, so Debug is manual
impl std::fmt::Debug for TriageEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriageEngine").finish_non_exhaustive()
    }
}

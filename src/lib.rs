//! Deterministic complaint-triage pipeline
//!
//! Three composable stages over free-text complaints:
//!
//! - [`classification`]: keyword/stem category matching with confidence and
//!   ranked suggestions
//! - [`sentiment`]: polarity/subjectivity plus urgency keywords, mapped to
//!   a priority tier
//! - [`prediction`]: heuristic resolution-time estimates and historical
//!   category statistics
//!
//! [`pipeline::TriageEngine`] composes the three; each component is also
//! individually constructible. The crate performs no I/O and holds no global
//! state: the only shared mutable value is the predictor's workload factor,
//! updated explicitly from the external pending-complaint count.
//!
//! ```
//! use complaint_triage::pipeline::{TriageEngine, TriageRequest};
//!
//! let engine = TriageEngine::new();
//! let outcome = engine.triage(&TriageRequest::new(
//!     "The wifi in my hostel room is very slow",
//! ));
//! assert_eq!(outcome.classification.category.to_string(), "IT Issues");
//! assert!(outcome.prediction.hours >= 1);
//! ```

pub mod classification;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod prediction;
pub mod sentiment;
pub mod text;

pub use classification::{CategorySuggestion, ClassificationResult, ComplaintClassifier};
pub use config::TriageConfig;
pub use error::{Result, TriageError};
pub use models::{Category, ComplaintRecord, ComplaintStatus, Priority, SentimentLabel};
pub use pipeline::{TriageEngine, TriageOutcome, TriageRequest};
pub use prediction::{
    CategoryStatistics, CategoryStats, ResolutionPrediction, ResolutionPredictor,
};
pub use sentiment::{SentimentAnalyzer, SentimentResult, SentimentScore, SentimentScorer};
pub use text::TextNormalizer;

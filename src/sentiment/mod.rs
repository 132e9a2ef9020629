//! Sentiment and urgency analysis
//!
//! Polarity/subjectivity come from a pluggable [`SentimentScorer`] backend;
//! urgency combines that score with whole-word urgent-keyword counts and maps
//! to a priority tier. Backend failures degrade to neutral defaults instead
//! of propagating.

pub mod analyzer;
pub mod scorer;

pub use analyzer::{SentimentAnalyzer, SentimentResult, DEFAULT_URGENT_KEYWORDS, PROBLEM_KEYWORDS};
pub use scorer::{LexiconScorer, SentimentScore, SentimentScorer};

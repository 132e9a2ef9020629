//! Keyword-driven complaint categorization
//!
//! Complaint text is normalized into stemmed tokens and scored against
//! per-category keyword sets precomputed at construction. The winning
//! category carries a normalized confidence; ranked suggestions expose the
//! full score distribution.

pub mod classifier;
pub mod keywords;

pub use classifier::{CategorySuggestion, ClassificationResult, ComplaintClassifier};
pub use keywords::{seed_keywords, KeywordIndex};

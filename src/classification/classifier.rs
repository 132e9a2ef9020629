//! Keyword-based complaint classification

use crate::classification::keywords::KeywordIndex;
use crate::models::Category;
use crate::text::TextNormalizer;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Confidence reported for a valid manual category override
const MANUAL_OVERRIDE_CONFIDENCE: f64 = 0.95;

/// Confidence reported when no keyword matches at all
const FALLBACK_CONFIDENCE: f64 = 0.5;

/// Upper bound on inferred confidence
const MAX_CONFIDENCE: f64 = 0.99;

/// Classification outcome
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Winning category
    pub category: Category,

    /// Confidence in [0, 0.99]
    pub confidence: f64,
}

/// One entry of the ranked suggestion list
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CategorySuggestion {
    /// Suggested category
    pub category: Category,

    /// Share of all keyword matches attributed to this category
    pub confidence: f64,
}

/// Keyword/stem complaint classifier
///
/// Holds a tokenizer and a pre-stemmed keyword index; both are built once
/// and never mutated, so the classifier is freely shareable across threads.
pub struct ComplaintClassifier {
    normalizer: TextNormalizer,
    index: KeywordIndex,
}

impl ComplaintClassifier {
    /// Build a classifier over the default keyword tables
    pub fn new() -> Self {
        let normalizer = TextNormalizer::new();
        let index = KeywordIndex::new(&normalizer);
        Self { normalizer, index }
    }

    /// Build a classifier with additive keyword extensions
    pub fn with_extensions(extensions: &[(Category, Vec<String>)]) -> Self {
        let normalizer = TextNormalizer::new();
        let index = KeywordIndex::with_extensions(&normalizer, extensions);
        Self { normalizer, index }
    }

    /// Classify a complaint
    ///
    /// A valid manual category (exact display name) short-circuits inference
    /// at fixed confidence; an invalid one is ignored. When no keyword
    /// matches, the complaint lands in `Other` at 0.5. Ties go to the first
    /// category in normative order, and confidence is the winner's share of
    /// all matches, capped at 0.99.
    pub fn classify(&self, text: &str, manual_category: Option<&str>) -> ClassificationResult {
        if let Some(name) = manual_category {
            match Category::from_str(name) {
                Ok(category) => {
                    debug!(%category, "using manual category");
                    return ClassificationResult {
                        category,
                        confidence: MANUAL_OVERRIDE_CONFIDENCE,
                    };
                }
                Err(_) => {
                    debug!(name, "ignoring unknown manual category");
                }
            }
        }

        let tokens = self.normalizer.normalize(text);
        let scores = self.index.score(&tokens);
        let total: usize = scores.iter().map(|(_, count)| *count).sum();

        if total == 0 {
            debug!("no keyword matches, using catch-all category");
            return ClassificationResult {
                category: Category::Other,
                confidence: FALLBACK_CONFIDENCE,
            };
        }

        // First category to reach the maximum wins
        let mut best = scores[0];
        for &entry in &scores[1..] {
            if entry.1 > best.1 {
                best = entry;
            }
        }

        let confidence = (best.1 as f64 / total as f64).min(MAX_CONFIDENCE);
        debug!(
            category = %best.0,
            confidence,
            matches = best.1,
            total_matches = total,
            "classified complaint"
        );

        ClassificationResult {
            category: best.0,
            confidence,
        }
    }

    /// Rank categories by keyword match count
    ///
    /// Confidence is each category's share of the total match count, 0.0
    /// when nothing matched. The sort is stable, so tied categories keep
    /// normative order. At most `top_n` entries are returned.
    pub fn suggest(&self, text: &str, top_n: usize) -> Vec<CategorySuggestion> {
        let tokens = self.normalizer.normalize(text);
        let mut scores = self.index.score(&tokens);
        let total: usize = scores.iter().map(|(_, count)| *count).sum();

        scores.sort_by(|a, b| b.1.cmp(&a.1));

        scores
            .into_iter()
            .take(top_n)
            .map(|(category, count)| CategorySuggestion {
                category,
                confidence: if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64
                },
            })
            .collect()
    }
}

impl Default for ComplaintClassifier {
    fn default() -> Self {
        Self::new()
    }
}

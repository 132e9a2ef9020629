//! Polarity/subjectivity scoring backends

use crate::error::Result;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Polarity/subjectivity pair produced by a scorer backend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// -1 (negative) to 1 (positive)
    pub polarity: f64,

    /// 0 (objective) to 1 (subjective)
    pub subjectivity: f64,
}

/// Trait for sentiment scoring backends
///
/// The urgency formula in [`crate::sentiment::SentimentAnalyzer`] only
/// consumes the resulting score, so backends can be swapped without touching
/// it. Errors are degraded by the analyzer, not propagated.
pub trait SentimentScorer: Send + Sync {
    /// Score raw text; polarity in [-1, 1], subjectivity in [0, 1]
    fn score(&self, text: &str) -> Result<SentimentScore>;
}

/// How many preceding tokens a negation may sit back from a lexicon hit
const NEGATION_WINDOW: usize = 2;

/// Polarity multiplier applied when a hit is negated
const NEGATION_FACTOR: f64 = -0.5;

/// Word, polarity, subjectivity
///
/// A compact general-purpose lexicon biased toward the vocabulary of
/// service complaints.
static LEXICON_ENTRIES: &[(&str, f64, f64)] = &[
    // negative
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("worst", -1.0, 1.0),
    ("unbearable", -0.9, 1.0),
    ("disgusting", -0.9, 1.0),
    ("pathetic", -0.8, 1.0),
    ("filthy", -0.8, 0.9),
    ("unacceptable", -0.8, 0.9),
    ("ridiculous", -0.7, 0.9),
    ("rude", -0.7, 0.9),
    ("bad", -0.7, 0.7),
    ("impossible", -0.7, 0.8),
    ("stinking", -0.7, 0.9),
    ("dirty", -0.6, 0.8),
    ("frustrating", -0.6, 0.8),
    ("frustrated", -0.6, 0.8),
    ("annoying", -0.6, 0.8),
    ("disappointed", -0.6, 0.8),
    ("disappointing", -0.6, 0.8),
    ("unhappy", -0.6, 0.8),
    ("dangerous", -0.6, 0.9),
    ("unsafe", -0.6, 0.8),
    ("severe", -0.6, 0.9),
    ("smelly", -0.6, 0.8),
    ("failed", -0.6, 0.7),
    ("failure", -0.6, 0.7),
    ("defective", -0.6, 0.7),
    ("unfair", -0.6, 0.8),
    ("angry", -0.5, 0.9),
    ("useless", -0.5, 0.6),
    ("critical", -0.5, 0.8),
    ("faulty", -0.5, 0.7),
    ("wrong", -0.5, 0.7),
    ("sad", -0.5, 1.0),
    ("inadequate", -0.5, 0.7),
    ("unreliable", -0.5, 0.7),
    ("unresponsive", -0.5, 0.7),
    ("broken", -0.4, 0.6),
    ("poor", -0.4, 0.6),
    ("upset", -0.4, 0.8),
    ("noisy", -0.4, 0.7),
    ("leaking", -0.4, 0.6),
    ("messy", -0.4, 0.6),
    ("insufficient", -0.4, 0.6),
    ("slow", -0.3, 0.4),
    ("late", -0.3, 0.6),
    ("delayed", -0.3, 0.5),
    ("stuck", -0.3, 0.5),
    ("lost", -0.3, 0.5),
    ("crowded", -0.3, 0.5),
    ("serious", -0.2, 0.7),
    ("missing", -0.2, 0.4),
    // positive
    ("excellent", 1.0, 1.0),
    ("perfect", 1.0, 1.0),
    ("awesome", 1.0, 1.0),
    ("wonderful", 1.0, 1.0),
    ("best", 1.0, 0.3),
    ("fantastic", 0.9, 0.9),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("good", 0.7, 0.6),
    ("amazing", 0.6, 0.9),
    ("nice", 0.6, 1.0),
    ("better", 0.5, 0.5),
    ("satisfied", 0.5, 0.6),
    ("comfortable", 0.5, 0.7),
    ("love", 0.5, 0.6),
    ("helpful", 0.4, 0.5),
    ("fine", 0.4, 0.5),
    ("friendly", 0.4, 0.6),
    ("appreciate", 0.4, 0.5),
    ("smooth", 0.4, 0.6),
    ("quick", 0.3, 0.6),
    ("clean", 0.3, 0.5),
    ("prompt", 0.3, 0.4),
    ("fast", 0.2, 0.5),
];

/// Intensifiers scale the polarity of the word immediately after them
static INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("extremely", 1.5),
    ("utterly", 1.5),
    ("incredibly", 1.4),
    ("completely", 1.4),
    ("absolutely", 1.4),
    ("terribly", 1.4),
    ("totally", 1.3),
    ("highly", 1.3),
    ("really", 1.2),
];

/// Negation markers, including the stems contractions split into
static NEGATIONS: &[&str] = &[
    "no", "not", "never", "neither", "nobody", "none", "nothing", "cannot", "cant", "dont",
    "doesnt", "didnt", "isnt", "wasnt", "arent", "werent", "wont", "wouldnt", "couldnt",
    "shouldnt", "hasnt", "havent", "hadnt", "don", "doesn", "didn", "isn", "wasn", "aren",
    "weren", "won", "wouldn", "couldn", "shouldn", "hasn", "haven", "hadn",
];

static LEXICON: Lazy<HashMap<&'static str, (f64, f64)>> = Lazy::new(|| {
    LEXICON_ENTRIES
        .iter()
        .map(|&(word, polarity, subjectivity)| (word, (polarity, subjectivity)))
        .collect()
});

static INTENSITY: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| INTENSIFIERS.iter().copied().collect());

static NEGATION_SET: Lazy<std::collections::HashSet<&'static str>> =
    Lazy::new(|| NEGATIONS.iter().copied().collect());

/// Deterministic lexicon-average sentiment scorer
///
/// Polarity and subjectivity are the mean over lexicon hits. An intensifier
/// directly before a hit scales its polarity; a negation within the two
/// preceding tokens flips it by the negation factor. Text with no hits
/// scores (0.0, 0.0).
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn new() -> Self {
        Self
    }

    /// Lowercased alphanumeric tokens, contractions split apart
    fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<SentimentScore> {
        let tokens = Self::tokenize(text);

        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut hits = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            let (base_polarity, subjectivity) = match LEXICON.get(token.as_str()) {
                Some(&entry) => entry,
                None => continue,
            };

            let mut polarity = base_polarity;

            if i >= 1 {
                if let Some(&factor) = INTENSITY.get(tokens[i - 1].as_str()) {
                    polarity *= factor;
                }
            }

            let window_start = i.saturating_sub(NEGATION_WINDOW);
            if tokens[window_start..i]
                .iter()
                .any(|t| NEGATION_SET.contains(t.as_str()))
            {
                polarity *= NEGATION_FACTOR;
            }

            polarity_sum += polarity.clamp(-1.0, 1.0);
            subjectivity_sum += subjectivity;
            hits += 1;
        }

        if hits == 0 {
            return Ok(SentimentScore {
                polarity: 0.0,
                subjectivity: 0.0,
            });
        }

        let n = hits as f64;
        Ok(SentimentScore {
            polarity: (polarity_sum / n).clamp(-1.0, 1.0),
            subjectivity: (subjectivity_sum / n).clamp(0.0, 1.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_hits_scores_zero() {
        let scorer = LexiconScorer::new();
        let score = scorer.score("the certificate takes two weeks").unwrap();
        assert_eq!(score.polarity, 0.0);
        assert_eq!(score.subjectivity, 0.0);
    }

    #[test]
    fn test_negative_words() {
        let scorer = LexiconScorer::new();
        let score = scorer.score("the food is terrible and the staff is rude").unwrap();
        assert!((score.polarity - (-0.85)).abs() < 1e-9);
        assert!((score.subjectivity - 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_positive_words() {
        let scorer = LexiconScorer::new();
        let score = scorer.score("the librarian was helpful and friendly").unwrap();
        assert!(score.polarity > 0.1);
        assert!(score.subjectivity > 0.0);
    }

    #[test]
    fn test_intensifier_scales_polarity() {
        let scorer = LexiconScorer::new();
        let plain = scorer.score("the wifi is slow").unwrap();
        let boosted = scorer.score("the wifi is very slow").unwrap();
        assert!((plain.polarity - (-0.3)).abs() < 1e-9);
        assert!((boosted.polarity - (-0.39)).abs() < 1e-9);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let scorer = LexiconScorer::new();
        let score = scorer.score("the room is not clean").unwrap();
        assert!((score.polarity - (-0.15)).abs() < 1e-9);
    }

    #[test]
    fn test_split_contraction_negates() {
        let scorer = LexiconScorer::new();
        // "wasn't" tokenizes to ["wasn", "t"], which still lands inside the
        // negation window of "helpful".
        let score = scorer.score("the staff wasn't helpful").unwrap();
        assert!((score.polarity - (-0.2)).abs() < 1e-9);
    }

    #[test]
    fn test_polarity_clamped() {
        let scorer = LexiconScorer::new();
        // extremely(1.5) * terrible(-1.0) would be -1.5 unclamped
        let score = scorer.score("extremely terrible").unwrap();
        assert_eq!(score.polarity, -1.0);
    }

    #[test]
    fn test_case_insensitive() {
        let scorer = LexiconScorer::new();
        let lower = scorer.score("terrible service").unwrap();
        let upper = scorer.score("TERRIBLE service").unwrap();
        assert_eq!(lower, upper);
    }
}

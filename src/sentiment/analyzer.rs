//! Urgency analysis of complaint text

use crate::error::{Result, TriageError};
use crate::models::{Priority, SentimentLabel};
use crate::sentiment::scorer::{LexiconScorer, SentimentScore, SentimentScorer};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, warn};

/// Urgency contribution per urgent keyword occurrence
const KEYWORD_BOOST_STEP: f64 = 0.15;

/// Upper bound on the keyword boost
const KEYWORD_BOOST_CAP: f64 = 0.5;

/// Weight of subjectivity in the urgency score
const SUBJECTIVITY_WEIGHT: f64 = 0.2;

/// Urgency-indicator keywords, matched whole-word against lowercased text
pub static DEFAULT_URGENT_KEYWORDS: &[&str] = &[
    "urgent",
    "immediately",
    "asap",
    "emergency",
    "critical",
    "serious",
    "severe",
    "dangerous",
    "broken",
    "not working",
    "failed",
    "unable",
    "cannot",
    "stuck",
    "blocked",
    "help",
    "please",
    "very",
    "extremely",
    "terrible",
    "worst",
    "awful",
];

/// Problem-indicator keywords; counted on request, never used in scoring
pub static PROBLEM_KEYWORDS: &[&str] = &[
    "issue",
    "problem",
    "trouble",
    "difficulty",
    "concern",
    "complaint",
    "error",
    "fault",
    "defect",
    "malfunction",
];

static DEFAULT_URGENT_MATCHERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    DEFAULT_URGENT_KEYWORDS
        .iter()
        .map(|keyword| compile_word_matcher(keyword).expect("embedded keywords are literal patterns"))
        .collect()
});

static PROBLEM_MATCHERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    PROBLEM_KEYWORDS
        .iter()
        .map(|keyword| compile_word_matcher(keyword).expect("embedded keywords are literal patterns"))
        .collect()
});

/// Compile a whole-word matcher for a lowercase keyword
fn compile_word_matcher(keyword: &str) -> Result<Regex> {
    let pattern = format!(r"\b{}\b", regex::escape(&keyword.to_lowercase()));
    Regex::new(&pattern)
        .map_err(|e| TriageError::Configuration(format!("bad urgency keyword {keyword:?}: {e}")))
}

fn count_matches(matchers: &[Regex], text: &str) -> usize {
    let lowered = text.to_lowercase();
    matchers
        .iter()
        .map(|matcher| matcher.find_iter(&lowered).count())
        .sum()
}

/// Full sentiment analysis of one complaint
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SentimentResult {
    /// -1 (negative) to 1 (positive)
    pub polarity: f64,

    /// 0 (objective) to 1 (subjective)
    pub subjectivity: f64,

    /// Combined urgency in [0, 1]
    pub urgency_score: f64,

    /// Priority tier derived from urgency (or a manual override)
    pub priority: Priority,

    /// Whole-word urgent keyword occurrences
    pub urgent_keyword_count: usize,

    /// Label derived from polarity
    pub sentiment_label: SentimentLabel,
}

/// Sentiment/urgency analyzer
///
/// Combines a pluggable polarity/subjectivity backend with whole-word
/// urgency keyword counting. Keyword matchers are compiled once at
/// construction.
pub struct SentimentAnalyzer {
    scorer: Box<dyn SentimentScorer>,
    urgent_matchers: Vec<Regex>,
    problem_matchers: Vec<Regex>,
}

impl SentimentAnalyzer {
    /// Build an analyzer with the lexicon backend and default keywords
    pub fn new() -> Self {
        Self::with_scorer(Box::new(LexiconScorer::new()))
    }

    /// Build an analyzer with a custom scoring backend
    pub fn with_scorer(scorer: Box<dyn SentimentScorer>) -> Self {
        Self {
            scorer,
            urgent_matchers: DEFAULT_URGENT_MATCHERS.clone(),
            problem_matchers: PROBLEM_MATCHERS.clone(),
        }
    }

    /// Build an analyzer with additional urgency keywords
    pub fn with_extensions(extra_urgent: &[String]) -> Result<Self> {
        let mut analyzer = Self::new();
        for keyword in extra_urgent {
            analyzer.urgent_matchers.push(compile_word_matcher(keyword)?);
        }
        Ok(analyzer)
    }

    /// Count urgent keyword occurrences (whole-word, case-insensitive)
    pub fn count_urgent_keywords(&self, text: &str) -> usize {
        count_matches(&self.urgent_matchers, text)
    }

    /// Count problem keyword occurrences (whole-word, case-insensitive)
    ///
    /// Not consulted by `analyze`; exposed for callers layering their own
    /// heuristics on top.
    pub fn count_problem_keywords(&self, text: &str) -> usize {
        count_matches(&self.problem_matchers, text)
    }

    /// Combined urgency score in [0, 1]
    pub fn urgency_score(&self, text: &str) -> f64 {
        let score = self.score_sentiment(text);
        let urgent_count = self.count_urgent_keywords(text);
        combine_urgency(score, urgent_count)
    }

    /// Analyze a complaint
    ///
    /// A valid manual priority wins unconditionally; an invalid one is
    /// ignored. Backend failures degrade to neutral polarity and middling
    /// subjectivity instead of propagating.
    pub fn analyze(&self, text: &str, manual_priority: Option<&str>) -> SentimentResult {
        let score = self.score_sentiment(text);
        let urgent_count = self.count_urgent_keywords(text);
        let urgency = combine_urgency(score, urgent_count);

        let priority = manual_priority
            .and_then(|name| match Priority::from_str(name) {
                Ok(priority) => {
                    debug!(%priority, "using manual priority");
                    Some(priority)
                }
                Err(_) => {
                    debug!(name, "ignoring unknown manual priority");
                    None
                }
            })
            .unwrap_or_else(|| Priority::from_urgency(urgency));

        debug!(
            polarity = score.polarity,
            urgency,
            urgent_count,
            priority = %priority,
            "analyzed complaint sentiment"
        );

        SentimentResult {
            polarity: score.polarity,
            subjectivity: score.subjectivity,
            urgency_score: urgency,
            priority,
            urgent_keyword_count: urgent_count,
            sentiment_label: SentimentLabel::from_polarity(score.polarity),
        }
    }

    fn score_sentiment(&self, text: &str) -> SentimentScore {
        match self.scorer.score(text) {
            Ok(score) => score,
            Err(err) => {
                warn!(%err, "sentiment backend failed, using neutral fallback");
                SentimentScore {
                    polarity: 0.0,
                    subjectivity: 0.5,
                }
            }
        }
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn combine_urgency(score: SentimentScore, urgent_count: usize) -> f64 {
    let sentiment_urgency = (-score.polarity).max(0.0);
    let keyword_boost = (urgent_count as f64 * KEYWORD_BOOST_STEP).min(KEYWORD_BOOST_CAP);
    let subjectivity_factor = score.subjectivity * SUBJECTIVITY_WEIGHT;
    (sentiment_urgency + keyword_boost + subjectivity_factor).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingScorer;

    impl SentimentScorer for FailingScorer {
        fn score(&self, _text: &str) -> Result<SentimentScore> {
            Err(TriageError::Sentiment("backend offline".to_string()))
        }
    }

    #[test]
    fn test_urgent_keywords_whole_word() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(analyzer.count_urgent_keywords("URGENT: the printer is broken"), 2);
        // "urgently" must not match "urgent"
        assert_eq!(analyzer.count_urgent_keywords("this urgently needs attention"), 0);
    }

    #[test]
    fn test_phrase_keyword_matches() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(analyzer.count_urgent_keywords("the printer is not working"), 1);
    }

    #[test]
    fn test_repeated_keywords_count_repeatedly() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(analyzer.count_urgent_keywords("urgent urgent urgent"), 3);
    }

    #[test]
    fn test_problem_keywords_not_in_scoring() {
        let analyzer = SentimentAnalyzer::new();
        let text = "there is a problem and an error with my complaint";
        assert_eq!(analyzer.count_problem_keywords(text), 3);
        assert_eq!(analyzer.count_urgent_keywords(text), 0);

        let result = analyzer.analyze(text, None);
        assert_eq!(result.urgent_keyword_count, 0);
    }

    #[test]
    fn test_urgency_formula() {
        let analyzer = SentimentAnalyzer::new();
        let result =
            analyzer.analyze("Emergency! The heater is broken and the room is extremely cold", None);

        // keywords: emergency, broken, extremely -> boost 0.45
        // lexicon: broken (-0.4, 0.6) -> 0.4 + 0.45 + 0.12 = 0.97
        assert_eq!(result.urgent_keyword_count, 3);
        assert!((result.urgency_score - 0.97).abs() < 1e-9);
        assert_eq!(result.priority, Priority::High);
        assert_eq!(result.sentiment_label, SentimentLabel::Negative);
    }

    #[test]
    fn test_urgency_caps_at_one() {
        let analyzer = SentimentAnalyzer::new();
        let result = analyzer.analyze("the food is terrible and the staff is rude", None);

        // polarity -0.85, one keyword hit (terrible), subjectivity 0.95:
        // 0.85 + 0.15 + 0.19 caps at 1.0
        assert_eq!(result.urgency_score, 1.0);
        assert_eq!(result.priority, Priority::High);
    }

    #[test]
    fn test_keyword_boost_caps() {
        let analyzer = SentimentAnalyzer::new();
        // four keyword hits would add 0.6 without the cap
        let urgency = analyzer.urgency_score("urgent critical severe emergency");
        let result = analyzer.analyze("urgent critical severe emergency", None);
        assert_eq!(result.urgent_keyword_count, 4);

        // lexicon: critical (-0.5, 0.8), severe (-0.6, 0.9):
        // polarity -0.55, subjectivity 0.85 -> 0.55 + 0.5 + 0.17 caps at 1.0
        assert_eq!(urgency, 1.0);
    }

    #[test]
    fn test_calm_text_is_low_priority() {
        let analyzer = SentimentAnalyzer::new();
        let result = analyzer.analyze("the certificate process takes two weeks", None);

        assert_eq!(result.polarity, 0.0);
        assert_eq!(result.urgency_score, 0.0);
        assert_eq!(result.priority, Priority::Low);
        assert_eq!(result.sentiment_label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_positive_text() {
        let analyzer = SentimentAnalyzer::new();
        let result = analyzer.analyze("the library staff is helpful and friendly", None);

        assert!(result.polarity > 0.1);
        assert_eq!(result.sentiment_label, SentimentLabel::Positive);
        assert_eq!(result.priority, Priority::Low);
    }

    #[test]
    fn test_manual_priority_wins() {
        let analyzer = SentimentAnalyzer::new();
        let result = analyzer.analyze("urgent emergency broken terrible", Some("Low"));
        assert_eq!(result.priority, Priority::Low);
        // the computed metrics are still reported
        assert!(result.urgency_score > 0.6);
    }

    #[test]
    fn test_invalid_manual_priority_ignored() {
        let analyzer = SentimentAnalyzer::new();
        let result = analyzer.analyze("urgent emergency broken terrible", Some("Critical"));
        assert_eq!(result.priority, Priority::High);

        let lowercase = analyzer.analyze("urgent emergency broken terrible", Some("low"));
        assert_eq!(lowercase.priority, Priority::High);
    }

    #[test]
    fn test_failing_backend_degrades() {
        let analyzer = SentimentAnalyzer::with_scorer(Box::new(FailingScorer));
        let result = analyzer.analyze("terrible awful", None);

        assert_eq!(result.polarity, 0.0);
        assert_eq!(result.subjectivity, 0.5);
        assert_eq!(result.sentiment_label, SentimentLabel::Neutral);
        // urgency = 0.0 + 2 * 0.15 + 0.5 * 0.2 = 0.4
        assert!((result.urgency_score - 0.4).abs() < 1e-9);
        assert_eq!(result.priority, Priority::Medium);
    }

    #[test]
    fn test_extended_keywords() {
        let analyzer = SentimentAnalyzer::with_extensions(&["leaking".to_string()]).unwrap();
        assert_eq!(analyzer.count_urgent_keywords("the pipe is leaking"), 1);

        let default_analyzer = SentimentAnalyzer::new();
        assert_eq!(default_analyzer.count_urgent_keywords("the pipe is leaking"), 0);
    }

    #[test]
    fn test_empty_text() {
        let analyzer = SentimentAnalyzer::new();
        let result = analyzer.analyze("", None);
        assert_eq!(result.urgent_keyword_count, 0);
        assert_eq!(result.urgency_score, 0.0);
        assert_eq!(result.priority, Priority::Low);
    }
}

//! Complaint text tokenization and normalization

use crate::text::stopwords;
use rust_stemmers::{Algorithm, Stemmer};

/// Tokenizer/normalizer producing the stemmed token stream the classifier
/// scores against
///
/// Steps: lowercase, replace everything outside `[a-z0-9]` with a space,
/// split on whitespace, drop stopwords and tokens of length <= 2, stem the
/// survivors with the Snowball English stemmer. Token order is preserved and
/// duplicates are retained.
pub struct TextNormalizer {
    stemmer: Stemmer,
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Normalize raw complaint text into a token sequence
    ///
    /// Empty or all-garbage input yields an empty vector; there is no
    /// failure mode.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let cleaned: String = lowered
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
            .collect();

        cleaned
            .split_whitespace()
            .filter(|token| token.len() > 2 && !stopwords::is_stopword(token))
            .map(|token| self.stemmer.stem(token).into_owned())
            .collect()
    }

    /// Stem a single keyword the way `normalize` stems tokens
    ///
    /// Used to build keyword indexes that are comparable with normalized
    /// tokens. The input is lowercased first; no stopword or length
    /// filtering is applied.
    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(&word.to_lowercase()).into_owned()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextNormalizer").finish_non_exhaustive()
    }
}

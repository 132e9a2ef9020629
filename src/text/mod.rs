//! Text preprocessing for the triage pipeline

pub mod normalizer;
pub mod stopwords;

pub use normalizer::TextNormalizer;
pub use stopwords::{is_stopword, STOPWORDS};

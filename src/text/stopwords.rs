//! Embedded English stopword list
//!
//! Mirrors the standard NLTK English corpus so tokenization matches the
//! behavior of the systems this crate interoperates with. Entries are
//! lowercase; callers are expected to lowercase before testing membership.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// English stopwords in corpus order
pub static STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

static STOPWORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOPWORDS.iter().copied().collect());

/// Membership test against the embedded stopword list
pub fn is_stopword(word: &str) -> bool {
    STOPWORD_SET.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_stopwords() {
        assert!(is_stopword("the"));
        assert!(is_stopword("is"));
        assert!(is_stopword("very"));
        assert!(is_stopword("not"));
        assert!(is_stopword("wouldn't"));
    }

    #[test]
    fn test_content_words_pass() {
        assert!(!is_stopword("wifi"));
        assert!(!is_stopword("broken"));
        assert!(!is_stopword("hostel"));
    }

    #[test]
    fn test_lowercase_only() {
        assert!(!is_stopword("The"));
        assert!(!is_stopword("NOT"));
    }

    #[test]
    fn test_list_has_no_duplicates() {
        let set: HashSet<&&str> = STOPWORDS.iter().collect();
        assert_eq!(set.len(), STOPWORDS.len());
    }
}

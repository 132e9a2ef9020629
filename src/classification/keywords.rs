//! Category keyword tables and the pre-stemmed index built from them

use crate::models::Category;
use crate::text::TextNormalizer;
use std::collections::HashSet;

/// Default seed keywords for a category
///
/// Multi-word entries are stemmed as given; single-word tokens can never
/// equal them, so they document the category surface without affecting
/// scoring.
pub fn seed_keywords(category: Category) -> &'static [&'static str] {
    match category {
        Category::ItIssues => &[
            "internet",
            "wifi",
            "network",
            "computer",
            "laptop",
            "lab",
            "software",
            "hardware",
            "printer",
            "projector",
            "system",
            "server",
            "website",
            "portal",
            "login",
            "password",
            "slow",
            "connection",
            "download",
            "upload",
            "screen",
            "mouse",
            "keyboard",
        ],
        Category::HostelManagement => &[
            "hostel",
            "room",
            "accommodation",
            "mess",
            "food",
            "canteen",
            "warden",
            "cleanliness",
            "maintenance",
            "water",
            "electricity",
            "bed",
            "mattress",
            "bathroom",
            "toilet",
            "hot water",
            "cold water",
            "roommate",
            "noise",
            "hygiene",
            "laundry",
            "dining",
        ],
        Category::Academics => &[
            "exam",
            "test",
            "marks",
            "grades",
            "faculty",
            "professor",
            "teacher",
            "course",
            "class",
            "lecture",
            "syllabus",
            "schedule",
            "timetable",
            "attendance",
            "assignment",
            "project",
            "lab report",
            "curriculum",
            "subject",
            "semester",
            "academic",
            "study",
        ],
        Category::Administration => &[
            "certificate",
            "document",
            "bonafide",
            "admission",
            "registration",
            "fee",
            "payment",
            "scholarship",
            "id card",
            "transcript",
            "verification",
            "office",
            "application",
            "form",
            "approval",
            "process",
            "department",
            "staff",
            "administration",
            "official",
        ],
        Category::Library => &[
            "library",
            "book",
            "reference",
            "journal",
            "reading room",
            "librarian",
            "borrow",
            "return",
            "due date",
            "fine",
            "catalog",
            "search",
            "database",
            "e-book",
            "digital",
            "photocopy",
            "study space",
            "quiet",
            "hours",
            "membership",
        ],
        Category::SportsRecreation => &[
            "sports",
            "playground",
            "field",
            "court",
            "gym",
            "fitness",
            "basketball",
            "football",
            "cricket",
            "volleyball",
            "equipment",
            "recreation",
            "athletic",
            "tournament",
            "game",
            "physical",
            "exercise",
            "coach",
            "training",
            "facility",
        ],
        Category::Other => &[],
    }
}

/// Pre-stemmed keyword sets, one per category in normative order
///
/// Built once at construction; scoring is O(tokens) hash lookups per
/// category.
#[derive(Debug)]
pub struct KeywordIndex {
    sets: Vec<(Category, HashSet<String>)>,
}

impl KeywordIndex {
    /// Build the index from the default seed tables
    pub fn new(normalizer: &TextNormalizer) -> Self {
        Self::with_extensions(normalizer, &[])
    }

    /// Build the index from the seed tables plus additive extensions
    pub fn with_extensions(
        normalizer: &TextNormalizer,
        extensions: &[(Category, Vec<String>)],
    ) -> Self {
        let mut sets: Vec<(Category, HashSet<String>)> = Category::ALL
            .iter()
            .map(|&category| {
                let stems: HashSet<String> = seed_keywords(category)
                    .iter()
                    .map(|keyword| normalizer.stem(keyword))
                    .collect();
                (category, stems)
            })
            .collect();

        for (category, words) in extensions {
            for (slot, stems) in sets.iter_mut() {
                if slot == category {
                    stems.extend(words.iter().map(|word| normalizer.stem(word)));
                }
            }
        }

        Self { sets }
    }

    /// Per-category match counts over a normalized token stream
    ///
    /// Returned in normative order; repeated tokens count repeatedly.
    pub fn score(&self, tokens: &[String]) -> Vec<(Category, usize)> {
        self.sets
            .iter()
            .map(|(category, stems)| {
                let count = tokens
                    .iter()
                    .filter(|token| stems.contains(token.as_str()))
                    .count();
                (*category, count)
            })
            .collect()
    }
}

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Complaint category
///
/// The variant order is normative: scoring ties are broken by the first
/// category in this order, and `Ord` follows it, so maps keyed by category
/// iterate deterministically. String forms are the wire/display names used
/// by the surrounding system.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    Display,
)]
pub enum Category {
    #[strum(serialize = "IT Issues")]
    #[serde(rename = "IT Issues")]
    ItIssues,

    #[strum(serialize = "Hostel Management")]
    #[serde(rename = "Hostel Management")]
    HostelManagement,

    Academics,

    Administration,

    Library,

    #[strum(serialize = "Sports & Recreation")]
    #[serde(rename = "Sports & Recreation")]
    SportsRecreation,

    Other,
}

impl Category {
    /// All categories in normative order
    pub const ALL: [Category; 7] = [
        Category::ItIssues,
        Category::HostelManagement,
        Category::Academics,
        Category::Administration,
        Category::Library,
        Category::SportsRecreation,
        Category::Other,
    ];
}

/// Complaint priority level
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    Display,
)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Resolution-time multiplier applied by the predictor
    pub fn multiplier(&self) -> f64 {
        match self {
            Priority::High => 0.5,
            Priority::Medium => 1.0,
            Priority::Low => 1.5,
        }
    }

    /// Map an urgency score in [0, 1] to a priority tier
    pub fn from_urgency(urgency: f64) -> Self {
        if urgency >= 0.6 {
            Priority::High
        } else if urgency >= 0.3 {
            Priority::Medium
        } else {
            Priority::Low
        }
    }
}

/// Complaint lifecycle status, as recorded by the surrounding system
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
pub enum ComplaintStatus {
    Pending,

    #[strum(serialize = "In Progress")]
    #[serde(rename = "In Progress")]
    InProgress,

    Resolved,
}

/// Sentiment label derived from polarity
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SentimentLabel {
    Negative,
    Neutral,
    Positive,
}

impl SentimentLabel {
    /// Map a polarity score in [-1, 1] to a label
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity < -0.1 {
            SentimentLabel::Negative
        } else if polarity > 0.1 {
            SentimentLabel::Positive
        } else {
            SentimentLabel::Neutral
        }
    }
}

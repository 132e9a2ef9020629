use crate::models::{Category, ComplaintStatus};
use serde::{Deserialize, Serialize};

/// Historical complaint record supplied by the caller for statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintRecord {
    /// Assigned category
    pub category: Category,

    /// Lifecycle status
    pub status: ComplaintStatus,

    /// Actual resolution time in hours, once known
    pub resolution_time_hours: Option<f64>,
}

impl ComplaintRecord {
    /// Create a record with no resolution time
    pub fn new(category: Category, status: ComplaintStatus) -> Self {
        Self {
            category,
            status,
            resolution_time_hours: None,
        }
    }

    /// Set the recorded resolution time
    pub fn with_resolution_time(mut self, hours: f64) -> Self {
        self.resolution_time_hours = Some(hours);
        self
    }

    /// Resolved and carrying a recorded time (zero hours counts)
    pub fn is_resolved_with_time(&self) -> bool {
        self.status == ComplaintStatus::Resolved && self.resolution_time_hours.is_some()
    }
}

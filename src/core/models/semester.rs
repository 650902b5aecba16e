//! Semester result model

use crate::core::models::CourseRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Canonical level/term labels used by the institution, in academic order
pub const SEMESTER_LABELS: [&str; 8] = [
    "Level 1 - Term 1",
    "Level 1 - Term 2",
    "Level 2 - Term 1",
    "Level 2 - Term 2",
    "Level 3 - Term 1",
    "Level 3 - Term 2",
    "Level 4 - Term 1",
    "Level 4 - Term 2",
];

/// One semester's saved results
///
/// `cgpa` and `total_credits` are derived figures written back by the engine
/// whenever the course list changes; they are never edited directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemesterResult {
    /// Semester label (opaque; typically one of [`SEMESTER_LABELS`])
    pub semester: String,

    /// Semester CGPA, recomputed on save (full precision)
    #[serde(default)]
    pub cgpa: f64,

    /// Total credit hours of valid courses this semester, recomputed on save
    #[serde(default)]
    pub total_credits: f64,

    /// When this semester's results were last modified
    pub updated_at: DateTime<Utc>,

    /// Courses taken this semester; kept last so the record file reads
    /// header-then-rows
    #[serde(default)]
    pub courses: Vec<CourseRecord>,
}

impl SemesterResult {
    /// Create an empty result set for a semester
    #[must_use]
    pub fn new(semester: String) -> Self {
        Self {
            semester,
            cgpa: 0.0,
            total_credits: 0.0,
            updated_at: Utc::now(),
            courses: Vec::new(),
        }
    }

    /// Mark the result set as modified now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

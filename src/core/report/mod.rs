//! Transcript report generation
//!
//! Renders a student's saved results into a shareable document. Reports are
//! a presentation boundary, so every CGPA figure they show goes through the
//! truncating formatter.

pub mod formats;

use crate::core::aggregate::{self, CgpaSummary};
use crate::core::models::{SemesterResult, StudentRecord};
use crate::core::planner::{self, Projection};
use chrono::{DateTime, Utc};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
///
/// Aggregates everything a report needs so templates have a single source
/// of truth; all derived figures are recomputed here from the raw courses.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Student record being reported
    pub student: &'a StudentRecord,
    /// Overall aggregate across all semesters (flattened, credit-weighted)
    pub overall: CgpaSummary,
    /// Target projection, when a target is set and semesters remain
    pub projection: Option<Projection>,
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
}

impl<'a> ReportContext<'a> {
    /// Build a report context from a student record
    ///
    /// # Arguments
    /// * `student` - The record to report on
    /// * `fallback_semester_credits` - Planner fallback from configuration
    #[must_use]
    pub fn new(student: &'a StudentRecord, fallback_semester_credits: f64) -> Self {
        let overall = aggregate::summarize_overall(&student.semester_results);
        let projection =
            planner::required_cgpa(&student.planning_state(fallback_semester_credits));

        Self {
            student,
            overall,
            projection,
            generated_at: Utc::now(),
        }
    }

    /// Display name: the student's name if set, otherwise the student id
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.student
            .name
            .as_deref()
            .unwrap_or(&self.student.student_id)
    }

    /// Per-semester results paired with freshly computed aggregates
    #[must_use]
    pub fn semester_summaries(&self) -> Vec<(&SemesterResult, CgpaSummary)> {
        self.student
            .semester_results
            .iter()
            .map(|result| (result, aggregate::summarize(&result.courses)))
            .collect()
    }
}

/// Common interface for report format implementations
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

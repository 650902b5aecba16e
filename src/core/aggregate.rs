//! CGPA aggregation over course records
//!
//! The aggregator is a pure function of its input: it filters out invalid
//! rows, sums credits and grade points, and divides. Two credit figures come
//! out of it and they are not interchangeable: `counted_credits` is the CGPA
//! denominator and excludes F-graded courses; `total_credits` is the simple
//! sum over all valid courses and is the figure shown and stored per
//! semester.

use crate::core::grading;
use crate::core::models::{CourseRecord, SemesterResult};
use serde::{Deserialize, Serialize};

/// Aggregate result over a set of course records
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CgpaSummary {
    /// Credit-weighted grade point average, full precision
    pub cgpa: f64,
    /// Credits in the CGPA denominator; F-graded courses excluded
    pub counted_credits: f64,
    /// Credits of all valid courses regardless of grade; the display figure
    pub total_credits: f64,
    /// Sum of credit x grade point over valid courses (F contributes zero)
    pub total_grade_points: f64,
    /// Number of courses that passed the validity filter
    pub valid_course_count: usize,
}

impl CgpaSummary {
    /// The all-zero summary produced by an empty course list
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cgpa: 0.0,
            counted_credits: 0.0,
            total_credits: 0.0,
            total_grade_points: 0.0,
            valid_course_count: 0,
        }
    }
}

fn summarize_iter<'a, I>(courses: I) -> CgpaSummary
where
    I: IntoIterator<Item = &'a CourseRecord>,
{
    let mut summary = CgpaSummary::empty();

    for course in courses {
        let Some(credit) = course.valid_credit() else {
            continue;
        };
        let Some(info) = grading::lookup(&course.grade) else {
            continue;
        };

        summary.valid_course_count += 1;
        summary.total_credits += credit;
        summary.total_grade_points += credit * info.point;
        if !grading::is_failing(&course.grade) {
            summary.counted_credits += credit;
        }
    }

    if summary.counted_credits > 0.0 {
        summary.cgpa = summary.total_grade_points / summary.counted_credits;
    }

    summary
}

/// Aggregate one semester's course list
///
/// Invalid rows (unparseable or non-positive credit, unrecognized grade) are
/// dropped without error. Empty input and all-F input both yield a zero CGPA;
/// division by zero never escapes.
#[must_use]
pub fn summarize(courses: &[CourseRecord]) -> CgpaSummary {
    summarize_iter(courses)
}

/// Aggregate across all semesters by flattening their course lists
///
/// This is the same computation as [`summarize`] applied to the
/// concatenation of every semester's courses. It is NOT the mean of the
/// per-semester averages; semesters with more credits weigh more.
#[must_use]
pub fn summarize_overall(semesters: &[SemesterResult]) -> CgpaSummary {
    summarize_iter(semesters.iter().flat_map(|result| result.courses.iter()))
}

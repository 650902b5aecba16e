//! Import of result tables pasted from the student portal
//!
//! The portal's result page copies out as tab-separated text, one course per
//! line: course code, credit, course title, sessional flag, letter grade.
//! Imported rows pass the same validity filter as manually entered courses;
//! the engine does not care where a record came from.

use crate::core::grading;
use crate::core::models::{CourseRecord, CourseType, CreditValue};
use std::error::Error;
use std::fmt;

/// Failure to extract any courses from pasted result text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// The pasted text was empty or whitespace
    EmptyInput,
    /// No line parsed into a valid course row
    NoValidRows,
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "No result data to import"),
            Self::NoValidRows => {
                write!(f, "No valid courses found; check the pasted format")
            }
        }
    }
}

impl Error for ImportError {}

/// Parse a pasted result table into course records
///
/// A leading header line containing "Course Code" is skipped. Every other
/// line is split on tabs and trimmed; lines with at least five fields are
/// considered, taking the course code from the first field, credit from the
/// second, sessional flag ("yes"/"no", case-insensitive) from the fourth,
/// and grade from the fifth. Rows with an empty code, unparseable credit, or
/// unrecognized grade are skipped. Imported courses are marked as regular
/// attempts.
///
/// # Errors
/// Returns an error only when the input is empty or no row survives the
/// filter; individual malformed rows are dropped silently.
pub fn parse_result_table(text: &str) -> Result<Vec<CourseRecord>, ImportError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ImportError::EmptyInput);
    }

    let mut courses = Vec::new();

    for (index, line) in trimmed.lines().enumerate() {
        if index == 0 && line.contains("Course Code") {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
        if fields.len() < 5 {
            continue;
        }

        let course_code = fields[0];
        let Ok(credit) = fields[1].parse::<f64>() else {
            continue;
        };
        let sessional = fields[3].eq_ignore_ascii_case("yes");
        let grade = fields[4];

        if course_code.is_empty() || !credit.is_finite() || grading::lookup(grade).is_none() {
            continue;
        }

        courses.push(CourseRecord {
            course_code: course_code.to_string(),
            credit: CreditValue::Number(credit),
            grade: grade.to_string(),
            sessional,
            course_type: CourseType::Regular,
        });
    }

    if courses.is_empty() {
        return Err(ImportError::NoValidRows);
    }

    Ok(courses)
}

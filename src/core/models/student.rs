//! Student record model and email-based registration

use crate::core::aggregate;
use crate::core::models::{CourseRecord, SemesterResult};
use crate::core::planner::PlanningState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Department codes embedded in student email addresses
pub const DEPARTMENT_CODES: &[(&str, &str)] = &[
    ("01", "Civil Engineering"),
    ("02", "Electrical & Electronic Engineering"),
    ("03", "Mechanical Engineering"),
    ("04", "Computer Science & Engineering"),
    ("05", "Urban & Regional Planning"),
    ("06", "Architecture"),
    ("07", "Petroleum & Mining Engineering"),
    ("08", "Electronics & Telecommunication Engineering"),
    ("09", "Mechatronics & Industrial Engineering"),
    ("10", "Water Resources Engineering"),
    ("11", "Biomedical Engineering"),
    ("12", "Materials and Metallurgical Engineering"),
    ("13", "Nuclear Engineering"),
];

/// Mail domain for university-issued student addresses
pub const STUDENT_EMAIL_DOMAIN: &str = "student.cuet.ac.bd";

/// Default number of semesters in a degree plan
pub const DEFAULT_TOTAL_SEMESTERS: u32 = 8;

/// Identity details derived from a university-issued email address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailInfo {
    /// Student id (the email local part, e.g., "u2104042")
    pub student_id: String,
    /// Admission year (e.g., "2021")
    pub year: String,
    /// Two-digit department code (e.g., "04")
    pub department_code: String,
    /// Department name resolved from the code table
    pub department: String,
    /// Three-digit roll number within the department
    pub roll_number: String,
}

/// Resolve a department code to its name
#[must_use]
pub fn department_name(code: &str) -> Option<&'static str> {
    DEPARTMENT_CODES
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, name)| *name)
}

/// Parse and validate a university-issued student email
///
/// The local part must be `u` followed by a two-digit year, a two-digit
/// department code from the code table, and a three-digit roll number; the
/// domain must match [`STUDENT_EMAIL_DOMAIN`] exactly.
///
/// # Errors
/// Returns a user-facing message when the address does not match that shape
/// or names an unknown department.
pub fn parse_student_email(email: &str) -> Result<EmailInfo, String> {
    let invalid = || format!("'{email}' is not a valid student email (expected uYYDDRRR@{STUDENT_EMAIL_DOMAIN})");

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if domain != STUDENT_EMAIL_DOMAIN {
        return Err(invalid());
    }

    let digits = local.strip_prefix('u').ok_or_else(invalid)?;
    if digits.len() != 7 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let year_suffix = &digits[0..2];
    let department_code = &digits[2..4];
    let roll_number = &digits[4..7];

    let department = department_name(department_code)
        .ok_or_else(|| format!("Unknown department code '{department_code}' in '{email}'"))?;

    Ok(EmailInfo {
        student_id: local.to_string(),
        year: format!("20{year_suffix}"),
        department_code: department_code.to_string(),
        department: department.to_string(),
        roll_number: roll_number.to_string(),
    })
}

/// A student's persisted academic record
///
/// `overall_cgpa` and `total_credits` are projections of the course data,
/// recomputed through the aggregator on every save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// University-issued email address
    pub email: String,
    /// Student id derived from the email local part
    pub student_id: String,
    /// Admission year
    pub year: String,
    /// Two-digit department code
    pub department_code: String,
    /// Department name
    pub department: String,
    /// Roll number within the department
    pub roll_number: String,
    /// Display name, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Overall CGPA across all semesters, recomputed on save
    #[serde(default)]
    pub overall_cgpa: f64,
    /// Total valid credit hours across all semesters, recomputed on save
    #[serde(default)]
    pub total_credits: f64,
    /// Target CGPA for planning, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_cgpa: Option<f64>,
    /// Number of semesters in the degree plan
    #[serde(default = "default_total_semesters")]
    pub total_semesters: u32,
    /// When the record was created
    pub created_at: DateTime<Utc>,
    /// When the record was last modified
    pub updated_at: DateTime<Utc>,
    /// Saved results, one entry per semester; kept last so the record file
    /// reads header-then-semesters
    #[serde(default)]
    pub semester_results: Vec<SemesterResult>,
}

const fn default_total_semesters() -> u32 {
    DEFAULT_TOTAL_SEMESTERS
}

impl StudentRecord {
    /// Register a new student from a university email
    ///
    /// # Errors
    /// Returns an error when the email is not a valid student address.
    pub fn from_email(email: &str, name: Option<String>) -> Result<Self, String> {
        let info = parse_student_email(email)?;
        let now = Utc::now();

        Ok(Self {
            email: email.to_string(),
            student_id: info.student_id,
            year: info.year,
            department_code: info.department_code,
            department: info.department,
            roll_number: info.roll_number,
            name,
            overall_cgpa: 0.0,
            total_credits: 0.0,
            target_cgpa: None,
            total_semesters: DEFAULT_TOTAL_SEMESTERS,
            created_at: now,
            updated_at: now,
            semester_results: Vec::new(),
        })
    }

    /// Find a semester's results by label
    #[must_use]
    pub fn find_semester(&self, semester: &str) -> Option<&SemesterResult> {
        self.semester_results
            .iter()
            .find(|result| result.semester == semester)
    }

    /// Replace a semester's course list, creating the semester if needed
    pub fn upsert_semester(&mut self, semester: &str, courses: Vec<CourseRecord>) {
        if let Some(existing) = self
            .semester_results
            .iter_mut()
            .find(|result| result.semester == semester)
        {
            existing.courses = courses;
            existing.touch();
        } else {
            let mut result = SemesterResult::new(semester.to_string());
            result.courses = courses;
            self.semester_results.push(result);
        }
    }

    /// Append courses to a semester, creating the semester if needed
    pub fn add_courses(&mut self, semester: &str, courses: Vec<CourseRecord>) {
        if let Some(existing) = self
            .semester_results
            .iter_mut()
            .find(|result| result.semester == semester)
        {
            existing.courses.extend(courses);
            existing.touch();
        } else {
            self.upsert_semester(semester, courses);
        }
    }

    /// Delete a semester's results
    ///
    /// # Returns
    /// `true` if the semester existed and was removed
    pub fn remove_semester(&mut self, semester: &str) -> bool {
        let before = self.semester_results.len();
        self.semester_results
            .retain(|result| result.semester != semester);
        self.semester_results.len() != before
    }

    /// Recompute every derived aggregate from the raw course data
    ///
    /// Each semester's `cgpa`/`total_credits` and the record-level
    /// `overall_cgpa`/`total_credits` are rewritten from the aggregator.
    /// The overall figures come from the flattened course list, not from
    /// averaging semester averages.
    pub fn refresh_aggregates(&mut self) {
        for result in &mut self.semester_results {
            let summary = aggregate::summarize(&result.courses);
            result.cgpa = summary.cgpa;
            result.total_credits = summary.total_credits;
        }

        let overall = aggregate::summarize_overall(&self.semester_results);
        self.overall_cgpa = overall.cgpa;
        self.total_credits = overall.total_credits;
        self.updated_at = Utc::now();
    }

    /// Snapshot the planning inputs for the projector
    ///
    /// # Arguments
    /// * `fallback_semester_credits` - Per-semester credit estimate used when
    ///   no semester has been completed yet
    #[must_use]
    pub fn planning_state(&self, fallback_semester_credits: f64) -> PlanningState {
        PlanningState {
            current_cgpa: self.overall_cgpa,
            current_credits: self.total_credits,
            semesters_completed: u32::try_from(self.semester_results.len()).unwrap_or(u32::MAX),
            total_semesters: self.total_semesters,
            target_cgpa: self.target_cgpa,
            fallback_semester_credits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_email() {
        let info = parse_student_email("u2104042@student.cuet.ac.bd").expect("valid email");

        assert_eq!(info.student_id, "u2104042");
        assert_eq!(info.year, "2021");
        assert_eq!(info.department_code, "04");
        assert_eq!(info.department, "Computer Science & Engineering");
        assert_eq!(info.roll_number, "042");
    }

    #[test]
    fn test_parse_rejects_wrong_domain() {
        assert!(parse_student_email("u2104042@example.com").is_err());
        assert!(parse_student_email("u2104042@cuet.ac.bd").is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_local_part() {
        assert!(parse_student_email("2104042@student.cuet.ac.bd").is_err());
        assert!(parse_student_email("u210404@student.cuet.ac.bd").is_err());
        assert!(parse_student_email("u21040422@student.cuet.ac.bd").is_err());
        assert!(parse_student_email("u21o4042@student.cuet.ac.bd").is_err());
        assert!(parse_student_email("not-an-email").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_department() {
        let err = parse_student_email("u2199042@student.cuet.ac.bd").unwrap_err();
        assert!(err.contains("department code '99'"), "got: {err}");
    }

    #[test]
    fn test_register_from_email() {
        let record =
            StudentRecord::from_email("u2002013@student.cuet.ac.bd", Some("Rahim".to_string()))
                .expect("valid email");

        assert_eq!(record.student_id, "u2002013");
        assert_eq!(record.year, "2020");
        assert_eq!(record.department, "Electrical & Electronic Engineering");
        assert_eq!(record.name.as_deref(), Some("Rahim"));
        assert_eq!(record.total_semesters, DEFAULT_TOTAL_SEMESTERS);
        assert!(record.semester_results.is_empty());
        assert!(record.target_cgpa.is_none());
    }

    #[test]
    fn test_upsert_and_remove_semester() {
        let mut record =
            StudentRecord::from_email("u2104042@student.cuet.ac.bd", None).expect("valid email");

        record.upsert_semester(
            "Level 1 - Term 1",
            vec![CourseRecord::new(
                "CSE-141".to_string(),
                3.0.into(),
                "A".to_string(),
            )],
        );
        assert_eq!(record.semester_results.len(), 1);

        // Upsert replaces, not appends
        record.upsert_semester(
            "Level 1 - Term 1",
            vec![
                CourseRecord::new("CSE-141".to_string(), 3.0.into(), "A+".to_string()),
                CourseRecord::new("MATH-141".to_string(), 3.0.into(), "B".to_string()),
            ],
        );
        assert_eq!(record.semester_results.len(), 1);
        assert_eq!(record.find_semester("Level 1 - Term 1").unwrap().courses.len(), 2);

        assert!(record.remove_semester("Level 1 - Term 1"));
        assert!(!record.remove_semester("Level 1 - Term 1"));
        assert!(record.semester_results.is_empty());
    }

    #[test]
    fn test_refresh_aggregates_rewrites_derived_fields() {
        let mut record =
            StudentRecord::from_email("u2104042@student.cuet.ac.bd", None).expect("valid email");

        record.upsert_semester(
            "Level 1 - Term 1",
            vec![
                CourseRecord::new("CSE-141".to_string(), 3.0.into(), "A+".to_string()),
                CourseRecord::new("MATH-141".to_string(), 3.0.into(), "B".to_string()),
            ],
        );
        // Stale values on purpose
        record.overall_cgpa = 1.23;
        record.total_credits = 99.0;

        record.refresh_aggregates();

        let term = record.find_semester("Level 1 - Term 1").unwrap();
        assert!((term.total_credits - 6.0).abs() < 1e-9);
        assert!((term.cgpa - 3.5).abs() < 1e-9);
        assert!((record.overall_cgpa - 3.5).abs() < 1e-9);
        assert!((record.total_credits - 6.0).abs() < 1e-9);
    }
}

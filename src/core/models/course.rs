//! Course record model

use crate::core::grading;
use serde::{Deserialize, Serialize};

/// How a course attempt relates to earlier attempts at the same course.
///
/// Carried through for record keeping; no averaging rule depends on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseType {
    /// First attempt
    #[default]
    Regular,
    /// Repeat of a failed course
    Retake,
    /// Repeat of a passed course to improve the grade
    Improvement,
}

impl CourseType {
    /// Parse a course type from its lowercase name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "regular" => Some(Self::Regular),
            "retake" => Some(Self::Retake),
            "improvement" => Some(Self::Improvement),
            _ => None,
        }
    }
}

/// Credit hours as they arrive from callers: already numeric, or free text
/// that still needs coercion.
///
/// All credit coercion goes through [`CreditValue::to_f64`] so every call
/// site shares one parsing and NaN policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreditValue {
    /// Numeric credit hours
    Number(f64),
    /// Unparsed text input (e.g., from a form or pasted table)
    Text(String),
}

impl CreditValue {
    /// Coerce the credit to a number
    ///
    /// Text is trimmed before parsing. Returns `None` for unparseable text
    /// and for non-finite values.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for CreditValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for CreditValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One graded course within a semester
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Course code (e.g., "CSE-141"); opaque, not validated for format
    pub course_code: String,

    /// Credit hours weight
    pub credit: CreditValue,

    /// Letter grade symbol; must be in the grading scale to count
    pub grade: String,

    /// Whether this is a sessional (lab) course; informational only
    #[serde(default)]
    pub sessional: bool,

    /// Attempt type; informational only
    #[serde(default)]
    pub course_type: CourseType,
}

impl CourseRecord {
    /// Create a new regular, non-sessional course record
    #[must_use]
    pub fn new(course_code: String, credit: CreditValue, grade: String) -> Self {
        Self {
            course_code,
            credit,
            grade,
            sessional: false,
            course_type: CourseType::Regular,
        }
    }

    /// Credit hours if this course is valid for aggregation
    ///
    /// A course counts only when its coerced credit is finite and positive
    /// and its grade is in the grading scale. Returns `None` otherwise;
    /// invalid courses are dropped silently by the aggregator.
    #[must_use]
    pub fn valid_credit(&self) -> Option<f64> {
        let credit = self.credit.to_f64()?;
        (credit > 0.0 && grading::lookup(&self.grade).is_some()).then_some(credit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = CourseRecord::new("CSE-141".to_string(), 3.0.into(), "A+".to_string());

        assert_eq!(course.course_code, "CSE-141");
        assert_eq!(course.grade, "A+");
        assert!(!course.sessional);
        assert_eq!(course.course_type, CourseType::Regular);
        assert!((course.valid_credit().unwrap() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_credit_coercion_from_text() {
        assert!((CreditValue::from("3").to_f64().unwrap() - 3.0).abs() < f64::EPSILON);
        assert!((CreditValue::from(" 1.5 ").to_f64().unwrap() - 1.5).abs() < f64::EPSILON);
        assert!(CreditValue::from("abc").to_f64().is_none());
        assert!(CreditValue::from("").to_f64().is_none());
        assert!(CreditValue::from("NaN").to_f64().is_none());
        assert!(CreditValue::from("inf").to_f64().is_none());
    }

    #[test]
    fn test_valid_credit_rejects_bad_rows() {
        let bad_credit = CourseRecord::new("X".to_string(), "abc".into(), "A".to_string());
        assert!(bad_credit.valid_credit().is_none());

        let zero_credit = CourseRecord::new("X".to_string(), 0.0.into(), "A".to_string());
        assert!(zero_credit.valid_credit().is_none());

        let negative_credit = CourseRecord::new("X".to_string(), (-3.0).into(), "A".to_string());
        assert!(negative_credit.valid_credit().is_none());

        let unknown_grade = CourseRecord::new("X".to_string(), 3.0.into(), "Z".to_string());
        assert!(unknown_grade.valid_credit().is_none());
    }

    #[test]
    fn test_failing_grade_is_still_valid() {
        // F-graded courses pass the validity filter; the aggregator decides
        // how their credit is counted.
        let failed = CourseRecord::new("X".to_string(), 3.0.into(), "F".to_string());
        assert!((failed.valid_credit().unwrap() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_course_type_from_name() {
        assert_eq!(CourseType::from_name("regular"), Some(CourseType::Regular));
        assert_eq!(CourseType::from_name("Retake"), Some(CourseType::Retake));
        assert_eq!(
            CourseType::from_name("IMPROVEMENT"),
            Some(CourseType::Improvement)
        );
        assert_eq!(CourseType::from_name("audit"), None);
    }
}

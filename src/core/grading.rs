//! Grading scale for the 4.00 letter-grade system
//!
//! The scale is a static lookup table, not derived data. Grade symbols are
//! matched exactly; anything not in the table is treated as unrecognized and
//! excluded upstream.

/// Grade point value and marks threshold for one letter grade
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeInfo {
    /// Numeric grade point value (0.00 to 4.00)
    pub point: f64,
    /// Minimum percentage of marks awarded this grade
    pub percentage: u32,
}

/// Top of the grading scale
pub const SCALE_MAX: f64 = 4.0;

/// The letter grade awarded for a failed course
pub const FAILING_GRADE: &str = "F";

/// Static grading scale, ordered best to worst
const GRADING_SCALE: &[(&str, GradeInfo)] = &[
    (
        "A+",
        GradeInfo {
            point: 4.0,
            percentage: 80,
        },
    ),
    (
        "A",
        GradeInfo {
            point: 3.75,
            percentage: 75,
        },
    ),
    (
        "A-",
        GradeInfo {
            point: 3.5,
            percentage: 70,
        },
    ),
    (
        "B+",
        GradeInfo {
            point: 3.25,
            percentage: 65,
        },
    ),
    (
        "B",
        GradeInfo {
            point: 3.0,
            percentage: 60,
        },
    ),
    (
        "B-",
        GradeInfo {
            point: 2.75,
            percentage: 55,
        },
    ),
    (
        "C+",
        GradeInfo {
            point: 2.5,
            percentage: 50,
        },
    ),
    (
        "C",
        GradeInfo {
            point: 2.25,
            percentage: 45,
        },
    ),
    (
        "D",
        GradeInfo {
            point: 2.0,
            percentage: 40,
        },
    ),
    (
        "F",
        GradeInfo {
            point: 0.0,
            percentage: 0,
        },
    ),
];

/// Look up a letter grade in the grading scale
///
/// # Arguments
/// * `grade` - Letter grade symbol (e.g., "A+", "B-")
///
/// # Returns
/// The grade info, or `None` if the symbol is not in the scale
#[must_use]
pub fn lookup(grade: &str) -> Option<GradeInfo> {
    GRADING_SCALE
        .iter()
        .find(|(symbol, _)| *symbol == grade)
        .map(|(_, info)| *info)
}

/// Grade point value for a letter grade, if recognized
#[must_use]
pub fn grade_point(grade: &str) -> Option<f64> {
    lookup(grade).map(|info| info.point)
}

/// All recognized grade symbols, ordered best to worst
#[must_use]
pub fn grade_symbols() -> Vec<&'static str> {
    GRADING_SCALE.iter().map(|(symbol, _)| *symbol).collect()
}

/// Whether a grade symbol is the failing grade
#[must_use]
pub fn is_failing(grade: &str) -> bool {
    grade == FAILING_GRADE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_known_grades() {
        let a_plus = lookup("A+").expect("A+ is in the scale");
        assert!((a_plus.point - 4.0).abs() < f64::EPSILON);
        assert_eq!(a_plus.percentage, 80);

        let b_minus = lookup("B-").expect("B- is in the scale");
        assert!((b_minus.point - 2.75).abs() < f64::EPSILON);
        assert_eq!(b_minus.percentage, 55);
    }

    #[test]
    fn rejects_unknown_grades() {
        assert!(lookup("E").is_none());
        assert!(lookup("a+").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("A +").is_none());
    }

    #[test]
    fn failing_grade_has_zero_points() {
        let f = lookup(FAILING_GRADE).expect("F is in the scale");
        assert!(f.point.abs() < f64::EPSILON);
        assert_eq!(f.percentage, 0);
        assert!(is_failing("F"));
        assert!(!is_failing("D"));
    }

    #[test]
    fn scale_is_ordered_best_to_worst() {
        let symbols = grade_symbols();
        assert_eq!(symbols.first(), Some(&"A+"));
        assert_eq!(symbols.last(), Some(&"F"));
        assert_eq!(symbols.len(), 10);

        let points: Vec<f64> = symbols
            .iter()
            .filter_map(|symbol| grade_point(symbol))
            .collect();
        assert!(points.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn scale_max_matches_top_grade() {
        assert!((grade_point("A+").unwrap() - SCALE_MAX).abs() < f64::EPSILON);
    }
}

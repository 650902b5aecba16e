//! Record command handlers: add, import, and remove semester results

use super::resolve_student_id;
use cgpa_tracker::core::format::format_cgpa;
use cgpa_tracker::core::grading;
use cgpa_tracker::core::importer::parse_result_table;
use cgpa_tracker::core::models::{CourseRecord, CourseType, CreditValue};
use cgpa_tracker::core::store::RecordStore;
use cgpa_tracker::{error, info, verbose};
use std::fs;
use std::path::Path;

/// Add a single course to a semester
#[allow(clippy::too_many_arguments)]
pub fn add(
    store: &RecordStore,
    email: &str,
    semester: &str,
    course: &str,
    credit: &str,
    grade: &str,
    sessional: bool,
    course_type: &str,
) {
    let Some(student_id) = resolve_student_id(email) else {
        return;
    };

    let Some(course_type) = CourseType::from_name(course_type) else {
        eprintln!("✗ Unknown course type '{course_type}' (expected regular, retake, or improvement)");
        return;
    };

    if grading::lookup(grade).is_none() {
        eprintln!(
            "✗ Unknown grade '{grade}'; recognized grades: {}",
            grading::grade_symbols().join(", ")
        );
        return;
    }

    // Credit arrives as text; the engine's coercion decides validity.
    let credit = CreditValue::from(credit);
    if credit.to_f64().is_none() {
        eprintln!("✗ Credit must be a number");
        return;
    }

    let mut record = match store.load(&student_id) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("✗ {e}");
            return;
        }
    };

    let mut entry = CourseRecord::new(course.to_string(), credit, grade.to_string());
    entry.sessional = sessional;
    entry.course_type = course_type;

    record.add_courses(semester, vec![entry]);

    if let Err(e) = store.save(&mut record) {
        error!("Failed to save record for {student_id}: {e}");
        eprintln!("✗ {e}");
        return;
    }

    let summary = record
        .find_semester(semester)
        .map(|result| (result.cgpa, result.courses.len()));
    if let Some((cgpa, count)) = summary {
        println!(
            "✓ Added {course} to {semester} ({count} course(s), semester CGPA {})",
            format_cgpa(cgpa)
        );
    } else {
        println!("✓ Added {course} to {semester}");
    }
    verbose!("Overall CGPA is now {}", format_cgpa(record.overall_cgpa));
}

/// Import a semester's results from a pasted portal table
pub fn import(store: &RecordStore, email: &str, semester: &str, input_file: &Path) {
    let Some(student_id) = resolve_student_id(email) else {
        return;
    };

    let text = match fs::read_to_string(input_file) {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read {}: {e}", input_file.display());
            eprintln!("✗ Failed to read {}: {e}", input_file.display());
            return;
        }
    };

    let courses = match parse_result_table(&text) {
        Ok(courses) => courses,
        Err(e) => {
            eprintln!("✗ {e}");
            return;
        }
    };

    let mut record = match store.load(&student_id) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("✗ {e}");
            return;
        }
    };

    let count = courses.len();
    record.upsert_semester(semester, courses);

    if let Err(e) = store.save(&mut record) {
        error!("Failed to save record for {student_id}: {e}");
        eprintln!("✗ {e}");
        return;
    }

    info!("Imported {count} course(s) into {semester} for {student_id}");
    let semester_cgpa = record.find_semester(semester).map_or(0.0, |r| r.cgpa);
    println!(
        "✓ Imported {count} course(s) into {semester} (semester CGPA {})",
        format_cgpa(semester_cgpa)
    );
}

/// Delete a semester's results
pub fn remove(store: &RecordStore, email: &str, semester: &str) {
    let Some(student_id) = resolve_student_id(email) else {
        return;
    };

    let mut record = match store.load(&student_id) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("✗ {e}");
            return;
        }
    };

    if !record.remove_semester(semester) {
        eprintln!("✗ No results saved for '{semester}'");
        return;
    }

    if let Err(e) = store.save(&mut record) {
        error!("Failed to save record for {student_id}: {e}");
        eprintln!("✗ {e}");
        return;
    }

    println!(
        "✓ Removed {semester}; overall CGPA is now {}",
        format_cgpa(record.overall_cgpa)
    );
}

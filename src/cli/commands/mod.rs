//! Command handlers for the CLI

pub mod config;
pub mod record;
pub mod register;
pub mod report;
pub mod status;
pub mod target;

use cgpa_tracker::core::models::student::parse_student_email;

/// Resolve an email argument to a student id, or print the failure
///
/// Shared by every command that addresses a record by email.
pub fn resolve_student_id(email: &str) -> Option<String> {
    match parse_student_email(email) {
        Ok(info) => Some(info.student_id),
        Err(e) => {
            eprintln!("✗ {e}");
            None
        }
    }
}

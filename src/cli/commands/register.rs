//! Register command handler

use cgpa_tracker::core::models::StudentRecord;
use cgpa_tracker::core::store::RecordStore;
use cgpa_tracker::{error, info};

/// Create a new student record from a university email
pub fn run(store: &RecordStore, email: &str, name: Option<String>) {
    let mut record = match StudentRecord::from_email(email, name) {
        Ok(record) => record,
        Err(e) => {
            error!("Registration failed for {email}: {e}");
            eprintln!("✗ {e}");
            return;
        }
    };

    if store.exists(&record.student_id) {
        eprintln!(
            "✗ A record already exists for '{}' at {}",
            record.student_id,
            store.record_path(&record.student_id).display()
        );
        return;
    }

    if let Err(e) = store.save(&mut record) {
        error!("Failed to save new record for {}: {e}", record.student_id);
        eprintln!("✗ {e}");
        return;
    }

    info!("Registered {} ({})", record.student_id, record.department);
    println!(
        "✓ Registered {} ({}, admitted {})",
        record.student_id, record.department, record.year
    );
    println!(
        "  Record saved to: {}",
        store.record_path(&record.student_id).display()
    );
}

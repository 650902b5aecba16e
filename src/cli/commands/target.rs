//! Target command handler

use super::resolve_student_id;
use cgpa_tracker::config::Config;
use cgpa_tracker::core::format::format_cgpa;
use cgpa_tracker::core::grading;
use cgpa_tracker::core::planner::required_cgpa;
use cgpa_tracker::core::store::RecordStore;
use cgpa_tracker::error;

/// Set or clear the target CGPA and plan length
pub fn run(
    store: &RecordStore,
    config: &Config,
    email: &str,
    cgpa: Option<f64>,
    semesters: Option<u32>,
    clear: bool,
) {
    let Some(student_id) = resolve_student_id(email) else {
        return;
    };

    if clear && cgpa.is_some() {
        eprintln!("✗ --clear cannot be combined with --cgpa");
        return;
    }

    if let Some(target) = cgpa {
        if !(0.0..=grading::SCALE_MAX).contains(&target) {
            eprintln!(
                "✗ Target CGPA must be between 0.00 and {}",
                format_cgpa(grading::SCALE_MAX)
            );
            return;
        }
    }

    if let Some(total) = semesters {
        if total == 0 {
            eprintln!("✗ The degree plan needs at least 1 semester");
            return;
        }
    }

    let mut record = match store.load(&student_id) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("✗ {e}");
            return;
        }
    };

    if clear {
        record.target_cgpa = None;
    } else if cgpa.is_some() {
        record.target_cgpa = cgpa;
    }
    if let Some(total) = semesters {
        record.total_semesters = total;
    }

    if let Err(e) = store.save(&mut record) {
        error!("Failed to save record for {student_id}: {e}");
        eprintln!("✗ {e}");
        return;
    }

    match record.target_cgpa {
        None => println!("✓ Target CGPA cleared ({} semester plan)", record.total_semesters),
        Some(target) => {
            println!(
                "✓ Target CGPA set to {} ({} semester plan)",
                format_cgpa(target),
                record.total_semesters
            );

            let state = record.planning_state(config.planner.semester_credits);
            if let Some(projection) = required_cgpa(&state) {
                let verdict = if projection.achievable {
                    "achievable"
                } else {
                    "not achievable with perfect scores"
                };
                println!(
                    "  Requires {} over the remaining {} semester(s) ({verdict})",
                    format_cgpa(projection.required_cgpa),
                    projection.remaining_semesters
                );
            }
        }
    }
}

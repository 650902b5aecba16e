//! Status command handler

use super::resolve_student_id;
use cgpa_tracker::config::Config;
use cgpa_tracker::core::format::{format_cgpa, format_credits};
use cgpa_tracker::core::planner::required_cgpa;
use cgpa_tracker::core::store::RecordStore;

/// Show per-semester and overall standing with the target projection
pub fn run(store: &RecordStore, config: &Config, email: &str) {
    let Some(student_id) = resolve_student_id(email) else {
        return;
    };

    let record = match store.load(&student_id) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("✗ {e}");
            return;
        }
    };

    let display_name = record.name.as_deref().unwrap_or(&record.student_id);
    println!("\n=== Academic Record: {display_name} ===\n");
    println!("Department: {}", record.department);
    println!("Admitted:   {}", record.year);

    if record.semester_results.is_empty() {
        println!("\nNo semester results saved yet.");
    } else {
        println!();
        for result in &record.semester_results {
            println!(
                "{}: CGPA {} ({} credits, {} course(s))",
                result.semester,
                format_cgpa(result.cgpa),
                format_credits(result.total_credits),
                result.courses.len()
            );
        }
    }

    println!("\nOverall CGPA:  {}", format_cgpa(record.overall_cgpa));
    println!("Total Credits: {}", format_credits(record.total_credits));
    println!(
        "Semesters:     {} / {}",
        record.semester_results.len(),
        record.total_semesters
    );

    match record.target_cgpa {
        None => println!("Target CGPA:   not set"),
        Some(target) => {
            println!("Target CGPA:   {}", format_cgpa(target));

            let state = record.planning_state(config.planner.semester_credits);
            if let Some(projection) = required_cgpa(&state) {
                let verdict = if projection.achievable {
                    "achievable"
                } else {
                    "not achievable with perfect scores"
                };
                println!(
                    "Required:      {} over the remaining {} semester(s) ({verdict}, about {} further credits)",
                    format_cgpa(projection.required_cgpa),
                    projection.remaining_semesters,
                    format_credits(projection.estimated_remaining_credits)
                );
            } else {
                println!("Required:      nothing to project; all planned semesters are complete");
            }
        }
    }
    println!();
}

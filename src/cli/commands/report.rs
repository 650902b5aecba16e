//! Report command handler

use super::resolve_student_id;
use cgpa_tracker::config::Config;
use cgpa_tracker::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use cgpa_tracker::core::store::RecordStore;
use cgpa_tracker::{error, info};
use std::path::{Path, PathBuf};

/// Generate a transcript report for a student
pub fn run(
    store: &RecordStore,
    config: &Config,
    email: &str,
    output: Option<&Path>,
    format: &str,
) {
    let Some(student_id) = resolve_student_id(email) else {
        return;
    };

    let format: ReportFormat = match format.parse() {
        Ok(format) => format,
        Err(e) => {
            eprintln!("✗ {e}");
            return;
        }
    };

    let record = match store.load(&student_id) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("✗ {e}");
            return;
        }
    };

    let output_path: PathBuf = if let Some(path) = output {
        path.to_path_buf()
    } else {
        let reports_dir = PathBuf::from(&config.paths.reports_dir);
        if let Err(e) = std::fs::create_dir_all(&reports_dir) {
            eprintln!(
                "✗ Failed to create reports directory {}: {e}",
                reports_dir.display()
            );
            return;
        }
        reports_dir.join(format!("{student_id}_record.{}", format.extension()))
    };

    let ctx = ReportContext::new(&record, config.planner.semester_credits);

    let result = match format {
        ReportFormat::Markdown => MarkdownReporter::new().generate(&ctx, &output_path),
        ReportFormat::Html => HtmlReporter::new().generate(&ctx, &output_path),
    };

    match result {
        Ok(()) => {
            info!("Report generated: {}", output_path.display());
            println!("✓ Report generated: {}", output_path.display());
        }
        Err(e) => {
            error!("Report generation failed for {student_id}: {e}");
            eprintln!(
                "✗ Failed to generate report at {}: {e}",
                output_path.display()
            );
        }
    }
}

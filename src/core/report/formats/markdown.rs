//! Markdown report generator
//!
//! Generates transcript reports in Markdown format. These reports render
//! well in GitHub, GitLab, and VS Code.

use crate::core::format::{format_cgpa, format_credits};
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        // Substitute header metadata
        output = output.replace("{{student_name}}", ctx.display_name());
        output = output.replace("{{student_id}}", &ctx.student.student_id);
        output = output.replace("{{email}}", &ctx.student.email);
        output = output.replace("{{department}}", &ctx.student.department);
        output = output.replace("{{year}}", &ctx.student.year);

        // Substitute overall standing
        output = output.replace("{{overall_cgpa}}", &format_cgpa(ctx.overall.cgpa));
        output = output.replace(
            "{{total_credits}}",
            &format_credits(ctx.overall.total_credits),
        );
        output = output.replace(
            "{{semesters_completed}}",
            &ctx.student.semester_results.len().to_string(),
        );
        output = output.replace(
            "{{total_semesters}}",
            &ctx.student.total_semesters.to_string(),
        );
        output = output.replace(
            "{{generated_at}}",
            &ctx.generated_at.format("%Y-%m-%d").to_string(),
        );

        // Generate per-semester sections
        let semester_sections = Self::generate_semester_sections(ctx);
        output = output.replace("{{semester_sections}}", &semester_sections);

        // Generate target projection section
        let target_section = Self::generate_target_section(ctx);
        output = output.replace("{{target_section}}", &target_section);

        output
    }

    /// Generate one table per saved semester
    fn generate_semester_sections(ctx: &ReportContext) -> String {
        let mut sections = String::new();

        if ctx.student.semester_results.is_empty() {
            sections.push_str("_No semester results saved yet._\n");
            return sections;
        }

        for (result, summary) in ctx.semester_summaries() {
            let _ = writeln!(sections, "### {}\n", result.semester);
            sections.push_str("| Course | Credit | Grade | Sessional |\n");
            sections.push_str("|---|---|---|---|\n");

            for course in &result.courses {
                let credit = course
                    .credit
                    .to_f64()
                    .map_or_else(|| "-".to_string(), format_credits);
                let sessional = if course.sessional { "Yes" } else { "No" };
                let _ = writeln!(
                    sections,
                    "| {} | {} | {} | {} |",
                    course.course_code, credit, course.grade, sessional
                );
            }

            let _ = writeln!(
                sections,
                "\nSemester CGPA: **{}** ({} credits)\n",
                format_cgpa(summary.cgpa),
                format_credits(summary.total_credits)
            );
        }

        sections
    }

    /// Generate the target projection section
    fn generate_target_section(ctx: &ReportContext) -> String {
        let Some(target) = ctx.student.target_cgpa else {
            return "_No target CGPA set._\n".to_string();
        };

        let mut section = String::new();
        let _ = writeln!(section, "Target CGPA: **{}**\n", format_cgpa(target));

        if let Some(projection) = &ctx.projection {
            let verdict = if projection.achievable {
                "Achievable"
            } else {
                "Not achievable with perfect scores"
            };
            let _ = writeln!(
                section,
                "Required average over the remaining {} semester(s): **{}** ({verdict}, assuming about {} further credits)",
                projection.remaining_semesters,
                format_cgpa(projection.required_cgpa),
                format_credits(projection.estimated_remaining_credits)
            );
        } else {
            let _ = writeln!(section, "All planned semesters are complete.");
        }

        section
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        fs::write(output_path, content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{CourseRecord, StudentRecord};

    fn sample_context_record() -> StudentRecord {
        let mut record =
            StudentRecord::from_email("u2104042@student.cuet.ac.bd", Some("Karim".to_string()))
                .expect("valid email");
        record.upsert_semester(
            "Level 1 - Term 1",
            vec![
                CourseRecord::new("CSE-141".to_string(), 3.0.into(), "A".to_string()),
                CourseRecord::new("MATH-141".to_string(), 3.0.into(), "A-".to_string()),
            ],
        );
        record.target_cgpa = Some(3.8);
        record.refresh_aggregates();
        record
    }

    #[test]
    fn renders_student_and_semester_data() {
        let record = sample_context_record();
        let ctx = ReportContext::new(&record, 20.0);

        let output = MarkdownReporter::new().render(&ctx).expect("render");

        assert!(output.contains("Karim"));
        assert!(output.contains("u2104042"));
        assert!(output.contains("Level 1 - Term 1"));
        assert!(output.contains("CSE-141"));
        // (3.75*3 + 3.5*3) / 6 = 3.625, truncated
        assert!(output.contains("3.62"));
        assert!(!output.contains("{{"), "unsubstituted placeholder left");
    }

    #[test]
    fn renders_projection_when_target_set() {
        let record = sample_context_record();
        let ctx = ReportContext::new(&record, 20.0);

        let output = MarkdownReporter::new().render(&ctx).expect("render");
        assert!(output.contains("Target CGPA"));
        assert!(output.contains("3.80"));
    }

    #[test]
    fn renders_placeholder_without_results() {
        let record = StudentRecord::from_email("u2104042@student.cuet.ac.bd", None)
            .expect("valid email");
        let ctx = ReportContext::new(&record, 20.0);

        let output = MarkdownReporter::new().render(&ctx).expect("render");
        assert!(output.contains("No semester results"));
        assert!(output.contains("No target CGPA"));
    }
}

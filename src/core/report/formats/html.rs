//! HTML report generator
//!
//! Generates transcript reports as self-contained HTML with embedded CSS;
//! no external assets are referenced.

use crate::core::format::{format_cgpa, format_credits};
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Escape text destined for HTML element content
    fn escape(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = HTML_TEMPLATE.to_string();

        output = output.replace("{{student_name}}", &Self::escape(ctx.display_name()));
        output = output.replace("{{student_id}}", &Self::escape(&ctx.student.student_id));
        output = output.replace("{{email}}", &Self::escape(&ctx.student.email));
        output = output.replace("{{department}}", &Self::escape(&ctx.student.department));
        output = output.replace("{{year}}", &Self::escape(&ctx.student.year));

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

        let semester_sections = Self::generate_semester_sections(ctx);
        output = output.replace("{{semester_sections}}", &semester_sections);

        let target_section = Self::generate_target_section(ctx);
        output = output.replace("{{target_section}}", &target_section);

        output
    }

    /// Generate one table per saved semester
    fn generate_semester_sections(ctx: &ReportContext) -> String {
        let mut sections = String::new();

        if ctx.student.semester_results.is_empty() {
            sections.push_str("<p class=\"empty\">No semester results saved yet.</p>\n");
            return sections;
        }

        for (result, summary) in ctx.semester_summaries() {
            let _ = writeln!(sections, "<h3>{}</h3>", Self::escape(&result.semester));
            sections.push_str("<table>\n<tr><th>Course</th><th>Credit</th><th>Grade</th><th>Sessional</th></tr>\n");

            for course in &result.courses {
                let credit = course
                    .credit
                    .to_f64()
                    .map_or_else(|| "-".to_string(), format_credits);
                let sessional = if course.sessional { "Yes" } else { "No" };
                let _ = writeln!(
                    sections,
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                    Self::escape(&course.course_code),
                    credit,
                    Self::escape(&course.grade),
                    sessional
                );
            }

            sections.push_str("</table>\n");
            let _ = writeln!(
                sections,
                "<p class=\"semester-cgpa\">Semester CGPA: <strong>{}</strong> ({} credits)</p>",
                format_cgpa(summary.cgpa),
                format_credits(summary.total_credits)
            );
        }

        sections
    }

    /// Generate the target projection section
    fn generate_target_section(ctx: &ReportContext) -> String {
        let Some(target) = ctx.student.target_cgpa else {
            return "<p class=\"empty\">No target CGPA set.</p>\n".to_string();
        };

        let mut section = String::new();
        let _ = writeln!(
            section,
            "<p>Target CGPA: <strong>{}</strong></p>",
            format_cgpa(target)
        );

        if let Some(projection) = &ctx.projection {
            let (class, verdict) = if projection.achievable {
                ("achievable", "Achievable")
            } else {
                ("unachievable", "Not achievable with perfect scores")
            };
            let _ = writeln!(
                section,
                "<p class=\"{class}\">Required average over the remaining {} semester(s): <strong>{}</strong> ({verdict}, assuming about {} further credits)</p>",
                projection.remaining_semesters,
                format_cgpa(projection.required_cgpa),
                format_credits(projection.estimated_remaining_credits)
            );
        } else {
            section.push_str("<p>All planned semesters are complete.</p>\n");
        }

        section
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
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

    #[test]
    fn renders_self_contained_html() {
        let mut record =
            StudentRecord::from_email("u2104042@student.cuet.ac.bd", None).expect("valid email");
        record.upsert_semester(
            "Level 1 - Term 1",
            vec![CourseRecord::new(
                "CSE-141".to_string(),
                3.0.into(),
                "A+".to_string(),
            )],
        );
        record.refresh_aggregates();

        let ctx = ReportContext::new(&record, 20.0);
        let output = HtmlReporter::new().render(&ctx).expect("render");

        assert!(output.contains("<html"));
        assert!(output.contains("u2104042"));
        assert!(output.contains("CSE-141"));
        assert!(output.contains("4.00"));
        assert!(!output.contains("{{"), "unsubstituted placeholder left");
    }

    #[test]
    fn escapes_html_in_course_codes() {
        let mut record =
            StudentRecord::from_email("u2104042@student.cuet.ac.bd", None).expect("valid email");
        record.upsert_semester(
            "Level 1 - Term 1",
            vec![CourseRecord::new(
                "<script>".to_string(),
                3.0.into(),
                "A".to_string(),
            )],
        );
        record.refresh_aggregates();

        let ctx = ReportContext::new(&record, 20.0);
        let output = HtmlReporter::new().render(&ctx).expect("render");

        assert!(!output.contains("<script>"));
        assert!(output.contains("&lt;script&gt;"));
    }
}

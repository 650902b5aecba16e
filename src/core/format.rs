//! Presentation formatting for CGPA values
//!
//! The institution truncates averages to two decimal places; it never
//! rounds. 3.596 displays as "3.59", not "3.60". Stored values keep full
//! precision; this formatting is applied only at presentation boundaries.

/// Format a CGPA for display, truncated to two decimal places
///
/// Multiplies by 100, floors, divides back, and renders with exactly two
/// decimal digits. The domain never produces negative averages.
#[must_use]
pub fn format_cgpa(value: f64) -> String {
    let truncated = (value * 100.0).floor() / 100.0;
    format!("{truncated:.2}")
}

/// Format a credit-hour total for display
#[must_use]
pub fn format_credits(value: f64) -> String {
    format!("{value:.2}")
}

//! Target-CGPA projection
//!
//! Given the current standing and a target, estimates the average a student
//! must hold across the remaining semesters. Credits for those semesters are
//! unknown, so they are estimated from the per-semester average so far (or a
//! configurable fallback before any semester is complete).

use crate::core::grading;

/// Per-semester credit estimate used before any semester has been completed.
/// A policy default, not a derived constant; configurable via
/// `[planner] semester_credits`.
pub const DEFAULT_SEMESTER_CREDITS: f64 = 20.0;

/// Inputs to the projector, assembled from a student's saved aggregates
///
/// Always rebuilt from the underlying course data; never persisted on its
/// own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanningState {
    /// Current overall CGPA (full precision)
    pub current_cgpa: f64,
    /// Total credit hours completed so far
    pub current_credits: f64,
    /// Number of semesters with saved results
    pub semesters_completed: u32,
    /// Number of semesters in the degree plan
    pub total_semesters: u32,
    /// Target overall CGPA, if the student has set one
    pub target_cgpa: Option<f64>,
    /// Per-semester credit estimate used when no semester is complete yet
    pub fallback_semester_credits: f64,
}

/// Projected requirement to reach the target CGPA
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Average required across remaining semesters, clamped to the scale
    pub required_cgpa: f64,
    /// Semesters left in the plan
    pub remaining_semesters: u32,
    /// Estimated credit hours across the remaining semesters
    pub estimated_remaining_credits: f64,
    /// Whether the target is reachable, judged on the unclamped requirement
    pub achievable: bool,
}

/// Compute the average required over the remaining semesters
///
/// Returns `None` when there is nothing to project: no target is set, or no
/// semesters remain in the plan.
///
/// The displayed `required_cgpa` saturates at the ends of the grading scale,
/// but `achievable` is judged on the raw value before clamping, so a target
/// demanding more than a perfect score reports as unachievable even though
/// the displayed number reads 4.00.
#[must_use]
pub fn required_cgpa(state: &PlanningState) -> Option<Projection> {
    let target = state.target_cgpa?;
    if state.semesters_completed >= state.total_semesters {
        return None;
    }

    let remaining_semesters = state.total_semesters - state.semesters_completed;

    let credits_per_semester = if state.semesters_completed > 0 {
        state.current_credits / f64::from(state.semesters_completed)
    } else {
        state.fallback_semester_credits
    };

    let estimated_remaining_credits = f64::from(remaining_semesters) * credits_per_semester;
    let total_estimated_credits = state.current_credits + estimated_remaining_credits;

    let current_grade_points = state.current_credits * state.current_cgpa;
    let required_remaining_grade_points = total_estimated_credits * target - current_grade_points;

    let raw = if estimated_remaining_credits > 0.0 {
        required_remaining_grade_points / estimated_remaining_credits
    } else {
        0.0
    };

    Some(Projection {
        required_cgpa: raw.clamp(0.0, grading::SCALE_MAX),
        remaining_semesters,
        estimated_remaining_credits,
        achievable: (0.0..=grading::SCALE_MAX).contains(&raw),
    })
}

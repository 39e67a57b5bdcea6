use nalgebra::Vector2;

use super::event::EngagementStatus;

// ---------------------------------------------------------------------------
// Trajectory log entries
// ---------------------------------------------------------------------------

/// One accepted step: post-integration state plus the geometry and command
/// evaluated at the start of that step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRecord {
    pub step: usize,                 // 1-based iteration index
    pub time: f64,                   // s, step * dt
    pub pursuer_pos: Vector2<f64>,   // m
    pub pursuer_vel: Vector2<f64>,   // m/s
    pub pursuer_heading: f64,        // rad, from the updated velocity
    pub target_pos: Vector2<f64>,    // m
    pub target_vel: Vector2<f64>,    // m/s
    pub range: f64,                  // m
    pub los_angle: f64,              // rad
    pub los_rate: f64,               // rad/s
    pub accel_cmd: f64,              // m/s^2
}

/// Outcome of a complete run. The log holds only accepted steps, so an
/// intercept on step k leaves exactly k - 1 records.
#[derive(Debug, Clone, PartialEq)]
pub struct EngagementResult {
    pub status: EngagementStatus,
    pub log: Vec<StepRecord>,
    /// Step on which the intercept was detected.
    pub intercept_step: Option<usize>,
    /// Smallest range evaluated, including the terminating evaluation.
    pub min_range: f64,
    /// Range at the last evaluation.
    pub final_range: f64,
}

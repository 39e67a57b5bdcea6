use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, trace, warn};

use crate::dynamics::state::Engagement;
use crate::error::Result;
use crate::gnc::{GuidanceLaw, LosGeometry};
use crate::scenario::{Scenario, SimConfig};
use super::event::{EngagementStatus, ProximityFuze};
use super::integrator::{advance_positions, kinematic_step};
use super::record::{EngagementResult, StepRecord};

// ---------------------------------------------------------------------------
// Full engagement simulation
// ---------------------------------------------------------------------------

/// Upper bound on the log's up-front reservation; longer runs grow it.
const MAX_PREALLOC: usize = 200_000;

/// Run an engagement with a custom guidance law until intercept or timeout.
pub fn simulate_with(
    initial: &Engagement,
    config: &SimConfig,
    law: &dyn GuidanceLaw,
) -> Result<EngagementResult> {
    run(initial, config, law, None)
}

/// Like [`simulate_with`], but stops with `Cancelled` once `cancel` is set.
/// The flag is read once at the top of every iteration.
pub fn simulate_until(
    initial: &Engagement,
    config: &SimConfig,
    law: &dyn GuidanceLaw,
    cancel: &AtomicBool,
) -> Result<EngagementResult> {
    run(initial, config, law, Some(cancel))
}

/// Simulate a scenario with pure pro-nav (convenience wrapper).
pub fn simulate(scenario: &Scenario) -> Result<EngagementResult> {
    scenario.validate()?;
    let law = scenario.guidance();
    simulate_with(&scenario.initial_engagement(), &scenario.sim, &law)
}

fn run(
    initial: &Engagement,
    config: &SimConfig,
    law: &dyn GuidanceLaw,
    cancel: Option<&AtomicBool>,
) -> Result<EngagementResult> {
    initial.validate()?;
    config.validate()?;

    let dt = config.dt;
    let max_iterations = config.max_iterations();
    let fuze = ProximityFuze::new(config.intercept_radius);
    let mut log = Vec::with_capacity(max_iterations.min(MAX_PREALLOC));

    debug!(
        law = law.name(),
        dt,
        max_iterations,
        intercept_radius = config.intercept_radius,
        "starting engagement"
    );

    // Seed the LOS-rate history from the untouched initial geometry, then
    // move both vehicles once so step 1 differences two distinct states.
    let mut prev_relative = initial.relative_position();
    let mut state = advance_positions(initial, dt);

    let mut status = EngagementStatus::Running;
    let mut intercept_step = None;
    let mut min_range = state.range();
    let mut final_range = min_range;

    for step in 1..=max_iterations {
        if cancel.is_some_and(|c| c.load(Ordering::Relaxed)) {
            status = EngagementStatus::Cancelled;
            break;
        }

        let relative = state.relative_position();
        let measured = LosGeometry::measure(prev_relative, relative, dt);
        let range = measured.map_or(0.0, |g| g.range);
        if !range.is_finite() {
            status = EngagementStatus::Diverged;
            warn!(step, "non-finite range, stopping");
            break;
        }
        min_range = min_range.min(range);
        final_range = range;

        let geometry = match measured {
            Some(g) if !fuze.triggered(g.range) => g,
            _ => {
                status = EngagementStatus::Intercepted;
                intercept_step = Some(step);
                break;
            }
        };

        let ap = law.command(&geometry, &state.pursuer);
        let next = kinematic_step(&state, ap, dt);
        if !ap.is_finite() || !next.is_finite() {
            status = EngagementStatus::Diverged;
            warn!(step, ap, "kinematics overflowed, stopping");
            break;
        }
        state = next;

        log.push(StepRecord {
            step,
            time: step as f64 * dt,
            pursuer_pos: state.pursuer.pos,
            pursuer_vel: state.pursuer.vel,
            pursuer_heading: state.pursuer.heading(),
            target_pos: state.target.state.pos,
            target_vel: state.target.state.vel,
            range: geometry.range,
            los_angle: geometry.los_angle,
            los_rate: geometry.los_rate,
            accel_cmd: ap,
        });
        trace!(step, range = geometry.range, ap, "step");

        prev_relative = relative;
    }

    if !status.is_terminal() {
        status = EngagementStatus::TimedOut;
    }

    info!(
        status = status.label(),
        steps = log.len(),
        min_range,
        final_range,
        "engagement finished"
    );

    Ok(EngagementResult { status, log, intercept_step, min_range, final_range })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

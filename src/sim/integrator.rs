use nalgebra::Vector2;

use crate::dynamics::state::{Engagement, Target, VehicleState};

// ---------------------------------------------------------------------------
// Fixed-step Euler kinematics with ideal acceleration response
// ---------------------------------------------------------------------------

/// Resolve a lateral command into inertial [north, east] components,
/// normal to the current velocity heading.
pub fn lateral_accel(ap: f64, heading: f64) -> Vector2<f64> {
    Vector2::new(-ap * heading.sin(), ap * heading.cos())
}

/// Position-only update: `pos += vel * dt + drift * dt`.
fn drift_position(state: &VehicleState, disturbance: &Vector2<f64>, dt: f64) -> Vector2<f64> {
    state.pos + state.vel * dt + disturbance * dt
}

fn advance_target(target: &Target, disturbance: &Vector2<f64>, dt: f64) -> Target {
    if target.anchored {
        return *target;
    }
    Target {
        state: VehicleState {
            pos: drift_position(&target.state, disturbance, dt),
            vel: target.state.vel,
        },
        anchored: false,
    }
}

/// Advance both positions with their current velocities, no guidance.
/// Used once before the run loop to seed the LOS-rate history.
pub fn advance_positions(engagement: &Engagement, dt: f64) -> Engagement {
    let drift = &engagement.environment.disturbance;
    Engagement {
        pursuer: VehicleState {
            pos: drift_position(&engagement.pursuer, drift, dt),
            vel: engagement.pursuer.vel,
        },
        target: advance_target(&engagement.target, drift, dt),
        environment: engagement.environment,
    }
}

/// One kinematic step under lateral command `ap`.
///
/// Velocity is updated from the command, but positions advance with the
/// velocity held at the start of the step. Drift slips position only.
/// No limits are applied to acceleration or speed.
pub fn kinematic_step(engagement: &Engagement, ap: f64, dt: f64) -> Engagement {
    let pursuer = &engagement.pursuer;
    let accel = lateral_accel(ap, pursuer.heading());
    let drift = &engagement.environment.disturbance;

    Engagement {
        pursuer: VehicleState {
            pos: drift_position(pursuer, drift, dt),
            vel: pursuer.vel + accel * dt,
        },
        target: advance_target(&engagement.target, drift, dt),
        environment: engagement.environment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::state::Environment;
    use std::f64::consts::FRAC_PI_2;

    fn engagement(anchored: bool, drift: Vector2<f64>) -> Engagement {
        Engagement::new(
            VehicleState::from_speed_heading(Vector2::zeros(), 1.0, 0.0),
            Target::new(Vector2::new(10.0, 5.0), Vector2::new(0.5, -0.5), anchored),
            Environment::new(drift),
        )
    }

    #[test]
    fn accel_is_normal_to_heading() {
        let a = lateral_accel(2.0, 0.0);
        assert_eq!(a, Vector2::new(-0.0, 2.0));
        let a = lateral_accel(2.0, FRAC_PI_2);
        assert!((a.x + 2.0).abs() < 1e-12 && a.y.abs() < 1e-12);
        let heading = 0.7_f64;
        let v = Vector2::new(heading.cos(), heading.sin());
        assert!(lateral_accel(3.0, heading).dot(&v).abs() < 1e-12);
    }

    #[test]
    fn position_uses_pre_update_velocity() {
        let e = engagement(false, Vector2::zeros());
        let next = kinematic_step(&e, 1.0, 0.5);
        // Pursuer started heading north at 1 m/s
        assert_eq!(next.pursuer.pos, Vector2::new(0.5, 0.0));
        assert!((next.pursuer.vel - Vector2::new(1.0, 0.5)).norm() < 1e-12);
        assert!(next.pursuer.heading() > 0.0, "positive command turns towards east");
    }

    #[test]
    fn zero_command_keeps_velocity() {
        let e = engagement(false, Vector2::zeros());
        let next = kinematic_step(&e, 0.0, 0.4);
        assert_eq!(next.pursuer.vel, e.pursuer.vel);
    }

    #[test]
    fn drift_slips_position_not_velocity() {
        let drift = Vector2::new(0.0, 0.2);
        let e = engagement(false, drift);
        let next = kinematic_step(&e, 0.0, 1.0);
        assert!((next.pursuer.pos - Vector2::new(1.0, 0.2)).norm() < 1e-12);
        assert!((next.target.state.pos - Vector2::new(10.5, 4.7)).norm() < 1e-12);
        assert_eq!(next.pursuer.vel, e.pursuer.vel);
        assert_eq!(next.target.state.vel, e.target.state.vel);
    }

    #[test]
    fn anchored_target_frozen() {
        let e = engagement(true, Vector2::new(1.0, 1.0));
        let next = kinematic_step(&e, 0.3, 1.0);
        assert_eq!(next.target, e.target);
        let next = advance_positions(&e, 1.0);
        assert_eq!(next.target, e.target);
    }

    #[test]
    fn advance_positions_leaves_velocity() {
        let e = engagement(false, Vector2::zeros());
        let next = advance_positions(&e, 2.0);
        assert_eq!(next.pursuer.pos, Vector2::new(2.0, 0.0));
        assert_eq!(next.pursuer.vel, e.pursuer.vel);
        assert!((next.target.state.pos - Vector2::new(11.0, 4.0)).norm() < 1e-12);
    }
}

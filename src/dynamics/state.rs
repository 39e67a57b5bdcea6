use nalgebra::Vector2;

use crate::error::{ensure_finite, Result};

// ---------------------------------------------------------------------------
// Vehicle kinematic state (inertial frame, x = north, y = east)
// ---------------------------------------------------------------------------

/// Position and velocity of one vehicle.
///
/// Speed and heading are always derived from `vel`, so they cannot drift
/// out of sync with the vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleState {
    pub pos: Vector2<f64>, // m   [north, east]
    pub vel: Vector2<f64>, // m/s [north, east]
}

impl VehicleState {
    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>) -> Self {
        Self { pos, vel }
    }

    /// Velocity = speed * (cos heading, sin heading). Negative speed is
    /// allowed and simply points the vector the other way.
    pub fn from_speed_heading(pos: Vector2<f64>, speed: f64, heading: f64) -> Self {
        Self {
            pos,
            vel: Vector2::new(heading.cos(), heading.sin()) * speed,
        }
    }

    pub fn speed(&self) -> f64 {
        self.vel.norm()
    }

    /// Heading (rad) measured from north towards east.
    pub fn heading(&self) -> f64 {
        self.vel.y.atan2(self.vel.x)
    }

    pub fn validate(&self, pos_field: &'static str, vel_field: &'static str) -> Result<()> {
        ensure_finite(pos_field, self.pos.x)?;
        ensure_finite(pos_field, self.pos.y)?;
        ensure_finite(vel_field, self.vel.x)?;
        ensure_finite(vel_field, self.vel.y)
    }
}

// ---------------------------------------------------------------------------
// Target
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub state: VehicleState,
    /// Frozen in place: position and velocity never change.
    pub anchored: bool,
}

impl Target {
    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, anchored: bool) -> Self {
        Self { state: VehicleState::new(pos, vel), anchored }
    }
}

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// Constant drift (e.g. ocean current) added to every position update.
/// It never enters velocity, heading or guidance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub disturbance: Vector2<f64>, // m/s [north, east]
}

impl Environment {
    pub fn new(disturbance: Vector2<f64>) -> Self {
        Self { disturbance }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self { disturbance: Vector2::zeros() }
    }
}

// ---------------------------------------------------------------------------
// Full engagement state: everything the run loop threads between steps
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Engagement {
    pub pursuer: VehicleState,
    pub target: Target,
    pub environment: Environment,
}

impl Engagement {
    pub fn new(pursuer: VehicleState, target: Target, environment: Environment) -> Self {
        Self { pursuer, target, environment }
    }

    /// Relative position, target minus pursuer.
    pub fn relative_position(&self) -> Vector2<f64> {
        self.target.state.pos - self.pursuer.pos
    }

    pub fn range(&self) -> f64 {
        self.relative_position().norm()
    }

    /// False once any position or velocity component has overflowed.
    pub fn is_finite(&self) -> bool {
        [self.pursuer.pos, self.pursuer.vel, self.target.state.pos, self.target.state.vel]
            .iter()
            .all(|v| v.iter().all(|c| c.is_finite()))
    }

    pub fn validate(&self) -> Result<()> {
        self.pursuer.validate("pursuer.position", "pursuer.velocity")?;
        self.target.state.validate("target.position", "target.velocity")?;
        ensure_finite("environment.disturbance", self.environment.disturbance.x)?;
        ensure_finite("environment.disturbance", self.environment.disturbance.y)
    }
}

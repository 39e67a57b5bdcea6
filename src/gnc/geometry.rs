use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// Line-of-sight geometry shared by every guidance law
// ---------------------------------------------------------------------------

/// Engagement geometry for one step.
///
/// `relative_velocity` and `los_rate` come from a finite difference of the
/// previous and current relative positions, not from the vehicles'
/// velocity vectors. This approximates the instantaneous bearing rate and
/// the error grows with `dt`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LosGeometry {
    pub relative: Vector2<f64>,          // m,   target - pursuer
    pub relative_velocity: Vector2<f64>, // m/s, finite-difference estimate
    pub range: f64,                      // m
    pub los_angle: f64,                  // rad, from north towards east
    pub los_rate: f64,                   // rad/s
}

impl LosGeometry {
    /// Measure geometry from the previous and current relative positions.
    ///
    /// Returns `None` when range is exactly zero; callers treat that as an
    /// intercept instead of dividing by it.
    pub fn measure(prev_relative: Vector2<f64>, relative: Vector2<f64>, dt: f64) -> Option<Self> {
        let range = relative.norm();
        if range == 0.0 {
            return None;
        }

        let relative_velocity = (relative - prev_relative) / dt;
        let los_angle = relative.y.atan2(relative.x);
        let los_rate = (relative.x * relative_velocity.y - relative.y * relative_velocity.x)
            / (range * range);

        Some(Self { relative, relative_velocity, range, los_angle, los_rate })
    }
}

use crate::dynamics::state::VehicleState;
use super::geometry::LosGeometry;
use super::law::GuidanceLaw;

// ---------------------------------------------------------------------------
// Pure Proportional Navigation: ap = N * Vp * lambda_dot
// ---------------------------------------------------------------------------

/// Pure pro-nav. The command scales with the pursuer's own speed, not the
/// closing velocity (that would be true pro-nav).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PurePronav {
    pub nav_gain: f64, // N, dimensionless, typically 3..5
}

impl PurePronav {
    pub fn new(nav_gain: f64) -> Self {
        Self { nav_gain }
    }
}

impl GuidanceLaw for PurePronav {
    fn command(&self, geometry: &LosGeometry, pursuer: &VehicleState) -> f64 {
        self.nav_gain * pursuer.speed() * geometry.los_rate
    }

    fn name(&self) -> &str {
        "PurePronav"
    }
}

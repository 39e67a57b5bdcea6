use crate::dynamics::state::VehicleState;
use super::geometry::LosGeometry;

/// Trait for guidance laws.
///
/// Implement this to plug a different law (true or augmented pro-nav,
/// pursuit, ...) into the run loop without touching the integrator.
/// Laws are stateless: identical inputs must give identical commands.
pub trait GuidanceLaw {
    /// Lateral acceleration command (m/s^2), applied normal to the
    /// pursuer's velocity. Positive increases heading (turns from north
    /// towards east).
    fn command(&self, geometry: &LosGeometry, pursuer: &VehicleState) -> f64;

    /// Human-readable name for logging/display.
    fn name(&self) -> &str {
        "unnamed"
    }
}

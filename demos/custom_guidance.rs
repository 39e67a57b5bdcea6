use nalgebra::Vector2;

use pronav_sim::dynamics::state::VehicleState;
use pronav_sim::gnc::{GuidanceLaw, LosGeometry, PurePronav};
use pronav_sim::sim;
use pronav_sim::ScenarioBuilder;

/// Pure pursuit: turn the velocity vector onto the line of sight with a
/// fixed time constant.
struct PurePursuit {
    time_constant: f64,
}

impl GuidanceLaw for PurePursuit {
    fn command(&self, geometry: &LosGeometry, pursuer: &VehicleState) -> f64 {
        let mut error = geometry.los_angle - pursuer.heading();
        // wrap to [-pi, pi]
        error = error.sin().atan2(error.cos());
        pursuer.speed() * error / self.time_constant
    }

    fn name(&self) -> &str {
        "PurePursuit"
    }
}

fn main() {
    let scenario = ScenarioBuilder::new("Crossing target")
        .pursuer(Vector2::zeros(), 1.0, 0.0)
        .target(Vector2::new(200.0, -150.0), Vector2::new(0.0, 0.4))
        .dt(0.2)
        .max_time(1500.0)
        .build();

    let initial = scenario.initial_engagement();
    let laws: [Box<dyn GuidanceLaw>; 2] = [
        Box::new(PurePronav::new(scenario.nav_gain)),
        Box::new(PurePursuit { time_constant: 2.0 }),
    ];

    for law in &laws {
        println!("Simulating with {} ...", law.name());
        let result = sim::simulate_with(&initial, &scenario.sim, law.as_ref())
            .expect("scenario is valid");

        let flight_time = result.log.last().map(|r| r.time).unwrap_or(0.0);
        let path: f64 = result
            .log
            .windows(2)
            .map(|w| (w[1].pursuer_pos - w[0].pursuer_pos).norm())
            .sum();

        println!("  Status: {}", result.status.label());
        println!("  Closest approach: {:.3} m", result.min_range);
        println!("  Flight time: {:.1} s", flight_time);
        println!("  Path length: {:.0} m", path);
        println!("  Trajectory points: {}", result.log.len());
    }
}

//! Scenario configuration: initial conditions, guidance gain and run
//! settings. Loadable from JSON:
//!
//! ```json
//! {
//!   "name": "default",
//!   "nav_gain": 4.0,
//!   "pursuer": { "position": [0.0, 0.0], "speed": 1.0, "heading": 0.0 },
//!   "target": { "position": [250.0, 250.0], "velocity": [0.2, 0.5], "anchored": false },
//!   "environment": { "disturbance": [0.0, 0.0] },
//!   "sim": { "dt": 0.4, "max_time": 1250.0, "intercept_radius": 0.25 }
//! }
//! ```
//!
//! `name`, `pursuer.position`, `target.anchored`, `environment` and
//! `sim.intercept_radius` may be omitted.

use std::path::Path;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::dynamics::state::{Engagement, Environment, Target, VehicleState};
use crate::error::{ensure_finite, Result, SimError};
use crate::gnc::PurePronav;

/// Default proximity radius for intercept, m.
pub const DEFAULT_INTERCEPT_RADIUS: f64 = 0.25;

// ---------------------------------------------------------------------------
// Run settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    pub dt: f64,       // integration timestep, s
    pub max_time: f64, // hard stop, s
    #[serde(default = "default_intercept_radius")]
    pub intercept_radius: f64, // m
}

fn default_intercept_radius() -> f64 {
    DEFAULT_INTERCEPT_RADIUS
}

impl SimConfig {
    /// Iteration budget: floor(max_time / dt), tolerant of quotients like
    /// 1250 / 0.4 landing a hair under the integer.
    pub fn max_iterations(&self) -> usize {
        let n = self.max_time / self.dt;
        (n + n.abs() * 1e-12).floor().max(0.0) as usize
    }

    pub fn validate(&self) -> Result<()> {
        ensure_finite("sim.dt", self.dt)?;
        ensure_finite("sim.max_time", self.max_time)?;
        ensure_finite("sim.intercept_radius", self.intercept_radius)?;
        if self.dt <= 0.0 {
            return Err(SimError::InvalidTimestep(self.dt));
        }
        if self.max_time < 0.0 {
            return Err(SimError::InvalidDuration(self.max_time));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 0.4,
            max_time: 1250.0,
            intercept_radius: DEFAULT_INTERCEPT_RADIUS,
        }
    }
}

// ---------------------------------------------------------------------------
// Vehicle / environment sections
// ---------------------------------------------------------------------------

fn origin() -> Vector2<f64> {
    Vector2::zeros()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PursuerConfig {
    #[serde(default = "origin")]
    pub position: Vector2<f64>, // m [north, east]
    pub speed: f64,             // m/s
    pub heading: f64,           // rad from north
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetConfig {
    pub position: Vector2<f64>, // m   [north, east]
    pub velocity: Vector2<f64>, // m/s [north, east]
    #[serde(default)]
    pub anchored: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub disturbance: Vector2<f64>, // m/s [north, east]
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self { disturbance: Vector2::zeros() }
    }
}

// ---------------------------------------------------------------------------
// Scenario
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default = "default_name")]
    pub name: String,
    pub nav_gain: f64,
    pub pursuer: PursuerConfig,
    pub target: TargetConfig,
    #[serde(default)]
    pub environment: EnvironmentConfig,
    pub sim: SimConfig,
}

fn default_name() -> String {
    "unnamed".into()
}

impl Scenario {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let scenario: Scenario = serde_json::from_str(s)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Finite inputs only; zero or negative speeds are fine.
    pub fn validate(&self) -> Result<()> {
        ensure_finite("nav_gain", self.nav_gain)?;
        ensure_finite("pursuer.speed", self.pursuer.speed)?;
        ensure_finite("pursuer.heading", self.pursuer.heading)?;
        self.initial_engagement().validate()?;
        self.sim.validate()
    }

    pub fn initial_engagement(&self) -> Engagement {
        Engagement::new(
            VehicleState::from_speed_heading(
                self.pursuer.position,
                self.pursuer.speed,
                self.pursuer.heading,
            ),
            Target::new(self.target.position, self.target.velocity, self.target.anchored),
            Environment::new(self.environment.disturbance),
        )
    }

    pub fn guidance(&self) -> PurePronav {
        PurePronav::new(self.nav_gain)
    }
}

// ---------------------------------------------------------------------------
// Scenario builder
// ---------------------------------------------------------------------------

pub struct ScenarioBuilder {
    scenario: Scenario,
}

impl ScenarioBuilder {
    /// Starts from the default engagement.
    pub fn new(name: impl Into<String>) -> Self {
        let mut scenario = presets::default_engagement();
        scenario.name = name.into();
        Self { scenario }
    }

    pub fn nav_gain(mut self, n: f64) -> Self {
        self.scenario.nav_gain = n;
        self
    }

    pub fn pursuer(mut self, position: Vector2<f64>, speed: f64, heading: f64) -> Self {
        self.scenario.pursuer = PursuerConfig { position, speed, heading };
        self
    }

    pub fn target(mut self, position: Vector2<f64>, velocity: Vector2<f64>) -> Self {
        self.scenario.target.position = position;
        self.scenario.target.velocity = velocity;
        self
    }

    pub fn anchored(mut self, anchored: bool) -> Self {
        self.scenario.target.anchored = anchored;
        self
    }

    pub fn disturbance(mut self, disturbance: Vector2<f64>) -> Self {
        self.scenario.environment.disturbance = disturbance;
        self
    }

    pub fn dt(mut self, dt: f64) -> Self {
        self.scenario.sim.dt = dt;
        self
    }

    pub fn max_time(mut self, max_time: f64) -> Self {
        self.scenario.sim.max_time = max_time;
        self
    }

    pub fn intercept_radius(mut self, radius: f64) -> Self {
        self.scenario.sim.intercept_radius = radius;
        self
    }

    pub fn build(self) -> Scenario {
        self.scenario
    }
}

// ---------------------------------------------------------------------------
// Preset scenarios
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    /// Pursuer at the origin heading north at 1 m/s, target at (250, 250)
    /// drifting (0.2, 0.5) m/s, N = 4, dt = 0.4 s, 3125 iterations.
    pub fn default_engagement() -> Scenario {
        Scenario {
            name: "default".into(),
            nav_gain: 4.0,
            pursuer: PursuerConfig {
                position: Vector2::zeros(),
                speed: 1.0,
                heading: 0.0,
            },
            target: TargetConfig {
                position: Vector2::new(250.0, 250.0),
                velocity: Vector2::new(0.2, 0.5),
                anchored: false,
            },
            environment: EnvironmentConfig::default(),
            sim: SimConfig::default(),
        }
    }

    /// Same geometry with a 0.1 m/s easterly current.
    pub fn drifting_current() -> Scenario {
        ScenarioBuilder::new("drifting-current")
            .disturbance(Vector2::new(0.0, 0.1))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_iteration_budget() {
        assert_eq!(SimConfig::default().max_iterations(), 3125);
        let cfg = SimConfig { dt: 0.1, max_time: 10.0, intercept_radius: 0.25 };
        assert_eq!(cfg.max_iterations(), 100);
        let cfg = SimConfig { dt: 0.3, max_time: 1.0, intercept_radius: 0.25 };
        assert_eq!(cfg.max_iterations(), 3);
        let cfg = SimConfig { dt: 0.5, max_time: 0.0, intercept_radius: 0.25 };
        assert_eq!(cfg.max_iterations(), 0);
    }

    #[test]
    fn parses_minimal_json_with_defaults() {
        let json = r#"{
            "nav_gain": 3.0,
            "pursuer": { "speed": 2.0, "heading": 0.5 },
            "target": { "position": [100.0, 0.0], "velocity": [0.0, 1.0] },
            "sim": { "dt": 0.1, "max_time": 60.0 }
        }"#;
        let s = Scenario::from_json_str(json).unwrap();
        assert_eq!(s.name, "unnamed");
        assert_eq!(s.pursuer.position, Vector2::zeros());
        assert!(!s.target.anchored);
        assert_eq!(s.environment.disturbance, Vector2::zeros());
        assert_eq!(s.sim.intercept_radius, DEFAULT_INTERCEPT_RADIUS);
        assert_eq!(s.target.position, Vector2::new(100.0, 0.0));
    }

    #[test]
    fn json_round_trip_of_preset() {
        let preset = presets::drifting_current();
        let text = serde_json::to_string(&preset).unwrap();
        assert_eq!(Scenario::from_json_str(&text).unwrap(), preset);
    }

    #[test]
    fn missing_field_is_json_error() {
        let err = Scenario::from_json_str(r#"{ "nav_gain": 3.0 }"#).unwrap_err();
        assert!(matches!(err, SimError::Json(_)));
    }

    #[test]
    fn non_finite_inputs_fail_fast() {
        let s = ScenarioBuilder::new("bad").nav_gain(f64::NAN).build();
        assert!(matches!(s.validate(), Err(SimError::NonFinite { field: "nav_gain" })));

        let s = ScenarioBuilder::new("bad")
            .target(Vector2::new(1.0, f64::INFINITY), Vector2::zeros())
            .build();
        assert!(matches!(
            s.validate(),
            Err(SimError::NonFinite { field: "target.position" })
        ));

        let s = ScenarioBuilder::new("bad").disturbance(Vector2::new(f64::NAN, 0.0)).build();
        assert!(s.validate().is_err());
    }

    #[test]
    fn bad_timestep_rejected() {
        let s = ScenarioBuilder::new("bad").dt(0.0).build();
        assert!(matches!(s.validate(), Err(SimError::InvalidTimestep(_))));
        let s = ScenarioBuilder::new("bad").max_time(-1.0).build();
        assert!(matches!(s.validate(), Err(SimError::InvalidDuration(_))));
    }

    #[test]
    fn zero_and_negative_speed_allowed() {
        for speed in [0.0, -1.0] {
            let scenario = ScenarioBuilder::new("s").pursuer(Vector2::zeros(), speed, 0.0).build();
            assert!(scenario.validate().is_ok());
        }
    }

    #[test]
    fn initial_engagement_matches_config() {
        let e = presets::default_engagement().initial_engagement();
        assert_eq!(e.pursuer.pos, Vector2::zeros());
        assert_eq!(e.pursuer.vel, Vector2::new(1.0, 0.0));
        assert_eq!(e.target.state.pos, Vector2::new(250.0, 250.0));
        assert!(!e.target.anchored);
    }
}

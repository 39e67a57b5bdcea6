//! Two-dimensional pursuit simulation under Pure Proportional Navigation.
//!
//! Fixed-step engine: the pursuer's lateral command comes from the
//! line-of-sight rate, kinematics are ideal (commands act instantly),
//! and a constant drift can slip both vehicles' positions.

pub mod dynamics;
pub mod error;
pub mod gnc;
pub mod io;
pub mod scenario;
pub mod sim;

pub use dynamics::state::{Engagement, Environment, Target, VehicleState};
pub use error::{Result, SimError};
pub use gnc::{GuidanceLaw, LosGeometry, PurePronav};
pub use scenario::{presets, Scenario, ScenarioBuilder, SimConfig};
pub use sim::{
    simulate, simulate_until, simulate_with, EngagementResult, EngagementStatus, StepRecord,
};

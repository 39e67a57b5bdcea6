pub mod event;
pub mod integrator;
pub mod record;
pub mod runner;

pub use event::{EngagementStatus, ProximityFuze};
pub use integrator::{advance_positions, kinematic_step};
pub use record::{EngagementResult, StepRecord};
pub use runner::{simulate, simulate_until, simulate_with};

pub mod state;

pub use state::{Engagement, Environment, Target, VehicleState};

use serde::Serialize;

// ---------------------------------------------------------------------------
// Run loop state machine
// ---------------------------------------------------------------------------

/// Engagement status. `Running` is the only non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EngagementStatus {
    Running,
    Intercepted,
    TimedOut,
    /// Stopped by an external cancellation flag.
    Cancelled,
    /// Kinematics overflowed to a non-finite value.
    Diverged,
}

impl EngagementStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, EngagementStatus::Running)
    }

    pub fn label(self) -> &'static str {
        match self {
            EngagementStatus::Running => "RUNNING",
            EngagementStatus::Intercepted => "INTERCEPTED",
            EngagementStatus::TimedOut => "TIMED_OUT",
            EngagementStatus::Cancelled => "CANCELLED",
            EngagementStatus::Diverged => "DIVERGED",
        }
    }
}

// ---------------------------------------------------------------------------
// Intercept detection
// ---------------------------------------------------------------------------

/// Proximity fuze: fires when range is within `radius`.
#[derive(Debug, Clone, Copy)]
pub struct ProximityFuze {
    pub radius: f64, // m
}

impl ProximityFuze {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn triggered(&self, range: f64) -> bool {
        range <= self.radius
    }
}

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::scenario::Scenario;
use crate::sim::{EngagementResult, EngagementStatus};

/// Summary statistics computed from a finished engagement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementSummary {
    pub status: EngagementStatus,
    pub intercept_step: Option<usize>,
    pub intercept_time_s: Option<f64>,
    /// Only a true miss distance when `status` is not `INTERCEPTED`.
    pub min_range_m: f64,
    pub final_range_m: f64,
    pub max_accel_cmd_ms2: f64,
    pub pursuer_path_m: f64,
    pub logged_steps: usize,
}

impl EngagementSummary {
    pub fn from_result(result: &EngagementResult, dt: f64) -> Self {
        let max_accel_cmd = result
            .log
            .iter()
            .map(|r| r.accel_cmd.abs())
            .fold(0.0_f64, f64::max);

        let pursuer_path: f64 = result
            .log
            .windows(2)
            .map(|w| (w[1].pursuer_pos - w[0].pursuer_pos).norm())
            .sum();

        EngagementSummary {
            status: result.status,
            intercept_step: result.intercept_step,
            intercept_time_s: result.intercept_step.map(|k| k as f64 * dt),
            min_range_m: result.min_range,
            final_range_m: result.final_range,
            max_accel_cmd_ms2: max_accel_cmd,
            pursuer_path_m: pursuer_path,
            logged_steps: result.log.len(),
        }
    }
}

#[derive(Serialize)]
struct SummaryDocument<'a> {
    scenario: &'a Scenario,
    summary: &'a EngagementSummary,
}

/// Write scenario and summary as pretty JSON to a writer.
pub fn write_summary<W: Write>(
    writer: &mut W,
    scenario: &Scenario,
    summary: &EngagementSummary,
) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &SummaryDocument { scenario, summary })?;
    writeln!(writer)?;
    Ok(())
}

/// Write summary JSON to a file.
pub fn write_summary_file(
    path: impl AsRef<Path>,
    scenario: &Scenario,
    summary: &EngagementSummary,
) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, scenario, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ScenarioBuilder;
    use crate::sim::simulate;
    use nalgebra::Vector2;

    fn short_run() -> (Scenario, EngagementResult) {
        let scenario = ScenarioBuilder::new("Test")
            .pursuer(Vector2::zeros(), 1.0, 0.0)
            .target(Vector2::new(10.1, 0.0), Vector2::zeros())
            .anchored(true)
            .dt(0.5)
            .max_time(50.0)
            .build();
        let result = simulate(&scenario).unwrap();
        (scenario, result)
    }

    #[test]
    fn summary_of_head_on_intercept() {
        let (_, result) = short_run();
        let s = EngagementSummary::from_result(&result, 0.5);
        assert_eq!(s.status, EngagementStatus::Intercepted);
        assert_eq!(s.intercept_step, Some(20));
        assert!((s.intercept_time_s.unwrap() - 10.0).abs() < 1e-12);
        assert_eq!(s.logged_steps, 19);
        assert_eq!(s.max_accel_cmd_ms2, 0.0);
        // 19 records, 18 gaps of 0.5 m
        assert!((s.pursuer_path_m - 9.0).abs() < 1e-9);
    }

    #[test]
    fn json_output_is_valid() {
        let (scenario, result) = short_run();
        let summary = EngagementSummary::from_result(&result, scenario.sim.dt);

        let mut buf = Vec::new();
        write_summary(&mut buf, &scenario, &summary).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["scenario"]["name"], "Test");
        assert_eq!(value["summary"]["status"], "INTERCEPTED");
        assert_eq!(value["summary"]["intercept_step"], 20);
    }

    #[test]
    fn timeout_has_no_intercept_time() {
        let scenario = ScenarioBuilder::new("short").max_time(4.0).build();
        let result = simulate(&scenario).unwrap();
        let s = EngagementSummary::from_result(&result, scenario.sim.dt);
        assert_eq!(s.status, EngagementStatus::TimedOut);
        assert_eq!(s.intercept_time_s, None);
        assert_eq!(s.logged_steps, 10);
    }
}

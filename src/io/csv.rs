use std::io::{self, Write};
use std::path::Path;

use crate::sim::StepRecord;

/// Write the trajectory log in CSV format.
///
/// Columns: step, time, pursuer_n, pursuer_e, pursuer_vn, pursuer_ve,
///          heading_deg, target_n, target_e, target_vn, target_ve,
///          range, los_deg, los_rate, accel_cmd
pub fn write_trajectory<W: Write>(writer: &mut W, log: &[StepRecord]) -> io::Result<()> {
    writeln!(
        writer,
        "step,time,pursuer_n,pursuer_e,pursuer_vn,pursuer_ve,heading_deg,\
         target_n,target_e,target_vn,target_ve,\
         range,los_deg,los_rate,accel_cmd"
    )?;

    for r in log {
        writeln!(
            writer,
            "{},{:.4},{:.4},{:.4},{:.6},{:.6},{:.3},\
             {:.4},{:.4},{:.6},{:.6},\
             {:.4},{:.3},{:.6e},{:.6e}",
            r.step,
            r.time,
            r.pursuer_pos.x, r.pursuer_pos.y,
            r.pursuer_vel.x, r.pursuer_vel.y,
            r.pursuer_heading.to_degrees(),
            r.target_pos.x, r.target_pos.y,
            r.target_vel.x, r.target_vel.y,
            r.range,
            r.los_angle.to_degrees(),
            r.los_rate,
            r.accel_cmd,
        )?;
    }

    Ok(())
}

/// Write the trajectory log to a CSV file at the given path.
pub fn write_trajectory_file(path: impl AsRef<Path>, log: &[StepRecord]) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_trajectory(&mut file, log)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    fn record(step: usize) -> StepRecord {
        StepRecord {
            step,
            time: step as f64 * 0.4,
            pursuer_pos: Vector2::new(step as f64 * 0.4, 0.0),
            pursuer_vel: Vector2::new(1.0, 0.0),
            pursuer_heading: 0.0,
            target_pos: Vector2::new(250.0, 250.0),
            target_vel: Vector2::new(0.2, 0.5),
            range: 353.0,
            los_angle: std::f64::consts::FRAC_PI_4,
            los_rate: 1.5e-3,
            accel_cmd: 6.0e-3,
        }
    }

    #[test]
    fn csv_output_has_header_and_rows() {
        let log = vec![record(1), record(2)];

        let mut buf = Vec::new();
        write_trajectory(&mut buf, &log).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("step,time,"));
        assert_eq!(lines.len(), 3); // header + 2 data rows
        assert!(lines[1].starts_with("1,0.4000,"));
        assert!(lines[2].starts_with("2,0.8000,"));
        let columns = lines[0].split(',').count();
        assert!(lines[1..].iter().all(|l| l.split(',').count() == columns));
        assert!(lines[1].contains(",45.000,"));
    }

    #[test]
    fn empty_log_writes_header_only() {
        let mut buf = Vec::new();
        write_trajectory(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 1);
    }
}

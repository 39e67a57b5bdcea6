use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pronav_sim::io::csv;
use pronav_sim::io::json::{self, EngagementSummary};
use pronav_sim::{presets, simulate, EngagementStatus, Scenario};

#[derive(Parser, Debug)]
#[command(name = "pronav-sim")]
#[command(about = "Simulate a 2D pure proportional navigation pursuit")]
struct Args {
    /// Scenario JSON file (defaults to the built-in engagement)
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Override the navigation gain N
    #[arg(short = 'n', long)]
    nav_gain: Option<f64>,

    /// Override the timestep, s
    #[arg(long)]
    dt: Option<f64>,

    /// Export the trajectory log as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Export the engagement summary as JSON
    #[arg(long)]
    summary: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("pronav_sim=info".parse()?))
        .init();

    let args = Args::parse();

    let mut scenario = match &args.scenario {
        Some(path) => Scenario::from_json_file(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => presets::default_engagement(),
    };
    if let Some(n) = args.nav_gain {
        scenario.nav_gain = n;
    }
    if let Some(dt) = args.dt {
        scenario.sim.dt = dt;
    }

    info!("Simulating scenario '{}' (N = {})", scenario.name, scenario.nav_gain);
    let result = simulate(&scenario)?;
    let summary = EngagementSummary::from_result(&result, scenario.sim.dt);

    print_report(&scenario, &summary, &result.log);

    if let Some(path) = &args.csv {
        csv::write_trajectory_file(path, &result.log)
            .with_context(|| format!("writing {}", path.display()))?;
        info!("Exported trajectory: {}", path.display());
    }
    if let Some(path) = &args.summary {
        json::write_summary_file(path, &scenario, &summary)
            .with_context(|| format!("writing {}", path.display()))?;
        info!("Exported summary: {}", path.display());
    }

    Ok(())
}

fn print_report(scenario: &Scenario, summary: &EngagementSummary, log: &[pronav_sim::StepRecord]) {
    let p = &scenario.pursuer;
    let t = &scenario.target;

    println!();
    println!("====================================================================");
    println!("  PURE PRO-NAV ENGAGEMENT — {}", scenario.name);
    println!("====================================================================");
    println!();
    println!("  Setup");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Pursuer:  pos=({:>8.1}, {:>8.1}) m   speed={:>6.2} m/s   hdg={:>7.2} deg",
        p.position.x, p.position.y, p.speed, p.heading.to_degrees()
    );
    println!(
        "  Target:   pos=({:>8.1}, {:>8.1}) m   vel=({:>5.2}, {:>5.2}) m/s{}",
        t.position.x,
        t.position.y,
        t.velocity.x,
        t.velocity.y,
        if t.anchored { "  [anchored]" } else { "" }
    );
    println!(
        "  Drift:    ({:>5.2}, {:>5.2}) m/s    N={:.1}   dt={} s   radius={} m",
        scenario.environment.disturbance.x,
        scenario.environment.disturbance.y,
        scenario.nav_gain,
        scenario.sim.dt,
        scenario.sim.intercept_radius
    );
    println!();

    println!("  Outcome");
    println!("  ──────────────────────────────────────────────────────────────────");
    match (summary.status, summary.intercept_step, summary.intercept_time_s) {
        (EngagementStatus::Intercepted, Some(k), Some(time)) => println!(
            "  INTERCEPTED at step {} (t={:.1} s), range {:.3} m",
            k, time, summary.final_range_m
        ),
        (status, _, _) => println!(
            "  {} after {} steps, closest approach {:.3} m",
            status.label(),
            summary.logged_steps,
            summary.min_range_m
        ),
    }
    println!("  Max |accel cmd|: {:>10.4} m/s^2", summary.max_accel_cmd_ms2);
    println!("  Pursuer path:    {:>10.1} m", summary.pursuer_path_m);
    println!();

    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>6}  {:>8}  {:>9}  {:>9}  {:>9}  {:>8}  {:>10}",
        "step", "t (s)", "p_n (m)", "p_e (m)", "range(m)", "hdg(deg)", "ap (m/s2)"
    );
    println!("  {}", "─".repeat(66));

    let sample_interval = (log.len() / 25).max(1);
    for (i, r) in log.iter().enumerate() {
        if i % sample_interval != 0 && i != log.len() - 1 {
            continue;
        }
        println!(
            "  {:>6}  {:>8.1}  {:>9.2}  {:>9.2}  {:>9.3}  {:>8.2}  {:>10.5}",
            r.step,
            r.time,
            r.pursuer_pos.x,
            r.pursuer_pos.y,
            r.range,
            r.pursuer_heading.to_degrees(),
            r.accel_cmd
        );
    }

    println!();
    println!("  Simulation: {} logged steps, dt={} s", log.len(), scenario.sim.dt);
    println!("====================================================================");
    println!();
}

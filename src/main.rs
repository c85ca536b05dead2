use orbsim::{ScenarioConfig, Scenario};
use orbsim::{close_approach_report, final_state_report};
use orbsim::bench_euler_step;

use clap::Parser;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, looked up under `scenarios/` unless it is a path to an existing file
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,

    /// Replay the recorded trajectories in a 3D window after the run
    #[arg(long)]
    view: bool,

    /// Run the step-cost benchmark instead of a scenario
    #[arg(long)]
    bench: bool,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.is_file() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = scenario_path(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if args.bench {
        bench_euler_step();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg);

    let output = scenario.run().context("simulation aborted")?;

    println!("{}", close_approach_report(&output.closest, &scenario.system.bodies));
    print!("{}", final_state_report(&scenario.system.bodies));

    if args.view {
        #[cfg(feature = "viewer")]
        orbsim::run_3d(output.trajectories);
        #[cfg(not(feature = "viewer"))]
        tracing::warn!("built without the `viewer` feature, skipping replay");
    }

    Ok(())
}

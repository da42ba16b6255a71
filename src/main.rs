use gravbox::{ConfigError, ErrorClass, RunConfig};
use gravbox::{Engine, ProgressLog, Scenario, Snapshot, FINAL_FILE, INIT_FILE};

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::{error, info, Level};

use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "gravbox",
    about = "N-body gravity in a reflective cubic enclosure",
    override_usage = "gravbox <num_objects> <num_iterations> <random_seed> <size_enclosure> <time_step>\n       gravbox --config <FILE>"
)]
struct Args {
    /// num_objects num_iterations random_seed size_enclosure time_step
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    values: Vec<String>,

    /// Read the five run values from a YAML file instead
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Directory for init_config.txt and final_config.txt
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Log every tick
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

// keep main clean: config problems map to exit statuses here
fn load_config(args: &Args) -> Result<RunConfig, ConfigError> {
    match &args.config {
        Some(path) if args.values.is_empty() => RunConfig::from_yaml_path(path),
        Some(_) => Err(ConfigError::ArgumentCount {
            expected: 0,
            found: args.values.len(),
        }),
        None => RunConfig::from_args(&args.values),
    }
}

fn init_tracing(args: &Args) {
    let level = if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::WARN
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: &RunConfig, output_dir: &Path) -> Result<()> {
    info!(
        num_objects = config.num_objects,
        num_iterations = config.num_iterations,
        random_seed = config.random_seed,
        size_enclosure = config.size_enclosure,
        time_step = config.time_step,
        "starting run"
    );

    let mut scenario = Scenario::build_scenario(config);
    info!(
        bodies = scenario.system.body_count(),
        merged = scenario.initial_merges.len(),
        "initial collisions resolved"
    );

    let init_path = output_dir.join(INIT_FILE);
    Snapshot::capture(&scenario.parameters, &scenario.system)
        .save(&init_path)
        .with_context(|| format!("writing {}", init_path.display()))?;
    info!(path = %init_path.display(), "initial snapshot written");

    let engine = Engine::new(config.num_iterations);
    let outcome = engine.run(&mut scenario, &mut ProgressLog);

    let final_path = output_dir.join(FINAL_FILE);
    Snapshot::capture(&scenario.parameters, &scenario.system)
        .save(&final_path)
        .with_context(|| format!("writing {}", final_path.display()))?;
    info!(path = %final_path.display(), "final snapshot written");

    info!(
        ticks = outcome.ticks,
        merges = outcome.merges,
        bodies = scenario.system.body_count(),
        total_mass = scenario.system.total_mass(),
        interrupted = outcome.interrupted,
        "run finished"
    );

    Ok(())
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(ErrorClass::Arguments.exit_code()),
            };
        }
    };

    init_tracing(&args);

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(e.class().exit_code());
        }
    };

    match run(&config, &args.output_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

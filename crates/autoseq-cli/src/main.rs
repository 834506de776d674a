//! `autoseq-cli` – assemble and run autonomous routines on simulated
//! hardware.
//!
//! This binary is the consumer side of the composition contract: it resolves
//! a routine (built-in preset or TOML file), builds a simulated hardware map
//! with the devices the routine names, assembles the action sequence, and
//! drives it with the reference tick runner.  Ctrl-C sets a stop flag the
//! runner observes between polls; on an aborted run every acquired motor is
//! commanded to zero power before exit.

mod config;
mod runner;

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::{error, info, warn};

use autoseq_hal::SimHardware;
use autoseq_routines::{Routine, SimPlanner};
use autoseq_types::AutoError;

use runner::RunOutcome;

#[derive(Parser)]
#[command(name = "autoseq", about = "Assemble and run autonomous routines")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a routine against simulated hardware.
    Run {
        /// Built-in preset: "net-high" or "chamber".
        #[arg(default_value = "net-high")]
        routine: String,

        /// TOML parameter file; overrides the preset.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Scheduling tick in milliseconds.
        #[arg(long, default_value_t = 50)]
        tick_ms: u64,

        /// Simulated polls per trajectory segment.
        #[arg(long, default_value_t = 10)]
        polls_per_segment: u32,
    },
    /// Print a routine's resolved parameters as TOML.
    Show {
        #[arg(default_value = "net-high")]
        routine: String,

        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    // Structured logging via RUST_LOG (defaults to "info"); set
    // AUTOSEQ_LOG_FORMAT=json for newline-delimited JSON.
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    if std::env::var("AUTOSEQ_LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .compact()
            .init();
    }

    let cli = Cli::parse();
    if let Err(e) = dispatch(cli) {
        error!(error = %e, "routine failed");
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<(), AutoError> {
    match cli.command {
        Command::Run {
            routine,
            config,
            tick_ms,
            polls_per_segment,
        } => run(&routine, config.as_deref(), tick_ms, polls_per_segment),
        Command::Show { routine, config } => show(&routine, config.as_deref()),
    }
}

fn run(
    name: &str,
    file: Option<&std::path::Path>,
    tick_ms: u64,
    polls_per_segment: u32,
) -> Result<(), AutoError> {
    let config = config::load(name, file)?;

    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = stop.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        stop_flag.store(true, Ordering::SeqCst);
    }) {
        warn!(error = %e, "failed to install Ctrl-C handler; external stop will not be observed");
    }

    let mut map = SimHardware::builder()
        .with_motor(config.lift.motor.as_str())
        .with_servo(config.intake.servo.as_str())
        .build();

    let routine = Routine::new(&mut map, config)?;
    info!(routine = routine.name(), tick_ms, "starting run");

    let sequence = routine.assemble(&mut SimPlanner::new(polls_per_segment));
    let outcome = runner::run_to_completion(sequence, Duration::from_millis(tick_ms), &stop)?;

    match outcome {
        RunOutcome::Completed => info!(routine = routine.name(), "run complete"),
        RunOutcome::Aborted => {
            warn!(routine = routine.name(), "run aborted by external stop");
            routine.safe_all()?;
        }
    }
    Ok(())
}

fn show(name: &str, file: Option<&std::path::Path>) -> Result<(), AutoError> {
    let config = config::load(name, file)?;
    let text = toml::to_string_pretty(&config)
        .map_err(|e| AutoError::Config(format!("cannot render configuration: {e}")))?;
    println!("{text}");
    Ok(())
}

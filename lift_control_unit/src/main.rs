//! # Lift Control Unit
//!
//! Scan-based safety controller for a single-axis vertical lift, driven
//! against a simulated plant. Reads operator commands from stdin, runs
//! the fixed-period scan cycle, and reports status via tracing.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use lift_common::config::SimConfig;
use lift_control_unit::console;
use lift_control_unit::cycle::ScanRunner;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

/// Lift Control Unit — cyclic safety controller simulation
#[derive(Parser, Debug)]
#[command(name = "lift_control_unit")]
#[command(version)]
#[command(about = "Scan-based safety controller for a single-axis vertical lift")]
struct Args {
    /// Path to the simulation configuration TOML. Design defaults apply
    /// if absent.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format.
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    setup_tracing(&args);

    info!("Lift Control Unit v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&args) {
        error!("FATAL: {e}");
        process::exit(1);
    }

    info!("Lift Control Unit shutdown complete");
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => {
            let config = SimConfig::load(path)?;
            info!("Config OK: {}", path.display());
            config
        }
        None => {
            info!("No config file given, using design defaults");
            SimConfig::default()
        }
    };
    info!(
        "scan_time={}µs max_load={}kg lift_speed={} lower_speed={}",
        config.scan.scan_time_us,
        config.tuning.max_load_kg,
        config.tuning.lift_speed,
        config.tuning.lower_speed,
    );

    // Setup signal handler for graceful shutdown.
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        info!("Received shutdown signal");
        r.store(false, Ordering::SeqCst);
    })?;

    console::print_help();
    let commands = console::spawn_reader();

    let mut runner = ScanRunner::new(config);
    info!("ScanRunner initialized, entering scan loop");
    runner.run(&commands, &running);

    Ok(())
}

/// Setup tracing subscriber based on CLI arguments.
fn setup_tracing(args: &Args) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .init();
    }
}

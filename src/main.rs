mod config;
mod console;
mod engine;
mod shape;
mod types;

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::GeneratorConfig;
use engine::bank::WaveformBank;
use engine::timer::TICK_INTERVAL;

/// Four-engine waveform generator: pulse, sawtooth, triangle and sine
#[derive(Parser, Debug)]
#[command(name = "the-wavegen")]
#[command(about = "Real-time multi-waveform signal generator", long_about = None)]
struct Args {
    /// Startup configuration file (YAML)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Tick interval in microseconds
    #[arg(long = "tick-us", default_value_t = TICK_INTERVAL.as_micros() as u64)]
    tick_us: u64,

    /// Validate the configuration and exit
    #[arg(long = "check")]
    check: bool,
}

/// Log to stderr so the console keeps stdout to itself
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = match &args.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };

    if args.check {
        println!("Configuration OK");
        return Ok(());
    }

    if args.tick_us == 0 {
        return Err(anyhow::anyhow!("Tick interval must be at least 1 us"));
    }
    let interval = Duration::from_micros(args.tick_us);

    let bank = WaveformBank::spawn(interval).context("Failed to start waveform engines")?;
    bank.apply_config(&config)
        .context("Failed to apply startup configuration")?;
    info!(config = ?args.config, "generator ready");

    let result = console::run(&bank, io::stdin().lock(), io::stdout());
    bank.shutdown();
    result
}

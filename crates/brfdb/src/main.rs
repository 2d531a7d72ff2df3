//! brfdb - Bridge MAC table viewer
//!
//! Entry point for the brfdb command.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use brfdb::{write_failure, write_header, BrfdbConfig, BrfdbError, DEFAULT_CONFIG_PATH};

/// Show the learned MAC addresses of a Linux bridge
#[derive(Parser, Debug)]
#[command(name = "brfdb")]
#[command(version, about, long_about = None)]
struct Args {
    /// Bridge name (e.g. br0)
    bridge: String,

    /// Directory holding the network device entries
    #[arg(long, value_name = "PATH")]
    sysfs_root: Option<PathBuf>,

    /// Configuration file
    #[arg(short = 'c', long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Log filter (e.g. debug or brfdb=trace); overrides RUST_LOG
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

/// Loads the configuration file and applies command line overrides
fn load_config(args: &Args) -> Result<BrfdbConfig> {
    let mut config = BrfdbConfig::load_or_default(&args.config)
        .with_context(|| format!("loading configuration from {}", args.config.display()))?;

    if let Some(root) = &args.sysfs_root {
        config.sysfs.root = root.clone();
    }
    config.validate().context("validating configuration")?;

    Ok(config)
}

/// Initializes tracing/logging subsystem
///
/// Logs go to stderr so the table on stdout stays clean.
fn init_logging(args: &Args, config: &BrfdbConfig) -> Result<()> {
    let env_filter = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = config.log_directive(args.log_level.as_deref(), env_filter.as_deref());
    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("invalid log filter '{}'", directive))?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("setting tracing subscriber")?;
    Ok(())
}

fn report_failure(bridge: &str, err: &BrfdbError) {
    debug!(error = ?err, "brfdb run failed");
    // Nothing useful left to do if stderr is gone.
    let _ = write_failure(&mut io::stderr().lock(), err, bridge);
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("brfdb: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&args, &config) {
        eprintln!("brfdb: {:#}", e);
        return ExitCode::FAILURE;
    }

    let layout = config.layout();
    debug!(bridge = %args.bridge, root = %layout.root().display(), "Starting brfdb");

    let mut out = io::stdout().lock();
    if let Err(e) = write_header(&mut out) {
        eprintln!("brfdb: {}", e);
        return ExitCode::FAILURE;
    }

    match brfdb::run(&layout, &args.bridge, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&args.bridge, &err);
            ExitCode::FAILURE
        }
    }
}

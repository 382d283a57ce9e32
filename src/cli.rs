//! Command-line interface components.

use crate::config::SubsetConfig;
use crate::constants::{DEFAULT_INDENT_WIDTH, LOG_TARGET};
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

/// Subset reach, basin, continent, reach-node and set JSON files
///
/// Reads basin.json, continent.json, reach_node.json, reaches.json and
/// sets.json from the data directory and writes a `-subset.json` copy of
/// each, holding only records related to the listed reaches.
#[derive(Parser, Debug, Clone)]
#[command(name = "reach-subset")]
#[command(about = "Subset hydrological JSON datasets to a list of reach identifiers")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to JSON file that contains a list of reach IDs to subset
    #[arg(short = 's', long = "subset", value_name = "PATH")]
    pub subset: PathBuf,

    /// Path to directory where JSON files to subset are located
    #[arg(short = 'd', long = "datadir", value_name = "PATH")]
    pub datadir: PathBuf,

    /// Path to directory where subset files will be saved
    #[arg(short = 'o', long = "outdir", value_name = "PATH")]
    pub outdir: PathBuf,

    /// Filter the five datasets concurrently
    #[arg(long)]
    pub parallel: bool,

    /// Spaces per indent level in output files
    #[arg(long, value_name = "N", default_value_t = DEFAULT_INDENT_WIDTH)]
    pub indent: usize,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build the run configuration from the flags
    pub fn to_config(&self) -> SubsetConfig {
        let mut config = SubsetConfig::default().with_indent_width(self.indent);
        if self.parallel {
            config = config.with_parallel();
        }
        if self.quiet {
            config = config.without_progress();
        }
        config
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

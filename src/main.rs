//! pepscan main entry point
//!
//! This is the command-line interface for the PEP registry auditor.

use clap::{Parser, ValueEnum};
use pepscan::audit::run_audit;
use pepscan::config::{load_config, Config};
use pepscan::expect::ExpectationTable;
use pepscan::fetch::Fetcher;
use pepscan::output::{emit, OutputMode};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use url::Url;

/// pepscan: a PEP registry auditor
///
/// pepscan walks the numerical index of Python Enhancement Proposals,
/// fetches every proposal's detail page, flags type and status texts that
/// drift from their index codes, and tallies proposals per status.
#[derive(Parser, Debug)]
#[command(name = "pepscan")]
#[command(version)]
#[command(about = "Audits the PEP index against its detail pages", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Where the result table goes
    #[arg(short, long, value_enum, default_value_t = OutputArg::Console)]
    output: OutputArg,

    /// Drop the page cache before fetching
    #[arg(long)]
    clear_cache: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// CLI-facing names for the output modes
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputArg {
    /// Tab-separated rows on stdout
    Console,
    /// Aligned table on stdout
    Pretty,
    /// CSV file in the results directory
    File,
}

impl From<OutputArg> for OutputMode {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Console => OutputMode::Console,
            OutputArg::Pretty => OutputMode::Pretty,
            OutputArg::File => OutputMode::File,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);
    tracing::info!("pepscan started");

    // Load configuration, falling back to built-in defaults
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    let index_url = Url::parse(&config.registry.index_url)?;

    let fetcher = Fetcher::new(&config.fetch)?;
    if cli.clear_cache {
        let removed = fetcher.clear_cache()?;
        tracing::info!("Cleared {} cached pages", removed);
    }

    let expectations = ExpectationTable::builtin();
    let report = run_audit(&fetcher, &expectations, &index_url).await?;

    if !report.diagnostics.is_empty() {
        tracing::warn!(
            "{} mismatches between index codes and detail pages",
            report.diagnostics.len()
        );
    }
    if report.rows_skipped > 0 {
        tracing::warn!("{} rows skipped; see log for details", report.rows_skipped);
    }

    emit(
        &report.table,
        cli.output.into(),
        Path::new(&config.output.results_dir),
    )?;

    tracing::info!("pepscan finished");
    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pepscan=info,warn"),
            1 => EnvFilter::new("pepscan=debug,info"),
            2 => EnvFilter::new("pepscan=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

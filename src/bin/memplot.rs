//! memplot - memory usage series from application logs.
//!
//! Reads a log file, extracts memory snapshots from its INFO lines and
//! prints them as chart points on an absolute time axis.
//!
//! Usage:
//!   memplot app.log                  # JSON points, day origin = today 00:00 local
//!   memplot app.log -b 2024-01-01    # day origin = that date 00:00 local
//!   memplot app.log --format table   # human-readable table
//!   memplot app.log --mode lenient   # skip bad lines instead of failing
//!   memplot                          # built-in demo series

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::{Level, debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use memplot::collector::LogCollector;
use memplot::collector::log_collector::INFO_MARKER;
use memplot::fmt::{FmtStyle, format_bytes, format_time_of_day};
use memplot::render::{JsonRenderer, Renderer, TableRenderer};
use memplot::util::{parse_day_origin, start_of_local_day};
use memplot::{BuilderConfig, ParseMode, Series};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
}

/// Memory usage series from application logs.
#[derive(Parser)]
#[command(name = "memplot", about = "Memory usage series from application logs", version)]
struct Args {
    /// Log file to read. Without it the built-in demo series is printed.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// What to do with INFO lines that fail to parse: fail-fast or lenient.
    #[arg(long, env = "MEMPLOT_MODE", default_value = "fail-fast")]
    mode: ParseMode,

    /// Day the log was written on. Supported formats:
    /// - today, yesterday
    /// - Date: 2024-01-01 (local midnight)
    /// - Epoch milliseconds: 1704067200000
    #[arg(short = 'b', long = "day", env = "MEMPLOT_DAY", value_name = "DAY")]
    day: Option<String>,

    /// Substring marking qualifying lines.
    #[arg(long, default_value = INFO_MARKER)]
    marker: String,

    /// Output format.
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Fail if sample times go backwards.
    #[arg(long)]
    check_order: bool,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Initializes the tracing subscriber on stderr so stdout stays machine-readable.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("memplot={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Describes a series for logging.
fn describe_series(series: &Series) -> String {
    let summary = series.summary();
    let mut parts = vec![format!("{} samples", summary.count)];
    if let (Some(first), Some(last)) = (summary.first_time, summary.last_time) {
        parts.push(format!(
            "{}..{}",
            format_time_of_day(first),
            format_time_of_day(last)
        ));
    }
    if let Some(peak) = summary.peak_used {
        parts.push(format!("peak used {}", format_bytes(peak, FmtStyle::Detail)));
    }
    if !series.skipped().is_empty() {
        parts.push(format!("{} skipped", series.skipped().len()));
    }
    parts.join(", ")
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    let day_origin = match args.day.as_deref() {
        Some(expr) => parse_day_origin(expr),
        None => start_of_local_day(),
    };
    let day_origin = match day_origin {
        Ok(ms) => ms,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let config = BuilderConfig {
        mode: args.mode,
        marker: args.marker,
    };
    debug!(
        "Config: mode={:?}, marker={:?}, day_origin={}",
        config.mode, config.marker, day_origin
    );

    let series = match args.file {
        Some(ref path) => match LogCollector::new(&config).collect_file(path) {
            Ok(series) => series,
            Err(e) => {
                error!("Failed to read {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            info!("No log file given, using demo series");
            Series::fallback()
        }
    };

    info!("Series: {}", describe_series(&series));
    info!(
        "usedMemory <= totalMemory always holds: {}",
        series.all_samples_consistent()
    );
    for skipped in series.skipped() {
        debug!("Skipped line {}: {}", skipped.line, skipped.error);
    }

    if !series.is_time_ordered() {
        if args.check_order {
            error!("Sample times are not in non-decreasing order");
            std::process::exit(2);
        }
        warn!("Sample times are not in non-decreasing order");
    }

    let points = match series.to_chart_points(day_origin) {
        Ok(points) => points,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    let stdout = std::io::stdout().lock();
    let mut renderer: Box<dyn Renderer> = match args.format {
        OutputFormat::Json => Box::new(JsonRenderer::new(stdout)),
        OutputFormat::Table => Box::new(TableRenderer::new(stdout)),
    };

    if let Err(e) = renderer.render(day_origin, &points) {
        error!("Failed to write output: {}", e);
        std::process::exit(1);
    }
}

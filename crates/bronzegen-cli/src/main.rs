mod config;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use bronzegen_core::{TimestampWindow, parse_timestamp};
use bronzegen_generate::{
    BooksOptions, Dataset, GenerateOptions, GenerationEngine, GenerationError,
    InStoreOrdersOptions, OnlineOrdersOptions, StoresOptions,
};
use chrono::{Local, NaiveDateTime, TimeDelta, Timelike};
use clap::{Args, Parser, Subcommand};
use config::Defaults;
use logging::{LogFormat, init_logging};
use thiserror::Error;

/// Width of the order timestamp window when neither bound is given.
const DEFAULT_WINDOW_MINUTES: i64 = 5;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    ConfigDecode {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("logging error: {0}")]
    Logging(String),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl CliError {
    /// Usage mistakes exit with 2, like clap's own parse errors.
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage(_) | CliError::Generation(GenerationError::InvalidOptions(_)) => 2,
            _ => 1,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "bronzegen",
    version,
    about = "Generate bronze-layer CSV test data for the bookstore pipeline"
)]
struct Cli {
    /// TOML file with default seed, timestamp window and output directory.
    #[arg(long, global = true, env = "BRONZEGEN_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,
    /// Format of log events written to stderr.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
    /// Also write a JSON run report to this path.
    #[arg(long, global = true, value_name = "FILE")]
    report: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Book rows with a mix of valid and DQ-failing records.
    Books(BooksArgs),
    /// Store master rows numbered STR-0001 upwards.
    Stores(StoresArgs),
    /// In-store orders referencing generated books and stores.
    InstoreOrders(InStoreOrdersArgs),
    /// Online orders referencing generated books and the customer list.
    OnlineOrders(OnlineOrdersArgs),
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Random seed.
    #[arg(long)]
    seed: Option<u64>,
    /// Output CSV path.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct WindowArgs {
    /// Earliest order timestamp (YYYY-MM-DD HH:MM:SS).
    #[arg(long, value_parser = parse_timestamp_arg)]
    start: Option<NaiveDateTime>,
    /// Latest order timestamp (YYYY-MM-DD HH:MM:SS).
    #[arg(long, value_parser = parse_timestamp_arg)]
    end: Option<NaiveDateTime>,
}

#[derive(Args, Debug)]
struct BooksArgs {
    /// Number of rows passing every DQ check.
    #[arg(long)]
    valid: u64,
    /// Number of rows failing exactly one DQ check.
    #[arg(long)]
    invalid: u64,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct StoresArgs {
    /// Number of stores.
    #[arg(long)]
    count: u64,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct InStoreOrdersArgs {
    /// Number of orders.
    #[arg(long)]
    count: u64,
    /// Books CSV to draw valid ISBNs from.
    #[arg(long, value_name = "FILE")]
    books: PathBuf,
    /// Stores CSV to draw store numbers from.
    #[arg(long, value_name = "FILE")]
    stores: PathBuf,
    #[command(flatten)]
    window: WindowArgs,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct OnlineOrdersArgs {
    /// Number of orders.
    #[arg(long)]
    count: u64,
    /// Books CSV to draw valid ISBNs from.
    #[arg(long, value_name = "FILE")]
    books: PathBuf,
    #[command(flatten)]
    window: WindowArgs,
    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.log_format) {
        eprintln!("error: {err}");
        return ExitCode::from(1);
    }

    match run(cli) {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<String, CliError> {
    let defaults = Defaults::load(cli.config.as_deref())?;
    if let Some(path) = &cli.config {
        tracing::debug!(path = %path.display(), "config loaded");
    }

    let (dataset, output) = resolve(cli.command, &defaults)?;
    let engine = GenerationEngine::new(GenerateOptions {
        output: output.or_else(|| defaults.output_for(dataset.default_file_name())),
        report: cli.report,
    });
    let result = engine.run(&dataset)?;
    Ok(result.report.summary())
}

/// Merge command-line arguments over the config defaults.
fn resolve(command: Command, defaults: &Defaults) -> Result<(Dataset, Option<PathBuf>), CliError> {
    let resolved = match command {
        Command::Books(args) => (
            Dataset::Books(BooksOptions {
                valid: args.valid,
                invalid: args.invalid,
                seed: args.output.seed.or(defaults.seed),
            }),
            args.output.output,
        ),
        Command::Stores(args) => (
            Dataset::Stores(StoresOptions {
                count: args.count,
                seed: args.output.seed.or(defaults.seed),
            }),
            args.output.output,
        ),
        Command::InstoreOrders(args) => (
            Dataset::InStoreOrders(InStoreOrdersOptions {
                count: args.count,
                books: args.books,
                stores: args.stores,
                seed: args.output.seed.or(defaults.seed),
                window: resolve_window(&args.window, defaults)?,
            }),
            args.output.output,
        ),
        Command::OnlineOrders(args) => (
            Dataset::OnlineOrders(OnlineOrdersOptions {
                count: args.count,
                books: args.books,
                seed: args.output.seed.or(defaults.seed),
                window: resolve_window(&args.window, defaults)?,
            }),
            args.output.output,
        ),
    };
    Ok(resolved)
}

/// Each bound falls back independently: flag, then config, then the trailing window ending now.
fn resolve_window(args: &WindowArgs, defaults: &Defaults) -> Result<TimestampWindow, CliError> {
    let now = Local::now().naive_local();
    let now = now.with_nanosecond(0).unwrap_or(now);

    let end = match args.end {
        Some(end) => end,
        None => defaults.end()?.unwrap_or(now),
    };
    let start = match args.start {
        Some(start) => start,
        None => defaults
            .start()?
            .unwrap_or(now - TimeDelta::minutes(DEFAULT_WINDOW_MINUTES)),
    };

    TimestampWindow::new(start, end).map_err(|err| CliError::Usage(err.to_string()))
}

fn parse_timestamp_arg(value: &str) -> Result<NaiveDateTime, String> {
    parse_timestamp(value).map_err(|err| err.to_string())
}

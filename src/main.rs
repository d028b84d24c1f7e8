use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use clap::Parser;
use linecalc::{
    driver::{DEFAULT_MAX_LINE_LENGTH, DriverConfig, LineEnding, answer_one, serve},
    error::DriverError,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// linecalc evaluates integer arithmetic, one line at a time, with every step
/// checked for overflow and division by zero.
///
/// Without arguments it answers lines from standard input until the input
/// closes, which makes it usable behind a serial console.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates this expression and exits.
    #[arg(conflicts_with = "file")]
    expression: Option<String>,

    /// Reads expression lines from a file instead of standard input.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Longest accepted line, in bytes.
    #[arg(short, long, default_value_t = DEFAULT_MAX_LINE_LENGTH)]
    max_line_length: usize,

    /// Ends replies with `\r\n` instead of `\n`.
    #[arg(long)]
    crlf: bool,

    /// Logs every evaluated line to standard error.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), DriverError> {
    let config = DriverConfig { max_line_length: args.max_line_length,
                                line_ending:     if args.crlf {
                                    LineEnding::CrLf
                                } else {
                                    LineEnding::Lf
                                }, };
    let stdout = io::stdout().lock();

    if let Some(expression) = &args.expression {
        answer_one(expression, stdout, &config)
    } else if let Some(path) = &args.file {
        serve(BufReader::new(File::open(path)?), stdout, &config).map(drop)
    } else {
        serve(io::stdin().lock(), stdout, &config).map(drop)
    }
}

/// Logs go to standard error so replies on standard output stay clean.
/// `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                    .with_target(true)
                                                    .with_level(true))
                                  .with(filter)
                                  .init();
}

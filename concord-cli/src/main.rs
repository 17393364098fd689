//! Concord CLI - word concordance builder
//!
//! Reads text from a file or standard input, builds the concordance and
//! writes one record per line, sorted by the requested field.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use concord_core::analyzer::IgnoreSet;
use concord_core::concordance::{build_from_reader, write_concordance};
use concord_core::SortKey;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "concord")]
#[command(version)]
#[command(about = "Builds a word concordance from text", long_about = None)]
struct Cli {
    /// Field to sort by: word, count, fstPosition or avgDistance
    #[arg(short, long)]
    field: String,

    /// Sort direction: asc or desc
    #[arg(short, long)]
    sort: String,

    /// Input file (defaults to standard input)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (defaults to standard output)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Space-separated words to leave out (can be specified multiple times)
    #[arg(long, value_name = "WORDS")]
    ignore: Vec<String>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let key = match SortKey::parse(&cli.field, &cli.sort) {
        Ok(key) => key,
        Err(e) => return usage_error(e),
    };

    let (input, output) = match open_streams(&cli) {
        Ok(streams) => streams,
        Err(e) => return usage_error(format!("{e:#}")),
    };

    match run(&cli, key, input, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Reports a rejected invocation together with the usage line.
fn usage_error(e: impl std::fmt::Display) -> ExitCode {
    eprintln!("error: {e}");
    eprintln!("{}", Cli::command().render_usage());
    ExitCode::FAILURE
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn open_streams(cli: &Cli) -> Result<(Box<dyn Read>, Box<dyn Write>)> {
    let input = open_input(cli.input.as_ref())?;
    let output = open_output(cli.output.as_ref())?;
    Ok((input, output))
}

fn run(cli: &Cli, key: SortKey, input: Box<dyn Read>, output: Box<dyn Write>) -> Result<()> {
    let ignore = IgnoreSet::from_words(
        cli.ignore
            .iter()
            .flat_map(|list| list.split_ascii_whitespace()),
    );
    debug!(words = ignore.len(), "ignore set ready");

    let mut concordance = build_from_reader(input, &ignore).context("failed to read input")?;
    info!(words = concordance.len(), %key, "concordance ready");

    concordance.sort_by(key);

    let mut out = BufWriter::new(output);
    write_concordance(&concordance, &mut out).context("failed to write output")?;
    out.flush().context("failed to write output")?;

    Ok(())
}

fn open_input(path: Option<&PathBuf>) -> Result<Box<dyn Read>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("can't open input file {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn open_output(path: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("can't open output file {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

//! `csv-sniff` CLI: run dialect detection against a file and print the result.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use csv_dialect_sniff::dsv::{detect_dialect, fixtures, DialectOptions, FileBufferManager};

#[derive(Debug, Parser)]
#[command(name = "csv-sniff")]
#[command(about = "CSV dialect detection toolkit", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Detect the dialect of a CSV file and print it
    Sniff(SniffArgs),
    /// Generate a synthetic CSV fixture
    GenerateFixture(GenerateFixtureArgs),
}

#[derive(Debug, Parser)]
struct SniffArgs {
    /// Path of the file to sniff
    path: PathBuf,

    /// Pin the delimiter byte instead of detecting it
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Pin the quote byte instead of detecting it
    #[arg(short, long)]
    quote: Option<char>,

    /// Allow short rows to be padded with NULLs
    #[arg(long)]
    null_padding: bool,

    /// Number of leading rows to skip before sniffing
    #[arg(long, default_value_t = 0)]
    skip_rows: usize,

    /// Number of chunks to sample before committing to a winner
    #[arg(long, default_value_t = 10)]
    sample_chunks: usize,

    /// Print the result as JSON instead of a human-readable summary
    #[arg(long)]
    json: bool,
}

/// Generate a synthetic CSV fixture
#[derive(Debug, Parser)]
struct GenerateFixtureArgs {
    /// Target size in bytes
    size: usize,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fixture pattern to generate
    #[arg(short, long, default_value = "rfc-quoted")]
    pattern: PatternArg,

    /// Random seed for reproducible generation
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Debug, Clone, ValueEnum)]
enum PatternArg {
    RfcQuoted,
    Ragged,
    Preamble,
    TabSingleQuote,
    EscapedQuotes,
}

impl From<PatternArg> for fixtures::FixturePattern {
    fn from(arg: PatternArg) -> Self {
        match arg {
            PatternArg::RfcQuoted => fixtures::FixturePattern::RfcQuoted,
            PatternArg::Ragged => fixtures::FixturePattern::Ragged,
            PatternArg::Preamble => fixtures::FixturePattern::Preamble,
            PatternArg::TabSingleQuote => fixtures::FixturePattern::TabSingleQuote,
            PatternArg::EscapedQuotes => fixtures::FixturePattern::EscapedQuotes,
        }
    }
}

fn byte_arg(c: char) -> Result<u8> {
    if c.is_ascii() {
        Ok(c as u8)
    } else {
        anyhow::bail!("'{}' is not a single ASCII byte", c)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Sniff(args) => run_sniff(args),
        Command::GenerateFixture(args) => run_generate_fixture(args),
    }
}

fn run_sniff(args: SniffArgs) -> Result<()> {
    let mut options = DialectOptions::default()
        .with_null_padding(args.null_padding)
        .with_skip_rows(args.skip_rows)
        .with_sample_chunks(args.sample_chunks)
        .with_file_path(args.path.display().to_string());

    if let Some(delimiter) = args.delimiter {
        options = options.with_delimiter(byte_arg(delimiter)?);
    }
    if let Some(quote) = args.quote {
        options = options.with_quote(byte_arg(quote)?);
    }

    let buffer = FileBufferManager::open(&args.path)
        .with_context(|| format!("failed to open {}", args.path.display()))?;

    let winner = detect_dialect(buffer, &options).context("dialect detection failed")?;

    if args.json {
        let value = serde_json::json!({
            "delimiter": json_byte(winner.delimiter),
            "quote": json_byte(winner.quote),
            "escape": json_byte(winner.escape),
            "start_row": winner.start_row,
        });
        println!("{}", serde_json::to_string(&value)?);
    } else {
        println!("delimiter : {}", display_byte(winner.delimiter));
        println!("quote     : {}", display_byte(winner.quote));
        println!("escape    : {}", display_byte(winner.escape));
        println!("start_row : {}", winner.start_row);
        println!("padding   : {}", winner.null_padding);
    }

    Ok(())
}

fn run_generate_fixture(args: GenerateFixtureArgs) -> Result<()> {
    let csv = fixtures::generate_fixture(args.pattern.into(), args.size, args.seed);

    match args.output {
        Some(path) => {
            std::fs::write(&path, &csv).with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("\u{2713} wrote {} bytes to {}", csv.len(), path.display());
        }
        None => print!("{}", csv),
    }

    Ok(())
}

fn display_byte(byte: Option<u8>) -> String {
    match byte {
        Some(0) | None => "<none>".to_string(),
        Some(b) => (b as char).to_string(),
    }
}

fn json_byte(byte: Option<u8>) -> Option<char> {
    match byte {
        Some(0) | None => None,
        Some(b) => Some(b as char),
    }
}

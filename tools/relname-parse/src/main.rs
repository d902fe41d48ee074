//! Release Name Parse Tool
//!
//! Parses release names given as arguments (or one per stdin line) and
//! prints one JSON object per name. `--match` compares two titles instead.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::Parser as _;
use relname_core::{ParsedRelease, Parser, ParserConfig};
use relname_match::{DEFAULT_MATCH_THRESHOLD, match_titles, normalize_title, similarity};
use serde::Serialize;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(clap::Parser, Debug)]
#[command(name = "relname-parse")]
#[command(about = "Extract structured metadata from release names")]
#[command(version)]
struct Cli {
    /// Release names to parse. Reads stdin lines when omitted.
    names: Vec<String>,

    /// Apply the naming conventions of a tracker (btn, ptp, hdb)
    #[arg(short, long, env = "RELNAME_TRACKER")]
    tracker: Option<String>,

    /// Latest plausible release year (defaults to the current year)
    #[arg(long, env = "RELNAME_REFERENCE_YEAR")]
    reference_year: Option<u16>,

    /// Let REPACK clear PROPER
    #[arg(long)]
    repack_supersedes_proper: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Log parser decisions to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Compare two titles instead of parsing
    #[arg(long = "match", num_args = 2, value_names = ["A", "B"], conflicts_with = "names")]
    match_pair: Option<Vec<String>>,

    /// Similarity threshold for --match
    #[arg(long, default_value_t = DEFAULT_MATCH_THRESHOLD, requires = "match_pair")]
    threshold: f64,
}

impl Cli {
    fn parser_config(&self) -> ParserConfig {
        let config =
            ParserConfig::new().with_repack_supersedes_proper(self.repack_supersedes_proper);
        match self.reference_year {
            Some(year) => config.with_reference_year(year),
            None => config,
        }
    }
}

/// Output of `--match`.
#[derive(Debug, Serialize)]
struct MatchReport {
    a: String,
    b: String,
    similarity: f64,
    threshold: f64,
    matched: bool,
}

impl MatchReport {
    fn new(a: &str, b: &str, threshold: f64) -> Self {
        let a = normalize_title(a);
        let b = normalize_title(b);
        let similarity = similarity(&a, &b);
        let matched = match_titles(&a, &b, threshold);
        Self {
            a,
            b,
            similarity,
            threshold,
            matched,
        }
    }
}

/// Non-blank, trimmed lines of `reader`.
fn read_names(reader: impl BufRead) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line.context("failed to read stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            names.push(line.to_string());
        }
    }
    Ok(names)
}

fn parse_one(parser: &Parser, name: &str, tracker: Option<&str>) -> ParsedRelease {
    match tracker {
        Some(tracker) => parser.parse_with_hints(name, tracker),
        None => parser.parse(name),
    }
}

fn write_json(out: &mut impl Write, value: &impl Serialize, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(pair) = &cli.match_pair {
        let [a, b] = pair.as_slice() else {
            bail!("--match takes exactly two titles");
        };
        let report = MatchReport::new(a, b, cli.threshold);
        return write_json(&mut out, &report, cli.pretty);
    }

    if let Some(tracker) = cli.tracker.as_deref() {
        if let Err(err) = tracker.parse::<relname_core::Tracker>() {
            warn!(%err, "tracker hints will be skipped");
        }
    }

    let names = if cli.names.is_empty() {
        read_names(io::stdin().lock())?
    } else {
        cli.names.clone()
    };
    debug!(count = names.len(), "parsing names");

    let parser = Parser::new(cli.parser_config());
    for name in &names {
        let release = parse_one(&parser, name, cli.tracker.as_deref());
        write_json(&mut out, &release, cli.pretty)
            .with_context(|| format!("failed to write result for {name:?}"))?;
    }

    Ok(())
}

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use placematch::{MatchResult, PlaceMatchConfig, SignalWeights};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Decide whether two place names refer to the same place", long_about = None)]
struct Args {
    /// First place name.
    #[arg(value_name = "NAME1", required_unless_present = "pairs")]
    name1: Option<String>,
    /// Second place name.
    #[arg(value_name = "NAME2", required_unless_present = "pairs")]
    name2: Option<String>,
    /// YAML configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Stopword file (one per line). Overrides the config file.
    #[arg(long, value_name = "FILE")]
    stopwords: Option<PathBuf>,
    /// IDF file (`token=value` per line). Overrides the config file.
    #[arg(long, value_name = "FILE")]
    idf: Option<PathBuf>,
    /// Decision threshold in [0, 1].
    #[arg(long)]
    threshold: Option<f64>,
    /// Surface, token and phonetic weights, e.g. `0.35,0.30,0.35`.
    #[arg(long, value_name = "S,T,P", value_parser = parse_weights)]
    weights: Option<SignalWeights>,
    /// Tab-separated file of name pairs, one pair per line. Prints one JSON
    /// object per line.
    #[arg(long, value_name = "FILE", conflicts_with_all = ["name1", "name2"])]
    pairs: Option<PathBuf>,
}

#[derive(Serialize)]
struct PairOutput<'a> {
    name1: &'a str,
    name2: &'a str,
    #[serde(flatten)]
    result: &'a MatchResult,
}

fn parse_weights(raw: &str) -> Result<SignalWeights, String> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    let [s, t, p] = parts[..] else {
        return Err(format!("expected three comma-separated weights, got {raw:?}"));
    };
    let parse = |v: &str| {
        v.parse::<f64>()
            .map_err(|e| format!("invalid weight {v:?}: {e}"))
    };
    Ok(SignalWeights::new(parse(s)?, parse(t)?, parse(p)?))
}

/// Split a pairs file into `(name1, name2)` pairs. Blank lines are ignored;
/// lines without exactly two tab-separated fields are returned by 1-based
/// line number.
fn parse_pairs(content: &str) -> (Vec<(&str, &str)>, Vec<usize>) {
    let mut pairs = Vec::new();
    let mut rejected = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match line.split_once('\t') {
            Some((a, b)) if !b.contains('\t') => pairs.push((a, b)),
            _ => rejected.push(idx + 1),
        }
    }
    (pairs, rejected)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => PlaceMatchConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => PlaceMatchConfig::default(),
    };
    if let Some(path) = &args.stopwords {
        config.resources.stopwords = Some(path.clone());
    }
    if let Some(path) = &args.idf {
        config.resources.idf = Some(path.clone());
    }
    if let Some(threshold) = args.threshold {
        config.matcher.set_threshold(threshold)?;
    }
    if let Some(weights) = args.weights {
        config.matcher.set_weights(weights)?;
    }

    let matcher = config.build_matcher()?;

    if let Some(path) = &args.pairs {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read pairs from {}", path.display()))?;

        let (pairs, rejected) = parse_pairs(&content);
        for line_no in rejected {
            eprintln!(
                "{}:{line_no}: expected two tab-separated names, skipping",
                path.display()
            );
        }

        let results = matcher.score_pairs(&pairs);
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        for ((name1, name2), result) in pairs.iter().zip(&results) {
            let line = serde_json::to_string(&PairOutput {
                name1,
                name2,
                result,
            })?;
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        return Ok(());
    }

    let (Some(name1), Some(name2)) = (&args.name1, &args.name2) else {
        bail!("two names are required unless --pairs is given");
    };
    let result = matcher.is_same_place(name1, name2);
    println!(
        "{}",
        serde_json::to_string_pretty(&PairOutput {
            name1,
            name2,
            result: &result,
        })?
    );

    Ok(())
}

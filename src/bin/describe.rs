//! Print descriptive statistics for a file of whitespace-separated numbers

use anyhow::{Context, Result};
use clap::Parser;
use sample_io::read_sample;
use sample_stats::{summarize, SummaryConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File holding the sample
    file: PathBuf,

    /// JSON file with summary settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => SummaryConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SummaryConfig::default(),
    };

    let outcome = read_sample::<f64>(&cli.file, &config.reader);
    for diagnostic in &outcome.diagnostics {
        eprintln!("warning: {diagnostic}");
    }

    let summary = summarize(&outcome.sample, &config);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{summary}");
    }

    if summary.failures() > 0 {
        eprintln!("{} statistic(s) could not be computed", summary.failures());
    }
    Ok(())
}

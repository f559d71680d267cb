// Rust guideline compliant 2026-08-14

//! Covmerge CLI Application
//!
//! Command-line interface for merging Cobertura coverage reports.

use clap::Parser;
use covmerge_cli::{run, MergeOutcome};
use covmerge_core::Config;
use std::path::Path;

/// Merge Cobertura coverage reports into a single file
#[derive(Parser, Debug)]
#[command(
    name = "covmerge",
    version,
    about = "Merge Cobertura coverage reports into a single file",
    after_help = "Examples:\n  covmerge\n  covmerge --mask 'runs/*.xml' --output merged.xml\n  covmerge --config ci/covmerge.toml\n"
)]
struct Cli {
    /// Glob pattern selecting the coverage reports to merge
    #[arg(long)]
    mask: Option<String>,

    /// Path the merged report is written to
    #[arg(short, long)]
    output: Option<String>,

    /// Custom config file path
    #[arg(long)]
    config: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_file(Path::new(path))?,
        None => Config::load(Path::new("."))?,
    };
    if let Some(mask) = cli.mask {
        config.input_mask = mask;
    }
    if let Some(output) = cli.output {
        config.output_path = output;
    }
    config.validate()?;

    match run(&config)? {
        MergeOutcome::NoMatches => {
            println!("No files matched: {}", config.input_mask);
        }
        MergeOutcome::Merged { inputs, output } => {
            println!("Merged {} reports into {}", inputs, output.display());
        }
    }

    Ok(())
}

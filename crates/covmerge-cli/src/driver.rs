// Rust guideline compliant 2026-08-14

//! Merge driver: input discovery, the report fold, and result writing.

use anyhow::{Context, Result};
use covmerge_core::{merge_all, xml, Config};
use std::path::PathBuf;

/// Outcome of a merge run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The input mask matched no files; nothing was written.
    NoMatches,
    /// Reports were merged and written to the output path.
    Merged {
        /// Number of input reports folded into the result.
        inputs: usize,
        /// Path the merged report was written to.
        output: PathBuf,
    },
}

/// Runs a full merge: discovers inputs, folds them, writes the result.
///
/// A mask that matches nothing is not an error; the caller decides how to
/// report [`MergeOutcome::NoMatches`].
///
/// # Errors
///
/// Returns an error if the mask is invalid, only one file matches, a
/// report fails to parse, the merge fails, or the output cannot be
/// written.
pub fn run(config: &Config) -> Result<MergeOutcome> {
    let paths = matching_files(&config.input_mask)?;
    if paths.is_empty() {
        return Ok(MergeOutcome::NoMatches);
    }

    let mut reports = Vec::with_capacity(paths.len());
    for path in &paths {
        let report =
            xml::parse_file(path).with_context(|| format!("failed to parse {}", path.display()))?;
        reports.push(report);
    }

    let merged = merge_all(reports)?;

    let output = PathBuf::from(&config.output_path);
    xml::write_file(&output, &merged)
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok(MergeOutcome::Merged {
        inputs: paths.len(),
        output,
    })
}

/// Expands the input mask into a sorted list of report files.
///
/// Directories matched by the mask are skipped. Sorting keeps the fold
/// order stable across platforms.
///
/// # Errors
///
/// Returns an error if the mask is not a valid glob pattern or a matched
/// path cannot be read.
pub fn matching_files(mask: &str) -> Result<Vec<PathBuf>> {
    let entries = glob::glob(mask).with_context(|| format!("invalid input mask '{}'", mask))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.context("failed to read glob match")?;
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

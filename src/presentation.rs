// src/presentation.rs
use crate::config::Config;
use crate::error::Result;
use crate::options::OutputFormat;
use crate::stats::{FileStats, RunResult, serialize_path_lossy};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct Report<'a> {
    #[serde(serialize_with = "serialize_path_lossy")]
    root: &'a Path,
    extensions: &'a [String],
    excluded_dirs: &'a [String],
    total_lines: u64,
    files: &'a [FileStats],
    skipped: Vec<Skipped>,
}

#[derive(Serialize)]
struct Skipped {
    #[serde(serialize_with = "serialize_path_lossy")]
    path: PathBuf,
    error: String,
}

/// Prints the run result to stdout in the configured format.
///
/// # Errors
/// Returns an error if stdout cannot be written or JSON encoding fails.
pub fn print_results(result: &RunResult, config: &Config) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_results(&mut out, result, config)?;
    out.flush()?;
    Ok(())
}

/// Writes the run result to `out` in the configured format.
///
/// # Errors
/// Returns an error if `out` cannot be written or JSON encoding fails.
pub fn write_results<W: Write>(out: &mut W, result: &RunResult, config: &Config) -> Result<()> {
    match config.format {
        OutputFormat::Text => write_text(out, result, config),
        OutputFormat::Json => write_json(out, result, config),
    }
}

fn write_text<W: Write>(out: &mut W, result: &RunResult, config: &Config) -> Result<()> {
    if config.per_file {
        for file in &result.files {
            writeln!(out, "{:>9}  {}", file.lines, file.path.display())?;
        }
    }
    writeln!(
        out,
        "Total lines in {} files: {}",
        describe_extensions(&config.walk.extensions),
        result.total
    )?;
    Ok(())
}

fn write_json<W: Write>(out: &mut W, result: &RunResult, config: &Config) -> Result<()> {
    let report = Report {
        root: &config.walk.root,
        extensions: &config.walk.extensions,
        excluded_dirs: &config.walk.excluded_dirs,
        total_lines: result.total,
        files: &result.files,
        skipped: result
            .errors
            .iter()
            .map(|(path, err)| Skipped {
                path: path.clone(),
                error: err.to_string(),
            })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

/// Joins suffixes into an English list: `.a`, `.a and .b`, `.a, .b, and .c`.
pub fn describe_extensions(extensions: &[String]) -> String {
    match extensions {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [rest @ .., last] => format!("{}, and {last}", rest.join(", ")),
    }
}

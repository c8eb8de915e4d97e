// src/args.rs
use crate::options::OutputFormat;
use crate::parsers;
use clap::{Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "tally_lines",
    version,
    about = "Counts lines in C# sources and shader files below a directory, skipping `bin` folders"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Root directory to scan
    #[arg(
        value_hint = ValueHint::DirPath,
        env = "TALLY_LINES_ROOT",
        default_value = ".",
        help_heading = "Input"
    )]
    pub root: PathBuf,

    /// File name suffixes to count (comma separated, leading dot optional)
    #[arg(
        long,
        value_delimiter = ',',
        default_values = ["cs", "vert", "frag"],
        value_parser = parsers::parse_extension,
        help_heading = "Filter"
    )]
    pub ext: Vec<String>,

    /// Directory names to skip together with everything below them
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "bin",
        value_parser = parsers::parse_dir_name,
        help_heading = "Filter"
    )]
    pub exclude_dir: Vec<String>,

    /// Maximum directory depth to descend
    #[arg(long = "max-depth", value_parser = parsers::parse_positive_usize, help_heading = "Filter")]
    pub max_depth: Option<usize>,

    /// Follow symbolic links to directories
    #[arg(long, help_heading = "Input")]
    pub follow: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: OutputFormat,

    /// List the line count of every matching file
    #[arg(long, help_heading = "Output")]
    pub per_file: bool,

    /// Counting threads (0 = one per CPU)
    #[arg(short = 'j', long, default_value_t = 1, value_parser = parsers::parse_jobs, help_heading = "Behavior")]
    pub jobs: usize,

    /// Abort on the first unreadable file or directory
    #[arg(long, help_heading = "Behavior")]
    pub strict: bool,

    /// Debug logging on stderr
    #[arg(short, long, conflicts_with = "quiet", help_heading = "Behavior")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, help_heading = "Behavior")]
    pub quiet: bool,
}

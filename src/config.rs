// src/config.rs
use crate::args::Args;
use crate::error::AppError;
use crate::options::OutputFormat;
use derive_builder::Builder;
use std::path::PathBuf;

/// Suffixes counted when none are given: C# sources and two GLSL stages.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".cs", ".vert", ".frag"];

/// Directory names pruned when none are given.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["bin"];

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(error = "AppError"))]
pub struct WalkOptions {
    #[builder(default = "PathBuf::from(\".\")")]
    pub root: PathBuf,
    #[builder(default = "default_extensions()")]
    pub extensions: Vec<String>,
    #[builder(default = "default_excluded_dirs()")]
    pub excluded_dirs: Vec<String>,
    #[builder(default)]
    pub follow_links: bool,
    #[builder(default)]
    pub max_depth: Option<usize>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extensions: default_extensions(),
            excluded_dirs: default_excluded_dirs(),
            follow_links: false,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(error = "AppError"))]
pub struct Config {
    #[builder(default)]
    pub walk: WalkOptions,
    #[builder(default = "OutputFormat::Text")]
    pub format: OutputFormat,
    #[builder(default)]
    pub per_file: bool,
    /// Counting threads; never zero once built from `Args`.
    #[builder(default = "1")]
    pub jobs: usize,
    #[builder(default)]
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            walk: WalkOptions::default(),
            format: OutputFormat::Text,
            per_file: false,
            jobs: 1,
            strict: false,
        }
    }
}

impl From<derive_builder::UninitializedFieldError> for AppError {
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        Self::Config(err.to_string())
    }
}

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let walk = WalkOptionsBuilder::default()
            .root(args.root)
            .extensions(dedup(args.ext))
            .excluded_dirs(dedup(args.exclude_dir))
            .follow_links(args.follow)
            .max_depth(args.max_depth)
            .build()?;

        if walk.extensions.is_empty() {
            return Err(AppError::Config("at least one extension is required".into()));
        }

        let jobs = match args.jobs {
            0 => num_cpus::get(),
            n => n,
        };

        ConfigBuilder::default()
            .walk(walk)
            .format(args.format)
            .per_file(args.per_file)
            .jobs(jobs)
            .strict(args.strict)
            .build()
    }
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| (*s).to_string()).collect()
}

fn default_excluded_dirs() -> Vec<String> {
    DEFAULT_EXCLUDED_DIRS.iter().map(|s| (*s).to_string()).collect()
}

// Keeps first occurrence order so the summary line lists suffixes as given.
fn dedup(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

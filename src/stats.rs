// src/stats.rs
use crate::error::AppError;
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

/// Serializes a path as a string, replacing non-UTF-8 bytes.
pub fn serialize_path_lossy<P, S>(path: &P, serializer: S) -> Result<S::Ok, S::Error>
where
    P: AsRef<Path>,
    S: Serializer,
{
    serializer.serialize_str(&path.as_ref().to_string_lossy())
}

/// Line count of a single matching file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileStats {
    #[serde(serialize_with = "serialize_path_lossy")]
    pub path: PathBuf,
    pub lines: u64,
}

impl FileStats {
    pub const fn new(path: PathBuf, lines: u64) -> Self {
        Self { path, lines }
    }
}

/// Outcome of one run: counted files, their sum and everything that was skipped.
#[derive(Debug, Default)]
pub struct RunResult {
    pub files: Vec<FileStats>,
    pub total: u64,
    pub errors: Vec<(PathBuf, AppError)>,
}

impl RunResult {
    /// Builds a result from per-file counts; `total` is always their sum.
    pub fn from_parts(mut files: Vec<FileStats>, mut errors: Vec<(PathBuf, AppError)>) -> Self {
        files.sort_by(|a, b| a.path.cmp(&b.path));
        errors.sort_by(|a, b| a.0.cmp(&b.0));
        let total = files.iter().map(|f| f.lines).sum();
        Self {
            files,
            total,
            errors,
        }
    }
}

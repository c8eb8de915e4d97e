// src/engine.rs
use rayon::iter::Either;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::counter;
use crate::error::{AppError, Result};
use crate::filesystem;
use crate::stats::{FileStats, RunResult};

/// Walks `config.walk.root` and counts the lines of every matching file.
///
/// Unreadable files and directories are skipped with a warning and listed in
/// `RunResult::errors`; in strict mode the first one aborts the run instead.
///
/// # Errors
///
/// Returns an error if the root is missing or not a directory, if the thread
/// pool cannot be created, or, in strict mode, for the first walk or read
/// failure.
pub fn run(config: &Config) -> Result<RunResult> {
    let root = &config.walk.root;
    validate_root(root)?;
    debug!(
        root = %root.display(),
        extensions = ?config.walk.extensions,
        excluded = ?config.walk.excluded_dirs,
        "starting walk"
    );

    let walk = filesystem::collect_files(&config.walk);

    let mut errors = Vec::new();
    for err in walk.errors {
        if config.strict {
            return Err(AppError::Walk(err));
        }
        let path = filesystem::error_path(&err);
        warn!(path = %path.display(), error = %err, "skipping unreadable entry");
        errors.push((path, AppError::Walk(err)));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs.max(1))
        .build()
        .map_err(|e| AppError::Config(format!("cannot start {} threads: {e}", config.jobs)))?;

    let files = walk.files;
    let stats = if config.strict {
        pool.install(|| {
            files
                .par_iter()
                .map(|path| count_one(path))
                .collect::<Result<Vec<_>>>()
        })?
    } else {
        let (stats, failed): (Vec<_>, Vec<_>) = pool.install(|| {
            files
                .into_par_iter()
                .partition_map(|path| match count_one(&path) {
                    Ok(stats) => Either::Left(stats),
                    Err(e) => Either::Right((path, e)),
                })
        });
        for (path, err) in &failed {
            warn!(path = %path.display(), error = %err, "skipping unreadable file");
        }
        errors.extend(failed);
        stats
    };

    let result = RunResult::from_parts(stats, errors);
    info!(
        files = result.files.len(),
        skipped = result.errors.len(),
        total = result.total,
        "count complete"
    );
    Ok(result)
}

fn count_one(path: &Path) -> Result<FileStats> {
    let lines = counter::count_file(path)?;
    debug!(path = %path.display(), lines, "counted");
    Ok(FileStats::new(path.to_path_buf(), lines))
}

fn validate_root(root: &Path) -> Result<()> {
    match std::fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(AppError::RootNotDirectory(root.to_path_buf())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(AppError::RootNotFound(root.to_path_buf()))
        }
        Err(source) => Err(AppError::FileRead {
            path: PathBuf::from(root),
            source,
        }),
    }
}

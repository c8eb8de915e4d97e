// src/filesystem.rs
use crate::config::WalkOptions;
use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Matching files found under the root, plus entries the walker could not read.
#[derive(Debug, Default)]
pub struct WalkOutput {
    pub files: Vec<PathBuf>,
    pub errors: Vec<ignore::Error>,
}

/// Recursive directory walk.
///
/// Every directory below the root is visited, hidden ones included, and no
/// ignore files are consulted. Directories named in `excluded_dirs` are
/// pruned with their whole subtree; the root itself is never pruned.
///
/// Walk errors are returned alongside the files instead of aborting the walk.
pub fn collect_files(options: &WalkOptions) -> WalkOutput {
    let mut builder = WalkBuilder::new(&options.root);
    builder
        .standard_filters(false)
        .follow_links(options.follow_links)
        .max_depth(options.max_depth);

    let excluded = options.excluded_dirs.clone();
    builder.filter_entry(move |entry| {
        let pruned = is_pruned(entry, &excluded);
        if pruned {
            debug!(path = %entry.path().display(), "pruned directory");
        }
        !pruned
    });

    let mut output = WalkOutput::default();
    for entry in builder.build() {
        match entry {
            Ok(entry) => {
                if is_regular_file(&entry) && matches_extension(entry.path(), &options.extensions)
                {
                    trace!(path = %entry.path().display(), "matched");
                    output.files.push(entry.into_path());
                }
            }
            Err(err) => output.errors.push(err),
        }
    }
    output
}

fn is_pruned(entry: &DirEntry, excluded: &[String]) -> bool {
    entry.depth() > 0
        && entry.file_type().is_some_and(|ft| ft.is_dir())
        && excluded.iter().any(|name| entry.file_name() == name.as_str())
}

// Symlinks that do not lead to a directory are kept, dangling ones included,
// so that reading them reports the failure.
fn is_regular_file(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => !entry.path().is_dir(),
        _ => false,
    }
}

/// Returns `true` if the file name ends with one of `extensions`.
///
/// The test is a case-sensitive suffix match on the whole name, so `.cs`
/// matches both `Program.cs` and a file literally named `.cs`.
pub fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy();
    extensions.iter().any(|ext| name.ends_with(ext.as_str()))
}

/// Best-effort path for a walk error, used when reporting skipped entries.
pub fn error_path(err: &ignore::Error) -> PathBuf {
    match err {
        ignore::Error::WithPath { path, .. } => path.clone(),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => child.clone(),
        _ => PathBuf::from("<walk>"),
    }
}

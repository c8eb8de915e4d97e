use std::{
    fs,
    path::{Path, PathBuf},
};

/// Scratch directory tree removed on drop.
#[derive(Debug)]
pub struct TempDir {
    inner: tempfile::TempDir,
}

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let inner = tempfile::Builder::new().prefix(prefix).tempdir().unwrap();
        Self { inner }
    }

    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    pub fn write_file(&self, rel: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    #[allow(dead_code)]
    pub fn create_dir(&self, rel: &str) -> PathBuf {
        let path = self.path().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }
}

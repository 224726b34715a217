//! Filesystem-backed store.
use std::fs::{self, File, OpenOptions};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::{Reader, StateStore, Writer, WRITE_BUF_SIZE};

/// Store rooted at a directory on the local filesystem.
///
/// Paths are resolved relative to the root; missing parent directories are
/// created on demand.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }

    fn append_handle(&self, path: &str) -> Result<File> {
        let full = self.resolve(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(OpenOptions::new().create(true).append(true).open(full)?)
    }
}

impl StateStore for LocalStore {
    fn create(&self, path: &str) -> Result<Writer> {
        let _ = self.remove(path);
        self.touch(path)?;
        let file = self.append_handle(path)?;
        Ok(Box::new(BufWriter::with_capacity(WRITE_BUF_SIZE, file)))
    }

    fn open(&self, path: &str) -> Result<Reader> {
        Ok(Box::new(File::open(self.resolve(path))?))
    }

    fn remove(&self, path: &str) -> Result<()> {
        fs::remove_file(self.resolve(path))?;
        Ok(())
    }

    fn touch(&self, path: &str) -> Result<()> {
        self.append_handle(path)?;
        Ok(())
    }
}

//! In-memory store for tests and demos.
use std::collections::HashMap;
use std::io::{BufWriter, Cursor, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{Error, Result};

use super::{Reader, StateStore, Writer, WRITE_BUF_SIZE};

/// Store keeping file contents in a shared map.
///
/// Clones share the same backing map, so a clone captured by a writer
/// appends to the same entries the original reads.
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents of `path`, if present.
    pub fn contents(&self, path: &str) -> Option<Vec<u8>> {
        self.files().get(path).cloned()
    }

    fn files(&self) -> MutexGuard<'_, HashMap<String, Vec<u8>>> {
        match self.files.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

struct MemWriter {
    store: MemStore,
    path: String,
}

impl Write for MemWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut files = self.store.files();
        files
            .entry(self.path.clone())
            .or_default()
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl StateStore for MemStore {
    fn create(&self, path: &str) -> Result<Writer> {
        let _ = self.remove(path);
        self.touch(path)?;
        let writer = MemWriter {
            store: self.clone(),
            path: path.to_owned(),
        };
        Ok(Box::new(BufWriter::with_capacity(WRITE_BUF_SIZE, writer)))
    }

    fn open(&self, path: &str) -> Result<Reader> {
        let data = self
            .contents(path)
            .ok_or_else(|| Error::Store(format!("no such entry: {path}")))?;
        Ok(Box::new(Cursor::new(data)))
    }

    fn remove(&self, path: &str) -> Result<()> {
        self.files()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| Error::Store(format!("no such entry: {path}")))
    }

    fn touch(&self, path: &str) -> Result<()> {
        self.files().entry(path.to_owned()).or_default();
        Ok(())
    }
}

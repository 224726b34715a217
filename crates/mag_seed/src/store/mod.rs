//! Persistence sinks for sampled states.
//!
//! The [`StateStore`] contract mirrors an append-oriented remote
//! filesystem: [`StateStore::create`] truncates by removing whatever sits
//! at the path (ignoring the error when nothing does), touches the path
//! back into existence, and hands out a buffered append writer. Appends
//! batch in memory up to [`WRITE_BUF_SIZE`] bytes; buffered writers also
//! flush when dropped but ignore errors there, so callers wanting durable
//! output call `flush` themselves first.
use std::io::{Read, Write};

use crate::error::Result;

pub mod local;
pub mod mem;
pub mod ovf;

pub use local::LocalStore;
pub use mem::MemStore;
pub use ovf::{save_ovf2_binary4, save_ovf2_text, write_ovf2_binary4, write_ovf2_text, OvfMeta};

/// Append batch size of store writers.
pub const WRITE_BUF_SIZE: usize = 16 * 1024 * 1024;

/// Boxed writer returned by [`StateStore::create`].
pub type Writer = Box<dyn Write + Send>;

/// Boxed reader returned by [`StateStore::open`].
pub type Reader = Box<dyn Read + Send>;

/// Append-oriented state sink.
pub trait StateStore: Send + Sync {
    /// Starts `path` afresh and returns a buffered append writer to it.
    ///
    /// Existing content is removed first; the removal error is ignored so
    /// creating a path that does not exist yet is not a failure.
    fn create(&self, path: &str) -> Result<Writer>;

    /// Opens `path` for reading.
    fn open(&self, path: &str) -> Result<Reader>;

    /// Removes `path`. Removing a missing path is an error.
    fn remove(&self, path: &str) -> Result<()>;

    /// Ensures `path` exists, appending nothing. Existing content is left
    /// untouched.
    fn touch(&self, path: &str) -> Result<()>;
}

//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
//! Variants cover invalid mesh/sampling configuration, buffer shape mismatches,
//! store failures, IO, and generic errors.
//!
//! Singular texture inputs (vortex core, degenerate wavevector) are *not*
//! errors: generators recover them locally with documented fallback vectors.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("buffer shape mismatch: expected {expected} cells, got {got}")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("store error: {0}")]
    Store(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_string_uses_other_variant() {
        let err: Error = String::from("sampler stalled").into();
        matches!(err, Error::Other(_))
            .then_some(())
            .expect("expected Other variant");
    }

    #[test]
    fn from_str_allocates_owned_message() {
        let err: Error = "degenerate mesh".into();
        assert!(matches!(err, Error::Other(ref msg) if msg == "degenerate mesh"));
    }

    #[test]
    fn shape_mismatch_reports_both_sizes() {
        let err = Error::ShapeMismatch {
            expected: 64,
            got: 8,
        };
        let msg = err.to_string();
        assert!(msg.contains("64") && msg.contains('8'), "{msg}");
    }

    #[test]
    fn io_errors_convert_transparently() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for batch setup and per-row pipeline failures.
///
/// [`Configuration`](BatchError::Configuration) and
/// [`Input`](BatchError::Input) are fatal: they surface before any row is
/// dispatched and abort the whole batch. Every other variant is scoped to a
/// single row; the affected row is skipped and reported while its siblings
/// keep running.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("cannot read {}: {source}", .path.display())]
    Input { path: PathBuf, source: csv::Error },
    #[error("record has {found} fields but the header has {expected}")]
    SchemaMismatch { expected: usize, found: usize },
    #[error("label column {column} is out of range for a record with {len} fields")]
    LabelOutOfRange { column: usize, len: usize },
    #[error("payload does not fit at the chosen redundancy level: {detail}")]
    Encoding { detail: String },
    #[error("cannot create output directory {}: {source}", .path.display())]
    DirectoryCreate { path: PathBuf, source: io::Error },
    #[error("cannot write {}: {source}", .path.display())]
    FileWrite { path: PathBuf, source: image::ImageError },
}

impl BatchError {
    /// Whether this failure aborts the batch before any row work begins.
    ///
    /// Everything else is reported per row and never stops the dispatch of
    /// the remaining rows.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::Input { .. })
    }
}

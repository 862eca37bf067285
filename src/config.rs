//! Batch configuration.
//!
//! A [`BatchConfig`] is built once, validated up front, and passed by
//! reference into [`run_batch`](crate::batch::run_batch). There is no
//! process-wide mutable state; everything a worker needs travels through
//! this struct or values derived from it.

use std::path::PathBuf;
use std::str::FromStr;

use qrcodegen::QrCodeEcc;

use crate::error::BatchError;

/// How many scale units of rasterized output the pool may hold in flight.
/// Larger modules mean larger per-row images, so fewer concurrent workers.
const INFLIGHT_SCALE_BUDGET: u32 = 200;

/// Error-correction tier for the generated codes.
///
/// Higher tiers survive more damage to the printed code at the cost of
/// payload capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Redundancy {
    Low,
    Medium,
    Quartile,
    High,
}

impl Redundancy {
    pub(crate) fn ecc(self) -> QrCodeEcc {
        match self {
            Self::Low => QrCodeEcc::Low,
            Self::Medium => QrCodeEcc::Medium,
            Self::Quartile => QrCodeEcc::Quartile,
            Self::High => QrCodeEcc::High,
        }
    }
}

impl FromStr for Redundancy {
    type Err = BatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" | "l" => Ok(Self::Low),
            "medium" | "m" => Ok(Self::Medium),
            "quartile" | "q" => Ok(Self::Quartile),
            "high" | "h" => Ok(Self::High),
            other => Err(BatchError::Configuration(format!(
                "unknown redundancy level '{other}' (expected low, medium, quartile, or high)"
            ))),
        }
    }
}

/// Which field of each record supplies the output file name: a zero-based
/// index, or a header name resolved against the header at batch start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LabelColumn {
    Index(usize),
    Name(String),
}

impl LabelColumn {
    /// Resolve to a concrete field index.
    ///
    /// Index variants pass through untouched; bounds are checked per
    /// record, since individual records may be shorter than the header.
    ///
    /// # Errors
    /// [`BatchError::Configuration`] when a named column does not appear
    /// in the header.
    pub fn resolve(&self, header: &csv::StringRecord) -> Result<usize, BatchError> {
        match self {
            Self::Index(i) => Ok(*i),
            Self::Name(name) => header
                .iter()
                .position(|field| field == name.as_str())
                .ok_or_else(|| {
                    BatchError::Configuration(format!(
                        "label column '{name}' not found in header"
                    ))
                }),
        }
    }
}

impl FromStr for LabelColumn {
    type Err = BatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(BatchError::Configuration(
                "label column cannot be empty".to_string(),
            ));
        }
        Ok(match s.parse::<usize>() {
            Ok(index) => Self::Index(index),
            Err(_) => Self::Name(s.to_string()),
        })
    }
}

/// Immutable settings for one batch run.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Source file with one header record followed by data records.
    pub input: PathBuf,
    /// Destination directory for the generated images.
    pub output_dir: PathBuf,
    /// Field delimiter, a single byte.
    pub separator: u8,
    /// Lines starting with this byte are skipped entirely. Off when `None`.
    pub comment: Option<u8>,
    /// Field used for output file names.
    pub label_column: LabelColumn,
    /// Pixel side length of one module block.
    pub scale: u32,
    /// Error-correction tier.
    pub redundancy: Redundancy,
}

impl BatchConfig {
    /// Check settings that would otherwise fail mid-batch.
    ///
    /// # Errors
    /// [`BatchError::Configuration`] when `scale` is zero, which would
    /// yield zero-sized images and a zero-capacity pool.
    pub fn validate(&self) -> Result<(), BatchError> {
        if self.scale == 0 {
            return Err(BatchError::Configuration(
                "scale must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of rows processed concurrently, derived from `scale`.
    ///
    /// `floor(200 / scale)` with a floor of one worker: small modules
    /// allow wide fan-out, large modules throttle it to cap the memory
    /// held by in-flight images.
    pub fn worker_capacity(&self) -> usize {
        (INFLIGHT_SCALE_BUDGET / self.scale.max(1)).max(1) as usize
    }
}

//! Fans the per-row pipeline out across a bounded worker pool.
//!
//! This module provides:
//! - **One-call batch execution**: [`run_batch`] reads every record, then
//!   encodes, rasterizes, and persists one image per data row.
//! - **Bounded parallelism**: rows run on a fixed-size thread pool whose
//!   capacity shrinks as `scale` grows (see
//!   [`BatchConfig::worker_capacity`]).
//! - **Per-row fault isolation**: a failing row is logged and recorded in
//!   the [`BatchSummary`]; it never stops its siblings.
//!
//! # Design notes
//! - The parallel map is the single scatter point and its `collect` the
//!   single join barrier: every dispatched row runs to completion, success
//!   or failure, before [`run_batch`] returns.
//! - Workers share only read-only state (header, label column, stencils,
//!   configuration); each allocates its own payload, matrix, and image.

use std::path::PathBuf;

use csv::StringRecord;
use rayon::prelude::*;

use crate::config::BatchConfig;
use crate::error::BatchError;
use crate::input::read_records;
use crate::matrix::encode;
use crate::raster::{rasterize, Stencils};
use crate::row::{compose_payload, label};
use crate::sink::persist;

/// The fate of one data row.
#[derive(Debug)]
pub struct RowOutcome {
    /// Zero-based data-row index, header excluded.
    pub row: usize,
    /// The written file's path, or why the row was skipped.
    pub result: Result<PathBuf, BatchError>,
}

/// Collected results for one completed batch, in input order.
#[derive(Debug)]
pub struct BatchSummary {
    pub outcomes: Vec<RowOutcome>,
}

impl BatchSummary {
    /// Rows whose image reached the output directory.
    pub fn written(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    /// Rows skipped with a reported failure.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.written()
    }
}

/// Process every data row of the input file: parse → encode → rasterize →
/// persist, fanned out across a bounded worker pool.
///
/// Row failures are logged with their row number, collected into the
/// summary, and never stop sibling rows. The call returns only once every
/// dispatched row has completed.
///
/// # Errors
/// Setup failures abort before any row is dispatched:
/// [`BatchError::Configuration`] for a zero scale, an unresolvable label
/// column, or a pool that cannot be built, and [`BatchError::Input`] when
/// the input file cannot be read.
pub fn run_batch(config: &BatchConfig) -> Result<BatchSummary, BatchError> {
    config.validate()?;
    let stencils = Stencils::new(config.scale)?;
    let (header, rows) = read_records(&config.input, config.separator, config.comment)?;
    let column = config.label_column.resolve(&header)?;

    let capacity = config.worker_capacity();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(capacity)
        .build()
        .map_err(|e| BatchError::Configuration(format!("cannot build worker pool: {e}")))?;
    log::debug!(
        "dispatching {} rows across {} workers (scale {})",
        rows.len(),
        capacity,
        config.scale
    );

    let outcomes: Vec<RowOutcome> = pool.install(|| {
        rows.par_iter()
            .enumerate()
            .map(|(row, record)| RowOutcome {
                row,
                result: process_row(record, &header, column, config, &stencils),
            })
            .collect()
    });

    for outcome in &outcomes {
        if let Err(err) = &outcome.result {
            log::warn!("row {} skipped: {err}", outcome.row + 1);
        }
    }
    Ok(BatchSummary { outcomes })
}

/// The unit of work for exactly one record.
fn process_row(
    record: &StringRecord,
    header: &StringRecord,
    column: usize,
    config: &BatchConfig,
    stencils: &Stencils,
) -> Result<PathBuf, BatchError> {
    let identifier = label(record, column)?;
    let payload = compose_payload(header, record)?;
    let matrix = encode(&payload, config.redundancy)?;
    let image = rasterize(&matrix, stencils);
    persist(&image, &config.output_dir, identifier)
}

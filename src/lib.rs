//! # qrbatch
//!
//! A **batch QR code generator** for delimited tabular files. Every data
//! row of the input becomes one PNG image encoding the row's content as a
//! scannable QR code.
//!
//! ## Key Features
//!
//! - **Row-to-image pipeline** - parse, encode, rasterize, persist, one
//!   unit of work per data row
//! - **Bounded parallelism** - rows run concurrently on a fixed-size
//!   worker pool sized from the raster scale
//! - **Per-row fault isolation** - a short record or an oversized payload
//!   skips that row only; the rest of the batch keeps running
//! - **Deterministic naming** - a configurable label column supplies each
//!   output file name
//! - **Configurable encoding** - four QR error-correction tiers and a
//!   free choice of module scale
//!
//! ## Quick Start
//!
//! ```no_run
//! use qrbatch::{run_batch, BatchConfig, LabelColumn, Redundancy};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = BatchConfig {
//!     input: "contacts.csv".into(),
//!     output_dir: "codes".into(),
//!     separator: b';',
//!     comment: None,
//!     label_column: LabelColumn::Name("ID".to_string()),
//!     scale: 10,
//!     redundancy: Redundancy::High,
//! };
//!
//! let summary = run_batch(&config)?;
//! println!("{} of {} rows written", summary.written(), summary.outcomes.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! ### Payload
//!
//! Each record is rendered against the header as one text blob,
//! `"<header>: <value>\n"` per field in header order. The payload is a
//! pure function of header and record; nothing is cached across rows.
//!
//! ### Module matrix
//!
//! The payload is handed to the QR engine, which returns a square grid of
//! dark/light modules. Payloads that exceed the capacity of the chosen
//! error-correction tier fail that row with an encoding error.
//!
//! ### Stencils
//!
//! The rasterizer paints each module as a `scale × scale` block copied
//! from one of two solid blocks precomputed once per batch: opaque black
//! for dark modules, opaque white for light ones. A code of side `n`
//! modules therefore becomes an image of exactly `n * scale` pixels per
//! side.
//!
//! ### Worker pool
//!
//! Rows are embarrassingly parallel, but a larger scale means a larger
//! image held in memory per in-flight row. The pool capacity is
//! `floor(200 / scale)`, with a floor of one worker; admission blocks
//! while the pool is full and a slot is released when its row finishes,
//! whether it succeeded or failed.
//!
//! ## Error Handling
//!
//! Setup failures (unreadable input, zero scale, unresolvable label
//! column) surface as errors from [`run_batch`] before any row work
//! begins. Per-row failures are logged, collected into the returned
//! [`BatchSummary`], and never abort the batch.
//!
//! ## Module Overview
//!
//! - [`batch`] - batch coordinator and per-row unit of work
//! - [`config`] - immutable run configuration and pool sizing
//! - [`error`] - the error type shared across the pipeline
//! - [`input`] - delimited-file ingestion
//! - [`matrix`] - module-matrix encoding on top of the QR engine
//! - [`raster`] - stencils and the module-to-pixel rasterizer
//! - [`row`] - payload composition and label extraction
//! - [`sink`] - PNG persistence

pub mod batch;
pub mod config;
pub mod error;
pub mod input;
pub mod matrix;
pub mod raster;
pub mod row;
pub mod sink;

pub use batch::{run_batch, BatchSummary, RowOutcome};
pub use config::{BatchConfig, LabelColumn, Redundancy};
pub use error::BatchError;
pub use matrix::ModuleMatrix;
pub use raster::Stencils;

//! Delimited input ingestion.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::BatchError;

/// Read the whole input file into a header record plus data records.
///
/// * The first record is always the header and never yields an image.
/// * When `comment` is set, lines starting with that byte are skipped.
/// * Records are admitted regardless of field count; schema checks happen
///   per row so one short record cannot abort its siblings.
///
/// # Errors
/// [`BatchError::Input`] when the file cannot be opened or read.
pub fn read_records(
    path: &Path,
    separator: u8,
    comment: Option<u8>,
) -> Result<(StringRecord, Vec<StringRecord>), BatchError> {
    let input_error = |source| BatchError::Input {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .delimiter(separator)
        .comment(comment)
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(input_error)?;
    let header = reader.headers().map_err(input_error)?.clone();
    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record.map_err(input_error)?);
    }
    Ok((header, rows))
}

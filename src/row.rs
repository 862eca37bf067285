//! Turns one input record into an encodable payload and an output name.
//!
//! Both operations are pure functions of the header and the record; the
//! payload is rebuilt fresh for every row, never cached.

use csv::StringRecord;

use crate::error::BatchError;

/// Pick the output identifier from the label column.
///
/// The value is used verbatim as the base file name. Nothing checks it for
/// uniqueness: two rows with the same label write to the same file, and
/// the later one wins.
///
/// # Errors
/// [`BatchError::LabelOutOfRange`] when the record has no field at
/// `column`.
pub fn label(record: &StringRecord, column: usize) -> Result<&str, BatchError> {
    record.get(column).ok_or(BatchError::LabelOutOfRange {
        column,
        len: record.len(),
    })
}

/// Build the text payload for one record: every field rendered as
/// `"<header>: <value>\n"` in header order.
///
/// # Errors
/// [`BatchError::SchemaMismatch`] when the record's field count differs
/// from the header's.
pub fn compose_payload(
    header: &StringRecord,
    record: &StringRecord,
) -> Result<String, BatchError> {
    if record.len() != header.len() {
        return Err(BatchError::SchemaMismatch {
            expected: header.len(),
            found: record.len(),
        });
    }
    let fields: usize = header.iter().chain(record.iter()).map(str::len).sum();
    let mut payload = String::with_capacity(fields + 3 * header.len());
    for (name, value) in header.iter().zip(record.iter()) {
        payload.push_str(name);
        payload.push_str(": ");
        payload.push_str(value);
        payload.push('\n');
    }
    Ok(payload)
}

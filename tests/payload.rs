use csv::StringRecord;
use qrbatch::row::{compose_payload, label};
use qrbatch::BatchError;

#[test]
fn payload_is_the_documented_concatenation() -> anyhow::Result<()> {
    let header = StringRecord::from(vec!["Name", "ID"]);
    let record = StringRecord::from(vec!["Alice", "1"]);

    let payload = compose_payload(&header, &record)?;
    assert_eq!(payload, "Name: Alice\nID: 1\n");
    Ok(())
}

#[test]
fn payload_is_deterministic() -> anyhow::Result<()> {
    let header = StringRecord::from(vec!["a", "b", "c"]);
    let record = StringRecord::from(vec!["1", "", "x y"]);

    let first = compose_payload(&header, &record)?;
    let second = compose_payload(&header, &record)?;
    assert_eq!(first, second);
    assert_eq!(first, "a: 1\nb: \nc: x y\n");
    Ok(())
}

#[test]
fn short_record_is_a_schema_mismatch() {
    let header = StringRecord::from(vec!["Name", "ID"]);
    let record = StringRecord::from(vec!["Bob"]);

    let err = compose_payload(&header, &record).unwrap_err();
    assert!(matches!(
        err,
        BatchError::SchemaMismatch {
            expected: 2,
            found: 1
        }
    ));
    assert!(!err.is_fatal());
}

#[test]
fn long_record_is_a_schema_mismatch() {
    let header = StringRecord::from(vec!["Name"]);
    let record = StringRecord::from(vec!["Bob", "2"]);

    let err = compose_payload(&header, &record).unwrap_err();
    assert!(matches!(
        err,
        BatchError::SchemaMismatch {
            expected: 1,
            found: 2
        }
    ));
}

#[test]
fn label_picks_the_requested_column() -> anyhow::Result<()> {
    let record = StringRecord::from(vec!["Alice", "1"]);
    assert_eq!(label(&record, 0)?, "Alice");
    assert_eq!(label(&record, 1)?, "1");
    Ok(())
}

#[test]
fn label_out_of_range_is_reported() {
    let record = StringRecord::from(vec!["Alice", "1"]);
    let err = label(&record, 2).unwrap_err();
    assert!(matches!(
        err,
        BatchError::LabelOutOfRange { column: 2, len: 2 }
    ));
}

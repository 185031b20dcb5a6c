//! CSV loading for change rows
//!
//! Expected header: `id,note_id,value,effective_date` with ISO dates.
//! Balance and rate files share the layout.
//!
//! Loading is fail-fast: every row is deserialized before rows are filtered
//! by note, so one malformed row fails the load for every note in the file.
//! The `csv` error names the offending record and line.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::{ChangeRow, ChangeSeries, SeriesKind};
use crate::error::Result;
use crate::note::NoteId;

/// Load every change row from a CSV file
pub fn load_change_rows<P: AsRef<Path>>(path: P) -> Result<Vec<ChangeRow>> {
    let file = File::open(path)?;
    load_change_rows_from_reader(file)
}

/// Load every change row from any reader
pub fn load_change_rows_from_reader<R: Read>(reader: R) -> Result<Vec<ChangeRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in rdr.deserialize() {
        let row: ChangeRow = record?;
        rows.push(row);
    }
    Ok(rows)
}

/// Load a CSV file and build the validated series for one note.
/// Fails on a malformed row even if it belongs to another note.
pub fn load_series<P: AsRef<Path>>(path: P, kind: SeriesKind, note_id: NoteId) -> Result<ChangeSeries> {
    let rows = load_change_rows(path)?;
    ChangeSeries::from_rows(kind, &rows, note_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AccrualError;
    use chrono::NaiveDate;

    const RATES_CSV: &str = "\
id,note_id,value,effective_date
1,1,0.055,2024-02-01
2,2,0.040,2024-02-15
3,1,0.060,2024-05-01
";

    #[test]
    fn test_load_rows_from_reader() {
        let rows = load_change_rows_from_reader(RATES_CSV.as_bytes()).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].note_id, NoteId(2));
        assert_eq!(rows[2].effective_date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert!((rows[0].value - 0.055).abs() < 1e-12);
    }

    #[test]
    fn test_load_rows_trims_whitespace() {
        let csv = "id, note_id, value, effective_date\n1, 3, 250.0, 2024-01-31\n";
        let rows = load_change_rows_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].note_id, NoteId(3));
    }

    #[test]
    fn test_load_rows_bad_date() {
        let csv = "id,note_id,value,effective_date\n1,1,0.05,2024/02/01\n";
        assert!(load_change_rows_from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_malformed_row_of_other_note_fails_load() {
        let csv = "\
id,note_id,value,effective_date
1,1,0.05,2024-02-01
2,2,abc,2024-02-15
";
        let err = load_change_rows_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, AccrualError::Csv(_)));
        assert!(err.to_string().contains("line: 3"));
    }

    #[test]
    fn test_header_only_is_empty() {
        let csv = "id,note_id,value,effective_date\n";
        let rows = load_change_rows_from_reader(csv.as_bytes()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_load_sample_series() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample/rate_series.csv");
        let series = load_series(path, SeriesKind::Rate, NoteId(1)).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.kind(), SeriesKind::Rate);
    }
}

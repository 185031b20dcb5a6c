//! Note lookup from CSV
//!
//! Expected header: `note_id,start_balance,start_date,start_rate`

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use super::{NoteId, NoteRecord, NoteTerms};
use crate::error::{AccrualError, Result};

/// Load all note records from a CSV file
pub fn load_note_records<P: AsRef<Path>>(path: P) -> Result<Vec<NoteRecord>> {
    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: NoteRecord = result?;
        records.push(record);
    }
    Ok(records)
}

/// Look up the terms of one note from a CSV file
pub fn load_note_terms<P: AsRef<Path>>(path: P, note_id: NoteId) -> Result<NoteTerms> {
    let file = File::open(path)?;
    find_note_terms(file, note_id)
}

/// Scan a CSV reader for `note_id` and return its validated terms.
///
/// Every row up to the match is fully deserialized before its id is
/// compared, so a malformed row earlier in the file fails the lookup even
/// when it belongs to another note. The `csv` error names the offending
/// record and line. Rows after the match are not parsed.
pub fn find_note_terms<R: Read>(reader: R, note_id: NoteId) -> Result<NoteTerms> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    for result in rdr.deserialize() {
        let record: NoteRecord = result?;
        if record.note_id == note_id {
            let terms = record.to_terms()?;
            debug!("Note {}: {}", note_id, terms);
            return Ok(terms);
        }
    }

    Err(AccrualError::NoteNotFound(note_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const NOTES_CSV: &str = "\
note_id,start_balance,start_date,start_rate
1,1000.00,2024-01-01,0.10
2,-5.00,2024-01-01,0.10
";

    #[test]
    fn test_find_note() {
        let terms = find_note_terms(NOTES_CSV.as_bytes(), NoteId(1)).unwrap();
        assert_eq!(terms.start_balance(), 1000.0);
        assert_eq!(terms.start_date(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert!((terms.start_rate() - 0.10).abs() < 1e-12);
    }

    #[test]
    fn test_missing_note() {
        let err = find_note_terms(NOTES_CSV.as_bytes(), NoteId(9)).unwrap_err();
        assert!(matches!(err, AccrualError::NoteNotFound(NoteId(9))));
    }

    #[test]
    fn test_invalid_note_rejected_at_lookup() {
        let err = find_note_terms(NOTES_CSV.as_bytes(), NoteId(2)).unwrap_err();
        assert!(matches!(err, AccrualError::InvalidTerms(_)));
    }

    #[test]
    fn test_malformed_row_before_match_fails_lookup() {
        let csv = "\
note_id,start_balance,start_date,start_rate
1,1000.00,not-a-date,0.10
2,500.00,2024-01-01,0.05
";
        let err = find_note_terms(csv.as_bytes(), NoteId(2)).unwrap_err();
        assert!(matches!(err, AccrualError::Csv(_)));
        assert!(err.to_string().contains("line: 2"));

        // A malformed row after the match is never read
        let csv_after = "\
note_id,start_balance,start_date,start_rate
2,500.00,2024-01-01,0.05
1,1000.00,not-a-date,0.10
";
        assert!(find_note_terms(csv_after.as_bytes(), NoteId(2)).is_ok());
    }

    #[test]
    fn test_load_sample_notes() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample/notes.csv");
        let records = load_note_records(path).unwrap();
        assert_eq!(records.len(), 3);

        let terms = load_note_terms(path, NoteId(3)).unwrap();
        assert_eq!(terms.start_date(), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    }

    #[test]
    fn test_missing_file() {
        let err = load_note_terms("does/not/exist.csv", NoteId(1)).unwrap_err();
        assert!(matches!(err, AccrualError::Io(_)));
    }
}

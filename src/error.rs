//! Error taxonomy for the accrual boundary
//!
//! The engine loop itself never fails; everything here is raised while
//! building or validating its inputs.

use chrono::NaiveDate;
use thiserror::Error;

use crate::note::NoteId;
use crate::series::SeriesKind;

#[derive(Error, Debug)]
pub enum AccrualError {
    #[error("[Terms] {0}")]
    InvalidTerms(String),

    #[error("[Series] {kind} series: {reason}")]
    MalformedSeries { kind: SeriesKind, reason: String },

    #[error("[Terms] accrual horizon too long: evaluation date {evaluation_date} is {days} days after start date {start_date}, limit is {limit}")]
    HorizonTooLong {
        start_date: NaiveDate,
        evaluation_date: NaiveDate,
        days: i64,
        limit: u32,
    },

    #[error("[Lookup] note {0} not found")]
    NoteNotFound(NoteId),

    #[error("[Csv] {0}")]
    Csv(#[from] csv::Error),

    #[error("[Io] {0}")]
    Io(#[from] std::io::Error),

    #[error("[Config] {0}")]
    Config(#[from] serde_json::Error),
}

impl AccrualError {
    pub fn invalid_terms(msg: impl Into<String>) -> Self {
        Self::InvalidTerms(msg.into())
    }

    pub fn malformed_series(kind: SeriesKind, reason: impl Into<String>) -> Self {
        Self::MalformedSeries {
            kind,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = core::result::Result<T, AccrualError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_series_message() {
        let err = AccrualError::malformed_series(SeriesKind::Rate, "dates not ascending");
        assert_eq!(format!("{}", err), "[Series] rate series: dates not ascending");
    }

    #[test]
    fn test_horizon_message() {
        let err = AccrualError::HorizonTooLong {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            evaluation_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            days: 31,
            limit: 30,
        };
        assert_eq!(
            err.to_string(),
            "[Terms] accrual horizon too long: evaluation date 2024-02-01 is 31 days after start date 2024-01-01, limit is 30"
        );
    }

    #[test]
    fn test_note_not_found_message() {
        let err = AccrualError::NoteNotFound(NoteId(7));
        assert_eq!(err.to_string(), "[Lookup] note 7 not found");
    }
}

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AccrualError, Result};

/// Identifier of a note in the backing store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub u32);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NoteId {
    fn from(id: u32) -> Self {
        NoteId(id)
    }
}

/// A note's state at disbursement
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NoteTerms {
    start_balance: f64,
    start_date: NaiveDate,
    start_rate: f64,
}

impl NoteTerms {
    /// Validated constructor.
    /// Rejects negative or non-finite balances and non-finite rates.
    pub fn new(start_balance: f64, start_date: NaiveDate, start_rate: f64) -> Result<Self> {
        if !start_balance.is_finite() {
            return Err(AccrualError::invalid_terms(format!(
                "start balance {} is not finite",
                start_balance
            )));
        }
        if start_balance < 0.0 {
            return Err(AccrualError::invalid_terms(format!(
                "start balance {:.2} is negative",
                start_balance
            )));
        }
        if !start_rate.is_finite() {
            return Err(AccrualError::invalid_terms(format!(
                "start rate {} is not finite",
                start_rate
            )));
        }

        Ok(Self {
            start_balance,
            start_date,
            start_rate,
        })
    }

    pub fn start_balance(&self) -> f64 {
        self.start_balance
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn start_rate(&self) -> f64 {
        self.start_rate
    }
}

impl fmt::Display for NoteTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "start balance {:.2}, start date {}, start rate {:.4}%",
            self.start_balance,
            self.start_date,
            self.start_rate * 100.0
        )
    }
}

/// Raw note row as read from CSV
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteRecord {
    pub note_id: NoteId,
    pub start_balance: f64,
    pub start_date: NaiveDate,
    pub start_rate: f64,
}

impl NoteRecord {
    pub fn to_terms(&self) -> Result<NoteTerms> {
        NoteTerms::new(self.start_balance, self.start_date, self.start_rate)
    }
}

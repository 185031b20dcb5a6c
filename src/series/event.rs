use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::note::NoteId;

/// Which attribute of a note a series replaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Balance,
    Rate,
}

impl SeriesKind {
    /// Format a value of this kind for display.
    /// Balances are amounts (2 d.p.), rates are percentages (4 d.p.)
    pub fn format_value(&self, value: f64) -> String {
        match self {
            SeriesKind::Balance => format!("{:.2}", value),
            SeriesKind::Rate => format!("{:.4}%", value * 100.0),
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesKind::Balance => write!(f, "balance"),
            SeriesKind::Rate => write!(f, "rate"),
        }
    }
}

/// A scheduled replacement of a balance or rate, effective at the start of `effective_date`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub new_value: f64,
    pub effective_date: NaiveDate,
}

impl ChangeEvent {
    pub fn new(new_value: f64, effective_date: NaiveDate) -> Self {
        Self { new_value, effective_date }
    }
}

/// One raw change row as read from a store.
/// Balance and rate sources share this layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRow {
    pub id: u32,
    pub note_id: NoteId,
    pub value: f64,
    pub effective_date: NaiveDate,
}

impl ChangeRow {
    pub fn to_event(&self) -> ChangeEvent {
        ChangeEvent::new(self.value, self.effective_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(SeriesKind::Balance.format_value(1234.5), "1234.50");
        assert_eq!(SeriesKind::Rate.format_value(0.0525), "5.2500%");
    }

    #[test]
    fn test_row_to_event() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let row = ChangeRow { id: 4, note_id: NoteId(1), value: 0.07, effective_date: date };
        assert_eq!(row.to_event(), ChangeEvent::new(0.07, date));
    }
}

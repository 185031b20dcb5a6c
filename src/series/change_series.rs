//! Ordered change-event series with a saturating cursor
//!
//! A series models a step function over dates: each event replaces the
//! attribute from its effective date on, and the last event extends
//! indefinitely. The cursor is a plain index owned by the caller, so a
//! series can be shared read-only between independent accrual runs.

use std::fmt;

use chrono::NaiveDate;
use log::debug;

use super::{ChangeEvent, ChangeRow, SeriesKind};
use crate::error::{AccrualError, Result};
use crate::note::NoteId;

#[derive(Debug, Clone, PartialEq)]
pub struct ChangeSeries {
    kind: SeriesKind,
    events: Vec<ChangeEvent>,
}

impl ChangeSeries {
    /// Build a series from events without validation.
    /// Events are used in the order given; the engine never sorts.
    pub fn new(kind: SeriesKind, events: Vec<ChangeEvent>) -> Self {
        Self { kind, events }
    }

    /// A series with no events, inert for the whole run
    pub fn empty(kind: SeriesKind) -> Self {
        Self::new(kind, Vec::new())
    }

    /// Filter raw rows down to one note, keeping read order, and reject
    /// series the engine could not consume correctly.
    ///
    /// Rejected:
    /// - non-finite values
    /// - dates that are not strictly ascending (this includes duplicates)
    pub fn from_rows(kind: SeriesKind, rows: &[ChangeRow], note_id: NoteId) -> Result<Self> {
        let events: Vec<ChangeEvent> = rows
            .iter()
            .filter(|row| row.note_id == note_id)
            .map(ChangeRow::to_event)
            .collect();

        let series = Self::new(kind, events);
        series.validate()?;

        debug!("Loaded {} {} events for note {}", series.len(), kind, note_id);
        Ok(series)
    }

    /// Check the ordering and value constraints the engine relies on
    pub fn validate(&self) -> Result<()> {
        if let Some(event) = self.events.iter().find(|e| !e.new_value.is_finite()) {
            return Err(AccrualError::malformed_series(
                self.kind,
                format!("non-finite value on {}", event.effective_date),
            ));
        }

        for pair in self.events.windows(2) {
            let (prev, next) = (pair[0].effective_date, pair[1].effective_date);
            if next == prev {
                return Err(AccrualError::malformed_series(
                    self.kind,
                    format!("duplicate effective date {}", next),
                ));
            }
            if next < prev {
                return Err(AccrualError::malformed_series(
                    self.kind,
                    format!("effective date {} follows later date {}", next, prev),
                ));
            }
        }

        Ok(())
    }

    pub fn kind(&self) -> SeriesKind {
        self.kind
    }

    pub fn events(&self) -> &[ChangeEvent] {
        &self.events
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChangeEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Whether the series has any event at all.
    /// An inactive series is never consulted by the engine.
    pub fn is_active(&self) -> bool {
        !self.events.is_empty()
    }

    /// Effective date of the event at `cursor`, or `None` past the end
    pub fn peek_date(&self, cursor: usize) -> Option<NaiveDate> {
        self.events.get(cursor).map(|e| e.effective_date)
    }

    /// New value of the event at `cursor`, or `None` past the end
    pub fn value_at(&self, cursor: usize) -> Option<f64> {
        self.events.get(cursor).map(|e| e.new_value)
    }

    /// Move the cursor forward by one, saturating at the last event
    pub fn advance(&self, cursor: usize) -> usize {
        if cursor + 1 < self.events.len() {
            cursor + 1
        } else {
            cursor
        }
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.events.first().map(|e| e.effective_date)
    }
}

impl fmt::Display for ChangeSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.events.is_empty() {
            return write!(f, "{} series: empty", self.kind);
        }
        writeln!(f, "{} series:", self.kind)?;
        for event in &self.events {
            writeln!(
                f,
                "  {:>14}  effective {}",
                self.kind.format_value(event.new_value),
                event.effective_date
            )?;
        }
        Ok(())
    }
}

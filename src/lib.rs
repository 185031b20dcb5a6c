//! Note Accrual - simple daily interest accrual for credit notes
//!
//! This library provides:
//! - Change-event series for scheduled balance and rate changes
//! - A day-stepping act/360 accrual engine
//! - CSV loaders for note terms and change rows
//! - Boundary validation for terms and series

pub mod error;
pub mod series;
pub mod note;
pub mod accrual;

// Re-export commonly used types
pub use error::{AccrualError, Result};
pub use series::{ChangeEvent, ChangeRow, ChangeSeries, SeriesKind};
pub use note::{NoteId, NoteTerms};
pub use accrual::{AccrualEngine, AccrualConfig, AccrualResult, AccrualState, Termination, DAY_FRACTION};

//! Accrual engine for a single note

mod state;
mod config;
mod engine;
mod result;

pub use state::AccrualState;
pub use config::AccrualConfig;
pub use engine::AccrualEngine;
pub use result::{AccrualResult, DailyAccrual, Termination};

// ============================================================================
// Day-count
// ============================================================================
// Simple daily accrual on an act/360 basis: every calendar day contributes
// exactly 1/360 of the annual rate, whatever the length of the year.

/// Days in the accrual year
pub const DAYS_PER_YEAR: f64 = 360.0;

/// Fraction of the annual rate accrued per calendar day
pub const DAY_FRACTION: f64 = 1.0 / DAYS_PER_YEAR;

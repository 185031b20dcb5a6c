//! Working state for one accrual run

use chrono::NaiveDate;
use serde::Serialize;

use super::DAY_FRACTION;
use crate::note::NoteTerms;

/// Balance, rate and date in effect, plus interest accrued so far.
/// Lives only for the duration of one engine run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccrualState {
    pub balance: f64,
    pub rate: f64,
    pub date: NaiveDate,
    pub cumulative_interest: f64,
}

impl AccrualState {
    /// Initial state at disbursement, nothing accrued
    pub fn from_terms(terms: &NoteTerms) -> Self {
        Self {
            balance: terms.start_balance(),
            rate: terms.start_rate(),
            date: terms.start_date(),
            cumulative_interest: 0.0,
        }
    }

    /// One day's interest on the balance and rate currently in effect
    pub fn daily_interest(&self) -> f64 {
        self.rate * self.balance * DAY_FRACTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_terms() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let terms = NoteTerms::new(1000.0, date, 0.10).unwrap();
        let state = AccrualState::from_terms(&terms);

        assert_eq!(state.balance, 1000.0);
        assert_eq!(state.rate, 0.10);
        assert_eq!(state.date, date);
        assert_eq!(state.cumulative_interest, 0.0);
    }

    #[test]
    fn test_daily_interest() {
        let state = AccrualState {
            balance: 36_000.0,
            rate: 0.05,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            cumulative_interest: 0.0,
        };
        // 36,000 × 5% / 360 = 5.00
        assert!((state.daily_interest() - 5.0).abs() < 1e-10);
    }
}

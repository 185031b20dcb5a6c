//! Accrual output structures

use chrono::NaiveDate;
use serde::Serialize;

use super::AccrualState;

/// Why the day loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Termination {
    /// The evaluation date was reached (or already passed at start)
    EvaluationDateReached,
    /// The balance became exactly zero before the evaluation date
    BalanceExhausted,
}

/// One accrued day.
/// `date` is the day the interest is for, so `cumulative_interest` equals an
/// evaluation as of `date`. `balance` and `rate` are the values the day's
/// interest was computed on, before any event effective on `date`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyAccrual {
    pub date: NaiveDate,
    pub balance: f64,
    pub rate: f64,
    pub interest: f64,
    pub cumulative_interest: f64,
}

/// Result of one accrual run
#[derive(Debug, Clone)]
pub struct AccrualResult {
    pub cumulative_interest: f64,
    pub final_state: AccrualState,
    pub days_accrued: u32,
    pub termination: Termination,
    /// Empty unless `detailed_output` was configured
    pub daily: Vec<DailyAccrual>,
}

impl AccrualResult {
    /// Interest accrued on each day, in order (detailed output only)
    pub fn daily_interest(&self) -> impl Iterator<Item = f64> + '_ {
        self.daily.iter().map(|d| d.interest)
    }
}

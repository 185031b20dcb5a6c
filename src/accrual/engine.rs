//! Day-stepping accrual engine
//!
//! Each iteration of the loop:
//! 1. accrues one day's interest on the balance and rate in effect
//! 2. moves the date forward one day
//! 3. applies a balance event dated on the new date, if any
//! 4. applies a rate event dated on the new date, if any
//!
//! Because the date moves before events are applied, the interest for an
//! event's effective date D is still accrued at the old values; the new
//! values apply from D+1 on.

use chrono::NaiveDate;
use log::{debug, info, trace, warn};

use super::{AccrualConfig, AccrualResult, AccrualState, DailyAccrual, Termination};
use crate::error::{AccrualError, Result};
use crate::note::NoteTerms;
use crate::series::ChangeSeries;

/// Accrual engine for single-note evaluations
#[derive(Debug, Clone, Default)]
pub struct AccrualEngine {
    config: AccrualConfig,
}

impl AccrualEngine {
    pub fn new(config: AccrualConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AccrualConfig {
        &self.config
    }

    /// Validate inputs at the boundary, then run the accrual.
    ///
    /// Rejected before the loop starts:
    /// - evaluation date before the note's start date
    /// - evaluation date beyond `max_accrual_days` from the start date
    /// - series that are unsorted, have duplicate dates or non-finite values
    /// - series whose first event is on or before the start date, since the
    ///   first date the loop can match is the day after start
    pub fn evaluate(
        &self,
        terms: &NoteTerms,
        balance_series: &ChangeSeries,
        rate_series: &ChangeSeries,
        evaluation_date: NaiveDate,
    ) -> Result<AccrualResult> {
        let start_date = terms.start_date();
        if evaluation_date < start_date {
            return Err(AccrualError::invalid_terms(format!(
                "start date {} is after evaluation date {}",
                start_date, evaluation_date
            )));
        }

        let days = (evaluation_date - start_date).num_days();
        if days > i64::from(self.config.max_accrual_days) {
            return Err(AccrualError::HorizonTooLong {
                start_date,
                evaluation_date,
                days,
                limit: self.config.max_accrual_days,
            });
        }

        for series in [balance_series, rate_series] {
            series.validate()?;
            if let Some(first) = series.first_date() {
                if first <= start_date {
                    return Err(AccrualError::malformed_series(
                        series.kind(),
                        format!("event on {} is not after start date {}", first, start_date),
                    ));
                }
            }
        }

        let result = self.run(terms, balance_series, rate_series, evaluation_date);
        info!(
            "Accrued {:.2} over {} days to {} ({:?})",
            result.cumulative_interest, result.days_accrued, result.final_state.date, result.termination
        );
        Ok(result)
    }

    /// Run the day loop on trusted inputs.
    ///
    /// Never fails: exhausted series saturate on their last event, and
    /// unsorted or stale events are simply never matched. Stops when the
    /// evaluation date is reached or the balance is exactly zero. An
    /// evaluation date before the start date accrues nothing.
    pub fn run(
        &self,
        terms: &NoteTerms,
        balance_series: &ChangeSeries,
        rate_series: &ChangeSeries,
        evaluation_date: NaiveDate,
    ) -> AccrualResult {
        let mut state = AccrualState::from_terms(terms);
        let mut bi = 0usize;
        let mut ri = 0usize;
        let mut days_accrued = 0u32;

        let mut daily = if self.config.detailed_output {
            let horizon = (evaluation_date - state.date).num_days().max(0);
            Vec::with_capacity(horizon as usize)
        } else {
            Vec::new()
        };

        // Day-aligned dates make `<` and `!=` equivalent for valid input;
        // `<` also stops a run whose evaluation date precedes the start.
        while state.date < evaluation_date && state.balance != 0.0 {
            let (balance, rate) = (state.balance, state.rate);
            let interest = state.daily_interest();
            state.cumulative_interest += interest;

            let Some(next) = state.date.succ_opt() else {
                break;
            };
            state.date = next;
            days_accrued += 1;

            trace!(
                "{}: balance {:.2} rate {:.4}% interest {:.6} cumulative {:.6}",
                state.date,
                balance,
                rate * 100.0,
                interest,
                state.cumulative_interest
            );

            // Rows are dated with the day the interest is for, before that
            // day's events are applied.
            if self.config.detailed_output {
                daily.push(DailyAccrual {
                    date: state.date,
                    balance,
                    rate,
                    interest,
                    cumulative_interest: state.cumulative_interest,
                });
            }

            if balance_series.is_active() && balance_series.peek_date(bi) == Some(state.date) {
                if let Some(value) = balance_series.value_at(bi) {
                    debug!("{}: balance {:.2} -> {:.2}", state.date, state.balance, value);
                    if value < 0.0 {
                        warn!("{}: balance change to negative value {:.2}", state.date, value);
                    }
                    state.balance = value;
                }
                bi = balance_series.advance(bi);
            }

            if rate_series.is_active() && rate_series.peek_date(ri) == Some(state.date) {
                if let Some(value) = rate_series.value_at(ri) {
                    debug!(
                        "{}: rate {:.4}% -> {:.4}%",
                        state.date,
                        state.rate * 100.0,
                        value * 100.0
                    );
                    state.rate = value;
                }
                ri = rate_series.advance(ri);
            }
        }

        let termination = if state.date >= evaluation_date {
            Termination::EvaluationDateReached
        } else {
            Termination::BalanceExhausted
        };

        AccrualResult {
            cumulative_interest: state.cumulative_interest,
            final_state: state,
            days_accrued,
            termination,
            daily,
        }
    }
}

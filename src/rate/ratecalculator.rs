use chrono::NaiveDate;

use thiserror::Error;

use crate::series::accrualseries::AccrualSeries;
use crate::series::dailyobservation::DAY_COUNT_BASIS;
use crate::time::businessdaycalendar::{
    DateNotFoundError,
    ResolveDirection
};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RateError {
    #[error(transparent)]
    DateNotFound(#[from] DateNotFoundError),
    #[error("accrual window from {d0} to {d1} has no positive elapsed days")]
    NonPositiveWindow { d0: NaiveDate, d1: NaiveDate }
}

/// The two accrual conventions over one joined series, plus a diagnostic
/// variant.
///
/// `rate_compounded` and `rate_indexed` are independently published ground
/// truths for the same economic quantity; `rate_clean_indexed` rebuilds
/// the index from the unrounded daily factors to show whether a
/// disagreement stems from the published index's own rounding rather than
/// the accrual method.
pub struct RateCalculator;

impl RateCalculator {
    /// Compounded accrual rate over `[d0, d1)`.
    ///
    /// The window of daily factors runs from `d0` through the business
    /// date one slot before the Following-resolution of `d1`: an overnight
    /// rate observed on date X settles the next business day, so the
    /// coupon date itself never accrues.
    pub fn rate_compounded(series: &AccrualSeries,
                           d0: NaiveDate,
                           d1: NaiveDate) -> Result<f64, RateError> {
        let accrual_days = Self::accrual_days(d0, d1)?;
        let calendar = series.calendar();
        let start = calendar.position_of(d0)?;
        let window_end = calendar.resolve(d1, ResolveDirection::Following, -1)?;
        let end = calendar.position_of(window_end)?;
        let compound_factor = Self::compound_factor(series, start, end)?;
        Ok((compound_factor - 1.0) * DAY_COUNT_BASIS / accrual_days)
    }

    /// Index-ratio accrual rate over `[d0, d1)`. Both dates must be
    /// listed on the calendar and carry a published index value.
    pub fn rate_indexed(series: &AccrualSeries,
                        d0: NaiveDate,
                        d1: NaiveDate) -> Result<f64, RateError> {
        let accrual_days = Self::accrual_days(d0, d1)?;
        let index0 = Self::published_index(series, d0)?;
        let index1 = Self::published_index(series, d1)?;
        Ok((index1 / index0 - 1.0) * DAY_COUNT_BASIS / accrual_days)
    }

    /// Index-ratio rate against a synthetic, unrounded index at `d0`:
    /// the cumulative product of daily factors from the overnight series'
    /// first covered date through the business date preceding `d0`.
    pub fn rate_clean_indexed(series: &AccrualSeries,
                              d0: NaiveDate,
                              d1: NaiveDate) -> Result<f64, RateError> {
        let accrual_days = Self::accrual_days(d0, d1)?;
        let calendar = series.calendar();
        let start = series
            .first_overnight_position()
            .ok_or(DateNotFoundError(d0))?;
        let window_end = calendar.resolve(d0, ResolveDirection::Following, -1)?;
        let end = calendar.position_of(window_end)?;
        let synthetic_index = Self::compound_factor(series, start, end)?;
        let index1 = Self::published_index(series, d1)?;
        Ok((index1 / synthetic_index - 1.0) * DAY_COUNT_BASIS / accrual_days)
    }

    /// Published index value at an exactly-listed calendar date. A listed
    /// date without an index value is outside the index series' coverage.
    fn published_index(series: &AccrualSeries, date: NaiveDate) -> Result<f64, RateError> {
        let position = series.calendar().position_of(date)?;
        let value = series
            .observation_at(position)
            .and_then(|observation| observation.index_value())
            .ok_or(DateNotFoundError(date))?;
        Ok(value)
    }

    fn accrual_days(d0: NaiveDate, d1: NaiveDate) -> Result<f64, RateError> {
        // elapsed calendar days, not business days; d0 < d1 also keeps
        // every division below away from zero
        let days = (d1 - d0).num_days();
        if days <= 0 {
            Err(RateError::NonPositiveWindow { d0, d1 })
        } else {
            Ok(days as f64)
        }
    }

    /// Cumulative product of the daily factors at positions
    /// `[start, end]` inclusive (empty windows multiply to 1). A date
    /// without a defined factor is outside the overnight series'
    /// coverage.
    fn compound_factor(series: &AccrualSeries,
                       start: usize,
                       end: usize) -> Result<f64, RateError> {
        let mut compound_factor = 1.0_f64;
        if start > end {
            return Ok(compound_factor);
        }
        for observation in &series.observations()[start..=end] {
            compound_factor *= observation
                .daily_accrual_factor()
                .ok_or(DateNotFoundError(observation.date()))?;
        }
        Ok(compound_factor)
    }
}

use thiserror::Error;
use tracing::debug;

use crate::series::accrualseries::AccrualSeries;
use crate::series::dailyobservation::DailyObservation;
use crate::series::rateseries::{
    RateSeries,
    SeriesKind
};
use crate::time::businessdaycalendar::BusinessDayCalendar;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SeriesBuildError {
    #[error("the {0} series is empty")]
    MissingSeries(SeriesKind)
}

/// Joins the overnight-rate and index series onto one calendar.
///
/// The calendar is the union of both series' dates (outer join: a date
/// listed in either series becomes a calendar date, with the other field
/// left absent). Every date except the last gets the elapsed-day count to
/// the next listed date, from which its daily accrual factor derives.
pub struct AccrualSeriesBuilder;

impl AccrualSeriesBuilder {
    pub fn build(overnight: &RateSeries,
                 index: &RateSeries) -> Result<AccrualSeries, SeriesBuildError> {
        if overnight.is_empty() {
            return Err(SeriesBuildError::MissingSeries(SeriesKind::OvernightRate));
        }
        if index.is_empty() {
            return Err(SeriesBuildError::MissingSeries(SeriesKind::CompoundedIndex));
        }

        let calendar = BusinessDayCalendar::new(
            overnight.dates().chain(index.dates()).collect()
        );
        let dates = calendar.dates();
        let observations: Vec<DailyObservation> = dates
            .iter()
            .enumerate()
            .map(|(position, &date)| {
                let days_to_next = dates
                    .get(position + 1)
                    .map(|next| (*next - date).num_days());
                DailyObservation::new(date,
                                      overnight.get(date),
                                      index.get(date),
                                      days_to_next)
            })
            .collect();

        debug!(calendar_days = calendar.len(),
               overnight_days = overnight.len(),
               index_days = index.len(),
               "joined input series onto the business day calendar");
        Ok(AccrualSeries::new(calendar, observations))
    }
}

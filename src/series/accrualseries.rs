use chrono::NaiveDate;

use crate::series::dailyobservation::DailyObservation;
use crate::time::businessdaycalendar::BusinessDayCalendar;

/// The joined calendar and its per-day observations, in calendar order.
/// Owned by a single reconciliation run and never mutated after
/// construction; see `AccrualSeriesBuilder`.
#[derive(Debug, Clone, PartialEq)]
pub struct AccrualSeries {
    calendar: BusinessDayCalendar,
    observations: Vec<DailyObservation>
}

impl AccrualSeries {
    pub(crate) fn new(calendar: BusinessDayCalendar,
                      observations: Vec<DailyObservation>) -> AccrualSeries {
        debug_assert_eq!(calendar.len(), observations.len());
        AccrualSeries { calendar, observations }
    }

    pub fn calendar(&self) -> &BusinessDayCalendar {
        &self.calendar
    }

    pub fn observations(&self) -> &[DailyObservation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observation_at(&self, position: usize) -> Option<&DailyObservation> {
        self.observations.get(position)
    }

    pub fn observation_for(&self, date: NaiveDate) -> Option<&DailyObservation> {
        let position = self.calendar.position_of(date).ok()?;
        self.observations.get(position)
    }

    /// Position of the first observation carrying an overnight rate, i.e.
    /// the start of the overnight series' coverage on this calendar.
    pub fn first_overnight_position(&self) -> Option<usize> {
        self.observations
            .iter()
            .position(|o| o.overnight_rate_percent().is_some())
    }
}

use chrono::NaiveDate;

/// Day count basis shared by both accrual conventions.
pub const DAY_COUNT_BASIS: f64 = 360.0;

/// One calendar entry of the joined series. Either published value may be
/// absent outside its own series' coverage; the daily accrual factor is
/// only defined where both the overnight rate and the distance to the
/// next listed date are known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyObservation {
    date: NaiveDate,
    overnight_rate_percent: Option<f64>,
    index_value: Option<f64>,
    days_to_next: Option<i64>,
    daily_accrual_factor: Option<f64>
}

impl DailyObservation {
    pub fn new(date: NaiveDate,
               overnight_rate_percent: Option<f64>,
               index_value: Option<f64>,
               days_to_next: Option<i64>) -> DailyObservation {
        // factor = 1 + rate% / 100 * elapsed days / basis; an overnight
        // fixing spanning a weekend accrues for every elapsed calendar day
        let daily_accrual_factor = match (overnight_rate_percent, days_to_next) {
            (Some(rate), Some(days)) => {
                Some(1.0 + rate * (days as f64) / (DAY_COUNT_BASIS * 100.0))
            },
            _ => None
        };
        DailyObservation {
            date,
            overnight_rate_percent,
            index_value,
            days_to_next,
            daily_accrual_factor
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn overnight_rate_percent(&self) -> Option<f64> {
        self.overnight_rate_percent
    }

    pub fn index_value(&self) -> Option<f64> {
        self.index_value
    }

    pub fn days_to_next(&self) -> Option<i64> {
        self.days_to_next
    }

    pub fn daily_accrual_factor(&self) -> Option<f64> {
        self.daily_accrual_factor
    }
}

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

use serde::{
    Serialize,
    Deserialize
};

/// Which of the two published series a value belongs to.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum SeriesKind {
    /// The daily overnight rate, in percent.
    OvernightRate,
    /// The published cumulative compounding index.
    CompoundedIndex
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesKind::OvernightRate => write!(f, "overnight rate"),
            SeriesKind::CompoundedIndex => write!(f, "compounded index")
        }
    }
}

/// A published daily series keyed by effective date, ascending. Calendar
/// gaps are exactly the non-business days; no uniform spacing is assumed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateSeries {
    observations: BTreeMap<NaiveDate, f64>
}

impl RateSeries {
    pub fn new() -> RateSeries {
        RateSeries { observations: BTreeMap::new() }
    }

    pub fn from_observations(observations: Vec<(NaiveDate, f64)>) -> RateSeries {
        RateSeries { observations: observations.into_iter().collect() }
    }

    pub fn insert(&mut self, date: NaiveDate, value: f64) {
        self.observations.insert(date, value);
    }

    pub fn get(&self, date: NaiveDate) -> Option<f64> {
        self.observations.get(&date).copied()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.observations.keys().copied()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.observations.keys().next().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.observations.keys().next_back().copied()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn keeps_observations_ordered_by_date() {
        let series = RateSeries::from_observations(vec![
            (d(2023, 1, 5), 4.99),
            (d(2023, 1, 2), 5.00),
            (d(2023, 1, 3), 5.01)
        ]);
        let dates: Vec<NaiveDate> = series.dates().collect();
        assert_eq!(dates, vec![d(2023, 1, 2), d(2023, 1, 3), d(2023, 1, 5)]);
        assert_eq!(series.first_date(), Some(d(2023, 1, 2)));
        assert_eq!(series.last_date(), Some(d(2023, 1, 5)));
        assert_eq!(series.get(d(2023, 1, 3)), Some(5.01));
        assert_eq!(series.get(d(2023, 1, 4)), None);
    }

    #[test]
    fn later_insert_overwrites_same_date() {
        let mut series = RateSeries::new();
        series.insert(d(2023, 1, 2), 5.00);
        series.insert(d(2023, 1, 2), 5.02);
        assert_eq!(series.len(), 1);
        assert_eq!(series.get(d(2023, 1, 2)), Some(5.02));
    }
}

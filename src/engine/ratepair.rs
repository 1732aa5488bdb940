use chrono::NaiveDate;

/// Both accrual rates computed for one ordered date pair `(d0, d1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatePair {
    d0: NaiveDate,
    d1: NaiveDate,
    days_accrued: i64,
    rate_compounded: f64,
    rate_indexed: f64,
    rate_clean_indexed: Option<f64>
}

impl RatePair {
    pub fn new(d0: NaiveDate,
               d1: NaiveDate,
               days_accrued: i64,
               rate_compounded: f64,
               rate_indexed: f64,
               rate_clean_indexed: Option<f64>) -> RatePair {
        RatePair {
            d0,
            d1,
            days_accrued,
            rate_compounded,
            rate_indexed,
            rate_clean_indexed
        }
    }

    pub fn d0(&self) -> NaiveDate {
        self.d0
    }

    pub fn d1(&self) -> NaiveDate {
        self.d1
    }

    pub fn days_accrued(&self) -> i64 {
        self.days_accrued
    }

    pub fn rate_compounded(&self) -> f64 {
        self.rate_compounded
    }

    pub fn rate_indexed(&self) -> f64 {
        self.rate_indexed
    }

    pub fn rate_clean_indexed(&self) -> Option<f64> {
        self.rate_clean_indexed
    }
}
